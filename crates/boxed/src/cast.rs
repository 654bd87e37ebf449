// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Explicit Conversions
//!
//! The only ways to move a value across a tag or primitive-type boundary:
//!
//! 1. [`Boxed::as_`]: numeric cast of the contained value to a bare
//!    primitive or to any boxed type.
//! 2. [`cast_between`] / [`Boxed::cast_from`]: re-tag a bare or boxed value,
//!    casting the primitive when the types differ.
//! 3. [`unbox`] / [`unbox_as`]: extract the bare value, optionally cast.
//!
//! All three use Rust `as` semantics (via `num_traits::AsPrimitive`): integer
//! narrowing truncates, float-to-integer saturates and maps NaN to zero, and
//! nothing is checked at runtime. [`Boxed::try_cast_from`] is the
//! range-checked alternative.
//!
//! ```rust
//! use boxed::{Boxed, cast_between, unbox, unbox_as};
//!
//! enum FromTag {}
//! enum ToTag {}
//! type From = Boxed<usize, FromTag>;
//! type To = Boxed<usize, ToTag>;
//!
//! let f = From::new(3);
//! let t: To = cast_between(f);
//! assert_eq!(t, To::cast_from(f));
//! assert_eq!(f.as_::<To>(), t);
//! assert_eq!(unbox(t), 3usize);
//! assert_eq!(unbox_as::<i32, _, _>(t), 3i32);
//! ```

use crate::boxed::Boxed;
use num_traits::{AsPrimitive, NumCast, ToPrimitive};

/// A value that holds exactly one primitive: either the primitive itself or
/// a [`Boxed`] wrapper around it.
///
/// This is what lets the conversion functions accept "bare or boxed" sources
/// and produce "bare or boxed" targets through a single signature.
pub trait Scalar: Copy {
    /// The underlying primitive type.
    type Inner: Copy + 'static;

    /// Builds `Self` from its primitive.
    fn from_raw(raw: Self::Inner) -> Self;

    /// Returns the primitive held by `self`.
    fn to_raw(self) -> Self::Inner;
}

macro_rules! impl_scalar_for_primitive {
    ($($t:ty),+) => {
        $(
            impl Scalar for $t {
                type Inner = $t;

                #[inline(always)]
                fn from_raw(raw: $t) -> Self {
                    raw
                }

                #[inline(always)]
                fn to_raw(self) -> $t {
                    self
                }
            }
        )+
    };
}

impl_scalar_for_primitive!(u8, u16, u32, u64, u128, usize);
impl_scalar_for_primitive!(i8, i16, i32, i64, i128, isize);
impl_scalar_for_primitive!(f32, f64);

impl<T, Tag> Scalar for Boxed<T, Tag>
where
    T: Copy + 'static,
{
    type Inner = T;

    #[inline(always)]
    fn from_raw(raw: T) -> Self {
        Self::new(raw)
    }

    #[inline(always)]
    fn to_raw(self) -> T {
        self.into_inner()
    }
}

impl<T, Tag> Boxed<T, Tag>
where
    T: Copy + 'static,
{
    /// Casts the contained value to `To`, which may be a bare primitive or
    /// another boxed type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use boxed::Boxed;
    ///
    /// enum RatioTag {}
    /// enum PercentTag {}
    ///
    /// let r = Boxed::<f64, RatioTag>::new(3.25);
    /// assert_eq!(r.as_::<i32>(), 3);
    /// assert_eq!(r.as_::<Boxed<u8, PercentTag>>().get(), 3);
    /// ```
    #[inline(always)]
    pub fn as_<To>(&self) -> To
    where
        To: Scalar,
        T: AsPrimitive<To::Inner>,
    {
        To::from_raw(self.get().as_())
    }

    /// Re-tags `source` as `Self`, casting the primitive if necessary.
    ///
    /// `source` may be a bare primitive or a boxed value with any tag.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use boxed::Boxed;
    ///
    /// enum NaturalTag {}
    /// enum IntegerTag {}
    /// type N = Boxed<u32, NaturalTag>;
    /// type Z = Boxed<i32, IntegerTag>;
    ///
    /// assert_eq!(Z::cast_from(N::new(3)), Z::new(3));
    /// assert_eq!(Z::cast_from(7u8), Z::new(7));
    /// // Narrowing is not checked.
    /// assert_eq!(Z::cast_from(N::new(u32::MAX)), Z::new(-1));
    /// ```
    #[inline(always)]
    pub fn cast_from<S>(source: S) -> Self
    where
        S: Scalar,
        S::Inner: AsPrimitive<T>,
    {
        Self::new(source.to_raw().as_())
    }

    /// Re-tags `source` as `Self` if its value is representable in `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use boxed::Boxed;
    ///
    /// enum NaturalTag {}
    /// enum ByteTag {}
    ///
    /// let small = Boxed::<u32, NaturalTag>::new(200);
    /// let large = Boxed::<u32, NaturalTag>::new(300);
    /// assert_eq!(Boxed::<u8, ByteTag>::try_cast_from(small).map(|b| b.get()), Some(200));
    /// assert_eq!(Boxed::<u8, ByteTag>::try_cast_from(large), None);
    /// ```
    #[inline]
    pub fn try_cast_from<S>(source: S) -> Option<Self>
    where
        S: Scalar,
        S::Inner: ToPrimitive,
        T: NumCast,
    {
        <T as NumCast>::from(source.to_raw()).map(Self::new)
    }
}

/// Re-tags `source` as the boxed type `Boxed<U, ToTag>`.
///
/// Free-function form of [`Boxed::cast_from`]; the target is usually inferred.
#[inline(always)]
pub fn cast_between<U, ToTag, S>(source: S) -> Boxed<U, ToTag>
where
    U: Copy + 'static,
    S: Scalar,
    S::Inner: AsPrimitive<U>,
{
    Boxed::cast_from(source)
}

/// Extracts the bare value of `source` unchanged.
#[inline(always)]
pub fn unbox<T, Tag>(source: Boxed<T, Tag>) -> T {
    source.into_inner()
}

/// Extracts the bare value of `source` cast to `To`.
///
/// # Examples
///
/// ```rust
/// # use boxed::{Boxed, unbox_as};
///
/// enum SpeedTag {}
/// let c = Boxed::<f64, SpeedTag>::new(299_792_458.0);
/// assert_eq!(unbox_as::<f32, _, _>(c), 299_792_458.0f32);
/// assert_eq!(unbox_as::<i32, _, _>(c), 299_792_458);
/// ```
#[inline(always)]
pub fn unbox_as<To, T, Tag>(source: Boxed<T, Tag>) -> To
where
    To: Copy + 'static,
    T: AsPrimitive<To>,
{
    source.into_inner().as_()
}
