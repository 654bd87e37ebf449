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

//! # Phantom-Tagged Primitive Values (Zero-Cost)
//!
//! `Boxed<T, Tag>` wraps a single primitive value `T` and carries a tag type
//! `Tag` that exists only at the type level. Two boxed types with the same
//! primitive but different tags are unrelated types: they cannot be assigned,
//! compared, or combined with each other without an explicit, named cast.
//!
//! ## Highlights
//!
//! - Explicit construction via [`Boxed::new`]; there is no `From<T>` impl.
//! - Access via [`Boxed::get`], [`Boxed::get_mut`], `Deref`, and the consuming
//!   [`Boxed::into_inner`].
//! - Comparison, hashing, formatting and parsing delegate to `T` unchanged.
//! - Prefix/postfix increment and decrement.
//! - Zero-cost: `#[repr(transparent)]` over `T`. The tag is stored as
//!   `PhantomData<fn() -> Tag>`, so it never affects `Send`/`Sync` and places
//!   no trait requirements on the tag type.
//!
//! ## Usage
//!
//! ```rust
//! use boxed::Boxed;
//!
//! enum LengthTag {}
//! type Length = Boxed<usize, LengthTag>;
//!
//! let mut l = Length::new(2);
//! l.increment();
//! assert_eq!(l, Length::new(3));
//! assert_eq!(format!("{}", l), "3");
//! assert_eq!(format!("{:?}", l), "LengthTag(3)");
//! ```
//!
//! Values with different tags do not mix:
//!
//! ```compile_fail
//! use boxed::Boxed;
//!
//! enum FromTag {}
//! enum ToTag {}
//!
//! let from = Boxed::<usize, FromTag>::new(2);
//! let to: Boxed<usize, ToTag> = from;
//! ```
//!
//! ```compile_fail
//! use boxed::Boxed;
//!
//! enum FromTag {}
//! enum ToTag {}
//!
//! let same = Boxed::<usize, FromTag>::new(2) == Boxed::<usize, ToTag>::new(2);
//! ```
//!
//! Nor is a bare primitive ever accepted in place of a boxed one:
//!
//! ```compile_fail
//! use boxed::Boxed;
//!
//! enum LengthTag {}
//! fn takes(_: Boxed<usize, LengthTag>) {}
//!
//! takes(3usize);
//! ```

use crate::num::constants::{PlusOne, Zero};
use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
    ops::{AddAssign, Deref, Not, SubAssign},
    str::FromStr,
};

/// A primitive value `T` given a distinct type by the marker `Tag`.
///
/// # Examples
///
/// ```rust
/// # use boxed::Boxed;
///
/// enum SpeedTag {}
/// type Speed = Boxed<f64, SpeedTag>;
///
/// let c = Speed::new(299_792_458.0);
/// assert_eq!(c.get(), 299_792_458.0);
/// assert_eq!(c.to_string(), "299792458");
/// ```
#[repr(transparent)]
pub struct Boxed<T, Tag> {
    value: T,
    _tag: PhantomData<fn() -> Tag>,
}

impl<T, Tag> Boxed<T, Tag> {
    /// Wraps `value` in the tag `Tag`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use boxed::Boxed;
    ///
    /// enum CountTag {}
    /// let count = Boxed::<u32, CountTag>::new(5);
    /// assert_eq!(count.get(), 5);
    /// ```
    #[inline(always)]
    pub const fn new(value: T) -> Self {
        Self {
            value,
            _tag: PhantomData,
        }
    }

    /// Returns a mutable reference to the contained value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use boxed::Boxed;
    ///
    /// enum RatioTag {}
    /// let mut r = Boxed::<f64, RatioTag>::new(2.781);
    /// *r.get_mut() += 1.0;
    /// assert_eq!(r.get(), 3.781);
    /// ```
    #[inline(always)]
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Consumes the wrapper and returns the bare value.
    ///
    /// This is the only way a boxed value turns back into an untagged one;
    /// [`unbox`](crate::unbox) is a free-function spelling of the same thing.
    #[inline(always)]
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, Tag> Boxed<T, Tag>
where
    T: Copy,
{
    /// Returns a copy of the contained value.
    #[inline(always)]
    pub const fn get(&self) -> T {
        self.value
    }
}

impl<T, Tag> Boxed<T, Tag>
where
    T: Zero,
{
    /// The boxed zero value.
    pub const ZERO: Self = Self::new(T::ZERO);
}

impl<T, Tag> Boxed<T, Tag>
where
    T: PlusOne,
{
    /// The boxed unit value.
    pub const ONE: Self = Self::new(T::PLUS_ONE);
}

impl<T, Tag> Boxed<T, Tag>
where
    T: Zero + PartialEq,
{
    /// Checks if the contained value is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use boxed::Boxed;
    ///
    /// enum OffsetTag {}
    /// assert!(Boxed::<i16, OffsetTag>::new(0).is_zero());
    /// assert!(!Boxed::<i16, OffsetTag>::new(-4).is_zero());
    /// ```
    #[inline(always)]
    pub fn is_zero(&self) -> bool {
        self.value == T::ZERO
    }
}

impl<T, Tag> Boxed<T, Tag>
where
    T: Copy + PlusOne + AddAssign,
{
    /// Adds one to the contained value and returns the updated wrapper.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use boxed::Boxed;
    ///
    /// enum LengthTag {}
    /// type Length = Boxed<usize, LengthTag>;
    ///
    /// let mut l = Length::new(2);
    /// assert_eq!(*l.increment(), Length::new(3));
    /// ```
    #[inline]
    pub fn increment(&mut self) -> &mut Self {
        self.value += T::PLUS_ONE;
        self
    }

    /// Adds one to the contained value and returns the value it had before.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use boxed::Boxed;
    ///
    /// enum LengthTag {}
    /// type Length = Boxed<usize, LengthTag>;
    ///
    /// let mut l = Length::new(3);
    /// assert_eq!(l.post_increment(), Length::new(3));
    /// assert_eq!(l, Length::new(4));
    /// ```
    #[inline]
    pub fn post_increment(&mut self) -> Self {
        let previous = *self;
        self.value += T::PLUS_ONE;
        previous
    }
}

impl<T, Tag> Boxed<T, Tag>
where
    T: Copy + PlusOne + SubAssign,
{
    /// Subtracts one from the contained value and returns the updated wrapper.
    #[inline]
    pub fn decrement(&mut self) -> &mut Self {
        self.value -= T::PLUS_ONE;
        self
    }

    /// Subtracts one from the contained value and returns the value it had before.
    #[inline]
    pub fn post_decrement(&mut self) -> Self {
        let previous = *self;
        self.value -= T::PLUS_ONE;
        previous
    }
}

impl<T, Tag> Clone for Boxed<T, Tag>
where
    T: Clone,
{
    #[inline(always)]
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<T, Tag> Copy for Boxed<T, Tag> where T: Copy {}

impl<T, Tag> Default for Boxed<T, Tag>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T, Tag> PartialEq for Boxed<T, Tag>
where
    T: PartialEq,
{
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T, Tag> Eq for Boxed<T, Tag> where T: Eq {}

impl<T, Tag> PartialOrd for Boxed<T, Tag>
where
    T: PartialOrd,
{
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<T, Tag> Ord for Boxed<T, Tag>
where
    T: Ord,
{
    #[inline(always)]
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

// Feeds the hasher exactly what `T` does, so `hash(Boxed(x)) == hash(x)`.
impl<T, Tag> Hash for Boxed<T, Tag>
where
    T: Hash,
{
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T, Tag> Deref for Boxed<T, Tag> {
    type Target = T;

    #[inline(always)]
    fn deref(&self) -> &T {
        &self.value
    }
}

/// Logical negation: `!boxed` is `true` exactly when the value is zero.
impl<T, Tag> Not for Boxed<T, Tag>
where
    T: Zero + PartialEq,
{
    type Output = bool;

    #[inline(always)]
    fn not(self) -> bool {
        self.is_zero()
    }
}

impl<T, Tag> FromStr for Boxed<T, Tag>
where
    T: FromStr,
{
    type Err = T::Err;

    /// Parses the textual form of `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use boxed::Boxed;
    ///
    /// enum PortTag {}
    /// let port: Boxed<u16, PortTag> = "8080".parse().unwrap();
    /// assert_eq!(port.get(), 8080);
    /// assert!("70000".parse::<Boxed<u16, PortTag>>().is_err());
    /// ```
    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self::new)
    }
}

/// Short, human-readable name of a tag: the last path segment of its type
/// name, without generic arguments.
fn tag_name<Tag>() -> &'static str {
    let full = std::any::type_name::<Tag>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

impl<T, Tag> fmt::Debug for Boxed<T, Tag>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(tag_name::<Tag>()).field(&self.value).finish()
    }
}

macro_rules! impl_fmt_passthrough {
    ($($fmt_trait:ident),+) => {
        $(
            impl<T, Tag> fmt::$fmt_trait for Boxed<T, Tag>
            where
                T: fmt::$fmt_trait,
            {
                #[inline]
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::$fmt_trait::fmt(&self.value, f)
                }
            }
        )+
    };
}

impl_fmt_passthrough!(Display, LowerHex, UpperHex, Octal, Binary, LowerExp, UpperExp);

#[cfg(feature = "serde")]
impl<T, Tag> serde::Serialize for Boxed<T, Tag>
where
    T: serde::Serialize,
{
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.value.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T, Tag> serde::Deserialize<'de> for Boxed<T, Tag>
where
    T: serde::Deserialize<'de>,
{
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Self::new)
    }
}


#[cfg(test)]
mod proptests {
    use super::Boxed;
    use proptest::prelude::*;

    enum TestTag {}
    type Value = Boxed<i64, TestTag>;

    proptest! {
        /// Wrapping and unwrapping never changes the value.
        #[test]
        fn roundtrip_new_into_inner(v in any::<i64>()) {
            prop_assert_eq!(Value::new(v).into_inner(), v);
            let b = Value::new(v);
            prop_assert_eq!(Value::new(b.get()), b);
        }

        /// Ordering is exactly the ordering of the contained values.
        #[test]
        fn order_matches_inner(a in any::<i64>(), b in any::<i64>()) {
            prop_assert_eq!(Value::new(a) < Value::new(b), a < b);
            prop_assert_eq!(Value::new(a) == Value::new(b), a == b);
            prop_assert_eq!(Value::new(a).cmp(&Value::new(b)), a.cmp(&b));
        }

        /// Transitivity of `<` carries over from the primitive.
        #[test]
        fn order_is_transitive(a in any::<i64>(), b in any::<i64>(), c in any::<i64>()) {
            let (x, y, z) = (Value::new(a), Value::new(b), Value::new(c));
            prop_assert!(!(x < x));
            if x < y && y < z {
                prop_assert!(x < z);
            }
        }

        /// Display and parse agree with the primitive.
        #[test]
        fn text_matches_inner(v in any::<i64>()) {
            let text = Value::new(v).to_string();
            prop_assert_eq!(&text, &v.to_string());
            prop_assert_eq!(text.parse::<Value>().unwrap(), Value::new(v));
        }
    }
}
