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

//! # Numeric Limits
//!
//! [`NumericLimits`] exposes the sentinel values of a numeric type as
//! associated constants. It is implemented for every primitive integer and
//! float, and for `Boxed<T, Tag>` whenever `T` implements it, in which case
//! every sentinel is the primitive's sentinel re-wrapped in the same tag.
//!
//! Sentinels a type does not have (an integer has no infinity) are `None`.
//!
//! The `num_traits::{Bounded, Zero, One}` traits are forwarded as well, so
//! boxed values plug into code written against `num_traits`.

use crate::boxed::Boxed;

/// Sentinel values of a numeric type.
///
/// `MIN` is the most negative finite value, as in Rust's `<T>::MIN`; for
/// floats that is the same as `LOWEST`. The smallest positive normal float
/// is `MIN_POSITIVE`.
///
/// # Examples
///
/// ```rust
/// # use boxed::{Boxed, NumericLimits};
///
/// enum SpeedTag {}
/// type Speed = Boxed<f64, SpeedTag>;
///
/// assert_eq!(Speed::MAX, Speed::new(f64::MAX));
/// assert_eq!(Speed::EPSILON, Some(Speed::new(f64::EPSILON)));
/// assert!(Speed::NAN.unwrap().get().is_nan());
/// assert_eq!(<Boxed<u8, SpeedTag> as NumericLimits>::INFINITY, None);
/// ```
pub trait NumericLimits: Copy {
    /// `true` for the integer types.
    const IS_INTEGER: bool;
    /// `true` if the type can hold negative values.
    const IS_SIGNED: bool;

    /// The smallest finite value.
    const MIN: Self;
    /// The largest finite value.
    const MAX: Self;
    /// The most negative finite value.
    const LOWEST: Self;

    /// The difference between 1 and the next representable value.
    const EPSILON: Option<Self>;
    /// The largest rounding error of the type's arithmetic.
    const ROUND_ERROR: Option<Self>;
    /// The smallest positive normal value.
    const MIN_POSITIVE: Option<Self>;
    /// The smallest positive subnormal value.
    const DENORM_MIN: Option<Self>;
    /// Positive infinity.
    const INFINITY: Option<Self>;
    /// Negative infinity.
    const NEG_INFINITY: Option<Self>;
    /// A quiet NaN.
    const NAN: Option<Self>;
}

macro_rules! impl_limits_integer {
    ($signed:expr => $($t:ty),+) => {
        $(
            impl NumericLimits for $t {
                const IS_INTEGER: bool = true;
                const IS_SIGNED: bool = $signed;

                const MIN: Self = <$t>::MIN;
                const MAX: Self = <$t>::MAX;
                const LOWEST: Self = <$t>::MIN;

                const EPSILON: Option<Self> = None;
                const ROUND_ERROR: Option<Self> = None;
                const MIN_POSITIVE: Option<Self> = None;
                const DENORM_MIN: Option<Self> = None;
                const INFINITY: Option<Self> = None;
                const NEG_INFINITY: Option<Self> = None;
                const NAN: Option<Self> = None;
            }
        )+
    };
}

macro_rules! impl_limits_float {
    ($($t:ident),+) => {
        $(
            impl NumericLimits for $t {
                const IS_INTEGER: bool = false;
                const IS_SIGNED: bool = true;

                const MIN: Self = $t::MIN;
                const MAX: Self = $t::MAX;
                const LOWEST: Self = $t::MIN;

                const EPSILON: Option<Self> = Some($t::EPSILON);
                const ROUND_ERROR: Option<Self> = Some(0.5);
                const MIN_POSITIVE: Option<Self> = Some($t::MIN_POSITIVE);
                const DENORM_MIN: Option<Self> = Some($t::from_bits(1));
                const INFINITY: Option<Self> = Some($t::INFINITY);
                const NEG_INFINITY: Option<Self> = Some($t::NEG_INFINITY);
                const NAN: Option<Self> = Some($t::NAN);
            }
        )+
    };
}

impl_limits_integer!(false => u8, u16, u32, u64, u128, usize);
impl_limits_integer!(true => i8, i16, i32, i64, i128, isize);
impl_limits_float!(f32, f64);

#[inline(always)]
const fn rewrap<T: Copy, Tag>(sentinel: Option<T>) -> Option<Boxed<T, Tag>> {
    match sentinel {
        Some(value) => Some(Boxed::new(value)),
        None => None,
    }
}

impl<T, Tag> NumericLimits for Boxed<T, Tag>
where
    T: NumericLimits,
{
    const IS_INTEGER: bool = T::IS_INTEGER;
    const IS_SIGNED: bool = T::IS_SIGNED;

    const MIN: Self = Self::new(T::MIN);
    const MAX: Self = Self::new(T::MAX);
    const LOWEST: Self = Self::new(T::LOWEST);

    const EPSILON: Option<Self> = rewrap(T::EPSILON);
    const ROUND_ERROR: Option<Self> = rewrap(T::ROUND_ERROR);
    const MIN_POSITIVE: Option<Self> = rewrap(T::MIN_POSITIVE);
    const DENORM_MIN: Option<Self> = rewrap(T::DENORM_MIN);
    const INFINITY: Option<Self> = rewrap(T::INFINITY);
    const NEG_INFINITY: Option<Self> = rewrap(T::NEG_INFINITY);
    const NAN: Option<Self> = rewrap(T::NAN);
}

impl<T, Tag> num_traits::Bounded for Boxed<T, Tag>
where
    T: num_traits::Bounded,
{
    #[inline]
    fn min_value() -> Self {
        Self::new(T::min_value())
    }

    #[inline]
    fn max_value() -> Self {
        Self::new(T::max_value())
    }
}

impl<T, Tag> num_traits::Zero for Boxed<T, Tag>
where
    T: num_traits::Zero,
{
    #[inline]
    fn zero() -> Self {
        Self::new(T::zero())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        num_traits::Zero::is_zero(&**self)
    }
}

impl<T, Tag> num_traits::One for Boxed<T, Tag>
where
    T: num_traits::One,
{
    #[inline]
    fn one() -> Self {
        Self::new(T::one())
    }
}
