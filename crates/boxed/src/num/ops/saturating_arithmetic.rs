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

//! Saturating arithmetic by value.
//!
//! Results are clamped to the numeric bounds of the type instead of wrapping
//! or panicking.

use core::ops::{Add, Mul, Neg, Sub};

/// Saturating addition by value.
///
/// # Examples
///
/// ```rust
/// # use boxed::num::ops::saturating_arithmetic::SaturatingAddVal;
///
/// assert_eq!(250u8.saturating_add_val(10), 255);
/// assert_eq!((-120i8).saturating_add_val(-20), -128);
/// ```
pub trait SaturatingAddVal: Sized + Add<Self, Output = Self> {
    /// Performs saturating addition by value.
    fn saturating_add_val(self, v: Self) -> Self;
}

/// Saturating subtraction by value.
pub trait SaturatingSubVal: Sized + Sub<Self, Output = Self> {
    /// Performs saturating subtraction by value.
    fn saturating_sub_val(self, v: Self) -> Self;
}

/// Saturating multiplication by value.
pub trait SaturatingMulVal: Sized + Mul<Self, Output = Self> {
    /// Performs saturating multiplication by value.
    fn saturating_mul_val(self, v: Self) -> Self;
}

/// Saturating negation by value. Only signed integers have one.
///
/// # Examples
///
/// ```rust
/// # use boxed::num::ops::saturating_arithmetic::SaturatingNegVal;
///
/// assert_eq!(i8::MIN.saturating_neg_val(), i8::MAX);
/// ```
pub trait SaturatingNegVal: Sized + Neg<Output = Self> {
    /// Performs saturating negation by value.
    fn saturating_neg_val(self) -> Self;
}

macro_rules! saturating_impl_binary_val {
    ($trait_name:ident, $method:ident, $src_method:ident => $($t:ty),+) => {
        $(
            impl $trait_name for $t {
                #[inline(always)]
                fn $method(self, v: Self) -> Self {
                    <$t>::$src_method(self, v)
                }
            }
        )+
    };
}

macro_rules! saturating_impl_all {
    ($($t:ty),+) => {
        saturating_impl_binary_val!(SaturatingAddVal, saturating_add_val, saturating_add => $($t),+);
        saturating_impl_binary_val!(SaturatingSubVal, saturating_sub_val, saturating_sub => $($t),+);
        saturating_impl_binary_val!(SaturatingMulVal, saturating_mul_val, saturating_mul => $($t),+);
    };
}

saturating_impl_all!(u8, u16, u32, u64, u128, usize);
saturating_impl_all!(i8, i16, i32, i64, i128, isize);

macro_rules! saturating_impl_neg {
    ($($t:ty),+) => {
        $(
            impl SaturatingNegVal for $t {
                #[inline(always)]
                fn saturating_neg_val(self) -> Self {
                    <$t>::saturating_neg(self)
                }
            }
        )+
    };
}

saturating_impl_neg!(i8, i16, i32, i64, i128, isize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saturating_unsigned_bounds() {
        assert_eq!(u16::MAX.saturating_add_val(1), u16::MAX);
        assert_eq!(0u16.saturating_sub_val(1), 0);
        assert_eq!(u16::MAX.saturating_mul_val(2), u16::MAX);
    }

    #[test]
    fn test_saturating_signed_bounds() {
        assert_eq!(i32::MAX.saturating_add_val(1), i32::MAX);
        assert_eq!(i32::MIN.saturating_sub_val(1), i32::MIN);
        assert_eq!(i32::MIN.saturating_mul_val(2), i32::MIN);
        assert_eq!(i32::MIN.saturating_neg_val(), i32::MAX);
    }

    #[test]
    fn test_saturating_in_range_is_exact() {
        assert_eq!(40i64.saturating_add_val(2), 42);
        assert_eq!(40i64.saturating_sub_val(2), 38);
        assert_eq!(40i64.saturating_mul_val(2), 80);
        assert_eq!(40i64.saturating_neg_val(), -40);
    }
}
