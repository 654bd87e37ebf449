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

//! Checked arithmetic by value.
//!
//! Each trait forwards to the inherent `checked_*` method of the primitive
//! integer and returns `None` where the primitive would overflow or divide by
//! zero.

use core::ops::{Add, Div, Mul, Rem, Sub};

/// Checked addition by value.
///
/// # Examples
///
/// ```rust
/// # use boxed::num::ops::checked_arithmetic::CheckedAddVal;
///
/// assert_eq!(250u8.checked_add_val(5), Some(255));
/// assert_eq!(250u8.checked_add_val(6), None);
/// ```
pub trait CheckedAddVal: Sized + Add<Self, Output = Self> {
    /// Performs checked addition by value, returning `None` if overflow occurs.
    fn checked_add_val(self, v: Self) -> Option<Self>;
}

/// Checked subtraction by value.
pub trait CheckedSubVal: Sized + Sub<Self, Output = Self> {
    /// Performs checked subtraction by value, returning `None` if underflow occurs.
    fn checked_sub_val(self, v: Self) -> Option<Self>;
}

/// Checked multiplication by value.
pub trait CheckedMulVal: Sized + Mul<Self, Output = Self> {
    /// Performs checked multiplication by value, returning `None` if overflow occurs.
    fn checked_mul_val(self, v: Self) -> Option<Self>;
}

/// Checked division by value.
///
/// # Examples
///
/// ```rust
/// # use boxed::num::ops::checked_arithmetic::CheckedDivVal;
///
/// assert_eq!(7i32.checked_div_val(2), Some(3));
/// assert_eq!(7i32.checked_div_val(0), None);
/// assert_eq!(i32::MIN.checked_div_val(-1), None);
/// ```
pub trait CheckedDivVal: Sized + Div<Self, Output = Self> {
    /// Performs checked division by value, returning `None` on division by zero
    /// or overflow.
    fn checked_div_val(self, v: Self) -> Option<Self>;
}

/// Checked remainder by value.
pub trait CheckedRemVal: Sized + Rem<Self, Output = Self> {
    /// Performs checked remainder by value, returning `None` on division by zero
    /// or overflow.
    fn checked_rem_val(self, v: Self) -> Option<Self>;
}

/// Checked negation by value.
///
/// Unsigned types only succeed for zero.
pub trait CheckedNegVal: Sized {
    /// Performs checked negation by value, returning `None` if overflow occurs.
    fn checked_neg_val(self) -> Option<Self>;
}

macro_rules! checked_impl_binary_val {
    ($trait_name:ident, $method:ident, $src_method:ident => $($t:ty),+) => {
        $(
            impl $trait_name for $t {
                #[inline(always)]
                fn $method(self, v: $t) -> Option<$t> {
                    <$t>::$src_method(self, v)
                }
            }
        )+
    };
}

macro_rules! checked_impl_unary_val {
    ($trait_name:ident, $method:ident, $src_method:ident => $($t:ty),+) => {
        $(
            impl $trait_name for $t {
                #[inline(always)]
                fn $method(self) -> Option<$t> {
                    <$t>::$src_method(self)
                }
            }
        )+
    };
}

macro_rules! checked_impl_all {
    ($($t:ty),+) => {
        checked_impl_binary_val!(CheckedAddVal, checked_add_val, checked_add => $($t),+);
        checked_impl_binary_val!(CheckedSubVal, checked_sub_val, checked_sub => $($t),+);
        checked_impl_binary_val!(CheckedMulVal, checked_mul_val, checked_mul => $($t),+);
        checked_impl_binary_val!(CheckedDivVal, checked_div_val, checked_div => $($t),+);
        checked_impl_binary_val!(CheckedRemVal, checked_rem_val, checked_rem => $($t),+);
        checked_impl_unary_val!(CheckedNegVal, checked_neg_val, checked_neg => $($t),+);
    };
}

checked_impl_all!(u8, u16, u32, u64, u128, usize);
checked_impl_all!(i8, i16, i32, i64, i128, isize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_add_sub() {
        assert_eq!(u8::MAX.checked_add_val(1), None);
        assert_eq!(1u8.checked_add_val(1), Some(2));
        assert_eq!(0u32.checked_sub_val(1), None);
        assert_eq!(i64::MIN.checked_sub_val(1), None);
        assert_eq!(5i64.checked_sub_val(7), Some(-2));
    }

    #[test]
    fn test_checked_mul() {
        assert_eq!(16u8.checked_mul_val(16), None);
        assert_eq!(15u8.checked_mul_val(17), Some(255));
    }

    #[test]
    fn test_checked_div_rem() {
        assert_eq!(9usize.checked_div_val(0), None);
        assert_eq!(9usize.checked_rem_val(0), None);
        assert_eq!(9usize.checked_rem_val(4), Some(1));
        assert_eq!(i8::MIN.checked_rem_val(-1), None);
    }

    #[test]
    fn test_checked_neg() {
        assert_eq!(0u16.checked_neg_val(), Some(0));
        assert_eq!(3u16.checked_neg_val(), None);
        assert_eq!(i32::MIN.checked_neg_val(), None);
        assert_eq!(3i32.checked_neg_val(), Some(-3));
    }
}
