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

//! Exact division by value.
//!
//! Integer division normally truncates toward zero. `ExactDiv` instead
//! reports the truncation as an [`InexactDivision`] error. Floats implement
//! the trait too so that generic code can call it unconditionally; for them
//! the quotient is always accepted.

use crate::error::InexactDivision;
use core::fmt::{Debug, Display};
use core::ops::Div;

/// Division that rejects a non-zero remainder.
///
/// Division by zero and the `MIN / -1` overflow are not intercepted; they
/// behave exactly as the primitive `/` and `%` operators do.
///
/// # Examples
///
/// ```rust
/// # use boxed::num::ops::exact_division::ExactDiv;
///
/// assert_eq!(12i32.exact_div_val(4), Ok(3));
/// assert!(13i32.exact_div_val(4).is_err());
/// assert_eq!(1.0f64.exact_div_val(4.0), Ok(0.25));
/// ```
pub trait ExactDiv: Copy + Div<Self, Output = Self> + Debug + Display {
    /// `true` for the integer primitives, where exactness is meaningful.
    const IS_INTEGRAL: bool;

    /// Divides `self` by `rhs`, failing if the remainder is not zero.
    fn exact_div_val(self, rhs: Self) -> Result<Self, InexactDivision<Self>>;
}

macro_rules! exact_div_impl_integer {
    ($($t:ty),+) => {
        $(
            impl ExactDiv for $t {
                const IS_INTEGRAL: bool = true;

                #[inline]
                fn exact_div_val(self, rhs: $t) -> Result<$t, InexactDivision<$t>> {
                    let remainder = self % rhs;
                    if remainder != 0 {
                        log::debug!(
                            "rejected inexact division: {} / {} leaves remainder {}",
                            self,
                            rhs,
                            remainder
                        );
                        return Err(InexactDivision::new(self, rhs, remainder));
                    }
                    Ok(self / rhs)
                }
            }
        )+
    };
}

macro_rules! exact_div_impl_float {
    ($($t:ty),+) => {
        $(
            impl ExactDiv for $t {
                const IS_INTEGRAL: bool = false;

                #[inline(always)]
                fn exact_div_val(self, rhs: $t) -> Result<$t, InexactDivision<$t>> {
                    Ok(self / rhs)
                }
            }
        )+
    };
}

exact_div_impl_integer!(u8, u16, u32, u64, u128, usize);
exact_div_impl_integer!(i8, i16, i32, i64, i128, isize);
exact_div_impl_float!(f32, f64);
