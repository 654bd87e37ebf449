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

//! Error types for boxed arithmetic.

/// An integer division that would have discarded a non-zero remainder.
///
/// Returned by [`Boxed::try_div`](crate::Boxed::try_div) and by
/// [`ExactDiv::exact_div_val`](crate::num::ops::exact_division::ExactDiv::exact_div_val),
/// and raised as a panic by the `/` operator when the crate is built with the
/// `strict-division` feature.
///
/// # Examples
///
/// ```rust
/// # use boxed::num::ops::exact_division::ExactDiv;
///
/// let err = 7u32.exact_div_val(3).unwrap_err();
/// assert_eq!(err.remainder(), 1);
/// assert_eq!(err.to_string(), "division of 7 by 3 is not exact (remainder 1)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("division of {dividend} by {divisor} is not exact (remainder {remainder})")]
pub struct InexactDivision<T> {
    dividend: T,
    divisor: T,
    remainder: T,
}

impl<T> InexactDivision<T> {
    #[inline]
    pub(crate) const fn new(dividend: T, divisor: T, remainder: T) -> Self {
        Self {
            dividend,
            divisor,
            remainder,
        }
    }

    /// Returns the left operand of the rejected division.
    #[inline]
    pub fn dividend(&self) -> T
    where
        T: Copy,
    {
        self.dividend
    }

    /// Returns the right operand of the rejected division.
    #[inline]
    pub fn divisor(&self) -> T
    where
        T: Copy,
    {
        self.divisor
    }

    /// Returns the remainder that made the division inexact. Never zero.
    #[inline]
    pub fn remainder(&self) -> T
    where
        T: Copy,
    {
        self.remainder
    }
}

#[cfg(test)]
mod tests {
    use super::InexactDivision;

    #[test]
    fn test_accessors() {
        let err = InexactDivision::new(10i64, 4, 2);
        assert_eq!(err.dividend(), 10);
        assert_eq!(err.divisor(), 4);
        assert_eq!(err.remainder(), 2);
    }

    #[test]
    fn test_display() {
        let err = InexactDivision::new(-7i8, 2, -1);
        assert_eq!(
            format!("{}", err),
            "division of -7 by 2 is not exact (remainder -1)"
        );
    }

    #[test]
    fn test_is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&InexactDivision::new(1u8, 2, 1));
    }
}
