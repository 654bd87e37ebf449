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

//! Associated numeric constants for the primitive types.
//!
//! These mirror `num_traits::{Zero, One}` but are associated *constants*
//! rather than functions, which makes them usable in `const` items such as
//! `Boxed::ZERO`.

/// The additive identity of a primitive numeric type.
///
/// # Examples
///
/// ```rust
/// # use boxed::num::constants::Zero;
///
/// assert_eq!(u16::ZERO, 0);
/// assert_eq!(f64::ZERO, 0.0);
/// ```
pub trait Zero {
    /// The constant representing 0 for the implementing type.
    const ZERO: Self;
}

/// The unit step of a primitive numeric type, used by increment and decrement.
///
/// # Examples
///
/// ```rust
/// # use boxed::num::constants::PlusOne;
///
/// assert_eq!(i8::PLUS_ONE, 1);
/// assert_eq!(f32::PLUS_ONE, 1.0);
/// ```
pub trait PlusOne {
    /// The constant representing +1 for the implementing type.
    const PLUS_ONE: Self;
}

macro_rules! impl_constants {
    ($zero:expr, $one:expr => $($t:ty),+ $(,)?) => {
        $(
            impl Zero for $t {
                const ZERO: Self = $zero;
            }

            impl PlusOne for $t {
                const PLUS_ONE: Self = $one;
            }
        )+
    };
}

impl_constants!(0, 1 => u8, u16, u32, u64, u128, usize);
impl_constants!(0, 1 => i8, i16, i32, i64, i128, isize);
impl_constants!(0.0, 1.0 => f32, f64);

#[cfg(test)]
mod tests {
    use super::{PlusOne, Zero};

    fn step<T: Zero + PlusOne + std::ops::Add<Output = T>>() -> T {
        T::ZERO + T::PLUS_ONE
    }

    #[test]
    fn test_integer_constants() {
        assert_eq!(u8::ZERO, 0);
        assert_eq!(i128::ZERO, 0);
        assert_eq!(usize::PLUS_ONE, 1);
        assert_eq!(isize::PLUS_ONE, 1);
    }

    #[test]
    fn test_float_constants() {
        assert_eq!(f32::ZERO, 0.0);
        assert_eq!(f64::PLUS_ONE, 1.0);
    }

    #[test]
    fn test_generic_use() {
        assert_eq!(step::<u32>(), 1);
        assert_eq!(step::<i64>(), 1);
        assert_eq!(step::<f64>(), 1.0);
    }
}
