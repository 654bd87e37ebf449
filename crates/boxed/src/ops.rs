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

//! # Arithmetic on Boxed Values
//!
//! Operators are defined for two operands of the same `Boxed<T, Tag>`, and for
//! a boxed operand combined with a bare `T` on either side. The result always
//! keeps the tag. There is no operator between different tags.
//!
//! | Expression            | Result          |
//! |-----------------------|-----------------|
//! | `Boxed ∘ Boxed`       | `Boxed`         |
//! | `Boxed ∘ T`           | `Boxed`         |
//! | `T ∘ Boxed`           | `Boxed`         |
//! | `Boxed ∘= Boxed / T`  | in place        |
//! | `-Boxed`              | `Boxed`         |
//!
//! for `∘` in `+ - * / %`. The `T ∘ Boxed` forms are implemented per
//! primitive, since coherence forbids a blanket impl on a foreign `T`.
//!
//! ## Division
//!
//! `/` and `/=` go through [`ExactDiv`]. By default they truncate like the
//! primitive. With the `strict-division` feature, an integer division that
//! leaves a remainder panics with an [`InexactDivision`] message instead; the
//! left operand of `/=` is left untouched in that case. [`Boxed::try_div`] and
//! [`Boxed::try_div_assign`] perform the exact check regardless of the feature
//! and report it as a `Result`.
//!
//! Overflow, NaN and division by zero are the primitive's own behavior. The
//! `checked_*` and `saturating_*` methods are the opt-in alternatives.
//!
//! ```compile_fail
//! use boxed::Boxed;
//!
//! enum A {}
//! enum B {}
//!
//! let sum = Boxed::<u64, A>::new(1) + Boxed::<u64, B>::new(2);
//! ```

use crate::{
    boxed::Boxed,
    error::InexactDivision,
    num::ops::{
        checked_arithmetic::{
            CheckedAddVal, CheckedDivVal, CheckedMulVal, CheckedNegVal, CheckedRemVal,
            CheckedSubVal,
        },
        exact_division::ExactDiv,
        saturating_arithmetic::{
            SaturatingAddVal, SaturatingMulVal, SaturatingNegVal, SaturatingSubVal,
        },
    },
};
use std::{
    iter::{Product, Sum},
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign},
};

/// Divides according to the compiled division mode.
#[inline(always)]
fn divide<T>(lhs: T, rhs: T) -> T
where
    T: ExactDiv,
{
    if crate::STRICT_DIVISION {
        match lhs.exact_div_val(rhs) {
            Ok(quotient) => quotient,
            Err(err) => panic!("{}", err),
        }
    } else {
        lhs / rhs
    }
}

macro_rules! impl_boxed_op {
    ($trait_name:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt) => {
        impl<T, Tag> $trait_name for Boxed<T, Tag>
        where
            T: $trait_name<Output = T>,
        {
            type Output = Self;

            #[inline(always)]
            fn $method(self, rhs: Self) -> Self::Output {
                Self::new(self.into_inner() $op rhs.into_inner())
            }
        }

        impl<T, Tag> $trait_name<T> for Boxed<T, Tag>
        where
            T: $trait_name<Output = T>,
        {
            type Output = Self;

            #[inline(always)]
            fn $method(self, rhs: T) -> Self::Output {
                Self::new(self.into_inner() $op rhs)
            }
        }

        impl<T, Tag> $assign_trait for Boxed<T, Tag>
        where
            T: $assign_trait,
        {
            #[inline(always)]
            fn $assign_method(&mut self, rhs: Self) {
                $assign_trait::$assign_method(self.get_mut(), rhs.into_inner());
            }
        }

        impl<T, Tag> $assign_trait<T> for Boxed<T, Tag>
        where
            T: $assign_trait,
        {
            #[inline(always)]
            fn $assign_method(&mut self, rhs: T) {
                $assign_trait::$assign_method(self.get_mut(), rhs);
            }
        }
    };
}

impl_boxed_op!(Add, add, AddAssign, add_assign, +);
impl_boxed_op!(Sub, sub, SubAssign, sub_assign, -);
impl_boxed_op!(Mul, mul, MulAssign, mul_assign, *);
impl_boxed_op!(Rem, rem, RemAssign, rem_assign, %);

impl<T, Tag> Div for Boxed<T, Tag>
where
    T: ExactDiv,
{
    type Output = Self;

    /// # Panics
    ///
    /// With the `strict-division` feature, panics if an integer division
    /// leaves a remainder. Division by zero panics for integers in any mode.
    #[inline(always)]
    fn div(self, rhs: Self) -> Self::Output {
        Self::new(divide(self.into_inner(), rhs.into_inner()))
    }
}

impl<T, Tag> Div<T> for Boxed<T, Tag>
where
    T: ExactDiv,
{
    type Output = Self;

    #[inline(always)]
    fn div(self, rhs: T) -> Self::Output {
        Self::new(divide(self.into_inner(), rhs))
    }
}

impl<T, Tag> DivAssign for Boxed<T, Tag>
where
    T: ExactDiv,
{
    #[inline(always)]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl<T, Tag> DivAssign<T> for Boxed<T, Tag>
where
    T: ExactDiv,
{
    #[inline(always)]
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

impl<T, Tag> Neg for Boxed<T, Tag>
where
    T: Neg<Output = T>,
{
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self::Output {
        Self::new(-self.into_inner())
    }
}

macro_rules! impl_primitive_lhs_ops {
    ($($t:ty),+) => {
        $(
            impl<Tag> Add<Boxed<$t, Tag>> for $t {
                type Output = Boxed<$t, Tag>;

                #[inline(always)]
                fn add(self, rhs: Boxed<$t, Tag>) -> Self::Output {
                    Boxed::new(self + rhs.into_inner())
                }
            }

            impl<Tag> Sub<Boxed<$t, Tag>> for $t {
                type Output = Boxed<$t, Tag>;

                #[inline(always)]
                fn sub(self, rhs: Boxed<$t, Tag>) -> Self::Output {
                    Boxed::new(self - rhs.into_inner())
                }
            }

            impl<Tag> Mul<Boxed<$t, Tag>> for $t {
                type Output = Boxed<$t, Tag>;

                #[inline(always)]
                fn mul(self, rhs: Boxed<$t, Tag>) -> Self::Output {
                    Boxed::new(self * rhs.into_inner())
                }
            }

            impl<Tag> Div<Boxed<$t, Tag>> for $t {
                type Output = Boxed<$t, Tag>;

                #[inline(always)]
                fn div(self, rhs: Boxed<$t, Tag>) -> Self::Output {
                    Boxed::new(divide(self, rhs.into_inner()))
                }
            }

            impl<Tag> Rem<Boxed<$t, Tag>> for $t {
                type Output = Boxed<$t, Tag>;

                #[inline(always)]
                fn rem(self, rhs: Boxed<$t, Tag>) -> Self::Output {
                    Boxed::new(self % rhs.into_inner())
                }
            }
        )+
    };
}

impl_primitive_lhs_ops!(u8, u16, u32, u64, u128, usize);
impl_primitive_lhs_ops!(i8, i16, i32, i64, i128, isize);
impl_primitive_lhs_ops!(f32, f64);

impl<T, Tag> Sum for Boxed<T, Tag>
where
    T: Sum,
{
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self::new(iter.map(Boxed::into_inner).sum())
    }
}

impl<'a, T, Tag> Sum<&'a Boxed<T, Tag>> for Boxed<T, Tag>
where
    T: Copy + Sum,
{
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        Self::new(iter.map(|b| b.get()).sum())
    }
}

impl<T, Tag> Product for Boxed<T, Tag>
where
    T: Product,
{
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self::new(iter.map(Boxed::into_inner).product())
    }
}

impl<'a, T, Tag> Product<&'a Boxed<T, Tag>> for Boxed<T, Tag>
where
    T: Copy + Product,
{
    fn product<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        Self::new(iter.map(|b| b.get()).product())
    }
}

impl<T, Tag> Boxed<T, Tag>
where
    T: ExactDiv,
{
    /// Divides by `rhs`, failing instead of truncating a non-zero remainder.
    ///
    /// Available in every build; this is the checked counterpart of `/`.
    /// Floats always succeed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use boxed::Boxed;
    ///
    /// enum BytesTag {}
    /// type Bytes = Boxed<u32, BytesTag>;
    ///
    /// assert_eq!(Bytes::new(6).try_div(Bytes::new(3)), Ok(Bytes::new(2)));
    /// assert!(Bytes::new(7).try_div(Bytes::new(3)).is_err());
    /// ```
    #[inline]
    pub fn try_div(self, rhs: Self) -> Result<Self, InexactDivision<T>> {
        self.into_inner()
            .exact_div_val(rhs.into_inner())
            .map(Self::new)
    }

    /// In-place form of [`Boxed::try_div`]. On failure `self` keeps its
    /// original value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use boxed::Boxed;
    ///
    /// enum BytesTag {}
    /// type Bytes = Boxed<u32, BytesTag>;
    ///
    /// let mut b = Bytes::new(10);
    /// assert!(b.try_div_assign(Bytes::new(3)).is_err());
    /// assert_eq!(b, Bytes::new(10));
    /// b.try_div_assign(Bytes::new(5)).unwrap();
    /// assert_eq!(b, Bytes::new(2));
    /// ```
    #[inline]
    pub fn try_div_assign(&mut self, rhs: Self) -> Result<(), InexactDivision<T>> {
        *self = self.try_div(rhs)?;
        Ok(())
    }
}

macro_rules! impl_boxed_checked {
    ($($trait_name:ident => $method:ident via $src_method:ident),+ $(,)?) => {
        $(
            impl<T, Tag> Boxed<T, Tag>
            where
                T: $trait_name,
            {
                /// Checked arithmetic on the contained values; `None` where
                /// the primitive operation would overflow or divide by zero.
                #[inline(always)]
                pub fn $method(self, rhs: Self) -> Option<Self> {
                    self.into_inner()
                        .$src_method(rhs.into_inner())
                        .map(Self::new)
                }
            }
        )+
    };
}

impl_boxed_checked!(
    CheckedAddVal => checked_add via checked_add_val,
    CheckedSubVal => checked_sub via checked_sub_val,
    CheckedMulVal => checked_mul via checked_mul_val,
    CheckedDivVal => checked_div via checked_div_val,
    CheckedRemVal => checked_rem via checked_rem_val,
);

impl<T, Tag> Boxed<T, Tag>
where
    T: CheckedNegVal,
{
    /// Checked negation; `None` on overflow (and for any non-zero unsigned value).
    #[inline(always)]
    pub fn checked_neg(self) -> Option<Self> {
        self.into_inner().checked_neg_val().map(Self::new)
    }
}

macro_rules! impl_boxed_saturating {
    ($($trait_name:ident => $method:ident via $src_method:ident),+ $(,)?) => {
        $(
            impl<T, Tag> Boxed<T, Tag>
            where
                T: $trait_name,
            {
                /// Saturating arithmetic on the contained values, clamped to
                /// the bounds of `T`.
                #[inline(always)]
                pub fn $method(self, rhs: Self) -> Self {
                    Self::new(self.into_inner().$src_method(rhs.into_inner()))
                }
            }
        )+
    };
}

impl_boxed_saturating!(
    SaturatingAddVal => saturating_add via saturating_add_val,
    SaturatingSubVal => saturating_sub via saturating_sub_val,
    SaturatingMulVal => saturating_mul via saturating_mul_val,
);

impl<T, Tag> Boxed<T, Tag>
where
    T: SaturatingNegVal,
{
    /// Saturating negation, clamped to the bounds of `T`.
    #[inline(always)]
    pub fn saturating_neg(self) -> Self {
        Self::new(self.into_inner().saturating_neg_val())
    }
}


#[cfg(test)]
mod proptests {
    use super::Boxed;
    use proptest::prelude::*;

    enum TestTag {}
    type Value = Boxed<i64, TestTag>;

    proptest! {
        /// Boxed arithmetic agrees with arithmetic on the raw values.
        #[test]
        fn arithmetic_matches_inner(a in -1_000_000i64..1_000_000, b in 1i64..1_000) {
            prop_assert_eq!((Value::new(a) + Value::new(b)).get(), a + b);
            prop_assert_eq!((Value::new(a) - b).get(), a - b);
            prop_assert_eq!((a * Value::new(b)).get(), a * b);
            prop_assert_eq!((Value::new(a) % Value::new(b)).get(), a % b);
        }

        /// `try_div` succeeds exactly when the remainder is zero, and then
        /// agrees with `/`.
        #[test]
        fn try_div_matches_remainder(a in any::<i32>(), b in 1i32..10_000) {
            let (a, b) = (i64::from(a), i64::from(b));
            match Value::new(a).try_div(Value::new(b)) {
                Ok(q) => {
                    prop_assert_eq!(a % b, 0);
                    prop_assert_eq!(q.get(), a / b);
                }
                Err(err) => {
                    prop_assert_ne!(a % b, 0);
                    prop_assert_eq!(err.remainder(), a % b);
                }
            }
        }

        /// Exact quotients never fail, whatever the division mode.
        #[test]
        fn exact_multiples_divide_cleanly(q in -10_000i64..10_000, b in 1i64..10_000) {
            prop_assert_eq!(Value::new(q * b) / Value::new(b), Value::new(q));
        }
    }
}
