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

//! # By-Value Arithmetic
//!
//! Arithmetic traits over the primitive numerics that take their operands by
//! value (unlike the reference-based `num_traits::Checked*` family), so the
//! boxed wrapper can forward to them without borrowing its field.
//!
//! ## Submodules
//!
//! - `checked_arithmetic`: `Option`-returning operations that detect overflow
//!   and division by zero.
//! - `saturating_arithmetic`: Operations that clamp to the numeric bounds.
//! - `exact_division`: Division that refuses to truncate a non-zero remainder.

pub mod checked_arithmetic;
pub mod exact_division;
pub mod saturating_arithmetic;
