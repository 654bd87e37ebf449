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

//! # Boxed
//!
//! Zero-cost, phantom-tagged wrappers that give primitive values distinct
//! types. `Boxed<T, Tag>` stores a single primitive `T`; the `Tag` type exists
//! only at compile time and makes two wrappers over the same primitive
//! unrelated types. A byte count cannot be passed where a vessel index is
//! expected, a speed cannot be compared with a permittivity, and the only way
//! across a tag boundary is a named cast.
//!
//! ## Modules
//!
//! - `boxed`: The `Boxed<T, Tag>` type, construction and access, comparison,
//!   hashing, formatting, parsing, increment/decrement.
//! - `ops`: Arithmetic operators between boxed values and with bare
//!   primitives on either side, plus checked, saturating and exact-division
//!   methods.
//! - `cast`: The explicit conversions `as_`, `cast_between`/`cast_from`,
//!   `unbox`/`unbox_as`, and the range-checked `try_cast_from`.
//! - `limits`: `NumericLimits` sentinels and `num_traits` pass-through.
//! - `num`: By-value primitive traits the wrapper delegates to.
//! - `error`: `InexactDivision`, the only error the crate produces.
//!
//! ## Features
//!
//! - `strict-division`: integer `/` and `/=` panic with [`InexactDivision`]
//!   instead of truncating a non-zero remainder. [`Boxed::try_div`] offers
//!   the same check as a `Result` in every build.
//! - `serde`: transparent `Serialize`/`Deserialize` through `T`.
//!
//! ## Example
//!
//! ```rust
//! use boxed::{boxed_type, unbox};
//!
//! boxed_type! {
//!     pub Speed: f64 => SpeedTag;
//!     pub Permittivity: f64 => PermittivityTag;
//!     pub Permeability: f64 => PermeabilityTag;
//! }
//!
//! fn wave_speed(epsilon: Permittivity, mu: Permeability) -> Speed {
//!     Speed::new(1.0 / (unbox(epsilon) * unbox(mu)).sqrt())
//! }
//!
//! let c = wave_speed(Permittivity::new(8.854_187_817_62e-12), Permeability::new(4e-7 * std::f64::consts::PI));
//! assert!((c - 299_792_458.0).get().abs() < 1.0);
//! ```
//!
//! Swapping the arguments is a type error:
//!
//! ```compile_fail
//! use boxed::boxed_type;
//!
//! boxed_type! {
//!     pub Speed: f64 => SpeedTag;
//!     pub Permittivity: f64 => PermittivityTag;
//!     pub Permeability: f64 => PermeabilityTag;
//! }
//!
//! fn wave_speed(epsilon: Permittivity, mu: Permeability) -> Speed {
//!     Speed::new(1.0 / (epsilon.get() * mu.get()).sqrt())
//! }
//!
//! wave_speed(Permeability::new(1.0), Permittivity::new(1.0));
//! ```

pub mod boxed;
pub mod cast;
pub mod error;
pub mod limits;
pub mod num;
pub mod ops;

mod macros;

pub use crate::boxed::Boxed;
pub use crate::cast::{Scalar, cast_between, unbox, unbox_as};
pub use crate::error::InexactDivision;
pub use crate::limits::NumericLimits;

/// `true` when the crate was built with the `strict-division` feature.
pub const STRICT_DIVISION: bool = cfg!(feature = "strict-division");
