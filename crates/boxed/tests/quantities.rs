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

use boxed::{Boxed, NumericLimits, boxed_type, cast_between, unbox, unbox_as};
use rustc_hash::{FxHashMap, FxHashSet, FxHasher};
use std::hash::{Hash, Hasher};

boxed_type! {
    /// Lengths of a closed range, counting both ends.
    pub Length: usize => LengthTag;
    pub Start: usize => StartTag;
    pub End: usize => EndTag;
    pub Speed: f64 => SpeedTag;
    pub Permittivity: f64 => PermittivityTag;
    pub Permeability: f64 => PermeabilityTag;
    pub Natural: u32 => NaturalTag;
    pub Integer: i32 => IntegerTag;
}

struct Range {
    from: Start,
    to: End,
}

fn length(range: Range) -> Length {
    let mut result = Length::new(range.to.get() - range.from.get());
    result.increment();
    result
}

fn wave_speed(epsilon: Permittivity, mu: Permeability) -> Speed {
    Speed::new(1.0 / (unbox(epsilon) * unbox(mu)).sqrt())
}

fn fx_hash<H: Hash>(value: &H) -> u64 {
    let mut hasher = FxHasher::default();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn test_closed_range_length() {
    let range = Range {
        from: Start::new(2),
        to: End::new(4),
    };
    assert_eq!(length(range), Length::new(3));
}

#[test]
fn test_wave_speed_in_vacuum() {
    assert_eq!(
        wave_speed(Permittivity::new(1.0), Permeability::new(1.0)),
        Speed::new(1.0)
    );

    let speed_of_light = Speed::new(299_792_458.0);
    let vacuum_permittivity = Permittivity::new(8.854_187_817_62e-12);
    let vacuum_permeability = Permeability::new(4.0 * std::f64::consts::PI * 1e-7);
    let computed = wave_speed(vacuum_permittivity, vacuum_permeability);
    let relative = unbox(computed - speed_of_light).abs() / unbox(speed_of_light);
    assert!(relative < 1e-9);
}

#[test]
fn test_unbox_types() {
    let speed_of_light = Speed::new(299_792_458.0);
    let native: f64 = unbox(speed_of_light);
    let single: f32 = unbox_as(speed_of_light);
    let int: i32 = unbox_as(speed_of_light);
    assert_eq!(native, 299_792_458.0);
    assert_eq!(single, 299_792_458.0f32);
    assert_eq!(int, 299_792_458);
}

#[test]
fn test_scaling_keeps_tag() {
    let c = Speed::new(299_792_458.0);
    let right: Speed = c * 2.0;
    let left: Speed = 2.0 * c;
    assert_eq!(right, left);
    assert_eq!(unbox(right), 2.0 * 299_792_458.0);
}

#[test]
fn test_retagging() {
    let f = Start::new(3);
    let t: End = cast_between(f);
    assert_eq!(*f, *t);
    assert_eq!(f.as_::<End>(), t);
    assert_eq!(End::cast_from(f), t);

    let n = Natural::new(3);
    let z: Integer = cast_between(n);
    assert_eq!(z.get(), 3);
    assert_eq!(Integer::try_cast_from(Natural::new(u32::MAX)), None);
}

#[test]
fn test_boxed_values_as_hash_keys() {
    let mut by_length: FxHashMap<Length, &str> = FxHashMap::default();
    by_length.insert(Length::new(3), "three");
    by_length.insert(Length::new(5), "five");
    assert_eq!(by_length.get(&Length::new(3)), Some(&"three"));
    assert_eq!(by_length.get(&Length::new(4)), None);

    let seen: FxHashSet<Natural> = [1, 2, 2, 3].into_iter().map(Natural::new).collect();
    assert_eq!(seen.len(), 3);

    for v in [0u32, 7, u32::MAX] {
        assert_eq!(fx_hash(&Natural::new(v)), fx_hash(&v));
    }
}

#[test]
fn test_formatting() {
    assert_eq!(Speed::new(299_792_458.0).to_string(), "299792458");
    assert_eq!(format!("{:?}", Speed::new(1.5)), "SpeedTag(1.5)");
    assert_eq!(format!("{:05}", Integer::new(-42)), "-0042");
}

#[test]
fn test_limits_rewrapped() {
    assert_eq!(Natural::MAX, Natural::new(u32::MAX));
    assert_eq!(Integer::LOWEST, Integer::new(i32::MIN));
    assert_eq!(Speed::INFINITY.map(unbox), Some(f64::INFINITY));
    assert_eq!(Natural::NAN, None);
}

#[test]
fn test_default_and_layout() {
    assert_eq!(Length::default(), Length::new(0));
    assert_eq!(std::mem::size_of::<Length>(), std::mem::size_of::<usize>());
    assert_eq!(std::mem::size_of::<Speed>(), std::mem::size_of::<f64>());
    assert_eq!(
        std::mem::size_of::<[Natural; 16]>(),
        std::mem::size_of::<[u32; 16]>()
    );
}

#[test]
fn test_untagged_alias() {
    type Rho = Boxed<f64, ()>;
    let rho = Rho::new(1.0);
    assert_eq!(unbox(rho), 1.0);
}

#[test]
fn test_strict_division_flag_matches_feature() {
    assert_eq!(boxed::STRICT_DIVISION, cfg!(feature = "strict-division"));
}

#[cfg(not(feature = "strict-division"))]
#[test]
fn test_integer_division_truncates() {
    type Int = Boxed<i32, ()>;
    assert_eq!(unbox(10 / Int::new(3)), 3);
    assert_eq!(unbox(Int::new(10) / 3), 3);
    assert_eq!(unbox(Int::new(10) / Int::new(3)), 3);
    let mut a = Int::new(10);
    a /= Int::new(3);
    assert_eq!(unbox(a), 3);
}

#[cfg(feature = "strict-division")]
#[test]
fn test_integer_division_must_be_exact() {
    use std::panic::{AssertUnwindSafe, catch_unwind};

    type Int = Boxed<i32, ()>;
    assert!(catch_unwind(|| 10 / Int::new(3)).is_err());
    assert!(catch_unwind(|| Int::new(10) / 3).is_err());
    assert!(catch_unwind(|| Int::new(10) / Int::new(3)).is_err());

    let mut a = Int::new(10);
    assert!(catch_unwind(AssertUnwindSafe(|| a /= Int::new(3))).is_err());
    assert_eq!(unbox(a), 10);
    assert_eq!(Int::new(12) / 3, Int::new(4));
}

#[test]
fn test_try_div_independent_of_feature() {
    type Int = Boxed<i32, ()>;
    let err = Int::new(7).try_div(Int::new(3)).unwrap_err();
    assert_eq!(err.to_string(), "division of 7 by 3 is not exact (remainder 1)");
    assert_eq!(Int::new(6).try_div(Int::new(3)), Ok(Int::new(2)));
}
