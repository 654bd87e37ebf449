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

use boxed::Boxed;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

enum TicksTag {}
type Ticks = Boxed<u64, TicksTag>;

fn sum_raw(values: &[u64]) -> u64 {
    values.iter().fold(0u64, |acc, &v| acc.wrapping_add(v))
}

fn sum_boxed(values: &[Ticks]) -> Ticks {
    values
        .iter()
        .fold(Ticks::ZERO, |acc, &v| Ticks::new(acc.get().wrapping_add(v.get())))
}

fn scale_raw(values: &mut [u64], factor: u64) {
    for v in values.iter_mut() {
        *v = v.wrapping_mul(factor) / factor.max(1);
    }
}

fn scale_boxed(values: &mut [Ticks], factor: u64) {
    for v in values.iter_mut() {
        *v = Ticks::new(v.get().wrapping_mul(factor)) / factor.max(1);
    }
}

fn bench_boxed_vs_raw(c: &mut Criterion) {
    let mut group = c.benchmark_group("boxed_vs_raw");

    for &len in &[1_024usize, 65_536] {
        let raw: Vec<u64> = (0..len as u64).collect();
        let boxed: Vec<Ticks> = raw.iter().copied().map(Ticks::new).collect();
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("sum_raw", len), &raw, |b, v| {
            b.iter(|| sum_raw(black_box(v)))
        });
        group.bench_with_input(BenchmarkId::new("sum_boxed", len), &boxed, |b, v| {
            b.iter(|| sum_boxed(black_box(v)))
        });

        // Multiplying by one keeps every quotient exact, so the strict
        // build measures the remainder check rather than a panic.
        group.bench_function(BenchmarkId::new("scale_raw", len), |b| {
            let mut data = raw.clone();
            b.iter(|| scale_raw(black_box(&mut data), black_box(1)))
        });
        group.bench_function(BenchmarkId::new("scale_boxed", len), |b| {
            let mut data = boxed.clone();
            b.iter(|| scale_boxed(black_box(&mut data), black_box(1)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_boxed_vs_raw);
criterion_main!(benches);
