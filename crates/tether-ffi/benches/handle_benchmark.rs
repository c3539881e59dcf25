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

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use tether::counter::{Counter_count, Counter_drop, Counter_get_count, Counter_new};
use tether::rstring::{RString_drop, RString_new};
use tether_core::registry::Registry;
use tether_objects::counter::Counter;

fn bench_ffi_lifecycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("ffi_lifecycle");

    group.bench_function("counter", |b| {
        b.iter(|| unsafe {
            let counter = Counter_new(black_box(2));
            Counter_count(counter, black_box(4));
            black_box(Counter_get_count(counter));
            Counter_drop(counter);
        })
    });

    group.bench_function("rstring", |b| {
        b.iter(|| unsafe {
            let string = RString_new(black_box(c"Hello!").as_ptr());
            RString_drop(black_box(string));
        })
    });

    group.finish();
}

fn bench_registry_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry_churn");

    for &count in &[16usize, 256, 4096] {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let mut registry: Registry<Counter<i64>> = Registry::with_capacity(count);
            let mut keys = Vec::with_capacity(count);
            b.iter(|| {
                for i in 0..count {
                    keys.push(registry.create(Counter::new(i as i64)));
                }
                for key in keys.drain(..) {
                    black_box(registry.release(key).ok());
                }
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_ffi_lifecycle, bench_registry_churn);
criterion_main!(benches);
