use std::cell::RefCell;
use std::env;
use std::rc::Rc;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use rand::prelude::*;

use classic_sort::compare::natural;
use classic_sort::heap::{build_max_heap, max_heapify};
use classic_sort::partition::partition_range;
use classic_sort::search::binary_search_range;
use classic_sort::selection::min_max;
use classic_sort::{stable, unstable, Sort};

use sort_test_tools::patterns;

/// Past this length the quadratic sorts would dominate the whole run.
const QUADRATIC_MAX_LEN: usize = 2_048;

fn bench_fn<T: Ord + std::fmt::Debug>(
    c: &mut Criterion,
    test_size: usize,
    transform_name: &str,
    transform: &fn(Vec<i32>) -> Vec<T>,
    pattern_name: &str,
    pattern_provider: impl Fn(usize) -> Vec<i32>,
    bench_name: &str,
    test_fn: impl Fn(&mut [T]),
) {
    let batch_size = if test_size > 30 {
        BatchSize::LargeInput
    } else {
        BatchSize::SmallInput
    };

    c.bench_function(
        &format!("{bench_name}-hot-{transform_name}-{pattern_name}-{test_size}"),
        |b| {
            b.iter_batched(
                || transform(pattern_provider(test_size)),
                |mut test_data| test_fn(black_box(test_data.as_mut_slice())),
                batch_size,
            )
        },
    );
}

fn measure_comp_count(
    name: &str,
    test_size: usize,
    instrumented_sort_func: impl Fn(),
    comp_count: Rc<RefCell<u64>>,
) {
    // Measure how many comparisons are performed by a specific implementation and input
    // combination.
    let run_count: usize = if test_size <= 20 {
        100_000
    } else if test_size < 10_000 {
        3000
    } else {
        100
    };

    *comp_count.borrow_mut() = 0;
    for _ in 0..run_count {
        instrumented_sort_func();
    }

    // If there is on average less than a single comparison this will be wrong.
    let total = *comp_count.borrow() / (run_count as u64);
    println!("{name}: mean comparisons: {total}");
}

#[inline(never)]
fn bench_impl<T: Ord + std::fmt::Debug, S: Sort>(
    c: &mut Criterion,
    test_size: usize,
    transform_name: &str,
    transform: &fn(Vec<i32>) -> Vec<T>,
    pattern_name: &str,
    pattern_provider: &fn(usize) -> Vec<i32>,
    _sort_impl: S,
) {
    let bench_name = S::name();

    let is_quadratic = bench_name.contains("insertion") || bench_name.contains("quick");
    if is_quadratic && test_size > QUADRATIC_MAX_LEN {
        return;
    }

    if env::var("MEASURE_COMP").is_ok() {
        if transform_name == "i32" {
            let name = format!(
                "{}-comp-{}-{}-{}",
                bench_name, transform_name, pattern_name, test_size
            );
            // Instrument via sort_by to ensure the type properties such as Copy of the type
            // that is being sorted doesn't change. And we get representative numbers.
            let comp_count = Rc::new(RefCell::new(0u64));
            let comp_count_copy = comp_count.clone();
            let instrumented_sort_func = || {
                let mut test_data = transform(pattern_provider(test_size));
                let _ = S::sort_by(black_box(test_data.as_mut_slice()), |a, b| {
                    *comp_count_copy.borrow_mut() += 1;
                    natural(a, b)
                });
            };
            measure_comp_count(&name, test_size, instrumented_sort_func, comp_count);
        }
    } else {
        bench_fn(
            c,
            test_size,
            transform_name,
            transform,
            pattern_name,
            pattern_provider,
            &bench_name,
            |v| {
                let _ = S::sort(v);
            },
        );
    }
}

/// The building blocks the sorts are made of, selected with `BENCH_OTHER`.
#[inline(never)]
fn bench_other<T: Ord + std::fmt::Debug>(
    c: &mut Criterion,
    other: &str,
    test_size: usize,
    transform_name: &str,
    transform: &fn(Vec<i32>) -> Vec<T>,
    pattern_name: &str,
    pattern_provider: &fn(usize) -> Vec<i32>,
) {
    if test_size == 0 {
        return;
    }

    match other {
        "partition" => bench_fn(
            c,
            test_size,
            transform_name,
            transform,
            pattern_name,
            pattern_provider,
            "partition",
            |v| {
                let len = v.len();
                let _ = black_box(partition_range(v, 0, len, natural));
            },
        ),
        "binary_search" => {
            if pattern_name != "ascending" {
                // Needs sorted input.
                return;
            }

            // The last value is the one searched for, anywhere in the range of the pattern.
            let search_pattern_provider = |len: usize| -> Vec<i32> {
                let rand_val = (thread_rng().gen::<u32>() % len as u32) as i32;

                let mut v = pattern_provider(len);
                v.push(rand_val);

                v
            };

            bench_fn(
                c,
                test_size,
                transform_name,
                transform,
                pattern_name,
                search_pattern_provider,
                "binary_search",
                |v| {
                    let v = &*v;
                    let end = v.len() - 1;
                    let _ = black_box(binary_search_range(v, &v[end], 0, end, natural));
                },
            )
        }
        "heap" => bench_fn(
            c,
            test_size,
            transform_name,
            transform,
            pattern_name,
            pattern_provider,
            "build_max_heap",
            |v| {
                let len = v.len();
                let _ = build_max_heap(v, len, natural);
                v.swap(0, len - 1);
                let _ = black_box(max_heapify(v, 0, len - 1, natural));
            },
        ),
        "min_max" => bench_fn(
            c,
            test_size,
            transform_name,
            transform,
            pattern_name,
            pattern_provider,
            "min_max",
            |v| {
                let _ = black_box(min_max(v, natural));
            },
        ),
        _ => panic!("Unknown BENCH_OTHER value: '{other}'."),
    }
}

fn bench_patterns<T: Ord + std::fmt::Debug>(
    c: &mut Criterion,
    test_size: usize,
    transform_name: &str,
    transform: fn(Vec<i32>) -> Vec<T>,
) {
    let pattern_providers: Vec<(&'static str, fn(usize) -> Vec<i32>)> = vec![
        ("random", patterns::random),
        ("random_dense", |size| {
            patterns::random_uniform(size, 0..=(((size as f64).log2().round()) as i32))
        }),
        ("random_binary", |size| patterns::random_uniform(size, 0..=1)),
        ("ascending", patterns::ascending),
        ("descending", patterns::descending),
        ("saws_long", |size| {
            patterns::saw_mixed(size, ((size as f64).log2().round()) as usize)
        }),
        ("pipe_organ", patterns::pipe_organ),
    ];

    for (pattern_name, pattern_provider) in pattern_providers.iter() {
        if test_size < 3 && *pattern_name != "random" {
            continue;
        }

        if let Ok(other) = env::var("BENCH_OTHER") {
            bench_other(
                c,
                &other,
                test_size,
                transform_name,
                &transform,
                pattern_name,
                pattern_provider,
            );
            continue;
        }

        // --- Stable sorts ---

        bench_impl(
            c,
            test_size,
            transform_name,
            &transform,
            pattern_name,
            pattern_provider,
            stable::insertion::SortImpl,
        );

        bench_impl(
            c,
            test_size,
            transform_name,
            &transform,
            pattern_name,
            pattern_provider,
            stable::binary_insertion::SortImpl,
        );

        bench_impl(
            c,
            test_size,
            transform_name,
            &transform,
            pattern_name,
            pattern_provider,
            stable::merge::SortImpl,
        );

        // --- Unstable sorts ---

        bench_impl(
            c,
            test_size,
            transform_name,
            &transform,
            pattern_name,
            pattern_provider,
            unstable::heap::SortImpl,
        );

        bench_impl(
            c,
            test_size,
            transform_name,
            &transform,
            pattern_name,
            pattern_provider,
            unstable::quick::SortImpl,
        );

        bench_impl(
            c,
            test_size,
            transform_name,
            &transform,
            pattern_name,
            pattern_provider,
            unstable::quick_random::SortImpl,
        );
    }
}

fn ensure_true_random() {
    // Ensure that random vecs are actually different.
    let random_vec_a = patterns::random(5);
    let random_vec_b = patterns::random(5);

    assert_ne!(random_vec_a, random_vec_b);
}

fn criterion_benchmark(c: &mut Criterion) {
    let test_sizes = [
        0, 1, 2, 3, 5, 8, 11, 16, 20, 24, 36, 50, 101, 200, 500, 1_000, 2_048, 10_000, 100_000,
    ];

    patterns::disable_fixed_seed();
    ensure_true_random();

    for test_size in test_sizes {
        // Basic type often used to test sorting algorithms.
        bench_patterns(c, test_size, "i32", |values| values);

        // Common type for usize on 64-bit machines.
        // Sorting indices is very common.
        bench_patterns(c, test_size, "u64", |values| {
            values
                .iter()
                .map(|val| -> u64 {
                    // Extends the value into the 64 bit range,
                    // while preserving input order.
                    let x = ((*val as i64) + (i32::MAX as i64) + 1) as u64;
                    x.checked_mul(i32::MAX as u64).unwrap()
                })
                .collect()
        });

        // Larger type that is not Copy and does heap access.
        bench_patterns(c, test_size, "string", |values| {
            values
                .iter()
                .map(|val| format!("{:010}", val.saturating_abs()))
                .collect()
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
