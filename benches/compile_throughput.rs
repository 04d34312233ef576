//! Class-set compiler micro-benchmarks
//!
//! Measures end-to-end compilation throughput for token sets of the
//! size a typical page produces.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use siftcss::compile_tokens;
use std::hint::black_box;

/// A realistic mix: static lookups, colors, spacing, variants,
/// breakpoints, fractions, and a few misses.
const PAGE_TOKENS: &[&str] = &[
    "flex", "items-center", "justify-between", "p-4", "px-6", "-mt-2",
    "bg-white", "bg-blue-500", "bg-blue-500/50", "text-gray-900",
    "text-2xl", "font-bold", "rounded-lg", "rounded-full", "shadow-md",
    "w-full", "w-1/2", "w-[200px]", "h-screen", "max-w-2xl", "gap-x-2",
    "hover:bg-blue-600", "focus:outline-none", "dark:bg-gray-900",
    "group-hover:underline", "md:flex", "md:hidden", "lg:grid",
    "md:hover:bg-blue-600", "2xl:px-6", "transition", "duration-150",
    "cursor-pointer", "select-none", "unknown-class-xyz",
];

fn compile_benchmark(c: &mut Criterion) {
    c.bench_function("compile_page_tokens", |b| {
        b.iter(|| compile_tokens(black_box(PAGE_TOKENS).iter().copied()))
    });

    let mut group = c.benchmark_group("compile_scaling");
    for repeat in [1usize, 10, 50] {
        let tokens: Vec<String> = (0..repeat)
            .flat_map(|i| {
                PAGE_TOKENS
                    .iter()
                    .map(move |t| format!("{}:{}", ["sm", "md", "lg", "xl", "2xl"][i % 5], t))
            })
            .collect();
        group.bench_with_input(
            BenchmarkId::from_parameter(tokens.len()),
            &tokens,
            |b, tokens| b.iter(|| compile_tokens(tokens.iter().map(String::as_str))),
        );
    }
    group.finish();
}

criterion_group!(benches, compile_benchmark);
criterion_main!(benches);
