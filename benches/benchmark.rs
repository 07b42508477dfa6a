use criterion::{criterion_group, criterion_main, Criterion};

use aoc2025::{load_input, Phase, ALL_SOLUTIONS};

pub fn criterion_benchmark(c: &mut Criterion) {
    for (i, solution) in ALL_SOLUTIONS.iter().enumerate() {
        c.bench_function(&format!("day{}", i + 1), |b| {
            let input = load_input(i + 1, Phase::Test).unwrap();
            b.iter(|| ((solution.part1)(&input), (solution.part2)(&input)))
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
