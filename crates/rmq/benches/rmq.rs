use bench::apply_large_runtime_config;
use bench::apply_medium_runtime_config;
use bench::apply_small_runtime_config;
use bench::default_rng;
use bench::random_ranges;
use bench::random_ranges_of_width;
use bench::random_values;
use criterion::BenchmarkGroup;
use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
use criterion::measurement::Measurement;
use rmq::NaiveRmq;
use rmq::SqrtDecompositionRmq;
use rmq::StaticRmq;
use std::hint::black_box;
use std::num::NonZeroUsize;
use std::ops::Range;

const SIZES: [usize; 4] = [1_024, 4_096, 16_384, 65_536];
const NAIVE_MAX_SIZE: usize = 4_096;
const VALUE_RANGE: std::ops::RangeInclusive<i64> = -1_000_000_000..=1_000_000_000;

#[derive(Clone, Copy, Debug)]
enum Workload {
    /// Ranges that usually stay inside one block.
    Short,
    /// Ranges spanning about `sqrt(n)` blocks.
    Sqrt,
    /// Uniformly random endpoints.
    Uniform,
}

impl Workload {
    fn label(self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Sqrt => "sqrt",
            Self::Uniform => "uniform",
        }
    }

    fn ranges(self, rng: &mut impl rand::Rng, n: usize, q: usize) -> Vec<Range<usize>> {
        let m = rmq::ceil_sqrt(n).max(1);
        match self {
            Self::Short => random_ranges_of_width(rng, n, m / 2, q),
            Self::Sqrt => random_ranges_of_width(rng, n, m * m / 2, q),
            Self::Uniform => random_ranges(rng, n, q),
        }
    }
}

fn apply_runtime_config_for_size<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, size: usize) {
    if size <= 4_096 {
        apply_small_runtime_config(group);
    } else if size <= 16_384 {
        apply_medium_runtime_config(group);
    } else {
        apply_large_runtime_config(group);
    }
}

fn bench_queries<M, R>(
    group: &mut BenchmarkGroup<'_, M>,
    name: &str,
    size: usize,
    rmq: &R,
    queries: &[Range<usize>],
) where
    M: Measurement,
    R: StaticRmq,
{
    group.bench_function(BenchmarkId::new(name, size), |bencher| {
        bencher.iter(|| {
            let mut acc = 0_i64;
            for range in queries {
                acc ^= rmq.min(black_box(range.clone())).unwrap();
            }
            black_box(acc);
        })
    });
}

fn bench_build(c: &mut Criterion) {
    let mut rng = default_rng();
    let mut group = c.benchmark_group("rmq/build");

    for &size in &SIZES {
        apply_runtime_config_for_size(&mut group, size);
        let values = random_values(&mut rng, size, VALUE_RANGE);
        group.bench_function(BenchmarkId::new("sqrt", size), |bencher| {
            bencher.iter(|| SqrtDecompositionRmq::new(black_box(&values)))
        });
    }

    group.finish();
}

fn bench_query(c: &mut Criterion) {
    let workloads = [Workload::Short, Workload::Sqrt, Workload::Uniform];
    let mut rng = default_rng();

    for workload in workloads {
        let mut group = c.benchmark_group(format!("rmq/workload/{}", workload.label()));

        for &size in &SIZES {
            apply_runtime_config_for_size(&mut group, size);
            let values = random_values(&mut rng, size, VALUE_RANGE);
            let queries = workload.ranges(&mut rng, size, size);

            let sqrt = SqrtDecompositionRmq::new(&values);
            bench_queries(&mut group, "sqrt", size, &sqrt, &queries);

            let m = sqrt.block_size();
            for (name, block_size) in [("sqrt_quarter_block", m / 4), ("sqrt_4x_block", m * 4)] {
                let Some(block_size) = NonZeroUsize::new(block_size) else {
                    continue;
                };
                let rmq = SqrtDecompositionRmq::with_block_size(&values, block_size);
                bench_queries(&mut group, name, size, &rmq, &queries);
            }

            if size <= NAIVE_MAX_SIZE {
                let naive = NaiveRmq::new(&values);
                bench_queries(&mut group, "naive", size, &naive, &queries);
            }
        }

        group.finish();
    }
}

criterion_group!(benches, bench_build, bench_query);
criterion_main!(benches);
