use core::hash::BuildHasherDefault;
use core::hint::black_box;

use criterion::AxisScale;
use criterion::BatchSize;
use criterion::Criterion;
use criterion::PlotConfiguration;
use criterion::Throughput;
use criterion::criterion_group;
use criterion::criterion_main;
use hashbrown::HashSet;
use probe_hash::HashFn;
use probe_hash::HashTable;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand_distr::Zipf;
use siphasher::sip::SipHasher;

const SIZES: &[usize] = &[(1 << 10), (1 << 12), (1 << 14)];

const SEED: u64 = 42;

/// Uniform keys are drawn from this closed range, so larger tables see
/// duplicate keys just like the console harness does.
const UNIFORM_KEY_RANGE: i32 = 10_000;

/// Every table is filled to load factor 0.5.
fn data_size(table_size: usize) -> usize {
    table_size / 2
}

#[derive(Clone, Copy)]
enum Scenario {
    Sequential,
    Uniform,
    Clustered,
}

impl Scenario {
    fn name(self) -> &'static str {
        match self {
            Scenario::Sequential => "sequential",
            Scenario::Uniform => "uniform",
            Scenario::Clustered => "clustered",
        }
    }

    /// Key set for one trial. The clustered patterns are chosen per strategy
    /// to force every key onto the same (or nearly the same) home slot.
    fn keys(self, hash_fn: HashFn, n: usize, table_size: usize) -> Vec<i32> {
        match self {
            Scenario::Sequential => (0..n as i32).collect(),
            Scenario::Uniform => {
                let mut rng = SmallRng::seed_from_u64(SEED);
                (0..n).map(|_| rng.random_range(0..=UNIFORM_KEY_RANGE)).collect()
            }
            Scenario::Clustered => match hash_fn {
                HashFn::Modulo => (0..n).map(|i| (i * table_size) as i32).collect(),
                HashFn::Multiplication => (0..n).map(|i| (i * 111) as i32).collect(),
                HashFn::DigitSum => vec![111; n],
            },
        }
    }
}

fn bench_insert(c: &mut Criterion) {
    for scenario in [Scenario::Sequential, Scenario::Uniform, Scenario::Clustered] {
        let mut group = c.benchmark_group(format!("insert_{}", scenario.name()));
        group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

        for &size in SIZES {
            let n = data_size(size);
            group.throughput(Throughput::Elements(n as u64));

            for hash_fn in HashFn::ALL {
                let keys = scenario.keys(hash_fn, n, size);
                group.bench_function(format!("{}/{}", hash_fn.name(), size), |b| {
                    b.iter_batched(
                        || keys.clone(),
                        |keys| {
                            let mut table = HashTable::new(size, hash_fn);
                            for key in keys {
                                black_box(table.insert(key));
                            }
                            black_box(table)
                        },
                        BatchSize::SmallInput,
                    )
                });
            }
        }

        group.finish();
    }
}

fn bench_insert_remove_cycle(c: &mut Criterion) {
    for scenario in [Scenario::Sequential, Scenario::Uniform, Scenario::Clustered] {
        let mut group = c.benchmark_group(format!("cycle_{}", scenario.name()));
        group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

        for &size in SIZES {
            let n = data_size(size);
            group.throughput(Throughput::Elements(2 * n as u64));

            for hash_fn in HashFn::ALL {
                let keys = scenario.keys(hash_fn, n, size);
                group.bench_function(format!("{}/{}", hash_fn.name(), size), |b| {
                    b.iter_batched(
                        || keys.clone(),
                        |keys| {
                            let mut table = HashTable::new(size, hash_fn);
                            for &key in &keys {
                                black_box(table.insert(key));
                            }
                            for &key in &keys {
                                black_box(table.remove(key));
                            }
                            black_box(table)
                        },
                        BatchSize::SmallInput,
                    )
                });
            }
        }

        group.finish();
    }
}

fn bench_insert_zipf(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_zipf");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for &size in SIZES {
        let n = data_size(size);
        let mut rng = SmallRng::seed_from_u64(SEED);
        let distr = Zipf::new(UNIFORM_KEY_RANGE as f32, 1.0).unwrap();
        let keys: Vec<i32> = (0..n).map(|_| rng.sample(distr) as i32).collect();

        group.throughput(Throughput::Elements(n as u64));

        for hash_fn in HashFn::ALL {
            group.bench_function(format!("{}/{}", hash_fn.name(), size), |b| {
                b.iter_batched(
                    || keys.clone(),
                    |keys| {
                        let mut table = HashTable::new(size, hash_fn);
                        for key in keys {
                            black_box(table.insert(key));
                        }
                        black_box(table)
                    },
                    BatchSize::SmallInput,
                )
            });
        }
    }

    group.finish();
}

/// Context baseline: the same uniform insert/remove cycle against a
/// general-purpose table. Not apples to apples (hashbrown deduplicates and
/// SipHasher does real mixing), just a sense of scale.
fn bench_uniform_baseline(c: &mut Criterion) {
    let mut group = c.benchmark_group("uniform_baseline");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for &size in SIZES {
        let n = data_size(size);
        let keys = Scenario::Uniform.keys(HashFn::Modulo, n, size);

        group.throughput(Throughput::Elements(2 * n as u64));

        group.bench_function(format!("probe_hash_modulo/{}", size), |b| {
            b.iter_batched(
                || keys.clone(),
                |keys| {
                    let mut table = HashTable::new(size, HashFn::Modulo);
                    for &key in &keys {
                        black_box(table.insert(key));
                    }
                    for &key in &keys {
                        black_box(table.remove(key));
                    }
                    black_box(table)
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("hashbrown_sip/{}", size), |b| {
            b.iter_batched(
                || keys.clone(),
                |keys| {
                    let mut set: HashSet<i32, BuildHasherDefault<SipHasher>> =
                        HashSet::with_capacity_and_hasher(size, BuildHasherDefault::default());
                    for &key in &keys {
                        black_box(set.insert(key));
                    }
                    for &key in &keys {
                        black_box(set.remove(&key));
                    }
                    black_box(set)
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_insert,
    bench_insert_remove_cycle,
    bench_insert_zipf,
    bench_uniform_baseline,
);

criterion_main!(benches);
