//! Console harness comparing the three hash strategies.
//!
//! Runs every strategy against a best-case (sequential), average-case
//! (seeded uniform), and worst-case (clustered) key set, averaging probe
//! counts and wall-clock time over many repetitions. Each repetition gets a
//! fresh table so no state leaks between trials.

use std::time::Instant;

use clap::Parser;
use probe_hash::HashFn;
use probe_hash::HashTable;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

#[derive(Parser, Debug)]
struct Args {
    /// Number of slots per table.
    #[arg(short = 'm', long, default_value_t = 50_000)]
    table_size: usize,

    /// Number of keys inserted (and then removed) per repetition.
    #[arg(short = 'n', long, default_value_t = 25_000)]
    data_size: usize,

    /// Repetitions to average over.
    #[arg(short = 'r', long, default_value_t = 1_000)]
    repetitions: usize,

    /// Seed for the uniform key generator.
    #[arg(short = 's', long, default_value_t = 42)]
    seed: u64,
}

#[derive(Clone, Copy)]
enum Scenario {
    Sequential,
    Uniform,
    Clustered,
}

impl Scenario {
    fn label(self) -> &'static str {
        match self {
            Scenario::Sequential => "best case (sequential keys)",
            Scenario::Uniform => "average case (uniform keys)",
            Scenario::Clustered => "worst case (clustered keys)",
        }
    }

    fn keys(self, hash_fn: HashFn, n: usize, table_size: usize, seed: u64) -> Vec<i32> {
        match self {
            Scenario::Sequential => (0..n as i32).collect(),
            Scenario::Uniform => {
                let mut rng = SmallRng::seed_from_u64(seed);
                (0..n).map(|_| rng.random_range(0..=10_000)).collect()
            }
            // One pattern per strategy, each chosen to pile keys onto as few
            // home slots as possible.
            Scenario::Clustered => match hash_fn {
                HashFn::Modulo => (0..n).map(|i| (i as i64 * table_size as i64) as i32).collect(),
                HashFn::Multiplication => (0..n).map(|i| (i as i64 * 111) as i32).collect(),
                HashFn::DigitSum => vec![111; n],
            },
        }
    }
}

#[derive(Default)]
struct Totals {
    insert_probes: u64,
    remove_probes: u64,
    insert_ns: u128,
    remove_ns: u128,
}

fn run_trials(hash_fn: HashFn, keys: &[i32], table_size: usize, repetitions: usize) -> Totals {
    let mut totals = Totals::default();

    for _ in 0..repetitions {
        let mut table = HashTable::new(table_size, hash_fn);

        let start = Instant::now();
        for &key in keys {
            totals.insert_probes += table.insert(key).probes as u64;
        }
        let mid = Instant::now();
        for &key in keys {
            totals.remove_probes += table.remove(key).probes as u64;
        }
        let end = Instant::now();

        totals.insert_ns += (mid - start).as_nanos();
        totals.remove_ns += (end - mid).as_nanos();
    }

    totals
}

fn report(totals: &Totals, repetitions: usize, data_size: usize) {
    let ops = (repetitions * data_size) as f64;
    let reps = repetitions as f64;
    println!("\tavg probes per insert: {:.4}", totals.insert_probes as f64 / ops);
    println!("\tavg probes per remove: {:.4}", totals.remove_probes as f64 / ops);
    println!(
        "\tavg insert batch time:  {:.4} us",
        totals.insert_ns as f64 / reps / 1000.0
    );
    println!(
        "\tavg remove batch time:  {:.4} us",
        totals.remove_ns as f64 / reps / 1000.0
    );
}

fn main() {
    let args = Args::parse();

    println!("=======================================================");
    println!(
        "Table size: {}, keys per repetition: {}",
        args.table_size, args.data_size
    );
    println!(
        "Load factor (alpha): {:.4}",
        args.data_size as f64 / args.table_size as f64
    );
    println!("Repetitions: {}", args.repetitions);
    println!("=======================================================");

    for hash_fn in HashFn::ALL {
        println!("\n--- {} ---", hash_fn.name().to_uppercase());
        for scenario in [Scenario::Sequential, Scenario::Uniform, Scenario::Clustered] {
            let keys = scenario.keys(hash_fn, args.data_size, args.table_size, args.seed);
            println!("{}:", scenario.label());
            let totals = run_trials(hash_fn, &keys, args.table_size, args.repetitions);
            report(&totals, args.repetitions, args.data_size);
        }
    }
}
