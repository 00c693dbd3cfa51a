//! Fills a table to a target load factor with each strategy and prints the
//! resulting slot-run clustering.

use clap::Parser;
use probe_hash::HashFn;
use probe_hash::HashTable;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

#[derive(Parser, Debug)]
struct Args {
    /// Number of slots per table.
    #[arg(short = 'm', long, default_value_t = 10_000)]
    table_size: usize,

    /// Fraction of slots to fill.
    #[arg(short = 'a', long, default_value_t = 0.75)]
    load_factor: f64,

    /// Seed for the key generator.
    #[arg(short = 's', long, default_value_t = 42)]
    seed: u64,
}

fn main() {
    let args = Args::parse();
    let n = (args.table_size as f64 * args.load_factor) as usize;

    let mut rng = SmallRng::seed_from_u64(args.seed);
    let keys: Vec<i32> = (0..n).map(|_| rng.random_range(0..i32::MAX)).collect();

    println!(
        "Filling {} of {} slots with uniform random keys",
        n, args.table_size
    );

    for hash_fn in HashFn::ALL {
        let mut table = HashTable::new(args.table_size, hash_fn);
        let mut failed = 0usize;
        for &key in &keys {
            if !table.insert(key).ok {
                failed += 1;
            }
        }

        println!("\n--- {} ---", hash_fn.name());
        if failed > 0 {
            println!("{} inserts failed (table full)", failed);
        }
        table.cluster_stats().print();
    }
}
