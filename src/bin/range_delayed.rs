//! Range-partition prime finder with delayed, sorted output.
//!
//! The search range [2, limit] is divided into contiguous chunks, one per
//! worker thread. Each worker collects primes into its own bucket with no
//! locking; after all workers join, the buckets are combined with a k-way
//! min-heap merge and printed in ascending order in one batch.

use std::thread;

use clap::Parser;

use primebench::config::Config;
use primebench::merge::kway_merge;
use primebench::partition::split_range;
use primebench::primality::collect_primes;
use primebench::report;

#[derive(Parser)]
#[command(name = "range_delayed")]
#[command(about = "Find primes by splitting the number range across threads, printing sorted at the end")]
struct Cli {
    #[arg(
        short,
        long,
        default_value = "config.txt",
        help = "Path to key=value configuration file"
    )]
    config: String,
    #[arg(short, long, help = "Override worker thread count from the config file")]
    threads: Option<i64>,
    #[arg(short, long, help = "Override inclusive upper search bound from the config file")]
    limit: Option<i64>,
}

fn main() {
    let cli = Cli::parse();
    let mut config = Config::load(&cli.config);
    if let Some(threads) = cli.threads {
        config.threads = threads;
    }
    if let Some(limit) = cli.limit {
        config.limit = limit;
    }

    let workers = config.worker_count();
    let limit = config.search_limit();

    report::print_start();

    let parts = split_range(2, limit, workers);
    let mut buckets: Vec<Vec<u64>> = Vec::with_capacity(parts.len());
    buckets.resize_with(parts.len(), Vec::new);

    // Buckets are disjoint, so workers need no synchronization beyond the
    // join at the end of the scope
    thread::scope(|scope| {
        for (part, bucket) in parts.iter().zip(buckets.iter_mut()) {
            scope.spawn(move || {
                *bucket = collect_primes(part.low, part.high);
            });
        }
    });

    let merged = kway_merge(&buckets);
    if let Err(e) = report::write_merged(&merged) {
        eprintln!("Error writing results: {}", e);
    }
    report::print_bucket_summary(&buckets);

    report::print_end();
}
