//! Divisor-partition prime finder with delayed, sorted output.
//!
//! Candidate numbers are visited sequentially; for each one, the divisor
//! search is split across a fresh set of worker threads. Primes accumulate
//! in a single vector and print in one sorted batch at the end.

use clap::Parser;

use primebench::config::Config;
use primebench::divisor::{DivisionStrategy, SpawnPerCandidate};
use primebench::report;

#[derive(Parser)]
#[command(name = "divtest_delayed")]
#[command(about = "Find primes by splitting each number's divisor search across threads, printing sorted at the end")]
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

    // Crude n/ln(n) estimate to reduce reallocation
    let mut primes: Vec<u64> =
        Vec::with_capacity((limit as f64 / (limit.max(3) as f64).ln()) as usize + 1);

    let strategy = SpawnPerCandidate { threads: workers };
    for n in 2..=limit {
        if strategy.test(n) {
            primes.push(n);
        }
    }

    // The sequential outer loop already pushes in ascending order
    primes.sort_unstable();

    if let Err(e) = report::write_sorted(&primes) {
        eprintln!("Error writing results: {}", e);
    }

    report::print_end();
}
