//! Divisor-partition prime finder with immediate output.
//!
//! Candidate numbers are visited sequentially; for each one, the divisor
//! search is split across a fresh set of worker threads that race to find a
//! divisor. Primes print the moment they are confirmed. Spawning threads per
//! candidate is deliberately expensive for small numbers; that overhead is
//! what this variant measures.

use std::thread;

use clap::Parser;

use primebench::config::Config;
use primebench::divisor::{DivisionStrategy, SpawnPerCandidate};
use primebench::report::{self, now_str};

#[derive(Parser)]
#[command(name = "divtest_immediate")]
#[command(about = "Find primes by splitting each number's divisor search across threads, printing as found")]
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

    let strategy = SpawnPerCandidate { threads: workers };
    for n in 2..=limit {
        if strategy.test(n) {
            println!(
                "[PRIME] n={} tid={:?} div_threads={} ts={}",
                n,
                thread::current().id(),
                workers,
                now_str()
            );
        }
    }

    report::print_end();
}
