//! Range-partition prime finder with immediate output.
//!
//! The search range [2, limit] is divided into contiguous chunks, one per
//! worker thread. Each worker prints every prime the moment it is found,
//! serialized through stdout's lock. Output order across workers is
//! unspecified: interleaving reflects real-time discovery order, not
//! numeric order.

use std::io;
use std::thread;

use clap::Parser;

use primebench::config::Config;
use primebench::partition::split_range;
use primebench::primality::is_prime;
use primebench::report;

#[derive(Parser)]
#[command(name = "range_immediate")]
#[command(about = "Find primes by splitting the number range across threads, printing as found")]
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
    let stdout = io::stdout();

    thread::scope(|scope| {
        for part in &parts {
            let stdout = &stdout;
            scope.spawn(move || {
                for n in part.low..=part.high {
                    if is_prime(n) {
                        // Lock held only around emitting the one line, never
                        // around the scan itself
                        let mut out = stdout.lock();
                        if let Err(e) = report::write_prime_line(&mut out, n, part.index) {
                            eprintln!("Error writing prime: {}", e);
                        }
                    }
                }
            });
        }
    });

    report::print_end();
}
