use std::io::{self, BufWriter, Write};

use chrono::Local;

use crate::merge::MergedPrime;

/// Current local time with millisecond precision, "YYYY-MM-DD HH:MM:SS.mmm".
/// Used for the [START]/[END] banners and per-prime discovery timestamps.
pub fn now_str() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string()
}

pub fn print_start() {
    println!("[START] {}", now_str());
}

pub fn print_end() {
    println!("[END] {}", now_str());
}

/// One immediate-variant discovery line: the prime, the worker that found
/// it, the OS thread, and the discovery timestamp. Takes the caller's locked
/// writer so the lock is held only around this single emission.
pub fn write_prime_line(out: &mut impl Write, n: u64, worker: usize) -> io::Result<()> {
    writeln!(
        out,
        "[PRIME] n={} worker={} tid={:?} ts={}",
        n,
        worker,
        std::thread::current().id(),
        now_str()
    )
}

/// Write the delayed range variant's results block: a total line followed by
/// one line per prime with the worker that found it.
///
/// The whole block is built into a string buffer with itoa and flushed
/// through a buffered writer, so the output is one batch rather than a
/// write call per prime.
pub fn write_merged(merged: &[MergedPrime]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    writeln!(writer, "[RESULTS] total={}", merged.len())?;

    let mut buffer = String::with_capacity(merged.len() * 32 + 16);
    let mut itoa_buf = itoa::Buffer::new();
    for prime in merged {
        buffer.push_str("[PRIME] n=");
        buffer.push_str(itoa_buf.format(prime.value));
        buffer.push_str(" found_by_thread=");
        buffer.push_str(itoa_buf.format(prime.bucket));
        buffer.push('\n');
    }
    writer.write_all(buffer.as_bytes())?;
    writer.flush()
}

/// Write the delayed divisor variant's results block: a total line followed
/// by one bare line per prime, ascending.
pub fn write_sorted(primes: &[u64]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    writeln!(writer, "[RESULTS] total={}", primes.len())?;

    let mut buffer = String::with_capacity(primes.len() * 20 + 16);
    let mut itoa_buf = itoa::Buffer::new();
    for &prime in primes {
        buffer.push_str("[PRIME] n=");
        buffer.push_str(itoa_buf.format(prime));
        buffer.push('\n');
    }
    writer.write_all(buffer.as_bytes())?;
    writer.flush()
}

/// Per-worker accounting for the delayed range variant, written to stderr so
/// it never interleaves with the results block on stdout.
pub fn print_bucket_summary(buckets: &[Vec<u64>]) {
    eprintln!("[SUMMARY] threads_spawned={}", buckets.len());
    for (index, bucket) in buckets.iter().enumerate() {
        eprintln!("[SUMMARY] thread={} primes={}", index, bucket.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prime_line_format() {
        let mut out = Vec::new();
        write_prime_line(&mut out, 13, 2).unwrap();
        let line = String::from_utf8(out).unwrap();

        assert!(line.starts_with("[PRIME] n=13 worker=2 tid="));
        assert!(line.contains(" ts="));
        assert!(line.ends_with('\n'));
    }

    #[test]
    fn test_timestamp_format() {
        let ts = now_str();
        // "YYYY-MM-DD HH:MM:SS.mmm" is 23 characters
        assert_eq!(ts.len(), 23);
        assert_eq!(&ts[4..5], "-");
        assert_eq!(&ts[10..11], " ");
        assert_eq!(&ts[19..20], ".");
        assert!(ts[20..].chars().all(|c| c.is_ascii_digit()));
    }
}
