/// Test if a number is prime using trial division.
///
/// Special-cases divisibility by 2 and 3, then checks divisors of the form
/// 6k±1 up to sqrt(n). All primes > 3 are of the form 6k±1, so this skips
/// two thirds of the candidate divisors.
///
/// Pure arithmetic, no failure modes. Overflow is not handled; callers keep
/// n within the 63-bit-safe range.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    if n % 3 == 0 {
        return n == 3;
    }
    let mut d = 5;
    while d * d <= n {
        if n % d == 0 || n % (d + 2) == 0 {
            return false;
        }
        d += 6;
    }
    true
}

/// Collect all primes in the inclusive range [low, high] in ascending order.
///
/// This is the per-worker scan loop of the range-partition variants: each
/// worker calls it over its own sub-range, so the resulting bucket is sorted
/// by construction.
pub fn collect_primes(low: u64, high: u64) -> Vec<u64> {
    let mut primes = Vec::new();
    if high >= low {
        // Rough estimate for prime density to reduce reallocation
        primes.reserve(((high - low + 1) / 10 + 1) as usize);
    }
    for n in low..=high {
        if is_prime(n) {
            primes.push(n);
        }
    }
    primes
}
