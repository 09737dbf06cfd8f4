// src/integer_search/factorization.rs
//
// Prime factorization and proper divisors by trial division.

use log::trace;
use num::integer::Roots;
use crate::integer_search::primality::prime_range;

/// Prime factors of `n` in ascending order, with multiplicity.
///
/// Trial divisors are the primes up to `floor(sqrt(n)) + 1`, enumerated once
/// up front. Each is divided out for as long as it divides; whatever cofactor
/// is left above one is itself prime. Returns an empty vector for `n <= 1`.
///
/// # Examples
/// ```
/// use mathkit::integer_search::factorize;
///
/// assert_eq!(factorize(60), vec![2, 2, 3, 5]);
/// assert_eq!(factorize(97), vec![97]);
/// assert!(factorize(1).is_empty());
/// ```
pub fn factorize(n: i64) -> Vec<i64> {
    if n <= 1 {
        return Vec::new();
    }

    let candidates = prime_range(1, n.sqrt() + 1);
    trace!("Factorizing {} with {} candidate primes", n, candidates.len());

    let mut factors = Vec::new();
    let mut remaining = n;
    for p in candidates {
        while remaining % p == 0 {
            factors.push(p);
            remaining /= p;
        }
    }

    if remaining > 1 {
        factors.push(remaining);
    }
    factors
}

/// Divisors of `k` strictly below `k`, ascending. Empty for `k <= 1`.
pub fn proper_divisors(k: i64) -> Vec<i64> {
    (1..k).filter(|d| k % d == 0).collect()
}

/// Sum of the proper divisors of `k`, by the same trial division as
/// [`proper_divisors`] without collecting them.
pub fn proper_divisor_sum(k: i64) -> i64 {
    (1..k).filter(|d| k % d == 0).sum()
}
