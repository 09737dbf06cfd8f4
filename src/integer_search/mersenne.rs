// src/integer_search/mersenne.rs
//
// Mersenne primes: 2^p - 1 prime, with p prime.
//
// 2^p - 1 is computed with checked integer exponentiation. Floating-point
// powers lose exactness above p ~ 53 and would corrupt the primality test.
// The largest exponent that fits an i64 is 62, so every prime p <= 61 can
// be tested; trial division on 2^61 - 1 takes ~1.5e9 divisions.

use log::{debug, trace};
use crate::error::IntegerSearchError;
use crate::integer_search::primality::is_prime;

/// Exact `2^p - 1`, or [`IntegerSearchError::ExponentOverflow`] when it does
/// not fit in an `i64` (`p >= 63`).
pub fn mersenne_number(p: u32) -> Result<i64, IntegerSearchError> {
    2i64.checked_pow(p)
        .map(|power| power - 1)
        .ok_or(IntegerSearchError::ExponentOverflow { exponent: p })
}

/// Prime exponents `p <= limit` for which `2^p - 1` is prime, ascending.
///
/// # Examples
/// ```
/// use mathkit::integer_search::mersenne_search;
///
/// assert_eq!(mersenne_search(20).unwrap(), vec![2, 3, 5, 7, 13, 17, 19]);
/// ```
pub fn mersenne_search(limit: u32) -> Result<Vec<u32>, IntegerSearchError> {
    // exponents are produced lazily, so the first overflowing one (67) stops
    // the collection before any Mersenne candidate is tested
    let candidates = prime_exponents(limit)
        .map(|p| mersenne_number(p).map(|m| (p, m)))
        .collect::<Result<Vec<_>, _>>()?;

    let mut exponents = Vec::new();
    for (p, candidate) in candidates {
        if is_prime(candidate) {
            trace!("2^{} - 1 = {} is prime", p, candidate);
            exponents.push(p);
        }
    }
    debug!("Found {} Mersenne exponents up to {}", exponents.len(), limit);
    Ok(exponents)
}

/// Smallest prime `p <= limit` whose `2^p - 1` is composite, or `None` if
/// every prime exponent up to `limit` gives a Mersenne prime.
///
/// This is the counterexample to "2^p - 1 is prime for every prime p".
///
/// ```
/// use mathkit::integer_search::first_mersenne_counterexample;
///
/// assert_eq!(first_mersenne_counterexample(100).unwrap(), Some(11));
/// assert_eq!(first_mersenne_counterexample(10).unwrap(), None);
/// ```
pub fn first_mersenne_counterexample(limit: u32) -> Result<Option<u32>, IntegerSearchError> {
    for p in prime_exponents(limit) {
        if !is_prime(mersenne_number(p)?) {
            return Ok(Some(p));
        }
    }
    Ok(None)
}

/// Prime exponents in `[2, limit]`, tested one at a time as they are pulled.
fn prime_exponents(limit: u32) -> impl Iterator<Item = u32> {
    (2..=limit).filter(|&p| is_prime(i64::from(p)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mersenne_number() {
        assert_eq!(mersenne_number(0), Ok(0));
        assert_eq!(mersenne_number(2), Ok(3));
        assert_eq!(mersenne_number(11), Ok(2047));
        assert_eq!(mersenne_number(31), Ok(2_147_483_647));
        assert_eq!(mersenne_number(62), Ok(i64::MAX / 2));
    }

    #[test]
    fn test_mersenne_number_is_exact_beyond_f64_precision() {
        // 2^59 - 1 is odd; the nearest f64 to it is the even 2^59
        let exact = mersenne_number(59).unwrap();
        assert_eq!(exact % 2, 1);
        assert_ne!(exact as f64 as i64, exact);
    }

    #[test]
    fn test_mersenne_number_overflow() {
        assert_eq!(mersenne_number(63), Err(IntegerSearchError::ExponentOverflow { exponent: 63 }));
        assert_eq!(mersenne_number(64), Err(IntegerSearchError::ExponentOverflow { exponent: 64 }));
    }

    #[test]
    fn test_mersenne_search_to_40() {
        assert_eq!(mersenne_search(40).unwrap(), vec![2, 3, 5, 7, 13, 17, 19, 31]);
    }

    #[test]
    fn test_mersenne_search_small_limits() {
        assert!(mersenne_search(0).unwrap().is_empty());
        assert!(mersenne_search(1).unwrap().is_empty());
        assert_eq!(mersenne_search(2).unwrap(), vec![2]);
    }

    #[test]
    fn test_mersenne_search_overflowing_exponent() {
        assert_eq!(mersenne_search(70), Err(IntegerSearchError::ExponentOverflow { exponent: 67 }));
    }

    #[test]
    fn test_mersenne_search_huge_limit_returns_at_once() {
        // only the exponents up to 67 are ever examined
        assert_eq!(mersenne_search(u32::MAX), Err(IntegerSearchError::ExponentOverflow { exponent: 67 }));
    }

    #[test]
    fn test_first_counterexample_huge_limit_stops_at_eleven() {
        assert_eq!(first_mersenne_counterexample(u32::MAX), Ok(Some(11)));
    }

    #[test]
    fn test_prime_exponents_are_lazy_and_ordered() {
        let first: Vec<u32> = prime_exponents(u32::MAX).take(6).collect();
        assert_eq!(first, vec![2, 3, 5, 7, 11, 13]);
        assert!(prime_exponents(1).next().is_none());
    }

    #[test]
    fn test_first_counterexample() {
        // 2^11 - 1 = 2047 = 23 x 89
        assert_eq!(first_mersenne_counterexample(11), Ok(Some(11)));
        assert_eq!(first_mersenne_counterexample(7), Ok(None));
    }
}
