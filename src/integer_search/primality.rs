// src/integer_search/primality.rs
//
// Deterministic trial-division primality. Exact for every i64, O(sqrt(n)).

use num::integer::Roots;

/// Returns true when `n` is prime.
///
/// Every `n <= 1` is rejected. Otherwise `n` is divided by each candidate in
/// `2..=floor(sqrt(n))`; the range is empty for 2 and 3.
///
/// # Examples
/// ```
/// use mathkit::integer_search::is_prime;
///
/// assert!(is_prime(13));
/// assert!(!is_prime(1));
/// assert!(!is_prime(91)); // 7 x 13
/// ```
pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }
    let bound = n.sqrt();
    (2..=bound).all(|divisor| n % divisor != 0)
}

/// All primes in `[start, end]`, inclusive on both ends, ascending.
///
/// An empty range (`start > end`) or one without primes gives an empty vector.
pub fn prime_range(start: i64, end: i64) -> Vec<i64> {
    (start..=end).filter(|&n| is_prime(n)).collect()
}
