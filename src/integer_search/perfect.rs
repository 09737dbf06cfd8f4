// src/integer_search/perfect.rs

use log::debug;
use crate::integer_search::factorization::proper_divisor_sum;

/// Perfect numbers in `[1, limit]`, ascending.
///
/// Brute force: every candidate's proper divisors are found by trial division
/// up to `k - 1`, so the cost grows as O(limit^2). Fine for limits in the low
/// tens of thousands.
///
/// # Examples
/// ```
/// use mathkit::integer_search::perfect_numbers;
///
/// assert_eq!(perfect_numbers(100), vec![6, 28]);
/// ```
pub fn perfect_numbers(limit: i64) -> Vec<i64> {
    let found: Vec<i64> = (1..=limit).filter(|&k| proper_divisor_sum(k) == k).collect();
    debug!("Found {} perfect numbers up to {}", found.len(), limit);
    found
}
