// src/integer_search/mod.rs
//
// Integer-property search built on trial-division primality:
//
//   is_prime / prime_range        primality and ranged enumeration
//   factorize / proper_divisors   prime factors and proper divisors
//   perfect_numbers               brute-force perfect number search
//   mersenne_*                    Mersenne exponents and counterexamples
//
// Every function is pure: no prime cache survives between calls.

pub mod factorization;
pub mod mersenne;
pub mod perfect;
pub mod primality;

pub use factorization::{factorize, proper_divisor_sum, proper_divisors};
pub use mersenne::{first_mersenne_counterexample, mersenne_number, mersenne_search};
pub use perfect::perfect_numbers;
pub use primality::{is_prime, prime_range};
