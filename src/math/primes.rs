//! Primality classification.
//!
//! ## Purpose
//!
//! Decides whether a coefficient should be classified as prime for display.
//! The result never alters the table.
//!
//! ## Design notes
//!
//! * **Algorithm**: Trial division by `6k ± 1` candidates after ruling out
//!   multiples of 2 and 3.
//! * **Termination**: Candidates stop once `d * d > v`.

/// Test whether `value` is prime.
pub fn is_prime(value: u64) -> bool {
    if value <= 1 {
        return false;
    }
    if value <= 3 {
        return true;
    }
    if value % 2 == 0 || value % 3 == 0 {
        return false;
    }

    let mut d: u64 = 5;
    while d.saturating_mul(d) <= value {
        if value % d == 0 || value % (d + 2) == 0 {
            return false;
        }
        d += 6;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_values() {
        let primes: [u64; 10] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29];
        for v in 0..30 {
            assert_eq!(is_prime(v), primes.contains(&v), "v = {}", v);
        }
    }

    #[test]
    fn squares_of_primes_are_composite() {
        assert!(!is_prime(25));
        assert!(!is_prime(49));
        assert!(!is_prime(121));
        assert!(!is_prime(169));
    }
}
