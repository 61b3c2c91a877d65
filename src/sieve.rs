//! Sieve of Eratosthenes over [0, LIMIT].
//!
//! The table is built once per run and read-only afterwards; every
//! downstream component borrows it immutably, so it can be shared across
//! rayon workers without locking.

use crate::InputError;

/// Boolean primality table indexed by 0..=limit.
#[derive(Debug, Clone)]
pub struct PrimalityTable {
    flags: Vec<bool>,
}

impl PrimalityTable {
    /// The largest index covered by the table.
    pub fn limit(&self) -> u64 {
        (self.flags.len() - 1) as u64
    }

    /// Whether `n` is prime. Indices beyond the table are reported as
    /// not prime; callers that need coverage guarantees validate against
    /// [`PrimalityTable::limit`] up front.
    pub fn is_prime(&self, n: u64) -> bool {
        self.flags.get(n as usize).copied().unwrap_or(false)
    }

    /// All primes in the table, ascending.
    pub fn primes(&self) -> Vec<u64> {
        (2..=self.limit()).filter(|&n| self.is_prime(n)).collect()
    }

    /// Number of primes in the table.
    pub fn count(&self) -> usize {
        self.flags.iter().filter(|&&p| p).count()
    }
}

/// Build a primality table over [0, limit] with the Sieve of Eratosthenes.
///
/// Rejects `limit < 2` with [`InputError::SieveLimit`]; a table with no
/// primes in it is never produced. O(limit log log limit).
pub fn build_sieve(limit: u64) -> Result<PrimalityTable, InputError> {
    if limit < 2 {
        return Err(InputError::SieveLimit(limit));
    }

    let n = limit as usize;
    let mut flags = vec![true; n + 1];
    flags[0] = false;
    flags[1] = false;

    let mut p = 2;
    while p * p <= n {
        if flags[p] {
            let mut multiple = p * p;
            while multiple <= n {
                flags[multiple] = false;
                multiple += p;
            }
        }
        p += 1;
    }

    Ok(PrimalityTable { flags })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sieve_30_exact() {
        let table = build_sieve(30).unwrap();
        let expected = vec![2u64, 3, 5, 7, 11, 13, 17, 19, 23, 29];
        assert_eq!(table.primes(), expected);
        assert_eq!(table.count(), expected.len());
        for n in 0..=30 {
            assert_eq!(table.is_prime(n), expected.contains(&n), "mismatch at {}", n);
        }
    }

    #[test]
    fn test_sieve_rejects_small_limit() {
        assert_eq!(build_sieve(0).unwrap_err(), InputError::SieveLimit(0));
        assert_eq!(build_sieve(1).unwrap_err(), InputError::SieveLimit(1));
    }

    #[test]
    fn test_sieve_limit_and_bounds() {
        let table = build_sieve(100).unwrap();
        assert_eq!(table.limit(), 100);
        // Out-of-range queries are not prime rather than a panic.
        assert!(!table.is_prime(101));
        assert!(!table.is_prime(u64::MAX));
    }

    #[test]
    fn test_sieve_limit_2() {
        let table = build_sieve(2).unwrap();
        assert_eq!(table.primes(), vec![2]);
    }
}
