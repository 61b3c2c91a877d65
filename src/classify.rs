//! Pair enumeration and classification for a fixed even N.
//!
//! Only the lower half of the symmetric pair space is enumerated (odd p up
//! to N/2), so each unordered decomposition appears exactly once. The
//! presentation-level sorts (Goldbach by ascending rho, Composite by
//! descending rho) live in the report layer, not here; the classifier emits
//! records in ascending p.

use num_bigint::BigUint;
use num_integer::Integer;

use crate::conductor::{chens_ratio, conductor_proxy};
use crate::radical::odd_radical;
use crate::sieve::PrimalityTable;
use crate::InputError;

/// How a decomposition N = p + q relates to the primality of its summands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Classification {
    /// Both p and q are prime.
    Goldbach,
    /// Neither p nor q is prime.
    Composite,
    /// Exactly one of p, q is prime.
    Mixed,
}

impl Classification {
    /// The name used in CSV output and console tables.
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Goldbach => "Goldbach",
            Classification::Composite => "Composite",
            Classification::Mixed => "Mixed",
        }
    }

    fn from_primality(p_prime: bool, q_prime: bool) -> Self {
        match (p_prime, q_prime) {
            (true, true) => Classification::Goldbach,
            (false, false) => Classification::Composite,
            _ => Classification::Mixed,
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One decomposition N = p + q with its classification and conductor metrics.
///
/// Invariants: q = N - p > 1 and p <= q (lower half only).
#[derive(Debug, Clone)]
pub struct PairRecord {
    /// The even integer being decomposed.
    pub n: u64,
    /// The smaller summand, odd, in [3, N/2].
    pub p: u64,
    /// The larger summand, q = N - p.
    pub q: u64,
    /// Goldbach / Composite / Mixed per the primality table.
    pub class: Classification,
    /// rad_odd(p) * rad_odd(q).
    pub rad_odd_pq: u64,
    /// The conductor proxy (rad_odd(p) * rad_odd(q) * rad_odd(N/2)^2)^2.
    pub conductor: BigUint,
    /// Chen's ratio ln(conductor) / ln(N).
    pub rho: f64,
}

/// Enumerate and classify all summand pairs of an even N >= 6.
///
/// Walks odd p from 3 to N/2 inclusive, skipping pairs with q <= 1, and
/// emits one record per retained p in ascending order. The table must cover
/// the largest summand q = N - 3. Pure and deterministic: re-invoking with
/// the same arguments reproduces the same sequence.
pub fn classify_pairs(n: u64, table: &PrimalityTable) -> Result<Vec<PairRecord>, InputError> {
    if n < 6 || !n.is_even() {
        return Err(InputError::BadN(n));
    }
    let needed = n - 3;
    if table.limit() < needed {
        return Err(InputError::TableTooSmall {
            n,
            limit: table.limit(),
            needed,
        });
    }

    let half = n / 2;
    let mut records = Vec::with_capacity((half / 2) as usize);

    let mut p = 3u64;
    while p <= half {
        let q = n - p;
        if q > 1 {
            let class = Classification::from_primality(table.is_prime(p), table.is_prime(q));
            records.push(PairRecord {
                n,
                p,
                q,
                class,
                rad_odd_pq: odd_radical(p) * odd_radical(q),
                conductor: conductor_proxy(n, p),
                rho: chens_ratio(n, p),
            });
        }
        p += 2;
    }

    Ok(records)
}
