//! Conductor-proxy statistics over Goldbach decompositions.
//!
//! For an even integer N, every decomposition N = p + q is tagged as
//! Goldbach (both summands prime), Composite (neither prime), or Mixed,
//! and scored with Chen's ratio ρ = log(conductor) / log(N), where the
//! conductor proxy is built from the odd radicals of p, q, and N/2.
//! Goldbach pairs concentrate in a narrow ρ band; the crate computes that
//! band for a fixed N and across a range of N.
//!
//! The pipeline is a deterministic batch computation over integers:
//! 1. Sieve primality over [0, LIMIT]
//! 2. Enumerate and classify summand pairs for a fixed N
//! 3. Aggregate Goldbach ρ statistics across a range of N
//! 4. Hand the records to presentation consumers (tables, CSV, figures)
//!
//! # Modules
//!
//! - [`sieve`] - Eratosthenes primality table
//! - [`radical`] - odd radical (product of distinct odd prime factors)
//! - [`conductor`] - conductor proxy and Chen's ratio
//! - [`classify`] - per-N pair enumeration and classification
//! - [`scan`] - Goldbach band statistics across a range of N
//! - [`report`] - console tables
//! - [`export`] - CSV and JSON serialization
//! - [`plot`] - stability-band and decomposition-landscape figures

pub mod classify;
pub mod conductor;
pub mod export;
pub mod plot;
pub mod radical;
pub mod report;
pub mod scan;
pub mod sieve;

pub use classify::{classify_pairs, Classification, PairRecord};
pub use conductor::{chens_ratio, conductor_proxy};
pub use radical::odd_radical;
pub use scan::{scan_range, ScanSummary};
pub use sieve::{build_sieve, PrimalityTable};

/// Errors for invalid core inputs.
///
/// All of these are deterministic caller mistakes reported synchronously;
/// there is nothing to retry. Degenerate metrics (conductor <= 1) and scan
/// entries with no Goldbach pairs are handled by defined fallbacks, not
/// errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("sieve limit must be at least 2, got {0}")]
    SieveLimit(u64),

    #[error("N must be an even integer >= 6, got {0}")]
    BadN(u64),

    #[error("scan step must be a nonzero even integer, got {0}")]
    BadStep(u64),

    #[error("primality table ends at {limit} but N = {n} needs entries up to {needed}")]
    TableTooSmall { n: u64, limit: u64, needed: u64 },
}
