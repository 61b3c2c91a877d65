//! CSV and JSON serialization of pair records and scan summaries.
//!
//! The CSV headers and field order are a compatibility contract for
//! downstream analysis tooling:
//!   pair level: `N,p,q,type,rad_odd_pq,conductor_proxy,rho`
//!   scan level: `N,num_goldbach_pairs,rho_min,rho_mean,rho_max`
//! rho and the band floats are written with six decimal places. The JSON
//! scan report carries `schema_version` and the crate version so result
//! files from different revisions are never compared blindly.

use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::classify::PairRecord;
use crate::scan::ScanSummary;

/// Schema version for the JSON scan report. Bump when field semantics change.
pub const SCHEMA_VERSION: &str = "band-scan-v1";

/// Crate version from Cargo.toml, embedded at compile time.
pub const CRATE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Render pair-level records as CSV.
pub fn pair_csv(records: &[PairRecord]) -> String {
    let mut out = String::from("N,p,q,type,rad_odd_pq,conductor_proxy,rho\n");
    for r in records {
        let _ = writeln!(
            out,
            "{},{},{},{},{},{},{:.6}",
            r.n, r.p, r.q, r.class, r.rad_odd_pq, r.conductor, r.rho
        );
    }
    out
}

/// Write pair-level records to a CSV file.
pub fn write_pair_csv(path: impl AsRef<Path>, records: &[PairRecord]) -> io::Result<()> {
    fs::write(path, pair_csv(records))
}

/// Render scan summaries as CSV.
pub fn scan_csv(summaries: &[ScanSummary]) -> String {
    let mut out = String::from("N,num_goldbach_pairs,rho_min,rho_mean,rho_max\n");
    for s in summaries {
        let _ = writeln!(
            out,
            "{},{},{:.6},{:.6},{:.6}",
            s.n, s.pair_count, s.rho_min, s.rho_mean, s.rho_max
        );
    }
    out
}

/// Write scan summaries to a CSV file.
pub fn write_scan_csv(path: impl AsRef<Path>, summaries: &[ScanSummary]) -> io::Result<()> {
    fs::write(path, scan_csv(summaries))
}

/// JSON envelope for a range scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    /// Schema version for forwards-compatibility checking.
    pub schema_version: String,
    /// Crate version that produced the report.
    pub crate_version: String,
    /// Inclusive start of the scanned progression.
    pub n_start: u64,
    /// Exclusive end of the scanned progression.
    pub n_end: u64,
    /// Progression step.
    pub step: u64,
    /// One summary per N with at least one Goldbach pair.
    pub summaries: Vec<ScanSummary>,
}

impl ScanReport {
    pub fn new(n_start: u64, n_end: u64, step: u64, summaries: Vec<ScanSummary>) -> Self {
        ScanReport {
            schema_version: SCHEMA_VERSION.to_string(),
            crate_version: CRATE_VERSION.to_string(),
            n_start,
            n_end,
            step,
            summaries,
        }
    }
}

/// Write a scan report as pretty-printed JSON.
pub fn write_scan_report(path: impl AsRef<Path>, report: &ScanReport) -> io::Result<()> {
    let json = serde_json::to_string_pretty(report)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(path, json)
}
