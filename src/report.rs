//! Console tables over pair records and scan summaries.
//!
//! Everything here is presentation: partitioning, sorting, and formatting
//! of values the core already produced. The report sorts Goldbach pairs by
//! ascending rho (the ground state first) and Composite pairs by descending
//! rho (the highest-rho composites first); that ordering is a reporting
//! convention layered on top of the classifier's ascending-p output.

use crate::classify::{Classification, PairRecord};
use crate::scan::ScanSummary;

/// Count and rho band for one classification.
#[derive(Debug, Clone, PartialEq)]
pub struct BandStats {
    pub count: usize,
    pub rho_min: f64,
    pub rho_mean: f64,
    pub rho_max: f64,
}

impl BandStats {
    /// Width of the band, max - min.
    pub fn width(&self) -> f64 {
        self.rho_max - self.rho_min
    }
}

/// Aggregate a slice of rho values, or None when it is empty.
pub fn band_stats(rhos: &[f64]) -> Option<BandStats> {
    if rhos.is_empty() {
        return None;
    }
    let min = rhos.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = rhos.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let mean = rhos.iter().sum::<f64>() / rhos.len() as f64;
    Some(BandStats {
        count: rhos.len(),
        rho_min: min,
        rho_mean: mean,
        rho_max: max,
    })
}

/// Partition records by classification and apply the report ordering:
/// Goldbach ascending rho, Composite descending rho, Mixed ascending rho.
pub fn partition_for_report(
    records: &[PairRecord],
) -> (Vec<&PairRecord>, Vec<&PairRecord>, Vec<&PairRecord>) {
    let mut goldbach: Vec<&PairRecord> = Vec::new();
    let mut composite: Vec<&PairRecord> = Vec::new();
    let mut mixed: Vec<&PairRecord> = Vec::new();

    for r in records {
        match r.class {
            Classification::Goldbach => goldbach.push(r),
            Classification::Composite => composite.push(r),
            Classification::Mixed => mixed.push(r),
        }
    }

    goldbach.sort_by(|a, b| a.rho.total_cmp(&b.rho));
    composite.sort_by(|a, b| b.rho.total_cmp(&a.rho));
    mixed.sort_by(|a, b| a.rho.total_cmp(&b.rho));

    (goldbach, composite, mixed)
}

/// Print the conductor table for a fixed N: the lowest- and highest-rho
/// Goldbach pairs, the highest-rho Composite pairs, a Mixed sample, and the
/// per-class band summary.
pub fn print_pair_table(n: u64, records: &[PairRecord], top: usize) {
    let (goldbach, composite, mixed) = partition_for_report(records);

    println!("{}", "=".repeat(78));
    println!("Conductor compression metrics for N = {}", n);
    println!("{}", "=".repeat(78));
    println!();
    println!(
        "{:<12} {:<18} {:>14} {:>16} {:>8}",
        "Type", "(p, q)", "rad_odd(pq)", "conductor", "rho"
    );
    println!("{}", "-".repeat(78));

    for r in goldbach.iter().take(top) {
        print_row(r);
    }
    if goldbach.len() > top {
        if goldbach.len() > top + 3 {
            println!("  ...");
        }
        let tail_start = goldbach.len().saturating_sub(3).max(top);
        for r in &goldbach[tail_start..] {
            print_row(r);
        }
    }
    println!("{}", "-".repeat(78));
    for r in composite.iter().take(top) {
        print_row(r);
    }
    println!("{}", "-".repeat(78));
    for r in mixed.iter().take(3) {
        print_row(r);
    }
    println!();

    let gb_stats = band_stats(&goldbach.iter().map(|r| r.rho).collect::<Vec<_>>());
    let comp_rhos: Vec<f64> = composite.iter().map(|r| r.rho).filter(|&x| x > 0.0).collect();
    let comp_stats = band_stats(&comp_rhos);
    let mixed_rhos: Vec<f64> = mixed.iter().map(|r| r.rho).filter(|&x| x > 0.0).collect();
    let mixed_stats = band_stats(&mixed_rhos);

    if let Some(ref s) = gb_stats {
        println!(
            "  Goldbach  (n={:>5}): rho in [{:.4}, {:.4}], mean = {:.4}",
            s.count, s.rho_min, s.rho_max, s.rho_mean
        );
    }
    if let Some(ref s) = comp_stats {
        println!(
            "  Composite (n={:>5}): rho in [{:.4}, {:.4}], mean = {:.4}",
            s.count, s.rho_min, s.rho_max, s.rho_mean
        );
    }
    if let Some(ref s) = mixed_stats {
        println!(
            "  Mixed     (n={:>5}): rho in [{:.4}, {:.4}], mean = {:.4}",
            s.count, s.rho_min, s.rho_max, s.rho_mean
        );
    }

    if let (Some(gb), Some(comp)) = (gb_stats, comp_stats) {
        println!();
        println!("  Goldbach band width: {:.4}", gb.width());
        println!("  Composite spread:    {:.4}", comp.width());
        println!("  Mean gap:            {:.4}", (gb.rho_mean - comp.rho_mean).abs());
    }
}

fn print_row(r: &PairRecord) {
    let pair = format!("({}, {})", r.p, r.q);
    println!(
        "{:<12} {:<18} {:>14} {:>16.4e} {:>8.4}",
        r.class.as_str(),
        pair,
        r.rad_odd_pq,
        biguint_to_f64(&r.conductor),
        r.rho
    );
}

fn biguint_to_f64(v: &num_bigint::BigUint) -> f64 {
    use num_traits::ToPrimitive;
    v.to_f64().unwrap_or(f64::INFINITY)
}

/// Print the head and tail of a range scan.
pub fn print_scan_table(summaries: &[ScanSummary]) {
    println!(
        "{:>8} {:>8} {:>10} {:>10} {:>10}",
        "N", "pairs", "rho_min", "rho_mean", "rho_max"
    );
    println!("{}", "-".repeat(50));

    for s in summaries.iter().take(5) {
        print_scan_row(s);
    }
    if summaries.len() > 5 {
        if summaries.len() > 10 {
            println!("     ...");
        }
        let tail_start = summaries.len().saturating_sub(5).max(5);
        for s in &summaries[tail_start..] {
            print_scan_row(s);
        }
    }
    println!("{}", "-".repeat(50));

    let means: Vec<f64> = summaries.iter().map(|s| s.rho_mean).collect();
    if let Some(stats) = band_stats(&means) {
        println!(
            "  {} N values, mean-rho band [{:.4}, {:.4}], grand mean {:.4}",
            stats.count, stats.rho_min, stats.rho_max, stats.rho_mean
        );
    }

    // The power-of-two anchors sit at the bottom of the band.
    let anchors: Vec<&ScanSummary> = summaries.iter().filter(|s| s.n.is_power_of_two()).collect();
    if !anchors.is_empty() {
        println!();
        println!("  N = 2^k anchor points:");
        for s in anchors {
            println!(
                "    N = 2^{} = {}: mean rho = {:.4}, min rho = {:.4}",
                s.n.trailing_zeros(),
                s.n,
                s.rho_mean,
                s.rho_min
            );
        }
    }
}

fn print_scan_row(s: &ScanSummary) {
    println!(
        "{:>8} {:>8} {:>10.4} {:>10.4} {:>10.4}",
        s.n, s.pair_count, s.rho_min, s.rho_mean, s.rho_max
    );
}
