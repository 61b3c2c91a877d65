//! Figures over scan summaries and pair records, rendered with plotters.
//!
//! Two views:
//! 1. Stability band - mean Goldbach rho against N across the scanned
//!    range, with a rolling mean, the empirical 5-95 percentile band, and
//!    the N = 2^k anchor points marked.
//! 2. Decomposition landscape - rho against p for a fixed N, colored by
//!    classification, with a rho histogram per class alongside.
//!
//! Consumers of the core never mutate the records they receive; this module
//! takes everything by shared reference and only reads.

use std::error::Error;
use std::path::Path;

use plotters::prelude::*;

use crate::classify::{Classification, PairRecord};
use crate::scan::ScanSummary;

const GOLDBACH_COLOR: RGBColor = RGBColor(0x22, 0x55, 0xBB);
const COMPOSITE_COLOR: RGBColor = RGBColor(0xCC, 0x88, 0x55);
const MIXED_COLOR: RGBColor = RGBColor(0x88, 0xAA, 0x55);
const ANCHOR_COLOR: RGBColor = RGBColor(0xCC, 0x33, 0x33);
const TREND_COLOR: RGBColor = RGBColor(0x1A, 0x3A, 0x6E);

/// Rolling-mean window for the stability-band trend line.
const TREND_WINDOW: usize = 40;

/// Plot the Goldbach stability band across a scanned range of N.
pub fn plot_stability_band(path: &Path, summaries: &[ScanSummary]) -> Result<(), Box<dyn Error>> {
    if summaries.is_empty() {
        return Err("no scan summaries to plot".into());
    }

    let xs: Vec<f64> = summaries.iter().map(|s| s.n as f64).collect();
    let means: Vec<f64> = summaries.iter().map(|s| s.rho_mean).collect();

    let x_min = xs[0];
    let x_max = xs[xs.len() - 1];
    let y_min = means.iter().cloned().fold(f64::INFINITY, f64::min) - 0.05;
    let y_max = means.iter().cloned().fold(f64::NEG_INFINITY, f64::max) + 0.05;

    let band_lo = percentile(&means, 5.0);
    let band_hi = percentile(&means, 95.0);

    let root = BitMapBackend::new(path, (1200, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Goldbach stability band", ("sans-serif", 22))
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Even N")
        .y_desc("Chen's ratio rho")
        .draw()?;

    // Empirical 5-95 percentile band of the per-N means.
    chart
        .draw_series(std::iter::once(Rectangle::new(
            [(x_min, band_lo), (x_max, band_hi)],
            GOLDBACH_COLOR.mix(0.07).filled(),
        )))?
        .label(format!("rigidity band [{:.2}, {:.2}]", band_lo, band_hi))
        .legend(|(x, y)| Rectangle::new([(x, y - 4), (x + 10, y + 4)], GOLDBACH_COLOR.mix(0.3).filled()));

    // Subsampled scatter of per-N means.
    chart.draw_series(
        summaries
            .iter()
            .step_by(4)
            .map(|s| Circle::new((s.n as f64, s.rho_mean), 2, GOLDBACH_COLOR.mix(0.3).filled())),
    )?;

    // Rolling-mean trend.
    let smooth = rolling_mean(&means, TREND_WINDOW);
    if !smooth.is_empty() {
        let offset = TREND_WINDOW / 2;
        chart
            .draw_series(LineSeries::new(
                smooth
                    .iter()
                    .enumerate()
                    .map(|(i, &y)| (xs[i + offset], y)),
                TREND_COLOR.stroke_width(2),
            ))?
            .label("rolling mean rho (Goldbach pairs)")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 14, y)], TREND_COLOR.stroke_width(2)));
    }

    // N = 2^k anchor points.
    let anchors: Vec<(f64, f64)> = summaries
        .iter()
        .filter(|s| s.n.is_power_of_two())
        .map(|s| (s.n as f64, s.rho_mean))
        .collect();
    if !anchors.is_empty() {
        chart
            .draw_series(
                anchors
                    .iter()
                    .map(|&(x, y)| TriangleMarker::new((x, y), 7, ANCHOR_COLOR.filled())),
            )?
            .label("N = 2^k anchor points")
            .legend(|(x, y)| TriangleMarker::new((x + 7, y), 6, ANCHOR_COLOR.filled()));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerRight)
        .background_style(WHITE.mix(0.9))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Plot the decomposition landscape at a fixed N: rho against p by
/// classification, plus a rho histogram per class.
pub fn plot_decomposition(path: &Path, n: u64, records: &[PairRecord]) -> Result<(), Box<dyn Error>> {
    // Zero-rho records are degenerate and only clutter the landscape.
    let visible: Vec<&PairRecord> = records.iter().filter(|r| r.rho > 0.0).collect();
    if visible.is_empty() {
        return Err("no records with positive rho to plot".into());
    }

    let rho_min = visible.iter().map(|r| r.rho).fold(f64::INFINITY, f64::min) - 0.05;
    let rho_max = visible.iter().map(|r| r.rho).fold(f64::NEG_INFINITY, f64::max) + 0.05;

    let root = BitMapBackend::new(path, (1400, 550)).into_drawing_area();
    root.fill(&WHITE)?;
    let (left, right) = root.split_horizontally(1000);

    // Left panel: scatter of rho vs p.
    let mut scatter = ChartBuilder::on(&left)
        .caption(format!("Decomposition landscape at N = {}", n), ("sans-serif", 20))
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..(n as f64 / 2.0 + 100.0), rho_min..rho_max)?;

    scatter
        .configure_mesh()
        .x_desc("Summand p")
        .y_desc("rho(N, p)")
        .draw()?;

    for (class, color, size, alpha) in [
        (Classification::Composite, COMPOSITE_COLOR, 2, 0.15),
        (Classification::Mixed, MIXED_COLOR, 2, 0.2),
        (Classification::Goldbach, GOLDBACH_COLOR, 3, 0.7),
    ] {
        let points: Vec<(f64, f64)> = visible
            .iter()
            .filter(|r| r.class == class)
            .map(|r| (r.p as f64, r.rho))
            .collect();
        if points.is_empty() {
            continue;
        }
        let count = points.len();
        scatter
            .draw_series(
                points
                    .into_iter()
                    .map(move |(x, y)| Circle::new((x, y), size, color.mix(alpha).filled())),
            )?
            .label(format!("{} (n = {})", class.as_str(), count))
            .legend(move |(x, y)| Circle::new((x + 5, y), 3, color.filled()));
    }

    // Per-class mean lines for the Goldbach/Composite gap.
    for (class, color) in [
        (Classification::Goldbach, GOLDBACH_COLOR),
        (Classification::Composite, COMPOSITE_COLOR),
    ] {
        let rhos: Vec<f64> = visible
            .iter()
            .filter(|r| r.class == class)
            .map(|r| r.rho)
            .collect();
        if rhos.is_empty() {
            continue;
        }
        let mean = rhos.iter().sum::<f64>() / rhos.len() as f64;
        scatter.draw_series(LineSeries::new(
            vec![(0.0, mean), (n as f64 / 2.0 + 100.0, mean)],
            color.mix(0.6).stroke_width(1),
        ))?;
    }

    scatter
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerRight)
        .background_style(WHITE.mix(0.9))
        .border_style(BLACK)
        .draw()?;

    // Right panel: horizontal rho histogram per class.
    let bins = 55usize;
    let bin_width = (rho_max - rho_min) / bins as f64;

    let mut max_count = 0usize;
    let mut histograms = Vec::new();
    for (class, color, alpha) in [
        (Classification::Goldbach, GOLDBACH_COLOR, 0.6),
        (Classification::Composite, COMPOSITE_COLOR, 0.35),
        (Classification::Mixed, MIXED_COLOR, 0.25),
    ] {
        let mut counts = vec![0usize; bins];
        for r in visible.iter().filter(|r| r.class == class) {
            let idx = (((r.rho - rho_min) / bin_width) as usize).min(bins - 1);
            counts[idx] += 1;
        }
        max_count = max_count.max(counts.iter().cloned().max().unwrap_or(0));
        histograms.push((color, alpha, counts));
    }

    let mut hist = ChartBuilder::on(&right)
        .caption("Distribution", ("sans-serif", 18))
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(40)
        .build_cartesian_2d(0.0..(max_count as f64 * 1.05), rho_min..rho_max)?;

    hist.configure_mesh().x_desc("Count").y_desc("rho").draw()?;

    for (color, alpha, counts) in histograms {
        hist.draw_series(counts.iter().enumerate().filter(|(_, &c)| c > 0).map(
            move |(i, &c)| {
                let lo = rho_min + i as f64 * bin_width;
                Rectangle::new(
                    [(0.0, lo), (c as f64, lo + bin_width)],
                    color.mix(alpha).filled(),
                )
            },
        ))?;
    }

    root.present()?;
    Ok(())
}

/// Rolling mean with a centered window, valid region only. Returns an empty
/// vector when the input is shorter than the window.
pub fn rolling_mean(values: &[f64], window: usize) -> Vec<f64> {
    if window == 0 || values.len() < window {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(values.len() - window + 1);
    let mut sum: f64 = values[..window].iter().sum();
    out.push(sum / window as f64);
    for i in window..values.len() {
        sum += values[i] - values[i - window];
        out.push(sum / window as f64);
    }
    out
}

/// Linear-interpolated percentile, pct in [0, 100].
pub fn percentile(values: &[f64], pct: f64) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let rank = pct / 100.0 * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        let frac = rank - lo as f64;
        sorted[lo] * (1.0 - frac) + sorted[hi] * frac
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rolling_mean_window_one_is_identity() {
        let values = vec![1.0, 2.0, 3.0];
        assert_eq!(rolling_mean(&values, 1), values);
    }

    #[test]
    fn test_rolling_mean_valid_region() {
        let values = vec![1.0, 2.0, 3.0, 4.0];
        let smooth = rolling_mean(&values, 2);
        assert_eq!(smooth, vec![1.5, 2.5, 3.5]);
    }

    #[test]
    fn test_rolling_mean_short_input() {
        assert!(rolling_mean(&[1.0, 2.0], 3).is_empty());
        assert!(rolling_mean(&[1.0], 0).is_empty());
    }

    #[test]
    fn test_percentile_endpoints_and_median() {
        let values = vec![3.0, 1.0, 2.0, 5.0, 4.0];
        assert_eq!(percentile(&values, 0.0), 1.0);
        assert_eq!(percentile(&values, 50.0), 3.0);
        assert_eq!(percentile(&values, 100.0), 5.0);
    }

    #[test]
    fn test_percentile_interpolates() {
        let values = vec![0.0, 10.0];
        assert!((percentile(&values, 25.0) - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_percentile_empty() {
        assert!(percentile(&[], 50.0).is_nan());
    }
}
