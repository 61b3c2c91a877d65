//! goldbach-conductor CLI: conductor tables, band scans, and figures.
//!
//! Modes:
//!   --mode=table --n=8192                 Conductor table for a fixed N
//!   --mode=scan --start=100 --end=10002   Goldbach band scan across a range
//!   --mode=figures                        Scan + fixed-N figures as PNG
//!
//! Options:
//!   --limit=<N>          Sieve limit (default: 20000)
//!   --n=<N>              Even N for the table and figure 2 (default: 8192)
//!   --start=<N>          Scan range start, even (default: 100)
//!   --end=<N>            Scan range end, exclusive (default: 10002)
//!   --step=<N>           Scan step, even (default: 2)
//!   --top=<K>            Rows per class in the console table (default: 5)
//!   --pairs-csv=<path>   Write pair-level CSV
//!   --scan-csv=<path>    Write scan-level CSV
//!   --json=<path>        Write the JSON scan report
//!   --out-dir=<path>     Output directory for figures (default: results)

use std::error::Error;
use std::path::PathBuf;
use std::time::Instant;

use goldbach_conductor::{build_sieve, classify_pairs, export, plot, report, scan_range};

/// CLI configuration parsed from command-line arguments.
struct CliConfig {
    mode: Mode,
    limit: u64,
    n: u64,
    start: u64,
    end: u64,
    step: u64,
    top: usize,
    pairs_csv: Option<PathBuf>,
    scan_csv: Option<PathBuf>,
    json: Option<PathBuf>,
    out_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq)]
enum Mode {
    Table,
    Scan,
    Figures,
}

fn parse_args() -> CliConfig {
    let args: Vec<String> = std::env::args().collect();

    let mode = match args
        .iter()
        .find(|a| a.starts_with("--mode="))
        .map(|a| a.trim_start_matches("--mode="))
    {
        Some("figures") => Mode::Figures,
        Some("scan") => Mode::Scan,
        _ => Mode::Table,
    };

    let flag_u64 = |name: &str, default: u64| {
        args.iter()
            .find(|a| a.starts_with(name))
            .and_then(|a| a.strip_prefix(name)?.parse::<u64>().ok())
            .unwrap_or(default)
    };
    let flag_path = |name: &str| {
        args.iter()
            .find(|a| a.starts_with(name))
            .map(|a| PathBuf::from(a.strip_prefix(name).unwrap()))
    };

    CliConfig {
        mode,
        limit: flag_u64("--limit=", 20_000),
        n: flag_u64("--n=", 8192),
        start: flag_u64("--start=", 100),
        end: flag_u64("--end=", 10_002),
        step: flag_u64("--step=", 2),
        top: flag_u64("--top=", 5) as usize,
        pairs_csv: flag_path("--pairs-csv="),
        scan_csv: flag_path("--scan-csv="),
        json: flag_path("--json="),
        out_dir: flag_path("--out-dir=").unwrap_or_else(|| PathBuf::from("results")),
    }
}

fn main() {
    env_logger::init();
    let config = parse_args();

    if let Err(e) = run(&config) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(config: &CliConfig) -> Result<(), Box<dyn Error>> {
    let started = Instant::now();
    log::info!("sieving primality up to {}", config.limit);
    let table = build_sieve(config.limit)?;
    log::info!(
        "sieve ready: {} primes in {:.1?}",
        table.count(),
        started.elapsed()
    );

    match config.mode {
        Mode::Table => run_table(config, &table),
        Mode::Scan => run_scan(config, &table),
        Mode::Figures => run_figures(config, &table),
    }
}

fn run_table(
    config: &CliConfig,
    table: &goldbach_conductor::PrimalityTable,
) -> Result<(), Box<dyn Error>> {
    let records = classify_pairs(config.n, table)?;
    report::print_pair_table(config.n, &records, config.top);

    if let Some(ref path) = config.pairs_csv {
        export::write_pair_csv(path, &records)?;
        println!();
        println!("Wrote {} pair rows to {}", records.len(), path.display());
    }
    Ok(())
}

fn run_scan(
    config: &CliConfig,
    table: &goldbach_conductor::PrimalityTable,
) -> Result<(), Box<dyn Error>> {
    let started = Instant::now();
    let summaries = scan_range(config.start, config.end, config.step, table)?;
    log::info!(
        "scanned [{}, {}) step {} in {:.1?}",
        config.start,
        config.end,
        config.step,
        started.elapsed()
    );

    report::print_scan_table(&summaries);

    if let Some(ref path) = config.scan_csv {
        export::write_scan_csv(path, &summaries)?;
        println!();
        println!("Wrote {} scan rows to {}", summaries.len(), path.display());
    }
    if let Some(ref path) = config.json {
        let scan_report =
            export::ScanReport::new(config.start, config.end, config.step, summaries.clone());
        export::write_scan_report(path, &scan_report)?;
        println!("Wrote scan report to {}", path.display());
    }
    Ok(())
}

fn run_figures(
    config: &CliConfig,
    table: &goldbach_conductor::PrimalityTable,
) -> Result<(), Box<dyn Error>> {
    std::fs::create_dir_all(&config.out_dir)?;

    let summaries = scan_range(config.start, config.end, config.step, table)?;
    let band_path = config.out_dir.join("stability_band.png");
    plot::plot_stability_band(&band_path, &summaries)?;
    println!("Wrote {}", band_path.display());

    let records = classify_pairs(config.n, table)?;
    let landscape_path = config.out_dir.join("decomposition_landscape.png");
    plot::plot_decomposition(&landscape_path, config.n, &records)?;
    println!("Wrote {}", landscape_path.display());

    Ok(())
}
