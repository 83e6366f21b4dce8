//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and sets up logging
//! - parses CLI arguments
//! - loads the catalog (built-in or curve file)
//! - prints reports/plots and writes files

use std::path::PathBuf;

use chrono::Local;
use clap::Parser;

use crate::cli::{Cli, Command, ExportArgs, PlotArgs, ShowArgs, StressArgs, TableArgs};
use crate::domain::{CurveSide, ExportFormat, RunConfig};
use crate::error::AppError;

pub mod pipeline;

/// Environment variable naming the default `.dat` output directory.
pub const OUT_DIR_ENV: &str = "SN_OUT_DIR";

const SVG_SIZE: (u32, u32) = (1024, 768);
const ASCII_SIZE: (usize, usize) = (100, 25);

/// Entry point for the `sn` binary.
pub fn run() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let out_dir = match &cli.command {
        Command::Table(args) => args.out_dir.clone(),
        _ => None,
    };
    let config = run_config(cli.curve_file.clone(), out_dir, std::env::var(OUT_DIR_ENV).ok());
    tracing::debug!(?config, "resolved run config");

    match cli.command {
        Command::List => handle_list(&config),
        Command::Show(args) => handle_show(&config, args),
        Command::Stress(args) => handle_stress(&config, args),
        Command::Table(args) => handle_table(&config, args),
        Command::Export(args) => handle_export(&config, args),
        Command::Plot(args) => handle_plot(&config, args),
    }
}

fn init_logging(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn handle_list(config: &RunConfig) -> Result<(), AppError> {
    let curves = pipeline::load_catalog(config)?;
    print!("{}", crate::report::format_catalog(&curves));
    Ok(())
}

fn handle_show(config: &RunConfig, args: ShowArgs) -> Result<(), AppError> {
    let curves = pipeline::load_catalog(config)?;
    let curve = pipeline::select_curves(&curves, std::slice::from_ref(&args.material), false, false)?;

    println!("{}", crate::report::format_curve_summary(&curve[0])?);
    if !args.no_plot {
        let plot = crate::plot::curve_plot(&curve, &CurveSide::ALL);
        println!("{}", crate::plot::render_ascii_plot(&plot, args.width, args.height));
    }
    Ok(())
}

fn handle_stress(config: &RunConfig, args: StressArgs) -> Result<(), AppError> {
    let curves = pipeline::load_catalog(config)?;
    let selected = pipeline::select_curves(&curves, &args.selection.materials, args.selection.all, false)?;

    let tables = if args.cycles.is_empty() {
        pipeline::build_tables(&selected)?
    } else {
        pipeline::evaluate_curves(&selected, &args.cycles)?
    };
    print!("{}", crate::report::format_stress_table(&tables));
    Ok(())
}

fn handle_table(config: &RunConfig, args: TableArgs) -> Result<(), AppError> {
    let curves = pipeline::load_catalog(config)?;
    let selected = pipeline::select_curves(&curves, &args.selection.materials, args.selection.all, false)?;

    let created = Local::now().date_naive();
    for curve in &selected {
        let path = crate::io::write_dat_file(&config.out_dir, curve, created)?;
        println!("{}", path.display());
    }
    Ok(())
}

fn handle_export(config: &RunConfig, args: ExportArgs) -> Result<(), AppError> {
    let curves = pipeline::load_catalog(config)?;
    let selected = pipeline::select_curves(&curves, &args.materials, false, true)?;

    match args.format.unwrap_or_else(|| ExportFormat::from_path(&args.out)) {
        ExportFormat::Csv => crate::io::write_records_csv(&args.out, &selected)?,
        ExportFormat::Json => crate::io::write_records_json(&args.out, &selected)?,
    }
    println!("Exported {} curves to {}", selected.len(), args.out.display());
    Ok(())
}

fn handle_plot(config: &RunConfig, args: PlotArgs) -> Result<(), AppError> {
    let curves = pipeline::load_catalog(config)?;
    let selected = pipeline::select_curves(&curves, &args.materials, false, true)?;

    let sides = match args.side {
        Some(side) => vec![side],
        None => CurveSide::ALL.to_vec(),
    };
    let plot = crate::plot::curve_plot(&selected, &sides);

    match &args.svg {
        Some(path) => {
            let size = (
                args.width.unwrap_or(SVG_SIZE.0),
                args.height.unwrap_or(SVG_SIZE.1),
            );
            crate::plot::write_svg_plot(path, &plot, size)?;
            println!("Wrote {}", path.display());
        }
        None => {
            let width = args.width.map_or(ASCII_SIZE.0, |w| w as usize);
            let height = args.height.map_or(ASCII_SIZE.1, |h| h as usize);
            println!("{}", crate::plot::render_ascii_plot(&plot, width, height));
        }
    }
    Ok(())
}

/// Resolve run settings: `--out-dir`, else the `SN_OUT_DIR` value, else `.`.
pub fn run_config(curve_file: Option<PathBuf>, out_dir: Option<PathBuf>, env_out_dir: Option<String>) -> RunConfig {
    let out_dir = out_dir
        .or_else(|| env_out_dir.filter(|v| !v.trim().is_empty()).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."));
    RunConfig { curve_file, out_dir }
}
