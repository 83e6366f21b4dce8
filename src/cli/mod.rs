//! Command-line parsing for the `sn` S-N curve tool.
//!
//! Argument parsing stays here; evaluation and file output live in the library
//! modules that `app` dispatches to.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::{CurveSide, ExportFormat};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "sn", version, about = "ISO 6336 gear S-N curves: permissible stresses, tables and plots")]
pub struct Cli {
    /// Curve file (JSON or CSV records) replacing the built-in catalog.
    #[arg(long, global = true, value_name = "PATH")]
    pub curve_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug). `RUST_LOG` takes precedence.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the available materials.
    List,
    /// Show parameters, slopes and an ASCII plot of one material.
    Show(ShowArgs),
    /// Print permissible stresses at given load-cycle counts.
    Stress(StressArgs),
    /// Write `.dat` interpolation files.
    Table(TableArgs),
    /// Export curve records to CSV or JSON.
    Export(ExportArgs),
    /// Plot curves in the terminal or to an SVG file.
    Plot(PlotArgs),
}

/// Material selection shared by the multi-curve commands.
#[derive(Debug, Args, Clone, Default)]
pub struct Selection {
    /// Material id (e.g. AT-04) or full name. Repeatable.
    #[arg(short, long = "material", value_name = "ID")]
    pub materials: Vec<String>,

    /// Select every material.
    #[arg(long, conflicts_with = "materials")]
    pub all: bool,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Material id or full name.
    #[arg(short, long = "material", value_name = "ID")]
    pub material: String,

    /// Skip the terminal plot.
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,
}

#[derive(Debug, Args)]
pub struct StressArgs {
    #[command(flatten)]
    pub selection: Selection,

    /// Load-cycle counts. Repeatable; defaults to the interpolation grid.
    #[arg(short, long = "cycles", value_name = "N")]
    pub cycles: Vec<f64>,
}

#[derive(Debug, Args)]
pub struct TableArgs {
    #[command(flatten)]
    pub selection: Selection,

    /// Output directory (default: `SN_OUT_DIR`, else the current directory).
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output file.
    #[arg(long, value_name = "PATH")]
    pub out: PathBuf,

    /// Output format (default: from the file extension).
    #[arg(long, value_enum)]
    pub format: Option<ExportFormat>,

    /// Materials to export (default: all). Repeatable.
    #[arg(short, long = "material", value_name = "ID")]
    pub materials: Vec<String>,
}

#[derive(Debug, Args)]
pub struct PlotArgs {
    /// Materials to plot (default: all). Repeatable.
    #[arg(short, long = "material", value_name = "ID")]
    pub materials: Vec<String>,

    /// Plot only one side.
    #[arg(long, value_enum)]
    pub side: Option<CurveSide>,

    /// Write an SVG file instead of printing to the terminal.
    #[arg(long, value_name = "PATH")]
    pub svg: Option<PathBuf>,

    /// Plot width (columns, or pixels for SVG).
    #[arg(long)]
    pub width: Option<u32>,

    /// Plot height (rows, or pixels for SVG).
    #[arg(long)]
    pub height: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_stress_with_repeated_flags() {
        let cli = Cli::parse_from(["sn", "stress", "-m", "AT-01", "-m", "AT-02", "-c", "1e6", "-c", "5e7"]);
        let Command::Stress(args) = cli.command else {
            panic!("expected stress command");
        };
        assert_eq!(args.selection.materials, vec!["AT-01", "AT-02"]);
        assert_eq!(args.cycles, vec![1e6, 5e7]);
        assert!(!args.selection.all);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["sn", "list", "--curve-file", "curves.json", "-vv"]);
        assert!(matches!(cli.command, Command::List));
        assert_eq!(cli.curve_file, Some(PathBuf::from("curves.json")));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn all_conflicts_with_materials() {
        let err = Cli::try_parse_from(["sn", "table", "--all", "-m", "AT-01"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn plot_side_and_export_format() {
        let cli = Cli::parse_from(["sn", "plot", "--side", "flank", "--svg", "out.svg"]);
        let Command::Plot(args) = cli.command else {
            panic!("expected plot command");
        };
        assert_eq!(args.side, Some(CurveSide::Flank));

        let cli = Cli::parse_from(["sn", "export", "--out", "x.txt", "--format", "json"]);
        let Command::Export(args) = cli.command else {
            panic!("expected export command");
        };
        assert_eq!(args.format, Some(ExportFormat::Json));
    }
}
