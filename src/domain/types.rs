//! Shared domain types.
//!
//! These types are intentionally kept small and plain so they can be:
//!
//! - built from the catalog or from curve files
//! - evaluated by the model in `models`
//! - exported to CSV/JSON and `.dat` interpolation files

use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Load cycles at which a limited-pitting flank curve changes slope.
pub const LIMITED_PITTING_TRANSITION_CYCLES: f64 = 1e7;

/// Load cycles at which a limited-pitting flank curve reaches the endurance limit.
pub const LIMITED_PITTING_ENDURANCE_CYCLES: f64 = 1e9;

/// End of the reduced-life segment.
pub const REDUCED_LIFE_CYCLES: f64 = 1e10;

/// Life factor reached at `REDUCED_LIFE_CYCLES` when the reduction is enabled.
pub const REDUCED_LIFE_FACTOR: f64 = 0.85;

/// Stress correction factor `Y_ST` of the standard reference test gear.
///
/// Root endurance stresses are given as `sig_FE = sig_F_lim * Y_ST`.
pub const STRESS_CORRECTION_FACTOR: f64 = 2.0;

/// Which side of the gear tooth a curve describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CurveSide {
    /// Tooth root (bending).
    Root,
    /// Tooth flank (contact / pitting).
    Flank,
}

impl CurveSide {
    pub const ALL: [CurveSide; 2] = [CurveSide::Root, CurveSide::Flank];

    pub fn display_name(self) -> &'static str {
        match self {
            CurveSide::Root => "root",
            CurveSide::Flank => "flank",
        }
    }

    /// Axis label for plots.
    pub fn stress_label(self) -> &'static str {
        match self {
            CurveSide::Root => "Permissible bending stress [MPa]",
            CurveSide::Flank => "Permissible contact stress [MPa]",
        }
    }
}

/// The two anchor points of one side of an S-N curve.
///
/// Below `static_cycles` the permissible stress is `static_stress`; from
/// `endurance_cycles` on it is `endurance_stress` (unless the reduced-life
/// segment applies). In between the curve is a straight line in log-log space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveAnchors {
    pub static_cycles: f64,
    pub endurance_cycles: f64,
    pub static_stress: f64,
    pub endurance_stress: f64,
}

impl CurveAnchors {
    pub fn new(static_cycles: f64, endurance_cycles: f64, static_stress: f64, endurance_stress: f64) -> Self {
        Self {
            static_cycles,
            endurance_cycles,
            static_stress,
            endurance_stress,
        }
    }
}

/// Raw (unvalidated) inputs of an S-N curve.
///
/// Turn this into an `SnCurve` with `SnCurve::new`, which validates it.
#[derive(Debug, Clone, PartialEq)]
pub struct SnCurveParams {
    pub name: String,
    /// Tooth root: `N_F_stat`, `N_F_d`, `sig_FP_stat`, `sig_FE`.
    pub root: CurveAnchors,
    /// Tooth flank: `N_H_stat`, `N_H_d`, `sig_HP_stat`, `sig_H_lim`.
    pub flank: CurveAnchors,
    /// Limited pitting permitted (ISO 6336-2): two-segment flank curve.
    pub limited_pitting: bool,
    /// Reduce the life factors to 0.85 between the endurance limit and 1e10 cycles.
    pub reduced_life_factor: bool,
}

/// Slopes (exponents) of the curve segments.
///
/// Each slope is `Δ ln(N) / Δ ln(σ)` between two anchors. The optional slopes are
/// `None` when the corresponding regime is disabled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveSlopes {
    /// `p_F`: root finite-life segment.
    pub root: f64,
    /// `p_H`: flank finite-life segment (first segment if limited pitting is permitted).
    pub flank: f64,
    /// `p_H_lim_pit`: second flank segment between 1e7 and 1e9 cycles.
    pub flank_limited_pitting: Option<f64>,
    /// `p_F_red_life_fac`: root segment from `N_F_d` to 1e10 cycles.
    pub root_reduced_life: Option<f64>,
    /// `p_H_red_life_fac`: flank segment from `N_H_d` to 1e10 cycles.
    pub flank_reduced_life: Option<f64>,
}

/// Permissible stresses at one load-cycle count (MPa).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PermissibleStress {
    pub root: f64,
    pub flank: f64,
}

impl PermissibleStress {
    pub fn side(&self, side: CurveSide) -> f64 {
        match side {
            CurveSide::Root => self.root,
            CurveSide::Flank => self.flank,
        }
    }
}

/// One row of an interpolation table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableSample {
    pub cycles: f64,
    pub root: f64,
    pub flank: f64,
}

/// Permissible stresses of one curve at a list of cycle counts.
#[derive(Debug, Clone, PartialEq)]
pub struct StressTable {
    pub name: String,
    pub rows: Vec<TableSample>,
}

/// Flat, serializable view of a curve: all inputs plus derived slopes.
///
/// Keys follow the ISO 6336 symbols so exported tables read like the standard.
/// Slopes of disabled regimes are `None` (an empty CSV cell, `null` in JSON).
/// When read back, slope fields are optional and ignored: they are re-derived
/// from the raw parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveRecord {
    pub name: String,
    #[serde(rename = "N_F_stat")]
    pub root_static_cycles: f64,
    #[serde(rename = "N_F_d")]
    pub root_endurance_cycles: f64,
    #[serde(rename = "sig_FP_stat")]
    pub root_static_stress: f64,
    #[serde(rename = "sig_FE")]
    pub root_endurance_stress: f64,
    #[serde(rename = "N_H_stat")]
    pub flank_static_cycles: f64,
    #[serde(rename = "N_H_d")]
    pub flank_endurance_cycles: f64,
    #[serde(rename = "sig_HP_stat")]
    pub flank_static_stress: f64,
    #[serde(rename = "sig_H_lim")]
    pub flank_endurance_stress: f64,
    #[serde(rename = "lim_pit_perm", default)]
    pub limited_pitting: bool,
    #[serde(rename = "red_life_fac", default)]
    pub reduced_life_factor: bool,
    #[serde(rename = "p_F", default)]
    pub root_slope: Option<f64>,
    #[serde(rename = "p_H", default)]
    pub flank_slope: Option<f64>,
    #[serde(rename = "p_H_lim_pit", default)]
    pub flank_limited_pitting_slope: Option<f64>,
    #[serde(rename = "p_F_red_life_fac", default)]
    pub root_reduced_life_slope: Option<f64>,
    #[serde(rename = "p_H_red_life_fac", default)]
    pub flank_reduced_life_slope: Option<f64>,
}

impl From<&CurveRecord> for SnCurveParams {
    fn from(record: &CurveRecord) -> Self {
        SnCurveParams {
            name: record.name.clone(),
            root: CurveAnchors::new(
                record.root_static_cycles,
                record.root_endurance_cycles,
                record.root_static_stress,
                record.root_endurance_stress,
            ),
            flank: CurveAnchors::new(
                record.flank_static_cycles,
                record.flank_endurance_cycles,
                record.flank_static_stress,
                record.flank_endurance_stress,
            ),
            limited_pitting: record.limited_pitting,
            reduced_life_factor: record.reduced_life_factor,
        }
    }
}

/// Output format for record exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    /// Guess the format from a file extension, defaulting to CSV.
    pub fn from_path(path: &std::path::Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ExportFormat::Json,
            _ => ExportFormat::Csv,
        }
    }
}

/// Settings shared by every command, resolved from CLI flags and the environment.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Curve file replacing the built-in catalog.
    pub curve_file: Option<PathBuf>,
    /// Directory for generated `.dat` files (`--out-dir`, else `SN_OUT_DIR`, else `.`).
    pub out_dir: PathBuf,
}
