//! Shared curve pipeline used by the subcommands.
//!
//! catalog/curve file -> selection -> evaluation (parallel over curves)
//!
//! The handlers in `app` then only decide what to print or write.

use rayon::prelude::*;

use crate::catalog::{cob_materials, select};
use crate::domain::{RunConfig, StressTable, TableSample};
use crate::error::{AppError, CurveError};
use crate::models::{SnCurve, interpolation_table};

/// Load the curves a run works on: the curve file if given, else the built-in catalog.
pub fn load_catalog(config: &RunConfig) -> Result<Vec<SnCurve>, AppError> {
    let curves = match &config.curve_file {
        Some(path) => crate::io::load_curves(path)?,
        None => cob_materials()?,
    };
    tracing::debug!(count = curves.len(), "catalog loaded");
    Ok(curves)
}

/// Pick curves by id or name, in the order requested.
///
/// `all` (or an empty query list when `default_all` is set) selects every curve.
/// An unknown material is an error (exit code 3).
pub fn select_curves(
    curves: &[SnCurve],
    queries: &[String],
    all: bool,
    default_all: bool,
) -> Result<Vec<SnCurve>, AppError> {
    if all || (queries.is_empty() && default_all) {
        return Ok(curves.to_vec());
    }
    if queries.is_empty() {
        return Err(AppError::new(3, "No material selected (use -m <ID> or --all)."));
    }

    queries
        .iter()
        .map(|q| {
            select(curves, q)
                .cloned()
                .ok_or_else(|| AppError::new(3, format!("Unknown material '{q}'. Run `sn list` for the catalog.")))
        })
        .collect()
}

/// Evaluate every curve at every cycle count.
///
/// Curves are evaluated in parallel; the output keeps the input order of both
/// curves and cycle counts. The first error aborts the whole evaluation.
pub fn evaluate_curves(curves: &[SnCurve], cycles: &[f64]) -> Result<Vec<StressTable>, CurveError> {
    curves
        .par_iter()
        .map(|curve| -> Result<StressTable, CurveError> {
            let rows = cycles
                .iter()
                .map(|&n| -> Result<TableSample, CurveError> {
                    let stress = curve.permissible_stress(n)?;
                    Ok(TableSample {
                        cycles: n,
                        root: stress.root,
                        flank: stress.flank,
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(StressTable {
                name: curve.name().to_string(),
                rows,
            })
        })
        .collect()
}

/// Interpolation tables of all `curves`, computed in parallel.
pub fn build_tables(curves: &[SnCurve]) -> Result<Vec<StressTable>, CurveError> {
    curves
        .par_iter()
        .map(|curve| -> Result<StressTable, CurveError> {
            Ok(StressTable {
                name: curve.name().to_string(),
                rows: interpolation_table(curve)?,
            })
        })
        .collect()
}
