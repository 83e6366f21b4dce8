//! Interpolation grid for tabulated S-N curves.
//!
//! Tabulated curves are read by the gear software with log interpolation between
//! grid points, so the grid is dense per decade: `m × 10^k` for `m = 1..=9` and
//! `k = 3..=10`, framed by a leading `0` and a terminal `1e99` sentinel.

use std::ops::RangeInclusive;

use crate::domain::TableSample;
use crate::error::CurveError;
use crate::models::SnCurve;

/// Decades covered by the grid (`10^3` .. `10^10`).
pub const GRID_DECADES: RangeInclusive<i32> = 3..=10;

/// Last grid entry; stands for "any larger cycle count".
pub const TERMINAL_CYCLES: f64 = 1e99;

/// Cycle counts of the interpolation grid, ascending.
pub fn interpolation_cycles() -> Vec<f64> {
    let mut cycles = Vec::with_capacity(2 + 9 * GRID_DECADES.count());
    cycles.push(0.0);
    for k in GRID_DECADES {
        let decade = 10f64.powi(k);
        for m in 1..=9 {
            cycles.push(f64::from(m) * decade);
        }
    }
    cycles.push(TERMINAL_CYCLES);
    cycles
}

/// Evaluate `curve` at every grid point.
pub fn interpolation_table(curve: &SnCurve) -> Result<Vec<TableSample>, CurveError> {
    interpolation_cycles()
        .into_iter()
        .map(|cycles| -> Result<TableSample, CurveError> {
            let stress = curve.permissible_stress(cycles)?;
            Ok(TableSample {
                cycles,
                root: stress.root,
                flank: stress.flank,
            })
        })
        .collect()
}
