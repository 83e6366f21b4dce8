//! `.dat` interpolation files for gear-rating software.
//!
//! A file holds three table functions over the interpolation grid:
//!
//! - `EdgeCycle`: index row and grid cycles (edge points for interpolation)
//! - `FlankSigH`: permissible contact stress per grid cycle count
//! - `FootSigF`: permissible root stress per grid cycle count, divided by `Y_ST`
//!
//! Cycles are written like `1e+03`, stresses with one decimal, fields
//! tab-separated.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::domain::{STRESS_CORRECTION_FACTOR, TableSample};
use crate::error::{AppError, CurveError};
use crate::models::{SnCurve, interpolation_table};

const RULE: &str = "-- -----------------------------------------------------------";

/// File name for a curve's interpolation file (`WL_<name>.dat`).
pub fn dat_file_name(curve: &SnCurve) -> String {
    let name: String = curve
        .name()
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '-' } else { c })
        .collect();
    format!("WL_{name}.dat")
}

/// Render the interpolation file for `curve`, stamped with `created`.
pub fn render_dat(curve: &SnCurve, created: NaiveDate) -> Result<String, CurveError> {
    let table = interpolation_table(curve)?;
    let mut out = String::new();

    out.push_str(RULE);
    out.push('\n');
    out.push_str(&format!("-- File = {}\n", dat_file_name(curve)));
    out.push_str(&format!("-- Created on {} by sn\n\n", created.format("%d/%m/%Y")));
    out.push_str(&format!("-- Material {}\n", curve.name()));
    out.push_str(RULE);
    out.push_str("\n\n");

    out.push_str("-- Data for significant no. of cycles (edge points for interpolation of Woehler line)\n");
    out.push_str(":TABLE FUNCTION EdgeCycle\n");
    out.push_str("\tINPUT X number TREAT NEXT_BIGGER\n");
    push_rows(
        &mut out,
        (1..=table.len()).map(|i| i.to_string()),
        table.iter().map(|s| format_cycles(s.cycles)),
    );

    out.push_str("-- Data for Hertzian pressure sigH\n");
    out.push_str(":TABLE FUNCTION FlankSigH\n");
    out.push_str("\tINPUT X Cycles TREAT LOG\n");
    push_rows(
        &mut out,
        table.iter().map(|s| format_cycles(s.cycles)),
        table.iter().map(|s| format!("{:.1}", s.flank)),
    );

    out.push_str("-- Data for fatigue strength tooth root sigF\n");
    out.push_str(":TABLE FUNCTION FootSigF\n");
    out.push_str("\tINPUT X Cycles TREAT LOG\n");
    push_rows(
        &mut out,
        table.iter().map(|s| format_cycles(s.cycles)),
        table.iter().map(|s| format!("{:.1}", root_limit_stress(s))),
    );

    Ok(out)
}

/// Write `WL_<name>.dat` for `curve` into `dir` and return its path.
pub fn write_dat_file(dir: &Path, curve: &SnCurve, created: NaiveDate) -> Result<PathBuf, AppError> {
    let text = render_dat(curve, created)?;
    fs::create_dir_all(dir)
        .map_err(|e| AppError::new(2, format!("Failed to create output dir '{}': {e}", dir.display())))?;

    let path = dir.join(dat_file_name(curve));
    fs::write(&path, text)
        .map_err(|e| AppError::new(2, format!("Failed to write '{}': {e}", path.display())))?;
    tracing::info!(material = curve.name(), path = %path.display(), "wrote interpolation file");
    Ok(path)
}

/// Scientific notation with no mantissa decimals and a signed two-digit exponent.
///
/// `1000.0` -> `1e+03`, `0.0` -> `0e+00`, `1e99` -> `1e+99`.
pub fn format_cycles(value: f64) -> String {
    let raw = format!("{value:.0e}");
    match raw.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exp),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        // inf/NaN carry no exponent
        None => raw,
    }
}

/// Root stress as the nominal limit of the reference test gear.
fn root_limit_stress(sample: &TableSample) -> f64 {
    sample.root / STRESS_CORRECTION_FACTOR
}

fn push_rows(
    out: &mut String,
    header: impl Iterator<Item = String>,
    values: impl Iterator<Item = String>,
) {
    out.push_str("DATA\n\t");
    for field in header {
        out.push_str(&field);
        out.push('\t');
    }
    out.push_str("\n\t");
    for field in values {
        out.push_str(&field);
        out.push('\t');
    }
    out.push_str("\nEND\n\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{cob_materials, select};

    fn created() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 7).unwrap()
    }

    #[test]
    fn cycles_formatting() {
        assert_eq!(format_cycles(0.0), "0e+00");
        assert_eq!(format_cycles(1e3), "1e+03");
        assert_eq!(format_cycles(9e10), "9e+10");
        assert_eq!(format_cycles(1e99), "1e+99");
        assert_eq!(format_cycles(1e-3), "1e-03");
        assert_eq!(format_cycles(7e5), "7e+05");
        assert_eq!(format_cycles(2e-12), "2e-12");
        assert_eq!(format_cycles(1e120), "1e+120");
        assert_eq!(format_cycles(f64::INFINITY), "inf");
    }

    #[test]
    fn file_layout() {
        let curves = cob_materials().unwrap();
        let curve = select(&curves, "AT-04").unwrap();
        let text = render_dat(curve, created()).unwrap();

        assert!(text.starts_with(RULE));
        assert!(text.contains(&format!("-- File = {}\n", dat_file_name(curve))));
        assert!(text.contains("-- Created on 07/03/2024 by sn\n"));
        for function in ["EdgeCycle", "FlankSigH", "FootSigF"] {
            assert!(text.contains(&format!(":TABLE FUNCTION {function}\n")), "{function}");
        }
        assert_eq!(text.matches("\nEND\n").count(), 3);

        let data_rows: Vec<&str> = text.lines().filter(|l| l.starts_with('\t') && !l.contains("INPUT")).collect();
        assert_eq!(data_rows.len(), 6);
        for row in &data_rows {
            assert_eq!(row.split('\t').filter(|f| !f.is_empty()).count(), 74, "{row}");
        }
        assert!(data_rows[0].starts_with("\t1\t2\t3\t"));
        assert!(data_rows[1].starts_with("\t0e+00\t1e+03\t2e+03\t"));
        assert!(data_rows[1].ends_with("\t9e+10\t1e+99\t"));
    }

    #[test]
    fn root_values_are_divided_by_stress_correction_factor() {
        let curves = cob_materials().unwrap();
        let curve = select(&curves, "AT-01").unwrap();
        let text = render_dat(curve, created()).unwrap();

        let rows: Vec<&str> = text.lines().filter(|l| l.starts_with('\t') && !l.contains("INPUT")).collect();
        let flank: Vec<&str> = rows[3].split('\t').filter(|f| !f.is_empty()).collect();
        let root: Vec<&str> = rows[5].split('\t').filter(|f| !f.is_empty()).collect();

        assert_eq!(flank[0], "2400.0");
        assert_eq!(flank[73], "1550.0");
        assert_eq!(root[0], "1260.0");
        assert_eq!(root[73], "525.0");
    }

    #[test]
    fn writes_into_directory() {
        let dir = tempfile::tempdir().unwrap();
        let curves = cob_materials().unwrap();
        let curve = &curves[0];
        let path = write_dat_file(&dir.path().join("tables"), curve, created()).unwrap();
        assert_eq!(path.file_name().unwrap().to_str().unwrap(), "WL_AT-01_18CrNiMo7-6(COB)_LN_190-3.dat");
        let text = std::fs::read_to_string(path).unwrap();
        assert_eq!(text, render_dat(curve, created()).unwrap());
    }
}
