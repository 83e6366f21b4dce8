//! Read/write curve JSON files.
//!
//! A curve file is a JSON array of `CurveRecord`s. Exports include the derived
//! slopes for readers; on load only the raw parameters are used and every curve
//! is validated again, so a hand-written file may omit the slope fields.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::domain::{CurveRecord, ExportFormat};
use crate::error::AppError;
use crate::io::export::{read_records_csv, records};
use crate::models::SnCurve;

/// Write curve records as a pretty-printed JSON array.
pub fn write_records_json(path: &Path, curves: &[SnCurve]) -> Result<(), AppError> {
    let rows = records(curves)?;
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create curve JSON '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(file, &rows)
        .map_err(|e| AppError::new(2, format!("Failed to write curve JSON: {e}")))?;

    tracing::info!(rows = rows.len(), path = %path.display(), "exported curve records");
    Ok(())
}

/// Read curve records from a JSON file.
pub fn read_records_json(path: &Path) -> Result<Vec<CurveRecord>, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open curve JSON '{}': {e}", path.display())))?;
    let rows: Vec<CurveRecord> = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| AppError::new(2, format!("Invalid curve JSON: {e}")))?;
    Ok(rows)
}

/// Load and validate curves from a JSON or CSV curve file (by extension).
pub fn load_curves(path: &Path) -> Result<Vec<SnCurve>, AppError> {
    let rows = match ExportFormat::from_path(path) {
        ExportFormat::Json => read_records_json(path)?,
        ExportFormat::Csv => read_records_csv(path)?,
    };
    if rows.is_empty() {
        return Err(AppError::new(3, format!("Curve file '{}' contains no curves.", path.display())));
    }

    let curves = rows
        .into_iter()
        .map(SnCurve::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(count = curves.len(), path = %path.display(), "loaded curve file");
    Ok(curves)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::cob_materials;

    #[test]
    fn json_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("curves.json");
        let curves = cob_materials().unwrap();
        write_records_json(&path, &curves).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"p_H_lim_pit\": null"));
        assert!(text.contains("\"sig_FE\": 1050.0"));

        let loaded = load_curves(&path).unwrap();
        assert_eq!(loaded, curves);
    }

    #[test]
    fn params_only_file_is_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.json");
        std::fs::write(
            &path,
            r#"[{"name": "custom", "N_F_stat": 1e3, "N_F_d": 3e6, "sig_FP_stat": 2520, "sig_FE": 1050,
                 "N_H_stat": 1e5, "N_H_d": 5e7, "sig_HP_stat": 2400, "sig_H_lim": 1550}]"#,
        )
        .unwrap();

        let curves = load_curves(&path).unwrap();
        assert_eq!(curves.len(), 1);
        assert!(!curves[0].limited_pitting() && !curves[0].reduced_life_factor());
        let slopes = curves[0].slopes().unwrap();
        assert!(9.1 < slopes.root && slopes.root < 9.2);
    }

    #[test]
    fn invalid_curve_in_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(
            &path,
            r#"[{"name": "bad", "N_F_stat": 3e6, "N_F_d": 1e3, "sig_FP_stat": 2520, "sig_FE": 1050,
                 "N_H_stat": 1e5, "N_H_d": 5e7, "sig_HP_stat": 2400, "sig_H_lim": 1550}]"#,
        )
        .unwrap();

        let err = load_curves(&path).unwrap_err();
        assert_eq!(err.exit_code(), 3);
        assert!(err.to_string().contains("'bad'"));
    }
}
