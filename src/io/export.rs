//! Export curve records to CSV.
//!
//! One row per curve: the ten inputs plus the five slopes. Slopes of disabled
//! regimes are empty cells so spreadsheets and scripts still see numeric columns.

use std::path::Path;

use crate::domain::CurveRecord;
use crate::error::{AppError, CurveError};
use crate::models::SnCurve;

/// Records for a list of curves, in order.
pub fn records(curves: &[SnCurve]) -> Result<Vec<CurveRecord>, CurveError> {
    curves.iter().map(SnCurve::to_record).collect()
}

/// Write curve records to a CSV file.
pub fn write_records_csv(path: &Path, curves: &[SnCurve]) -> Result<(), AppError> {
    let rows = records(curves)?;
    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| AppError::new(2, format!("Failed to create export CSV '{}': {e}", path.display())))?;

    for row in &rows {
        writer
            .serialize(row)
            .map_err(|e| AppError::new(2, format!("Failed to write export CSV row: {e}")))?;
    }
    writer
        .flush()
        .map_err(|e| AppError::new(2, format!("Failed to write export CSV: {e}")))?;

    tracing::info!(rows = rows.len(), path = %path.display(), "exported curve records");
    Ok(())
}

/// Read curve records from a CSV file written by `write_records_csv`.
///
/// Slope columns may be missing or empty.
pub fn read_records_csv(path: &Path) -> Result<Vec<CurveRecord>, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| AppError::new(2, format!("Failed to open CSV '{}': {e}", path.display())))?;

    let mut out = Vec::new();
    for (idx, result) in reader.deserialize::<CurveRecord>().enumerate() {
        // +2: header line, 1-based line numbers.
        let record = result.map_err(|e| AppError::new(2, format!("Invalid curve row at line {}: {e}", idx + 2)))?;
        out.push(record);
    }
    Ok(out)
}
