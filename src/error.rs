//! Error types.
//!
//! - `CurveError`: failures of the S-N curve model itself (construction,
//!   evaluation, unsupported queries). Library callers match on these.
//! - `AppError`: what the `sn` binary reports; carries the process exit code.

use thiserror::Error;

/// Errors raised by the fatigue-curve model and its derived data.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// Non-positive/non-finite input or an ordering violation between the
    /// static and endurance anchors. Raised at construction.
    #[error("Invalid curve parameters for '{name}': {reason}")]
    InvalidCurveParameters { name: String, reason: String },

    /// The requested operation has no implementation (inverse queries).
    #[error("Not implemented: {operation}")]
    NotImplemented { operation: &'static str },

    /// A logarithm or power would need a non-positive or non-finite argument.
    #[error("Numeric domain error in {what}: {value}")]
    NumericDomainError { what: &'static str, value: f64 },
}

impl CurveError {
    pub(crate) fn invalid(name: &str, reason: impl Into<String>) -> Self {
        CurveError::InvalidCurveParameters {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

/// Error reported by the CLI, with the exit code to terminate with.
///
/// Exit codes:
/// - `2`: input/IO problems (files, CSV/JSON, plotting backend)
/// - `3`: invalid curve parameters, unknown material
/// - `4`: numeric failures and unsupported operations
#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<CurveError> for AppError {
    fn from(err: CurveError) -> Self {
        let exit_code = match err {
            CurveError::InvalidCurveParameters { .. } => 3,
            CurveError::NotImplemented { .. } | CurveError::NumericDomainError { .. } => 4,
        };
        AppError::new(exit_code, err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curve_errors_map_to_exit_codes() {
        let invalid: AppError = CurveError::invalid("X", "bad").into();
        assert_eq!(invalid.exit_code(), 3);
        assert!(invalid.to_string().contains("'X'"));

        let domain: AppError = CurveError::NumericDomainError { what: "load cycles", value: -1.0 }.into();
        assert_eq!(domain.exit_code(), 4);

        let todo: AppError = CurveError::NotImplemented { operation: "cycles_for_stress" }.into();
        assert_eq!(todo.exit_code(), 4);
        assert!(todo.to_string().contains("cycles_for_stress"));
    }
}
