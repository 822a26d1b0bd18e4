//! Error types.
//!
//! - `EvalError`: the closed set of failures the evaluation core can produce.
//!   Formula tiers treat every variant the same way (abort the tier).
//! - `AppError`: what the binary reports; carries a process exit code.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::TableName;

/// Failure raised by table loading, interpolation, or a tier-1 formula.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// The named table could not be obtained from its data source.
    #[error("cannot open table '{name}' at '{}': {reason}", .path.display())]
    DataSource {
        name: TableName,
        path: PathBuf,
        reason: String,
    },

    /// No sample pair brackets the query coordinate.
    #[error("value out of range: x = {0}")]
    Range(f64),

    /// Algebraically undefined or numerically unsafe input.
    #[error("{op}: {reason}")]
    Domain {
        op: &'static str,
        reason: &'static str,
    },
}

impl EvalError {
    pub fn data_source(name: TableName, path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        EvalError::DataSource {
            name,
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn domain(op: &'static str, reason: &'static str) -> Self {
        EvalError::Domain { op, reason }
    }

    /// Short label used when displaying the error kind.
    pub fn kind_label(&self) -> &'static str {
        match self {
            EvalError::DataSource { .. } => "File error",
            EvalError::Range(_) => "Range error",
            EvalError::Domain { .. } => "Domain error",
        }
    }
}

/// Exit code for failures outside the evaluation core (result encoding, RNG setup).
///
/// Codes 2-4 are reserved for the `EvalError` kinds.
pub const INTERNAL_EXIT_CODE: u8 = 5;

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

impl From<EvalError> for AppError {
    fn from(err: EvalError) -> Self {
        let (code, message) = match &err {
            EvalError::DataSource { path, .. } => (2, format!("{}: can't open {}", err.kind_label(), path.display())),
            EvalError::Range(x) => (3, format!("{}: x = {x}", err.kind_label())),
            EvalError::Domain { .. } => (4, format!("{}: {err}", err.kind_label())),
        };
        AppError::new(code, message)
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
    fn app_error_exit_codes_follow_error_kind() {
        let missing = EvalError::data_source(TableName::Upper, "data/dat_X1_00.dat", "not found");
        let app: AppError = missing.into();
        assert_eq!(app.exit_code(), 2);
        assert_eq!(app.to_string(), "File error: can't open data/dat_X1_00.dat");

        let app: AppError = EvalError::Range(7.5).into();
        assert_eq!(app.exit_code(), 3);
        assert_eq!(app.to_string(), "Range error: x = 7.5");

        let app: AppError = EvalError::domain("gold", "equal arguments").into();
        assert_eq!(app.exit_code(), 4);
        assert_eq!(app.to_string(), "Domain error: gold: equal arguments");

        assert!(![2, 3, 4].contains(&INTERNAL_EXIT_CODE));
    }
}
