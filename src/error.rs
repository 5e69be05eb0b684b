//! Error types.
//!
//! - `DecodeError`: a single CSV row failed to decode into a typed record
//! - `IngestError`: a decode/read failure with file (and line) context
//! - `AppError`: what the binary reports, carrying the process exit code

use std::path::PathBuf;

use thiserror::Error;

/// A single row could not be decoded into a typed record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("field count {actual} does not match expected {expected}")]
    FieldCount { expected: usize, actual: usize },

    #[error("unsupported coverage tier `{0}`")]
    MalformedTier(String),

    #[error("malformed {field} `{value}`")]
    MalformedNumber { field: &'static str, value: String },
}

/// Failure while loading one of the input files.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to open '{}': {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{}': CSV parse error: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("'{}' line {line}: {source}", .path.display())]
    Row {
        path: PathBuf,
        line: u64,
        #[source]
        source: DecodeError,
    },
}

impl IngestError {
    /// The row-level cause, if this failure came from decoding a row.
    pub fn decode_error(&self) -> Option<&DecodeError> {
        match self {
            IngestError::Row { source, .. } => Some(source),
            _ => None,
        }
    }
}

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

impl From<IngestError> for AppError {
    fn from(err: IngestError) -> Self {
        AppError::new(2, err.to_string())
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
    fn row_errors_name_file_line_and_counts() {
        let err = IngestError::Row {
            path: PathBuf::from("plans.csv"),
            line: 3,
            source: DecodeError::FieldCount { expected: 5, actual: 4 },
        };
        assert_eq!(
            err.to_string(),
            "'plans.csv' line 3: field count 4 does not match expected 5"
        );
        assert!(matches!(err.decode_error(), Some(DecodeError::FieldCount { .. })));
    }

    #[test]
    fn ingest_errors_map_to_exit_code_2() {
        let err = IngestError::Row {
            path: PathBuf::from("zips.csv"),
            line: 7,
            source: DecodeError::MalformedNumber {
                field: "rate_area",
                value: "x".to_string(),
            },
        };
        let app: AppError = err.into();
        assert_eq!(app.exit_code(), 2);
        assert!(app.to_string().contains("malformed rate_area `x`"));
    }
}
