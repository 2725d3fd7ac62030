use crate::excel::{CellKind, TargetType};
use std::path::PathBuf;
use thiserror::Error;

pub type RosterResult<T> = Result<T, RosterError>;

/// Everything that can go wrong while turning a roster sheet into records.
///
/// Row numbers are 0-based sheet row indices, columns are 0-based column
/// indices, matching the coordinates calamine reports.
#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Invalid file path: {}", .path.display())]
    InvalidFilePath { path: PathBuf },

    #[error("Error reading Excel file {}: {reason}", .path.display())]
    FileReadFailed { path: PathBuf, reason: String },

    #[error("Expected {expected} in column {column} on row {row}, found {actual} cell")]
    TypeMismatch {
        row: u32,
        column: u32,
        expected: TargetType,
        actual: CellKind,
    },

    #[error("Unsupported cell type {found} in column {column} on row {row}")]
    UnsupportedCellType { row: u32, column: u32, found: String },

    #[error("Missing {field} in column {column} on row {row}")]
    MissingValue {
        row: u32,
        column: u32,
        field: &'static str,
    },

    #[error("Incomplete bank account data on row: {row} (missing {})", .missing.join(", "))]
    IncompleteBankAccount { row: u32, missing: Vec<&'static str> },

    #[error("Invalid company type '{value}' on row: {row}")]
    InvalidCompanyType { row: u32, value: String },

    #[error("Insufficient data to determine employee type on row: {row}")]
    InsufficientData { row: u32 },

    #[error("Error processing row: {row} - {source}")]
    RowProcessingFailed {
        row: u32,
        #[source]
        source: Box<RosterError>,
    },

    #[error("Invalid sheet layout: {0}")]
    Layout(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl RosterError {
    /// Sheet row the error is located at, if any.
    pub fn row(&self) -> Option<u32> {
        match self {
            RosterError::TypeMismatch { row, .. }
            | RosterError::UnsupportedCellType { row, .. }
            | RosterError::MissingValue { row, .. }
            | RosterError::IncompleteBankAccount { row, .. }
            | RosterError::InvalidCompanyType { row, .. }
            | RosterError::InsufficientData { row }
            | RosterError::RowProcessingFailed { row, .. } => Some(*row),
            _ => None,
        }
    }

    /// The wrapped cause of a `RowProcessingFailed`, otherwise `self`.
    pub fn inner(&self) -> &RosterError {
        match self {
            RosterError::RowProcessingFailed { source, .. } => source.as_ref(),
            other => other,
        }
    }

    /// Wrap a row-level failure with its row context.
    pub(crate) fn in_row(self, row: u32) -> RosterError {
        match self {
            already @ RosterError::RowProcessingFailed { .. } => already,
            other => RosterError::RowProcessingFailed {
                row,
                source: Box::new(other),
            },
        }
    }
}
