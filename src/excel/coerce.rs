//! Cell value coercion - calamine `Data` → typed field values
//!
//! [`coerce`] dispatches on the requested target type; each typed wrapper
//! then matches the source cell kind. Date-formatted numbers are numeric.
//! Blank cells are never an error: they coerce to `None` whatever the
//! target, and callers decide whether a missing value is acceptable.

use crate::error::{RosterError, RosterResult};
use calamine::Data;
use std::fmt;

/// Kind of a decoded spreadsheet cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Text,
    Numeric,
    Boolean,
    Blank,
}

impl CellKind {
    /// Classify a calamine cell. Date-formatted numbers are numeric; ISO
    /// date/duration strings and error cells return `None`.
    pub fn of(cell: &Data) -> Option<CellKind> {
        match cell {
            Data::String(_) => Some(CellKind::Text),
            Data::Float(_) | Data::Int(_) | Data::DateTime(_) => Some(CellKind::Numeric),
            Data::Bool(_) => Some(CellKind::Boolean),
            Data::Empty => Some(CellKind::Blank),
            _ => None,
        }
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CellKind::Text => "text",
            CellKind::Numeric => "numeric",
            CellKind::Boolean => "boolean",
            CellKind::Blank => "blank",
        };
        f.write_str(name)
    }
}

/// Semantic type a field is read as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetType {
    Text,
    Integer,
    Boolean,
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TargetType::Text => "text",
            TargetType::Integer => "integer",
            TargetType::Boolean => "boolean",
        };
        f.write_str(name)
    }
}

/// A successfully coerced value, always of the requested target type
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Boolean(bool),
}

/// Coerce one cell to `target`.
///
/// A cell outside the decoded range (`None`) is treated as blank.
pub fn coerce(
    cell: Option<&Data>,
    target: TargetType,
    row: u32,
    column: u32,
) -> RosterResult<Option<CellValue>> {
    Ok(match target {
        TargetType::Text => coerce_text(cell, row, column)?.map(CellValue::Text),
        TargetType::Integer => coerce_integer(cell, row, column)?.map(CellValue::Integer),
        TargetType::Boolean => coerce_boolean(cell, row, column)?.map(CellValue::Boolean),
    })
}

/// Coerce a cell as text
pub fn coerce_text(cell: Option<&Data>, row: u32, column: u32) -> RosterResult<Option<String>> {
    let cell = match cell {
        Some(cell) => cell,
        None => return Ok(None),
    };

    match cell {
        Data::Empty => Ok(None),
        Data::String(s) => Ok(Some(s.clone())),
        Data::Float(f) => Ok(Some(format_numeric(*f))),
        Data::DateTime(dt) => Ok(Some(format_numeric(dt.as_f64()))),
        Data::Int(i) => Ok(Some(i.to_string())),
        Data::Bool(b) => Ok(Some(b.to_string())),
        other => Err(unsupported(other, row, column)),
    }
}

/// Coerce a cell as an integer (numeric values truncate toward zero)
pub fn coerce_integer(cell: Option<&Data>, row: u32, column: u32) -> RosterResult<Option<i64>> {
    let cell = match cell {
        Some(cell) => cell,
        None => return Ok(None),
    };

    let type_error = |actual| mismatch(TargetType::Integer, actual, row, column);
    match cell {
        Data::Empty => Ok(None),
        Data::Int(i) => Ok(Some(*i)),
        Data::Float(f) => truncate(*f).map(Some).ok_or_else(|| type_error(CellKind::Numeric)),
        Data::DateTime(dt) => truncate(dt.as_f64())
            .map(Some)
            .ok_or_else(|| type_error(CellKind::Numeric)),
        Data::String(_) => Err(type_error(CellKind::Text)),
        Data::Bool(_) => Err(type_error(CellKind::Boolean)),
        other => Err(unsupported(other, row, column)),
    }
}

/// Coerce a cell as a boolean
pub fn coerce_boolean(cell: Option<&Data>, row: u32, column: u32) -> RosterResult<Option<bool>> {
    let cell = match cell {
        Some(cell) => cell,
        None => return Ok(None),
    };

    let type_error = |actual| mismatch(TargetType::Boolean, actual, row, column);
    match cell {
        Data::Empty => Ok(None),
        Data::Bool(b) => Ok(Some(*b)),
        Data::String(_) => Err(type_error(CellKind::Text)),
        Data::Float(_) | Data::Int(_) | Data::DateTime(_) => Err(type_error(CellKind::Numeric)),
        other => Err(unsupported(other, row, column)),
    }
}

/// `None` for NaN and infinities. `as` saturates out-of-range values.
fn truncate(n: f64) -> Option<i64> {
    n.is_finite().then(|| n.trunc() as i64)
}

fn mismatch(expected: TargetType, actual: CellKind, row: u32, column: u32) -> RosterError {
    RosterError::TypeMismatch {
        row,
        column,
        expected,
        actual,
    }
}

fn unsupported(cell: &Data, row: u32, column: u32) -> RosterError {
    RosterError::UnsupportedCellType {
        row,
        column,
        found: format!("{:?}", cell),
    }
}

/// Render a numeric cell the way it reads in the sheet: integral values
/// without a fractional part (30.0 → "30"), others in their shortest form.
fn format_numeric(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{:.0}", n)
    } else {
        n.to_string()
    }
}
