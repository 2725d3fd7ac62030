//! Roster reader implementation - Excel (.xlsx) → employee records

use crate::config::SheetLayout;
use crate::error::{RosterError, RosterResult};
use crate::excel::SheetRow;
use crate::roster::process_row;
use crate::types::Employee;
use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use std::fmt::Display;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Reads the first worksheet of a roster workbook into employee records
pub struct RosterReader {
    path: PathBuf,
    layout: SheetLayout,
}

impl RosterReader {
    /// Create a reader using the default sheet layout
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            layout: SheetLayout::default(),
        }
    }

    /// Use a custom sheet layout
    pub fn with_layout(mut self, layout: SheetLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn layout(&self) -> &SheetLayout {
        &self.layout
    }

    /// Read every record up to the end-of-data sentinel.
    ///
    /// The first failing row aborts the whole read.
    pub fn read(&self) -> RosterResult<Vec<Employee>> {
        info!(path = %self.path.display(), "reading roster");

        let range = self.first_sheet()?;
        let roster = read_roster(&range, &self.layout)?;

        info!(records = roster.len(), "roster read complete");
        Ok(roster)
    }

    /// Decode the first worksheet. The workbook handle is dropped on return,
    /// whether decoding succeeded or not.
    fn first_sheet(&self) -> RosterResult<Range<Data>> {
        let mut workbook: Xlsx<_> = open_workbook(&self.path).map_err(|e| self.read_failed(e))?;

        match workbook.worksheet_range_at(0) {
            Some(range) => range.map_err(|e| self.read_failed(e)),
            None => Err(self.read_failed("workbook contains no worksheets")),
        }
    }

    fn read_failed(&self, reason: impl Display) -> RosterError {
        RosterError::FileReadFailed {
            path: self.path.clone(),
            reason: reason.to_string(),
        }
    }
}

/// Walk a decoded sheet from the first row after the header block.
///
/// Iteration stops, without error, at the first row that is outside the
/// decoded range or whose id is blank or zero. Later rows are never visited.
pub fn read_roster(range: &Range<Data>, layout: &SheetLayout) -> RosterResult<Vec<Employee>> {
    let mut roster = Vec::new();

    for index in layout.header_rows.. {
        let row = SheetRow::new(range, index);
        if !row.exists() {
            debug!(row = index, "end of sheet");
            break;
        }

        let id = row.integer(layout.id).map_err(|e| e.in_row(index))?;
        let id = match id {
            Some(0) | None => {
                debug!(row = index, "end-of-data sentinel");
                break;
            }
            Some(id) => id,
        };
        if id < 0 {
            debug!(row = index, id, "negative id kept as-is");
        }

        roster.push(process_row(&row, id, layout)?);
    }

    Ok(roster)
}
