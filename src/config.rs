//! Sheet layout configuration
//!
//! Column positions and the has-children marker are properties of the
//! upstream roster template, not of the parsing logic. The defaults match the
//! production template; a YAML file can override any subset of them.

use crate::error::{RosterError, RosterResult};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Text a has-children cell must hold, exactly, for the flag to be set
pub const DEFAULT_HAS_CHILDREN_MARKER: &str = "ИСТИНА";

/// Number of header rows above the first data row
pub const DEFAULT_HEADER_ROWS: u32 = 3;

/// Fixed column layout of the roster sheet (0-based indices)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SheetLayout {
    pub header_rows: u32,
    pub id: u32,
    pub email: u32,
    pub phone: u32,
    pub address: u32,
    pub first_name: u32,
    pub last_name: u32,
    pub has_children: u32,
    pub age: u32,
    pub company_name: u32,
    pub company_type: u32,
    pub iban: u32,
    pub bic: u32,
    pub account_holder: u32,
    pub has_children_marker: String,
}

impl Default for SheetLayout {
    fn default() -> Self {
        Self {
            header_rows: DEFAULT_HEADER_ROWS,
            id: 0,
            email: 2,
            phone: 3,
            address: 4,
            first_name: 6,
            last_name: 7,
            has_children: 8,
            age: 9,
            company_name: 11,
            company_type: 12,
            iban: 14,
            bic: 15,
            account_holder: 16,
            has_children_marker: DEFAULT_HAS_CHILDREN_MARKER.to_string(),
        }
    }
}

impl SheetLayout {
    /// Load a layout from YAML. Fields not present keep their defaults.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> RosterResult<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> RosterResult<Self> {
        let layout: SheetLayout = serde_yaml::from_str(content)?;
        layout.validate()?;
        Ok(layout)
    }

    /// Reject layouts that map two fields onto one column or have no marker.
    pub fn validate(&self) -> RosterResult<()> {
        if self.has_children_marker.is_empty() {
            return Err(RosterError::Layout(
                "has_children_marker must not be empty".to_string(),
            ));
        }

        let mut seen: HashMap<u32, &str> = HashMap::new();
        for (field, column) in self.columns() {
            if let Some(previous) = seen.insert(column, field) {
                return Err(RosterError::Layout(format!(
                    "{} and {} both use column {}",
                    previous, field, column
                )));
            }
        }

        Ok(())
    }

    fn columns(&self) -> [(&'static str, u32); 13] {
        [
            ("id", self.id),
            ("email", self.email),
            ("phone", self.phone),
            ("address", self.address),
            ("first_name", self.first_name),
            ("last_name", self.last_name),
            ("has_children", self.has_children),
            ("age", self.age),
            ("company_name", self.company_name),
            ("company_type", self.company_type),
            ("iban", self.iban),
            ("bic", self.bic),
            ("account_holder", self.account_holder),
        ]
    }
}
