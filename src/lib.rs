//! xlsx-roster - typed employee records from an Excel workforce roster
//!
//! This library reads the first worksheet of a roster workbook, converts each
//! data row into an [`Employee`] and classifies it as an individual or a
//! company, validating that every record carries a complete bank account.
//!
//! # Features
//!
//! - Per-field cell coercion (text, integer, boolean) with typed errors
//! - Individual / company classification with a fixed precedence
//! - Row-located errors; the first bad row aborts the read
//! - Configurable column layout (YAML)
//!
//! # Example
//!
//! ```no_run
//! use xlsx_roster::excel::RosterReader;
//! use xlsx_roster::summary::RosterSummary;
//!
//! let roster = RosterReader::new("roster.xlsx").read()?;
//! let summary = RosterSummary::from_roster(&roster);
//!
//! println!("Employees: {}", summary.total);
//! println!("Companies: {}", summary.companies);
//! # Ok::<(), xlsx_roster::error::RosterError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod excel;
pub mod roster;
pub mod summary;
pub mod types;

// Re-export commonly used types
pub use config::SheetLayout;
pub use error::{RosterError, RosterResult};
pub use types::{BankAccount, Company, CompanyType, Employee, EmployeeKind, Individual};
