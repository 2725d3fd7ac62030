//! Employee classification - decides whether a row is a person or a company
//!
//! Policy, first match wins:
//! 1. first and last name both non-blank → `Individual`
//! 2. company name and company type both non-blank → `Company`
//! 3. otherwise `InsufficientData`
//!
//! A row carrying both shapes is therefore always an `Individual`.

use crate::config::SheetLayout;
use crate::error::{RosterError, RosterResult};
use crate::excel::SheetRow;
use crate::types::{BankAccount, Company, CompanyType, Employee, EmployeeKind, Individual};
use tracing::debug;

/// Fields shared by both record shapes, read before classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseFields {
    pub id: i64,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub bank_account: BankAccount,
}

/// Classify `row` and build the matching record around `base`.
pub fn classify(
    row: &SheetRow<'_>,
    layout: &SheetLayout,
    base: BaseFields,
) -> RosterResult<Employee> {
    let first_name = row.text(layout.first_name)?;
    let last_name = row.text(layout.last_name)?;
    let company_name = row.text(layout.company_name)?;
    let company_type = row.text(layout.company_type)?;

    let kind = match (first_name, last_name, company_name, company_type) {
        (Some(first), Some(last), _, _) if is_filled(&first) && is_filled(&last) => {
            EmployeeKind::Individual(build_individual(row, layout, first, last)?)
        }
        (_, _, Some(name), Some(label)) if is_filled(&name) && is_filled(&label) => {
            EmployeeKind::Company(build_company(row, name, &label)?)
        }
        _ => return Err(RosterError::InsufficientData { row: row.index() }),
    };

    debug!(
        row = row.index(),
        id = base.id,
        kind = kind.label(),
        "classified row"
    );

    Ok(Employee::new(
        base.id,
        base.email,
        base.phone,
        base.address,
        base.bank_account,
        kind,
    ))
}

fn is_filled(value: &str) -> bool {
    !value.trim().is_empty()
}

fn build_individual(
    row: &SheetRow<'_>,
    layout: &SheetLayout,
    first_name: String,
    last_name: String,
) -> RosterResult<Individual> {
    let has_children = row
        .text(layout.has_children)?
        .is_some_and(|marker| marker == layout.has_children_marker);

    let age = row
        .integer(layout.age)?
        .ok_or(RosterError::MissingValue {
            row: row.index(),
            column: layout.age,
            field: "age",
        })?;

    Ok(Individual::new(first_name, last_name, has_children, age))
}

fn build_company(row: &SheetRow<'_>, name: String, label: &str) -> RosterResult<Company> {
    let company_type =
        CompanyType::from_label(label).ok_or_else(|| RosterError::InvalidCompanyType {
            row: row.index(),
            value: label.to_string(),
        })?;

    Ok(Company::new(name, company_type))
}
