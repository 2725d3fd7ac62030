use crate::config::SheetLayout;
use crate::error::RosterResult;
use crate::excel::SheetRow;
use crate::roster::bank_account::extract_bank_account;
use crate::roster::classifier::{classify, BaseFields};
use crate::types::Employee;

/// Turn one data row into a roster record.
///
/// Every failure comes back as `RowProcessingFailed` carrying the row index
/// and the original error as its source.
pub fn process_row(row: &SheetRow<'_>, id: i64, layout: &SheetLayout) -> RosterResult<Employee> {
    build_employee(row, id, layout).map_err(|e| e.in_row(row.index()))
}

fn build_employee(row: &SheetRow<'_>, id: i64, layout: &SheetLayout) -> RosterResult<Employee> {
    let email = row.text(layout.email)?;
    let phone = row.text(layout.phone)?;
    let address = row.text(layout.address)?;

    let bank_account = extract_bank_account(row, layout)?;

    classify(
        row,
        layout,
        BaseFields {
            id,
            email,
            phone,
            address,
            bank_account,
        },
    )
}
