use crate::config::SheetLayout;
use crate::error::{RosterError, RosterResult};
use crate::excel::SheetRow;
use crate::types::BankAccount;

/// Read the IBAN, BIC and account holder columns of `row`.
///
/// Values are taken verbatim; any blank or missing cell fails the whole
/// account with `IncompleteBankAccount`.
pub fn extract_bank_account(row: &SheetRow<'_>, layout: &SheetLayout) -> RosterResult<BankAccount> {
    let iban = row.text(layout.iban)?;
    let bic = row.text(layout.bic)?;
    let account_holder = row.text(layout.account_holder)?;

    match (iban, bic, account_holder) {
        (Some(iban), Some(bic), Some(account_holder)) => {
            Ok(BankAccount::new(iban, bic, account_holder))
        }
        (iban, bic, account_holder) => {
            let missing = [
                ("IBAN", iban.is_none()),
                ("BIC", bic.is_none()),
                ("account holder", account_holder.is_none()),
            ]
            .into_iter()
            .filter_map(|(field, absent)| absent.then_some(field))
            .collect();

            Err(RosterError::IncompleteBankAccount {
                row: row.index(),
                missing,
            })
        }
    }
}
