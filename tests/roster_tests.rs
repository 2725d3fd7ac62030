//! End-to-end roster reading tests against real .xlsx workbooks

use pretty_assertions::assert_eq;
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::PathBuf;
use tempfile::TempDir;
use xlsx_roster::excel::RosterReader;
use xlsx_roster::{CompanyType, RosterError, SheetLayout};

// ═══════════════════════════════════════════════════════════════════════════
// FIXTURE HELPERS
// ═══════════════════════════════════════════════════════════════════════════

const ID_COL: u16 = 0;
const EMAIL_COL: u16 = 2;
const PHONE_COL: u16 = 3;
const ADDRESS_COL: u16 = 4;
const FIRST_NAME_COL: u16 = 6;
const LAST_NAME_COL: u16 = 7;
const HAS_CHILDREN_COL: u16 = 8;
const AGE_COL: u16 = 9;
const COMPANY_NAME_COL: u16 = 11;
const COMPANY_TYPE_COL: u16 = 12;
const IBAN_COL: u16 = 14;
const BIC_COL: u16 = 15;
const ACCOUNT_HOLDER_COL: u16 = 16;

const HEADER_ROWS: u32 = 3;

fn write_headers(sheet: &mut Worksheet) {
    sheet.write_string(0, 0, "Employee roster").unwrap();
    sheet.write_string(1, ID_COL, "ID").unwrap();
    sheet.write_string(1, FIRST_NAME_COL, "Individual").unwrap();
    sheet.write_string(1, COMPANY_NAME_COL, "Company").unwrap();
    sheet.write_string(1, IBAN_COL, "Bank account").unwrap();
    sheet.write_string(2, ID_COL, "#").unwrap();
    sheet.write_string(2, EMAIL_COL, "Email").unwrap();
    sheet.write_string(2, IBAN_COL, "IBAN").unwrap();
}

fn write_contact(sheet: &mut Worksheet, row: u32, id: f64, email: &str, phone: &str, address: &str) {
    sheet.write_number(row, ID_COL, id).unwrap();
    sheet.write_string(row, EMAIL_COL, email).unwrap();
    sheet.write_string(row, PHONE_COL, phone).unwrap();
    sheet.write_string(row, ADDRESS_COL, address).unwrap();
}

fn write_bank(sheet: &mut Worksheet, row: u32) {
    sheet.write_string(row, IBAN_COL, "some-iban").unwrap();
    sheet.write_string(row, BIC_COL, "some-bic").unwrap();
    sheet.write_string(row, ACCOUNT_HOLDER_COL, "Some Holder").unwrap();
}

fn write_individual(sheet: &mut Worksheet, row: u32, id: f64, first: &str, last: &str, age: f64) {
    write_contact(sheet, row, id, "john@example.com", "1234567890", "123 Main St");
    sheet.write_string(row, FIRST_NAME_COL, first).unwrap();
    sheet.write_string(row, LAST_NAME_COL, last).unwrap();
    sheet.write_number(row, AGE_COL, age).unwrap();
    write_bank(sheet, row);
}

fn write_company(sheet: &mut Worksheet, row: u32, id: f64, name: &str, company_type: &str) {
    write_contact(sheet, row, id, "jane@example.com", "0987654321", "456 Elm St");
    sheet.write_string(row, COMPANY_NAME_COL, name).unwrap();
    sheet.write_string(row, COMPANY_TYPE_COL, company_type).unwrap();
    write_bank(sheet, row);
}

fn save_workbook<F>(dir: &TempDir, name: &str, fill: F) -> PathBuf
where
    F: FnOnce(&mut Worksheet),
{
    let path = dir.path().join(name);
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    fill(sheet);
    workbook.save(&path).unwrap();
    path
}

// ═══════════════════════════════════════════════════════════════════════════
// SUCCESSFUL READS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_individual_then_company() {
    let dir = TempDir::new().unwrap();
    let path = save_workbook(&dir, "roster.xlsx", |sheet| {
        write_headers(sheet);
        write_individual(sheet, HEADER_ROWS, 1.0, "John", "Doe", 30.0);
        sheet.write_string(HEADER_ROWS, HAS_CHILDREN_COL, "ИСТИНА").unwrap();
        write_company(sheet, HEADER_ROWS + 1, 2.0, "Company Inc", "SARS");
    });

    let roster = RosterReader::new(&path).read().unwrap();
    assert_eq!(roster.len(), 2);

    let john = &roster[0];
    assert_eq!(john.id(), 1);
    assert_eq!(john.email(), Some("john@example.com"));
    assert_eq!(john.phone(), Some("1234567890"));
    assert_eq!(john.address(), Some("123 Main St"));
    assert_eq!(john.bank_account().iban(), "some-iban");
    let individual = john.as_individual().expect("first row is an individual");
    assert_eq!(individual.first_name(), "John");
    assert_eq!(individual.last_name(), "Doe");
    assert_eq!(individual.age(), 30);
    assert!(individual.has_children());

    let company = roster[1].as_company().expect("second row is a company");
    assert_eq!(roster[1].id(), 2);
    assert_eq!(company.name(), "Company Inc");
    assert_eq!(company.company_type(), CompanyType::Sars);
}

#[test]
fn test_boolean_has_children_cell_is_not_the_marker() {
    let dir = TempDir::new().unwrap();
    let path = save_workbook(&dir, "roster.xlsx", |sheet| {
        write_individual(sheet, HEADER_ROWS, 1.0, "John", "Doe", 30.0);
        sheet.write_boolean(HEADER_ROWS, HAS_CHILDREN_COL, true).unwrap();
    });

    let roster = RosterReader::new(&path).read().unwrap();
    assert!(!roster[0].as_individual().unwrap().has_children());
}

#[test]
fn test_numeric_phone_is_rendered_without_fraction() {
    let dir = TempDir::new().unwrap();
    let path = save_workbook(&dir, "roster.xlsx", |sheet| {
        write_individual(sheet, HEADER_ROWS, 1.0, "John", "Doe", 30.0);
        sheet.write_number(HEADER_ROWS, PHONE_COL, 1234567890.0).unwrap();
        sheet.write_number(HEADER_ROWS, ADDRESS_COL, 30.5).unwrap();
    });

    let roster = RosterReader::new(&path).read().unwrap();
    assert_eq!(roster[0].phone(), Some("1234567890"));
    assert_eq!(roster[0].address(), Some("30.5"));
}

#[test]
fn test_date_formatted_numbers_are_numeric() {
    let dir = TempDir::new().unwrap();
    let path = save_workbook(&dir, "dates.xlsx", |sheet| {
        let date = Format::new().set_num_format("yyyy-mm-dd");
        write_individual(sheet, HEADER_ROWS, 1.0, "John", "Doe", 30.0);
        sheet.write_number_with_format(HEADER_ROWS, ID_COL, 1.0, &date).unwrap();
        sheet.write_number_with_format(HEADER_ROWS, AGE_COL, 30.0, &date).unwrap();
    });

    let roster = RosterReader::new(&path).read().unwrap();
    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0].id(), 1);
    assert_eq!(roster[0].as_individual().unwrap().age(), 30);
}

#[test]
fn test_empty_table() {
    let dir = TempDir::new().unwrap();
    let path = save_workbook(&dir, "empty.xlsx", |_| {});

    let roster = RosterReader::new(&path).read().unwrap();
    assert!(roster.is_empty(), "Roster should be empty for an empty table");
}

#[test]
fn test_headers_only() {
    let dir = TempDir::new().unwrap();
    let path = save_workbook(&dir, "headers.xlsx", write_headers);

    let roster = RosterReader::new(&path).read().unwrap();
    assert!(roster.is_empty());
}

#[test]
fn test_rows_after_zero_id_are_ignored() {
    let dir = TempDir::new().unwrap();
    let path = save_workbook(&dir, "sentinel.xlsx", |sheet| {
        write_headers(sheet);
        write_individual(sheet, HEADER_ROWS, 1.0, "John", "Doe", 30.0);
        write_individual(sheet, HEADER_ROWS + 1, 0.0, "Zero", "Id", 40.0);
        write_individual(sheet, HEADER_ROWS + 2, 3.0, "Jane", "Roe", 25.0);
    });

    let roster = RosterReader::new(&path).read().unwrap();
    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0].as_individual().unwrap().first_name(), "John");
}

#[test]
fn test_rows_after_blank_row_are_ignored() {
    let dir = TempDir::new().unwrap();
    let path = save_workbook(&dir, "gap.xlsx", |sheet| {
        write_headers(sheet);
        write_company(sheet, HEADER_ROWS, 1.0, "Company Inc", "SRL");
        // Broken row after the gap must never be visited
        sheet.write_number(HEADER_ROWS + 2, ID_COL, 9.0).unwrap();
    });

    let roster = RosterReader::new(&path).read().unwrap();
    assert_eq!(roster.len(), 1);
}

#[test]
fn test_custom_layout_marker() {
    let dir = TempDir::new().unwrap();
    let path = save_workbook(&dir, "marker.xlsx", |sheet| {
        write_individual(sheet, HEADER_ROWS, 1.0, "John", "Doe", 30.0);
        sheet.write_string(HEADER_ROWS, HAS_CHILDREN_COL, "TRUE").unwrap();
    });

    let layout = SheetLayout {
        has_children_marker: "TRUE".to_string(),
        ..SheetLayout::default()
    };
    let roster = RosterReader::new(&path).with_layout(layout).read().unwrap();
    assert!(roster[0].as_individual().unwrap().has_children());
}

// ═══════════════════════════════════════════════════════════════════════════
// FAILING READS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_missing_first_name_and_bank_account() {
    let dir = TempDir::new().unwrap();
    let path = save_workbook(&dir, "invalid.xlsx", |sheet| {
        write_contact(sheet, HEADER_ROWS, 1.0, "john@example.com", "1234567890", "123 Main St");
        sheet.write_string(HEADER_ROWS, LAST_NAME_COL, "Doe").unwrap();
        sheet.write_string(HEADER_ROWS, HAS_CHILDREN_COL, "ИСТИНА").unwrap();
        sheet.write_number(HEADER_ROWS, AGE_COL, 30.0).unwrap();
    });

    let err = RosterReader::new(&path).read().unwrap_err();
    assert_eq!(err.row(), Some(3));
    assert!(matches!(
        err.inner(),
        RosterError::IncompleteBankAccount { row: 3, .. }
    ));
}

#[test]
fn test_missing_first_name_with_bank_account() {
    let dir = TempDir::new().unwrap();
    let path = save_workbook(&dir, "invalid.xlsx", |sheet| {
        write_individual(sheet, HEADER_ROWS, 1.0, "John", "Doe", 30.0);
        sheet.write_string(HEADER_ROWS, FIRST_NAME_COL, "  ").unwrap();
    });

    let err = RosterReader::new(&path).read().unwrap_err();
    assert!(matches!(err.inner(), RosterError::InsufficientData { row: 3 }));
}

fn missing_bank_fields(err: &RosterError) -> Vec<&'static str> {
    match err.inner() {
        RosterError::IncompleteBankAccount { missing, .. } => missing.clone(),
        other => panic!("Expected IncompleteBankAccount, got {:?}", other),
    }
}

#[test]
fn test_valid_individual_missing_iban() {
    let dir = TempDir::new().unwrap();
    let path = save_workbook(&dir, "bank.xlsx", |sheet| {
        write_headers(sheet);
        write_company(sheet, HEADER_ROWS, 1.0, "Company Inc", "SARS");
        let row = HEADER_ROWS + 1;
        write_contact(sheet, row, 2.0, "john@example.com", "1234567890", "123 Main St");
        sheet.write_string(row, FIRST_NAME_COL, "John").unwrap();
        sheet.write_string(row, LAST_NAME_COL, "Doe").unwrap();
        sheet.write_number(row, AGE_COL, 30.0).unwrap();
        sheet.write_string(row, BIC_COL, "some-bic").unwrap();
        sheet.write_string(row, ACCOUNT_HOLDER_COL, "Some Holder").unwrap();
    });

    let err = RosterReader::new(&path).read().unwrap_err();
    assert_eq!(err.row(), Some(4));
    assert_eq!(missing_bank_fields(&err), vec!["IBAN"]);
}

#[test]
fn test_valid_company_missing_account_holder() {
    let dir = TempDir::new().unwrap();
    let path = save_workbook(&dir, "bank.xlsx", |sheet| {
        write_headers(sheet);
        write_contact(sheet, HEADER_ROWS, 1.0, "jane@example.com", "0987654321", "456 Elm St");
        sheet.write_string(HEADER_ROWS, COMPANY_NAME_COL, "Company Inc").unwrap();
        sheet.write_string(HEADER_ROWS, COMPANY_TYPE_COL, "SARS").unwrap();
        sheet.write_string(HEADER_ROWS, IBAN_COL, "some-iban").unwrap();
        sheet.write_string(HEADER_ROWS, BIC_COL, "some-bic").unwrap();
    });

    let err = RosterReader::new(&path).read().unwrap_err();
    assert_eq!(err.row(), Some(3));
    assert_eq!(missing_bank_fields(&err), vec!["account holder"]);
}

#[test]
fn test_invalid_company_type_names_row() {
    let dir = TempDir::new().unwrap();
    let path = save_workbook(&dir, "company.xlsx", |sheet| {
        write_headers(sheet);
        write_company(sheet, HEADER_ROWS, 1.0, "Good Inc", "SA");
        write_company(sheet, HEADER_ROWS + 1, 2.0, "Bad Inc", "Sa");
    });

    let err = RosterReader::new(&path).read().unwrap_err();
    match err.inner() {
        RosterError::InvalidCompanyType { row, value } => {
            assert_eq!(*row, 4);
            assert_eq!(value, "Sa");
        }
        other => panic!("Expected InvalidCompanyType, got {:?}", other),
    }
    assert!(err.to_string().starts_with("Error processing row: 4 - "));
}

#[test]
fn test_not_a_workbook() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fake.xlsx");
    std::fs::write(&path, "id,name\n1,John\n").unwrap();

    let err = RosterReader::new(&path).read().unwrap_err();
    assert!(matches!(err, RosterError::FileReadFailed { .. }));
    assert!(err.to_string().starts_with("Error reading Excel file"));
}
