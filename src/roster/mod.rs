//! Row-level roster logic: bank account extraction, employee
//! classification and the row processor that combines them.

pub mod bank_account;
pub mod classifier;
pub mod processor;

pub use bank_account::extract_bank_account;
pub use classifier::{classify, BaseFields};
pub use processor::process_row;
