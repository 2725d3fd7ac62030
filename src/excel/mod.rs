//! Excel access for roster workbooks
//!
//! - Coercion: calamine cells → text / integer / boolean field values
//! - Rows: absolute addressing over a decoded worksheet
//! - Reader: first worksheet → ordered employee records

mod coerce;
mod reader;
mod row;

pub use coerce::{
    coerce, coerce_boolean, coerce_integer, coerce_text, CellKind, CellValue, TargetType,
};
pub use reader::{read_roster, RosterReader};
pub use row::SheetRow;
