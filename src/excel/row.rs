use crate::error::RosterResult;
use crate::excel::coerce::{coerce_integer, coerce_text};
use calamine::{Data, Range};

/// One sheet row addressed by absolute (0-based) row and column indices.
///
/// calamine trims leading empty rows and columns from a worksheet range, so
/// cells are looked up by absolute position rather than by slice offset.
#[derive(Debug, Clone, Copy)]
pub struct SheetRow<'a> {
    range: &'a Range<Data>,
    index: u32,
}

impl<'a> SheetRow<'a> {
    pub fn new(range: &'a Range<Data>, index: u32) -> Self {
        Self { range, index }
    }

    /// 0-based sheet row index
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Whether the row lies inside the decoded range at all
    pub fn exists(&self) -> bool {
        match (self.range.start(), self.range.end()) {
            (Some((first, _)), Some((last, _))) => (first..=last).contains(&self.index),
            _ => false,
        }
    }

    /// Raw cell at `column`, `None` when outside the decoded range
    pub fn cell(&self, column: u32) -> Option<&'a Data> {
        self.range.get_value((self.index, column))
    }

    pub fn text(&self, column: u32) -> RosterResult<Option<String>> {
        coerce_text(self.cell(column), self.index, column)
    }

    pub fn integer(&self, column: u32) -> RosterResult<Option<i64>> {
        coerce_integer(self.cell(column), self.index, column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_addressing_with_offset_range() {
        let mut range = Range::new((3, 2), (4, 5));
        range.set_value((3, 2), Data::String("a@b.c".to_string()));
        range.set_value((4, 5), Data::Float(12.0));

        let row = SheetRow::new(&range, 3);
        assert!(row.exists());
        assert_eq!(row.text(2).unwrap(), Some("a@b.c".to_string()));
        // Inside the range but never written
        assert_eq!(row.text(4).unwrap(), None);
        // Left of the range
        assert_eq!(row.cell(0), None);

        assert_eq!(SheetRow::new(&range, 4).integer(5).unwrap(), Some(12));
    }

    #[test]
    fn test_rows_outside_range_do_not_exist() {
        let range = Range::new((3, 0), (4, 3));
        assert!(!SheetRow::new(&range, 2).exists());
        assert!(!SheetRow::new(&range, 5).exists());

        let empty: Range<Data> = Range::empty();
        assert!(!SheetRow::new(&empty, 0).exists());
    }
}
