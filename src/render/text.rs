//! Plain text rendering for detected tables.

use crate::model::TableRegion;

/// Render a table as tab-separated rows.
///
/// Uses the same row and column ordering as [`super::table_to_html`] but no
/// markup and no escaping.
pub fn table_to_text(table: &TableRegion) -> String {
    table
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| cell.content.replace('\n', " "))
                .collect::<Vec<_>>()
                .join("\t")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TableCell;

    #[test]
    fn test_table_to_text() {
        let table = TableRegion::new(2, 2)
            .with_cell(TableCell::header(0, 1, "Age"))
            .with_cell(TableCell::header(0, 0, "Name"))
            .with_cell(TableCell::data(1, 0, "Bob"))
            .with_cell(TableCell::data(1, 1, "2\n5"));

        assert_eq!(table_to_text(&table), "Name\tAge\nBob\t2 5");
    }

    #[test]
    fn test_no_escaping() {
        let table = TableRegion::new(1, 1).with_cell(TableCell::data(0, 0, "<b>&"));
        assert_eq!(table_to_text(&table), "<b>&");
    }
}
