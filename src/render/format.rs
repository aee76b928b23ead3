//! Table output format selection.

use crate::model::TableRegion;

use super::{table_to_html, table_to_text};

/// How tables are flattened into page text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableFormat {
    /// Inline HTML `<table>` markup
    #[default]
    Html,
    /// Tab-separated rows without markup
    Text,
}

impl TableFormat {
    /// Render a table in this format.
    pub fn render(self, table: &TableRegion) -> String {
        match self {
            TableFormat::Html => table_to_html(table),
            TableFormat::Text => table_to_text(table),
        }
    }

    /// Parse a format name ("html" or "text").
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.trim().to_ascii_lowercase().as_str() {
            "html" => Ok(TableFormat::Html),
            "text" | "txt" | "plain" => Ok(TableFormat::Text),
            other => Err(format!("Unknown table format: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TableCell;

    #[test]
    fn test_default_is_html() {
        assert_eq!(TableFormat::default(), TableFormat::Html);
    }

    #[test]
    fn test_render_dispatch() {
        let table = TableRegion::new(1, 2)
            .with_cell(TableCell::data(0, 0, "a"))
            .with_cell(TableCell::data(0, 1, "b"));

        assert_eq!(
            TableFormat::Html.render(&table),
            "<table><tr><td>a</td><td>b</td></tr></table>"
        );
        assert_eq!(TableFormat::Text.render(&table), "a\tb");
    }

    #[test]
    fn test_parse() {
        assert_eq!(TableFormat::parse("HTML").unwrap(), TableFormat::Html);
        assert_eq!(TableFormat::parse(" text ").unwrap(), TableFormat::Text);
        assert!(TableFormat::parse("markdown").is_err());
    }
}
