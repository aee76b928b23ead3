//! HTML rendering for detected tables.

use crate::model::{TableCell, TableRegion};

/// Render a table as a single-line HTML string.
///
/// Rows are taken in index order and the cells of each row sorted by column
/// index, so identical input always yields identical output. Header cells
/// become `<th>`, everything else `<td>`. `colSpan`/`rowSpan` attributes are
/// only written for spans greater than one.
///
/// ```
/// use unlayout::model::{TableCell, TableRegion};
/// use unlayout::render::table_to_html;
///
/// let table = TableRegion::new(1, 1).with_cell(TableCell::data(0, 0, "X"));
/// assert_eq!(table_to_html(&table), "<table><tr><td>X</td></tr></table>");
/// ```
pub fn table_to_html(table: &TableRegion) -> String {
    let mut output = String::from("<table>");
    for row in table.rows() {
        output.push_str("<tr>");
        for cell in row {
            render_cell(&mut output, cell);
        }
        output.push_str("</tr>");
    }
    output.push_str("</table>");
    output
}

fn render_cell(output: &mut String, cell: &TableCell) {
    let tag = if cell.is_header() { "th" } else { "td" };

    output.push('<');
    output.push_str(tag);
    if cell.column_span > 1 {
        output.push_str(&format!(" colSpan={}", cell.column_span));
    }
    if cell.row_span > 1 {
        output.push_str(&format!(" rowSpan={}", cell.row_span));
    }
    output.push('>');
    output.push_str(&escape_html(&cell.content));
    output.push_str("</");
    output.push_str(tag);
    output.push('>');
}

/// Escape text for use as HTML element content or a quoted attribute.
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}
