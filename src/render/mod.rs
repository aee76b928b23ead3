//! Rendering of tables into page text and of pages into output formats.

mod format;
mod html;
mod json;
mod result;
mod text;

pub use format::TableFormat;
pub use html::{escape_html, table_to_html};
pub use json::{page_to_line, to_json, JsonFormat};
pub use result::LayoutStats;
pub use text::table_to_text;
