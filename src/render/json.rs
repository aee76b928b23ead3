//! JSON output for reconstructed pages.

use crate::error::{Error, Result};
use crate::model::Page;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed array with indentation
    #[default]
    Pretty,
    /// Compact array without extra whitespace
    Compact,
    /// One compact object per line (JSON Lines)
    Lines,
}

/// Serialize pages to JSON.
pub fn to_json(pages: &[Page], format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(pages),
        JsonFormat::Compact => serde_json::to_string(pages),
        JsonFormat::Lines => {
            let mut output = String::new();
            for page in pages {
                output.push_str(&page_to_line(page)?);
                output.push('\n');
            }
            return Ok(output);
        }
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

/// Serialize one page as a single JSON line (no trailing newline).
pub fn page_to_line(page: &Page) -> Result<String> {
    serde_json::to_string(page)
        .map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages() -> Vec<Page> {
        vec![Page::new(0, 0, "Hello"), Page::new(1, 5, "<table></table>")]
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&pages(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"page_number\": 1"));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&pages(), JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));
        let decoded: Vec<Page> = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, pages());
    }

    #[test]
    fn test_to_json_lines() {
        let json = to_json(&pages(), JsonFormat::Lines).unwrap();
        let lines: Vec<&str> = json.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], r#"{"page_number":0,"offset":0,"text":"Hello"}"#);
    }
}
