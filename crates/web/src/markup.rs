//! Entry markup
//!
//! Renders the fragment appended for one Field Group entry. Only the
//! fragment for the new entry is ever produced; existing entries are never
//! re-rendered, so anything the user already typed stays in place.

use serde::{Deserialize, Serialize};

use skillsheet_domain::{Category, FieldName};

/// Text shown around the two inputs of an entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntryTemplate {
    pub name_placeholder: String,
    pub duration_placeholder: String,
    pub unit_label: String,
}

impl Default for EntryTemplate {
    fn default() -> Self {
        Self {
            name_placeholder: "技術名".to_string(),
            duration_placeholder: "期間".to_string(),
            unit_label: "ヶ月".to_string(),
        }
    }
}

impl EntryTemplate {
    /// Markup for entry `index` of `category`.
    pub fn render(&self, category: &Category, index: usize) -> String {
        let name = FieldName::name(category.clone(), index);
        let duration = FieldName::duration(category.clone(), index);

        format!(
            concat!(
                "<div class=\"input-group\">",
                "<input class=\"input input-name\" type=\"text\" name=\"{name}\" placeholder=\"{name_placeholder}\">",
                "<input class=\"input input-duration\" type=\"number\" name=\"{duration}\" placeholder=\"{duration_placeholder}\">",
                "<span>{unit}</span>",
                "</div>"
            ),
            name = name,
            duration = duration,
            name_placeholder = escape_html_attribute(&self.name_placeholder),
            duration_placeholder = escape_html_attribute(&self.duration_placeholder),
            unit = escape_html_attribute(&self.unit_label),
        )
    }
}

/// Escape a string for insertion into an attribute value or text node.
pub fn escape_html_attribute(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            '\'' => output.push_str("&#x27;"),
            _ => output.push(ch),
        }
    }
    output
}
