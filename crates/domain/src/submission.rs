//! Reading Field Group entries back out of a submitted form
//!
//! The receiving side walks `<c>_0`, `<c>_1`, ... until the first missing
//! index, pairing each name with its `<c>_<i>_num` duration. Entries with a
//! blank name or a duration that is not a positive whole number are dropped.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::{Category, FieldName};

/// One technology row as submitted by the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnologyEntry {
    pub name: String,
    pub duration_months: u32,
}

/// Collect the entries of `category` from submitted form pairs, in index order.
pub fn collect_entries(category: &Category, form: &HashMap<String, String>) -> Vec<TechnologyEntry> {
    let mut entries = Vec::new();

    for index in 0.. {
        let name_key = FieldName::name(category.clone(), index).to_string();
        let Some(name) = form.get(&name_key) else {
            break;
        };
        let duration_key = FieldName::duration(category.clone(), index).to_string();
        let duration = form.get(&duration_key).map(String::as_str).unwrap_or("0");

        // Names are kept as submitted; whitespace only decides blankness
        match parse_duration(duration) {
            Some(duration_months) if !name.trim().is_empty() => entries.push(TechnologyEntry {
                name: name.clone(),
                duration_months,
            }),
            _ => {}
        }
    }

    entries
}

/// Reject a category that lists the same technology twice.
pub fn ensure_unique_names(category: &Category, entries: &[TechnologyEntry]) -> Result<(), DomainError> {
    let mut seen = HashSet::new();
    for entry in entries {
        if !seen.insert(entry.name.as_str()) {
            return Err(DomainError::validation(format!(
                "Duplicate technology '{}' in category '{}'",
                entry.name, category
            )));
        }
    }
    Ok(())
}

/// Positive whole number of months; anything else is treated as absent.
///
/// Values past `u32::MAX` months are not a plausible career and are dropped
/// like any other unparseable duration.
fn parse_duration(raw: &str) -> Option<u32> {
    if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    raw.parse::<u32>().ok().filter(|months| *months > 0)
}
