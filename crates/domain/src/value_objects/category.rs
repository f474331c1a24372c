//! Technology category names
//!
//! A category identifies one Field Group on the page. Its name is embedded
//! verbatim in element ids (`<c>-fields`, `add-<c>`) and in submitted field
//! names (`<c>_<i>`), so only ASCII lowercase letters and digits are allowed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Maximum length for a category name
const MAX_CATEGORY_LENGTH: usize = 64;

/// Categories rendered on the skill sheet, with their display labels.
const DEFAULT_CATEGORIES: [(&str, &str); 8] = [
    ("os", "OS"),
    ("language", "言語"),
    ("framework", "フレームワーク"),
    ("database", "データベース"),
    ("containertech", "コンテナ技術"),
    ("cicd", "CI/CD"),
    ("logging", "ログ"),
    ("tools", "その他ツール"),
];

/// A validated category name (non-empty, `[a-z0-9]+`, <=64 chars)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Category(String);

impl Category {
    /// Create a new validated category.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The name is empty after trimming
    /// - The name exceeds 64 characters
    /// - The name contains anything other than ASCII lowercase letters and digits
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Category name cannot be empty"));
        }
        if trimmed.len() > MAX_CATEGORY_LENGTH {
            return Err(DomainError::validation(format!(
                "Category name cannot exceed {} characters",
                MAX_CATEGORY_LENGTH
            )));
        }
        if let Some(bad) = trimmed
            .chars()
            .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit()))
        {
            return Err(DomainError::validation(format!(
                "Category '{}' contains invalid character '{}'",
                trimmed, bad
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Id of the container element holding this category's entries.
    pub fn container_id(&self) -> String {
        format!("{}-fields", self.0)
    }

    /// Id of the control that appends an entry.
    pub fn add_trigger_id(&self) -> String {
        format!("add-{}", self.0)
    }

    /// Id of the control that removes the last entry.
    pub fn remove_trigger_id(&self) -> String {
        format!("remove-{}", self.0)
    }

    /// Display label from the default table, if this is a known category.
    pub fn default_label(&self) -> Option<&'static str> {
        DEFAULT_CATEGORIES
            .iter()
            .find(|(name, _)| *name == self.0)
            .map(|(_, label)| *label)
    }

    /// The eight categories of the skill sheet, in display order.
    pub fn defaults() -> Vec<Category> {
        DEFAULT_CATEGORIES
            .iter()
            .map(|(name, _)| Category((*name).to_string()))
            .collect()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Category {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> String {
        category.0
    }
}
