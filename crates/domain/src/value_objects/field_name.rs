//! Submitted field names
//!
//! Each entry renders two controls named `<category>_<index>` (technology
//! name) and `<category>_<index>_num` (duration in months). The receiving
//! backend reads them back as parallel arrays keyed by index.

use std::fmt;
use std::str::FromStr;

use super::Category;
use crate::error::DomainError;

const DURATION_SUFFIX: &str = "_num";

/// Which of the two controls of an entry a name refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Free-text technology name
    Name,
    /// Numeric duration in months
    Duration,
}

/// Name of one control in a Field Group entry
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldName {
    pub category: Category,
    pub index: usize,
    pub kind: FieldKind,
}

impl FieldName {
    pub fn name(category: Category, index: usize) -> Self {
        Self {
            category,
            index,
            kind: FieldKind::Name,
        }
    }

    pub fn duration(category: Category, index: usize) -> Self {
        Self {
            category,
            index,
            kind: FieldKind::Duration,
        }
    }

    /// Parse a submitted field name like `language_2` or `language_2_num`.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let (stem, kind) = match input.strip_suffix(DURATION_SUFFIX) {
            Some(stem) => (stem, FieldKind::Duration),
            None => (input, FieldKind::Name),
        };

        let (category, index) = stem.split_once('_').ok_or_else(|| {
            DomainError::parse(format!("Missing '_' separator in field name '{}'", input))
        })?;

        let category = Category::new(category)
            .map_err(|e| DomainError::parse(format!("Invalid field name '{}': {}", input, e)))?;

        let padded = index.len() > 1 && index.starts_with('0');
        if index.is_empty() || padded || !index.chars().all(|c| c.is_ascii_digit()) {
            return Err(DomainError::parse(format!(
                "Invalid index '{}' in field name '{}'",
                index, input
            )));
        }
        let index: usize = index.parse().map_err(|_| {
            DomainError::parse(format!("Index out of range in field name '{}'", input))
        })?;

        Ok(Self {
            category,
            index,
            kind,
        })
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            FieldKind::Name => write!(f, "{}_{}", self.category, self.index),
            FieldKind::Duration => {
                write!(f, "{}_{}{}", self.category, self.index, DURATION_SUFFIX)
            }
        }
    }
}

impl FromStr for FieldName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
