//! Widget error types

use thiserror::Error;

use skillsheet_domain::{Category, DomainError};

/// Errors raised while wiring or operating the field widgets
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WidgetError {
    /// The container a category renders into is not on the page
    #[error("Container '{element_id}' for category '{category}' not found")]
    MissingContainer {
        category: Category,
        element_id: String,
    },

    /// A trigger or form the page config refers to is not on the page
    #[error("Element '{element_id}' not found")]
    MissingElement { element_id: String },

    /// The host document rejected an operation
    #[error("Host error: {0}")]
    Host(String),

    /// The page configuration could not be read
    #[error("Invalid widget config: {0}")]
    Config(String),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl WidgetError {
    pub fn missing_container(category: &Category, element_id: impl Into<String>) -> Self {
        Self::MissingContainer {
            category: category.clone(),
            element_id: element_id.into(),
        }
    }

    pub fn missing_element(element_id: impl Into<String>) -> Self {
        Self::MissingElement {
            element_id: element_id.into(),
        }
    }

    pub fn host(msg: impl Into<String>) -> Self {
        Self::Host(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

impl From<serde_json::Error> for WidgetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_container_names_category_and_id() {
        let category = Category::new("logging").unwrap();
        let err = WidgetError::missing_container(&category, "logging-fields");
        assert_eq!(
            err.to_string(),
            "Container 'logging-fields' for category 'logging' not found"
        );
    }

    #[test]
    fn test_domain_error_is_transparent() {
        let err: WidgetError = DomainError::validation("bad").into();
        assert_eq!(err.to_string(), "Validation failed: bad");
    }

    #[test]
    fn test_json_error_becomes_config_error() {
        let err: WidgetError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, WidgetError::Config(_)));
    }
}
