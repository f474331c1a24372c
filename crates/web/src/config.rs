//! Page configuration for the widgets
//!
//! A page may embed its configuration as JSON:
//!
//! ```html
//! <script type="application/json" id="field-widget-config">
//!   {"categories": [{"category": "os"}, {"category": "language", "remove_trigger": "remove-language"}],
//!    "confirm": null,
//!    "empty_group": "hide"}
//! </script>
//! ```
//!
//! Missing fields take their defaults. Without a config element the page gets
//! [`WidgetConfig::default`]: all eight skill sheet categories with add
//! triggers, and the confirmation prompt on `invalidate-link-form`.
//! `"confirm": null` turns the prompt off.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use skillsheet_domain::{Category, EmptyGroupPolicy};

use crate::error::WidgetError;
use crate::markup::EntryTemplate;

/// Id of the `<script type="application/json">` element holding the config
pub const CONFIG_ELEMENT_ID: &str = "field-widget-config";

pub const DEFAULT_CONFIRM_FORM: &str = "invalidate-link-form";
pub const DEFAULT_CONFIRM_MESSAGE: &str = "本当に全てのリンクを無効化しますか？";

/// Where one category's container and triggers live on the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBinding {
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Container id, `<category>-fields` when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container: Option<String>,
    /// Append trigger id, `add-<category>` when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add_trigger: Option<String>,
    /// Remove trigger id; no remove control is wired when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remove_trigger: Option<String>,
}

impl CategoryBinding {
    /// Binding that follows the id conventions, without a remove trigger.
    pub fn conventional(category: Category) -> Self {
        Self {
            category,
            label: None,
            container: None,
            add_trigger: None,
            remove_trigger: None,
        }
    }

    /// Also wire `remove-<category>` to remove the last entry.
    pub fn with_remove_trigger(mut self) -> Self {
        self.remove_trigger = Some(self.category.remove_trigger_id());
        self
    }

    pub fn container_id(&self) -> String {
        self.container
            .clone()
            .unwrap_or_else(|| self.category.container_id())
    }

    pub fn add_trigger_id(&self) -> String {
        self.add_trigger
            .clone()
            .unwrap_or_else(|| self.category.add_trigger_id())
    }

    pub fn label(&self) -> &str {
        self.label
            .as_deref()
            .or_else(|| self.category.default_label())
            .unwrap_or_else(|| self.category.as_str())
    }
}

/// Form that must be confirmed before it submits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfirmBinding {
    pub form: String,
    pub message: String,
}

impl Default for ConfirmBinding {
    fn default() -> Self {
        Self {
            form: DEFAULT_CONFIRM_FORM.to_string(),
            message: DEFAULT_CONFIRM_MESSAGE.to_string(),
        }
    }
}

/// Complete widget configuration for one page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub categories: Vec<CategoryBinding>,
    pub confirm: Option<ConfirmBinding>,
    pub empty_group: EmptyGroupPolicy,
    pub template: EntryTemplate,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            categories: Category::defaults()
                .into_iter()
                .map(CategoryBinding::conventional)
                .collect(),
            confirm: Some(ConfirmBinding::default()),
            empty_group: EmptyGroupPolicy::default(),
            template: EntryTemplate::default(),
        }
    }
}

impl WidgetConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, WidgetError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Each category may be bound once, and no element id may be shared
    /// between two roles.
    pub fn validate(&self) -> Result<(), WidgetError> {
        let mut categories = HashSet::new();
        let mut ids = HashSet::new();

        for binding in &self.categories {
            if !categories.insert(binding.category.as_str()) {
                return Err(WidgetError::config(format!(
                    "category '{}' is bound more than once",
                    binding.category
                )));
            }

            let mut owned = vec![binding.container_id(), binding.add_trigger_id()];
            owned.extend(binding.remove_trigger.clone());
            for id in owned {
                if id.trim().is_empty() {
                    return Err(WidgetError::config(format!(
                        "empty element id in binding for '{}'",
                        binding.category
                    )));
                }
                if !ids.insert(id.clone()) {
                    return Err(WidgetError::config(format!(
                        "element id '{}' is used more than once",
                        id
                    )));
                }
            }
        }

        if let Some(confirm) = &self.confirm {
            if confirm.form.trim().is_empty() {
                return Err(WidgetError::config("confirm form id is empty"));
            }
            if ids.contains(&confirm.form) {
                return Err(WidgetError::config(format!(
                    "element id '{}' is used more than once",
                    confirm.form
                )));
            }
        }

        Ok(())
    }
}
