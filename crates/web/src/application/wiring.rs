//! Page initialization
//!
//! Attaches the widgets to a page from the category table in
//! [`WidgetConfig`]. Every element the config names is checked, and every
//! container's visibility is synced, before any handler is attached, so a
//! page with a broken template fails without any handler in place. Once
//! attaching starts, only the host refusing a listener can still fail.

use skillsheet_domain::Category;

use crate::application::{ConfirmGuard, FieldListWidget};
use crate::config::WidgetConfig;
use crate::error::WidgetError;
use crate::ports::outbound::{DialogPort, DocumentPort, EventPort};

/// A category whose triggers were attached, with its display label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WiredCategory {
    pub category: Category,
    pub label: String,
}

/// What [`initialize`] attached to the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wiring {
    pub categories: Vec<WiredCategory>,
    pub remove_triggers: usize,
    pub confirm_form: Option<String>,
}

pub fn initialize<P>(page: &P, config: &WidgetConfig) -> Result<Wiring, WidgetError>
where
    P: DocumentPort + DialogPort + EventPort + Clone + 'static,
{
    config.validate()?;
    verify_elements(page, config)?;

    let widget = FieldListWidget::from_config(page.clone(), config);
    let mut remove_triggers = 0;

    for binding in &config.categories {
        widget.sync_visibility(&binding.category)?;
    }

    for binding in &config.categories {
        let append_widget = widget.clone();
        let category = binding.category.clone();
        let label = binding.label().to_string();
        page.on_click(
            &binding.add_trigger_id(),
            Box::new(move || {
                if let Err(e) = append_widget.append(&category) {
                    tracing::error!(
                        category = %category,
                        label = %label,
                        "Failed to append field entry: {}",
                        e
                    );
                }
            }),
        )?;

        if let Some(remove_trigger) = &binding.remove_trigger {
            let remove_widget = widget.clone();
            let category = binding.category.clone();
            let label = binding.label().to_string();
            page.on_click(
                remove_trigger,
                Box::new(move || {
                    if let Err(e) = remove_widget.remove(&category) {
                        tracing::error!(
                            category = %category,
                            label = %label,
                            "Failed to remove field entry: {}",
                            e
                        );
                    }
                }),
            )?;
            remove_triggers += 1;
        }
    }

    let confirm_form = match &config.confirm {
        Some(confirm) => {
            let guard = ConfirmGuard::new(page.clone(), confirm.message.clone());
            page.on_submit(&confirm.form, Box::new(move || guard.check()))?;
            Some(confirm.form.clone())
        }
        None => None,
    };

    let wiring = Wiring {
        categories: config
            .categories
            .iter()
            .map(|binding| WiredCategory {
                category: binding.category.clone(),
                label: binding.label().to_string(),
            })
            .collect(),
        remove_triggers,
        confirm_form,
    };

    tracing::info!(
        categories = wiring.categories.len(),
        remove_triggers = wiring.remove_triggers,
        confirm_form = ?wiring.confirm_form,
        "Field widgets initialized"
    );
    Ok(wiring)
}

fn verify_elements<P: DocumentPort>(page: &P, config: &WidgetConfig) -> Result<(), WidgetError> {
    for binding in &config.categories {
        let container = binding.container_id();
        if !page.has_element(&container) {
            return Err(WidgetError::missing_container(&binding.category, container));
        }

        let triggers = std::iter::once(binding.add_trigger_id()).chain(binding.remove_trigger.clone());
        for trigger in triggers {
            if !page.has_element(&trigger) {
                return Err(WidgetError::missing_element(trigger));
            }
        }
    }

    if let Some(confirm) = &config.confirm {
        if !page.has_element(&confirm.form) {
            return Err(WidgetError::missing_element(confirm.form.clone()));
        }
    }

    Ok(())
}
