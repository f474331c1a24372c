//! Dynamic field list widget
//!
//! Appends entries to, and removes the last entry from, a category's
//! container. The live container is always the source of truth: the next
//! index is read from its child count at the moment of the click, so entries
//! rendered server-side are counted too and nothing is ever renumbered.

use std::collections::HashMap;
use std::rc::Rc;

use skillsheet_domain::{Category, EmptyGroupPolicy, FieldGroupState, VisibilityChange};

use crate::config::WidgetConfig;
use crate::error::WidgetError;
use crate::markup::EntryTemplate;
use crate::ports::outbound::DocumentPort;

#[derive(Clone)]
pub struct FieldListWidget<D> {
    document: D,
    policy: EmptyGroupPolicy,
    template: Rc<EntryTemplate>,
    /// Container overrides from the page config
    containers: Rc<HashMap<Category, String>>,
}

impl<D: DocumentPort> FieldListWidget<D> {
    /// Widget using the conventional `<category>-fields` containers.
    pub fn new(document: D, policy: EmptyGroupPolicy, template: EntryTemplate) -> Self {
        Self {
            document,
            policy,
            template: Rc::new(template),
            containers: Rc::new(HashMap::new()),
        }
    }

    /// Widget honouring the container ids, policy and template of `config`.
    pub fn from_config(document: D, config: &WidgetConfig) -> Self {
        let containers = config
            .categories
            .iter()
            .map(|binding| (binding.category.clone(), binding.container_id()))
            .collect();

        Self {
            document,
            policy: config.empty_group,
            template: Rc::new(config.template.clone()),
            containers: Rc::new(containers),
        }
    }

    pub fn container_id(&self, category: &Category) -> String {
        self.containers
            .get(category)
            .cloned()
            .unwrap_or_else(|| category.container_id())
    }

    /// Append one entry and return the index it was given.
    pub fn append(&self, category: &Category) -> Result<usize, WidgetError> {
        let container = self.existing_container(category)?;
        let state = FieldGroupState::observe(self.document.child_count(&container)?, self.policy);

        let transition = state.append();
        let html = self.template.render(category, transition.index);
        self.document.append_html(&container, &html)?;
        self.apply_visibility(&container, transition.visibility)?;

        tracing::debug!(
            category = %category,
            index = transition.index,
            "Appended field entry"
        );
        Ok(transition.index)
    }

    /// Remove the last entry and return its index.
    ///
    /// Returns `Ok(None)` without touching the page when the group is empty.
    pub fn remove(&self, category: &Category) -> Result<Option<usize>, WidgetError> {
        let container = self.existing_container(category)?;
        let state = FieldGroupState::observe(self.document.child_count(&container)?, self.policy);

        let Some(transition) = state.remove() else {
            tracing::debug!(category = %category, "Remove on empty field group ignored");
            return Ok(None);
        };

        if !self.document.remove_last_child(&container)? {
            return Ok(None);
        }
        self.apply_visibility(&container, transition.visibility)?;

        tracing::debug!(
            category = %category,
            index = transition.index,
            "Removed field entry"
        );
        Ok(Some(transition.index))
    }

    /// Force the container's visibility to match its current entry count.
    pub fn sync_visibility(&self, category: &Category) -> Result<(), WidgetError> {
        let container = self.existing_container(category)?;
        let state = FieldGroupState::observe(self.document.child_count(&container)?, self.policy);
        self.apply_visibility(&container, state.initial_visibility())
    }

    fn existing_container(&self, category: &Category) -> Result<String, WidgetError> {
        let container = self.container_id(category);
        if !self.document.has_element(&container) {
            return Err(WidgetError::missing_container(category, container));
        }
        Ok(container)
    }

    fn apply_visibility(
        &self,
        container: &str,
        change: Option<VisibilityChange>,
    ) -> Result<(), WidgetError> {
        match change {
            Some(VisibilityChange::Show) => self.document.set_hidden(container, false),
            Some(VisibilityChange::Hide) => self.document.set_hidden(container, true),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::testing::MemoryPage;
    use crate::ports::outbound::MockDocumentPort;

    fn category(name: &str) -> Category {
        Category::new(name).unwrap()
    }

    fn widget(page: &MemoryPage, policy: EmptyGroupPolicy) -> FieldListWidget<MemoryPage> {
        FieldListWidget::new(page.clone(), policy, EntryTemplate::default())
    }

    #[test]
    fn test_appends_are_indexed_in_order() {
        let page = MemoryPage::new();
        page.add_container("language-fields");
        let widget = widget(&page, EmptyGroupPolicy::KeepVisible);
        let language = category("language");

        for expected in 0..4 {
            assert_eq!(widget.append(&language).unwrap(), expected);
        }

        assert_eq!(
            page.entry_names("language-fields"),
            vec![
                ("language_0".to_string(), "language_0_num".to_string()),
                ("language_1".to_string(), "language_1_num".to_string()),
                ("language_2".to_string(), "language_2_num".to_string()),
                ("language_3".to_string(), "language_3_num".to_string()),
            ]
        );
    }

    #[test]
    fn test_append_leaves_existing_entries_untouched() {
        let page = MemoryPage::new();
        page.add_container("os-fields");
        let widget = widget(&page, EmptyGroupPolicy::KeepVisible);
        let os = category("os");

        widget.append(&os).unwrap();
        let first = page.children("os-fields");
        widget.append(&os).unwrap();
        widget.append(&os).unwrap();

        let after = page.children("os-fields");
        assert_eq!(after.len(), 3);
        assert_eq!(after[0], first[0]);
    }

    #[test]
    fn test_append_counts_server_rendered_entries() {
        let page = MemoryPage::new();
        page.add_container("tools-fields");
        page.append_raw("tools-fields", "<div class=\"input-group\"><input name=\"tools_0\"><input name=\"tools_0_num\"></div>");
        page.append_raw("tools-fields", "<div class=\"input-group\"><input name=\"tools_1\"><input name=\"tools_1_num\"></div>");

        let index = widget(&page, EmptyGroupPolicy::KeepVisible)
            .append(&category("tools"))
            .unwrap();
        assert_eq!(index, 2);
        assert_eq!(page.entry_names("tools-fields")[2].0, "tools_2");
    }

    #[test]
    fn test_remove_drops_last_entry_only() {
        let page = MemoryPage::new();
        page.add_container("framework-fields");
        let widget = widget(&page, EmptyGroupPolicy::KeepVisible);
        let framework = category("framework");

        for _ in 0..3 {
            widget.append(&framework).unwrap();
        }
        assert_eq!(widget.remove(&framework).unwrap(), Some(2));

        let names: Vec<String> = page
            .entry_names("framework-fields")
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, vec!["framework_0", "framework_1"]);
    }

    #[test]
    fn test_remove_on_empty_group_does_nothing() {
        let page = MemoryPage::new();
        page.add_container("cicd-fields");
        let widget = widget(&page, EmptyGroupPolicy::Hide);

        assert_eq!(widget.remove(&category("cicd")).unwrap(), None);
        assert_eq!(page.mutation_count(), 0);
        assert!(page.children("cicd-fields").is_empty());
    }

    #[test]
    fn test_database_scenario() {
        let page = MemoryPage::new();
        page.add_container("database-fields");
        let widget = widget(&page, EmptyGroupPolicy::KeepVisible);
        let database = category("database");

        widget.append(&database).unwrap();
        widget.append(&database).unwrap();
        assert_eq!(
            page.entry_names("database-fields"),
            vec![
                ("database_0".to_string(), "database_0_num".to_string()),
                ("database_1".to_string(), "database_1_num".to_string()),
            ]
        );

        widget.remove(&database).unwrap();
        assert_eq!(
            page.entry_names("database-fields"),
            vec![("database_0".to_string(), "database_0_num".to_string())]
        );
    }

    #[test]
    fn test_hide_policy_toggles_container() {
        let page = MemoryPage::new();
        page.add_container("logging-fields");
        let widget = widget(&page, EmptyGroupPolicy::Hide);
        let logging = category("logging");

        widget.sync_visibility(&logging).unwrap();
        assert!(page.is_hidden("logging-fields"));

        widget.append(&logging).unwrap();
        assert!(!page.is_hidden("logging-fields"));

        widget.remove(&logging).unwrap();
        assert!(page.is_hidden("logging-fields"));
    }

    #[test]
    fn test_keep_visible_policy_never_hides() {
        let page = MemoryPage::new();
        page.add_container("logging-fields");
        let widget = widget(&page, EmptyGroupPolicy::KeepVisible);
        let logging = category("logging");

        widget.sync_visibility(&logging).unwrap();
        widget.append(&logging).unwrap();
        widget.remove(&logging).unwrap();
        assert!(!page.is_hidden("logging-fields"));
    }

    #[test]
    fn test_missing_container_is_an_error() {
        let mut document = MockDocumentPort::new();
        document
            .expect_has_element()
            .withf(|id: &str| id == "os-fields")
            .return_const(false);
        document.expect_append_html().never();
        document.expect_remove_last_child().never();

        let widget = FieldListWidget::new(document, EmptyGroupPolicy::KeepVisible, EntryTemplate::default());
        let os = category("os");

        assert_eq!(
            widget.append(&os),
            Err(WidgetError::missing_container(&os, "os-fields"))
        );
        assert!(matches!(
            widget.remove(&os),
            Err(WidgetError::MissingContainer { .. })
        ));
    }

    #[test]
    fn test_host_failure_propagates() {
        let mut document = MockDocumentPort::new();
        document.expect_has_element().return_const(true);
        document.expect_child_count().returning(|_| Ok(0));
        document
            .expect_append_html()
            .returning(|_, _| Err(WidgetError::host("SyntaxError")));

        let widget = FieldListWidget::new(document, EmptyGroupPolicy::KeepVisible, EntryTemplate::default());
        assert_eq!(
            widget.append(&category("os")),
            Err(WidgetError::host("SyntaxError"))
        );
    }

    #[test]
    fn test_container_override_from_config() {
        let config = WidgetConfig::from_json(
            r#"{"categories": [{"category": "os", "container": "os-list"}]}"#,
        )
        .unwrap();
        let page = MemoryPage::new();
        page.add_container("os-list");

        let widget = FieldListWidget::from_config(page.clone(), &config);
        widget.append(&category("os")).unwrap();
        assert_eq!(page.entry_names("os-list").len(), 1);
        assert_eq!(widget.container_id(&category("tools")), "tools-fields");
    }
}
