//! In-memory page for tests
//!
//! Implements every page port over a flat map of elements keyed by id. Each
//! container keeps its children as the markup fragments that were appended,
//! so tests can assert on the exact names rendered. Clicks and submits are
//! dispatched synchronously, the way the browser event loop would.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet, VecDeque};
use std::rc::Rc;

use regex_lite::Regex;

use crate::error::WidgetError;
use crate::ports::outbound::{
    ClickHandler, DialogPort, DocumentPort, EventPort, SubmitDecision, SubmitHandler,
};

#[derive(Default)]
struct Element {
    children: Vec<String>,
    hidden: bool,
}

#[derive(Default)]
struct Dom {
    elements: HashMap<String, Element>,
    mutations: usize,
    read_only: HashSet<String>,
    submissions: HashMap<String, usize>,
}

#[derive(Default)]
struct Dialog {
    answers: VecDeque<Result<bool, WidgetError>>,
    prompts: Vec<String>,
}

#[derive(Default)]
struct Inner {
    dom: RefCell<Dom>,
    dialog: RefCell<Dialog>,
    clicks: RefCell<HashMap<String, Vec<ClickHandler>>>,
    submits: RefCell<HashMap<String, Vec<SubmitHandler>>>,
}

/// Page double shared by clone; all clones see the same elements.
#[derive(Clone, Default)]
pub struct MemoryPage {
    inner: Rc<Inner>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an empty, visible element (trigger, form or container).
    pub fn add_element(&self, element_id: &str) {
        self.inner
            .dom
            .borrow_mut()
            .elements
            .insert(element_id.to_string(), Element::default());
    }

    pub fn add_container(&self, element_id: &str) {
        self.add_element(element_id);
    }

    /// Remove an element, e.g. to simulate a template that lost a container.
    pub fn remove_element(&self, element_id: &str) {
        self.inner.dom.borrow_mut().elements.remove(element_id);
    }

    /// Append markup as if rendered by the server. Not counted as a mutation.
    pub fn append_raw(&self, element_id: &str, html: &str) {
        if let Some(element) = self.inner.dom.borrow_mut().elements.get_mut(element_id) {
            element.children.push(html.to_string());
        }
    }

    pub fn children(&self, element_id: &str) -> Vec<String> {
        self.inner
            .dom
            .borrow()
            .elements
            .get(element_id)
            .map(|element| element.children.clone())
            .unwrap_or_default()
    }

    /// `(name, duration)` control names of each entry in a container, in order.
    pub fn entry_names(&self, element_id: &str) -> Vec<(String, String)> {
        let Ok(pattern) = Regex::new(r#"name="([^"]*)""#) else {
            return Vec::new();
        };

        self.children(element_id)
            .iter()
            .map(|fragment| {
                let mut names = pattern
                    .captures_iter(fragment)
                    .filter_map(|captures| captures.get(1))
                    .map(|m| m.as_str().to_string());
                (
                    names.next().unwrap_or_default(),
                    names.next().unwrap_or_default(),
                )
            })
            .collect()
    }

    pub fn is_hidden(&self, element_id: &str) -> bool {
        self.inner
            .dom
            .borrow()
            .elements
            .get(element_id)
            .map(|element| element.hidden)
            .unwrap_or(false)
    }

    /// Make every later mutation of the element fail with a host error.
    pub fn fail_mutations_on(&self, element_id: &str) {
        self.inner
            .dom
            .borrow_mut()
            .read_only
            .insert(element_id.to_string());
    }

    /// Number of document mutations made through [`DocumentPort`].
    pub fn mutation_count(&self) -> usize {
        self.inner.dom.borrow().mutations
    }

    /// Queue the user's answer to the next prompt.
    pub fn answer_next_prompt(&self, answer: bool) {
        self.inner.dialog.borrow_mut().answers.push_back(Ok(answer));
    }

    /// Make the next prompt fail, as a browser blocking dialogs would.
    pub fn fail_next_prompt(&self, msg: &str) {
        self.inner
            .dialog
            .borrow_mut()
            .answers
            .push_back(Err(WidgetError::host(msg)));
    }

    /// Messages of every prompt shown so far.
    pub fn prompts(&self) -> Vec<String> {
        self.inner.dialog.borrow().prompts.clone()
    }

    /// Number of times the form actually submitted.
    pub fn submission_count(&self, form_id: &str) -> usize {
        self.inner
            .dom
            .borrow()
            .submissions
            .get(form_id)
            .copied()
            .unwrap_or(0)
    }

    /// Dispatch a click to every handler registered on the element.
    pub fn click(&self, element_id: &str) {
        let mut handlers = self
            .inner
            .clicks
            .borrow_mut()
            .remove(element_id)
            .unwrap_or_default();

        for handler in handlers.iter_mut() {
            handler();
        }

        let mut clicks = self.inner.clicks.borrow_mut();
        let slot = clicks.entry(element_id.to_string()).or_default();
        handlers.append(slot);
        *slot = handlers;
    }

    /// Attempt to submit the form. Any handler returning `Cancel` stops it.
    pub fn submit(&self, form_id: &str) -> SubmitDecision {
        let mut handlers = self
            .inner
            .submits
            .borrow_mut()
            .remove(form_id)
            .unwrap_or_default();

        let mut decision = SubmitDecision::Proceed;
        for handler in handlers.iter_mut() {
            if handler() == SubmitDecision::Cancel {
                decision = SubmitDecision::Cancel;
            }
        }

        {
            let mut submits = self.inner.submits.borrow_mut();
            let slot = submits.entry(form_id.to_string()).or_default();
            handlers.append(slot);
            *slot = handlers;
        }

        if decision == SubmitDecision::Proceed {
            *self
                .inner
                .dom
                .borrow_mut()
                .submissions
                .entry(form_id.to_string())
                .or_default() += 1;
        }
        decision
    }

    fn with_element<T>(
        &self,
        element_id: &str,
        f: impl FnOnce(&mut Element) -> T,
    ) -> Result<T, WidgetError> {
        let mut dom = self.inner.dom.borrow_mut();
        let element = dom
            .elements
            .get_mut(element_id)
            .ok_or_else(|| WidgetError::missing_element(element_id))?;
        Ok(f(element))
    }

    fn ensure_writable(&self, element_id: &str) -> Result<(), WidgetError> {
        if self.inner.dom.borrow().read_only.contains(element_id) {
            return Err(WidgetError::host(format!("{} rejected the mutation", element_id)));
        }
        Ok(())
    }

    fn record_mutation(&self) {
        self.inner.dom.borrow_mut().mutations += 1;
    }
}

impl DocumentPort for MemoryPage {
    fn has_element(&self, element_id: &str) -> bool {
        self.inner.dom.borrow().elements.contains_key(element_id)
    }

    fn child_count(&self, element_id: &str) -> Result<usize, WidgetError> {
        self.with_element(element_id, |element| element.children.len())
    }

    fn append_html(&self, element_id: &str, html: &str) -> Result<(), WidgetError> {
        self.ensure_writable(element_id)?;
        self.with_element(element_id, |element| element.children.push(html.to_string()))?;
        self.record_mutation();
        Ok(())
    }

    fn remove_last_child(&self, element_id: &str) -> Result<bool, WidgetError> {
        self.ensure_writable(element_id)?;
        let removed = self.with_element(element_id, |element| element.children.pop().is_some())?;
        if removed {
            self.record_mutation();
        }
        Ok(removed)
    }

    fn set_hidden(&self, element_id: &str, hidden: bool) -> Result<(), WidgetError> {
        self.ensure_writable(element_id)?;
        self.with_element(element_id, |element| element.hidden = hidden)?;
        self.record_mutation();
        Ok(())
    }
}

impl DialogPort for MemoryPage {
    fn confirm(&self, message: &str) -> Result<bool, WidgetError> {
        let mut dialog = self.inner.dialog.borrow_mut();
        dialog.prompts.push(message.to_string());
        dialog
            .answers
            .pop_front()
            .unwrap_or_else(|| Err(WidgetError::host("no prompt answer queued")))
    }
}

impl EventPort for MemoryPage {
    fn on_click(&self, element_id: &str, handler: ClickHandler) -> Result<(), WidgetError> {
        if !self.has_element(element_id) {
            return Err(WidgetError::missing_element(element_id));
        }
        self.inner
            .clicks
            .borrow_mut()
            .entry(element_id.to_string())
            .or_default()
            .push(handler);
        Ok(())
    }

    fn on_submit(&self, form_id: &str, handler: SubmitHandler) -> Result<(), WidgetError> {
        if !self.has_element(form_id) {
            return Err(WidgetError::missing_element(form_id));
        }
        self.inner
            .submits
            .borrow_mut()
            .entry(form_id.to_string())
            .or_default()
            .push(handler);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_state() {
        let page = MemoryPage::new();
        let other = page.clone();
        page.add_container("os-fields");
        other.append_html("os-fields", "<div></div>").unwrap();
        assert_eq!(page.child_count("os-fields").unwrap(), 1);
        assert_eq!(page.mutation_count(), 1);
    }

    #[test]
    fn test_missing_element_errors() {
        let page = MemoryPage::new();
        assert_eq!(
            page.child_count("nope"),
            Err(WidgetError::missing_element("nope"))
        );
        assert!(page.on_click("nope", Box::new(|| {})).is_err());
    }

    #[test]
    fn test_click_runs_handlers_every_time() {
        let page = MemoryPage::new();
        page.add_element("button");
        let hits = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&hits);
        page.on_click("button", Box::new(move || *counter.borrow_mut() += 1))
            .unwrap();

        page.click("button");
        page.click("button");
        assert_eq!(*hits.borrow(), 2);
    }

    #[test]
    fn test_failing_element_rejects_mutations() {
        let page = MemoryPage::new();
        page.add_container("os-fields");
        page.fail_mutations_on("os-fields");

        assert!(matches!(
            page.append_html("os-fields", "<div></div>"),
            Err(WidgetError::Host(_))
        ));
        assert!(page.set_hidden("os-fields", true).is_err());
        assert_eq!(page.child_count("os-fields").unwrap(), 0);
        assert_eq!(page.mutation_count(), 0);
    }

    #[test]
    fn test_unhandled_submit_proceeds() {
        let page = MemoryPage::new();
        page.add_element("form");
        assert_eq!(page.submit("form"), SubmitDecision::Proceed);
        assert_eq!(page.submission_count("form"), 1);
    }

    #[test]
    fn test_prompt_without_answer_fails() {
        let page = MemoryPage::new();
        assert!(page.confirm("sure?").is_err());
        assert_eq!(page.prompts(), vec!["sure?".to_string()]);
    }
}
