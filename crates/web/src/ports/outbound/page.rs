//! Host page abstraction ports
//!
//! These traits abstract the page the widgets live in so that:
//! 1. Widget logic stays independent of `web-sys`
//! 2. Browser-specific code is isolated in infrastructure
//! 3. Widgets are testable against an in-memory page or mocks
//!
//! Everything here runs on the page's single event-loop thread, so none of
//! the traits require `Send` or `Sync`.

use crate::error::WidgetError;

/// Element tree operations, addressed by element id
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait DocumentPort {
    /// Whether an element with this id exists
    fn has_element(&self, element_id: &str) -> bool;

    /// Number of element children (text nodes are not counted)
    fn child_count(&self, element_id: &str) -> Result<usize, WidgetError>;

    /// Parse `html` and insert it after the element's last child
    fn append_html(&self, element_id: &str, html: &str) -> Result<(), WidgetError>;

    /// Remove the last element child. Returns `false` if there was none.
    fn remove_last_child(&self, element_id: &str) -> Result<bool, WidgetError>;

    /// Hide or show the element
    fn set_hidden(&self, element_id: &str, hidden: bool) -> Result<(), WidgetError>;
}

/// Blocking yes/no prompt
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait DialogPort {
    /// Show `message` and block until the user answers. `Ok(true)` means yes.
    fn confirm(&self, message: &str) -> Result<bool, WidgetError>;
}

/// Outcome of a submit handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitDecision {
    /// Let the form submit unmodified
    Proceed,
    /// Cancel the submission (no navigation, no request)
    Cancel,
}

pub type ClickHandler = Box<dyn FnMut()>;
pub type SubmitHandler = Box<dyn FnMut() -> SubmitDecision>;

/// Notification registration
///
/// Handlers stay registered for the lifetime of the page.
pub trait EventPort {
    /// Run `handler` whenever the element is clicked
    fn on_click(&self, element_id: &str, handler: ClickHandler) -> Result<(), WidgetError>;

    /// Run `handler` whenever the form attempts to submit
    fn on_submit(&self, form_id: &str, handler: SubmitHandler) -> Result<(), WidgetError>;
}
