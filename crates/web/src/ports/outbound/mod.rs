//! Outbound ports - Interfaces to the host page
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing the widgets to mutate the page, prompt the user, and receive
//! notifications without depending on a concrete DOM binding.

pub mod page;

pub use page::{ClickHandler, DialogPort, DocumentPort, EventPort, SubmitDecision, SubmitHandler};

#[cfg(any(test, feature = "testing"))]
pub use page::{MockDialogPort, MockDocumentPort};
