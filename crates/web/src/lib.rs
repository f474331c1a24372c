//! Skill sheet field widgets.
//!
//! Adds technology rows to the per-category field lists of the skill sheet
//! forms and asks for confirmation before the share links are invalidated.
//! Widget logic talks to the page only through the ports in
//! [`ports::outbound`]; the browser adapter is selected at compile time.

pub mod application;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod markup;
pub mod ports;

#[cfg(target_arch = "wasm32")]
mod runner;

pub use application::{initialize, ConfirmGuard, FieldListWidget, WiredCategory, Wiring};
pub use config::{CategoryBinding, ConfirmBinding, WidgetConfig};
pub use error::WidgetError;
pub use markup::EntryTemplate;
pub use ports::outbound::{DialogPort, DocumentPort, EventPort, SubmitDecision};

#[cfg(target_arch = "wasm32")]
pub use runner::start;
