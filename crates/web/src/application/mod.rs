//! Widget logic, written against the page ports only.

mod confirm;
mod field_list;
mod wiring;

pub use confirm::ConfirmGuard;
pub use field_list::FieldListWidget;
pub use wiring::{initialize, WiredCategory, Wiring};
