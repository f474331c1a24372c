//! Skillsheet domain types.
//!
//! Pure types shared by the field widgets and anything that reads the
//! submitted form back: category names, the field naming contract, the
//! Field Group state machine, and submission parsing.

pub mod error;
pub mod field_group;
pub mod submission;
pub mod value_objects;

pub use error::DomainError;
pub use field_group::{EmptyGroupPolicy, FieldGroupState, Transition, VisibilityChange};
pub use submission::{collect_entries, ensure_unique_names, TechnologyEntry};
pub use value_objects::{Category, FieldKind, FieldName};
