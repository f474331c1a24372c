//! Value objects - Immutable objects defined by their attributes

mod category;
mod field_name;

pub use category::Category;
pub use field_name::{FieldKind, FieldName};
