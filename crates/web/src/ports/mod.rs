//! Widget port definitions.

pub mod outbound;
