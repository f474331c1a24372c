//! Test utilities for the page ports
//!
//! Available when the `testing` feature is enabled:
//! ```toml
//! [dev-dependencies]
//! skillsheet-web = { workspace = true, features = ["testing"] }
//! ```

mod memory_page;

pub use memory_page::MemoryPage;
