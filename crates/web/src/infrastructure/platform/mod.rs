//! Platform-specific page adapters
//!
//! The browser adapter only exists on `wasm32`; native builds drive the
//! widgets through the in-memory page in `infrastructure::testing`.

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::WasmPage;
