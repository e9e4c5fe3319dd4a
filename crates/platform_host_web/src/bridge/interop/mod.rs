//! Target-specific transport glue behind the bridge API.

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm::{post_json, sleep};
#[cfg(target_arch = "wasm32")]
pub use wasm::{post_json, sleep};
