//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! This crate is the concrete browser-side wiring layer for lead intake (`fetch` with an
//! `AbortController`) and delays (`setTimeout`). Non-WASM builds fall back to shims so the
//! workspace still tests natively.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and concrete adapter factories for runtime wiring.
pub mod adapters;
mod bridge;
pub mod lead_intake;
pub mod timer;

pub use adapters::{
    delay_service, host_strategy_name, lead_intake_service, selected_host_strategy, HostStrategy,
    LeadIntakeServiceAdapter,
};
pub use lead_intake::WebLeadIntakeService;
pub use timer::WebDelayService;
