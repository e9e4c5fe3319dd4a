//! Typed host-domain contracts shared by the lead form and its browser adapters.
//!
//! This crate is the API-first boundary for platform services. It exposes the lead-intake
//! transport contract, the delay/timer contract with its deadline combinator, and in-process
//! implementations used by tests and unsupported targets. Concrete browser adapters live in
//! `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod lead_intake;
pub mod timer;

pub use lead_intake::{
    IntakeBodyFuture, IntakeReply, IntakeResponse, LeadIntakeFuture, LeadIntakeService,
    LeadSubmission, MemoryLeadIntakeService, NoopLeadIntakeService, ScriptedIntake,
    TransportError,
};
pub use timer::{
    with_deadline, DeadlineElapsed, DelayFuture, DelayService, ImmediateDelayService,
    PendingDelayService,
};
