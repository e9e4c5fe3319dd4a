use platform_host::{
    IntakeReply, LeadIntakeFuture, LeadIntakeService, LeadSubmission, NoopLeadIntakeService,
    TransportError,
};

use crate::{WebDelayService, WebLeadIntakeService};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Compile-time selected host strategy for `platform_host_web` adapters.
pub enum HostStrategy {
    /// Browser-backed adapters from `platform_host_web`.
    Browser,
    /// Placeholder adapters for static previews without a reachable intake endpoint.
    Stub,
}

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "host-stub")]
    {
        HostStrategy::Stub
    }

    #[cfg(not(feature = "host-stub"))]
    {
        HostStrategy::Browser
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    match selected_host_strategy() {
        HostStrategy::Browser => "browser",
        HostStrategy::Stub => "stub",
    }
}

/// Adapter enum that erases the concrete intake backend behind [`LeadIntakeService`].
#[derive(Debug, Clone, Copy)]
pub enum LeadIntakeServiceAdapter {
    /// Browser `fetch` transport.
    Browser(WebLeadIntakeService),
    /// No-op fallback used when the intake endpoint is intentionally stubbed.
    Stub(NoopLeadIntakeService),
}

impl LeadIntakeService for LeadIntakeServiceAdapter {
    fn post_lead<'a>(
        &'a self,
        submission: &'a LeadSubmission,
    ) -> LeadIntakeFuture<'a, Result<IntakeReply, TransportError>> {
        match self {
            Self::Browser(service) => service.post_lead(submission),
            Self::Stub(service) => service.post_lead(submission),
        }
    }
}

/// Builds the lead-intake adapter for the compile-time selected host strategy.
pub fn lead_intake_service() -> LeadIntakeServiceAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => LeadIntakeServiceAdapter::Browser(WebLeadIntakeService),
        HostStrategy::Stub => LeadIntakeServiceAdapter::Stub(NoopLeadIntakeService),
    }
}

/// Builds the delay adapter; timers are available under every host strategy.
pub fn delay_service() -> WebDelayService {
    WebDelayService
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(feature = "host-stub"))]
    #[test]
    fn default_build_selects_browser_adapters() {
        assert_eq!(selected_host_strategy(), HostStrategy::Browser);
        assert_eq!(host_strategy_name(), "browser");
        assert!(matches!(
            lead_intake_service(),
            LeadIntakeServiceAdapter::Browser(_)
        ));
    }

    #[cfg(feature = "host-stub")]
    #[test]
    fn stub_build_selects_noop_intake() {
        assert_eq!(host_strategy_name(), "stub");
        assert!(matches!(lead_intake_service(), LeadIntakeServiceAdapter::Stub(_)));
    }
}
