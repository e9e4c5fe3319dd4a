//! Lead-intake adapter backed by the browser `fetch` API.

use platform_host::{
    IntakeReply, LeadIntakeFuture, LeadIntakeService, LeadSubmission, TransportError,
};

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Browser intake adapter; posts JSON with `fetch` and aborts the request when dropped.
pub struct WebLeadIntakeService;

impl LeadIntakeService for WebLeadIntakeService {
    fn post_lead<'a>(
        &'a self,
        submission: &'a LeadSubmission,
    ) -> LeadIntakeFuture<'a, Result<IntakeReply, TransportError>> {
        Box::pin(async move {
            let body = submission
                .to_json_body()
                .map_err(TransportError::Network)?;
            bridge::post_json(&submission.endpoint, &body).await
        })
    }
}
