//! Single-attempt submission pipeline: validate, post with a deadline, interpret the response.

use std::time::Duration;

use platform_host::{with_deadline, DelayService, LeadIntakeService, LeadSubmission, TransportError};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::endpoint::LeadEndpoint;
use crate::phone::is_valid_phone;

/// Fallback shown when a rejection carries no readable `error` field.
pub const GENERIC_FAILURE_MESSAGE: &str = "Submission failed, please try again.";
/// Fallback shown when a transport failure carries no message.
pub const UNEXPECTED_FAILURE_MESSAGE: &str = "Unexpected error. Please retry.";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Failure of a submission attempt. `Display` is the user-facing message.
pub enum SubmitError {
    /// The phone number does not match the accepted format.
    #[error("Invalid phone number format. Use 09123456789.")]
    InvalidPhone,
    /// No response arrived before the deadline.
    #[error("Request timed out. Please try again.")]
    TimedOut,
    /// The endpoint answered with a non-success status.
    #[error("{0}")]
    Rejected(String),
    /// The request failed before a response was available.
    #[error("{0}")]
    Transport(String),
}

impl SubmitError {
    /// Builds a [`SubmitError::Rejected`] from a non-success response body.
    pub fn from_rejection(body: Option<&str>) -> Self {
        Self::Rejected(rejection_message(body))
    }

    /// Stable token for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidPhone => "invalid_phone",
            Self::TimedOut => "timed_out",
            Self::Rejected(_) => "rejected",
            Self::Transport(_) => "transport",
        }
    }
}

impl From<TransportError> for SubmitError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Aborted => Self::TimedOut,
            TransportError::Network(message) if message.trim().is_empty() => {
                Self::Transport(UNEXPECTED_FAILURE_MESSAGE.to_string())
            }
            TransportError::Network(message) => Self::Transport(message),
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Value,
}

/// Renders a truthy scalar `error` value; falsy values and containers yield `None`.
fn error_text(value: Value) -> Option<String> {
    match value {
        Value::String(message) if !message.is_empty() => Some(message),
        Value::Number(number) if number.as_f64() != Some(0.0) => Some(number.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

/// Extracts the server-provided `error` value, falling back to [`GENERIC_FAILURE_MESSAGE`].
fn rejection_message(body: Option<&str>) -> String {
    body.and_then(|raw| serde_json::from_str::<ErrorBody>(raw).ok())
        .and_then(|body| error_text(body.error))
        .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string())
}

/// Runs one submission attempt for `phone` against `endpoint`.
///
/// The number is validated before any request is made. The request races `timeout` on `delay`
/// until the response status is known; whichever side loses is dropped, which aborts the request
/// or clears the timer. A 2xx status succeeds without reading the body. A rejection body is read
/// under its own `timeout` and falls back to [`GENERIC_FAILURE_MESSAGE`] when it does not arrive.
///
/// # Errors
///
/// Returns [`SubmitError::InvalidPhone`] without touching the network for malformed input,
/// [`SubmitError::TimedOut`] when the deadline wins, [`SubmitError::Rejected`] for non-2xx
/// responses, and [`SubmitError::Transport`] when the request itself fails.
pub async fn submit_lead(
    intake: &dyn LeadIntakeService,
    delay: &dyn DelayService,
    endpoint: &LeadEndpoint,
    phone: &str,
    timeout: Duration,
) -> Result<(), SubmitError> {
    if !is_valid_phone(phone) {
        return Err(SubmitError::InvalidPhone);
    }
    let submission = LeadSubmission {
        endpoint: endpoint.as_str().to_string(),
        phone: phone.trim().to_string(),
    };

    let reply = with_deadline(delay, timeout, intake.post_lead(&submission))
        .await
        .map_err(|_| SubmitError::TimedOut)??;
    if reply.is_success() {
        return Ok(());
    }

    let body = with_deadline(delay, timeout, reply.into_body())
        .await
        .ok()
        .flatten();
    Err(SubmitError::from_rejection(body.as_deref()))
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::{
        ImmediateDelayService, IntakeResponse, MemoryLeadIntakeService, PendingDelayService,
        ScriptedIntake,
    };

    use super::*;

    const TIMEOUT: Duration = Duration::from_millis(8000);

    fn endpoint() -> LeadEndpoint {
        LeadEndpoint::from_base(Some("https://leads.example.com/"))
    }

    fn run(intake: &MemoryLeadIntakeService, phone: &str) -> Result<(), SubmitError> {
        block_on(submit_lead(
            intake,
            &PendingDelayService,
            &endpoint(),
            phone,
            TIMEOUT,
        ))
    }

    #[test]
    fn success_posts_trimmed_phone_to_endpoint() {
        let intake = MemoryLeadIntakeService::default();
        intake.respond_with(IntakeResponse::empty(200));

        assert_eq!(run(&intake, "09123456789"), Ok(()));
        let submissions = intake.submissions();
        assert_eq!(submissions.len(), 1);
        assert_eq!(
            submissions[0].endpoint,
            "https://leads.example.com/api/leads/"
        );
        assert_eq!(submissions[0].phone, "09123456789");
    }

    #[test]
    fn invalid_phone_never_reaches_the_network() {
        let intake = MemoryLeadIntakeService::default();
        assert_eq!(run(&intake, "0812345678"), Err(SubmitError::InvalidPhone));
        assert_eq!(intake.submission_count(), 0);
        assert_eq!(
            SubmitError::InvalidPhone.to_string(),
            "Invalid phone number format. Use 09123456789."
        );
    }

    #[test]
    fn rejection_surfaces_server_error_field() {
        let intake = MemoryLeadIntakeService::default();
        intake.respond_with(IntakeResponse::new(
            400,
            r#"{"error": "Duplicate phone number"}"#,
        ));

        let err = run(&intake, "09123456789").expect_err("rejected");
        assert_eq!(err.to_string(), "Duplicate phone number");
    }

    #[test]
    fn rejection_without_usable_body_uses_generic_message() {
        for response in [
            IntakeResponse::empty(500),
            IntakeResponse::new(502, "<html>Bad Gateway</html>"),
            IntakeResponse::new(400, r#"{"detail": "nope"}"#),
            IntakeResponse::new(400, r#"{"error": ""}"#),
            IntakeResponse::new(400, r#"{"error": null}"#),
            IntakeResponse::new(400, r#"{"error": 0}"#),
            IntakeResponse::new(400, r#"{"error": false}"#),
            IntakeResponse::new(400, r#"{"error": {"code": 7}}"#),
        ] {
            let intake = MemoryLeadIntakeService::default();
            intake.respond_with(response.clone());
            let err = run(&intake, "09123456789").expect_err("rejected");
            assert_eq!(
                err,
                SubmitError::Rejected(GENERIC_FAILURE_MESSAGE.to_string()),
                "{response:?}"
            );
        }
    }

    #[test]
    fn scalar_error_values_are_shown_as_text() {
        assert_eq!(rejection_message(Some(r#"{"error": 42}"#)), "42");
        assert_eq!(rejection_message(Some(r#"{"error": 1.5}"#)), "1.5");
        assert_eq!(rejection_message(Some(r#"{"error": true}"#)), "true");
    }

    #[test]
    fn accepted_lead_succeeds_while_its_body_is_still_arriving() {
        let intake = MemoryLeadIntakeService::default();
        intake.push(ScriptedIntake::StallBody(200));
        let delay = ImmediateDelayService::default();

        let result = block_on(submit_lead(
            &intake,
            &delay,
            &endpoint(),
            "09123456789",
            TIMEOUT,
        ));
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn stalled_rejection_body_falls_back_to_generic_message() {
        let intake = MemoryLeadIntakeService::default();
        intake.push(ScriptedIntake::StallBody(409));

        let result = block_on(submit_lead(
            &intake,
            &ImmediateDelayService::default(),
            &endpoint(),
            "09123456789",
            TIMEOUT,
        ));
        assert_eq!(
            result,
            Err(SubmitError::Rejected(GENERIC_FAILURE_MESSAGE.to_string()))
        );
    }

    #[test]
    fn hanging_request_times_out_with_distinct_message() {
        let intake = MemoryLeadIntakeService::default();
        intake.push(ScriptedIntake::Hang);
        let delay = ImmediateDelayService::default();

        let result = block_on(submit_lead(
            &intake,
            &delay,
            &endpoint(),
            "09123456789",
            TIMEOUT,
        ));
        assert_eq!(result, Err(SubmitError::TimedOut));
        assert_eq!(
            result.expect_err("timed out").to_string(),
            "Request timed out. Please try again."
        );
        assert_eq!(delay.requested(), vec![TIMEOUT]);
    }

    #[test]
    fn transport_failures_keep_their_message_or_fall_back() {
        let intake = MemoryLeadIntakeService::default();
        intake
            .push(ScriptedIntake::Fail(TransportError::Network(
                "Failed to fetch".to_string(),
            )))
            .push(ScriptedIntake::Fail(TransportError::Network(String::new())))
            .push(ScriptedIntake::Fail(TransportError::Aborted));

        assert_eq!(
            run(&intake, "09123456789"),
            Err(SubmitError::Transport("Failed to fetch".to_string()))
        );
        assert_eq!(
            run(&intake, "09123456789"),
            Err(SubmitError::Transport(
                UNEXPECTED_FAILURE_MESSAGE.to_string()
            ))
        );
        assert_eq!(run(&intake, "09123456789"), Err(SubmitError::TimedOut));
    }
}
