//! Lead-intake transport contracts and in-process adapters.

use std::{cell::RefCell, collections::VecDeque, fmt, future::Future, pin::Pin, rc::Rc};

use futures::future;
use serde::{Deserialize, Serialize};

/// Object-safe boxed future used by [`LeadIntakeService`].
pub type LeadIntakeFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Deferred response body read; resolves with `None` when the body cannot be read.
pub type IntakeBodyFuture = Pin<Box<dyn Future<Output = Option<String>>>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A single lead posted to the intake endpoint.
pub struct LeadSubmission {
    /// Absolute or relative URL of the intake endpoint.
    #[serde(skip)]
    pub endpoint: String,
    /// Normalized phone number.
    pub phone: String,
}

impl LeadSubmission {
    /// Serializes the wire body (`{"phone": "..."}`).
    pub fn to_json_body(&self) -> Result<String, String> {
        serde_json::to_string(self).map_err(|err| err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Fully read response, used to script in-process intake services.
pub struct IntakeResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body text, if it could be read.
    pub body: Option<String>,
}

impl IntakeResponse {
    /// Builds a response with a body.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: Some(body.into()),
        }
    }

    /// Builds a response without a readable body.
    pub fn empty(status: u16) -> Self {
        Self { status, body: None }
    }
}

/// Response whose status is known and whose body has not been read yet.
///
/// Dropping the reply without awaiting [`IntakeReply::into_body`] releases the body transfer.
pub struct IntakeReply {
    status: u16,
    body: IntakeBodyFuture,
}

impl IntakeReply {
    /// Builds a reply from a status and a deferred body read.
    pub fn new(status: u16, body: IntakeBodyFuture) -> Self {
        Self { status, body }
    }

    /// Builds a reply whose body never finishes arriving.
    pub fn stalled(status: u16) -> Self {
        Self::new(status, Box::pin(future::pending::<Option<String>>()))
    }

    /// HTTP status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Returns `true` for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Consumes the reply and reads the body.
    pub fn into_body(self) -> IntakeBodyFuture {
        self.body
    }
}

impl From<IntakeResponse> for IntakeReply {
    fn from(response: IntakeResponse) -> Self {
        Self::new(response.status, Box::pin(future::ready(response.body)))
    }
}

impl fmt::Debug for IntakeReply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntakeReply")
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Transport-level failures raised before a response is available.
pub enum TransportError {
    /// The request was aborted before it settled.
    Aborted,
    /// The request could not be sent or the connection failed.
    Network(String),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Aborted => f.write_str("request aborted"),
            Self::Network(message) => f.write_str(message),
        }
    }
}

impl std::error::Error for TransportError {}

/// Host service that delivers a [`LeadSubmission`] to the intake endpoint.
///
/// The returned future resolves as soon as the response status is known; the body is read
/// separately through [`IntakeReply::into_body`]. Dropping the future before it resolves must
/// cancel the underlying request.
pub trait LeadIntakeService {
    /// Posts a lead and resolves with the response status and a deferred body.
    fn post_lead<'a>(
        &'a self,
        submission: &'a LeadSubmission,
    ) -> LeadIntakeFuture<'a, Result<IntakeReply, TransportError>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Intake service for unsupported targets; every post fails with a network error.
pub struct NoopLeadIntakeService;

impl LeadIntakeService for NoopLeadIntakeService {
    fn post_lead<'a>(
        &'a self,
        _submission: &'a LeadSubmission,
    ) -> LeadIntakeFuture<'a, Result<IntakeReply, TransportError>> {
        Box::pin(async {
            Err(TransportError::Network(
                "lead intake is unavailable on this host".to_string(),
            ))
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Scripted outcome consumed by [`MemoryLeadIntakeService`].
pub enum ScriptedIntake {
    /// Resolve with a response.
    Respond(IntakeResponse),
    /// Resolve with a status whose body never arrives.
    StallBody(u16),
    /// Fail with a transport error.
    Fail(TransportError),
    /// Never resolve.
    Hang,
}

#[derive(Debug, Clone, Default)]
/// In-memory intake service that records submissions and replays scripted outcomes.
///
/// With an empty script every post resolves with `201 Created`.
pub struct MemoryLeadIntakeService {
    script: Rc<RefCell<VecDeque<ScriptedIntake>>>,
    submissions: Rc<RefCell<Vec<LeadSubmission>>>,
}

impl MemoryLeadIntakeService {
    /// Queues an outcome for the next unscripted post.
    pub fn push(&self, outcome: ScriptedIntake) -> &Self {
        self.script.borrow_mut().push_back(outcome);
        self
    }

    /// Queues a response for the next unscripted post.
    pub fn respond_with(&self, response: IntakeResponse) -> &Self {
        self.push(ScriptedIntake::Respond(response))
    }

    /// Returns every submission received so far.
    pub fn submissions(&self) -> Vec<LeadSubmission> {
        self.submissions.borrow().clone()
    }

    /// Returns the number of submissions received so far.
    pub fn submission_count(&self) -> usize {
        self.submissions.borrow().len()
    }
}

impl LeadIntakeService for MemoryLeadIntakeService {
    fn post_lead<'a>(
        &'a self,
        submission: &'a LeadSubmission,
    ) -> LeadIntakeFuture<'a, Result<IntakeReply, TransportError>> {
        self.submissions.borrow_mut().push(submission.clone());
        let outcome = self
            .script
            .borrow_mut()
            .pop_front()
            .unwrap_or(ScriptedIntake::Respond(IntakeResponse::empty(201)));
        match outcome {
            ScriptedIntake::Respond(response) => Box::pin(future::ready(Ok(response.into()))),
            ScriptedIntake::StallBody(status) => {
                Box::pin(future::ready(Ok(IntakeReply::stalled(status))))
            }
            ScriptedIntake::Fail(err) => Box::pin(future::ready(Err(err))),
            ScriptedIntake::Hang => Box::pin(future::pending::<
                Result<IntakeReply, TransportError>,
            >()),
        }
    }
}
