//! Workflow descriptors, raw API responses, and per-workflow dispatch outcomes.

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Status recorded on a [`RawResponse`] when no HTTP response was received.
pub const TRANSPORT_FAILURE_STATUS: u16 = 0;

/// The only status GitHub returns for an accepted workflow dispatch.
pub const DISPATCH_ACCEPTED_STATUS: u16 = 204;

/// Message recorded for an accepted dispatch.
pub const DISPATCH_SUCCESS_MESSAGE: &str = "Workflow triggered successfully.";

/// A workflow as returned by the listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowDescriptor {
    pub id: u64,
    pub name: String,
}

/// Status code and body of a remote call, left uninterpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    /// A call that never got an HTTP response (connect error, timeout).
    pub fn transport_failure(error: impl Into<String>) -> Self {
        Self { status: TRANSPORT_FAILURE_STATUS, body: error.into() }
    }

    pub fn is_transport_failure(&self) -> bool {
        self.status == TRANSPORT_FAILURE_STATUS
    }

    /// Decode the `workflows` array of a listing body.
    ///
    /// Does not look at the status; callers decide what status is acceptable
    /// before decoding.
    pub fn workflows(&self) -> Result<Vec<WorkflowDescriptor>, AppError> {
        let listing: WorkflowListing = serde_json::from_str(&self.body)
            .map_err(|e| AppError::MalformedResponse(format!("workflow listing: {}", e)))?;
        Ok(listing.workflows)
    }
}

#[derive(Debug, Deserialize)]
struct WorkflowListing {
    workflows: Vec<WorkflowDescriptor>,
}

/// Result of dispatching a single workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DispatchOutcome {
    pub workflow: WorkflowDescriptor,
    pub succeeded: bool,
    pub status_code: u16,
    pub message: String,
}

impl DispatchOutcome {
    /// Interpret a dispatch response: 204 is success, anything else is recorded
    /// as a failure carrying the body as diagnostic.
    pub fn from_response(workflow: WorkflowDescriptor, response: RawResponse) -> Self {
        let succeeded = response.status == DISPATCH_ACCEPTED_STATUS;
        let message = if succeeded {
            DISPATCH_SUCCESS_MESSAGE.to_string()
        } else if response.body.trim().is_empty() {
            format!("Dispatch failed with HTTP status {}", response.status)
        } else {
            response.body
        };

        Self { workflow, succeeded, status_code: response.status, message }
    }

    /// Label used in the operator-facing table.
    pub fn status_label(&self) -> &'static str {
        if self.succeeded { "Success" } else { "Error" }
    }
}
