//! GitHub Actions workflow API port.

use crate::domain::{ApiConfig, AppError, Credential, RawResponse, WorkflowDescriptor};

/// Operations against one repository's workflows.
pub trait WorkflowApi {
    /// List workflows; the response is returned uninterpreted.
    fn list_workflows(&self) -> RawResponse;

    /// Request a run of `workflow_id` on the default ref.
    fn dispatch_workflow(&self, workflow_id: u64) -> RawResponse;

    /// List workflows and decode them, requiring a 200 listing.
    fn discover_workflows(&self) -> Result<Vec<WorkflowDescriptor>, AppError> {
        let listing = self.list_workflows();
        if listing.is_transport_failure() {
            return Err(AppError::Transport(listing.body));
        }
        if listing.status != 200 {
            return Err(AppError::CredentialRejected { status: listing.status });
        }
        listing.workflows()
    }

    /// List, then dispatch every workflow in listing order.
    ///
    /// Aborts before dispatching anything when listing fails or its body
    /// does not decode.
    fn dispatch_all_workflows(&self) -> Result<Vec<(WorkflowDescriptor, RawResponse)>, AppError> {
        Ok(self
            .discover_workflows()?
            .into_iter()
            .map(|workflow| {
                let response = self.dispatch_workflow(workflow.id);
                (workflow, response)
            })
            .collect())
    }
}

/// Builds a [`WorkflowApi`] for a repository URL and a decrypted credential.
pub trait WorkflowApiFactory {
    fn connect(
        &self,
        repo_url: &str,
        credential: Credential,
        config: &ApiConfig,
    ) -> Result<Box<dyn WorkflowApi>, AppError>;
}
