//! GitHub Actions workflow client using reqwest.

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Serialize;

use crate::domain::{ApiConfig, AppError, Credential, RawResponse, RepositoryIdentifier};
use crate::ports::{WorkflowApi, WorkflowApiFactory};

const GITHUB_V3_JSON: &str = "application/vnd.github.v3+json";
const X_GITHUB_API_VERSION: &str = "X-GitHub-Api-Version";
const API_VERSION: &str = "2022-11-28";
const DISPATCH_REF: &str = "main";

/// HTTP transport for one repository's workflow endpoints.
///
/// Each call performs a single request. Nothing is retried, and transport
/// failures come back as a [`RawResponse`] with status 0 instead of an error.
/// A response whose body cannot be read in full counts as a transport failure.
///
/// The repository URL is split leniently: `https://example.org/a/b/c` is
/// accepted as owner `a`, name `b`. Validate the URL before building a client
/// when it comes from user input.
#[derive(Clone)]
pub struct HttpWorkflowClient {
    repository: RepositoryIdentifier,
    credential: Credential,
    api_root: String,
    client: Client,
}

impl std::fmt::Debug for HttpWorkflowClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpWorkflowClient")
            .field("repository", &self.repository)
            .field("api_root", &self.api_root)
            .field("credential", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Serialize)]
struct DispatchRequest {
    #[serde(rename = "ref")]
    git_ref: &'static str,
}

impl HttpWorkflowClient {
    /// Create a client for `repo_url` authenticated with a decrypted token.
    pub fn new(
        repo_url: &str,
        credential: Credential,
        config: &ApiConfig,
    ) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| AppError::config_error(format!("Failed to create HTTP client: {}", e)))?;

        let repository = RepositoryIdentifier::parse_lenient(repo_url);
        let api_root = config.api_root(&repository);

        Ok(Self { repository, credential, api_root, client })
    }

    fn workflows_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/actions/workflows",
            self.api_root,
            self.repository.owner(),
            self.repository.name()
        )
    }

    fn send(&self, request: RequestBuilder) -> RawResponse {
        let result = request
            .bearer_auth(self.credential.expose())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, GITHUB_V3_JSON)
            .header(X_GITHUB_API_VERSION, API_VERSION)
            .send();

        match result {
            Ok(response) => {
                let status = response.status().as_u16();
                match response.text() {
                    Ok(body) => RawResponse::new(status, body),
                    Err(e) => RawResponse::transport_failure(format!(
                        "HTTP response body could not be read: {}",
                        e
                    )),
                }
            }
            Err(e) => RawResponse::transport_failure(format!("HTTP request failed: {}", e)),
        }
    }
}

impl WorkflowApi for HttpWorkflowClient {
    fn list_workflows(&self) -> RawResponse {
        let response = self.send(self.client.get(self.workflows_url()));
        tracing::debug!(
            repository = %self.repository,
            status = response.status,
            "listed workflows"
        );
        response
    }

    fn dispatch_workflow(&self, workflow_id: u64) -> RawResponse {
        let url = format!("{}/{}/dispatches", self.workflows_url(), workflow_id);
        let request = self.client.post(url).json(&DispatchRequest { git_ref: DISPATCH_REF });
        let response = self.send(request);
        tracing::debug!(
            repository = %self.repository,
            workflow_id,
            status = response.status,
            "dispatched workflow"
        );
        response
    }
}

/// Factory producing [`HttpWorkflowClient`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpWorkflowApiFactory;

impl WorkflowApiFactory for HttpWorkflowApiFactory {
    fn connect(
        &self,
        repo_url: &str,
        credential: Credential,
        config: &ApiConfig,
    ) -> Result<Box<dyn WorkflowApi>, AppError> {
        Ok(Box::new(HttpWorkflowClient::new(repo_url, credential, config)?))
    }
}
