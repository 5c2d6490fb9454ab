use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde_json::json;

use crate::domain::{ApiConfig, AppError, Credential, RawResponse};
use crate::ports::{WorkflowApi, WorkflowApiFactory};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    List,
    Dispatch(u64),
}

/// Scripted workflow API recording every call it receives.
#[derive(Clone)]
pub struct FakeWorkflowApi {
    listing: RawResponse,
    dispatches: HashMap<u64, RawResponse>,
    calls: Arc<Mutex<Vec<ApiCall>>>,
}

impl FakeWorkflowApi {
    pub fn with_listing(listing: RawResponse) -> Self {
        Self { listing, dispatches: HashMap::new(), calls: Arc::new(Mutex::new(vec![])) }
    }

    pub fn with_workflows(workflows: &[(u64, &str)]) -> Self {
        let workflows: Vec<_> =
            workflows.iter().map(|(id, name)| json!({ "id": id, "name": name })).collect();
        let body = json!({ "total_count": workflows.len(), "workflows": workflows });
        Self::with_listing(RawResponse::new(200, body.to_string()))
    }

    /// Script the dispatch response for `id`; unscripted ids return 204.
    pub fn dispatch_returns(mut self, id: u64, response: RawResponse) -> Self {
        self.dispatches.insert(id, response);
        self
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn dispatched_ids(&self) -> Vec<u64> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                ApiCall::Dispatch(id) => Some(id),
                ApiCall::List => None,
            })
            .collect()
    }
}

impl WorkflowApi for FakeWorkflowApi {
    fn list_workflows(&self) -> RawResponse {
        self.calls.lock().unwrap().push(ApiCall::List);
        self.listing.clone()
    }

    fn dispatch_workflow(&self, workflow_id: u64) -> RawResponse {
        self.calls.lock().unwrap().push(ApiCall::Dispatch(workflow_id));
        self.dispatches.get(&workflow_id).cloned().unwrap_or_else(|| RawResponse::new(204, ""))
    }
}

/// Hands out clones of one [`FakeWorkflowApi`] and records what it was given.
#[derive(Clone)]
pub struct FakeWorkflowApiFactory {
    pub api: FakeWorkflowApi,
    connections: Arc<Mutex<Vec<(String, String)>>>,
}

impl FakeWorkflowApiFactory {
    pub fn new(api: FakeWorkflowApi) -> Self {
        Self { api, connections: Arc::new(Mutex::new(vec![])) }
    }

    /// `(repo_url, decrypted token)` pairs passed to `connect`.
    pub fn connections(&self) -> Vec<(String, String)> {
        self.connections.lock().unwrap().clone()
    }
}

impl WorkflowApiFactory for FakeWorkflowApiFactory {
    fn connect(
        &self,
        repo_url: &str,
        credential: Credential,
        _config: &ApiConfig,
    ) -> Result<Box<dyn WorkflowApi>, AppError> {
        self.connections
            .lock()
            .unwrap()
            .push((repo_url.to_string(), credential.expose().to_string()));
        Ok(Box::new(self.api.clone()))
    }
}
