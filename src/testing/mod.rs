mod app;
mod fake_workflow_api;

pub use app::{TestContext, encrypt_for_tests, test_context, test_context_with_api};
pub use fake_workflow_api::{ApiCall, FakeWorkflowApi, FakeWorkflowApiFactory};
