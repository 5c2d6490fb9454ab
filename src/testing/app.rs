use crate::adapters::MemorySettingsStore;
use crate::app::AppContext;
use crate::domain::ApiConfig;
use crate::services::{KeyMaterialResolver, LifecycleHook, WorkflowTriggerService, credential_codec};
use crate::testing::{FakeWorkflowApi, FakeWorkflowApiFactory};

pub type TestContext = AppContext<MemorySettingsStore, FakeWorkflowApiFactory>;

fn resolver() -> KeyMaterialResolver {
    KeyMaterialResolver::from_values(Some("test-key".into()), None, Some("test-salt".into()), None)
}

/// Encrypt `token` with the key material every test context uses.
pub fn encrypt_for_tests(token: &str) -> String {
    credential_codec::encrypt(token, &resolver().resolve())
}

/// Context over an in-memory store and a fake API listing one workflow.
pub fn test_context(options: &[(&str, &str)]) -> TestContext {
    test_context_with_api(options, FakeWorkflowApi::with_workflows(&[(1, "Deploy")]))
}

pub fn test_context_with_api(options: &[(&str, &str)], api: FakeWorkflowApi) -> TestContext {
    let settings = options
        .iter()
        .fold(MemorySettingsStore::new(), |store, (key, value)| store.with(key, value));
    let service =
        WorkflowTriggerService::new(FakeWorkflowApiFactory::new(api), ApiConfig::default());
    AppContext::new(settings, LifecycleHook::new(service, resolver()))
}
