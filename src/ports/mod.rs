mod secret_source;
mod settings_store;
mod workflow_api;

pub use secret_source::SecretSource;
pub use settings_store::{ENCRYPTED_TOKEN_KEY, REPO_URL_KEY, SettingsStore};
pub use workflow_api::{WorkflowApi, WorkflowApiFactory};
