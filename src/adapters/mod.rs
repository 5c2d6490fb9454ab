pub mod github_http;
pub mod memory_settings_store;
pub mod secret_sources;
pub mod toml_settings_store;

pub use github_http::{HttpWorkflowApiFactory, HttpWorkflowClient};
pub use memory_settings_store::MemorySettingsStore;
pub use secret_sources::{EnvSecretSource, StaticSecretSource};
pub use toml_settings_store::{SettingsFile, TomlSettingsStore};
