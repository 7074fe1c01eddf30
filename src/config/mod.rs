mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, Config, API_URL_ENV, DEFAULT_BASE_URL};
