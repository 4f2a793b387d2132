//! Configuration loading and validation.

#![allow(clippy::result_large_err)]

use async_trait::async_trait;
use std::path::Path;

mod client_config;
mod error;

pub use error::ConfigError;

/// Default location of the client configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "config/client.json";

/// Common interface for loading configuration files
#[async_trait]
pub trait ConfigLoader: Sized {
	/// Load, resolve and validate the configuration stored at `path`
	async fn load_from_path(path: &Path) -> Result<Self, ConfigError>;

	/// Validate the configuration
	fn validate(&self) -> Result<(), ConfigError>;

	/// Logs a warning for every endpoint reached over an insecure protocol
	fn validate_protocol(&self);

	/// Resolve all secrets in the configuration
	async fn resolve_secrets(&self) -> Result<Self, ConfigError>;

	/// Check if a file is a JSON file based on extension
	fn is_json_file(path: &Path) -> bool {
		path.extension()
			.map(|ext| ext.to_string_lossy().to_lowercase() == "json")
			.unwrap_or(false)
	}
}
