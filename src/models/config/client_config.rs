//! Client configuration loading and validation.
//!
//! Implements [`ConfigLoader`] for [`ClientConfig`]. API keys referencing
//! environment variables are resolved at load time, after `.env` is read.

use async_trait::async_trait;
use std::{collections::HashMap, path::Path};
use url::Url;

use crate::models::{config::error::ConfigError, ClientConfig, ConfigLoader, SecretValue};

fn path_metadata(path: &Path) -> Option<HashMap<String, String>> {
	Some(HashMap::from([(
		"path".to_string(),
		path.display().to_string(),
	)]))
}

#[async_trait]
impl ConfigLoader for ClientConfig {
	async fn resolve_secrets(&self) -> Result<Self, ConfigError> {
		dotenvy::dotenv().ok();
		let mut config = self.clone();

		for api_key in &mut config.api_keys {
			let resolved = api_key.resolve().await.map_err(|e| {
				ConfigError::parse_error(
					format!("failed to resolve API key: {}", e),
					Some(e),
					None,
				)
			})?;
			*api_key = SecretValue::Plain(resolved);
		}
		Ok(config)
	}

	async fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
		if !Self::is_json_file(path) {
			return Err(ConfigError::file_error(
				"client config must be a JSON file",
				None,
				path_metadata(path),
			));
		}

		let file = std::fs::File::open(path).map_err(|e| {
			ConfigError::file_error(
				format!("failed to open client config file: {}", e),
				Some(Box::new(e)),
				path_metadata(path),
			)
		})?;
		let config: ClientConfig = serde_json::from_reader(file).map_err(|e| {
			ConfigError::parse_error(
				format!("failed to parse client config: {}", e),
				Some(Box::new(e)),
				path_metadata(path),
			)
		})?;

		let config = config.resolve_secrets().await?;
		config.validate()?;
		config.validate_protocol();

		Ok(config)
	}

	/// Ensures that:
	/// - at least one endpoint is configured and every endpoint is an http(s) URL
	/// - at least one API key is configured and none is empty
	/// - decimals and timeouts are in range
	fn validate(&self) -> Result<(), ConfigError> {
		if self.endpoints.is_empty() {
			return Err(ConfigError::validation_error(
				"At least one endpoint is required",
				None,
				None,
			));
		}

		for endpoint in &self.endpoints {
			let url = Url::parse(endpoint).map_err(|e| {
				ConfigError::validation_error(
					format!("Invalid endpoint URL: {}", e),
					Some(Box::new(e)),
					Some(HashMap::from([("endpoint".to_string(), endpoint.clone())])),
				)
			})?;
			if !matches!(url.scheme(), "http" | "https") {
				return Err(ConfigError::validation_error(
					"Endpoint URL must use http or https",
					None,
					Some(HashMap::from([("endpoint".to_string(), endpoint.clone())])),
				));
			}
		}

		if self.api_keys.is_empty() {
			return Err(ConfigError::validation_error(
				"At least one API key is required",
				None,
				None,
			));
		}
		if self.api_keys.iter().any(|key| key.is_empty()) {
			return Err(ConfigError::validation_error(
				"API keys must not be empty",
				None,
				None,
			));
		}

		if self.native_decimals < 0 {
			return Err(ConfigError::validation_error(
				format!(
					"native_decimals must not be negative, got {}",
					self.native_decimals
				),
				None,
				None,
			));
		}

		if self.timeouts.connect_ms == 0 || self.timeouts.request_ms == 0 {
			return Err(ConfigError::validation_error(
				"Timeouts must be greater than zero",
				None,
				None,
			));
		}
		if self.keepalive.interval_ms == 0 || self.keepalive.timeout_ms == 0 {
			return Err(ConfigError::validation_error(
				"Keepalive interval and timeout must be greater than zero",
				None,
				None,
			));
		}

		Ok(())
	}

	fn validate_protocol(&self) {
		for endpoint in &self.endpoints {
			if endpoint.starts_with("http://") {
				tracing::warn!(
					endpoint = %endpoint,
					"Endpoint uses an insecure protocol, API keys are sent in clear text"
				);
			}
		}
	}
}
