//! Test helper utilities for client configuration
//!
//! - `ClientConfigBuilder`: Builder for creating test ClientConfig instances

use crate::models::{
	ClientConfig, ContractDescriptor, KeepaliveConfig, SecretString, SecretValue, TimeoutConfig,
	DEFAULT_FEE_LIMIT, DEFAULT_NATIVE_DECIMALS,
};

/// Builder for creating test ClientConfig instances
pub struct ClientConfigBuilder {
	endpoints: Vec<String>,
	api_keys: Vec<SecretValue>,
	native_decimals: i32,
	fee_limit: i64,
	timeouts: TimeoutConfig,
	keepalive: KeepaliveConfig,
	contracts: Vec<ContractDescriptor>,
}

impl Default for ClientConfigBuilder {
	fn default() -> Self {
		Self {
			endpoints: vec!["https://api.shasta.trongrid.io".to_string()],
			api_keys: vec![SecretValue::Plain(SecretString::new("test-key".to_string()))],
			native_decimals: DEFAULT_NATIVE_DECIMALS,
			fee_limit: DEFAULT_FEE_LIMIT,
			timeouts: TimeoutConfig::default(),
			keepalive: KeepaliveConfig::default(),
			contracts: Vec::new(),
		}
	}
}

impl ClientConfigBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn endpoint(mut self, endpoint: &str) -> Self {
		self.endpoints = vec![endpoint.to_string()];
		self
	}

	pub fn endpoints(mut self, endpoints: Vec<String>) -> Self {
		self.endpoints = endpoints;
		self
	}

	pub fn api_keys(mut self, keys: &[&str]) -> Self {
		self.api_keys = keys
			.iter()
			.map(|key| SecretValue::Plain(SecretString::new(key.to_string())))
			.collect();
		self
	}

	pub fn native_decimals(mut self, decimals: i32) -> Self {
		self.native_decimals = decimals;
		self
	}

	pub fn fee_limit(mut self, fee_limit: i64) -> Self {
		self.fee_limit = fee_limit;
		self
	}

	pub fn request_timeout_ms(mut self, timeout_ms: u64) -> Self {
		self.timeouts.request_ms = timeout_ms;
		self
	}

	pub fn connect_timeout_ms(mut self, timeout_ms: u64) -> Self {
		self.timeouts.connect_ms = timeout_ms;
		self
	}

	pub fn contract(mut self, contract: ContractDescriptor) -> Self {
		self.contracts.push(contract);
		self
	}

	pub fn build(self) -> ClientConfig {
		ClientConfig {
			endpoints: self.endpoints,
			api_keys: self.api_keys,
			native_decimals: self.native_decimals,
			fee_limit: self.fee_limit,
			timeouts: self.timeouts,
			keepalive: self.keepalive,
			contracts: self.contracts,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{models::ConfigLoader, utils::tests::builders::contract::ContractDescriptorBuilder};

	#[test]
	fn test_default_config_is_valid() {
		let config = ClientConfigBuilder::new().build();
		assert_eq!(config.endpoints, vec!["https://api.shasta.trongrid.io"]);
		assert_eq!(config.api_keys.len(), 1);
		assert!(config.validate().is_ok());
	}

	#[test]
	fn test_builder_overrides() {
		let config = ClientConfigBuilder::new()
			.endpoint("http://127.0.0.1:8090")
			.api_keys(&["a", "b"])
			.fee_limit(5_000_000)
			.request_timeout_ms(250)
			.contract(ContractDescriptorBuilder::new().build())
			.build();

		assert_eq!(config.api_keys.len(), 2);
		assert_eq!(config.fee_limit, 5_000_000);
		assert_eq!(config.timeouts.request_ms, 250);
		assert_eq!(config.contracts.len(), 1);
	}
}
