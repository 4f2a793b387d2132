use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::models::{ContractDescriptor, SecretValue};

/// Number of decimals of TRX.
pub const DEFAULT_NATIVE_DECIMALS: i32 = 6;

/// Energy fee cap for token transfers, in sun.
pub const DEFAULT_FEE_LIMIT: i64 = 40_000_000;

/// Settings of the transfer client, loaded from `config/client.json`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
	/// Full-node HTTP endpoints; one is picked at random per connection
	pub endpoints: Vec<String>,

	/// API credentials rotated round-robin across calls
	pub api_keys: Vec<SecretValue>,

	#[serde(default = "default_native_decimals")]
	pub native_decimals: i32,

	/// Maximum sun a token transfer may burn; zero keeps the node default
	#[serde(default = "default_fee_limit")]
	pub fee_limit: i64,

	#[serde(default)]
	pub timeouts: TimeoutConfig,

	#[serde(default)]
	pub keepalive: KeepaliveConfig,

	/// Contracts known to the registry
	#[serde(default)]
	pub contracts: Vec<ContractDescriptor>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct TimeoutConfig {
	/// Connect timeout of a single dial attempt
	pub connect_ms: u64,
	/// Deadline of every remote call
	pub request_ms: u64,
}

impl Default for TimeoutConfig {
	fn default() -> Self {
		Self {
			connect_ms: 5_000,
			request_ms: 30_000,
		}
	}
}

impl TimeoutConfig {
	pub fn connect(&self) -> Duration {
		Duration::from_millis(self.connect_ms)
	}

	pub fn request(&self) -> Duration {
		Duration::from_millis(self.request_ms)
	}
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct KeepaliveConfig {
	/// Interval between HTTP/2 pings on an idle connection
	pub interval_ms: u64,
	/// How long to wait for a ping acknowledgement
	pub timeout_ms: u64,
}

impl Default for KeepaliveConfig {
	fn default() -> Self {
		Self {
			interval_ms: 10_000,
			timeout_ms: 20_000,
		}
	}
}

impl KeepaliveConfig {
	pub fn interval(&self) -> Duration {
		Duration::from_millis(self.interval_ms)
	}

	pub fn timeout(&self) -> Duration {
		Duration::from_millis(self.timeout_ms)
	}
}

fn default_native_decimals() -> i32 {
	DEFAULT_NATIVE_DECIMALS
}

fn default_fee_limit() -> i64 {
	DEFAULT_FEE_LIMIT
}
