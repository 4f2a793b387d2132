//! Test helper utilities for contract descriptors
//!
//! - `ContractDescriptorBuilder`: Builder for creating test ContractDescriptor instances

use crate::models::ContractDescriptor;

/// Mainnet USDT, a TRC20 token with 6 decimals.
pub const USDT_CONTRACT: &str = "TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t";

/// Builder for creating test ContractDescriptor instances
pub struct ContractDescriptorBuilder {
	address: String,
	kind: String,
	decimals: i32,
	name: String,
}

impl Default for ContractDescriptorBuilder {
	fn default() -> Self {
		Self {
			address: USDT_CONTRACT.to_string(),
			kind: "trc20".to_string(),
			decimals: 6,
			name: "usdt".to_string(),
		}
	}
}

impl ContractDescriptorBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn address(mut self, address: &str) -> Self {
		self.address = address.to_string();
		self
	}

	pub fn kind(mut self, kind: &str) -> Self {
		self.kind = kind.to_string();
		self
	}

	pub fn decimals(mut self, decimals: i32) -> Self {
		self.decimals = decimals;
		self
	}

	pub fn name(mut self, name: &str) -> Self {
		self.name = name.to_string();
		self
	}

	pub fn build(self) -> ContractDescriptor {
		ContractDescriptor {
			address: self.address,
			kind: self.kind,
			decimals: self.decimals,
			name: self.name,
		}
	}
}
