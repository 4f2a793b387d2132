//! Contract registry.
//!
//! Maps contract addresses to their kind and decimal precision. The registry is
//! filled during bootstrap and only read afterwards, so it is shared behind an
//! `Arc` without locking.

#![allow(clippy::result_large_err)]

use std::collections::HashMap;

use crate::{
	models::{ContractDescriptor, ContractKind, NATIVE_SENTINEL, UNKNOWN_CONTRACT_DECIMALS},
	repositories::error::RepositoryError,
};

/// A validated registry entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractEntry {
	pub kind: ContractKind,
	pub decimals: i32,
	pub name: String,
}

/// In-memory contract registry
#[derive(Debug, Clone)]
pub struct ContractRepository {
	/// Entries keyed by contract address
	pub contracts: HashMap<String, ContractEntry>,
	native_decimals: i32,
}

impl ContractRepository {
	/// Creates a registry holding `descriptors`.
	pub fn new(
		native_decimals: i32,
		descriptors: &[ContractDescriptor],
	) -> Result<Self, RepositoryError> {
		let mut repository = Self {
			contracts: HashMap::new(),
			native_decimals,
		};
		repository.register(descriptors)?;
		Ok(repository)
	}
}

/// Interface for contract registries
pub trait ContractRepositoryTrait: Clone + Send + Sync {
	/// Adds `descriptors`, replacing entries with the same address.
	///
	/// Every descriptor is checked first; if any declares an unrecognized kind
	/// nothing is registered.
	fn register(&mut self, descriptors: &[ContractDescriptor]) -> Result<(), RepositoryError>;

	/// Returns the kind and decimals of `address`.
	///
	/// An empty address or the native sentinel is the native coin. Addresses
	/// that are not registered yield `(Unknown, 18)`.
	fn classify(&self, address: &str) -> (ContractKind, i32);

	/// Returns the entry registered for `address`.
	fn get(&self, address: &str) -> Option<ContractEntry>;

	/// Returns a copy of all entries.
	fn get_all(&self) -> HashMap<String, ContractEntry>;
}

impl ContractRepositoryTrait for ContractRepository {
	fn register(&mut self, descriptors: &[ContractDescriptor]) -> Result<(), RepositoryError> {
		let mut validated = Vec::with_capacity(descriptors.len());
		for descriptor in descriptors {
			let kind = descriptor.kind.parse::<ContractKind>().map_err(|e| {
				RepositoryError::validation_error(
					format!("the contract type {} does not exist", descriptor.kind),
					Some(e.into()),
					Some(HashMap::from([
						("address".to_string(), descriptor.address.clone()),
						("kind".to_string(), descriptor.kind.clone()),
					])),
				)
			})?;
			validated.push((
				descriptor.address.trim().to_string(),
				ContractEntry {
					kind,
					decimals: descriptor.decimals,
					name: descriptor.name.clone(),
				},
			));
		}

		for (address, entry) in validated {
			tracing::debug!(address = %address, kind = %entry.kind, "Registered contract");
			self.contracts.insert(address, entry);
		}
		Ok(())
	}

	fn classify(&self, address: &str) -> (ContractKind, i32) {
		let address = address.trim();
		if address.is_empty() || address.eq_ignore_ascii_case(NATIVE_SENTINEL) {
			return (ContractKind::Native, self.native_decimals);
		}

		match self.contracts.get(address) {
			Some(entry) => (entry.kind, entry.decimals),
			None => (ContractKind::Unknown, UNKNOWN_CONTRACT_DECIMALS),
		}
	}

	fn get(&self, address: &str) -> Option<ContractEntry> {
		self.contracts.get(address.trim()).cloned()
	}

	fn get_all(&self) -> HashMap<String, ContractEntry> {
		self.contracts.clone()
	}
}
