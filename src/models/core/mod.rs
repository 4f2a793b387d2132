//! Core domain models.
//!
//! - Client: settings of the transfer client
//! - Contract: contract kinds and configured contract descriptors
//! - Transfer: a single transfer request

mod client;
mod contract;
mod transfer;

pub use client::{
	ClientConfig, KeepaliveConfig, TimeoutConfig, DEFAULT_FEE_LIMIT, DEFAULT_NATIVE_DECIMALS,
};
pub use contract::{ContractDescriptor, ContractKind, NATIVE_SENTINEL, UNKNOWN_CONTRACT_DECIMALS};
pub use transfer::TransferRequest;
