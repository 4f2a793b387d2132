//! TRON account and contract addresses.
//!
//! An address is 21 bytes: the `0x41` network version followed by the last
//! 20 bytes of the keccak-256 hash of the uncompressed public key. Users see the
//! base58check form (`T...`), node requests carry the hex form (`41...`).

use alloy::primitives::keccak256;
use k256::ecdsa::VerifyingKey;
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Version byte of mainnet and testnet addresses.
pub const ADDRESS_VERSION: u8 = 0x41;

/// Length of a decoded address including the version byte.
pub const ADDRESS_LENGTH: usize = 21;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AddressError {
	#[error("invalid base58check address '{input}': {reason}")]
	Encoding { input: String, reason: String },

	#[error("invalid hex address '{0}'")]
	Hex(String),

	#[error("decoded address must be 21 bytes, got {0}")]
	Length(usize),

	#[error("unexpected address version byte 0x{0:02x}")]
	Version(u8),
}

/// A decoded TRON address.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TronAddress([u8; ADDRESS_LENGTH]);

impl TronAddress {
	/// Validates raw address bytes, version byte included.
	pub fn from_bytes(bytes: &[u8]) -> Result<Self, AddressError> {
		let raw: [u8; ADDRESS_LENGTH] = bytes
			.try_into()
			.map_err(|_| AddressError::Length(bytes.len()))?;
		if raw[0] != ADDRESS_VERSION {
			return Err(AddressError::Version(raw[0]));
		}
		Ok(Self(raw))
	}

	/// Decodes the base58check form, rejecting checksum mismatches.
	pub fn from_base58(input: &str) -> Result<Self, AddressError> {
		let bytes = bs58::decode(input.trim())
			.with_check(None)
			.into_vec()
			.map_err(|e| AddressError::Encoding {
				input: input.to_string(),
				reason: e.to_string(),
			})?;
		Self::from_bytes(&bytes)
	}

	/// Decodes the hex form, with or without a `0x` prefix.
	pub fn from_hex(input: &str) -> Result<Self, AddressError> {
		let trimmed = input.trim();
		let digits = trimmed.strip_prefix("0x").unwrap_or(trimmed);
		let bytes = hex::decode(digits).map_err(|_| AddressError::Hex(input.to_string()))?;
		Self::from_bytes(&bytes)
	}

	/// Derives the address controlled by `key`.
	pub fn from_verifying_key(key: &VerifyingKey) -> Self {
		let public_key = key.to_encoded_point(false);
		let hash = keccak256(&public_key.as_bytes()[1..]);

		let mut raw = [0u8; ADDRESS_LENGTH];
		raw[0] = ADDRESS_VERSION;
		raw[1..].copy_from_slice(&hash[12..]);
		Self(raw)
	}

	pub fn as_bytes(&self) -> &[u8] {
		&self.0
	}

	/// The 20 address bytes without the version prefix, as used in ABI arguments.
	pub fn account_bytes(&self) -> &[u8] {
		&self.0[1..]
	}

	pub fn to_base58(&self) -> String {
		bs58::encode(self.0).with_check().into_string()
	}

	pub fn to_hex(&self) -> String {
		hex::encode(self.0)
	}
}

impl FromStr for TronAddress {
	type Err = AddressError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::from_base58(s)
	}
}

impl fmt::Display for TronAddress {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.to_base58())
	}
}

impl fmt::Debug for TronAddress {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "TronAddress({})", self.to_base58())
	}
}
