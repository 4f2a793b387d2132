//! Bootstrap module for loading configuration and wiring the transfer service.
//!
//! The contract registry is filled here, before the service exists, and is never
//! written again.

use k256::ecdsa::SigningKey;
use std::{error::Error, path::Path, sync::Arc};
use zeroize::Zeroizing;

use crate::{
	models::{ClientConfig, ConfigLoader, SecretString, SecurityError, SecurityResult},
	repositories::ContractRepository,
	services::{
		blockchain::{HttpTransportClient, TronClient},
		transfer::TransferService,
	},
};

/// Type alias for handling ServiceResult
pub type Result<T> = std::result::Result<T, Box<dyn Error>>;

/// Transfer service over the HTTP wallet API.
pub type HttpTransferService = TransferService<TronClient<HttpTransportClient>, ContractRepository>;

/// Environment variable holding the hex-encoded signing key.
pub const PRIVATE_KEY_ENV: &str = "TRON_PRIVATE_KEY";

/// Loads and validates the client configuration at `path`.
pub async fn load_config(path: &Path) -> Result<ClientConfig> {
	Ok(ClientConfig::load_from_path(path).await?)
}

/// Builds the contract registry and node client described by `config`.
///
/// # Errors
/// Returns an error if a contract descriptor is invalid or the endpoint pool is unusable
pub fn initialize_services(config: &ClientConfig) -> Result<Arc<HttpTransferService>> {
	let registry = ContractRepository::new(config.native_decimals, &config.contracts)?;
	let client = TronClient::new(config)?;

	tracing::info!(
		endpoints = config.endpoints.len(),
		api_keys = config.api_keys.len(),
		contracts = registry.contracts.len(),
		"Transfer service initialized"
	);

	Ok(Arc::new(TransferService::new(
		Arc::new(client),
		Arc::new(registry),
		config.fee_limit,
	)))
}

/// Parses a hex-encoded secp256k1 secret, with or without a `0x` prefix.
pub fn parse_signing_key(secret: &SecretString) -> SecurityResult<SigningKey> {
	let raw = secret.as_str().trim();
	let raw = raw.strip_prefix("0x").unwrap_or(raw);

	let bytes = Zeroizing::new(hex::decode(raw).map_err(|e| {
		Box::new(SecurityError::parse_error(
			"Signing key is not valid hex",
			Some(Box::new(e)),
			None,
		))
	})?);
	SigningKey::from_slice(&bytes).map_err(|e| {
		Box::new(SecurityError::validation_error(
			"Signing key is not a valid secp256k1 scalar",
			Some(Box::new(e)),
			None,
		))
	})
}
