//! Transfer pipeline error types.
//!
//! Failures after signing carry the transaction id: the transaction may still
//! land on-chain, so callers should treat them as an unknown outcome.

use crate::{
	services::{
		blockchain::{BlockChainError, TransportError},
		signer::SignerError,
	},
	utils::logging::error::{ErrorContext, TraceableError},
};
use std::collections::HashMap;
use thiserror::Error;

type BoxedSource = Option<Box<dyn std::error::Error + Send + Sync + 'static>>;

/// Errors of the transfer pipeline
#[derive(Debug, Error)]
pub enum TransferError {
	/// Missing or unusable client configuration
	#[error("Configuration error: {0}")]
	ConfigurationError(ErrorContext),

	/// The request itself is invalid, such as a negative or oversized amount
	#[error("Validation error: {0}")]
	ValidationError(ErrorContext),

	/// An address failed base58check decoding
	#[error("Address format error: {0}")]
	AddressFormatError(ErrorContext),

	/// The node refused to build the transaction or returned an unusable one
	#[error("Remote error: {0}")]
	RemoteError(ErrorContext),

	/// The node refused the signed transaction
	#[error("Broadcast of {txid} rejected: {context}")]
	RemoteRejection { txid: String, context: ErrorContext },

	/// The call failed in transport; `txid` is set when it was a broadcast
	#[error("Transport error: {source}")]
	TransportError {
		txid: Option<String>,
		#[source]
		source: TransportError,
	},

	/// The transaction could not be signed
	#[error("Signing error: {0}")]
	SigningError(#[from] SignerError),

	/// Transfers for this contract kind are not supported
	#[error("Unsupported contract: {0}")]
	UnsupportedContract(ErrorContext),
}

impl TransferError {
	pub fn configuration_error(
		msg: impl Into<String>,
		source: BoxedSource,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::ConfigurationError(ErrorContext::new_with_log(msg, source, metadata))
	}

	pub fn validation_error(
		msg: impl Into<String>,
		source: BoxedSource,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::ValidationError(ErrorContext::new_with_log(msg, source, metadata))
	}

	pub fn address_format_error(
		msg: impl Into<String>,
		source: BoxedSource,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::AddressFormatError(ErrorContext::new_with_log(msg, source, metadata))
	}

	pub fn remote_error(
		msg: impl Into<String>,
		source: BoxedSource,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::RemoteError(ErrorContext::new_with_log(msg, source, metadata))
	}

	pub fn remote_rejection(
		txid: impl Into<String>,
		msg: impl Into<String>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::RemoteRejection {
			txid: txid.into(),
			context: ErrorContext::new_with_log(msg, None, metadata),
		}
	}

	pub fn unsupported_contract(
		msg: impl Into<String>,
		source: BoxedSource,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::UnsupportedContract(ErrorContext::new_with_log(msg, source, metadata))
	}

	/// Maps a client failure of a broadcast, attaching the already computed id.
	pub fn from_broadcast(txid: &str, error: BlockChainError) -> Self {
		match Self::from(error) {
			Self::TransportError { source, .. } => Self::TransportError {
				txid: Some(txid.to_string()),
				source,
			},
			other => other,
		}
	}

	/// Id of a transaction whose outcome is unknown, if one was signed.
	pub fn txid(&self) -> Option<&str> {
		match self {
			Self::RemoteRejection { txid, .. } => Some(txid),
			Self::TransportError { txid, .. } => txid.as_deref(),
			_ => None,
		}
	}
}

impl From<TransportError> for TransferError {
	fn from(source: TransportError) -> Self {
		Self::TransportError { txid: None, source }
	}
}

impl From<BlockChainError> for TransferError {
	fn from(error: BlockChainError) -> Self {
		match error {
			BlockChainError::ConfigurationError(context) => Self::ConfigurationError(context),
			BlockChainError::TransportError(source) => source.into(),
			BlockChainError::Other(e) => {
				Self::RemoteError(ErrorContext::new(e.to_string(), Some(e.into()), None))
			}
		}
	}
}

impl TraceableError for TransferError {
	fn trace_id(&self) -> String {
		match self {
			Self::ConfigurationError(ctx) => ctx.trace_id.clone(),
			Self::ValidationError(ctx) => ctx.trace_id.clone(),
			Self::AddressFormatError(ctx) => ctx.trace_id.clone(),
			Self::RemoteError(ctx) => ctx.trace_id.clone(),
			Self::RemoteRejection { context, .. } => context.trace_id.clone(),
			Self::TransportError { source, .. } => source.trace_id(),
			Self::SigningError(e) => e.trace_id(),
			Self::UnsupportedContract(ctx) => ctx.trace_id.clone(),
		}
	}
}
