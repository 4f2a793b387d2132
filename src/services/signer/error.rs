//! Signer error types.

use crate::utils::logging::error::{ErrorContext, TraceableError};
use std::collections::HashMap;
use thiserror::Error;

/// Errors raised while signing a transaction
#[derive(Debug, Error)]
pub enum SignerError {
	/// The transaction lacks a field needed to sign it
	#[error("Malformed transaction: {0}")]
	MalformedTransaction(ErrorContext),

	/// The transaction is owned by an account other than the signing key's
	#[error("Key mismatch: {0}")]
	KeyMismatch(ErrorContext),

	/// The signature primitive failed
	#[error("Signature failed: {0}")]
	SignatureFailed(ErrorContext),
}

impl SignerError {
	pub fn malformed_transaction(
		msg: impl Into<String>,
		source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::MalformedTransaction(ErrorContext::new_with_log(msg, source, metadata))
	}

	pub fn key_mismatch(
		msg: impl Into<String>,
		source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::KeyMismatch(ErrorContext::new_with_log(msg, source, metadata))
	}

	pub fn signature_failed(
		msg: impl Into<String>,
		source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::SignatureFailed(ErrorContext::new_with_log(msg, source, metadata))
	}
}

impl TraceableError for SignerError {
	fn trace_id(&self) -> String {
		match self {
			Self::MalformedTransaction(ctx) => ctx.trace_id.clone(),
			Self::KeyMismatch(ctx) => ctx.trace_id.clone(),
			Self::SignatureFailed(ctx) => ctx.trace_id.clone(),
		}
	}
}
