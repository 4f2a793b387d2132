//! Errors raised while resolving secrets.

use crate::utils::logging::error::{ErrorContext, TraceableError};
use std::collections::HashMap;
use thiserror::Error as ThisError;
use uuid::Uuid;

/// Result type alias for security operations
pub type SecurityResult<T> = Result<T, Box<SecurityError>>;

#[derive(ThisError, Debug)]
pub enum SecurityError {
	/// A secret failed validation (for example it resolved to an empty value)
	#[error("Validation error: {0}")]
	ValidationError(ErrorContext),

	/// A secret reference could not be read
	#[error("Parse error: {0}")]
	ParseError(ErrorContext),

	#[error(transparent)]
	Other(#[from] anyhow::Error),
}

impl SecurityError {
	pub fn validation_error(
		msg: impl Into<String>,
		source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::ValidationError(ErrorContext::new_with_log(msg, source, metadata))
	}

	pub fn parse_error(
		msg: impl Into<String>,
		source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::ParseError(ErrorContext::new_with_log(msg, source, metadata))
	}
}

impl TraceableError for SecurityError {
	fn trace_id(&self) -> String {
		match self {
			Self::ValidationError(ctx) => ctx.trace_id.clone(),
			Self::ParseError(ctx) => ctx.trace_id.clone(),
			Self::Other(_) => Uuid::new_v4().to_string(),
		}
	}
}
