//! Errors of the node client.

use crate::{
	services::blockchain::transports::TransportError,
	utils::logging::error::{ErrorContext, TraceableError},
};
use std::collections::HashMap;
use thiserror::Error as ThisError;
use uuid::Uuid;

/// Represents possible errors that can occur while talking to a node
#[derive(ThisError, Debug)]
pub enum BlockChainError {
	/// The client is missing something it needs, such as API credentials
	#[error("Configuration error: {0}")]
	ConfigurationError(ErrorContext),

	/// The request could not be delivered or its response could not be read
	#[error(transparent)]
	TransportError(#[from] TransportError),

	/// Other errors that don't fit into the categories above
	#[error(transparent)]
	Other(#[from] anyhow::Error),
}

impl BlockChainError {
	pub fn configuration_error(
		msg: impl Into<String>,
		source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::ConfigurationError(ErrorContext::new_with_log(msg, source, metadata))
	}
}

impl TraceableError for BlockChainError {
	fn trace_id(&self) -> String {
		match self {
			Self::ConfigurationError(ctx) => ctx.trace_id.clone(),
			Self::TransportError(err) => err.trace_id(),
			Self::Other(_) => Uuid::new_v4().to_string(),
		}
	}
}
