//! Transport to TRON full nodes over the HTTP wallet API.
//!
//! - `connection`: the shared node connection and its manager
//! - `http`: [`NodeTransport`] implementation on top of the connection manager

mod connection;
mod error;
mod http;

pub use connection::{ConnectionManager, ConnectionSettings, NodeConnection, DIAL_PROBE_PATH};
pub use error::TransportError;
pub use http::{HttpTransportClient, API_KEY_HEADER};

use crate::models::SecretString;
use serde_json::Value;

/// HTTP statuses after which the current node is abandoned and the next call redials
/// - 429: Too Many Requests, the node is rate limiting this client
/// - 502, 503, 504: a gateway in front of the node cannot reach it
pub const REDIAL_ON_STATUS: [u16; 4] = [429, 502, 503, 504];

/// Base trait for node transports
#[async_trait::async_trait]
pub trait NodeTransport: Send + Sync {
	/// URL of the node currently in use, or an empty string before the first call
	async fn get_current_url(&self) -> String;

	/// POSTs `body` to `path` on the current node with `api_key` attached.
	///
	/// Every call is bounded by the request deadline.
	async fn send_request(
		&self,
		path: &str,
		body: Value,
		api_key: &SecretString,
	) -> Result<Value, TransportError>;
}
