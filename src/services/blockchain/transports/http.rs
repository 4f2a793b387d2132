//! HTTP transport for the TRON wallet API.
//!
//! Requests go to the node held by the [`ConnectionManager`]. The rotated API key
//! travels in the `TRON-PRO-API-KEY` header. No request is retried: a failure is
//! returned as is. When it is connection-level, or the node answers with a status
//! in [`REDIAL_ON_STATUS`], the connection is marked shut down so that the next
//! call dials a fresh node.

use async_trait::async_trait;
use serde_json::Value;
use std::{collections::HashMap, sync::Arc, time::Duration};

use crate::{
	models::{ClientConfig, SecretString},
	services::blockchain::transports::{
		ConnectionManager, ConnectionSettings, NodeTransport, TransportError, REDIAL_ON_STATUS,
	},
};

/// Header carrying the API credential.
pub const API_KEY_HEADER: &str = "TRON-PRO-API-KEY";

/// Node transport over a shared, lazily dialed HTTP connection.
#[derive(Clone, Debug)]
pub struct HttpTransportClient {
	connections: Arc<ConnectionManager>,
	request_timeout: Duration,
}

impl HttpTransportClient {
	pub fn new(connections: Arc<ConnectionManager>) -> Self {
		let request_timeout = connections.settings().request_timeout;
		Self {
			connections,
			request_timeout,
		}
	}

	/// Builds the transport from the client configuration.
	pub fn from_config(config: &ClientConfig) -> Result<Self, TransportError> {
		let manager =
			ConnectionManager::new(&config.endpoints, ConnectionSettings::from_config(config))?;
		Ok(Self::new(Arc::new(manager)))
	}

	pub fn connections(&self) -> &Arc<ConnectionManager> {
		&self.connections
	}
}

#[async_trait]
impl NodeTransport for HttpTransportClient {
	async fn get_current_url(&self) -> String {
		self.connections.current_url().await.unwrap_or_default()
	}

	#[tracing::instrument(skip(self, body, api_key))]
	async fn send_request(
		&self,
		path: &str,
		body: Value,
		api_key: &SecretString,
	) -> Result<Value, TransportError> {
		let connection = self.connections.get_connection().await?;
		let url = connection.endpoint(path);
		let metadata = || Some(HashMap::from([("url".to_string(), url.clone())]));

		let request = connection
			.client()
			.post(&url)
			.header(API_KEY_HEADER, api_key.as_str())
			.json(&body);

		let exchange = async {
			let response = request.send().await?;
			let status = response.status();
			let text = response.text().await?;
			Ok::<_, reqwest::Error>((status, text))
		};

		let (status, text) = match tokio::time::timeout(self.request_timeout, exchange).await {
			Ok(Ok(outcome)) => outcome,
			Ok(Err(e)) => {
				if e.is_connect() {
					connection.mark_shutdown();
				}
				if e.is_timeout() {
					return Err(TransportError::timeout(
						format!("Request timed out: {}", e),
						Some(Box::new(e)),
						metadata(),
					));
				}
				return Err(TransportError::network(
					format!("Failed to send request: {}", e),
					Some(Box::new(e)),
					metadata(),
				));
			}
			Err(_) => {
				connection.mark_shutdown();
				return Err(TransportError::timeout(
					format!(
						"Request did not complete within {}ms",
						self.request_timeout.as_millis()
					),
					None,
					metadata(),
				));
			}
		};

		if !status.is_success() {
			if REDIAL_ON_STATUS.contains(&status.as_u16()) {
				connection.mark_shutdown();
			}
			return Err(TransportError::http(status, url.clone(), text, None, None));
		}

		serde_json::from_str(&text).map_err(|e| {
			TransportError::response_parse(
				format!("Failed to parse node response: {}", e),
				Some(Box::new(e)),
				metadata(),
			)
		})
	}
}
