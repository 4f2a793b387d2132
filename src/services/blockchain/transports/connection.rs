//! Shared connection to a full node.
//!
//! [`ConnectionManager`] holds at most one [`NodeConnection`]. It is reused until a
//! connection-level failure marks it shut down; the next caller then dials a new
//! node chosen uniformly at random from the endpoint pool. Two callers racing on
//! a shut down connection may both dial, in which case the last one stored wins.

use rand::seq::IndexedRandom;
use serde_json::json;
use std::{
	collections::HashMap,
	sync::{
		atomic::{AtomicBool, Ordering},
		Arc,
	},
	time::Duration,
};
use tokio::sync::RwLock;
use url::Url;

use crate::{models::ClientConfig, services::blockchain::transports::TransportError};

/// Cheap read-only call used to confirm a node is reachable.
pub const DIAL_PROBE_PATH: &str = "/wallet/getnodeinfo";

/// Timeouts and keepalive probing applied to every connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionSettings {
	/// Bound of a single dial attempt
	pub connect_timeout: Duration,
	/// Deadline of every remote call
	pub request_timeout: Duration,
	/// Interval of TCP and HTTP/2 keepalive probes
	pub keepalive_interval: Duration,
	/// Time to wait for a keepalive acknowledgement
	pub keepalive_timeout: Duration,
}

impl ConnectionSettings {
	pub fn from_config(config: &ClientConfig) -> Self {
		Self {
			connect_timeout: config.timeouts.connect(),
			request_timeout: config.timeouts.request(),
			keepalive_interval: config.keepalive.interval(),
			keepalive_timeout: config.keepalive.timeout(),
		}
	}
}

impl Default for ConnectionSettings {
	fn default() -> Self {
		Self {
			connect_timeout: Duration::from_secs(5),
			request_timeout: Duration::from_secs(30),
			keepalive_interval: Duration::from_secs(10),
			keepalive_timeout: Duration::from_secs(20),
		}
	}
}

/// An HTTP client bound to one node.
#[derive(Debug)]
pub struct NodeConnection {
	url: Url,
	client: reqwest::Client,
	shutdown: AtomicBool,
}

impl NodeConnection {
	pub fn url(&self) -> &Url {
		&self.url
	}

	pub fn client(&self) -> &reqwest::Client {
		&self.client
	}

	/// Absolute URL of `path` on this node, keeping any path prefix of the endpoint.
	pub fn endpoint(&self, path: &str) -> String {
		join_path(&self.url, path)
	}

	pub fn is_shutdown(&self) -> bool {
		self.shutdown.load(Ordering::Acquire)
	}

	/// Flags the connection as unusable so the next caller dials again.
	pub fn mark_shutdown(&self) {
		if !self.shutdown.swap(true, Ordering::AcqRel) {
			tracing::warn!(endpoint = %self.url, "Node connection marked as shut down");
		}
	}
}

fn join_path(base: &Url, path: &str) -> String {
	format!(
		"{}/{}",
		base.as_str().trim_end_matches('/'),
		path.trim_start_matches('/')
	)
}

/// Owns the shared node connection and the pool it is dialed from.
#[derive(Debug)]
pub struct ConnectionManager {
	endpoints: Vec<Url>,
	settings: ConnectionSettings,
	current: RwLock<Option<Arc<NodeConnection>>>,
}

impl ConnectionManager {
	/// Creates a manager over `endpoints`. Nothing is dialed until first use.
	pub fn new(endpoints: &[String], settings: ConnectionSettings) -> Result<Self, TransportError> {
		if endpoints.is_empty() {
			return Err(TransportError::dial(
				"No node endpoints configured",
				None,
				None,
			));
		}

		let endpoints = endpoints
			.iter()
			.map(|endpoint| {
				Url::parse(endpoint).map_err(|e| {
					TransportError::dial(
						format!("Invalid node endpoint: {}", e),
						Some(Box::new(e)),
						Some(HashMap::from([("endpoint".to_string(), endpoint.clone())])),
					)
				})
			})
			.collect::<Result<Vec<_>, _>>()?;

		Ok(Self {
			endpoints,
			settings,
			current: RwLock::new(None),
		})
	}

	pub fn settings(&self) -> &ConnectionSettings {
		&self.settings
	}

	/// URL of the connection currently held, if any.
	pub async fn current_url(&self) -> Option<String> {
		self.current
			.read()
			.await
			.as_ref()
			.map(|connection| connection.url.to_string())
	}

	/// Returns the shared connection, dialing a new one if there is none or the
	/// held one has been shut down.
	///
	/// A single dial attempt is made; its failure is returned to the caller. A node
	/// whose probe answers with a server error counts as unreachable, while client
	/// errors such as 401 still prove it is up.
	pub async fn get_connection(&self) -> Result<Arc<NodeConnection>, TransportError> {
		if let Some(connection) = self.current.read().await.as_ref() {
			if !connection.is_shutdown() {
				return Ok(connection.clone());
			}
		}

		let connection = Arc::new(self.dial().await?);
		*self.current.write().await = Some(connection.clone());
		Ok(connection)
	}

	async fn dial(&self) -> Result<NodeConnection, TransportError> {
		let url = self
			.endpoints
			.choose(&mut rand::rng())
			.cloned()
			.ok_or_else(|| TransportError::dial("No node endpoints configured", None, None))?;
		let metadata = || Some(HashMap::from([("endpoint".to_string(), url.to_string())]));

		let client = reqwest::Client::builder()
			.connect_timeout(self.settings.connect_timeout)
			.tcp_keepalive(self.settings.keepalive_interval)
			.http2_keep_alive_interval(self.settings.keepalive_interval)
			.http2_keep_alive_timeout(self.settings.keepalive_timeout)
			.http2_keep_alive_while_idle(true)
			.pool_idle_timeout(Duration::from_secs(90))
			.build()
			.map_err(|e| {
				TransportError::dial("Failed to create HTTP client", Some(Box::new(e)), metadata())
			})?;

		tracing::debug!(endpoint = %url, "Dialing node");
		let response = client
			.post(join_path(&url, DIAL_PROBE_PATH))
			.json(&json!({}))
			.timeout(self.settings.connect_timeout)
			.send()
			.await
			.map_err(|e| {
				TransportError::dial(
					format!("Failed to reach node: {}", e),
					Some(Box::new(e)),
					metadata(),
				)
			})?;

		let status = response.status();
		if status.is_server_error() {
			return Err(TransportError::dial(
				format!("Node answered the dial probe with {}", status),
				None,
				Some(HashMap::from([
					("endpoint".to_string(), url.to_string()),
					("status".to_string(), status.as_u16().to_string()),
				])),
			));
		}

		tracing::info!(endpoint = %url, status = %status, "Connected to node");
		Ok(NodeConnection {
			url,
			client,
			shutdown: AtomicBool::new(false),
		})
	}
}
