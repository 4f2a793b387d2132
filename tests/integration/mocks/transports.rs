use async_trait::async_trait;
use mockall::mock;
use serde_json::Value;

use tron_transfer::{
	models::SecretString,
	services::blockchain::{NodeTransport, TransportError},
};

mock! {
	/// Mock node transport.
	///
	/// Records the path, body and credential of every request.
	pub NodeTransport {}

	#[async_trait]
	impl NodeTransport for NodeTransport {
		async fn get_current_url(&self) -> String;
		async fn send_request(
			&self,
			path: &str,
			body: Value,
			api_key: &SecretString,
		) -> Result<Value, TransportError>;
	}
}
