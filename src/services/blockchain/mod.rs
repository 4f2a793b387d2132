//! Access to TRON full nodes.
//!
//! - `transports`: the shared node connection and HTTP transport
//! - `credentials`: API key rotation
//! - `clients`: wallet API client built on the two above

mod clients;
mod credentials;
mod error;
mod transports;

pub use clients::{
	TronClient, TronClientTrait, BROADCAST_HEX_PATH, CREATE_TRANSACTION_PATH,
	TRIGGER_SMART_CONTRACT_PATH,
};
pub use credentials::CredentialRotator;
pub use error::BlockChainError;
pub use transports::{
	ConnectionManager, ConnectionSettings, HttpTransportClient, NodeConnection, NodeTransport,
	TransportError, API_KEY_HEADER, DIAL_PROBE_PATH, REDIAL_ON_STATUS,
};
