//! TRON full-node client.
//!
//! Wraps a [`NodeTransport`] and a [`CredentialRotator`]. Each remote call takes
//! the next credential from the rotator, so an empty pool fails before anything
//! is sent. Responses are returned as the node sent them; deciding whether a
//! response means success is left to the caller.

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use std::{collections::HashMap, sync::Arc};
use tracing::instrument;

use crate::{
	models::{
		BroadcastHexRequest, BroadcastResponse, ClientConfig, CreateTransactionRequest,
		NodeTransaction, SignedTransaction, TriggerSmartContractRequest,
		TriggerSmartContractResponse, TronAddress,
	},
	services::blockchain::{
		credentials::CredentialRotator,
		transports::{HttpTransportClient, NodeTransport, TransportError},
		BlockChainError,
	},
};

pub const CREATE_TRANSACTION_PATH: &str = "/wallet/createtransaction";
pub const TRIGGER_SMART_CONTRACT_PATH: &str = "/wallet/triggersmartcontract";
pub const BROADCAST_HEX_PATH: &str = "/wallet/broadcasthex";

/// Client for the wallet API of a TRON full node
#[derive(Clone)]
pub struct TronClient<T: NodeTransport> {
	/// The underlying transport to the node
	transport: T,
	/// API keys attached to outgoing calls in turn
	credentials: Arc<CredentialRotator>,
}

impl<T: NodeTransport> TronClient<T> {
	/// Creates a new client over a specific transport
	pub fn new_with_transport(transport: T, credentials: Arc<CredentialRotator>) -> Self {
		Self {
			transport,
			credentials,
		}
	}

	pub fn transport(&self) -> &T {
		&self.transport
	}

	async fn call<B, R>(&self, path: &str, body: &B) -> Result<R, BlockChainError>
	where
		B: Serialize + Sync,
		R: DeserializeOwned,
	{
		let metadata = || Some(HashMap::from([("path".to_string(), path.to_string())]));

		let body = serde_json::to_value(body).map_err(|e| {
			TransportError::request_serialization(
				"Failed to serialize request body",
				Some(Box::new(e)),
				metadata(),
			)
		})?;
		let api_key = self.credentials.next()?;

		let response = self.transport.send_request(path, body, &api_key).await?;
		serde_json::from_value(response).map_err(|e| {
			TransportError::response_parse(
				format!("Unexpected response shape: {}", e),
				Some(Box::new(e)),
				metadata(),
			)
			.into()
		})
	}
}

impl TronClient<HttpTransportClient> {
	/// Creates a client from the configuration
	///
	/// Nothing is dialed here; the first call connects.
	pub fn new(config: &ClientConfig) -> Result<Self, BlockChainError> {
		let transport = HttpTransportClient::from_config(config)?;
		let credentials = config
			.api_keys
			.iter()
			.map(|key| key.as_plain())
			.collect::<Option<Vec<_>>>()
			.ok_or_else(|| {
				BlockChainError::configuration_error(
					"API keys must be resolved before creating a client",
					None,
					None,
				)
			})?;
		Ok(Self::new_with_transport(
			transport,
			Arc::new(CredentialRotator::new(credentials)),
		))
	}
}

/// Wallet API calls used by the transfer pipeline
#[async_trait]
pub trait TronClientTrait: Send + Sync {
	/// Asks the node to build an unsigned native transfer
	///
	/// # Arguments
	/// * `owner` - Sending account, derived from the signing key
	/// * `to` - Receiving account
	/// * `amount` - Amount in sun
	async fn create_transaction(
		&self,
		owner: &TronAddress,
		to: &TronAddress,
		amount: i64,
	) -> Result<NodeTransaction, BlockChainError>;

	/// Asks the node to build an unsigned contract call
	///
	/// # Arguments
	/// * `owner` - Calling account, derived from the signing key
	/// * `contract` - Contract being called
	/// * `data` - Selector and ABI-encoded arguments
	async fn trigger_smart_contract(
		&self,
		owner: &TronAddress,
		contract: &TronAddress,
		data: &[u8],
	) -> Result<TriggerSmartContractResponse, BlockChainError>;

	/// Submits a signed transaction to the network
	async fn broadcast_transaction(
		&self,
		transaction: &SignedTransaction,
	) -> Result<BroadcastResponse, BlockChainError>;
}

#[async_trait]
impl<T: NodeTransport> TronClientTrait for TronClient<T> {
	#[instrument(skip(self, owner, to), fields(owner = %owner, to = %to))]
	async fn create_transaction(
		&self,
		owner: &TronAddress,
		to: &TronAddress,
		amount: i64,
	) -> Result<NodeTransaction, BlockChainError> {
		let request = CreateTransactionRequest {
			owner_address: owner.to_hex(),
			to_address: to.to_hex(),
			amount,
			visible: false,
		};
		self.call(CREATE_TRANSACTION_PATH, &request).await
	}

	#[instrument(skip(self, owner, contract, data), fields(owner = %owner, contract = %contract))]
	async fn trigger_smart_contract(
		&self,
		owner: &TronAddress,
		contract: &TronAddress,
		data: &[u8],
	) -> Result<TriggerSmartContractResponse, BlockChainError> {
		let request = TriggerSmartContractRequest {
			owner_address: owner.to_hex(),
			contract_address: contract.to_hex(),
			data: hex::encode(data),
			call_value: 0,
			visible: false,
		};
		self.call(TRIGGER_SMART_CONTRACT_PATH, &request).await
	}

	#[instrument(skip_all, fields(txid = %transaction.txid()))]
	async fn broadcast_transaction(
		&self,
		transaction: &SignedTransaction,
	) -> Result<BroadcastResponse, BlockChainError> {
		let request = BroadcastHexRequest {
			transaction: transaction.to_hex(),
		};
		self.call(BROADCAST_HEX_PATH, &request).await
	}
}
