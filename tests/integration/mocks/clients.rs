//! Mock implementation of the wallet API client.

use async_trait::async_trait;
use mockall::mock;

use tron_transfer::{
	models::{
		BroadcastResponse, NodeTransaction, SignedTransaction, TriggerSmartContractResponse,
		TronAddress,
	},
	services::blockchain::{BlockChainError, TronClientTrait},
};

mock! {
	pub TronClient {}

	#[async_trait]
	impl TronClientTrait for TronClient {
		async fn create_transaction(
			&self,
			owner: &TronAddress,
			to: &TronAddress,
			amount: i64,
		) -> Result<NodeTransaction, BlockChainError>;

		async fn trigger_smart_contract(
			&self,
			owner: &TronAddress,
			contract: &TronAddress,
			data: &[u8],
		) -> Result<TriggerSmartContractResponse, BlockChainError>;

		async fn broadcast_transaction(
			&self,
			transaction: &SignedTransaction,
		) -> Result<BroadcastResponse, BlockChainError>;
	}
}
