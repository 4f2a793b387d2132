//! Transfer service.
//!
//! Runs one transfer through classification, amount scaling, construction,
//! signing and broadcast. Nothing is retried; a failed call is returned to the
//! caller together with the transaction id whenever one was already computed.

use alloy::primitives::U256;
use k256::ecdsa::SigningKey;
use std::{collections::HashMap, sync::Arc};

use crate::{
	models::{ContractKind, SignedTransaction, TransferRequest, TronAddress, UnsignedTransaction},
	repositories::ContractRepositoryTrait,
	services::{
		blockchain::TronClientTrait,
		signer,
		transfer::{
			builder::{build_native_transfer, build_token_transfer},
			TransferError,
		},
	},
	utils::to_base_units,
};

/// Submits native and token transfers through a node client
pub struct TransferService<C: TronClientTrait, R: ContractRepositoryTrait> {
	client: Arc<C>,
	registry: Arc<R>,
	fee_limit: i64,
}

impl<C: TronClientTrait, R: ContractRepositoryTrait> TransferService<C, R> {
	/// Creates a new transfer service
	///
	/// # Arguments
	/// * `client` - Node client used to build and broadcast transactions
	/// * `registry` - Contract registry, fully populated
	/// * `fee_limit` - Energy fee cap in sun for token transfers; non-positive keeps the
	///   node default
	pub fn new(client: Arc<C>, registry: Arc<R>, fee_limit: i64) -> Self {
		Self {
			client,
			registry,
			fee_limit,
		}
	}

	pub fn registry(&self) -> &R {
		&self.registry
	}

	/// Builds and signs the transaction for `request` without sending it.
	#[tracing::instrument(skip(self))]
	pub async fn prepare(
		&self,
		request: &TransferRequest<'_>,
	) -> Result<SignedTransaction, TransferError> {
		let owner = owner_address(request.signing_key);
		let (kind, decimals) = self.registry.classify(request.contract_address);

		let unsigned: UnsignedTransaction = match kind {
			ContractKind::Native => {
				let amount = scale_amount(request, decimals)?;
				build_native_transfer(self.client.as_ref(), &owner, request.to_address, amount)
					.await?
			}
			ContractKind::SmartContractToken => {
				let amount = scale_amount(request, decimals)?;
				build_token_transfer(
					self.client.as_ref(),
					&owner,
					request.contract_address,
					request.to_address,
					amount,
					self.fee_limit,
				)
				.await?
			}
			ContractKind::FixedSupplyToken | ContractKind::Unknown => {
				return Err(TransferError::unsupported_contract(
					format!("Transfers of {} contracts are not supported", kind),
					None,
					Some(HashMap::from([(
						"contract".to_string(),
						request.contract_address.to_string(),
					)])),
				));
			}
		};

		Ok(signer::sign(unsigned, request.signing_key)?)
	}

	/// Builds, signs and broadcasts `request`, returning the transaction id.
	pub async fn transfer(&self, request: &TransferRequest<'_>) -> Result<String, TransferError> {
		let signed = self.prepare(request).await?;
		self.broadcast(&signed).await
	}

	/// Submits a signed transaction and returns the id computed when it was signed.
	///
	/// Errors carry the id: a transaction that failed in transport may still have
	/// reached the network.
	#[tracing::instrument(skip_all, fields(txid = %transaction.txid()))]
	pub async fn broadcast(
		&self,
		transaction: &SignedTransaction,
	) -> Result<String, TransferError> {
		let txid = transaction.txid();
		let response = self
			.client
			.broadcast_transaction(transaction)
			.await
			.map_err(|e| TransferError::from_broadcast(txid, e))?;

		if !response.result {
			return Err(TransferError::remote_rejection(
				txid,
				response.diagnostic(),
				None,
			));
		}

		tracing::info!(txid = %txid, "Transaction broadcast");
		Ok(txid.to_string())
	}
}

fn owner_address(key: &SigningKey) -> TronAddress {
	TronAddress::from_verifying_key(key.verifying_key())
}

fn scale_amount(request: &TransferRequest<'_>, decimals: i32) -> Result<U256, TransferError> {
	to_base_units(request.amount, decimals).map_err(|e| {
		TransferError::validation_error(
			format!("Invalid amount: {}", e),
			Some(Box::new(e)),
			Some(HashMap::from([("amount".to_string(), request.amount.to_string())])),
		)
	})
}
