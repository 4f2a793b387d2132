//! Construction of unsigned transfers.
//!
//! The node builds the transaction skeleton (reference block, expiration) from
//! the parameters sent to it. What comes back is decoded and checked against
//! what was asked for before it is handed to the signer.

use alloy::primitives::U256;
use prost::Message;
use std::collections::HashMap;

use crate::{
	models::{
		ContractType, NodeTransaction, TransferContract, TriggerSmartContract, TronAddress,
		UnsignedTransaction,
	},
	services::{blockchain::TronClientTrait, transfer::TransferError},
};

/// First four bytes of `keccak256("transfer(address,uint256)")`.
pub const TRANSFER_SELECTOR: [u8; 4] = [0xa9, 0x05, 0x9c, 0xbb];

/// Selector plus two 32-byte words.
pub const TRANSFER_CALL_DATA_LENGTH: usize = 4 + 32 + 32;

/// ABI-encodes `transfer(to, amount)`.
///
/// The address word holds the 20 account bytes; the version prefix is dropped.
pub fn transfer_call_data(to: &TronAddress, amount: U256) -> [u8; TRANSFER_CALL_DATA_LENGTH] {
	let mut data = [0u8; TRANSFER_CALL_DATA_LENGTH];
	data[..4].copy_from_slice(&TRANSFER_SELECTOR);
	data[16..36].copy_from_slice(to.account_bytes());
	data[36..].copy_from_slice(&amount.to_be_bytes::<32>());
	data
}

/// Parses a base58check address, naming the field in the error.
pub fn parse_address(field: &str, input: &str) -> Result<TronAddress, TransferError> {
	input.trim().parse::<TronAddress>().map_err(|e| {
		TransferError::address_format_error(
			format!("Invalid {} address: {}", field, e),
			Some(Box::new(e)),
			Some(HashMap::from([(field.to_string(), input.to_string())])),
		)
	})
}

/// Builds a native TRX transfer of `amount` sun from `owner` to `to`.
#[tracing::instrument(skip(client, owner), fields(owner = %owner))]
pub async fn build_native_transfer<C: TronClientTrait + ?Sized>(
	client: &C,
	owner: &TronAddress,
	to: &str,
	amount: U256,
) -> Result<UnsignedTransaction, TransferError> {
	let to = parse_address("destination", to)?;
	let amount = i64::try_from(amount).map_err(|_| {
		TransferError::validation_error(
			format!("Native amount {} exceeds the int64 range", amount),
			None,
			None,
		)
	})?;

	let response = client.create_transaction(owner, &to, amount).await?;
	let transaction = decode_node_transaction(&response)?;

	let expected = TransferContract {
		owner_address: owner.as_bytes().to_vec(),
		to_address: to.as_bytes().to_vec(),
		amount,
	};
	ensure_contract(&transaction, ContractType::Transfer, &expected)?;
	Ok(transaction)
}

/// Builds a TRC20 `transfer` call on `contract` moving `amount` base units to `to`.
///
/// A positive `fee_limit` caps the energy fee of the call; otherwise the node's
/// default applies.
#[tracing::instrument(skip(client, owner), fields(owner = %owner))]
pub async fn build_token_transfer<C: TronClientTrait + ?Sized>(
	client: &C,
	owner: &TronAddress,
	contract: &str,
	to: &str,
	amount: U256,
	fee_limit: i64,
) -> Result<UnsignedTransaction, TransferError> {
	let contract = parse_address("contract", contract)?;
	let to = parse_address("destination", to)?;
	let data = transfer_call_data(&to, amount);

	let response = client.trigger_smart_contract(owner, &contract, &data).await?;
	if !response.result.result {
		return Err(TransferError::remote_error(
			format!("Node rejected contract call: {}", response.result.diagnostic()),
			None,
			Some(HashMap::from([("contract".to_string(), contract.to_base58())])),
		));
	}
	let node_transaction = response.transaction.ok_or_else(|| {
		TransferError::remote_error("Node returned no transaction for contract call", None, None)
	})?;
	let mut transaction = decode_node_transaction(&node_transaction)?;

	let expected = TriggerSmartContract {
		owner_address: owner.as_bytes().to_vec(),
		contract_address: contract.as_bytes().to_vec(),
		data: data.to_vec(),
		..Default::default()
	};
	ensure_contract(&transaction, ContractType::TriggerSmartContract, &expected)?;

	transaction.set_fee_limit(fee_limit);
	Ok(transaction)
}

fn decode_node_transaction(
	response: &NodeTransaction,
) -> Result<UnsignedTransaction, TransferError> {
	if let Some(error) = &response.error {
		return Err(TransferError::remote_error(
			format!("Node refused to create transaction: {}", error),
			None,
			None,
		));
	}

	let raw_hex = response.raw_data_hex.as_deref().ok_or_else(|| {
		TransferError::remote_error("Node response has no raw transaction", None, None)
	})?;
	let transaction = UnsignedTransaction::from_raw_hex(raw_hex).map_err(|e| {
		TransferError::remote_error(
			"Node returned an undecodable transaction",
			Some(Box::new(e)),
			None,
		)
	})?;

	if transaction.contracts().is_empty() {
		return Err(TransferError::remote_error(
			"Node returned a transaction without contracts",
			None,
			None,
		));
	}

	if let Some(node_txid) = &response.tx_id {
		let local_txid = hex::encode(transaction.signing_hash());
		if !node_txid.eq_ignore_ascii_case(&local_txid) {
			tracing::warn!(
				node_txid = %node_txid,
				local_txid = %local_txid,
				"Node transaction id differs from the re-encoded transaction"
			);
		}
	}

	Ok(transaction)
}

/// Checks that the node built exactly the contract that was requested.
fn ensure_contract<M: Message + Default + PartialEq>(
	transaction: &UnsignedTransaction,
	contract_type: ContractType,
	expected: &M,
) -> Result<(), TransferError> {
	let mismatch = |reason: &str| {
		TransferError::remote_error(
			format!("Node returned an unexpected contract: {}", reason),
			None,
			None,
		)
	};

	let [contract] = transaction.contracts() else {
		return Err(mismatch("expected exactly one contract"));
	};
	if contract.contract_type != contract_type.code() {
		return Err(mismatch("wrong contract type"));
	}
	let parameter = contract
		.parameter
		.as_ref()
		.ok_or_else(|| mismatch("missing parameter"))?;
	let actual = M::decode(parameter.value.as_slice())
		.map_err(|_| mismatch("undecodable parameter"))?;
	if &actual != expected {
		return Err(mismatch("parameters differ from the request"));
	}
	Ok(())
}
