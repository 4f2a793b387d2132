//! Transaction signing.
//!
//! A transaction is signed over the SHA-256 of its `raw` encoding; the same hash
//! in hex is the transaction id. The signature is the 64-byte `r || s` pair
//! followed by the recovery id. Only the owner of the transaction may sign it:
//! the owner address in the contract must be the address of the signing key.

mod error;

pub use error::SignerError;

use k256::ecdsa::SigningKey;
use prost::Message;
use std::collections::HashMap;

use crate::models::{
	ContractType, SignedTransaction, TransferContract, TriggerSmartContract, TronAddress,
	UnsignedTransaction,
};

/// Signs `transaction` with `key` and computes its id.
#[tracing::instrument(skip_all)]
pub fn sign(
	transaction: UnsignedTransaction,
	key: &SigningKey,
) -> Result<SignedTransaction, SignerError> {
	let owner = contract_owner(&transaction)?;
	let signer = TronAddress::from_verifying_key(key.verifying_key());
	if owner != signer.as_bytes() {
		return Err(SignerError::key_mismatch(
			"Transaction owner does not match the signing key",
			None,
			Some(HashMap::from([
				("owner".to_string(), hex::encode(&owner)),
				("signer".to_string(), signer.to_base58()),
			])),
		));
	}

	let hash = transaction.signing_hash();
	let (signature, recovery_id) = key.sign_prehash_recoverable(&hash).map_err(|e| {
		SignerError::signature_failed("Failed to sign transaction", Some(Box::new(e)), None)
	})?;

	let mut signature_bytes = signature.to_bytes().to_vec();
	signature_bytes.push(recovery_id.to_byte());

	let txid = hex::encode(hash);
	tracing::debug!(txid = %txid, "Signed transaction");
	Ok(SignedTransaction::new(transaction, signature_bytes, txid))
}

/// Owner address of the first contract of `transaction`.
fn contract_owner(transaction: &UnsignedTransaction) -> Result<Vec<u8>, SignerError> {
	let contract = transaction.contracts().first().ok_or_else(|| {
		SignerError::malformed_transaction("Transaction carries no contract", None, None)
	})?;
	let parameter = contract.parameter.as_ref().ok_or_else(|| {
		SignerError::malformed_transaction("Contract has no parameter", None, None)
	})?;
	let contract_type = ContractType::from_code(contract.contract_type).ok_or_else(|| {
		SignerError::malformed_transaction(
			format!("Unsupported contract type {}", contract.contract_type),
			None,
			None,
		)
	})?;

	let decoded = match contract_type {
		ContractType::Transfer => TransferContract::decode(parameter.value.as_slice())
			.map(|transfer| transfer.owner_address),
		ContractType::TriggerSmartContract => {
			TriggerSmartContract::decode(parameter.value.as_slice()).map(|call| call.owner_address)
		}
	};
	decoded.map_err(|e| {
		SignerError::malformed_transaction(
			"Contract parameter could not be decoded",
			Some(Box::new(e)),
			None,
		)
	})
}
