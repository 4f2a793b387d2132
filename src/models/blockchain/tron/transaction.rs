//! Protobuf models of TRON transactions.
//!
//! The node returns the unsigned transaction as `raw_data_hex`, the protobuf
//! encoding of `Transaction.raw`. That encoding is what gets hashed and signed, so
//! every field of `raw` is modeled and nested authorities are kept as opaque bytes.
//! Re-encoding a decoded `raw` reproduces the node's bytes.

use prost::Message;
use sha2::{Digest, Sha256};
use thiserror::Error;

pub const TRANSFER_CONTRACT_TYPE_URL: &str = "type.googleapis.com/protocol.TransferContract";
pub const TRIGGER_SMART_CONTRACT_TYPE_URL: &str =
	"type.googleapis.com/protocol.TriggerSmartContract";

/// `google.protobuf.Any`
#[derive(Clone, PartialEq, Message)]
pub struct Any {
	#[prost(string, tag = "1")]
	pub type_url: String,
	#[prost(bytes = "vec", tag = "2")]
	pub value: Vec<u8>,
}

/// `protocol.TransferContract`
#[derive(Clone, PartialEq, Message)]
pub struct TransferContract {
	#[prost(bytes = "vec", tag = "1")]
	pub owner_address: Vec<u8>,
	#[prost(bytes = "vec", tag = "2")]
	pub to_address: Vec<u8>,
	#[prost(int64, tag = "3")]
	pub amount: i64,
}

/// `protocol.TriggerSmartContract`
#[derive(Clone, PartialEq, Message)]
pub struct TriggerSmartContract {
	#[prost(bytes = "vec", tag = "1")]
	pub owner_address: Vec<u8>,
	#[prost(bytes = "vec", tag = "2")]
	pub contract_address: Vec<u8>,
	#[prost(int64, tag = "3")]
	pub call_value: i64,
	#[prost(bytes = "vec", tag = "4")]
	pub data: Vec<u8>,
	#[prost(int64, tag = "5")]
	pub call_token_value: i64,
	#[prost(int64, tag = "6")]
	pub token_id: i64,
}

/// `protocol.Transaction.Contract`
#[derive(Clone, PartialEq, Message)]
pub struct TransactionContract {
	#[prost(int32, tag = "1")]
	pub contract_type: i32,
	#[prost(message, optional, tag = "2")]
	pub parameter: Option<Any>,
	#[prost(bytes = "vec", tag = "3")]
	pub provider: Vec<u8>,
	#[prost(bytes = "vec", tag = "4")]
	pub contract_name: Vec<u8>,
	#[prost(int32, tag = "5")]
	pub permission_id: i32,
}

/// `protocol.Transaction.raw`
#[derive(Clone, PartialEq, Message)]
pub struct TransactionRaw {
	#[prost(bytes = "vec", tag = "1")]
	pub ref_block_bytes: Vec<u8>,
	#[prost(int64, tag = "3")]
	pub ref_block_num: i64,
	#[prost(bytes = "vec", tag = "4")]
	pub ref_block_hash: Vec<u8>,
	#[prost(int64, tag = "8")]
	pub expiration: i64,
	#[prost(bytes = "vec", repeated, tag = "9")]
	pub auths: Vec<Vec<u8>>,
	#[prost(bytes = "vec", tag = "10")]
	pub data: Vec<u8>,
	#[prost(message, repeated, tag = "11")]
	pub contract: Vec<TransactionContract>,
	#[prost(bytes = "vec", tag = "12")]
	pub scripts: Vec<u8>,
	#[prost(int64, tag = "14")]
	pub timestamp: i64,
	#[prost(int64, tag = "18")]
	pub fee_limit: i64,
}

/// `protocol.Transaction`, as submitted for broadcast.
#[derive(Clone, PartialEq, Message)]
pub struct Transaction {
	#[prost(message, optional, tag = "1")]
	pub raw_data: Option<TransactionRaw>,
	#[prost(bytes = "vec", repeated, tag = "2")]
	pub signature: Vec<Vec<u8>>,
}

/// Contract types this client builds and signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractType {
	Transfer,
	TriggerSmartContract,
}

impl ContractType {
	pub fn from_code(code: i32) -> Option<Self> {
		match code {
			1 => Some(Self::Transfer),
			31 => Some(Self::TriggerSmartContract),
			_ => None,
		}
	}

	pub fn code(&self) -> i32 {
		match self {
			Self::Transfer => 1,
			Self::TriggerSmartContract => 31,
		}
	}

	pub fn type_url(&self) -> &'static str {
		match self {
			Self::Transfer => TRANSFER_CONTRACT_TYPE_URL,
			Self::TriggerSmartContract => TRIGGER_SMART_CONTRACT_TYPE_URL,
		}
	}
}

impl TransactionContract {
	/// Wraps `parameter` into a contract entry of the given type.
	pub fn new<M: Message>(contract_type: ContractType, parameter: &M) -> Self {
		Self {
			contract_type: contract_type.code(),
			parameter: Some(Any {
				type_url: contract_type.type_url().to_string(),
				value: parameter.encode_to_vec(),
			}),
			..Default::default()
		}
	}
}

#[derive(Debug, Error)]
pub enum RawTransactionError {
	#[error("raw transaction is not valid hex: {0}")]
	Hex(#[from] hex::FromHexError),

	#[error("raw transaction is not a valid protobuf message: {0}")]
	Decode(#[from] prost::DecodeError),
}

/// A transaction skeleton awaiting a signature.
#[derive(Debug, Clone, PartialEq)]
pub struct UnsignedTransaction {
	raw: TransactionRaw,
}

impl UnsignedTransaction {
	pub fn new(raw: TransactionRaw) -> Self {
		Self { raw }
	}

	/// Decodes the `raw_data_hex` field of a node response.
	pub fn from_raw_hex(raw_hex: &str) -> Result<Self, RawTransactionError> {
		let bytes = hex::decode(raw_hex.trim())?;
		Ok(Self::new(TransactionRaw::decode(bytes.as_slice())?))
	}

	pub fn raw(&self) -> &TransactionRaw {
		&self.raw
	}

	pub fn contracts(&self) -> &[TransactionContract] {
		&self.raw.contract
	}

	pub fn fee_limit(&self) -> i64 {
		self.raw.fee_limit
	}

	/// Caps the energy fee of a contract call. Non-positive limits are ignored so
	/// that the node's default stays in force.
	pub fn set_fee_limit(&mut self, fee_limit: i64) {
		if fee_limit > 0 {
			self.raw.fee_limit = fee_limit;
		}
	}

	/// Canonical encoding covered by the signature.
	pub fn raw_bytes(&self) -> Vec<u8> {
		self.raw.encode_to_vec()
	}

	/// SHA-256 of [`Self::raw_bytes`]; its hex form is the transaction id.
	pub fn signing_hash(&self) -> [u8; 32] {
		Sha256::digest(self.raw_bytes()).into()
	}
}

/// A signed transaction together with the id computed when it was signed.
#[derive(Debug, Clone, PartialEq)]
pub struct SignedTransaction {
	raw: TransactionRaw,
	signature: Vec<u8>,
	txid: String,
}

impl SignedTransaction {
	pub fn new(unsigned: UnsignedTransaction, signature: Vec<u8>, txid: String) -> Self {
		Self {
			raw: unsigned.raw,
			signature,
			txid,
		}
	}

	pub fn txid(&self) -> &str {
		&self.txid
	}

	pub fn raw(&self) -> &TransactionRaw {
		&self.raw
	}

	pub fn signature(&self) -> &[u8] {
		&self.signature
	}

	/// Protobuf encoding of the full `Transaction` message.
	pub fn to_bytes(&self) -> Vec<u8> {
		Transaction {
			raw_data: Some(self.raw.clone()),
			signature: vec![self.signature.clone()],
		}
		.encode_to_vec()
	}

	pub fn to_hex(&self) -> String {
		hex::encode(self.to_bytes())
	}
}
