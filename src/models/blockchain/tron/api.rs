//! Request and response bodies of the full-node wallet API.
//!
//! Addresses are sent in hex form with `visible` set to false. Diagnostic
//! messages from the node are often hex-encoded UTF-8.

use serde::{Deserialize, Serialize};

use crate::utils::decode_remote_message;

/// Body of `/wallet/createtransaction`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CreateTransactionRequest {
	pub owner_address: String,
	pub to_address: String,
	pub amount: i64,
	pub visible: bool,
}

/// Body of `/wallet/triggersmartcontract` for a call with raw call data.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TriggerSmartContractRequest {
	pub owner_address: String,
	pub contract_address: String,
	/// Hex-encoded selector and arguments
	pub data: String,
	pub call_value: i64,
	pub visible: bool,
}

/// Body of `/wallet/broadcasthex`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BroadcastHexRequest {
	/// Hex-encoded `Transaction` protobuf
	pub transaction: String,
}

/// Transaction skeleton as returned by the node.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct NodeTransaction {
	#[serde(rename = "txID", default)]
	pub tx_id: Option<String>,

	#[serde(default)]
	pub raw_data_hex: Option<String>,

	/// Set instead of the fields above when creation was rejected
	#[serde(rename = "Error", default)]
	pub error: Option<String>,
}

/// Outcome block of a contract call.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct TriggerResult {
	#[serde(default)]
	pub result: bool,

	#[serde(default)]
	pub code: Option<String>,

	#[serde(default)]
	pub message: Option<String>,
}

/// Response of `/wallet/triggersmartcontract`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct TriggerSmartContractResponse {
	#[serde(default)]
	pub result: TriggerResult,

	#[serde(default)]
	pub transaction: Option<NodeTransaction>,
}

/// Response of `/wallet/broadcasthex`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct BroadcastResponse {
	#[serde(default)]
	pub result: bool,

	#[serde(default)]
	pub code: Option<String>,

	#[serde(default)]
	pub message: Option<String>,

	#[serde(default)]
	pub txid: Option<String>,
}

fn describe(code: Option<&str>, message: Option<&str>) -> String {
	let message = message.map(decode_remote_message).unwrap_or_default();
	match (code, message.is_empty()) {
		(Some(code), true) => code.to_string(),
		(Some(code), false) => format!("{}: {}", code, message),
		(None, false) => message,
		(None, true) => "no diagnostic returned".to_string(),
	}
}

impl TriggerResult {
	/// Human-readable failure reason with the message hex-decoded.
	pub fn diagnostic(&self) -> String {
		describe(self.code.as_deref(), self.message.as_deref())
	}
}

impl BroadcastResponse {
	/// Human-readable failure reason with the message hex-decoded.
	pub fn diagnostic(&self) -> String {
		describe(self.code.as_deref(), self.message.as_deref())
	}
}
