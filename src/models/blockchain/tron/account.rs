use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Account snapshot from the `/v1/accounts/{address}` query API.
///
/// Balances are reported in base units. `trc20` is a list of single-entry maps
/// from token contract address to balance string.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct TronAccount {
	#[serde(default)]
	pub address: String,

	/// Native balance in sun
	#[serde(default)]
	pub balance: i64,

	#[serde(default)]
	pub trc20: Vec<HashMap<String, String>>,
}

impl TronAccount {
	/// Iterates `(contract address, base-unit balance)` pairs of every token entry.
	pub fn token_balances(&self) -> impl Iterator<Item = (&str, &str)> {
		self.trc20
			.iter()
			.flat_map(|entry| entry.iter().map(|(k, v)| (k.as_str(), v.as_str())))
	}
}
