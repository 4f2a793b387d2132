use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::utils::normalize_string;

/// Contract address that stands for the native coin.
pub const NATIVE_SENTINEL: &str = "trx";

/// Decimals assumed for contracts the registry does not know.
pub const UNKNOWN_CONTRACT_DECIMALS: i32 = 18;

/// What kind of asset a contract address refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ContractKind {
	/// The chain's own coin (TRX)
	Native,
	/// A fixed-supply token issued by the chain itself (TRC10)
	FixedSupplyToken,
	/// A token implemented by a smart contract (TRC20)
	SmartContractToken,
	/// Address not present in the registry
	Unknown,
}

impl ContractKind {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Native => "trx",
			Self::FixedSupplyToken => "trc10",
			Self::SmartContractToken => "trc20",
			Self::Unknown => "unknown",
		}
	}
}

impl FromStr for ContractKind {
	type Err = String;

	/// Parses a declared kind. `Unknown` cannot be declared.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match normalize_string(s).as_str() {
			"trx" | "native" => Ok(Self::Native),
			"trc10" => Ok(Self::FixedSupplyToken),
			"trc20" => Ok(Self::SmartContractToken),
			_ => Err(format!("unrecognized contract kind '{}'", s)),
		}
	}
}

impl fmt::Display for ContractKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A contract entry as declared in configuration.
///
/// `kind` stays a string here; it is checked when the descriptor is registered.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ContractDescriptor {
	/// Base58 contract address (or `trx` for the native coin)
	pub address: String,

	/// Declared kind: `trx`, `trc10` or `trc20`
	pub kind: String,

	/// Number of decimal places of the asset
	pub decimals: i32,

	/// Display name used when rendering balances
	pub name: String,
}
