//! Rendering of account balances in display units.

use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashMap};

use crate::{
	models::{ContractKind, TronAccount, NATIVE_SENTINEL},
	repositories::ContractRepositoryTrait,
	services::transfer::TransferError,
	utils::{from_base_units, parse_base_units},
};
use alloy::primitives::U256;

/// Converts the balances of `account` to display units.
///
/// The native balance is keyed by `trx`, token balances by the name they were
/// registered under. Tokens missing from the registry are skipped.
pub fn render_balances<R: ContractRepositoryTrait>(
	account: &TronAccount,
	registry: &R,
) -> Result<BTreeMap<String, Decimal>, TransferError> {
	let mut balances = BTreeMap::new();

	let native = u64::try_from(account.balance).map_err(|_| {
		TransferError::validation_error(
			format!("Negative native balance {}", account.balance),
			None,
			None,
		)
	})?;
	let (_, native_decimals) = registry.classify(NATIVE_SENTINEL);
	balances.insert(
		NATIVE_SENTINEL.to_string(),
		render(U256::from(native), native_decimals, NATIVE_SENTINEL)?,
	);

	for (contract, raw) in account.token_balances() {
		let Some(entry) = registry.get(contract) else {
			tracing::debug!(contract = %contract, "Skipping unregistered token balance");
			continue;
		};
		if entry.kind == ContractKind::Native {
			continue;
		}
		let value = parse_base_units(raw).ok_or_else(|| {
			TransferError::validation_error(
				format!("Token balance {:?} is not an integer", raw),
				None,
				Some(HashMap::from([("contract".to_string(), contract.to_string())])),
			)
		})?;
		balances.insert(entry.name.clone(), render(value, entry.decimals, contract)?);
	}

	Ok(balances)
}

fn render(value: U256, decimals: i32, contract: &str) -> Result<Decimal, TransferError> {
	from_base_units(value, decimals).map_err(|e| {
		TransferError::validation_error(
			format!("Cannot render balance: {}", e),
			Some(Box::new(e)),
			Some(HashMap::from([("contract".to_string(), contract.to_string())])),
		)
	})
}
