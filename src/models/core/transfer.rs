use k256::ecdsa::SigningKey;
use rust_decimal::Decimal;

/// One transfer to submit.
///
/// The signing key is borrowed for the duration of the call and never stored.
#[derive(Clone, Copy)]
pub struct TransferRequest<'a> {
	pub signing_key: &'a SigningKey,
	/// Token contract address; empty or `trx` for a native transfer
	pub contract_address: &'a str,
	/// Base58 recipient address
	pub to_address: &'a str,
	/// Amount in display units
	pub amount: Decimal,
}

impl std::fmt::Debug for TransferRequest<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("TransferRequest")
			.field("contract_address", &self.contract_address)
			.field("to_address", &self.to_address)
			.field("amount", &self.amount)
			.finish_non_exhaustive()
	}
}
