use proptest::prelude::*;

use tron_transfer::{
	models::{TransactionRaw, UnsignedTransaction},
	utils::tests::builders::transaction::NodeTransactionBuilder,
};

fn skeleton(fee_limit: i64) -> UnsignedTransaction {
	let raw: TransactionRaw = NodeTransactionBuilder::new().fee_limit(fee_limit).build_raw();
	UnsignedTransaction::new(raw)
}

proptest! {
	#[test]
	fn non_positive_fee_limit_is_ignored(initial in 0i64..1_000_000_000, cap in i64::MIN..=0) {
		let mut transaction = skeleton(initial);
		transaction.set_fee_limit(cap);
		prop_assert_eq!(transaction.fee_limit(), initial);
	}

	#[test]
	fn positive_fee_limit_is_applied(initial in 0i64..1_000_000_000, cap in 1i64..i64::MAX) {
		let mut transaction = skeleton(initial);
		transaction.set_fee_limit(cap);
		prop_assert_eq!(transaction.fee_limit(), cap);
	}

	#[test]
	fn raw_hex_round_trip_preserves_signing_hash(initial in 0i64..1_000_000_000) {
		let transaction = skeleton(initial);
		let raw_hex = hex::encode(transaction.raw_bytes());
		let decoded = UnsignedTransaction::from_raw_hex(&raw_hex).unwrap();
		prop_assert_eq!(decoded.signing_hash(), transaction.signing_hash());
	}
}

#[test]
fn five_million_fee_limit_scenario() {
	let mut transaction = skeleton(0);
	transaction.set_fee_limit(0);
	assert_eq!(transaction.fee_limit(), 0);
	transaction.set_fee_limit(5_000_000);
	assert_eq!(transaction.fee_limit(), 5_000_000);
}
