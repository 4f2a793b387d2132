use proptest::prelude::*;

use tron_transfer::{
	models::{ContractKind, UNKNOWN_CONTRACT_DECIMALS},
	repositories::{ContractRepository, ContractRepositoryTrait},
	utils::tests::builders::contract::ContractDescriptorBuilder,
};

fn arb_kind() -> impl Strategy<Value = &'static str> {
	prop_oneof![Just("trc10"), Just("trc20"), Just("TRC20")]
}

prop_compose! {
	fn arb_registry()(
		entries in proptest::collection::vec(("[1-9A-HJ-NP-Za-km-z]{34}", arb_kind(), 0i32..=18), 0..8),
		native_decimals in 0i32..=18,
	) -> ContractRepository {
		let descriptors: Vec<_> = entries
			.iter()
			.map(|(address, kind, decimals)| {
				ContractDescriptorBuilder::new()
					.address(address)
					.kind(kind)
					.decimals(*decimals)
					.build()
			})
			.collect();
		ContractRepository::new(native_decimals, &descriptors).unwrap()
	}
}

proptest! {
	#[test]
	fn native_sentinels_always_classify_native(registry in arb_registry(), sentinel in prop_oneof![Just(""), Just("trx"), Just("TRX"), Just("Trx")]) {
		let (kind, _) = registry.classify(sentinel);
		prop_assert_eq!(kind, ContractKind::Native);
	}

	#[test]
	fn unregistered_addresses_are_unknown(registry in arb_registry(), address in "X[0-9]{10}") {
		prop_assert_eq!(
			registry.classify(&address),
			(ContractKind::Unknown, UNKNOWN_CONTRACT_DECIMALS)
		);
	}

	#[test]
	fn rejected_registration_leaves_registry_unchanged(mut registry in arb_registry(), bad_kind in "[a-z]{3,8}-kind") {
		let before = registry.get_all();
		let result = registry.register(&[
			ContractDescriptorBuilder::new().address("TNewContractAddress").build(),
			ContractDescriptorBuilder::new().kind(&bad_kind).build(),
		]);

		prop_assert!(result.is_err());
		prop_assert_eq!(registry.get_all(), before);
	}
}
