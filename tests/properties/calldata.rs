use alloy::primitives::U256;
use proptest::prelude::*;

use tron_transfer::{
	models::{TronAddress, ADDRESS_VERSION},
	services::transfer::{transfer_call_data, TRANSFER_SELECTOR},
};

prop_compose! {
	fn arb_address()(account in proptest::array::uniform20(any::<u8>())) -> TronAddress {
		let mut bytes = vec![ADDRESS_VERSION];
		bytes.extend_from_slice(&account);
		TronAddress::from_bytes(&bytes).unwrap()
	}
}

prop_compose! {
	fn arb_amount()(limbs in proptest::array::uniform4(any::<u64>())) -> U256 {
		U256::from_limbs(limbs)
	}
}

proptest! {
	#[test]
	fn call_data_layout(to in arb_address(), amount in arb_amount()) {
		let data = transfer_call_data(&to, amount);

		prop_assert_eq!(data.len(), 68);
		prop_assert_eq!(&data[..4], &TRANSFER_SELECTOR[..]);
		prop_assert!(data[4..16].iter().all(|b| *b == 0));
		prop_assert_eq!(&data[16..36], to.account_bytes());
		prop_assert_eq!(U256::from_be_slice(&data[36..]), amount);
	}
}
