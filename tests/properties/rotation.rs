use proptest::prelude::*;
use std::collections::HashSet;

use tron_transfer::{models::SecretString, services::blockchain::CredentialRotator};

proptest! {
	#[test]
	fn full_cycle_visits_every_credential_once(size in 1usize..32, offset in 0usize..100) {
		let rotator = CredentialRotator::new(
			(0..size).map(|i| SecretString::new(format!("key-{}", i))).collect(),
		);
		for _ in 0..offset {
			rotator.next().unwrap();
		}

		let seen: Vec<String> = (0..size)
			.map(|_| rotator.next().unwrap().as_str().to_string())
			.collect();
		let unique: HashSet<&String> = seen.iter().collect();

		prop_assert_eq!(unique.len(), size);
	}
}
