use alloy::primitives::U256;
use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};
use mockall::predicate;
use rust_decimal::Decimal;
use std::{str::FromStr, sync::Arc};

use tron_transfer::{
	models::{
		BroadcastResponse, NodeTransaction, TransferRequest, TriggerResult,
		TriggerSmartContractResponse, UnsignedTransaction,
	},
	repositories::ContractRepository,
	services::{
		blockchain::{BlockChainError, TransportError},
		transfer::{transfer_call_data, TransferError, TransferService},
	},
	utils::tests::builders::{
		contract::ContractDescriptorBuilder, transaction::NodeTransactionBuilder,
	},
};

use crate::integration::mocks::{address, address_of, signing_key, MockTronClient, RECIPIENT, USDT};

const FEE_LIMIT: i64 = 5_000_000;
const BTT: &str = "TXYZopYRdj2D9XRtbG411XZZ3kM5VkAeBf";

fn registry() -> Arc<ContractRepository> {
	Arc::new(
		ContractRepository::new(
			6,
			&[
				ContractDescriptorBuilder::new().build(),
				ContractDescriptorBuilder::new()
					.address(BTT)
					.kind("trc10")
					.decimals(6)
					.name("btt")
					.build(),
			],
		)
		.unwrap(),
	)
}

fn service(
	client: MockTronClient,
	fee_limit: i64,
) -> TransferService<MockTronClient, ContractRepository> {
	TransferService::new(Arc::new(client), registry(), fee_limit)
}

fn decimal(value: &str) -> Decimal {
	Decimal::from_str(value).unwrap()
}

fn token_response(node_fee_limit: i64, amount: U256) -> TriggerSmartContractResponse {
	let owner = address_of(&signing_key(1));
	TriggerSmartContractResponse {
		result: TriggerResult {
			result: true,
			..Default::default()
		},
		transaction: Some(
			NodeTransactionBuilder::new()
				.token_transfer(&owner, &address(USDT), &address(RECIPIENT), amount)
				.fee_limit(node_fee_limit)
				.build(),
		),
	}
}

#[tokio::test]
async fn test_native_transfer_end_to_end() {
	let key = signing_key(1);
	let owner = address_of(&key);
	let to = address(RECIPIENT);
	let node_response = NodeTransactionBuilder::new().transfer(&owner, &to, 1_500_000).build();
	let expected_txid = node_response.tx_id.clone().unwrap();

	let mut client = MockTronClient::new();
	client
		.expect_create_transaction()
		.with(
			predicate::eq(owner),
			predicate::eq(to),
			predicate::eq(1_500_000i64),
		)
		.times(1)
		.returning(move |_, _, _| Ok(node_response.clone()));
	client
		.expect_broadcast_transaction()
		.times(1)
		.returning(|_| {
			Ok(BroadcastResponse {
				result: true,
				..Default::default()
			})
		});

	let txid = service(client, FEE_LIMIT)
		.transfer(&TransferRequest {
			signing_key: &key,
			contract_address: "",
			to_address: RECIPIENT,
			amount: decimal("1.5"),
		})
		.await
		.unwrap();

	assert_eq!(txid, expected_txid);
}

#[tokio::test]
async fn test_prepared_transaction_is_signed_by_owner() {
	let key = signing_key(1);
	let owner = address_of(&key);
	let to = address(RECIPIENT);
	let node_response = NodeTransactionBuilder::new().transfer(&owner, &to, 2_000_000).build();

	let mut client = MockTronClient::new();
	client
		.expect_create_transaction()
		.times(1)
		.returning(move |_, _, _| Ok(node_response.clone()));

	let signed = service(client, FEE_LIMIT)
		.prepare(&TransferRequest {
			signing_key: &key,
			contract_address: "TRX",
			to_address: RECIPIENT,
			amount: decimal("2"),
		})
		.await
		.unwrap();

	let hash = UnsignedTransaction::new(signed.raw().clone()).signing_hash();
	assert_eq!(signed.txid(), hex::encode(hash));

	let signature = Signature::from_slice(&signed.signature()[..64]).unwrap();
	let recovery_id = RecoveryId::from_byte(signed.signature()[64]).unwrap();
	let recovered = VerifyingKey::recover_from_prehash(&hash, &signature, recovery_id).unwrap();
	assert_eq!(&recovered, key.verifying_key());
}

#[tokio::test]
async fn test_token_transfer_applies_fee_limit() {
	let key = signing_key(1);
	let amount = U256::from(12_345_678u64);
	let expected_data = transfer_call_data(&address(RECIPIENT), amount);
	let response = token_response(0, amount);

	let mut client = MockTronClient::new();
	client
		.expect_trigger_smart_contract()
		.withf(move |_, contract, data| *contract == address(USDT) && data == expected_data)
		.times(1)
		.returning(move |_, _, _| Ok(response.clone()));

	let signed = service(client, FEE_LIMIT)
		.prepare(&TransferRequest {
			signing_key: &key,
			contract_address: USDT,
			to_address: RECIPIENT,
			amount: decimal("12.345678"),
		})
		.await
		.unwrap();

	assert_eq!(signed.raw().fee_limit, FEE_LIMIT);
}

#[tokio::test]
async fn test_zero_fee_limit_keeps_node_default() {
	let key = signing_key(1);
	let amount = U256::from(1_000_000u64);
	let response = token_response(15_000_000, amount);

	let mut client = MockTronClient::new();
	client
		.expect_trigger_smart_contract()
		.times(1)
		.returning(move |_, _, _| Ok(response.clone()));

	let signed = service(client, 0)
		.prepare(&TransferRequest {
			signing_key: &key,
			contract_address: USDT,
			to_address: RECIPIENT,
			amount: decimal("1"),
		})
		.await
		.unwrap();

	assert_eq!(signed.raw().fee_limit, 15_000_000);
}

#[tokio::test]
async fn test_fixed_supply_and_unknown_contracts_are_unsupported() {
	let key = signing_key(1);
	let service = service(MockTronClient::new(), FEE_LIMIT);

	for contract in [BTT, "TLa2f6VPqDgRE67v1736s7bJ8Ray5wYjU7"] {
		for amount in ["1", "-1", "79228162514264337593543950335"] {
			let result = service
				.transfer(&TransferRequest {
					signing_key: &key,
					contract_address: contract,
					to_address: RECIPIENT,
					amount: decimal(amount),
				})
				.await;

			match result {
				Err(e @ TransferError::UnsupportedContract(_)) => assert_eq!(e.txid(), None),
				other => panic!("expected unsupported contract for {}, got {:?}", amount, other),
			}
		}
	}
}

#[tokio::test]
async fn test_broadcast_transport_failure_keeps_txid() {
	let key = signing_key(1);
	let owner = address_of(&key);
	let node_response = NodeTransactionBuilder::new()
		.transfer(&owner, &address(RECIPIENT), 1_000_000)
		.build();
	let expected_txid = node_response.tx_id.clone().unwrap();

	let mut client = MockTronClient::new();
	client
		.expect_create_transaction()
		.times(1)
		.returning(move |_, _, _| Ok(node_response.clone()));
	client.expect_broadcast_transaction().times(1).returning(|_| {
		Err(BlockChainError::TransportError(TransportError::network(
			"connection reset",
			None,
			None,
		)))
	});

	let result = service(client, FEE_LIMIT)
		.transfer(&TransferRequest {
			signing_key: &key,
			contract_address: "",
			to_address: RECIPIENT,
			amount: decimal("1"),
		})
		.await;

	match result {
		Err(e @ TransferError::TransportError { .. }) => {
			assert_eq!(e.txid(), Some(expected_txid.as_str()))
		}
		other => panic!("expected transport error, got {:?}", other),
	}
}

#[tokio::test]
async fn test_broadcast_rejection_carries_diagnostic() {
	let key = signing_key(1);
	let owner = address_of(&key);
	let node_response = NodeTransactionBuilder::new()
		.transfer(&owner, &address(RECIPIENT), 1_000_000)
		.build();

	let mut client = MockTronClient::new();
	client
		.expect_create_transaction()
		.returning(move |_, _, _| Ok(node_response.clone()));
	client.expect_broadcast_transaction().returning(|_| {
		Ok(BroadcastResponse {
			result: false,
			code: Some("BANDWITH_ERROR".to_string()),
			message: Some("4163636f756e74207265736f7572636520696e73756666696369656e74".to_string()),
			txid: None,
		})
	});

	let result = service(client, FEE_LIMIT)
		.transfer(&TransferRequest {
			signing_key: &key,
			contract_address: "trx",
			to_address: RECIPIENT,
			amount: decimal("1"),
		})
		.await;

	let error = result.unwrap_err();
	assert!(matches!(error, TransferError::RemoteRejection { .. }));
	assert!(error.txid().is_some());
	assert!(error
		.to_string()
		.contains("BANDWITH_ERROR: Account resource insufficient"));
}

#[tokio::test]
async fn test_node_errors_on_creation() {
	let key = signing_key(1);

	let mut client = MockTronClient::new();
	client.expect_create_transaction().times(1).returning(|_, _, _| {
		Ok(NodeTransaction {
			error: Some("balance is not sufficient".to_string()),
			..Default::default()
		})
	});
	let result = service(client, FEE_LIMIT)
		.transfer(&TransferRequest {
			signing_key: &key,
			contract_address: "",
			to_address: RECIPIENT,
			amount: decimal("1"),
		})
		.await;
	assert!(matches!(result, Err(TransferError::RemoteError(_))));

	let mut client = MockTronClient::new();
	client
		.expect_create_transaction()
		.times(1)
		.returning(|_, _, _| Ok(NodeTransactionBuilder::new().build()));
	let result = service(client, FEE_LIMIT)
		.transfer(&TransferRequest {
			signing_key: &key,
			contract_address: "",
			to_address: RECIPIENT,
			amount: decimal("1"),
		})
		.await;
	assert!(matches!(result, Err(TransferError::RemoteError(_))));
}

#[tokio::test]
async fn test_node_rejects_contract_call() {
	let key = signing_key(1);

	let mut client = MockTronClient::new();
	client.expect_trigger_smart_contract().times(1).returning(|_, _, _| {
		Ok(TriggerSmartContractResponse {
			result: TriggerResult {
				result: false,
				code: Some("CONTRACT_VALIDATE_ERROR".to_string()),
				message: None,
			},
			transaction: None,
		})
	});

	let result = service(client, FEE_LIMIT)
		.transfer(&TransferRequest {
			signing_key: &key,
			contract_address: USDT,
			to_address: RECIPIENT,
			amount: decimal("1"),
		})
		.await;
	assert!(matches!(result, Err(TransferError::RemoteError(_))));
}

#[tokio::test]
async fn test_node_built_transaction_must_match_request() {
	let key = signing_key(1);
	let owner = address_of(&key);
	let swapped = NodeTransactionBuilder::new()
		.transfer(&owner, &address(USDT), 1_000_000)
		.build();

	let mut client = MockTronClient::new();
	client
		.expect_create_transaction()
		.returning(move |_, _, _| Ok(swapped.clone()));
	client.expect_broadcast_transaction().times(0);

	let result = service(client, FEE_LIMIT)
		.transfer(&TransferRequest {
			signing_key: &key,
			contract_address: "",
			to_address: RECIPIENT,
			amount: decimal("1"),
		})
		.await;
	assert!(matches!(result, Err(TransferError::RemoteError(_))));
}

#[tokio::test]
async fn test_invalid_requests_are_rejected_before_any_call() {
	let key = signing_key(1);
	let service = service(MockTronClient::new(), FEE_LIMIT);

	let bad_address = service
		.transfer(&TransferRequest {
			signing_key: &key,
			contract_address: "",
			to_address: "TEkxiTehnzSmSe2XqrBj4w32RUN966rdz9",
			amount: decimal("1"),
		})
		.await;
	assert!(matches!(bad_address, Err(TransferError::AddressFormatError(_))));

	let negative = service
		.transfer(&TransferRequest {
			signing_key: &key,
			contract_address: "",
			to_address: RECIPIENT,
			amount: decimal("-1"),
		})
		.await;
	assert!(matches!(negative, Err(TransferError::ValidationError(_))));

	let too_large = service
		.transfer(&TransferRequest {
			signing_key: &key,
			contract_address: "",
			to_address: RECIPIENT,
			amount: decimal("10000000000000000"),
		})
		.await;
	assert!(matches!(too_large, Err(TransferError::ValidationError(_))));
}
