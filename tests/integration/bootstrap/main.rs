use mockito::Matcher;
use rust_decimal::Decimal;
use serde_json::json;
use std::{io::Write, str::FromStr};
use tempfile::TempDir;

use tron_transfer::{
	bootstrap::{initialize_services, load_config},
	models::TransferRequest,
	services::blockchain::API_KEY_HEADER,
	utils::tests::builders::transaction::NodeTransactionBuilder,
};

use crate::integration::mocks::{address, address_of, create_node_server, signing_key, RECIPIENT};

fn write_config(dir: &TempDir, endpoint: &str) -> std::path::PathBuf {
	let path = dir.path().join("client.json");
	let mut file = std::fs::File::create(&path).unwrap();
	write!(
		file,
		r#"{{
			"endpoints": ["{}"],
			"api_keys": [{{"type": "plain", "value": "key-a"}}, {{"type": "plain", "value": "key-b"}}],
			"timeouts": {{"connect_ms": 2000, "request_ms": 5000}},
			"contracts": [
				{{"address": "TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t", "kind": "trc20", "decimals": 6, "name": "usdt"}}
			]
		}}"#,
		endpoint
	)
	.unwrap();
	path
}

#[tokio::test]
async fn test_native_transfer_through_http_node() {
	let (mut server, probe) = create_node_server().await;
	let key = signing_key(5);
	let owner = address_of(&key);
	let to = address(RECIPIENT);
	let node_transaction = NodeTransactionBuilder::new().transfer(&owner, &to, 250_000).build();
	let txid = node_transaction.tx_id.clone().unwrap();

	let create = server
		.mock("POST", "/wallet/createtransaction")
		.match_header(API_KEY_HEADER, "key-a")
		.match_body(Matcher::Json(json!({
			"owner_address": owner.to_hex(),
			"to_address": to.to_hex(),
			"amount": 250000,
			"visible": false,
		})))
		.with_status(200)
		.with_header("content-type", "application/json")
		.with_body(
			json!({
				"txID": txid,
				"raw_data_hex": node_transaction.raw_data_hex,
				"visible": false,
			})
			.to_string(),
		)
		.create();
	let broadcast = server
		.mock("POST", "/wallet/broadcasthex")
		.match_header(API_KEY_HEADER, "key-b")
		.with_status(200)
		.with_header("content-type", "application/json")
		.with_body(json!({"result": true, "txid": txid}).to_string())
		.create();

	let dir = TempDir::new().unwrap();
	let config = load_config(&write_config(&dir, &server.url())).await.unwrap();
	let service = initialize_services(&config).unwrap();

	let result = service
		.transfer(&TransferRequest {
			signing_key: &key,
			contract_address: "trx",
			to_address: RECIPIENT,
			amount: Decimal::from_str("0.25").unwrap(),
		})
		.await
		.unwrap();

	assert_eq!(result, txid);
	probe.assert();
	create.assert();
	broadcast.assert();
}

#[tokio::test]
async fn test_load_config_rejects_missing_file() {
	let dir = TempDir::new().unwrap();
	let result = load_config(&dir.path().join("missing.json")).await;
	assert!(result.is_err());
}
