//! Command-line entry point for TRON transfers.
//!
//! Loads the client configuration, reads the signing key from the environment
//! and submits one transfer. With `--check` it only validates the configuration.
//!
//! # Flow
//! 1. Applies CLI options to the environment and sets up logging
//! 2. Loads and validates the configuration file
//! 3. Builds the contract registry and node client
//! 4. Signs and broadcasts the transfer, printing its transaction id

use clap::Parser;
use dotenvy::dotenv_override;
use rust_decimal::Decimal;
use std::{
	env::{set_var, var},
	path::PathBuf,
};
use tracing::{error, info};

use tron_transfer::{
	bootstrap::{initialize_services, load_config, parse_signing_key, Result, PRIVATE_KEY_ENV},
	models::{get_env_var, SecretString, TransferRequest, DEFAULT_CONFIG_PATH, NATIVE_SENTINEL},
	utils::{logging::setup_logging, parse_string_to_bytes_size},
};

#[derive(Parser)]
#[command(
	name = "tron-transfer",
	about = "Submits TRX and TRC20 transfers to the TRON network through a full node.",
	version
)]
struct Cli {
	/// Write logs to file instead of stdout
	#[arg(long)]
	log_file: bool,

	/// Set log level (trace, debug, info, warn, error)
	#[arg(long, value_name = "LEVEL")]
	log_level: Option<String>,

	/// Path to store log files (default: logs/)
	#[arg(long, value_name = "PATH")]
	log_path: Option<String>,

	/// Maximum log file size before rolling (e.g., "1GB", "500MB", "1024KB")
	#[arg(long, value_name = "SIZE", value_parser = parse_string_to_bytes_size)]
	log_max_size: Option<u64>,

	/// Path to the client configuration file
	#[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
	config: PathBuf,

	/// Recipient address (base58)
	#[arg(long, value_name = "ADDRESS", required_unless_present = "check")]
	to: Option<String>,

	/// Amount in display units, e.g. 1.5
	#[arg(long, value_name = "AMOUNT", required_unless_present = "check")]
	amount: Option<Decimal>,

	/// Token contract address; omit or pass "trx" for a native transfer
	#[arg(long, value_name = "ADDRESS", default_value = NATIVE_SENTINEL)]
	contract: String,

	/// Validate the configuration file without sending anything
	#[arg(long)]
	check: bool,
}

impl Cli {
	/// Apply CLI options to environment variables, overriding any existing values
	fn apply_to_env(&self) {
		dotenv_override().ok();

		if self.log_file {
			set_var("LOG_MODE", "file");
		}

		if let Ok(level) = var("RUST_LOG") {
			set_var("LOG_LEVEL", level);
		}

		if let Some(level) = &self.log_level {
			set_var("LOG_LEVEL", level);
			set_var("RUST_LOG", level);
		}

		if let Some(path) = &self.log_path {
			set_var("LOG_DATA_DIR", path);
		}

		if let Some(max_size) = &self.log_max_size {
			set_var("LOG_MAX_SIZE", max_size.to_string());
		}
	}
}

#[tokio::main]
async fn main() -> Result<()> {
	let cli = Cli::parse();
	cli.apply_to_env();

	setup_logging().unwrap_or_else(|e| {
		error!("Failed to setup logging: {}", e);
	});

	let config = load_config(&cli.config).await.map_err(|e| {
		anyhow::anyhow!(
			"Failed to load configuration from {}: {}",
			cli.config.display(),
			e
		)
	})?;

	if cli.check {
		info!(
			endpoints = config.endpoints.len(),
			contracts = config.contracts.len(),
			"Configuration is valid"
		);
		return Ok(());
	}

	let service = initialize_services(&config)?;

	let secret = SecretString::new(get_env_var(PRIVATE_KEY_ENV)?);
	let signing_key = parse_signing_key(&secret)?;
	drop(secret);

	let to = cli.to.ok_or_else(|| anyhow::anyhow!("--to is required"))?;
	let amount = cli.amount.ok_or_else(|| anyhow::anyhow!("--amount is required"))?;

	let request = TransferRequest {
		signing_key: &signing_key,
		contract_address: &cli.contract,
		to_address: &to,
		amount,
	};

	match service.transfer(&request).await {
		Ok(txid) => {
			info!(txid = %txid, "Transfer submitted");
			println!("{}", txid);
			Ok(())
		}
		Err(e) => {
			if let Some(txid) = e.txid() {
				error!(
					txid = %txid,
					"Transfer outcome unknown, check the transaction id on-chain"
				);
			}
			Err(e.into())
		}
	}
}
