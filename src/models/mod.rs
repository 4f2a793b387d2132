//! Domain models and data structures.
//!
//! - `blockchain`: TRON addresses, transactions and account snapshots
//! - `config`: Configuration loading and validation
//! - `core`: Core domain models (client settings, contracts, transfers)
//! - `security`: Security models (Secret)

mod blockchain;
mod config;
mod core;
mod security;

pub use blockchain::tron::{
	AddressError, Any, BroadcastHexRequest, BroadcastResponse, ContractType,
	CreateTransactionRequest, NodeTransaction, RawTransactionError, SignedTransaction, Transaction,
	TransactionContract, TransactionRaw, TransferContract, TriggerResult, TriggerSmartContract,
	TriggerSmartContractRequest, TriggerSmartContractResponse, TronAccount, TronAddress,
	UnsignedTransaction, ADDRESS_LENGTH, ADDRESS_VERSION, TRANSFER_CONTRACT_TYPE_URL,
	TRIGGER_SMART_CONTRACT_TYPE_URL,
};

pub use core::{
	ClientConfig, ContractDescriptor, ContractKind, KeepaliveConfig, TimeoutConfig,
	TransferRequest, DEFAULT_FEE_LIMIT, DEFAULT_NATIVE_DECIMALS, NATIVE_SENTINEL,
	UNKNOWN_CONTRACT_DECIMALS,
};

pub use config::{ConfigError, ConfigLoader, DEFAULT_CONFIG_PATH};

pub use security::{get_env_var, SecretString, SecretValue, SecurityError, SecurityResult};
