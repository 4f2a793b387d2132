//! TRON data models.

mod account;
mod address;
mod api;
mod transaction;

pub use account::TronAccount;
pub use address::{AddressError, TronAddress, ADDRESS_LENGTH, ADDRESS_VERSION};
pub use api::{
	BroadcastHexRequest, BroadcastResponse, CreateTransactionRequest, NodeTransaction,
	TriggerResult, TriggerSmartContractRequest, TriggerSmartContractResponse,
};
pub use transaction::{
	Any, ContractType, RawTransactionError, SignedTransaction, Transaction, TransactionContract,
	TransactionRaw, TransferContract, TriggerSmartContract, UnsignedTransaction,
	TRANSFER_CONTRACT_TYPE_URL, TRIGGER_SMART_CONTRACT_TYPE_URL,
};
