//! Node client implementations.

mod tron {
	pub mod client;
}

pub use tron::client::{
	TronClient, TronClientTrait, BROADCAST_HEX_PATH, CREATE_TRANSACTION_PATH,
	TRIGGER_SMART_CONTRACT_PATH,
};
