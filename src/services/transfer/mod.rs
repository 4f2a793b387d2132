//! Value transfers.
//!
//! - `builder`: unsigned transfer construction and TRC20 call data
//! - `service`: the classify, scale, build, sign and broadcast pipeline
//! - `balance`: display rendering of account balances

mod balance;
mod builder;
mod error;
mod service;

pub use balance::render_balances;
pub use builder::{
	build_native_transfer, build_token_transfer, parse_address, transfer_call_data,
	TRANSFER_CALL_DATA_LENGTH, TRANSFER_SELECTOR,
};
pub use error::TransferError;
pub use service::TransferService;
