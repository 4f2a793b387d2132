//! Test helper utilities
//!
//! - `builders`: Builders for configuration models and node transactions

pub mod builders {
	pub mod client;
	pub mod contract;
	pub mod transaction;
}

pub use builders::*;
