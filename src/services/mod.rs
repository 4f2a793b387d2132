//! Core services implementing the business logic.
//!
//! - `blockchain`: node connection, transport and wallet API client
//! - `signer`: transaction signing
//! - `transfer`: the transfer pipeline and balance rendering

pub mod blockchain;
pub mod signer;
pub mod transfer;
