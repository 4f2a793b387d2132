//! Client for submitting TRX and TRC20 transfers to the TRON network.
//!
//! Transfers are built by a full node over its HTTP wallet API, signed locally
//! and broadcast back. API keys are rotated per call and the node connection is
//! re-dialed against a random endpoint once it fails.
//!
//! # Module Structure
//!
//! - `bootstrap`: Loads configuration and wires the transfer service
//! - `models`: Addresses, transactions, configuration and secrets
//! - `repositories`: Contract registry
//! - `services`: Node access, signing and the transfer pipeline
//! - `utils`: Amount scaling, logging and helper functions

pub mod bootstrap;
pub mod models;
pub mod repositories;
pub mod services;
pub mod utils;
