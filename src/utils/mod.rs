//! Utility modules for common functionality.
//!
//! - amount: Conversion between display amounts and base units
//! - logging: Logging setup and the shared error context
//! - macros: Macros for common functionality
//! - parsing: Parsing utilities
//! - tests: Test builders

pub mod amount;
pub mod logging;
pub mod macros;
pub mod parsing;
pub mod tests;

pub use amount::{from_base_units, parse_base_units, to_base_units, AmountError};
pub use parsing::*;
