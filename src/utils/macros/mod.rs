//! Macros shared across the crate.

pub mod deserialization;
