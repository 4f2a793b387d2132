//! Repositories of configured data.
//!
//! - Contract: the registry mapping contract addresses to their kind and precision

mod contract;
mod error;

pub use contract::{ContractEntry, ContractRepository, ContractRepositoryTrait};
pub use error::RepositoryError;
