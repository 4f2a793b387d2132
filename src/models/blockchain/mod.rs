//! Chain-specific data models.
//!
//! Only TRON is supported. The submodule holds the address codec, the protobuf
//! transaction models that define the signing payload and the account snapshot
//! returned by the read-only query API.

pub mod tron;
