//! Secret values that are wiped from memory when dropped.
//!
//! API credentials appear in configuration either inline or as a reference to an
//! environment variable. Both forms resolve to a [`SecretString`].

use serde::{Deserialize, Serialize};
use std::{env, fmt};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{
	impl_case_insensitive_enum,
	models::security::error::{SecurityError, SecurityResult},
};

/// A secret as written in configuration.
#[derive(Debug, Clone, Serialize, ZeroizeOnDrop)]
#[serde(tag = "type", content = "value")]
#[serde(deny_unknown_fields)]
pub enum SecretValue {
	/// The secret itself
	Plain(SecretString),
	/// Name of the environment variable holding the secret
	Environment(String),
}

impl_case_insensitive_enum!(SecretValue, {
	"plain" => Plain,
	"environment" => Environment,
});

impl PartialEq for SecretValue {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Self::Plain(l0), Self::Plain(r0)) => l0 == r0,
			(Self::Environment(l0), Self::Environment(r0)) => l0 == r0,
			_ => false,
		}
	}
}

impl SecretValue {
	/// Resolves the secret from its source.
	pub async fn resolve(&self) -> SecurityResult<SecretString> {
		let resolved = match self {
			SecretValue::Plain(secret) => secret.clone(),
			SecretValue::Environment(env_var) => {
				env::var(env_var).map(SecretString::new).map_err(|e| {
					Box::new(SecurityError::parse_error(
						format!("Failed to get environment variable {}", env_var),
						Some(e.into()),
						None,
					))
				})?
			}
		};

		if resolved.as_str().trim().is_empty() {
			return Err(Box::new(SecurityError::validation_error(
				"Secret resolved to an empty value",
				None,
				None,
			)));
		}
		Ok(resolved)
	}

	/// The inline secret, or `None` while it still points at the environment.
	pub fn as_plain(&self) -> Option<SecretString> {
		match self {
			SecretValue::Plain(secret) => Some(secret.clone()),
			SecretValue::Environment(_) => None,
		}
	}

	pub fn is_empty(&self) -> bool {
		match self {
			SecretValue::Plain(secret) => secret.as_str().is_empty(),
			SecretValue::Environment(env_var) => env_var.is_empty(),
		}
	}
}

impl Zeroize for SecretValue {
	fn zeroize(&mut self) {
		match self {
			SecretValue::Plain(secret) => secret.zeroize(),
			SecretValue::Environment(env_var) => env_var.clear(),
		}
	}
}

/// A string that is zeroized when dropped and never printed by `Debug`.
#[derive(Clone, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct SecretString(String);

impl SecretString {
	pub fn new(value: String) -> Self {
		Self(value)
	}

	/// Exposes the secret. Use the reference immediately and do not store it.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl PartialEq for SecretString {
	fn eq(&self, other: &Self) -> bool {
		self.0 == other.0
	}
}

impl fmt::Debug for SecretString {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("SecretString(***)")
	}
}

impl From<String> for SecretString {
	fn from(value: String) -> Self {
		Self::new(value)
	}
}

impl From<&str> for SecretString {
	fn from(value: &str) -> Self {
		Self::new(value.to_string())
	}
}

impl AsRef<str> for SecretString {
	fn as_ref(&self) -> &str {
		self.as_str()
	}
}
