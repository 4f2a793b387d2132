//! Round-robin rotation over API credentials.

use std::sync::Mutex;

use crate::{models::SecretString, services::blockchain::BlockChainError};

/// Hands out credentials in turn to spread load across API keys.
///
/// The cursor is shared by every caller of one client; a full cycle of `len()`
/// calls visits every credential once, starting wherever the cursor sits.
#[derive(Debug)]
pub struct CredentialRotator {
	credentials: Vec<SecretString>,
	cursor: Mutex<usize>,
}

impl CredentialRotator {
	pub fn new(credentials: Vec<SecretString>) -> Self {
		Self {
			credentials,
			cursor: Mutex::new(0),
		}
	}

	pub fn len(&self) -> usize {
		self.credentials.len()
	}

	pub fn is_empty(&self) -> bool {
		self.credentials.is_empty()
	}

	/// Returns the credential under the cursor and advances it.
	pub fn next(&self) -> Result<SecretString, BlockChainError> {
		let len = self.credentials.len();
		if len == 0 {
			return Err(BlockChainError::configuration_error(
				"No API credentials configured",
				None,
				None,
			));
		}

		// a panic elsewhere cannot leave the index out of range, so keep using it
		let mut cursor = self.cursor.lock().unwrap_or_else(|e| e.into_inner());
		if *cursor >= len {
			*cursor = 0;
		}
		let credential = self.credentials[*cursor].clone();
		*cursor = (*cursor + 1) % len;
		Ok(credential)
	}
}
