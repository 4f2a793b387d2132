//! Parsing utilities shared by the CLI and the configuration models.

use byte_unit::Byte;
use std::str::FromStr;

/// Parses a human-readable size ("1GB", "500MB", "1024KiB") into bytes.
pub fn parse_string_to_bytes_size(s: &str) -> Result<u64, String> {
	Byte::from_str(s)
		.map(|byte| byte.as_u64())
		.map_err(|e| format!("Invalid size format: '{}'. Error: {}", s, e))
}

/// Trims surrounding whitespace and lowercases the input.
pub fn normalize_string(input: &str) -> String {
	input.trim().to_lowercase()
}

/// Decodes a remote diagnostic message.
///
/// Full nodes hex-encode byte fields in JSON responses, so messages that are valid
/// hex of printable UTF-8 text are decoded and anything else is returned unchanged.
pub fn decode_remote_message(raw: &str) -> String {
	hex::decode(raw)
		.ok()
		.and_then(|bytes| String::from_utf8(bytes).ok())
		.filter(|decoded| !decoded.is_empty() && !decoded.chars().any(char::is_control))
		.unwrap_or_else(|| raw.to_string())
}
