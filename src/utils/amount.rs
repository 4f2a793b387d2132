//! Conversion between display amounts and integer base units.
//!
//! All arithmetic happens on the decimal's mantissa and scale using 256-bit
//! integers, so no precision is lost for any token precision the chain supports.

use alloy::primitives::U256;
use rust_decimal::Decimal;
use thiserror::Error;

/// Largest scale a [`Decimal`] can carry.
const MAX_DECIMAL_SCALE: i32 = 28;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AmountError {
	#[error("amount must not be negative: {0}")]
	NegativeAmount(Decimal),

	#[error("decimals must not be negative: {0}")]
	NegativeDecimals(i32),

	#[error("decimals {0} exceed the supported display precision")]
	DecimalsOutOfRange(i32),

	#[error("amount does not fit in 256 bits once scaled")]
	Overflow,

	#[error("base-unit value {0} cannot be represented as a decimal")]
	Unrepresentable(U256),
}

fn pow10(exp: u32) -> Option<U256> {
	U256::from(10u8).checked_pow(U256::from(exp))
}

/// Scales `amount` by `10^decimals` and truncates toward zero.
///
/// `to_base_units("1.5", 6) == 1_500_000`.
pub fn to_base_units(amount: Decimal, decimals: i32) -> Result<U256, AmountError> {
	if decimals < 0 {
		return Err(AmountError::NegativeDecimals(decimals));
	}
	if amount.is_sign_negative() && !amount.is_zero() {
		return Err(AmountError::NegativeAmount(amount));
	}

	let mantissa = U256::from(amount.mantissa().unsigned_abs());
	let scale = amount.scale();
	let decimals = decimals as u32;

	if decimals >= scale {
		let factor = pow10(decimals - scale).ok_or(AmountError::Overflow)?;
		mantissa.checked_mul(factor).ok_or(AmountError::Overflow)
	} else {
		// scale is at most 28, so the divisor always fits
		let divisor = pow10(scale - decimals).ok_or(AmountError::Overflow)?;
		Ok(mantissa / divisor)
	}
}

/// Renders an integer base-unit value as a display amount with `decimals` places.
pub fn from_base_units(value: U256, decimals: i32) -> Result<Decimal, AmountError> {
	if decimals < 0 {
		return Err(AmountError::NegativeDecimals(decimals));
	}
	if decimals > MAX_DECIMAL_SCALE {
		return Err(AmountError::DecimalsOutOfRange(decimals));
	}

	let mantissa = i128::try_from(value).map_err(|_| AmountError::Unrepresentable(value))?;
	Decimal::try_from_i128_with_scale(mantissa, decimals as u32)
		.map(|d| d.normalize())
		.map_err(|_| AmountError::Unrepresentable(value))
}

/// Parses a decimal string of base units as reported by the node.
pub fn parse_base_units(raw: &str) -> Option<U256> {
	U256::from_str_radix(raw.trim(), 10).ok()
}
