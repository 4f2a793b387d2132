//! Case-insensitive deserialization for tagged enums.
//!
//! Configuration files are written by hand, so `{"type": "Plain", ...}` and
//! `{"type": "plain", ...}` should both be accepted.

/// Implements `Deserialize` for an enum serialized as `{"type": ..., "value": ...}`
/// where every variant wraps a value constructible from a `String`.
///
/// The `type` tag is matched against the listed lowercase names ignoring case.
#[macro_export]
macro_rules! impl_case_insensitive_enum {
	($enum_name:ident, { $($variant_str:expr => $variant:ident),* $(,)? }) => {
		impl<'de> ::serde::Deserialize<'de> for $enum_name {
			fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
			where
				D: ::serde::Deserializer<'de>,
			{
				use ::serde::de::Error as _;

				#[derive(::serde::Deserialize)]
				struct Tagged {
					#[serde(rename = "type")]
					tag: String,
					value: ::serde_json::Value,
				}

				let Tagged { tag, value } = Tagged::deserialize(deserializer)?;
				match tag.to_lowercase().as_str() {
					$(
						$variant_str => {
							let content = ::serde_json::from_value::<String>(value).map_err(|e| {
								D::Error::custom(format!(
									concat!("invalid ", $variant_str, " value: {}"),
									e
								))
							})?;
							Ok($enum_name::$variant(content.into()))
						}
					)*
					_ => Err(D::Error::unknown_variant(&tag, &[$($variant_str),*])),
				}
			}
		}
	};
}
