use std::fmt::Display;
use std::ops::RangeInclusive;

use thiserror::Error;

use super::SettingSource;

/// A setting that failed validation, naming where the bad value came from.
#[derive(Debug, Error)]
#[error("invalid value for {key} from {origin}: {reason} (value: {value})")]
pub(crate) struct ConfigError {
	pub(crate) key: &'static str,
	pub(crate) value: String,
	pub(crate) origin: SettingSource,
	pub(crate) reason: String,
}

impl ConfigError {
	pub(crate) fn invalid(
		key: &'static str,
		value: impl Into<String>,
		origin: SettingSource,
		reason: impl Into<String>,
	) -> Self {
		Self {
			key,
			value: value.into(),
			origin,
			reason: reason.into(),
		}
	}

	pub(crate) fn out_of_range<T: Display>(
		key: &'static str,
		value: T,
		origin: SettingSource,
		range: &RangeInclusive<T>,
	) -> Self {
		Self::invalid(
			key,
			value.to_string(),
			origin,
			format!("must be between {} and {}", range.start(), range.end()),
		)
	}
}
