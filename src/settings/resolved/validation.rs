use std::ops::RangeInclusive;

use super::{ConfigError, ConfigSources, ResolvedConfig};

const TOP_K_RANGE: RangeInclusive<u32> = 1..=1000;

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	let url = config.api_url.as_str();
	if !(url.starts_with("http://") || url.starts_with("https://")) {
		return Err(ConfigError::invalid(
			"api.url",
			url,
			sources.source_for_api_url(),
			"must start with http:// or https://",
		));
	}

	if !TOP_K_RANGE.contains(&config.top_k) {
		return Err(ConfigError::out_of_range(
			"api.top_k",
			config.top_k,
			sources.source_for_top_k(),
			&TOP_K_RANGE,
		));
	}

	if config.timeout_secs == 0 {
		return Err(ConfigError::invalid(
			"api.timeout_secs",
			"0",
			sources.source_for_timeout(),
			"must be greater than zero",
		));
	}

	if let Some(theme) = &config.theme
		&& pyscout::ui::style::by_name(theme).is_none()
	{
		return Err(ConfigError::invalid(
			"ui.theme",
			theme.as_str(),
			sources.source_for_theme(),
			format!(
				"unknown theme (available: {})",
				pyscout::ui::style::names().join(", ")
			),
		));
	}

	Ok(())
}
