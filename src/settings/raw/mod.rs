use anyhow::{Error, Result};
use serde::Deserialize;
use std::env;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};
use super::sources::API_URL_ENV;

mod api;
mod ui;

use api::ApiSection;
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	api: ApiSection,
	ui: UiSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.api.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			api_url: detect_source(
				cli.api_url.is_some(),
				self.api.url.is_some(),
				&[API_URL_ENV, "PYSCOUT__API__URL"],
				"--api-url",
				"api.url",
			),
			top_k: detect_source(
				cli.top_k.is_some(),
				self.api.top_k.is_some(),
				&["PYSCOUT__API__TOP_K"],
				"--top-k",
				"api.top_k",
			),
			timeout: detect_source(
				cli.timeout.is_some(),
				self.api.timeout_secs.is_some(),
				&["PYSCOUT__API__TIMEOUT_SECS"],
				"--timeout",
				"api.timeout_secs",
			),
			theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				&["PYSCOUT__UI__THEME"],
				"--theme",
				"ui.theme",
			),
			sort_field: detect_source(
				cli.sort.is_some(),
				self.ui.sort_field.is_some(),
				&["PYSCOUT__UI__SORT_FIELD"],
				"--sort",
				"ui.sort_field",
			),
			sort_direction: detect_source(
				cli.direction.is_some(),
				self.ui.sort_direction.is_some(),
				&["PYSCOUT__UI__SORT_DIRECTION"],
				"--direction",
				"ui.sort_direction",
			),
			view: detect_source(
				cli.view.is_some(),
				self.ui.view.is_some(),
				&["PYSCOUT__UI__VIEW"],
				"--view",
				"ui.view",
			),
		};

		let api = self.api.finalize();
		let ui = self.ui.finalize(&sources).map_err(Error::new)?;

		let config = ResolvedConfig {
			api_url: api.url,
			top_k: api.top_k,
			timeout_secs: api.timeout_secs,
			theme: ui.theme,
			initial_query: ui.initial_query,
			sort_order: ui.sort_order,
			view: ui.view,
			show_info: ui.show_info,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_vars: &[&'static str],
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if let Some(&var) = env_vars.iter().find(|var| env::var_os(var).is_some()) {
		return Some(SettingSource::Environment(var));
	}

	Some(SettingSource::ConfigKey(key))
}

#[cfg(test)]
mod tests;
