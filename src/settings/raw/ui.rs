use serde::Deserialize;

use pyscout::search::{SortDirection, SortField, SortOrder};
use pyscout::ui::View;

use super::super::resolved::{ConfigError, ConfigSources};
use crate::cli::CliArgs;

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) theme: Option<String>,
	pub(super) initial_query: Option<String>,
	pub(super) sort_field: Option<String>,
	pub(super) sort_direction: Option<String>,
	pub(super) view: Option<String>,
	pub(super) show_info: Option<bool>,
}

pub(super) struct UiResolution {
	pub(super) theme: Option<String>,
	pub(super) initial_query: String,
	pub(super) sort_order: SortOrder,
	pub(super) view: View,
	pub(super) show_info: bool,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
		if let Some(query) = cli.initial_query.clone() {
			self.initial_query = Some(query);
		}
		if let Some(field) = cli.sort.clone() {
			self.sort_field = Some(field);
		}
		if let Some(direction) = cli.direction.clone() {
			self.sort_direction = Some(direction);
		}
		if let Some(view) = cli.view.clone() {
			self.view = Some(view);
		}
		if cli.info {
			self.show_info = Some(true);
		}
	}

	pub(super) fn finalize(self, sources: &ConfigSources) -> Result<UiResolution, ConfigError> {
		let defaults = SortOrder::default();

		let field = match self.sort_field {
			Some(raw) => raw.parse::<SortField>().map_err(|err| {
				ConfigError::invalid(
					"ui.sort_field",
					raw.as_str(),
					sources.source_for_sort_field(),
					err.to_string(),
				)
			})?,
			None => defaults.field,
		};
		let direction = match self.sort_direction {
			Some(raw) => raw.parse::<SortDirection>().map_err(|err| {
				ConfigError::invalid(
					"ui.sort_direction",
					raw.as_str(),
					sources.source_for_sort_direction(),
					err.to_string(),
				)
			})?,
			None => defaults.direction,
		};
		let view = match self.view {
			Some(raw) => raw.parse::<View>().map_err(|err| {
				ConfigError::invalid(
					"ui.view",
					raw.as_str(),
					sources.source_for_view(),
					err.to_string(),
				)
			})?,
			None => View::default(),
		};

		let theme = self
			.theme
			.map(|name| name.trim().to_string())
			.filter(|name| !name.is_empty());

		Ok(UiResolution {
			theme,
			initial_query: self.initial_query.unwrap_or_default(),
			sort_order: SortOrder::new(field, direction),
			view,
			show_info: self.show_info.unwrap_or(false),
		})
	}
}
