use std::time::Duration;

use pyscout::search::SortOrder;
use pyscout::ui::View;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
	pub api_url: String,
	pub top_k: u32,
	pub timeout_secs: u64,
	pub theme: Option<String>,
	pub initial_query: String,
	pub sort_order: SortOrder,
	pub view: View,
	pub show_info: bool,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	pub fn timeout(&self) -> Duration {
		Duration::from_secs(self.timeout_secs)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		print!("{}", summary::render_summary(self));
	}
}
