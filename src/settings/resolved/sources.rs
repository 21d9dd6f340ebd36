use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Where each validated setting came from, for error messages.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) api_url: Option<SettingSource>,
	pub(crate) top_k: Option<SettingSource>,
	pub(crate) timeout: Option<SettingSource>,
	pub(crate) theme: Option<SettingSource>,
	pub(crate) sort_field: Option<SettingSource>,
	pub(crate) sort_direction: Option<SettingSource>,
	pub(crate) view: Option<SettingSource>,
}

fn or_key(source: &Option<SettingSource>, key: &'static str) -> SettingSource {
	source.clone().unwrap_or(SettingSource::ConfigKey(key))
}

impl ConfigSources {
	pub(crate) fn source_for_api_url(&self) -> SettingSource {
		or_key(&self.api_url, "api.url")
	}

	pub(crate) fn source_for_top_k(&self) -> SettingSource {
		or_key(&self.top_k, "api.top_k")
	}

	pub(crate) fn source_for_timeout(&self) -> SettingSource {
		or_key(&self.timeout, "api.timeout_secs")
	}

	pub(crate) fn source_for_theme(&self) -> SettingSource {
		or_key(&self.theme, "ui.theme")
	}

	pub(crate) fn source_for_sort_field(&self) -> SettingSource {
		or_key(&self.sort_field, "ui.sort_field")
	}

	pub(crate) fn source_for_sort_direction(&self) -> SettingSource {
		or_key(&self.sort_direction, "ui.sort_direction")
	}

	pub(crate) fn source_for_view(&self) -> SettingSource {
		or_key(&self.view, "ui.view")
	}
}
