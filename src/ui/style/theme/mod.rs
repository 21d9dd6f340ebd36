mod builtins;
mod types;

pub use builtins::{DEFAULT_THEME_NAME, LIGHT, SLATE, SOLARIZED};
pub use types::{Theme, ThemeDefinition};

/// Theme used when no name is configured.
#[must_use]
pub fn default_theme() -> Theme {
	SLATE
}

/// Find a built-in theme by name or alias, ignoring case.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	types::find(builtins::BUILT_IN_DEFINITIONS, name).map(|definition| definition.theme)
}

/// Names of the built-in themes, sorted.
#[must_use]
pub fn names() -> Vec<&'static str> {
	let mut names: Vec<_> = builtins::BUILT_IN_DEFINITIONS
		.iter()
		.map(|definition| definition.name)
		.collect();
	names.sort_unstable();
	names
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}
