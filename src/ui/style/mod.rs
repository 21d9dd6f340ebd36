//! Visual styling utilities.
//!
//! Themes are the colour schemes applied to the terminal UI.

pub mod theme;

pub use theme::{
	DEFAULT_THEME_NAME, Theme, ThemeDefinition, by_name, default_theme, names,
};

/// Aggregate container for styling knobs.
#[derive(Clone, Debug, Default)]
pub struct StyleConfig {
	pub theme: Theme,
}

impl StyleConfig {
	#[must_use]
	pub fn with_theme(theme: Theme) -> Self {
		Self { theme }
	}
}
