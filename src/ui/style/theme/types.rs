use ratatui::style::{Color, Style};

/// Styles applied to the terminal UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	pub header: Style,
	pub row_highlight: Style,
	pub prompt: Style,
	pub empty: Style,
	pub highlight: Style,
	/// Status line text for failed searches.
	pub error: Style,
}

impl Theme {
	#[must_use]
	pub fn header_style(&self) -> Style {
		self.header
	}

	#[must_use]
	pub fn prompt_style(&self) -> Style {
		self.prompt
	}

	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}

	#[must_use]
	pub fn highlight_style(&self) -> Style {
		self.highlight
	}

	#[must_use]
	pub fn error_style(&self) -> Style {
		self.error
	}

	#[must_use]
	pub fn header_fg(&self) -> Color {
		self.header.fg.unwrap_or(Color::Reset)
	}

	#[must_use]
	pub fn header_bg(&self) -> Color {
		self.header.bg.unwrap_or(Color::Reset)
	}

	#[must_use]
	pub fn row_highlight_bg(&self) -> Color {
		self.row_highlight.bg.unwrap_or(Color::Reset)
	}

	/// Border and separator lines.
	#[must_use]
	pub fn frame_style(&self) -> Style {
		Style::new().fg(self.header_fg())
	}

	#[must_use]
	pub fn tab_inactive_style(&self) -> Style {
		Style::new()
			.fg(self.header_fg())
			.bg(self.row_highlight_bg())
	}

	#[must_use]
	pub fn tab_highlight_style(&self) -> Style {
		Style::new().fg(self.header_fg()).bg(self.header_bg())
	}
}

/// A theme bundled with the application.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDefinition {
	pub name: &'static str,
	pub theme: Theme,
	pub aliases: &'static [&'static str],
}

impl ThemeDefinition {
	pub const fn new(name: &'static str, theme: Theme) -> Self {
		Self {
			name,
			theme,
			aliases: &[],
		}
	}

	pub const fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
		self.aliases = aliases;
		self
	}

	fn matches(&self, name: &str) -> bool {
		self.name.eq_ignore_ascii_case(name)
			|| self
				.aliases
				.iter()
				.any(|alias| alias.eq_ignore_ascii_case(name))
	}
}

/// Look up `name` among `definitions`, ignoring case and surrounding space.
pub(super) fn find<'a>(
	definitions: &'a [ThemeDefinition],
	name: &str,
) -> Option<&'a ThemeDefinition> {
	let name = name.trim();
	definitions.iter().find(|definition| definition.matches(name))
}
