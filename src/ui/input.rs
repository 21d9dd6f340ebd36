//! Single-line query editor built on `tui-textarea`.

use ratatui::Frame;
use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

pub struct SearchInput<'a> {
	textarea: TextArea<'a>,
}

impl<'a> SearchInput<'a> {
	#[must_use]
	pub fn new(initial: impl Into<String>) -> Self {
		let mut textarea = TextArea::new(vec![initial.into()]);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(CursorMove::End);
		Self { textarea }
	}

	/// Current query text.
	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or("")
	}

	/// Feed a key to the editor. Returns `true` when the text changed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		self.textarea.input(key)
	}

	pub fn set_style(&mut self, style: Style) {
		self.textarea.set_style(style);
	}

	pub fn render_textarea(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}

impl Default for SearchInput<'_> {
	fn default() -> Self {
		Self::new(String::new())
	}
}
