use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ui::style::Theme;

pub struct StatusContext<'a> {
	/// Error for the last search, shown instead of the hint.
	pub error: Option<&'a str>,
	pub hint: &'a str,
	/// Link of the highlighted package.
	pub link: Option<String>,
	pub theme: &'a Theme,
}

/// Render the link line followed by the status line. Expects a two-row area.
pub fn render_status(frame: &mut Frame, area: Rect, ctx: StatusContext<'_>) {
	let StatusContext {
		error,
		hint,
		link,
		theme,
	} = ctx;
	if area.height == 0 {
		return;
	}

	let link_line = match link {
		Some(url) => Line::from(vec![
			Span::styled("→ ", theme.empty_style()),
			Span::styled(url, theme.prompt_style()),
		]),
		None => Line::default(),
	};
	let status_line = match error {
		Some(message) => Line::from(Span::styled(message.to_string(), theme.error_style())),
		None => Line::from(Span::styled(hint.to_string(), theme.empty_style())),
	};

	let lines = if area.height >= 2 {
		vec![link_line, status_line]
	} else {
		vec![status_line]
	};
	frame.render_widget(Paragraph::new(lines), area);
}
