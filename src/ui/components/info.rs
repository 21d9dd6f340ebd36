use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::symbols::border;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::ui::style::Theme;

/// Explanation panel toggled with F1.
pub fn render_info(frame: &mut Frame, area: Rect, title: &str, paragraphs: &[String], theme: &Theme) {
	if area.width == 0 || area.height == 0 {
		return;
	}
	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(border::ROUNDED)
		.border_style(theme.frame_style())
		.title(Span::styled(
			title.to_string(),
			theme.prompt_style().add_modifier(Modifier::BOLD),
		));

	let mut lines = Vec::new();
	for (i, paragraph) in paragraphs.iter().enumerate() {
		if i > 0 {
			lines.push(Line::default());
		}
		lines.push(Line::from(paragraph.as_str()));
	}

	let body = Paragraph::new(Text::from(lines))
		.block(block)
		.wrap(Wrap { trim: true });
	frame.render_widget(Clear, area);
	frame.render_widget(body, area);
}
