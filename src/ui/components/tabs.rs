use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Tabs};
use throbber_widgets_tui::{Throbber, ThrobberState};
use unicode_width::UnicodeWidthStr;

use crate::ui::input::SearchInput;
use crate::ui::style::Theme;

/// Argument bundle for rendering the prompt row.
pub struct InputContext<'a> {
	pub search_input: &'a SearchInput<'a>,
	pub prompt: &'a str,
	pub placeholder: Option<&'a str>,
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Spinner and summary shown at the right edge of the prompt row.
pub struct ProgressState<'a> {
	pub progress_text: &'a str,
	pub busy: bool,
	pub throbber_state: &'a ThrobberState,
}

/// A selectable tab label.
pub struct TabItem<'a> {
	pub label: &'a str,
	pub selected: bool,
}

/// Render the prompt, the query editor and the progress indicator on one
/// row.
pub fn render_input(frame: &mut Frame, input: InputContext<'_>, progress: ProgressState<'_>) {
	let InputContext {
		search_input,
		prompt,
		placeholder,
		area,
		theme,
	} = input;
	if area.width == 0 || area.height == 0 {
		return;
	}

	let prompt_text = format!("{prompt} > ");
	let prompt_width = (prompt_text.width() as u16).min(area.width);
	let [prompt_area, input_area] =
		Layout::horizontal([Constraint::Length(prompt_width), Constraint::Fill(1)]).areas(area);

	frame.render_widget(
		Paragraph::new(Span::styled(prompt_text, theme.prompt_style())),
		prompt_area,
	);
	search_input.render_textarea(frame, input_area);

	if search_input.text().is_empty()
		&& let Some(placeholder_text) = placeholder
	{
		render_placeholder(frame, input_area, placeholder_text, theme);
	}

	render_progress(frame, input_area, progress, theme);
}

/// Render the view selector.
pub fn render_tabs(frame: &mut Frame, area: Rect, tabs: &[TabItem<'_>], theme: &Theme) {
	if area.width == 0 || area.height == 0 {
		return;
	}
	let selected = tabs.iter().position(|tab| tab.selected).unwrap_or(0);
	let titles: Vec<Line> = tabs
		.iter()
		.map(|tab| Line::from(format!(" {} ", tab.label)))
		.collect();
	let widget = Tabs::new(titles)
		.select(selected)
		.style(theme.tab_inactive_style())
		.highlight_style(theme.tab_highlight_style())
		.divider("")
		.padding("", " ");
	frame.render_widget(widget, area);
}

fn render_placeholder(frame: &mut Frame, area: Rect, text: &str, theme: &Theme) {
	if area.width <= 1 || text.is_empty() {
		return;
	}
	// Leave the first column to the cursor.
	let x = area.left() + 1;
	let width = area.width - 1;
	let display_text: String = text.chars().take(width as usize).collect();
	frame.buffer_mut().set_line(
		x,
		area.top(),
		&Line::from(Span::styled(display_text, theme.empty_style())),
		width,
	);
}

fn render_progress(frame: &mut Frame, area: Rect, progress: ProgressState<'_>, theme: &Theme) {
	let ProgressState {
		progress_text,
		busy,
		throbber_state,
	} = progress;
	if area.width == 0 || area.height == 0 || (progress_text.is_empty() && !busy) {
		return;
	}

	let muted_style = theme.empty_style();
	let mut line = Line::default();
	if busy {
		let spinner = Throbber::default()
			.style(muted_style)
			.throbber_style(muted_style);
		line.spans.push(spinner.to_symbol_span(throbber_state));
	}
	line.spans
		.push(Span::styled(progress_text.to_string(), muted_style));

	let line_width = line.width() as u16;
	if line_width == 0 {
		return;
	}

	let buffer = frame.buffer_mut();
	let mut start_x = area.right().saturating_sub(line_width).max(area.left());

	// Keep clear of the typed query.
	let input_row = area.top();
	let last_char_x = (area.left()..area.right()).rev().find(|&x| {
		buffer
			.cell((x, input_row))
			.is_some_and(|cell| !cell.symbol().trim().is_empty())
	});
	if let Some(last_x) = last_char_x {
		start_x = start_x.max(last_x.saturating_add(3));
	}

	if start_x >= area.right() {
		return;
	}

	let max_width = area.right().saturating_sub(start_x).min(line_width);
	buffer.set_line(start_x, input_row, &line, max_width);
}
