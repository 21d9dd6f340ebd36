use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{
	Block, Borders, Cell, HighlightSpacing, Paragraph, Row, Table, TableState,
};

use crate::ui::style::Theme;

pub(crate) const HIGHLIGHT_SYMBOL: &str = "▶ ";
pub(crate) const TABLE_COLUMN_SPACING: u16 = 1;
/// Header row + separator height inside the table's viewport.
pub(crate) const TABLE_HEADER_ROWS: u16 = 2;

/// Fully materialized table configuration.
pub struct TableSpec<'a> {
	pub headers: Vec<String>,
	pub widths: Vec<Constraint>,
	pub rows: Vec<Row<'a>>,
	pub title: Option<String>,
	/// Shown centred below the header when there are no rows.
	pub empty_message: Option<&'a str>,
}

/// Render a bordered results table.
pub fn render_table(
	frame: &mut Frame,
	area: Rect,
	table_state: &mut TableState,
	spec: TableSpec<'_>,
	theme: &Theme,
) {
	let mut block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(theme.frame_style());

	if let Some(title) = spec.title.clone() {
		block = block.title(title);
	}

	let inner = block.inner(area);
	frame.render_widget(block, area);

	let empty_message = spec.empty_message;
	let is_empty = spec.rows.is_empty();
	render_configured_table(frame, inner, table_state, theme, spec);

	if is_empty
		&& let Some(message) = empty_message
		&& inner.height > TABLE_HEADER_ROWS
	{
		let message_area = Rect {
			y: inner.y + TABLE_HEADER_ROWS,
			height: inner.height - TABLE_HEADER_ROWS,
			..inner
		};
		let empty = Paragraph::new(message)
			.style(theme.empty_style())
			.alignment(Alignment::Center);
		frame.render_widget(empty, message_area);
	}
}

fn render_configured_table(
	frame: &mut Frame,
	area: Rect,
	table_state: &mut TableState,
	theme: &Theme,
	spec: TableSpec<'_>,
) {
	let header_cells = spec.headers.into_iter().map(Cell::from).collect::<Vec<_>>();
	let header = Row::new(header_cells)
		.style(Style::new().fg(theme.header_fg()))
		.height(1)
		.bottom_margin(1);

	let mut widths = spec.widths;
	if widths.is_empty() {
		widths = vec![Constraint::Fill(1)];
	}

	let table = Table::new(spec.rows, widths)
		.header(header)
		.column_spacing(TABLE_COLUMN_SPACING)
		.highlight_spacing(HighlightSpacing::WhenSelected)
		.row_highlight_style(theme.row_highlight)
		.highlight_symbol(HIGHLIGHT_SYMBOL);
	frame.render_stateful_widget(table, area, table_state);

	render_header_separator(frame, area, theme, 1);
}

fn render_header_separator(frame: &mut Frame, area: Rect, theme: &Theme, header_height: u16) {
	if header_height >= area.height {
		return;
	}
	let sep_y = area.y + header_height;

	let width = area.width as usize;
	if width == 0 {
		return;
	}

	let sep_rect = Rect {
		x: area.x,
		y: sep_y,
		width: area.width,
		height: 1,
	};
	if width <= 2 {
		frame.render_widget(Paragraph::new(" ".repeat(width)), sep_rect);
		return;
	}

	let middle = Span::styled("─".repeat(width - 2), theme.frame_style());
	let spans = vec![Span::raw(" "), middle, Span::raw(" ")];
	frame.render_widget(Paragraph::new(Text::from(Line::from(spans))), sep_rect);
}
