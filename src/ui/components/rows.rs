use ratatui::layout::Constraint;
use ratatui::text::Span;
use ratatui::widgets::{Cell, Row};
use unicode_truncate::UnicodeTruncateStr;
use unicode_width::UnicodeWidthStr;

use crate::search::{Match, SortField, SortOrder};
use crate::ui::style::Theme;

/// Names wider than this are cut and suffixed with [`ELLIPSIS`].
pub const NAME_DISPLAY_WIDTH: usize = 20;
pub const ELLIPSIS: &str = "...";

/// Column order of the results table.
pub const COLUMNS: [SortField; 3] = [
	SortField::Name,
	SortField::Similarity,
	SortField::WeeklyDownloads,
];
pub const SUMMARY_HEADER: &str = "Summary";

/// Width constraints matching [`headers`].
#[must_use]
pub fn column_widths() -> Vec<Constraint> {
	vec![
		Constraint::Length((NAME_DISPLAY_WIDTH + ELLIPSIS.len()) as u16),
		Constraint::Length(12),
		Constraint::Length(18),
		Constraint::Fill(1),
	]
}

/// Column headings, with an arrow on the active sort column.
#[must_use]
pub fn headers(order: SortOrder) -> Vec<String> {
	COLUMNS
		.iter()
		.map(|&field| match order.indicator_for(field) {
			Some(arrow) => format!("{} {arrow}", field.label()),
			None => field.label().to_string(),
		})
		.chain(std::iter::once(SUMMARY_HEADER.to_string()))
		.collect()
}

/// Shorten `name` to [`NAME_DISPLAY_WIDTH`] columns.
#[must_use]
pub fn display_name(name: &str) -> String {
	if name.width() <= NAME_DISPLAY_WIDTH {
		return name.to_string();
	}
	let (head, _) = name.unicode_truncate(NAME_DISPLAY_WIDTH);
	format!("{head}{ELLIPSIS}")
}

#[must_use]
pub fn format_similarity(similarity: f64) -> String {
	format!("{similarity:.3}")
}

/// Render a count with `,` between thousands.
#[must_use]
pub fn format_downloads(downloads: u64) -> String {
	let digits = downloads.to_string();
	let mut out = String::with_capacity(digits.len() + digits.len() / 3);
	for (i, ch) in digits.chars().enumerate() {
		if i > 0 && (digits.len() - i) % 3 == 0 {
			out.push(',');
		}
		out.push(ch);
	}
	out
}

/// Build table rows for `matches` in their current order.
#[must_use]
pub fn build_match_rows<'a>(matches: &'a [Match], theme: &Theme) -> Vec<Row<'a>> {
	matches
		.iter()
		.map(|entry| {
			Row::new([
				Cell::from(Span::styled(
					display_name(&entry.name),
					theme.highlight_style(),
				)),
				Cell::from(format_similarity(entry.similarity)),
				Cell::from(format_downloads(entry.weekly_downloads)),
				Cell::from(entry.summary.as_str()),
			])
		})
		.collect()
}
