//! Scatter plot of similarity against weekly downloads.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::{Marker, border};
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::{Canvas, Context, Points};
use ratatui::widgets::{Block, Borders};

use super::rows::{display_name, format_downloads, format_similarity};
use crate::plot::{PlotPoint, Rgb, ScatterGeometry};
use crate::ui::style::Theme;

/// Braille markers pack 2x4 dots into each cell.
const DOTS_PER_COLUMN: f64 = 2.0;
const DOTS_PER_ROW: f64 = 4.0;

pub struct ScatterContext<'a> {
	pub geometry: &'a ScatterGeometry,
	pub highlighted: Option<usize>,
	pub title: &'a str,
	pub empty_message: &'a str,
	pub theme: &'a Theme,
}

pub fn render_scatter(frame: &mut Frame, area: Rect, ctx: ScatterContext<'_>) {
	let ScatterContext {
		geometry,
		highlighted,
		title,
		empty_message,
		theme,
	} = ctx;

	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(border::ROUNDED)
		.border_style(theme.frame_style())
		.title(title.to_string())
		.title_bottom(Line::from("similarity →").right_aligned());
	let inner = block.inner(area);

	let [x_min, x_max] = geometry.x_bounds;
	let [y_min, y_max] = geometry.y_bounds;
	let dot_width = (x_max - x_min) / (f64::from(inner.width.max(1)) * DOTS_PER_COLUMN);
	let dot_height = (y_max - y_min) / (f64::from(inner.height.max(1)) * DOTS_PER_ROW);
	let muted = theme.empty_style();
	let label_style = Style::new().fg(theme.header_fg());
	let focus_style = theme.highlight_style().add_modifier(Modifier::BOLD);

	let canvas = Canvas::default()
		.block(block)
		.marker(Marker::Braille)
		.x_bounds(geometry.x_bounds)
		.y_bounds(geometry.y_bounds)
		.paint(|painter| {
			if geometry.is_empty() {
				painter.print(x_min, (y_min + y_max) / 2.0, Span::styled(empty_message.to_string(), muted));
				return;
			}

			painter.print(x_min, y_max, Span::styled(axis_downloads(y_max), muted));
			painter.print(x_min, y_min, Span::styled(axis_downloads(y_min), muted));
			let right_label = format_similarity(x_max);
			painter.print(
				x_max - dot_width * DOTS_PER_COLUMN * right_label.len() as f64,
				y_min,
				Span::styled(right_label, muted),
			);

			for point in &geometry.points {
				draw_point(painter, point, dot_width, dot_height);
			}
			painter.layer();

			for point in &geometry.points {
				let focused = highlighted == Some(point.index);
				let style = if focused { focus_style } else { label_style };
				painter.print(
					point.x + dot_width * DOTS_PER_COLUMN,
					point.y,
					Span::styled(display_name(&point.name), style),
				);
			}
		});

	frame.render_widget(canvas, area);
}

/// Larger points are drawn as a small cluster of dots around the centre.
fn draw_point(painter: &mut Context<'_>, point: &PlotPoint, dot_width: f64, dot_height: f64) {
	let reach = i32::from(point.size_class());
	let mut coords = Vec::with_capacity(((2 * reach + 1) * (2 * reach + 1)) as usize);
	for dx in -reach..=reach {
		for dy in -reach..=reach {
			coords.push((
				point.x + f64::from(dx) * dot_width,
				point.y + f64::from(dy) * dot_height,
			));
		}
	}
	painter.draw(&Points {
		coords: &coords,
		color: to_color(point.color),
	});
}

fn to_color(Rgb(r, g, b): Rgb) -> Color {
	Color::Rgb(r, g, b)
}

/// Axis label for a log10 download value.
fn axis_downloads(log_value: f64) -> String {
	let downloads = 10f64.powf(log_value.max(0.0)).round() as u64;
	format!("{} dl/wk", format_downloads(downloads))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn axis_labels_undo_the_log_scale() {
		assert_eq!(axis_downloads(3.0), "1,000 dl/wk");
		assert_eq!(axis_downloads(-0.5), "1 dl/wk");
	}
}
