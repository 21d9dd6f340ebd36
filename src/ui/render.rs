use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin, Rect};

use super::App;
use super::components::rows::{build_match_rows, column_widths, headers};
use super::components::{
	InputContext, ProgressState, ScatterContext, StatusContext, TabItem, TableSpec, render_info,
	render_input, render_scatter, render_status, render_table, render_tabs,
};
use super::config::View;
use crate::plot::ScatterGeometry;

const INFO_PANEL_HEIGHT: u16 = 9;
const NO_RESULTS: &str = "No results";
const SEARCHING: &str = "Searching…";

impl App<'_> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let info_height = if self.show_info {
			INFO_PANEL_HEIGHT.min(area.height.saturating_sub(5))
		} else {
			0
		};
		let [input_area, tabs_area, info_area, results_area, status_area] = Layout::vertical([
			Constraint::Length(1),
			Constraint::Length(1),
			Constraint::Length(info_height),
			Constraint::Min(1),
			Constraint::Length(2),
		])
		.areas(area);

		let progress_text = self.progress_text();
		render_input(
			frame,
			InputContext {
				search_input: &self.search_input,
				prompt: &self.labels.prompt_title,
				placeholder: Some(&self.labels.placeholder),
				area: input_area,
				theme: &self.style.theme,
			},
			ProgressState {
				progress_text: &progress_text,
				busy: self.results.is_busy(),
				throbber_state: &self.throbber_state,
			},
		);

		let tabs: Vec<TabItem> = View::ALL
			.iter()
			.map(|&view| TabItem {
				label: self.labels.tab_label(view),
				selected: view == self.view,
			})
			.collect();
		render_tabs(frame, tabs_area, &tabs, &self.style.theme);

		if info_height > 0 {
			render_info(
				frame,
				info_area,
				&self.labels.info_title,
				&self.labels.info_paragraphs,
				&self.style.theme,
			);
		}

		match self.view {
			View::Table => self.render_results_table(frame, results_area),
			View::Plot => self.render_results_plot(frame, results_area),
		}

		render_status(
			frame,
			status_area,
			StatusContext {
				error: self.results.error_message(),
				hint: &self.labels.hint,
				link: self.highlighted().map(|m| m.project_url()),
				theme: &self.style.theme,
			},
		);
	}

	fn progress_text(&self) -> String {
		let count = self.result_len();
		if count == 0 && self.results.shown_query().is_none() {
			return String::new();
		}
		format!(" {count} {}", self.labels.count_label)
	}

	fn results_title(&self) -> Option<String> {
		self.results
			.shown_query()
			.map(|query| format!(" Results for \"{query}\" "))
	}

	fn empty_message(&self) -> &'static str {
		if self.results.is_busy() {
			SEARCHING
		} else {
			NO_RESULTS
		}
	}

	fn render_results_table(&mut self, frame: &mut Frame, area: Rect) {
		let spec = TableSpec {
			headers: headers(self.results.order()),
			widths: column_widths(),
			rows: build_match_rows(self.results.results(), &self.style.theme),
			title: self.results_title(),
			empty_message: Some(self.empty_message()),
		};
		render_table(frame, area, &mut self.table_state, spec, &self.style.theme);
	}

	fn render_results_plot(&self, frame: &mut Frame, area: Rect) {
		let geometry = ScatterGeometry::from_matches(self.results.results());
		let title = self
			.results_title()
			.unwrap_or_else(|| " Weekly downloads (log scale) ".to_string());
		render_scatter(
			frame,
			area,
			ScatterContext {
				geometry: &geometry,
				highlighted: self.table_state.selected(),
				title: &title,
				empty_message: self.empty_message(),
				theme: &self.style.theme,
			},
		);
	}
}
