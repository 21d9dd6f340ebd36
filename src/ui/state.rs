//! Core state container for the terminal front-end.

use ratatui::widgets::TableState;
use throbber_widgets_tui::ThrobberState;

use super::config::{UiLabels, View};
use super::input::SearchInput;
use super::style::{StyleConfig, Theme};
use crate::search::{Match, QueryDispatcher, ResultsState, SearchRuntime, SortOrder};

/// Aggregate state shared across the terminal UI.
///
/// The search lifecycle lives in [`ResultsState`] and [`SearchRuntime`]; the
/// `App` adds what only the terminal needs: the input editor, the table
/// selection, the active view and the spinner.
pub struct App<'a> {
	/// Query editor.
	pub search_input: SearchInput<'a>,
	/// Selection state for the results table and plot.
	pub table_state: TableState,
	pub(crate) labels: UiLabels,
	pub style: StyleConfig,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) results: ResultsState,
	pub(crate) search: SearchRuntime,
	pub(crate) top_k: Option<u32>,
	pub(crate) view: View,
	pub(crate) show_info: bool,
	/// Trimmed text of the most recently submitted query.
	pub(crate) submitted_query: Option<String>,
}

impl<'a> App<'a> {
	pub fn new(dispatcher: QueryDispatcher) -> Self {
		Self {
			search_input: SearchInput::default(),
			table_state: TableState::default(),
			labels: UiLabels::default(),
			style: StyleConfig::default(),
			throbber_state: ThrobberState::default(),
			results: ResultsState::default(),
			search: SearchRuntime::new(dispatcher),
			top_k: None,
			view: View::default(),
			show_info: false,
			submitted_query: None,
		}
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.style.theme = theme;
	}

	pub fn set_query(&mut self, query: impl Into<String>) {
		self.search_input = SearchInput::new(query);
	}

	pub fn set_order(&mut self, order: SortOrder) {
		self.results.set_order(order);
	}

	pub fn set_view(&mut self, view: View) {
		self.view = view;
	}

	pub fn set_top_k(&mut self, top_k: Option<u32>) {
		self.top_k = top_k;
	}

	pub fn set_show_info(&mut self, show: bool) {
		self.show_info = show;
	}

	pub fn set_labels(&mut self, labels: UiLabels) {
		self.labels = labels;
	}

	#[must_use]
	pub fn results(&self) -> &ResultsState {
		&self.results
	}

	#[must_use]
	pub fn view(&self) -> View {
		self.view
	}

	/// Package under the highlight, if any.
	#[must_use]
	pub fn highlighted(&self) -> Option<&Match> {
		let index = self.table_state.selected()?;
		self.results.results().get(index)
	}

	pub(crate) fn result_len(&self) -> usize {
		self.results.results().len()
	}

	/// Keep the highlight on a valid row after the result list changes.
	pub(crate) fn ensure_selection(&mut self) {
		let len = self.result_len();
		match self.table_state.selected() {
			_ if len == 0 => self.table_state.select(None),
			None => self.table_state.select(Some(0)),
			Some(selected) if selected >= len => self.table_state.select(Some(len - 1)),
			Some(_) => {}
		}
	}
}
