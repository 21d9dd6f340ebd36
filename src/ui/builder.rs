use anyhow::Result;

use super::config::{UiLabels, View};
use super::style::Theme;
use super::{App, SearchOutcome};
use crate::search::{QueryDispatcher, SortOrder};

/// Builder for configuring the interactive search UI before running it.
pub struct SearchUi {
	dispatcher: QueryDispatcher,
	initial_query: Option<String>,
	labels: Option<UiLabels>,
	theme: Option<Theme>,
	order: SortOrder,
	view: View,
	top_k: Option<u32>,
	show_info: bool,
}

impl SearchUi {
	pub fn new(dispatcher: QueryDispatcher) -> Self {
		Self {
			dispatcher,
			initial_query: None,
			labels: None,
			theme: None,
			order: SortOrder::default(),
			view: View::default(),
			top_k: None,
			show_info: false,
		}
	}

	/// Pre-fill the query; a non-blank query is searched on start.
	pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
		self.initial_query = Some(query.into());
		self
	}

	pub fn with_labels(mut self, labels: UiLabels) -> Self {
		self.labels = Some(labels);
		self
	}

	/// Use the named theme. Unknown names keep the default.
	pub fn with_theme_name(mut self, name: &str) -> Self {
		if let Some(theme) = super::style::by_name(name) {
			self.theme = Some(theme);
		}
		self
	}

	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = Some(theme);
		self
	}

	pub fn with_sort_order(mut self, order: SortOrder) -> Self {
		self.order = order;
		self
	}

	pub fn with_view(mut self, view: View) -> Self {
		self.view = view;
		self
	}

	pub fn with_top_k(mut self, top_k: u32) -> Self {
		self.top_k = Some(top_k);
		self
	}

	pub fn with_info_visible(mut self, visible: bool) -> Self {
		self.show_info = visible;
		self
	}

	/// Assemble the [`App`] without starting the terminal.
	pub fn build<'a>(self) -> App<'a> {
		let mut app = App::new(self.dispatcher);
		if let Some(query) = self.initial_query {
			app.set_query(query);
		}
		if let Some(labels) = self.labels {
			app.set_labels(labels);
		}
		if let Some(theme) = self.theme {
			app.set_theme(theme);
		}
		app.set_order(self.order);
		app.set_view(self.view);
		app.set_top_k(self.top_k);
		app.set_show_info(self.show_info);
		app
	}

	/// Run the interactive search UI with the configured options.
	pub fn run(self) -> Result<SearchOutcome> {
		self.build().run()
	}
}
