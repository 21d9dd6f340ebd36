use anyhow::{Result, anyhow, bail};
use pyscout::{HttpSearchClient, Match, QueryDispatcher, SearchOutcome, SearchUi, SortOrder};
use tracing::info;

use crate::settings::ResolvedConfig;

/// Coordinates building and running either the interactive picker or a
/// single printed search.
pub(crate) struct SearchWorkflow {
	config: ResolvedConfig,
	dispatcher: QueryDispatcher,
}

impl SearchWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Self {
		let client = HttpSearchClient::new(&config.api_url, config.timeout());
		info!(endpoint = client.endpoint(), top_k = config.top_k, "using search service");
		let dispatcher = QueryDispatcher::new(client).with_default_top_k(config.top_k);
		Self { config, dispatcher }
	}

	/// Open the terminal UI and block until the user accepts or quits.
	pub(crate) fn run_interactive(self) -> Result<SearchOutcome> {
		SearchUiFactory::build(self.dispatcher, self.config).run()
	}

	/// Run the configured query once and return the sorted matches.
	pub(crate) fn run_once(&self) -> Result<Vec<Match>> {
		let query = self.config.initial_query.trim();
		if query.is_empty() {
			bail!("--print needs a non-empty query (pass --query or set ui.initial_query)");
		}

		self.dispatcher
			.search(query, None, self.config.sort_order)
			.map_err(|err| anyhow!("{} ({err})", err.user_message()))
	}

	pub(crate) fn query(&self) -> &str {
		self.config.initial_query.trim()
	}

	pub(crate) fn sort_order(&self) -> SortOrder {
		self.config.sort_order
	}
}

/// Helper for translating resolved configuration into a configured `SearchUi`.
struct SearchUiFactory;

impl SearchUiFactory {
	fn build(dispatcher: QueryDispatcher, config: ResolvedConfig) -> SearchUi {
		let ResolvedConfig {
			top_k,
			theme,
			initial_query,
			sort_order,
			view,
			show_info,
			..
		} = config;

		let mut search_ui = SearchUi::new(dispatcher)
			.with_initial_query(initial_query)
			.with_sort_order(sort_order)
			.with_view(view)
			.with_top_k(top_k)
			.with_info_visible(show_info);
		if let Some(theme) = theme {
			search_ui = search_ui.with_theme_name(&theme);
		}
		search_ui
	}
}
