use std::sync::mpsc::TryRecvError;

use tracing::info;

use super::App;
use crate::search::{SearchCompletion, SortField};

impl<'a> App<'a> {
	/// Submit the current query. Blank queries are ignored.
	pub(crate) fn request_search(&mut self) -> bool {
		let query = self.search_input.text().trim().to_string();
		if query.is_empty() {
			return false;
		}
		let id = self.results.search_started(&query);
		info!(request = %id, query = %query, "search submitted");
		self.search
			.issue(id, query.clone(), self.top_k, self.results.order());
		self.submitted_query = Some(query);
		true
	}

	/// Drain any completions waiting on the runtime channel.
	pub(crate) fn pump_search_results(&mut self) {
		loop {
			match self.search.try_recv() {
				Ok(completion) => self.handle_completion(completion),
				Err(TryRecvError::Empty) => break,
				Err(TryRecvError::Disconnected) => break,
			}
		}
	}

	/// Apply a completion if it answers the most recent query.
	fn handle_completion(&mut self, completion: SearchCompletion) {
		let SearchCompletion { id, outcome } = completion;
		let applied = match outcome {
			Ok(matches) => self.results.search_succeeded(id, matches),
			Err(err) => self.results.search_failed(id, err),
		};
		if applied {
			if self.results.error().is_none() {
				// Fresh results start at the top.
				self.table_state.select(None);
			}
			self.ensure_selection();
		}
	}

	/// Re-sort the visible results, keeping the highlighted package.
	pub(crate) fn sort_by(&mut self, field: SortField) {
		let highlighted = self.highlighted().map(|m| m.name.clone());
		self.results.sort_changed(field);
		if let Some(name) = highlighted {
			let index = self
				.results
				.results()
				.iter()
				.position(|m| m.name == name);
			self.table_state.select(index);
		}
		self.ensure_selection();
	}

	/// `true` once the visible results answer the query currently typed.
	pub(crate) fn results_match_input(&self) -> bool {
		!self.results.is_busy()
			&& self.results.error().is_none()
			&& self.submitted_query.as_deref() == Some(self.search_input.text().trim())
			&& self.results.shown_query() == self.submitted_query.as_deref()
	}
}
