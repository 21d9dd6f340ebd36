//! The result list the user sees, plus the busy and error flags around it.
//!
//! All mutation goes through four transitions: `search_started`,
//! `search_succeeded`, `search_failed` and `sort_changed`. Every request gets
//! an increasing [`RequestId`]; only the most recently started request may
//! update the display, so a slow response to an older query can never
//! overwrite newer results.

use std::fmt;

use tracing::debug;

use super::error::SearchError;
use super::sort::{SortField, SortOrder, sort_matches};
use super::types::Match;

/// Identifier handed out by [`ResultsState::search_started`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl RequestId {
	#[must_use]
	pub fn get(self) -> u64 {
		self.0
	}
}

impl fmt::Display for RequestId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.0)
	}
}

#[derive(Debug, Clone, Default)]
pub struct ResultsState {
	results: Vec<Match>,
	order: SortOrder,
	busy: bool,
	error: Option<SearchError>,
	issued: u64,
	pending: Option<RequestId>,
	pending_query: Option<String>,
	shown_query: Option<String>,
}

impl ResultsState {
	#[must_use]
	pub fn new(order: SortOrder) -> Self {
		Self {
			order,
			..Self::default()
		}
	}

	/// Record that a new search was sent. Clears any previous error and
	/// marks the state busy until this request (or a newer one) completes.
	pub fn search_started(&mut self, query: &str) -> RequestId {
		self.issued = self.issued.wrapping_add(1);
		let id = RequestId(self.issued);
		if let Some(previous) = self.pending.replace(id) {
			debug!(superseded = %previous, request = %id, "search superseded by newer request");
		}
		self.pending_query = Some(query.to_string());
		self.busy = true;
		self.error = None;
		id
	}

	/// Apply a successful response. Returns `false` when `id` is not the
	/// latest request, in which case nothing changes.
	pub fn search_succeeded(&mut self, id: RequestId, matches: Vec<Match>) -> bool {
		if !self.accepts(id) {
			return false;
		}
		// The order may have changed while the request was in flight.
		self.results = sort_matches(&matches, self.order);
		self.shown_query = self.pending_query.take();
		self.finish();
		true
	}

	/// Apply a failed response. Previous results stay visible.
	pub fn search_failed(&mut self, id: RequestId, error: SearchError) -> bool {
		if !self.accepts(id) {
			return false;
		}
		self.error = Some(error);
		self.pending_query = None;
		self.finish();
		true
	}

	/// Select a sort column, using the toggle rules of [`SortOrder::toggle`],
	/// and reorder the visible results.
	pub fn sort_changed(&mut self, field: SortField) -> SortOrder {
		self.set_order(self.order.toggle(field));
		self.order
	}

	/// Replace the order outright and reorder the visible results.
	pub fn set_order(&mut self, order: SortOrder) {
		self.order = order;
		self.results = sort_matches(&self.results, order);
	}

	#[must_use]
	pub fn results(&self) -> &[Match] {
		&self.results
	}

	#[must_use]
	pub fn order(&self) -> SortOrder {
		self.order
	}

	#[must_use]
	pub fn is_busy(&self) -> bool {
		self.busy
	}

	#[must_use]
	pub fn error(&self) -> Option<&SearchError> {
		self.error.as_ref()
	}

	/// The message to show the user, if the last search failed.
	#[must_use]
	pub fn error_message(&self) -> Option<&'static str> {
		self.error.as_ref().map(SearchError::user_message)
	}

	/// Query whose results are currently displayed.
	#[must_use]
	pub fn shown_query(&self) -> Option<&str> {
		self.shown_query.as_deref()
	}

	#[must_use]
	pub fn pending_request(&self) -> Option<RequestId> {
		self.pending
	}

	fn accepts(&self, id: RequestId) -> bool {
		if self.pending == Some(id) {
			return true;
		}
		debug!(request = %id, latest = self.issued, "discarding stale search response");
		false
	}

	fn finish(&mut self) {
		self.pending = None;
		self.busy = false;
	}
}
