use std::sync::Arc;

use tracing::{debug, warn};

use super::DEFAULT_TOP_K;
use super::client::SearchTransport;
use super::error::SearchError;
use super::sort::{SortOrder, sort_matches};
use super::types::{Match, SearchRequest};

/// Turns a query into exactly one request against the search service and
/// returns the matches in the requested order.
///
/// The dispatcher holds no per-request state and is cheap to clone, so each
/// background search can carry its own handle.
#[derive(Clone)]
pub struct QueryDispatcher {
	transport: Arc<dyn SearchTransport>,
	default_top_k: u32,
}

impl QueryDispatcher {
	pub fn new(transport: impl SearchTransport + 'static) -> Self {
		Self::from_shared(Arc::new(transport))
	}

	pub fn from_shared(transport: Arc<dyn SearchTransport>) -> Self {
		Self {
			transport,
			default_top_k: DEFAULT_TOP_K,
		}
	}

	/// Result cap used when a search does not name one.
	#[must_use]
	pub fn with_default_top_k(mut self, top_k: u32) -> Self {
		self.default_top_k = top_k;
		self
	}

	#[must_use]
	pub fn default_top_k(&self) -> u32 {
		self.default_top_k
	}

	/// Run one search. Service warnings are logged and never turned into
	/// errors; no retries are attempted.
	pub fn search(
		&self,
		query: &str,
		top_k: Option<u32>,
		order: SortOrder,
	) -> Result<Vec<Match>, SearchError> {
		let request = SearchRequest {
			query: query.to_string(),
			top_k: top_k.unwrap_or(self.default_top_k),
		};

		let response = self.transport.search(&request).inspect_err(|err| {
			warn!(error = %err, query = %request.query, "search request failed");
		})?;

		if response.warning {
			warn!(
				message = response.warning_message.as_deref().unwrap_or("(none)"),
				"search service returned a warning"
			);
		}
		debug!(
			count = response.matches.len(),
			field = %order.field,
			direction = %order.direction,
			"search completed"
		);

		Ok(sort_matches(&response.matches, order))
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Mutex;

	use super::*;
	use crate::search::{SearchResponse, SortDirection, SortField};

	#[derive(Default)]
	struct RecordingTransport {
		requests: Mutex<Vec<SearchRequest>>,
		response: Option<SearchResponse>,
		failure: Option<SearchError>,
	}

	impl SearchTransport for RecordingTransport {
		fn search(&self, request: &SearchRequest) -> Result<SearchResponse, SearchError> {
			self.requests.lock().unwrap().push(request.clone());
			match (&self.failure, &self.response) {
				(Some(err), _) => Err(err.clone()),
				(None, Some(response)) => Ok(response.clone()),
				(None, None) => Ok(SearchResponse::default()),
			}
		}
	}

	fn response(warning: bool) -> SearchResponse {
		SearchResponse {
			matches: vec![
				Match::new("b", 0.5, 200, ""),
				Match::new("a", 0.9, 100, ""),
			],
			warning,
			warning_message: warning.then(|| "index stale".to_string()),
		}
	}

	#[test]
	fn posts_query_with_default_top_k() {
		let transport = Arc::new(RecordingTransport::default());
		let dispatcher = QueryDispatcher::from_shared(transport.clone()).with_default_top_k(20);

		dispatcher
			.search("http client", None, SortOrder::default())
			.unwrap();
		dispatcher
			.search("orm", Some(5), SortOrder::default())
			.unwrap();

		let requests = transport.requests.lock().unwrap();
		assert_eq!(
			*requests,
			vec![
				SearchRequest {
					query: "http client".into(),
					top_k: 20
				},
				SearchRequest {
					query: "orm".into(),
					top_k: 5
				},
			]
		);
	}

	#[test]
	fn results_follow_requested_order() {
		let dispatcher = QueryDispatcher::new(RecordingTransport {
			response: Some(response(false)),
			..RecordingTransport::default()
		});
		let matches = dispatcher
			.search(
				"q",
				None,
				SortOrder::new(SortField::Similarity, SortDirection::Desc),
			)
			.unwrap();
		let names: Vec<_> = matches.iter().map(|m| m.name.as_str()).collect();
		assert_eq!(names, ["a", "b"]);
	}

	#[test]
	fn warnings_do_not_fail_the_search() {
		let dispatcher = QueryDispatcher::new(RecordingTransport {
			response: Some(response(true)),
			..RecordingTransport::default()
		});
		let matches = dispatcher.search("q", None, SortOrder::default()).unwrap();
		assert_eq!(matches.len(), 2);
	}

	#[test]
	fn rate_limit_is_surfaced() {
		let dispatcher = QueryDispatcher::new(RecordingTransport {
			failure: Some(SearchError::RateLimited),
			..RecordingTransport::default()
		});
		let err = dispatcher
			.search("q", None, SortOrder::default())
			.unwrap_err();
		assert!(err.is_rate_limited());
	}
}
