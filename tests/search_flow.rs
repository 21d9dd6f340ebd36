use std::sync::{Arc, Mutex};
use std::time::Duration;

use pyscout::search::{
	FETCH_ERROR_MESSAGE, Match, QueryDispatcher, RATE_LIMIT_MESSAGE, ResultsState, SearchError,
	SearchRequest, SearchResponse, SearchRuntime, SearchTransport, SortDirection, SortField,
	SortOrder, sort_matches,
};

/// Answers each query from a fixed table, recording what was asked.
#[derive(Default)]
struct ScriptedService {
	answers: Vec<(&'static str, Result<SearchResponse, SearchError>)>,
	seen: Mutex<Vec<SearchRequest>>,
}

impl ScriptedService {
	fn answer(mut self, query: &'static str, outcome: Result<SearchResponse, SearchError>) -> Self {
		self.answers.push((query, outcome));
		self
	}
}

impl SearchTransport for ScriptedService {
	fn search(&self, request: &SearchRequest) -> Result<SearchResponse, SearchError> {
		self.seen.lock().unwrap().push(request.clone());
		self.answers
			.iter()
			.find(|(query, _)| *query == request.query)
			.map(|(_, outcome)| outcome.clone())
			.unwrap_or_else(|| Ok(SearchResponse::default()))
	}
}

fn matches() -> Vec<Match> {
	vec![
		Match::new("requests", 0.82, 40_000_000, "HTTP for Humans."),
		Match::new("httpx", 0.9, 9_000_000, "The next generation HTTP client."),
		Match::new("urllib3", 0.61, 70_000_000, ""),
	]
}

fn ok(matches: Vec<Match>) -> Result<SearchResponse, SearchError> {
	Ok(SearchResponse {
		matches,
		..SearchResponse::default()
	})
}

fn names(matches: &[Match]) -> Vec<&str> {
	matches.iter().map(|m| m.name.as_str()).collect()
}

/// Drive one request through the runtime and fold the completion into `state`.
fn round_trip(runtime: &SearchRuntime, state: &mut ResultsState, query: &str) -> bool {
	let id = state.search_started(query);
	runtime.issue(id, query.to_string(), None, state.order());
	let completion = runtime
		.recv_timeout(Duration::from_secs(5))
		.expect("completion");
	match completion.outcome {
		Ok(found) => state.search_succeeded(completion.id, found),
		Err(err) => state.search_failed(completion.id, err),
	}
}

#[test]
fn successful_search_populates_sorted_results() {
	let service = Arc::new(ScriptedService::default().answer("http", ok(matches())));
	let runtime = SearchRuntime::new(QueryDispatcher::from_shared(service.clone()).with_default_top_k(10));
	let mut state = ResultsState::new(SortOrder::default());

	assert!(round_trip(&runtime, &mut state, "http"));
	assert!(!state.is_busy());
	assert_eq!(state.error(), None);
	assert_eq!(names(state.results()), ["urllib3", "requests", "httpx"]);
	assert_eq!(
		service.seen.lock().unwrap().as_slice(),
		[SearchRequest {
			query: "http".into(),
			top_k: 10
		}]
	);
}

#[test]
fn rate_limit_clears_busy_and_reports_message() {
	let service = ScriptedService::default().answer("slow down", Err(SearchError::RateLimited));
	let runtime = SearchRuntime::new(QueryDispatcher::new(service));
	let mut state = ResultsState::default();

	round_trip(&runtime, &mut state, "slow down");
	assert!(!state.is_busy());
	assert_eq!(
		state.error_message(),
		Some("Rate limit reached. Please wait a minute and try again.")
	);
	assert_eq!(state.error_message(), Some(RATE_LIMIT_MESSAGE));
}

#[test]
fn warning_response_still_populates_results() {
	let response = SearchResponse {
		matches: matches(),
		warning: true,
		warning_message: Some("index stale".into()),
	};
	let runtime = SearchRuntime::new(QueryDispatcher::new(
		ScriptedService::default().answer("http", Ok(response)),
	));
	let mut state = ResultsState::default();

	round_trip(&runtime, &mut state, "http");
	assert_eq!(state.results().len(), 3);
	assert_eq!(state.error_message(), None);
}

#[test]
fn transport_failure_keeps_previous_results() {
	let service = ScriptedService::default()
		.answer("http", ok(matches()))
		.answer("offline", Err(SearchError::Transport("connection refused".into())));
	let runtime = SearchRuntime::new(QueryDispatcher::new(service));
	let mut state = ResultsState::default();

	round_trip(&runtime, &mut state, "http");
	round_trip(&runtime, &mut state, "offline");

	assert!(!state.is_busy());
	assert_eq!(state.error_message(), Some(FETCH_ERROR_MESSAGE));
	assert_eq!(state.results().len(), 3);
	assert_eq!(state.shown_query(), Some("http"));
}

#[test]
fn stale_completion_never_overwrites_newer_request() {
	let mut state = ResultsState::default();
	let older = state.search_started("first");
	let newer = state.search_started("second");

	assert!(!state.search_succeeded(older, vec![Match::new("old", 0.1, 1, "")]));
	assert!(state.is_busy());
	assert!(state.results().is_empty());

	assert!(state.search_succeeded(newer, vec![Match::new("new", 0.2, 2, "")]));
	assert!(!state.is_busy());
	assert_eq!(names(state.results()), ["new"]);
}

#[test]
fn sorting_descending_reverses_ascending_for_distinct_values() {
	let input = matches();
	for field in SortField::ALL {
		let asc = sort_matches(&input, SortOrder::new(field, SortDirection::Asc));
		let desc = sort_matches(&asc, SortOrder::new(field, SortDirection::Desc));
		let mut reversed = asc.clone();
		reversed.reverse();
		assert_eq!(desc, reversed, "{field}");
	}
}

#[test]
fn header_toggle_matches_documented_rules() {
	let mut state = ResultsState::new(SortOrder::new(SortField::Similarity, SortDirection::Desc));
	assert_eq!(
		state.sort_changed(SortField::Similarity),
		SortOrder::new(SortField::Similarity, SortDirection::Asc)
	);
	assert_eq!(
		state.sort_changed(SortField::Name),
		SortOrder::new(SortField::Name, SortDirection::Asc)
	);
}
