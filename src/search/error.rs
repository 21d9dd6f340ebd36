use thiserror::Error;

/// Shown to the user when the service answers with HTTP 429.
pub const RATE_LIMIT_MESSAGE: &str = "Rate limit reached. Please wait a minute and try again.";

/// Shown to the user for every other failed search.
pub const FETCH_ERROR_MESSAGE: &str = "Error fetching search results.";

const TOO_MANY_REQUESTS: u16 = 429;

/// Ways a search request can fail. None of them are fatal: the caller keeps
/// its previous results and may search again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
	#[error("search service rate limit reached (HTTP 429)")]
	RateLimited,
	#[error("search service responded with HTTP {0}")]
	Status(u16),
	#[error("search request timed out")]
	Timeout,
	#[error("search request failed: {0}")]
	Transport(String),
	#[error("invalid search response: {0}")]
	Decode(String),
	#[error("search request ended without reporting a result")]
	Abandoned,
}

impl SearchError {
	/// Classify a non-success HTTP status.
	#[must_use]
	pub fn from_status(code: u16) -> Self {
		if code == TOO_MANY_REQUESTS {
			Self::RateLimited
		} else {
			Self::Status(code)
		}
	}

	#[must_use]
	pub fn is_rate_limited(&self) -> bool {
		matches!(self, Self::RateLimited)
	}

	/// Text suitable for the status line. Details stay in the logs.
	#[must_use]
	pub fn user_message(&self) -> &'static str {
		if self.is_rate_limited() {
			RATE_LIMIT_MESSAGE
		} else {
			FETCH_ERROR_MESSAGE
		}
	}
}
