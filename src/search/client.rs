use std::time::Duration;

use tracing::debug;

use super::error::SearchError;
use super::types::{SearchRequest, SearchResponse};

const SEARCH_PATH: &str = "search";

/// Something that can answer a search request.
///
/// The HTTP client is the production implementation; tests substitute
/// in-memory services.
pub trait SearchTransport: Send + Sync {
	fn search(&self, request: &SearchRequest) -> Result<SearchResponse, SearchError>;
}

/// Blocking JSON-over-HTTP client for `POST {base}/search`.
#[derive(Debug, Clone)]
pub struct HttpSearchClient {
	endpoint: String,
	agent: ureq::Agent,
}

impl HttpSearchClient {
	pub fn new(base_url: &str, timeout: Duration) -> Self {
		let config = ureq::Agent::config_builder()
			.timeout_global(Some(timeout))
			.build();
		Self {
			endpoint: search_endpoint(base_url),
			agent: ureq::Agent::new_with_config(config),
		}
	}

	/// Full URL requests are posted to.
	#[must_use]
	pub fn endpoint(&self) -> &str {
		&self.endpoint
	}
}

impl SearchTransport for HttpSearchClient {
	fn search(&self, request: &SearchRequest) -> Result<SearchResponse, SearchError> {
		let body =
			serde_json::to_vec(request).map_err(|err| SearchError::Transport(err.to_string()))?;

		debug!(endpoint = %self.endpoint, top_k = request.top_k, "posting search request");
		let mut response = self
			.agent
			.post(&self.endpoint)
			.header("Content-Type", "application/json")
			.send(&body[..])
			.map_err(classify)?;

		let text = response.body_mut().read_to_string().map_err(classify)?;
		decode_response(&text)
	}
}

fn search_endpoint(base_url: &str) -> String {
	format!("{}/{SEARCH_PATH}", base_url.trim().trim_end_matches('/'))
}

fn classify(err: ureq::Error) -> SearchError {
	match err {
		ureq::Error::StatusCode(code) => SearchError::from_status(code),
		ureq::Error::Timeout(_) => SearchError::Timeout,
		other => SearchError::Transport(other.to_string()),
	}
}

pub(crate) fn decode_response(body: &str) -> Result<SearchResponse, SearchError> {
	serde_json::from_str(body).map_err(|err| SearchError::Decode(err.to_string()))
}
