use serde::{Deserialize, Deserializer, Serialize};

const PROJECT_URL_BASE: &str = "https://pypi.org/project";

/// A single package returned by the search service.
///
/// Matches are produced only by the service; the client reorders copies but
/// never edits them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
	pub name: String,
	pub similarity: f64,
	pub weekly_downloads: u64,
	#[serde(default, deserialize_with = "null_as_empty")]
	pub summary: String,
}

impl Match {
	pub fn new(
		name: impl Into<String>,
		similarity: f64,
		weekly_downloads: u64,
		summary: impl Into<String>,
	) -> Self {
		Self {
			name: name.into(),
			similarity,
			weekly_downloads,
			summary: summary.into(),
		}
	}

	/// Link to the package page on PyPI.
	#[must_use]
	pub fn project_url(&self) -> String {
		format!("{PROJECT_URL_BASE}/{}/", self.name)
	}
}

/// Body of `POST /search`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
	pub query: String,
	pub top_k: u32,
}

/// Body returned by the search service.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SearchResponse {
	pub matches: Vec<Match>,
	#[serde(default)]
	pub warning: bool,
	#[serde(default)]
	pub warning_message: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
	D: Deserializer<'de>,
{
	Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn request_serializes_query_and_top_k() {
		let request = SearchRequest {
			query: "plotting library".into(),
			top_k: 50,
		};
		let value = serde_json::to_value(&request).unwrap();
		assert_eq!(
			value,
			serde_json::json!({ "query": "plotting library", "top_k": 50 })
		);
	}

	#[test]
	fn response_without_warning_fields_defaults_to_no_warning() {
		let body = r#"{"matches":[{"name":"numpy","similarity":0.82,"weekly_downloads":1000,"summary":"arrays"}]}"#;
		let response: SearchResponse = serde_json::from_str(body).unwrap();
		assert_eq!(response.matches.len(), 1);
		assert!(!response.warning);
		assert_eq!(response.warning_message, None);
	}

	#[test]
	fn response_carries_warning_message() {
		let body = r#"{"matches":[],"warning":true,"warning_message":"index stale"}"#;
		let response: SearchResponse = serde_json::from_str(body).unwrap();
		assert!(response.warning);
		assert_eq!(response.warning_message.as_deref(), Some("index stale"));
	}

	#[test]
	fn null_summary_becomes_empty() {
		let body = r#"{"name":"x","similarity":0.1,"weekly_downloads":0,"summary":null}"#;
		let parsed: Match = serde_json::from_str(body).unwrap();
		assert_eq!(parsed.summary, "");
	}

	#[test]
	fn project_url_points_at_pypi() {
		let m = Match::new("requests", 0.5, 10, "HTTP for humans");
		assert_eq!(m.project_url(), "https://pypi.org/project/requests/");
	}
}
