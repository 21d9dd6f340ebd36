use serde::Deserialize;

use crate::cli::CliArgs;

pub(super) const DEFAULT_API_URL: &str = "http://localhost:8000";
pub(super) const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Search service connection settings prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct ApiSection {
	pub(super) url: Option<String>,
	pub(super) top_k: Option<u32>,
	pub(super) timeout_secs: Option<u64>,
}

pub(super) struct ApiResolution {
	pub(super) url: String,
	pub(super) top_k: u32,
	pub(super) timeout_secs: u64,
}

impl ApiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(url) = cli.api_url.clone() {
			self.url = Some(url);
		}
		if let Some(top_k) = cli.top_k {
			self.top_k = Some(top_k);
		}
		if let Some(timeout) = cli.timeout {
			self.timeout_secs = Some(timeout);
		}
	}

	pub(super) fn finalize(self) -> ApiResolution {
		ApiResolution {
			url: self
				.url
				.map(|url| url.trim().to_string())
				.unwrap_or_else(|| DEFAULT_API_URL.to_string()),
			top_k: self.top_k.unwrap_or(pyscout::search::DEFAULT_TOP_K),
			timeout_secs: self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
		}
	}
}
