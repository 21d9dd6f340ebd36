use anyhow::{Result, anyhow};

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::build_config;
use crate::cli::CliArgs;

/// Load configuration by combining CLI arguments, config files and environment
/// variables.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let builder = build_config(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	raw.resolve(cli)
}

#[cfg(test)]
mod tests {
	use std::fs;

	use clap::Parser;

	use super::*;
	use pyscout::search::{SortDirection, SortField};
	use pyscout::ui::View;

	#[test]
	fn explicit_config_file_is_merged_and_cli_wins() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("custom.toml");
		fs::write(
			&path,
			r#"
[api]
url = "https://search.example.org/"
top_k = 20

[ui]
theme = "light"
sort_field = "similarity"
view = "plot"
"#,
		)
		.unwrap();

		let cli = CliArgs::parse_from([
			"pyscout",
			"--no-config",
			"--config",
			path.to_str().unwrap(),
			"--top-k",
			"7",
		]);
		let config = load(&cli).unwrap();

		assert_eq!(config.api_url, "https://search.example.org/");
		assert_eq!(config.top_k, 7);
		assert_eq!(config.theme.as_deref(), Some("light"));
		assert_eq!(config.sort_order.field, SortField::Similarity);
		assert_eq!(config.sort_order.direction, SortDirection::Desc);
		assert_eq!(config.view, View::Plot);
	}

	#[test]
	fn missing_explicit_config_file_is_an_error() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("absent.toml");
		let cli = CliArgs::parse_from(["pyscout", "--no-config", "--config", path.to_str().unwrap()]);
		assert!(load(&cli).is_err());
	}

	#[test]
	fn invalid_file_value_reports_config_key() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("bad.toml");
		fs::write(&path, "[api]\ntimeout_secs = 0\n").unwrap();

		let cli = CliArgs::parse_from(["pyscout", "--no-config", "--config", path.to_str().unwrap()]);
		let message = load(&cli).unwrap_err().to_string();
		assert!(message.contains("api.timeout_secs"), "{message}");
		assert!(message.contains("configuration key"), "{message}");
	}
}
