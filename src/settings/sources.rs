use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use config::{Config, ConfigError, Environment, File};

use crate::cli::CliArgs;
use pyscout::app_dirs;

/// Prefix of the nested environment overrides, e.g. `PYSCOUT__API__TOP_K`.
pub(super) const ENV_PREFIX: &str = "PYSCOUT";
/// Shorthand for the service base URL.
pub(super) const API_URL_ENV: &str = "PYSCOUT_API_URL";

/// Build a [`Config`] instance by combining default locations with CLI overrides.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(
		Environment::with_prefix(ENV_PREFIX)
			.separator("__")
			.try_parsing(true),
	);

	let api_url = env::var(API_URL_ENV).ok().filter(|url| !url.trim().is_empty());
	builder = builder
		.set_override_option("api.url", api_url)
		.map_err(|err| anyhow!("invalid {API_URL_ENV}: {err}"))?;

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

/// Discover the default configuration file locations that should be consulted.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".pyscout.toml"));
		files.push(current_dir.join("pyscout.toml"));
	}

	files
}
