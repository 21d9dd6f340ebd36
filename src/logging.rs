//! Tracing subscriber setup.
//!
//! The interactive UI owns the terminal, so log lines go to a file in the
//! data directory. One-shot mode writes to stderr instead, keeping stdout
//! clean for the printed results.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive string.
pub const LOG_ENV: &str = "PYSCOUT_LOG";
const LOG_FILE_NAME: &str = "pyscout.log";

/// Where log output is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
	File(PathBuf),
	Stderr,
}

/// Path of the log file inside `data_dir`.
#[must_use]
pub fn log_file_path(data_dir: &Path) -> PathBuf {
	data_dir.join(LOG_FILE_NAME)
}

/// Filter used when `PYSCOUT_LOG` is unset or invalid.
#[must_use]
pub fn default_directive(verbose: bool) -> &'static str {
	if verbose { "debug" } else { "info" }
}

fn env_filter(verbose: bool) -> EnvFilter {
	EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

/// Install the global subscriber. Calling this twice is harmless; the second
/// call leaves the first subscriber in place.
pub fn initialize(target: LogTarget, verbose: bool) -> Result<()> {
	let builder = tracing_subscriber::fmt()
		.with_env_filter(env_filter(verbose))
		.with_target(false);

	match target {
		LogTarget::Stderr => {
			let _ = builder.with_writer(io::stderr).try_init();
		}
		LogTarget::File(path) => {
			let file = open_log_file(&path)?;
			let _ = builder
				.with_ansi(false)
				.with_writer(Mutex::new(file))
				.try_init();
		}
	}
	Ok(())
}

fn open_log_file(path: &Path) -> Result<File> {
	if let Some(parent) = path.parent() {
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create log directory {}", parent.display()))?;
	}
	OpenOptions::new()
		.create(true)
		.append(true)
		.open(path)
		.with_context(|| format!("failed to open log file {}", path.display()))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn verbose_raises_default_level() {
		assert_eq!(default_directive(false), "info");
		assert_eq!(default_directive(true), "debug");
	}

	#[test]
	fn log_file_is_created_with_parents() {
		let dir = tempfile::tempdir().unwrap();
		let path = log_file_path(&dir.path().join("nested"));
		open_log_file(&path).unwrap();
		assert!(path.exists());
		assert_eq!(path.file_name().unwrap(), "pyscout.log");
	}
}
