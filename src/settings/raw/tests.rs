use clap::Parser;

use pyscout::search::{SortDirection, SortField};
use pyscout::ui::View;

use super::RawConfig;
use crate::cli::CliArgs;

#[test]
fn cli_overrides_take_precedence() {
	let cli = CliArgs::parse_from([
		"pyscout",
		"--api-url",
		"https://search.example.org",
		"--top-k",
		"12",
		"--timeout",
		"3",
		"--theme",
		"solarized",
		"--query",
		"http clients",
		"--sort",
		"name",
		"--direction",
		"asc",
		"--view",
		"plot",
		"--info",
	]);

	let mut config = RawConfig::default();
	config.api.url = Some("http://other.example.org".into());
	config.ui.theme = Some("light".into());
	config.apply_cli_overrides(&cli);

	assert_eq!(config.api.url, cli.api_url);
	assert_eq!(config.api.top_k, Some(12));
	assert_eq!(config.api.timeout_secs, Some(3));
	assert_eq!(config.ui.theme, cli.theme);
	assert_eq!(config.ui.initial_query, cli.initial_query);
	assert_eq!(config.ui.show_info, Some(true));

	let resolved = config.resolve(&cli).unwrap();
	assert_eq!(resolved.api_url, "https://search.example.org");
	assert_eq!(resolved.sort_order.field, SortField::Name);
	assert_eq!(resolved.sort_order.direction, SortDirection::Asc);
	assert_eq!(resolved.view, View::Plot);
	assert!(resolved.show_info);
}

#[test]
fn empty_config_resolves_to_defaults() {
	let cli = CliArgs::parse_from(["pyscout"]);
	let resolved = RawConfig::default().resolve(&cli).unwrap();

	assert_eq!(resolved.api_url, "http://localhost:8000");
	assert_eq!(resolved.top_k, 50);
	assert_eq!(resolved.timeout_secs, 30);
	assert_eq!(resolved.theme, None);
	assert!(resolved.initial_query.is_empty());
	assert_eq!(resolved.sort_order.field, SortField::WeeklyDownloads);
	assert_eq!(resolved.sort_order.direction, SortDirection::Desc);
	assert_eq!(resolved.view, View::Table);
	assert!(!resolved.show_info);
}

#[test]
fn unknown_sort_field_names_its_origin() {
	let cli = CliArgs::parse_from(["pyscout", "--sort", "stars"]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);

	let message = config.resolve(&cli).unwrap_err().to_string();
	assert!(message.contains("ui.sort_field"), "{message}");
	assert!(message.contains("CLI flag `--sort`"), "{message}");
	assert!(message.contains("value: stars"), "{message}");
}

#[test]
fn unknown_view_from_config_file_is_rejected() {
	let cli = CliArgs::parse_from(["pyscout"]);
	let mut config = RawConfig::default();
	config.ui.view = Some("chart".into());

	let message = config.resolve(&cli).unwrap_err().to_string();
	assert!(message.contains("configuration key `ui.view`"), "{message}");
}

#[test]
fn downloads_aliases_resolve_to_weekly_downloads() {
	let cli = CliArgs::parse_from(["pyscout"]);
	for alias in ["downloads", "weekly-downloads", "Weekly_Downloads"] {
		let mut config = RawConfig::default();
		config.ui.sort_field = Some(alias.into());
		config.ui.sort_direction = Some("asc".into());

		let resolved = config.resolve(&cli).unwrap();
		assert_eq!(resolved.sort_order.field, SortField::WeeklyDownloads, "{alias}");
		assert_eq!(resolved.sort_order.direction, SortDirection::Asc);
	}
}
