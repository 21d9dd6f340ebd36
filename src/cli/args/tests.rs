use clap::{CommandFactory, FromArgMatches, Parser};

use super::{CliArgs, OutputFormat};

#[test]
fn command_definition_is_consistent() {
	CliArgs::command().debug_assert();
}

#[test]
fn parse_cli_accepts_default_arguments() {
	let command = CliArgs::command();
	let mut matches = command.get_matches_from(vec!["pyscout"]);
	let parsed = CliArgs::from_arg_matches_mut(&mut matches).expect("parses");
	assert_eq!(parsed.output, OutputFormat::Plain);
	assert!(!parsed.print);
	assert!(parsed.initial_query.is_none());
}

#[test]
fn one_shot_flags_parse() {
	let parsed = CliArgs::parse_from([
		"pyscout", "--print", "-q", "plotting", "-k", "10", "-o", "json", "-v",
	]);
	assert!(parsed.print);
	assert!(parsed.verbose);
	assert_eq!(parsed.initial_query.as_deref(), Some("plotting"));
	assert_eq!(parsed.top_k, Some(10));
	assert_eq!(parsed.output, OutputFormat::Json);
}

#[test]
fn config_flag_accumulates() {
	let parsed = CliArgs::parse_from(["pyscout", "-c", "a.toml", "--config", "b.toml"]);
	assert_eq!(parsed.config.len(), 2);
}

#[test]
fn non_numeric_top_k_is_rejected() {
	assert!(CliArgs::try_parse_from(["pyscout", "--top-k", "many"]).is_err());
}
