use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `pyscout` binary.
#[derive(Parser, Debug)]
#[command(
	name = "pyscout",
	version,
	long_version = long_version(),
	about = "Search PyPI packages in plain language from the terminal",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "PYSCOUT_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'u',
		long = "api-url",
		value_name = "URL",
		help = "Base URL of the search service (default: http://localhost:8000)"
	)]
	pub(crate) api_url: Option<String>,
	#[arg(
		short = 'k',
		long = "top-k",
		value_name = "N",
		help = "Maximum number of results per query (default: 50)"
	)]
	pub(crate) top_k: Option<u32>,
	#[arg(
		long = "timeout",
		value_name = "SECS",
		help = "Request timeout in seconds (default: 30)"
	)]
	pub(crate) timeout: Option<u64>,
	#[arg(
		short = 'q',
		long = "query",
		value_name = "QUERY",
		help = "Provide an initial search query (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		short = 's',
		long = "sort",
		value_name = "FIELD",
		help = "Sort results by name, similarity or weekly_downloads (alias: downloads) (default: weekly_downloads)"
	)]
	pub(crate) sort: Option<String>,
	#[arg(
		short = 'd',
		long = "direction",
		value_name = "DIR",
		help = "Sort direction, asc or desc (default: desc)"
	)]
	pub(crate) direction: Option<String>,
	#[arg(
		long = "view",
		value_name = "VIEW",
		help = "Start in the table or plot view (default: table)"
	)]
	pub(crate) view: Option<String>,
	#[arg(
		short = 'i',
		long = "info",
		help = "Show the info panel on start (default: hidden)"
	)]
	pub(crate) info: bool,
	#[arg(
		long = "print",
		help = "Run one search for --query, print the sorted results and exit (default: interactive)"
	)]
	pub(crate) print: bool,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'v',
		long = "verbose",
		help = "Log at debug level unless PYSCOUT_LOG is set (default: info)"
	)]
	pub(crate) verbose: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
}
