mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{
	CliArgs, OutputFormat, parse_cli, print_json, print_plain, print_results_json,
	print_results_plain,
};
use pyscout::logging::{self, LogTarget};
use pyscout::{app_dirs, ui};
use workflow::SearchWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in ui::style::names() {
			println!("{name}");
		}
		return Ok(());
	}

	init_logging(&cli);

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	let workflow = SearchWorkflow::from_config(resolved);
	if cli.print {
		run_once(cli.output, &workflow)
	} else {
		run_search(cli.output, workflow)
	}
}

/// Send logs to a file while the UI owns the terminal, and to stderr in
/// one-shot mode. Failing to set up logging is never fatal.
fn init_logging(cli: &CliArgs) {
	let target = if cli.print {
		Ok(LogTarget::Stderr)
	} else {
		app_dirs::get_data_dir().map(|dir| LogTarget::File(logging::log_file_path(&dir)))
	};

	if let Err(err) = target.and_then(|target| logging::initialize(target, cli.verbose)) {
		eprintln!("warning: logging disabled: {err:#}");
	}
}

/// Execute the interactive workflow and print output in the chosen format.
fn run_search(format: OutputFormat, workflow: SearchWorkflow) -> Result<()> {
	let outcome = workflow.run_interactive()?;

	match format {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}

fn run_once(format: OutputFormat, workflow: &SearchWorkflow) -> Result<()> {
	let matches = workflow.run_once()?;

	match format {
		OutputFormat::Plain => print_results_plain(&matches),
		OutputFormat::Json => print_results_json(workflow.query(), workflow.sort_order(), &matches)?,
	}

	Ok(())
}
