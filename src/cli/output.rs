use std::fmt::Write;

use anyhow::Result;
use pyscout::ui::components::rows::{display_name, format_downloads, format_similarity};
use pyscout::{Match, SearchOutcome, SortOrder};
use serde_json::json;

/// Format the interactive outcome as plain text.
pub(crate) fn format_outcome_plain(outcome: &SearchOutcome) -> String {
	if !outcome.accepted {
		return format!("Search cancelled (query: '{}')", outcome.query);
	}

	match outcome.selected() {
		Some(package) => format!("{}\n{}", package.name, package.project_url()),
		None => "No selection".to_string(),
	}
}

/// Print a plain-text representation of the search outcome.
pub(crate) fn print_plain(outcome: &SearchOutcome) {
	println!("{}", format_outcome_plain(outcome));
}

/// Format the search outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &SearchOutcome) -> Result<String> {
	let selection = match outcome.selected() {
		Some(package) => match_json(package),
		None => serde_json::Value::Null,
	};

	let payload = json!({
		"accepted": outcome.accepted,
		"query": outcome.query,
		"selection": selection,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the search outcome.
pub(crate) fn print_json(outcome: &SearchOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

/// Format a one-shot result list as aligned plain-text rows.
pub(crate) fn format_results_plain(matches: &[Match]) -> String {
	if matches.is_empty() {
		return "No results".to_string();
	}

	let mut out = String::new();
	for package in matches {
		let _ = writeln!(
			out,
			"{:<20}  {:>6}  {:>13}  {}",
			display_name(&package.name),
			format_similarity(package.similarity),
			format_downloads(package.weekly_downloads),
			package.summary
		);
	}
	out.truncate(out.trim_end().len());
	out
}

pub(crate) fn print_results_plain(matches: &[Match]) {
	println!("{}", format_results_plain(matches));
}

/// Format a one-shot result list as JSON, including the order it was sorted by.
pub(crate) fn format_results_json(query: &str, order: SortOrder, matches: &[Match]) -> Result<String> {
	let results: Vec<_> = matches.iter().map(match_json).collect();
	let payload = json!({
		"query": query,
		"sort": {
			"field": order.field.id(),
			"direction": order.direction.id(),
		},
		"results": results,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

pub(crate) fn print_results_json(query: &str, order: SortOrder, matches: &[Match]) -> Result<()> {
	println!("{}", format_results_json(query, order, matches)?);
	Ok(())
}

fn match_json(package: &Match) -> serde_json::Value {
	json!({
		"name": package.name,
		"similarity": package.similarity,
		"weekly_downloads": package.weekly_downloads,
		"summary": package.summary,
		"url": package.project_url(),
	})
}

#[cfg(test)]
mod tests {
	use pyscout::{SortDirection, SortField};
	use serde_json::Value;

	use super::*;

	fn numpy() -> Match {
		Match::new("numpy", 0.91, 1_234_567, "Array computing")
	}

	#[test]
	fn json_format_includes_package_selection() {
		let outcome = SearchOutcome::accepted("arrays", numpy());

		let json = format_outcome_json(&outcome).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["accepted"], true);
		assert_eq!(value["selection"]["name"], "numpy");
		assert_eq!(value["selection"]["url"], "https://pypi.org/project/numpy/");
	}

	#[test]
	fn cancelled_outcome_has_null_selection() {
		let outcome = SearchOutcome::cancelled("arrays");

		let value: Value =
			serde_json::from_str(&format_outcome_json(&outcome).unwrap()).unwrap();
		assert_eq!(value["accepted"], false);
		assert!(value["selection"].is_null());
		assert_eq!(
			format_outcome_plain(&outcome),
			"Search cancelled (query: 'arrays')"
		);
	}

	#[test]
	fn plain_outcome_prints_name_and_link() {
		let outcome = SearchOutcome::accepted("arrays", numpy());
		assert_eq!(
			format_outcome_plain(&outcome),
			"numpy\nhttps://pypi.org/project/numpy/"
		);
	}

	#[test]
	fn plain_results_use_table_formatting() {
		let rows = format_results_plain(&[
			numpy(),
			Match::new("a-very-long-package-name-indeed", 0.5, 3, ""),
		]);
		let lines: Vec<_> = rows.lines().collect();
		assert_eq!(lines.len(), 2);
		assert!(lines[0].starts_with("numpy"));
		assert!(lines[0].contains("0.910"));
		assert!(lines[0].contains("1,234,567"));
		assert!(lines[1].contains("..."));
		assert_eq!(format_results_plain(&[]), "No results");
	}

	#[test]
	fn json_results_record_sort_order() {
		let order = SortOrder::new(SortField::Similarity, SortDirection::Asc);
		let json = format_results_json("arrays", order, &[numpy()]).unwrap();
		let value: Value = serde_json::from_str(&json).unwrap();
		assert_eq!(value["sort"]["field"], "similarity");
		assert_eq!(value["sort"]["direction"], "asc");
		assert_eq!(value["results"][0]["weekly_downloads"], 1_234_567);
	}
}
