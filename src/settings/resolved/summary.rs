use std::fmt::Write;

use super::ResolvedConfig;

pub(super) fn render_summary(config: &ResolvedConfig) -> String {
	let mut out = String::new();
	let _ = writeln!(out, "Effective configuration:");
	let _ = writeln!(out, "  API URL: {}", config.api_url);
	let _ = writeln!(out, "  Results per query: {}", config.top_k);
	let _ = writeln!(out, "  Request timeout: {}s", config.timeout_secs);
	let _ = writeln!(
		out,
		"  UI theme: {}",
		config
			.theme
			.as_deref()
			.unwrap_or("(use the library default)")
	);
	let _ = writeln!(
		out,
		"  Sort: {} {}",
		config.sort_order.field, config.sort_order.direction
	);
	let _ = writeln!(out, "  Start view: {}", config.view);
	let _ = writeln!(out, "  Info panel: {}", bool_to_word(config.show_info));
	if !config.initial_query.is_empty() {
		let _ = writeln!(out, "  Initial query: {}", config.initial_query);
	}
	out
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "shown" } else { "hidden" }
}
