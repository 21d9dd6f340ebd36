use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Which presentation of the results is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
	#[default]
	Table,
	Plot,
}

impl View {
	pub const ALL: [View; 2] = [Self::Table, Self::Plot];

	#[must_use]
	pub fn id(self) -> &'static str {
		match self {
			Self::Table => "table",
			Self::Plot => "plot",
		}
	}

	#[must_use]
	pub fn toggled(self) -> Self {
		match self {
			Self::Table => Self::Plot,
			Self::Plot => Self::Table,
		}
	}
}

impl fmt::Display for View {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.id())
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown view `{0}` (expected table or plot)")]
pub struct UnknownView(pub String);

impl FromStr for View {
	type Err = UnknownView;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value.trim().to_ascii_lowercase().as_str() {
			"table" => Ok(Self::Table),
			"plot" | "scatter" => Ok(Self::Plot),
			_ => Err(UnknownView(value.to_string())),
		}
	}
}

/// Text rendered around the search prompt, tabs and panels.
#[derive(Debug, Clone)]
pub struct UiLabels {
	/// Title rendered in front of the query input.
	pub prompt_title: String,
	/// Dimmed text shown while the query is empty.
	pub placeholder: String,
	/// Status line text when there is nothing else to report.
	pub hint: String,
	/// Label appended to the result count.
	pub count_label: String,
	pub table_tab: String,
	pub plot_tab: String,
	pub info_title: String,
	pub info_paragraphs: Vec<String>,
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			prompt_title: "Search".to_string(),
			placeholder: "Describe the package you need, e.g. a library that creates beautiful plots"
				.to_string(),
			hint: "Enter search  Tab table/plot  F2-F4 sort  F1 info  Esc quit".to_string(),
			count_label: "results".to_string(),
			table_tab: "Table".to_string(),
			plot_tab: "Plot".to_string(),
			info_title: "How does this work?".to_string(),
			info_paragraphs: vec![
				"This application lets you search for Python packages on PyPI using natural \
				 language. An example query would be \"a package that creates plots and \
				 beautiful visualizations\"."
					.to_string(),
				"Once you search, your query is matched against the summary and the first part \
				 of the description of all PyPI packages with more than 50 weekly downloads. \
				 The results are then scored based on their similarity and their number of \
				 weekly downloads, and the best results are displayed below."
					.to_string(),
			],
		}
	}
}

impl UiLabels {
	#[must_use]
	pub fn tab_label(&self, view: View) -> &str {
		match view {
			View::Table => &self.table_tab,
			View::Plot => &self.plot_tab,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn views_parse_and_toggle() {
		assert_eq!("Plot".parse::<View>(), Ok(View::Plot));
		assert_eq!("table".parse::<View>(), Ok(View::Table));
		assert!("grid".parse::<View>().is_err());
		assert_eq!(View::Table.toggled(), View::Plot);
		assert_eq!(View::default(), View::Table);
	}
}
