use serde::Serialize;

use crate::search::Match;

/// How an interactive session ended.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchOutcome {
	/// `true` when the user picked a package, `false` when they quit.
	pub accepted: bool,
	pub query: String,
	pub selection: Option<Match>,
}

impl SearchOutcome {
	#[must_use]
	pub fn cancelled(query: impl Into<String>) -> Self {
		Self {
			accepted: false,
			query: query.into(),
			selection: None,
		}
	}

	#[must_use]
	pub fn accepted(query: impl Into<String>, selection: Match) -> Self {
		Self {
			accepted: true,
			query: query.into(),
			selection: Some(selection),
		}
	}

	/// The chosen package, if the session ended with a selection.
	#[must_use]
	pub fn selected(&self) -> Option<&Match> {
		self.selection.as_ref().filter(|_| self.accepted)
	}
}
