//! Core crate exports for `pyscout`, a terminal client for a natural-language
//! PyPI package search service.
//!
//! The [`search`] module holds the request lifecycle and result ordering and
//! has no terminal dependencies. [`ui`] builds the interactive picker on top
//! of it, and [`plot`] computes the scatter-plot geometry both share.

pub mod app_dirs;
pub mod logging;
pub mod plot;
pub mod search;
pub mod ui;

pub use search::{
	HttpSearchClient, Match, QueryDispatcher, SearchError, SearchTransport, SortDirection,
	SortField, SortOrder, sort_matches,
};
pub use ui::style::{Theme, default_theme};
pub use ui::{SearchOutcome, SearchUi, UiLabels, View, run};
