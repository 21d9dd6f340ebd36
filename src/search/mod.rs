//! Search request lifecycle: wire types, sorting, the HTTP transport, the
//! dispatcher that ties them together and the state object the UI renders.
//!
//! Everything in this module is independent of the terminal so the one-shot
//! CLI and the interactive UI share the same behaviour.

mod client;
mod dispatcher;
mod error;
mod runtime;
mod sort;
mod state;
mod types;

pub use client::{HttpSearchClient, SearchTransport};
pub use dispatcher::QueryDispatcher;
pub use error::{FETCH_ERROR_MESSAGE, RATE_LIMIT_MESSAGE, SearchError};
pub use runtime::{SearchCompletion, SearchRuntime};
pub use sort::{
	SortDirection, SortField, SortOrder, UnknownSortDirection, UnknownSortField, sort_matches,
};
pub use state::{RequestId, ResultsState};
pub use types::{Match, SearchRequest, SearchResponse};

/// Result cap requested when neither configuration nor caller provide one.
pub const DEFAULT_TOP_K: u32 = 50;
