//! Background execution of search requests.
//!
//! Each request runs on its own short-lived thread so the UI loop never
//! blocks on the network. Completions come back over a channel tagged with
//! the [`RequestId`] that [`ResultsState`](super::ResultsState) handed out,
//! which lets the state discard answers to superseded queries.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::thread;
use std::time::Duration;

use tracing::{debug, error};

use super::dispatcher::QueryDispatcher;
use super::error::SearchError;
use super::sort::SortOrder;
use super::state::RequestId;
use super::types::Match;

/// Result of one background search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchCompletion {
	pub id: RequestId,
	pub outcome: Result<Vec<Match>, SearchError>,
}

/// Spawns search threads and collects their completions.
pub struct SearchRuntime {
	dispatcher: QueryDispatcher,
	tx: Sender<SearchCompletion>,
	rx: Receiver<SearchCompletion>,
}

impl SearchRuntime {
	pub fn new(dispatcher: QueryDispatcher) -> Self {
		let (tx, rx) = mpsc::channel();
		Self { dispatcher, tx, rx }
	}

	#[must_use]
	pub fn dispatcher(&self) -> &QueryDispatcher {
		&self.dispatcher
	}

	/// Start a search in the background. Exactly one [`SearchCompletion`]
	/// carrying `id` is delivered for every call, including when the worker
	/// thread cannot be spawned or unwinds.
	pub fn issue(&self, id: RequestId, query: String, top_k: Option<u32>, order: SortOrder) {
		let dispatcher = self.dispatcher.clone();
		let guard = CompletionGuard::new(id, self.tx.clone());
		debug!(request = %id, query = %query, "issuing search");

		let spawned = thread::Builder::new()
			.name(format!("pyscout-search-{}", id.get()))
			.spawn(move || {
				let outcome = dispatcher.search(&query, top_k, order);
				guard.finish(outcome);
			});

		if let Err(err) = spawned {
			error!(request = %id, error = %err, "failed to spawn search thread");
			let _ = self.tx.send(SearchCompletion {
				id,
				outcome: Err(SearchError::Transport(err.to_string())),
			});
		}
	}

	/// Non-blocking poll used by the UI loop.
	pub fn try_recv(&self) -> Result<SearchCompletion, TryRecvError> {
		self.rx.try_recv()
	}

	/// Blocking poll used by one-shot mode and tests.
	pub fn recv_timeout(&self, timeout: Duration) -> Result<SearchCompletion, RecvTimeoutError> {
		self.rx.recv_timeout(timeout)
	}
}

/// Guarantees a completion is reported for its request. Dropping the guard
/// without calling [`CompletionGuard::finish`] reports
/// [`SearchError::Abandoned`].
struct CompletionGuard {
	id: RequestId,
	tx: Option<Sender<SearchCompletion>>,
}

impl CompletionGuard {
	fn new(id: RequestId, tx: Sender<SearchCompletion>) -> Self {
		Self { id, tx: Some(tx) }
	}

	fn finish(mut self, outcome: Result<Vec<Match>, SearchError>) {
		self.send(outcome);
	}

	fn send(&mut self, outcome: Result<Vec<Match>, SearchError>) {
		if let Some(tx) = self.tx.take() {
			// The receiver is gone once the UI shuts down.
			let _ = tx.send(SearchCompletion {
				id: self.id,
				outcome,
			});
		}
	}
}

impl Drop for CompletionGuard {
	fn drop(&mut self) {
		if self.tx.is_some() {
			debug!(request = %self.id, "search thread ended without a result");
			self.send(Err(SearchError::Abandoned));
		}
	}
}
