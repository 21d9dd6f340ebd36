//! Application runtime and event loop.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

use anyhow::{Result, anyhow};
use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use tracing::debug;

use super::{App, SearchOutcome};
use crate::search::QueryDispatcher;

const FRAME_INTERVAL: Duration = Duration::from_millis(16);
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Construct an [`App`] around `dispatcher` and run it to completion.
pub fn run(dispatcher: QueryDispatcher) -> Result<SearchOutcome> {
	let mut app = App::new(dispatcher);
	app.run()
}

impl<'a> App<'a> {
	/// Pump the terminal event loop until the user exits.
	pub fn run(&mut self) -> Result<SearchOutcome> {
		let mut terminal = ratatui::init();
		if let Err(err) = terminal.clear() {
			ratatui::restore();
			return Err(err.into());
		}

		self.hydrate_initial_results();

		let (event_tx, event_rx) = mpsc::channel();
		let event_loop_running = Arc::new(AtomicBool::new(true));
		let event_loop_flag = Arc::clone(&event_loop_running);

		let event_thread = thread::spawn(move || -> Result<()> {
			while event_loop_flag.load(Ordering::Relaxed) {
				if event::poll(INPUT_POLL_INTERVAL)? {
					let event = event::read()?;
					if event_tx.send(event).is_err() {
						break;
					}
				}
			}
			Ok(())
		});

		let mut pending_events = VecDeque::new();

		let result: Result<SearchOutcome> = 'event_loop: loop {
			loop {
				match event_rx.try_recv() {
					Ok(Event::Resize(_, _)) => {}
					Ok(event) => pending_events.push_back(event),
					Err(mpsc::TryRecvError::Empty) => break,
					Err(mpsc::TryRecvError::Disconnected) => {
						break 'event_loop Err(anyhow!("input event channel disconnected"));
					}
				}
			}

			match self.tick(&mut terminal, &mut pending_events) {
				Ok(Some(outcome)) => break 'event_loop Ok(outcome),
				Ok(None) => {}
				Err(err) => break 'event_loop Err(err),
			}

			thread::sleep(FRAME_INTERVAL);
		};

		ratatui::restore();

		event_loop_running.store(false, Ordering::Relaxed);
		match event_thread.join() {
			Ok(join_result) => join_result?,
			Err(err) => std::panic::resume_unwind(err),
		}

		if let Ok(outcome) = &result {
			debug!(accepted = outcome.accepted, "interactive session finished");
		}
		result
	}

	/// Run one frame: apply queued key presses, fold in finished searches and
	/// redraw. Errors are returned so the caller can restore the terminal.
	pub(crate) fn tick<B: Backend>(
		&mut self,
		terminal: &mut Terminal<B>,
		events: &mut VecDeque<Event>,
	) -> Result<Option<SearchOutcome>> {
		while let Some(event) = events.pop_front() {
			let Event::Key(key) = event else { continue };
			if key.kind != KeyEventKind::Press {
				continue;
			}
			if let Some(outcome) = self.handle_key(key)? {
				return Ok(Some(outcome));
			}
		}

		self.pump_search_results();
		if self.results.is_busy() {
			self.throbber_state.calc_next();
		}

		terminal.draw(|frame| self.draw(frame))?;
		Ok(None)
	}

	/// Search for a preconfigured query straight away.
	fn hydrate_initial_results(&mut self) {
		if self.submitted_query.is_none() {
			self.request_search();
		}
	}
}
