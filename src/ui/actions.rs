use anyhow::Result;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{App, SearchOutcome};
use crate::search::SortField;

const PAGE_STEP: usize = 10;

impl<'a> App<'a> {
	/// Process a keyboard event and return an outcome if the user exits.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Result<Option<SearchOutcome>> {
		match key.code {
			KeyCode::Esc => return Ok(Some(self.cancelled())),
			KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				return Ok(Some(self.cancelled()));
			}
			KeyCode::Enter => {
				if self.results_match_input()
					&& let Some(selection) = self.highlighted().cloned()
				{
					return Ok(Some(SearchOutcome::accepted(
						self.search_input.text().trim(),
						selection,
					)));
				}
				self.request_search();
			}
			KeyCode::Tab | KeyCode::BackTab => self.view = self.view.toggled(),
			KeyCode::F(1) => self.show_info = !self.show_info,
			KeyCode::F(2) => self.sort_by(SortField::Name),
			KeyCode::F(3) => self.sort_by(SortField::Similarity),
			KeyCode::F(4) => self.sort_by(SortField::WeeklyDownloads),
			KeyCode::Up => self.move_selection_up(1),
			KeyCode::Down => self.move_selection_down(1),
			KeyCode::PageUp => self.move_selection_up(PAGE_STEP),
			KeyCode::PageDown => self.move_selection_down(PAGE_STEP),
			_ => {
				self.search_input.input(key);
			}
		}
		Ok(None)
	}

	fn cancelled(&self) -> SearchOutcome {
		SearchOutcome::cancelled(self.search_input.text())
	}

	fn move_selection_up(&mut self, step: usize) {
		if let Some(selected) = self.table_state.selected() {
			self.table_state.select(Some(selected.saturating_sub(step)));
		}
	}

	fn move_selection_down(&mut self, step: usize) {
		let len = self.result_len();
		if len == 0 {
			return;
		}
		let next = self
			.table_state
			.selected()
			.map_or(0, |selected| selected.saturating_add(step));
		self.table_state.select(Some(next.min(len - 1)));
	}
}
