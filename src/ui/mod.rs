//! Interactive terminal UI.
//!
//! The [`builder`] module exposes the public-facing [`SearchUi`] builder. The
//! remaining submodules implement the event loop, rendering, key handling and
//! the widgets and themes behind them.

mod actions;
mod builder;
pub mod components;
mod config;
pub mod input;
mod outcome;
mod render;
mod runtime;
mod search;
mod state;
pub mod style;

pub use builder::SearchUi;
pub use config::{UiLabels, UnknownView, View};
pub use outcome::SearchOutcome;
pub use runtime::run;
pub use state::App;
