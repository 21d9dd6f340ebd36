//! UI building blocks shared across rendering and state modules.

mod info;
/// Table row construction and cell formatting.
pub mod rows;
mod scatter;
mod status;
/// Table rendering and configuration.
pub mod tables;
/// Prompt row and view selector.
pub mod tabs;

pub use info::render_info;
pub use scatter::{ScatterContext, render_scatter};
pub use status::{StatusContext, render_status};
pub use tables::{TableSpec, render_table};
pub use tabs::{InputContext, ProgressState, TabItem, render_input, render_tabs};
