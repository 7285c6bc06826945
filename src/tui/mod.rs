//! TUI module for the tile quote form
//!
//! Interactive terminal screen hosting the quote form.

mod app;
mod event;
pub mod ui;

pub use app::{App, Focus, StatusLevel, StatusMessage};
pub use event::{Event, EventHandler};
