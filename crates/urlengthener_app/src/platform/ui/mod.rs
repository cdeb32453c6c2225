pub mod command;
pub mod render;
pub mod terminal;

pub use terminal::{TerminalUi, UiSink};
