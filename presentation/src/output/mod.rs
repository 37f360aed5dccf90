//! Output formatting

pub mod console;
pub mod resize;

pub use console::ConsoleFormatter;
pub use resize::ResizeTracker;
