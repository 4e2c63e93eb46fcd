pub mod cli;
pub mod color;
pub mod library;
pub mod logging;
pub mod pipeline;
pub mod preview;
pub mod scheme;
pub mod tui;
