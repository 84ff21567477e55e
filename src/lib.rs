// Library surface for headless/integration tests and reuse.
// The binary in main.rs only adds CLI parsing and terminal setup.
pub mod app;
pub mod app_dirs;
pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod runtime;
pub mod scheduler;
pub mod session;
pub mod surface;
pub mod target;
pub mod ui;
pub mod util;
pub mod view;

pub use error::{GameError, Result};

/// How often the event loop wakes up without input
pub const TICK_RATE_MS: u64 = 50;
