pub mod config;
pub mod error;
pub mod replace;
pub mod ui;
pub mod vcs;
pub mod version;

pub use error::{BumperError, Result};
