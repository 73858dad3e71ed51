//! Jukebox console
//!
//! Command-line front panel for the jukebox: configuration loading, a text
//! command language and interactive or scripted sessions.

#![forbid(unsafe_code)]

pub mod commands;
pub mod config;
pub mod error;
pub mod session;

pub use commands::{execute, Command};
pub use config::ConsoleConfig;
pub use error::{ConsoleError, Result};
