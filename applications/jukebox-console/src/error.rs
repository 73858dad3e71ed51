/// Console error types
use jukebox_core::JukeboxError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConsoleError>;

/// `sysexits.h` usage error
const EX_USAGE: u8 = 64;
/// `sysexits.h` I/O error
const EX_IOERR: u8 = 74;
/// `sysexits.h` configuration error
const EX_CONFIG: u8 = 78;

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error(transparent)]
    Jukebox(#[from] JukeboxError),

    #[error("Unknown command: {0} (type 'help' for a list)")]
    UnknownCommand(String),

    #[error("Usage: {0}")]
    Usage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for ConsoleError {
    fn from(err: config::ConfigError) -> Self {
        ConsoleError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for ConsoleError {
    fn from(err: toml::ser::Error) -> Self {
        ConsoleError::Config(err.to_string())
    }
}

impl ConsoleError {
    /// Process exit status for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            ConsoleError::Jukebox(JukeboxError::InvalidArgument(_)) => 2,
            ConsoleError::Jukebox(JukeboxError::NotFound(_)) => 3,
            ConsoleError::Jukebox(JukeboxError::IllegalOperation(_)) => 4,
            ConsoleError::UnknownCommand(_) | ConsoleError::Usage(_) => EX_USAGE,
            ConsoleError::Io(_) => EX_IOERR,
            ConsoleError::Config(_) => EX_CONFIG,
        }
    }
}
