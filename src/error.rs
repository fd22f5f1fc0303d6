use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Logger error: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("Invalid log level: {0} (expected error, warn, info, debug or trace)")]
    InvalidLogLevel(String),

    #[error("No color expression given")]
    NoInput,

    #[error("{failed} of {total} expressions failed to parse")]
    Failed { failed: usize, total: usize },
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, CliError>;
