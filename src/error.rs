use thiserror::Error;

/// Everything the dispatcher can reject. Each variant's message is the
/// exact line printed to the user.
#[derive(Debug, Error)]
pub enum CcwcError {
    #[error("Could not find a valid ccwc command. Please try again.")]
    InvalidCommand,

    #[error("Cannot process command. Please try again")]
    MalformedCommand,

    #[error("Unsupported command. Please try again.")]
    UnsupportedFlag,

    #[error("Failed to read file {name}")]
    FileRead {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, CcwcError>;
