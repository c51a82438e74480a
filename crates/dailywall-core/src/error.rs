//! Failure taxonomy shared by every layer.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Transport or timeout failure talking to the feed.
    #[error("network error: {0}")]
    Network(String),

    /// Feed document was not in the expected shape.
    #[error("parse error: {0}")]
    Parse(String),

    #[error("filesystem error at {}: {source}", .path.display())]
    FileSystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The OS API or a desktop command reported failure.
    #[error("{0}")]
    Platform(String),

    /// OS or desktop environment not recognized and nothing could handle it.
    #[error("unsupported environment: {0}")]
    UnsupportedEnvironment(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn fs(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileSystem {
            path: path.into(),
            source,
        }
    }
}
