use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("failed to start `{engine}`: {source}")]
    Spawn {
        engine: String,
        #[source]
        source: std::io::Error,
    },

    /// The engine ran and reported failure. `diagnostic` holds everything it
    /// printed: stdout first, then stderr.
    #[error("`{engine}` failed ({status}):\n{diagnostic}")]
    CompilerFailed {
        engine: String,
        status: ExitStatus,
        diagnostic: String,
    },

    #[error("output path {} has no file name", .0.display())]
    InvalidOutputPath(PathBuf),

    #[error("failed to remove {}: {source}", .path.display())]
    Cleanup {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl BuildError {
    /// The captured compiler output, if this is a compiler failure.
    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            BuildError::CompilerFailed { diagnostic, .. } => Some(diagnostic),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, BuildError>;
