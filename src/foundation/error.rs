use std::path::PathBuf;

/// Convenience result alias used across the crate.
pub type PlotResult<T> = Result<T, PlotError>;

/// Errors produced while loading inputs, rendering, or encoding outputs.
#[derive(thiserror::Error, Debug)]
pub enum PlotError {
    /// A row of a coordinate file could not be parsed.
    #[error("parse error: {}:{line}: {msg}", path.display())]
    Parse {
        /// File (or logical origin) the row came from.
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        /// What went wrong.
        msg: String,
    },

    /// Invalid configuration or argument.
    #[error("validation error: {0}")]
    Validation(String),

    /// Rasterization failure.
    #[error("render error: {0}")]
    Render(String),

    /// Image or video output failure.
    #[error("encode error: {0}")]
    Encode(String),

    /// I/O and other contextual failures.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PlotError {
    /// Build a [`PlotError::Parse`].
    pub fn parse(path: impl Into<PathBuf>, line: usize, msg: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            line,
            msg: msg.into(),
        }
    }

    /// Build a [`PlotError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PlotError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`PlotError::Encode`].
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}
