//! Crate-level error types.

use std::fmt;

use crate::gpu::{render_context::RenderContextError, texture::TextureError};

/// Errors produced by the gengar crate.
#[derive(Debug)]
pub enum GengarError {
    /// GPU context initialization failure.
    Gpu(RenderContextError),
    /// Failed to decode or upload the panel texture.
    Texture(TextureError),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Logger installation failure.
    Logging(String),
    /// Viewer event-loop failure.
    Viewer(String),
}

impl fmt::Display for GengarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gpu(e) => write!(f, "GPU error: {e}"),
            Self::Texture(e) => write!(f, "texture error: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Logging(msg) => write!(f, "logging error: {msg}"),
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for GengarError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Gpu(e) => Some(e),
            Self::Texture(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RenderContextError> for GengarError {
    fn from(e: RenderContextError) -> Self {
        Self::Gpu(e)
    }
}

impl From<TextureError> for GengarError {
    fn from(e: TextureError) -> Self {
        Self::Texture(e)
    }
}

impl From<std::io::Error> for GengarError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
