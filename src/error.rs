use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for mirage operations
#[derive(Error, Diagnostic, Debug)]
pub enum MirageError {
    #[error("IO error: {0}")]
    #[diagnostic(code(mirage::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(mirage::io))]
    Io {
        path: PathBuf,
        message: String,
    },

    #[error("Image error with {path}: {message}")]
    #[diagnostic(code(mirage::image))]
    Image {
        path: PathBuf,
        message: String,
    },

    #[error("Selection needs at least 3 distinct points, found {found}")]
    #[diagnostic(
        code(mirage::geometry),
        help("trace a larger region; duplicate and collinear points collapse")
    )]
    InsufficientPoints { found: usize },

    #[error("Raster shapes differ: expected {expected:?}, found {found:?}")]
    #[diagnostic(code(mirage::raster))]
    ShapeMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },

    #[error("Watch error: {message}")]
    #[diagnostic(code(mirage::watch))]
    Watch { message: String },

    #[error("Build error: {message}")]
    #[diagnostic(code(mirage::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, MirageError>;
