// src/error.rs

//! Error types for dependency detection

use thiserror::Error;

/// Errors that can occur while detecting dependencies
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to spawn an external command (missing binary, permissions)
    #[error("Failed to run {command}: {source}. Is it installed?")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// An external command exited with a non-zero status
    #[error("{command} failed: {stderr}")]
    CommandFailed { command: String, stderr: String },

    /// A route matched but no heuristic is wired in for the language
    #[error("No dependency heuristic is available for {language}")]
    HeuristicUnavailable { language: String },

    /// I/O error while reading a script or its environment
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
