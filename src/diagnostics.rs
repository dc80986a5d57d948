// src/diagnostics.rs

//! Non-fatal diagnostics channel
//!
//! The dispatcher reports conditions like "unsupported executable" without
//! failing the call. Diagnostics go through an injected `DiagnosticSink`,
//! decoupled from return values, so callers can surface them, attach them to
//! the provenance record, or drop them.
//!
//! Implementations:
//! - `TracingSink`: forwards to `tracing` at the matching level (default)
//! - `CollectingSink`: buffers events for later inspection
//! - `SilentSink`: no-op for scripted/quiet callers

use std::sync::Mutex;
use tracing::{info, warn};

/// How serious a diagnostic is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
}

/// A structured diagnostic event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
}

impl Diagnostic {
    /// Create a warning-level diagnostic
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    /// Create an info-level diagnostic
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            message: message.into(),
        }
    }
}

/// Sink for diagnostic events
///
/// Implementations must be thread-safe; a dispatcher may be shared across
/// threads.
pub trait DiagnosticSink: Send + Sync {
    fn emit(&self, diagnostic: Diagnostic);
}

/// Forwards diagnostics to `tracing`
#[derive(Debug, Default)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl DiagnosticSink for TracingSink {
    fn emit(&self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            Severity::Warning => warn!("{}", diagnostic.message),
            Severity::Info => info!("{}", diagnostic.message),
        }
    }
}

/// Buffers diagnostics for later inspection
///
/// Useful in tests and for callers that attach warnings to the provenance
/// record they are building.
#[derive(Debug, Default)]
pub struct CollectingSink {
    events: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all events emitted so far
    pub fn events(&self) -> Vec<Diagnostic> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Warning messages only
    pub fn warnings(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter(|d| d.severity == Severity::Warning)
            .map(|d| d.message)
            .collect()
    }
}

impl DiagnosticSink for CollectingSink {
    fn emit(&self, diagnostic: Diagnostic) {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(diagnostic);
    }
}

/// Discards all diagnostics
#[derive(Debug, Default)]
pub struct SilentSink;

impl SilentSink {
    pub fn new() -> Self {
        Self
    }
}

impl DiagnosticSink for SilentSink {
    fn emit(&self, _diagnostic: Diagnostic) {}
}
