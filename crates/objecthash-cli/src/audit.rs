// crates/objecthash-cli/src/audit.rs
// ============================================================================
// Module: CLI Audit Logging
// Description: Structured audit events for objecthash command execution.
// Purpose: Emit content-free audit logs without hard dependencies.
// Dependencies: objecthash-config, serde, serde_json
// ============================================================================

//! ## Overview
//! Every CLI command records exactly one [`HashAuditEvent`] describing what
//! was hashed and how it ended. Events carry labels, digests, and error kinds
//! only; input content never reaches a sink.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::OpenOptions;
use std::io;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use objecthash_config::AuditConfig;
use objecthash_config::AuditSinkKind;
use serde::Serialize;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Final status of an audited command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditOutcome {
    /// Command completed.
    Success,
    /// `verify` computed a digest that differs from the expected one.
    Mismatch,
    /// Command failed before producing a result.
    Failure,
}

/// Audit event payload for a single CLI command.
#[derive(Debug, Clone, Serialize)]
pub struct HashAuditEvent {
    /// Event identifier.
    pub event: &'static str,
    /// Event timestamp (milliseconds since epoch).
    pub timestamp_ms: u128,
    /// Command name (`hash`, `token`, `redact`, `verify`, `demo`).
    pub command: &'static str,
    /// Input label (file path or `stdin`) when the command reads input.
    pub input: Option<String>,
    /// Input format label when known.
    pub format: Option<&'static str>,
    /// Number policy label.
    pub policy: &'static str,
    /// Command outcome.
    pub outcome: AuditOutcome,
    /// Hex digest produced by the command, when any.
    pub digest: Option<String>,
    /// Stable error kind label on failure.
    pub error_kind: Option<&'static str>,
}

/// Inputs required to construct an audit event.
pub struct HashAuditEventParams {
    /// Command name.
    pub command: &'static str,
    /// Input label when the command reads input.
    pub input: Option<String>,
    /// Input format label when known.
    pub format: Option<&'static str>,
    /// Number policy label.
    pub policy: &'static str,
    /// Command outcome.
    pub outcome: AuditOutcome,
    /// Hex digest produced by the command, when any.
    pub digest: Option<String>,
    /// Stable error kind label on failure.
    pub error_kind: Option<&'static str>,
}

impl HashAuditEvent {
    /// Creates a new audit event with a consistent timestamp.
    #[must_use]
    pub fn new(params: HashAuditEventParams) -> Self {
        let timestamp_ms =
            SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis();
        Self {
            event: "objecthash_command",
            timestamp_ms,
            command: params.command,
            input: params.input,
            format: params.format,
            policy: params.policy,
            outcome: params.outcome,
            digest: params.digest,
            error_kind: params.error_kind,
        }
    }
}

// ============================================================================
// SECTION: Trait
// ============================================================================

/// Audit sink for CLI command events.
pub trait AuditSink: Send + Sync {
    /// Record an audit event.
    fn record(&self, event: &HashAuditEvent);
}

/// Audit sink that logs JSON lines to stderr.
pub struct StderrAuditSink;

impl AuditSink for StderrAuditSink {
    fn record(&self, event: &HashAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event) {
            let _ = writeln!(std::io::stderr(), "{payload}");
        }
    }
}

/// Audit sink that logs JSON lines to a file.
pub struct FileAuditSink {
    /// File handle used for append-only logging.
    file: Mutex<std::fs::File>,
}

impl FileAuditSink {
    /// Opens the audit log file in append mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn new(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }
}

impl AuditSink for FileAuditSink {
    fn record(&self, event: &HashAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event)
            && let Ok(mut file) = self.file.lock()
        {
            let _ = writeln!(file, "{payload}");
            let _ = file.flush();
        }
    }
}

/// No-op audit sink.
pub struct NoopAuditSink;

impl AuditSink for NoopAuditSink {
    fn record(&self, _event: &HashAuditEvent) {}
}

// ============================================================================
// SECTION: Construction
// ============================================================================

/// Builds the audit sink selected by configuration.
///
/// # Errors
///
/// Returns an error when the file sink cannot open its log.
pub fn sink_from_config(config: &AuditConfig) -> io::Result<Box<dyn AuditSink>> {
    match (config.sink, config.path.as_deref()) {
        (AuditSinkKind::None, _) => Ok(Box::new(NoopAuditSink)),
        (AuditSinkKind::Stderr, _) => Ok(Box::new(StderrAuditSink)),
        (AuditSinkKind::File, Some(path)) => Ok(Box::new(FileAuditSink::new(Path::new(path))?)),
        (AuditSinkKind::File, None) => {
            Err(io::Error::new(io::ErrorKind::InvalidInput, "audit.path is required"))
        }
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
