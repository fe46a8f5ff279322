//! Common error infrastructure for farm-core.
//!
//! Shared classification used by every failure the engine can report. The
//! concrete failure kinds live in [`crate::action::ActionError`]; the engine
//! wraps them with the action and phase that produced them.
//!
//! # Design Principles
//!
//! - **Fail fast**: the first violated precondition is the reported error
//! - **Deterministic**: identical inputs always yield the same error kind
//! - **Stable text**: `Display` output is shown to players verbatim

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: timing conditions that succeed if retried later
/// - **Validation**: the request does not fit the snapshot; retrying unchanged is pointless
/// - **Internal**: an invariant broke inside a handler
/// - **Fatal**: the snapshot itself is corrupt
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry later with a fresh snapshot and timestamp.
    ///
    /// Examples: node still recovering
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: node not found, missing tool, unknown action
    Validation,

    /// Internal error - a handler produced an inconsistent state.
    Internal,

    /// Fatal error - snapshot corrupted, cannot continue.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all farm-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Used by callers for telemetry and by tests to match on failure kinds.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
