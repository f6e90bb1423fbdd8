// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The operation result algebra.
//!
//! Every operation in the system reports its outcome as an [`OpResult`]: a
//! plain `Result` whose error side is an [`OpError`] tagged with a kind from
//! a closed taxonomy. The kind, not the message text, is the contract that a
//! transport mapper dispatches on.
//!
//! A success carries no error at all and a failure carries no payload, so the
//! "succeeded flag disagrees with the error kind" defect class of a
//! record-shaped result type cannot be constructed here. Reading the payload
//! of a failed result is likewise unreachable from code that matches on the
//! `Result` first; forcing it panics, which is a programming defect and not a
//! domain condition.

use serde::Serialize;

/// Kinds of operation failure.
///
/// This set is closed: the core never emits a kind outside it, and a
/// conforming boundary mapper handles every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Unclassified domain failure.
    Failure,
    /// Bad input, reported by the validation pipeline or by domain checks
    /// that reuse the same kind for business-rule violations.
    Validation,
    NotFound,
    Conflict,
    Unauthorized,
    Forbidden,
}

/// Well-known machine-readable error codes.
pub mod codes {
    /// Sentinel code on a pipeline failure; the individual failures are in
    /// the field-error list.
    pub const VALIDATION_FAILED: &str = "error.validation";
    /// A required value was absent where one was expected.
    pub const NULL_VALUE: &str = "error.null_value";
    /// An unexpected collaborator failure, reported with no detail.
    pub const INTERNAL: &str = "error.internal";
    /// A composite-unique constraint was violated at the store.
    pub const DUPLICATE: &str = "error.duplicate";
    /// The caller is not the owner of the target entity.
    pub const NOT_AUTHORIZED: &str = "error.not_authorized";
    /// No authenticated caller for the current operation.
    pub const UNAUTHENTICATED: &str = "error.unauthenticated";
}

/// One per-field validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub code: String,
    pub message: String,
}

impl FieldError {
    pub fn new(
        field: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            code: code.into(),
            message: message.into(),
        }
    }
}

/// A failed operation outcome.
///
/// `field_errors` is non-empty only for validation-pipeline failures; a
/// single domain failure always carries an empty list. Consumers distinguish
/// "one domain failure" from "a bag of field failures" by the list, never by
/// parsing the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpError {
    pub kind: ErrorKind,
    pub code: String,
    pub message: String,
    pub field_errors: Vec<FieldError>,
}

/// The outcome type returned by every operation.
pub type OpResult<T> = Result<T, OpError>;

impl OpError {
    fn tagged(kind: ErrorKind, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            code: code.into(),
            message: message.into(),
            field_errors: Vec::new(),
        }
    }

    pub fn failure(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::tagged(ErrorKind::Failure, code, message)
    }

    pub fn validation(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::tagged(ErrorKind::Validation, code, message)
    }

    pub fn not_found(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::tagged(ErrorKind::NotFound, code, message)
    }

    pub fn conflict(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::tagged(ErrorKind::Conflict, code, message)
    }

    pub fn unauthorized(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::tagged(ErrorKind::Unauthorized, code, message)
    }

    pub fn forbidden(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::tagged(ErrorKind::Forbidden, code, message)
    }

    /// A validation-pipeline failure carrying the full ordered list of field
    /// errors under the generic validation sentinel code.
    pub fn invalid_fields(errors: Vec<FieldError>) -> Self {
        Self {
            kind: ErrorKind::Validation,
            code: codes::VALIDATION_FAILED.to_string(),
            message: format!("request failed validation with {} error(s)", errors.len()),
            field_errors: errors,
        }
    }

    /// True when this failure came from the validation pipeline rather than
    /// a single domain check.
    pub fn has_field_errors(&self) -> bool {
        !self.field_errors.is_empty()
    }
}

impl std::fmt::Display for OpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for OpError {}

/// Ergonomics for handlers that resolve a possibly-absent value.
///
/// A present value becomes `Ok`; an absent one becomes a `Failure` with the
/// dedicated null-value code, so plain lookups can be threaded with `?`
/// without hand-rolling the absence case each time.
pub trait OptionExt<T> {
    fn required(self) -> OpResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn required(self) -> OpResult<T> {
        self.ok_or_else(|| OpError::failure(codes::NULL_VALUE, "required value was absent"))
    }
}

#[cfg(test)]
#[path = "outcome_tests.rs"]
mod tests;
