// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Failure payloads for the transport boundary
//!
//! The core never speaks HTTP, but it owns the shape a failure takes when it
//! crosses the boundary: a title, a machine-readable code, a human
//! description, and (for pipeline failures) the field-error list. The status
//! mapping is part of the taxonomy contract, so it lives beside the kinds.

use crate::outcome::{ErrorKind, FieldError, OpError};
use serde::Serialize;

impl ErrorKind {
    /// The status a conforming transport mapper uses for this kind.
    pub fn status(self) -> u16 {
        match self {
            ErrorKind::Validation | ErrorKind::Failure => 400,
            ErrorKind::Unauthorized => 401,
            ErrorKind::Forbidden => 403,
            ErrorKind::NotFound => 404,
            ErrorKind::Conflict => 409,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ErrorKind::Failure => "Request Failed",
            ErrorKind::Validation => "Validation Failed",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::Conflict => "Conflict",
            ErrorKind::Unauthorized => "Unauthorized",
            ErrorKind::Forbidden => "Forbidden",
        }
    }
}

/// The serialized form of a failed outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProblemDetails {
    pub status: u16,
    pub title: &'static str,
    pub code: String,
    pub detail: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldError>,
}

impl From<&OpError> for ProblemDetails {
    fn from(err: &OpError) -> Self {
        Self {
            status: err.kind.status(),
            title: err.kind.title(),
            code: err.code.clone(),
            detail: err.message.clone(),
            errors: err.field_errors.clone(),
        }
    }
}

#[cfg(test)]
#[path = "problem_tests.rs"]
mod tests;
