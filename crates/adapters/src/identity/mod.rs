// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Identity collaborator
//!
//! Resolves the acting caller for one operation. The dispatcher calls this
//! exactly once per identity-bearing operation and passes the resolved
//! [`Caller`] down explicitly; nothing below the dispatch boundary reads
//! identity on its own.

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeIdentityAdapter;

use async_trait::async_trait;
use campus_core::model::Caller;
use campus_core::outcome::{codes, OpError};
use thiserror::Error;

/// Errors from identity resolution
#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("no authenticated caller")]
    Unauthenticated,
    #[error("identity provider unavailable: {0}")]
    Unavailable(String),
}

impl From<IdentityError> for OpError {
    fn from(err: IdentityError) -> Self {
        match err {
            IdentityError::Unauthenticated => {
                OpError::unauthorized(codes::UNAUTHENTICATED, "no authenticated caller")
            }
            IdentityError::Unavailable(detail) => {
                tracing::error!(detail = %detail, "identity provider unavailable");
                OpError::failure(codes::INTERNAL, "an unexpected error occurred")
            }
        }
    }
}

/// Adapter for reading the acting caller's identity
#[async_trait]
pub trait IdentityAdapter: Clone + Send + Sync + 'static {
    /// Resolve the caller for the current operation.
    async fn current(&self) -> Result<Caller, IdentityError>;
}
