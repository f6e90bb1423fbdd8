// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The validation pipeline proper

use crate::outcome::{FieldError, OpError, OpResult};
use std::future::Future;

/// One rule set for requests of type `R`.
///
/// A validator appends zero or more field errors; it never stops the run.
/// Closures of the matching shape implement this directly.
pub trait Validator<R>: Send + Sync {
    fn validate(&self, request: &R, errors: &mut Vec<FieldError>);
}

impl<R, F> Validator<R> for F
where
    F: Fn(&R, &mut Vec<FieldError>) + Send + Sync,
{
    fn validate(&self, request: &R, errors: &mut Vec<FieldError>) {
        self(request, errors)
    }
}

/// Ordered validators for one request type.
///
/// `check` runs every validator and collects every failure, in registration
/// order. `run` additionally guards a handler: on any failure the handler is
/// not invoked at all, and on success the handler's result passes through
/// unchanged. Because [`OpResult`] is generic over the payload, the failure
/// path has the same type as the success path for payload-bearing operations;
/// no per-request-type factory selection is needed.
pub struct Pipeline<R> {
    validators: Vec<Box<dyn Validator<R>>>,
}

impl<R> Pipeline<R> {
    pub fn new() -> Self {
        Self {
            validators: Vec::new(),
        }
    }

    /// Register a validator. Registration order is the order failures are
    /// reported in.
    pub fn with(mut self, validator: impl Validator<R> + 'static) -> Self {
        self.validators.push(Box::new(validator));
        self
    }

    /// Run all validators, collecting all failures.
    pub fn check(&self, request: &R) -> OpResult<()> {
        let mut errors = Vec::new();
        for validator in &self.validators {
            validator.validate(request, &mut errors);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            tracing::debug!(count = errors.len(), "request failed validation");
            Err(OpError::invalid_fields(errors))
        }
    }

    /// Guard a handler with this pipeline.
    ///
    /// No retries, no partial execution: a failing check is always a full
    /// short-circuit.
    pub async fn run<T, H, Fut>(&self, request: R, handler: H) -> OpResult<T>
    where
        H: FnOnce(R) -> Fut,
        Fut: Future<Output = OpResult<T>>,
    {
        self.check(&request)?;
        handler(request).await
    }
}

impl<R> Default for Pipeline<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
