// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake identity adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{IdentityAdapter, IdentityError};
use async_trait::async_trait;
use campus_core::model::Caller;
use std::sync::{Arc, Mutex};

/// Fake identity adapter with a settable caller.
///
/// With no caller set it reports [`IdentityError::Unauthenticated`], which is
/// also how an anonymous request looks in production.
#[derive(Clone, Default)]
pub struct FakeIdentityAdapter {
    caller: Arc<Mutex<Option<Caller>>>,
    resolutions: Arc<Mutex<u64>>,
}

impl FakeIdentityAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_caller(caller: Caller) -> Self {
        let adapter = Self::default();
        adapter.set_caller(Some(caller));
        adapter
    }

    /// Set (or clear) the caller subsequent operations resolve to.
    pub fn set_caller(&self, caller: Option<Caller>) {
        *self.caller.lock().unwrap_or_else(|e| e.into_inner()) = caller;
    }

    /// How many times `current` has been called.
    pub fn resolutions(&self) -> u64 {
        *self.resolutions.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl IdentityAdapter for FakeIdentityAdapter {
    async fn current(&self) -> Result<Caller, IdentityError> {
        *self.resolutions.lock().unwrap_or_else(|e| e.into_inner()) += 1;
        self.caller
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
            .ok_or(IdentityError::Unauthenticated)
    }
}
