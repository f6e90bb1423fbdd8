// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Request validation
//!
//! The pipeline runs ahead of every operation: all registered validators run,
//! every failure from every validator is collected, and a non-empty result
//! short-circuits the handler entirely. This collect-all policy is the
//! deliberate opposite of the first-failure-wins ordering inside handlers;
//! the two are never mixed.

mod pipeline;
pub mod rules;

pub use pipeline::{Pipeline, Validator};
