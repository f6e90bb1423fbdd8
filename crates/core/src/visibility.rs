// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Row visibility
//!
//! Archival is a flag, not a delete, so "is this row visible" must be asked
//! deliberately at each read path. There is no implicit global filter: a read
//! path that wants archived rows hidden calls [`visible`] itself.

use crate::model::Allocation;

/// Whether an allocation should be shown on ordinary read paths.
pub fn visible(allocation: &Allocation) -> bool {
    !allocation.archived
}

/// Keep only the visible allocations, preserving order.
pub fn visible_only(allocations: Vec<Allocation>) -> Vec<Allocation> {
    allocations.into_iter().filter(visible).collect()
}
