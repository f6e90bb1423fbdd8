// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Ownership authorization
//!
//! One predicate, invoked uniformly wherever a write touches something an
//! allocation owns: attendance updates, assignment edits, submission grading
//! and deletion. Whether an admin identity bypasses the teacher-ownership
//! check is a named policy knob, never a per-call-site decision.

use crate::model::{Allocation, Caller};
use crate::outcome::{codes, OpError, OpResult};

/// Whether admin callers bypass the teacher-ownership check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminBypass {
    Enabled,
    Disabled,
}

/// Policy for the ownership predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OwnershipPolicy {
    pub admin_bypass: AdminBypass,
}

impl Default for OwnershipPolicy {
    /// Matches the modeled behavior: no admin bypass.
    fn default() -> Self {
        Self {
            admin_bypass: AdminBypass::Disabled,
        }
    }
}

/// Does the acting caller own the allocation that (transitively) owns the
/// target entity?
pub fn ensure_allocation_owner(
    policy: &OwnershipPolicy,
    caller: &Caller,
    allocation: &Allocation,
) -> OpResult<()> {
    if caller.user_id == allocation.teacher_id {
        return Ok(());
    }
    if policy.admin_bypass == AdminBypass::Enabled && caller.is_admin() {
        return Ok(());
    }
    Err(OpError::forbidden(
        codes::NOT_AUTHORIZED,
        "caller does not own this allocation",
    ))
}

/// Administrative operations (allocation management) require the admin role
/// outright; the ownership policy does not apply to them.
pub fn ensure_admin(caller: &Caller) -> OpResult<()> {
    if caller.is_admin() {
        Ok(())
    } else {
        Err(OpError::forbidden(
            codes::NOT_AUTHORIZED,
            "administrator role required",
        ))
    }
}

#[cfg(test)]
#[path = "authz_tests.rs"]
mod tests;
