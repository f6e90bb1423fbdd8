// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Assignment management
//!
//! One-table CRUD, with the same ownership rule everywhere: only the teacher
//! on the owning allocation (or an admin, when the bypass policy says so) may
//! create, edit, or delete an assignment.

use campus_adapters::store::{AllocationStore, AssignmentStore};
use campus_core::authz::{ensure_allocation_owner, OwnershipPolicy};
use campus_core::id::IdGen;
use campus_core::model::{Allocation, Assignment, AssignmentId, Caller};
use campus_core::outcome::{OpError, OpResult};
use campus_core::requests::{CreateAssignment, UpdateAssignment};
use campus_core::visibility;

pub struct AssignmentService<A, T, G> {
    allocations: A,
    assignments: T,
    policy: OwnershipPolicy,
    id_gen: G,
}

impl<A, T, G> AssignmentService<A, T, G>
where
    A: AllocationStore,
    T: AssignmentStore,
    G: IdGen,
{
    pub fn new(allocations: A, assignments: T, policy: OwnershipPolicy, id_gen: G) -> Self {
        Self {
            allocations,
            assignments,
            policy,
            id_gen,
        }
    }

    pub async fn create(&self, caller: &Caller, req: CreateAssignment) -> OpResult<AssignmentId> {
        let allocation = self
            .allocations
            .get(&req.allocation_id)
            .await?
            .filter(visibility::visible)
            .ok_or_else(|| OpError::not_found("allocation.not_found", "allocation not found"))?;

        ensure_allocation_owner(&self.policy, caller, &allocation)?;

        let assignment = Assignment {
            id: AssignmentId::new(self.id_gen.next()),
            allocation_id: allocation.id,
            title: req.title,
            due_date: req.due_date,
        };
        let id = assignment.id.clone();
        self.assignments.add(assignment).await?;

        tracing::info!(assignment = %id, "assignment created");
        Ok(id)
    }

    pub async fn update(&self, caller: &Caller, req: UpdateAssignment) -> OpResult<()> {
        let (mut assignment, allocation) = self.resolve_owned(&req.assignment_id).await?;
        ensure_allocation_owner(&self.policy, caller, &allocation)?;

        assignment.title = req.title;
        assignment.due_date = req.due_date;
        self.assignments.update(assignment).await?;

        tracing::info!(assignment = %req.assignment_id, "assignment updated");
        Ok(())
    }

    pub async fn delete(&self, caller: &Caller, id: &AssignmentId) -> OpResult<()> {
        let (_, allocation) = self.resolve_owned(id).await?;
        ensure_allocation_owner(&self.policy, caller, &allocation)?;

        self.assignments.remove(id).await?;

        tracing::info!(assignment = %id, "assignment deleted");
        Ok(())
    }

    /// Resolve an assignment together with its owning allocation. A dangling
    /// allocation reference is an integrity hole reported as not-found.
    async fn resolve_owned(&self, id: &AssignmentId) -> OpResult<(Assignment, Allocation)> {
        let assignment = self
            .assignments
            .get(id)
            .await?
            .ok_or_else(|| OpError::not_found("assignment.not_found", "assignment not found"))?;

        let allocation = self
            .allocations
            .get(&assignment.allocation_id)
            .await?
            .ok_or_else(|| OpError::not_found("allocation.not_found", "allocation not found"))?;

        Ok((assignment, allocation))
    }
}

#[cfg(test)]
#[path = "assignments_tests.rs"]
mod tests;
