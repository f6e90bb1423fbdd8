// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Allocation management
//!
//! Creating and archiving bindings is an admin action. The binding triple is
//! unique; the pre-check here gives a friendly conflict message, and the
//! store constraint decides a concurrent create.

use campus_adapters::store::AllocationStore;
use campus_core::authz::ensure_admin;
use campus_core::id::IdGen;
use campus_core::model::{Allocation, AllocationId, Caller};
use campus_core::outcome::{OpError, OpResult};
use campus_core::requests::CreateAllocation;
use campus_core::visibility;

pub struct AllocationService<A, G> {
    allocations: A,
    id_gen: G,
}

impl<A, G> AllocationService<A, G>
where
    A: AllocationStore,
    G: IdGen,
{
    pub fn new(allocations: A, id_gen: G) -> Self {
        Self { allocations, id_gen }
    }

    pub async fn create(&self, caller: &Caller, req: CreateAllocation) -> OpResult<AllocationId> {
        ensure_admin(caller)?;

        if self
            .allocations
            .find_by_binding(&req.teacher_id, &req.class_id, &req.subject_id)
            .await?
            .is_some()
        {
            return Err(OpError::conflict(
                "allocation.binding_exists",
                "an allocation already exists for this teacher, class, and subject",
            ));
        }

        let allocation = Allocation::new(
            AllocationId::new(self.id_gen.next()),
            req.teacher_id,
            req.class_id,
            req.subject_id,
        );
        let id = allocation.id.clone();
        self.allocations.add(allocation).await?;

        tracing::info!(allocation = %id, "allocation created");
        Ok(id)
    }

    /// Visible allocations only; archival is applied here, deliberately, not
    /// by the store.
    pub async fn list(&self) -> OpResult<Vec<Allocation>> {
        Ok(visibility::visible_only(self.allocations.list().await?))
    }

    pub async fn archive(&self, caller: &Caller, id: &AllocationId) -> OpResult<()> {
        ensure_admin(caller)?;

        self.allocations
            .get(id)
            .await?
            .filter(visibility::visible)
            .ok_or_else(|| OpError::not_found("allocation.not_found", "allocation not found"))?;

        self.allocations.archive(id).await?;

        tracing::info!(allocation = %id, "allocation archived");
        Ok(())
    }
}

#[cfg(test)]
#[path = "allocations_tests.rs"]
mod tests;
