// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Submission grading and deletion
//!
//! Ownership runs through the chain: submission → assignment → allocation →
//! teacher. Intake of submissions happens outside this engine; only the
//! teacher-side writes live here.

use campus_adapters::store::{AllocationStore, AssignmentStore, SubmissionStore};
use campus_core::authz::{ensure_allocation_owner, OwnershipPolicy};
use campus_core::model::{Allocation, Caller, Submission, SubmissionId};
use campus_core::outcome::{OpError, OpResult};
use campus_core::requests::GradeSubmission;

pub struct SubmissionService<A, T, U> {
    allocations: A,
    assignments: T,
    submissions: U,
    policy: OwnershipPolicy,
}

impl<A, T, U> SubmissionService<A, T, U>
where
    A: AllocationStore,
    T: AssignmentStore,
    U: SubmissionStore,
{
    pub fn new(allocations: A, assignments: T, submissions: U, policy: OwnershipPolicy) -> Self {
        Self {
            allocations,
            assignments,
            submissions,
            policy,
        }
    }

    pub async fn grade(&self, caller: &Caller, req: GradeSubmission) -> OpResult<()> {
        let (submission, allocation) = self.resolve_owned(&req.submission_id).await?;
        ensure_allocation_owner(&self.policy, caller, &allocation)?;

        self.submissions.set_grade(&submission.id, req.grade).await?;

        tracing::info!(submission = %submission.id, grade = req.grade, "submission graded");
        Ok(())
    }

    pub async fn delete(&self, caller: &Caller, id: &SubmissionId) -> OpResult<()> {
        let (_, allocation) = self.resolve_owned(id).await?;
        ensure_allocation_owner(&self.policy, caller, &allocation)?;

        self.submissions.remove(id).await?;

        tracing::info!(submission = %id, "submission deleted");
        Ok(())
    }

    /// Walk the ownership chain up to the allocation. A broken link is an
    /// integrity hole reported as not-found.
    async fn resolve_owned(&self, id: &SubmissionId) -> OpResult<(Submission, Allocation)> {
        let submission = self
            .submissions
            .get(id)
            .await?
            .ok_or_else(|| OpError::not_found("submission.not_found", "submission not found"))?;

        let assignment = self
            .assignments
            .get(&submission.assignment_id)
            .await?
            .ok_or_else(|| OpError::not_found("assignment.not_found", "assignment not found"))?;

        let allocation = self
            .allocations
            .get(&assignment.allocation_id)
            .await?
            .ok_or_else(|| OpError::not_found("allocation.not_found", "allocation not found"))?;

        Ok((submission, allocation))
    }
}

#[cfg(test)]
#[path = "submissions_tests.rs"]
mod tests;
