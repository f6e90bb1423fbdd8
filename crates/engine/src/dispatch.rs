// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Request dispatch
//!
//! The thin layer every operation enters through. Per operation it resolves
//! the acting caller (only where the contract uses identity), runs the
//! request-type's validation pipeline, and only then invokes the handler.
//! A failing pipeline is a full short-circuit: the handler never runs.

use crate::allocations::AllocationService;
use crate::assignments::AssignmentService;
use crate::attendance::AttendanceService;
use crate::submissions::SubmissionService;
use campus_adapters::identity::IdentityAdapter;
use campus_adapters::store::{
    AllocationStore, AssignmentStore, RecordStore, SessionStore, SubmissionStore,
};
use campus_core::authz::OwnershipPolicy;
use campus_core::id::IdGen;
use campus_core::model::{Allocation, AllocationId, AssignmentId, SessionId, SubmissionId};
use campus_core::outcome::OpResult;
use campus_core::requests::{
    CreateAllocation, CreateAssignment, GradeSubmission, MarkAttendance, UpdateAssignment,
    UpdateAttendance,
};
use campus_core::validate::{rules, Pipeline};
use std::future::Future;
use tracing::Instrument;

/// Collaborator dependencies for the dispatcher
pub struct Deps<A, S, R, T, U, I> {
    pub allocations: A,
    pub sessions: S,
    pub records: R,
    pub assignments: T,
    pub submissions: U,
    pub identity: I,
}

/// The per-request-type validation pipelines, built once.
struct Rules {
    mark_attendance: Pipeline<MarkAttendance>,
    update_attendance: Pipeline<UpdateAttendance>,
    create_allocation: Pipeline<CreateAllocation>,
    create_assignment: Pipeline<CreateAssignment>,
    update_assignment: Pipeline<UpdateAssignment>,
    grade_submission: Pipeline<GradeSubmission>,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            mark_attendance: rules::mark_attendance(),
            update_attendance: rules::update_attendance(),
            create_allocation: rules::create_allocation(),
            create_assignment: rules::create_assignment(),
            update_assignment: rules::update_assignment(),
            grade_submission: rules::grade_submission(),
        }
    }
}

/// Front door for every operation the backend exposes.
pub struct Dispatcher<A, S, R, T, U, I, G> {
    attendance: AttendanceService<A, S, R, G>,
    allocations: AllocationService<A, G>,
    assignments: AssignmentService<A, T, G>,
    submissions: SubmissionService<A, T, U>,
    identity: I,
    rules: Rules,
}

impl<A, S, R, T, U, I, G> Dispatcher<A, S, R, T, U, I, G>
where
    A: AllocationStore,
    S: SessionStore,
    R: RecordStore,
    T: AssignmentStore,
    U: SubmissionStore,
    I: IdentityAdapter,
    G: IdGen,
{
    pub fn new(deps: Deps<A, S, R, T, U, I>, policy: OwnershipPolicy, id_gen: G) -> Self {
        Self {
            attendance: AttendanceService::new(
                deps.allocations.clone(),
                deps.sessions,
                deps.records,
                policy,
                id_gen.clone(),
            ),
            allocations: AllocationService::new(deps.allocations.clone(), id_gen.clone()),
            assignments: AssignmentService::new(
                deps.allocations.clone(),
                deps.assignments.clone(),
                policy,
                id_gen,
            ),
            submissions: SubmissionService::new(
                deps.allocations,
                deps.assignments,
                deps.submissions,
                policy,
            ),
            identity: deps.identity,
            rules: Rules::default(),
        }
    }

    // -------------------------------------------------------------------------
    // Attendance
    // -------------------------------------------------------------------------

    pub async fn mark_attendance(&self, req: MarkAttendance) -> OpResult<SessionId> {
        self.traced("attendance.mark", async {
            self.rules
                .mark_attendance
                .run(req, |req| self.attendance.mark(req))
                .await
        })
        .await
    }

    pub async fn update_attendance(&self, req: UpdateAttendance) -> OpResult<()> {
        self.traced("attendance.update", async {
            let caller = self.identity.current().await?;
            self.rules
                .update_attendance
                .run(req, |req| self.attendance.update(&caller, req))
                .await
        })
        .await
    }

    pub async fn delete_attendance(&self, session_id: &SessionId) -> OpResult<()> {
        self.traced("attendance.delete", self.attendance.delete(session_id))
            .await
    }

    // -------------------------------------------------------------------------
    // Allocations
    // -------------------------------------------------------------------------

    pub async fn create_allocation(&self, req: CreateAllocation) -> OpResult<AllocationId> {
        self.traced("allocation.create", async {
            let caller = self.identity.current().await?;
            self.rules
                .create_allocation
                .run(req, |req| self.allocations.create(&caller, req))
                .await
        })
        .await
    }

    pub async fn list_allocations(&self) -> OpResult<Vec<Allocation>> {
        self.traced("allocation.list", self.allocations.list()).await
    }

    pub async fn archive_allocation(&self, id: &AllocationId) -> OpResult<()> {
        self.traced("allocation.archive", async {
            let caller = self.identity.current().await?;
            self.allocations.archive(&caller, id).await
        })
        .await
    }

    // -------------------------------------------------------------------------
    // Assignments
    // -------------------------------------------------------------------------

    pub async fn create_assignment(&self, req: CreateAssignment) -> OpResult<AssignmentId> {
        self.traced("assignment.create", async {
            let caller = self.identity.current().await?;
            self.rules
                .create_assignment
                .run(req, |req| self.assignments.create(&caller, req))
                .await
        })
        .await
    }

    pub async fn update_assignment(&self, req: UpdateAssignment) -> OpResult<()> {
        self.traced("assignment.update", async {
            let caller = self.identity.current().await?;
            self.rules
                .update_assignment
                .run(req, |req| self.assignments.update(&caller, req))
                .await
        })
        .await
    }

    pub async fn delete_assignment(&self, id: &AssignmentId) -> OpResult<()> {
        self.traced("assignment.delete", async {
            let caller = self.identity.current().await?;
            self.assignments.delete(&caller, id).await
        })
        .await
    }

    // -------------------------------------------------------------------------
    // Submissions
    // -------------------------------------------------------------------------

    pub async fn grade_submission(&self, req: GradeSubmission) -> OpResult<()> {
        self.traced("submission.grade", async {
            let caller = self.identity.current().await?;
            self.rules
                .grade_submission
                .run(req, |req| self.submissions.grade(&caller, req))
                .await
        })
        .await
    }

    pub async fn delete_submission(&self, id: &SubmissionId) -> OpResult<()> {
        self.traced("submission.delete", async {
            let caller = self.identity.current().await?;
            self.submissions.delete(&caller, id).await
        })
        .await
    }

    /// Execute one operation inside a span, logging outcome and elapsed time.
    async fn traced<P>(&self, op: &'static str, fut: impl Future<Output = OpResult<P>>) -> OpResult<P> {
        let span = tracing::info_span!("op", name = op);

        let start = std::time::Instant::now();
        let result = fut.instrument(span.clone()).await;
        let elapsed = start.elapsed();

        span.in_scope(|| match &result {
            Ok(_) => tracing::info!(elapsed_ms = elapsed.as_millis() as u64, "completed"),
            Err(e) => tracing::info!(
                elapsed_ms = elapsed.as_millis() as u64,
                kind = ?e.kind,
                error = %e,
                "failed"
            ),
        });

        result
    }
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
