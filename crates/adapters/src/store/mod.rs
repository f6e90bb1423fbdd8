// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Store collaborator traits
//!
//! The engine resolves entities through these traits and never sees the
//! storage technology behind them. Composite-unique constraints are enforced
//! here, authoritatively: the engine pre-checks where the contract calls for
//! a friendly message, but the constraint is what wins a race.

mod memory;

pub use memory::{
    MemoryAllocations, MemoryAssignments, MemoryRecords, MemorySessions, MemoryStore,
    MemorySubmissions,
};

use async_trait::async_trait;
use campus_core::model::{
    Allocation, AllocationId, Assignment, AssignmentId, AttendanceRecord, AttendanceSession,
    AttendanceStatus, ClassId, RecordId, SessionId, StudentId, SubjectId, Submission,
    SubmissionId, UserId,
};
use campus_core::outcome::{codes, OpError};
use chrono::NaiveDate;
use thiserror::Error;

/// Errors from store operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// A composite-unique constraint rejected the write.
    #[error("unique constraint violated: {0}")]
    UniqueViolation(&'static str),
    /// The row targeted by an update vanished between resolve and write.
    #[error("row missing: {0}")]
    RowMissing(String),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Translation into the operation result algebra.
///
/// A unique violation is an expected domain condition (the loser of a
/// find-or-create race must see a conflict, not an opaque failure). Anything
/// else is unexpected: the detail is logged here and the caller gets the
/// generic internal failure with no detail.
impl From<StoreError> for OpError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::UniqueViolation(constraint) => {
                OpError::conflict(codes::DUPLICATE, format!("duplicate {constraint}"))
            }
            StoreError::RowMissing(detail) => {
                tracing::error!(detail = %detail, "store row vanished mid-operation");
                OpError::failure(codes::INTERNAL, "an unexpected error occurred")
            }
            StoreError::Unavailable(detail) => {
                tracing::error!(detail = %detail, "store unavailable");
                OpError::failure(codes::INTERNAL, "an unexpected error occurred")
            }
        }
    }
}

/// Store of teacher/class/subject bindings
#[async_trait]
pub trait AllocationStore: Clone + Send + Sync + 'static {
    async fn get(&self, id: &AllocationId) -> Result<Option<Allocation>, StoreError>;

    /// Look up by the unique (teacher, class, subject) triple, archived rows
    /// included.
    async fn find_by_binding(
        &self,
        teacher_id: &UserId,
        class_id: &ClassId,
        subject_id: &SubjectId,
    ) -> Result<Option<Allocation>, StoreError>;

    /// Insert; fails with [`StoreError::UniqueViolation`] on a duplicate
    /// triple.
    async fn add(&self, allocation: Allocation) -> Result<(), StoreError>;

    /// Flag the allocation archived. The row stays for referential integrity.
    async fn archive(&self, id: &AllocationId) -> Result<(), StoreError>;

    /// All allocations, archived ones included; visibility is the reader's
    /// concern.
    async fn list(&self) -> Result<Vec<Allocation>, StoreError>;
}

/// Store of attendance sessions
#[async_trait]
pub trait SessionStore: Clone + Send + Sync + 'static {
    async fn get(&self, id: &SessionId) -> Result<Option<AttendanceSession>, StoreError>;

    async fn find_by_date(
        &self,
        allocation_id: &AllocationId,
        date: NaiveDate,
    ) -> Result<Option<AttendanceSession>, StoreError>;

    /// Insert; fails with [`StoreError::UniqueViolation`] when a session
    /// already exists for the (allocation, date) pair.
    async fn add(&self, session: AttendanceSession) -> Result<(), StoreError>;

    /// Move the session to a new date; the (allocation, date) constraint
    /// applies to the new date too.
    async fn set_date(&self, id: &SessionId, date: NaiveDate) -> Result<(), StoreError>;

    /// Remove the session; its records are removed as a cascading effect.
    async fn remove(&self, id: &SessionId) -> Result<(), StoreError>;
}

/// Store of per-student attendance records
#[async_trait]
pub trait RecordStore: Clone + Send + Sync + 'static {
    async fn find(
        &self,
        session_id: &SessionId,
        student_id: &StudentId,
    ) -> Result<Option<AttendanceRecord>, StoreError>;

    async fn list_for_session(
        &self,
        session_id: &SessionId,
    ) -> Result<Vec<AttendanceRecord>, StoreError>;

    /// Insert; fails with [`StoreError::UniqueViolation`] when the student is
    /// already marked in the session.
    async fn add(&self, record: AttendanceRecord) -> Result<(), StoreError>;

    /// Overwrite a record's status in place.
    async fn set_status(&self, id: &RecordId, status: AttendanceStatus) -> Result<(), StoreError>;
}

/// Store of assignments
#[async_trait]
pub trait AssignmentStore: Clone + Send + Sync + 'static {
    async fn get(&self, id: &AssignmentId) -> Result<Option<Assignment>, StoreError>;

    async fn add(&self, assignment: Assignment) -> Result<(), StoreError>;

    /// Full-row update keyed by the assignment's id.
    async fn update(&self, assignment: Assignment) -> Result<(), StoreError>;

    async fn remove(&self, id: &AssignmentId) -> Result<(), StoreError>;
}

/// Store of submissions
#[async_trait]
pub trait SubmissionStore: Clone + Send + Sync + 'static {
    async fn get(&self, id: &SubmissionId) -> Result<Option<Submission>, StoreError>;

    async fn set_grade(&self, id: &SubmissionId, grade: u8) -> Result<(), StoreError>;

    async fn remove(&self, id: &SubmissionId) -> Result<(), StoreError>;
}
