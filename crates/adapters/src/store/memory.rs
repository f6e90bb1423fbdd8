// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory store
//!
//! One shared state behind a mutex, exposed through per-trait handles so each
//! collaborator can be handed out independently while cascades (session
//! removal taking its records along) still see the whole state. Serves as the
//! in-process backend for tests and embedding; it enforces the same
//! composite-unique constraints a database schema would, so engine behavior
//! under constraint violations is exercisable without a database.

use super::{
    AllocationStore, AssignmentStore, RecordStore, SessionStore, StoreError, SubmissionStore,
};
use async_trait::async_trait;
use campus_core::model::{
    Allocation, AllocationId, Assignment, AssignmentId, AttendanceRecord, AttendanceSession,
    AttendanceStatus, ClassId, RecordId, SessionId, StudentId, SubjectId, Submission,
    SubmissionId, UserId,
};
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

const ALLOCATION_BINDING: &str = "allocation.binding";
const SESSION_ALLOCATION_DATE: &str = "attendance_session.allocation_date";
const RECORD_SESSION_STUDENT: &str = "attendance_record.session_student";

#[derive(Debug, Default)]
struct State {
    allocations: HashMap<AllocationId, Allocation>,
    sessions: HashMap<SessionId, AttendanceSession>,
    records: HashMap<RecordId, AttendanceRecord>,
    assignments: HashMap<AssignmentId, Assignment>,
    submissions: HashMap<SubmissionId, Submission>,
}

fn lock(state: &Arc<Mutex<State>>) -> MutexGuard<'_, State> {
    state.lock().unwrap_or_else(|e| e.into_inner())
}

/// Shared in-memory store; clones and handles share the same state.
#[derive(Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<State>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocations(&self) -> MemoryAllocations {
        MemoryAllocations {
            state: self.state.clone(),
        }
    }

    pub fn sessions(&self) -> MemorySessions {
        MemorySessions {
            state: self.state.clone(),
        }
    }

    pub fn records(&self) -> MemoryRecords {
        MemoryRecords {
            state: self.state.clone(),
        }
    }

    pub fn assignments(&self) -> MemoryAssignments {
        MemoryAssignments {
            state: self.state.clone(),
        }
    }

    pub fn submissions(&self) -> MemorySubmissions {
        MemorySubmissions {
            state: self.state.clone(),
        }
    }

    /// Seed a submission directly; submission intake is outside the engine's
    /// surface.
    pub fn seed_submission(&self, submission: Submission) {
        lock(&self.state)
            .submissions
            .insert(submission.id.clone(), submission);
    }

    /// Snapshot a submission for assertions.
    pub fn submission(&self, id: &SubmissionId) -> Option<Submission> {
        lock(&self.state).submissions.get(id).cloned()
    }

    /// Snapshot an assignment for assertions.
    pub fn assignment(&self, id: &AssignmentId) -> Option<Assignment> {
        lock(&self.state).assignments.get(id).cloned()
    }

    /// Snapshot a session for assertions.
    pub fn session(&self, id: &SessionId) -> Option<AttendanceSession> {
        lock(&self.state).sessions.get(id).cloned()
    }

    pub fn session_count(&self) -> usize {
        lock(&self.state).sessions.len()
    }

    /// Records of one session, ordered by student id for stable assertions.
    pub fn records_for(&self, session_id: &SessionId) -> Vec<AttendanceRecord> {
        let mut records: Vec<AttendanceRecord> = lock(&self.state)
            .records
            .values()
            .filter(|r| &r.session_id == session_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| a.student_id.as_str().cmp(b.student_id.as_str()));
        records
    }
}

/// [`AllocationStore`] handle over the shared state.
#[derive(Clone)]
pub struct MemoryAllocations {
    state: Arc<Mutex<State>>,
}

#[async_trait]
impl AllocationStore for MemoryAllocations {
    async fn get(&self, id: &AllocationId) -> Result<Option<Allocation>, StoreError> {
        Ok(lock(&self.state).allocations.get(id).cloned())
    }

    async fn find_by_binding(
        &self,
        teacher_id: &UserId,
        class_id: &ClassId,
        subject_id: &SubjectId,
    ) -> Result<Option<Allocation>, StoreError> {
        Ok(lock(&self.state)
            .allocations
            .values()
            .find(|a| {
                &a.teacher_id == teacher_id
                    && &a.class_id == class_id
                    && &a.subject_id == subject_id
            })
            .cloned())
    }

    async fn add(&self, allocation: Allocation) -> Result<(), StoreError> {
        let mut state = lock(&self.state);
        let duplicate = state.allocations.values().any(|a| {
            a.teacher_id == allocation.teacher_id
                && a.class_id == allocation.class_id
                && a.subject_id == allocation.subject_id
        });
        if duplicate {
            return Err(StoreError::UniqueViolation(ALLOCATION_BINDING));
        }
        state.allocations.insert(allocation.id.clone(), allocation);
        Ok(())
    }

    async fn archive(&self, id: &AllocationId) -> Result<(), StoreError> {
        let mut state = lock(&self.state);
        match state.allocations.get_mut(id) {
            Some(allocation) => {
                allocation.archived = true;
                Ok(())
            }
            None => Err(StoreError::RowMissing(format!("allocation {id}"))),
        }
    }

    async fn list(&self) -> Result<Vec<Allocation>, StoreError> {
        let mut allocations: Vec<Allocation> =
            lock(&self.state).allocations.values().cloned().collect();
        allocations.sort_by(|a, b| a.id.as_str().cmp(b.id.as_str()));
        Ok(allocations)
    }
}

/// [`SessionStore`] handle over the shared state.
#[derive(Clone)]
pub struct MemorySessions {
    state: Arc<Mutex<State>>,
}

#[async_trait]
impl SessionStore for MemorySessions {
    async fn get(&self, id: &SessionId) -> Result<Option<AttendanceSession>, StoreError> {
        Ok(lock(&self.state).sessions.get(id).cloned())
    }

    async fn find_by_date(
        &self,
        allocation_id: &AllocationId,
        date: NaiveDate,
    ) -> Result<Option<AttendanceSession>, StoreError> {
        Ok(lock(&self.state)
            .sessions
            .values()
            .find(|s| &s.allocation_id == allocation_id && s.date == date)
            .cloned())
    }

    async fn add(&self, session: AttendanceSession) -> Result<(), StoreError> {
        let mut state = lock(&self.state);
        let duplicate = state
            .sessions
            .values()
            .any(|s| s.allocation_id == session.allocation_id && s.date == session.date);
        if duplicate {
            return Err(StoreError::UniqueViolation(SESSION_ALLOCATION_DATE));
        }
        state.sessions.insert(session.id.clone(), session);
        Ok(())
    }

    async fn set_date(&self, id: &SessionId, date: NaiveDate) -> Result<(), StoreError> {
        let mut state = lock(&self.state);
        let allocation_id = match state.sessions.get(id) {
            Some(session) => session.allocation_id.clone(),
            None => return Err(StoreError::RowMissing(format!("session {id}"))),
        };
        let occupied = state
            .sessions
            .values()
            .any(|s| &s.id != id && s.allocation_id == allocation_id && s.date == date);
        if occupied {
            return Err(StoreError::UniqueViolation(SESSION_ALLOCATION_DATE));
        }
        if let Some(session) = state.sessions.get_mut(id) {
            session.date = date;
        }
        Ok(())
    }

    async fn remove(&self, id: &SessionId) -> Result<(), StoreError> {
        let mut state = lock(&self.state);
        state.sessions.remove(id);
        state.records.retain(|_, r| &r.session_id != id);
        Ok(())
    }
}

/// [`RecordStore`] handle over the shared state.
#[derive(Clone)]
pub struct MemoryRecords {
    state: Arc<Mutex<State>>,
}

#[async_trait]
impl RecordStore for MemoryRecords {
    async fn find(
        &self,
        session_id: &SessionId,
        student_id: &StudentId,
    ) -> Result<Option<AttendanceRecord>, StoreError> {
        Ok(lock(&self.state)
            .records
            .values()
            .find(|r| &r.session_id == session_id && &r.student_id == student_id)
            .cloned())
    }

    async fn list_for_session(
        &self,
        session_id: &SessionId,
    ) -> Result<Vec<AttendanceRecord>, StoreError> {
        let mut records: Vec<AttendanceRecord> = lock(&self.state)
            .records
            .values()
            .filter(|r| &r.session_id == session_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| a.student_id.as_str().cmp(b.student_id.as_str()));
        Ok(records)
    }

    async fn add(&self, record: AttendanceRecord) -> Result<(), StoreError> {
        let mut state = lock(&self.state);
        let duplicate = state
            .records
            .values()
            .any(|r| r.session_id == record.session_id && r.student_id == record.student_id);
        if duplicate {
            return Err(StoreError::UniqueViolation(RECORD_SESSION_STUDENT));
        }
        state.records.insert(record.id.clone(), record);
        Ok(())
    }

    async fn set_status(&self, id: &RecordId, status: AttendanceStatus) -> Result<(), StoreError> {
        let mut state = lock(&self.state);
        match state.records.get_mut(id) {
            Some(record) => {
                record.status = status;
                Ok(())
            }
            None => Err(StoreError::RowMissing(format!("record {id}"))),
        }
    }
}

/// [`AssignmentStore`] handle over the shared state.
#[derive(Clone)]
pub struct MemoryAssignments {
    state: Arc<Mutex<State>>,
}

#[async_trait]
impl AssignmentStore for MemoryAssignments {
    async fn get(&self, id: &AssignmentId) -> Result<Option<Assignment>, StoreError> {
        Ok(lock(&self.state).assignments.get(id).cloned())
    }

    async fn add(&self, assignment: Assignment) -> Result<(), StoreError> {
        lock(&self.state)
            .assignments
            .insert(assignment.id.clone(), assignment);
        Ok(())
    }

    async fn update(&self, assignment: Assignment) -> Result<(), StoreError> {
        let mut state = lock(&self.state);
        if !state.assignments.contains_key(&assignment.id) {
            return Err(StoreError::RowMissing(format!(
                "assignment {}",
                assignment.id
            )));
        }
        state.assignments.insert(assignment.id.clone(), assignment);
        Ok(())
    }

    async fn remove(&self, id: &AssignmentId) -> Result<(), StoreError> {
        lock(&self.state).assignments.remove(id);
        Ok(())
    }
}

/// [`SubmissionStore`] handle over the shared state.
#[derive(Clone)]
pub struct MemorySubmissions {
    state: Arc<Mutex<State>>,
}

#[async_trait]
impl SubmissionStore for MemorySubmissions {
    async fn get(&self, id: &SubmissionId) -> Result<Option<Submission>, StoreError> {
        Ok(lock(&self.state).submissions.get(id).cloned())
    }

    async fn set_grade(&self, id: &SubmissionId, grade: u8) -> Result<(), StoreError> {
        let mut state = lock(&self.state);
        match state.submissions.get_mut(id) {
            Some(submission) => {
                submission.grade = Some(grade);
                Ok(())
            }
            None => Err(StoreError::RowMissing(format!("submission {id}"))),
        }
    }

    async fn remove(&self, id: &SubmissionId) -> Result<(), StoreError> {
        lock(&self.state).submissions.remove(id);
        Ok(())
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;
