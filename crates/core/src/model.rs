// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Domain model types and typed identifiers.
//!
//! Entities here are plain data; all invariants that need I/O to check
//! (composite uniqueness, ownership) are enforced by the engine and the
//! store collaborators.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

string_id!(
    /// Identifier of a teacher/class/subject binding.
    AllocationId
);
string_id!(
    /// Identifier of one attendance-taking event.
    SessionId
);
string_id!(
    /// Identifier of one student's attendance record within a session.
    RecordId
);
string_id!(AssignmentId);
string_id!(SubmissionId);
string_id!(
    /// Identifier of any account (teacher, admin, or student).
    UserId
);
string_id!(StudentId);
string_id!(ClassId);
string_id!(SubjectId);

/// Role attached to the acting caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Teacher,
    Student,
}

/// The acting identity for one operation.
///
/// Resolved once at the dispatch boundary and passed explicitly into every
/// handler invocation; handlers never read identity from ambient state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    pub user_id: UserId,
    pub role: Role,
}

impl Caller {
    pub fn new(user_id: UserId, role: Role) -> Self {
        Self { user_id, role }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Binding of one teacher to one class and one subject.
///
/// The (teacher_id, class_id, subject_id) triple is unique. Assignments and
/// attendance sessions hang off an allocation and reference it read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    pub id: AllocationId,
    pub teacher_id: UserId,
    pub class_id: ClassId,
    pub subject_id: SubjectId,
    /// Archived allocations stay in the store for referential integrity but
    /// are hidden from read paths by the visibility predicate.
    pub archived: bool,
}

impl Allocation {
    pub fn new(id: AllocationId, teacher_id: UserId, class_id: ClassId, subject_id: SubjectId) -> Self {
        Self {
            id,
            teacher_id,
            class_id,
            subject_id,
            archived: false,
        }
    }
}

/// One attendance-taking event for an allocation on a date.
///
/// The (allocation_id, date) pair is unique; the store enforces it as a
/// constraint and the engine translates violations into conflicts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceSession {
    pub id: SessionId,
    pub allocation_id: AllocationId,
    pub date: NaiveDate,
}

/// Attendance status values, a closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
    Excused,
}

/// One student's attendance status within a session.
///
/// The (session_id, student_id) pair is unique; re-marking overwrites the
/// status in place (last-write-wins, no history).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: RecordId,
    pub session_id: SessionId,
    pub student_id: StudentId,
    pub status: AttendanceStatus,
}

/// A piece of work set for the class of an allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub id: AssignmentId,
    pub allocation_id: AllocationId,
    pub title: String,
    pub due_date: Option<NaiveDate>,
}

/// One student's submission for an assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub id: SubmissionId,
    pub assignment_id: AssignmentId,
    pub student_id: StudentId,
    /// Percentage grade, absent until graded.
    pub grade: Option<u8>,
}
