// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Request types for the operations the dispatcher exposes.
//!
//! These are the units the validation pipeline is registered against: one
//! pipeline per request type, run ahead of the handler.

use crate::model::{
    AllocationId, AssignmentId, AttendanceStatus, ClassId, SessionId, StudentId, SubjectId,
    SubmissionId, UserId,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One (student, status) pair in a mark or update call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceEntry {
    pub student_id: StudentId,
    pub status: AttendanceStatus,
}

/// Take (or re-take) attendance for an allocation on a date.
///
/// Entries are a partial list: students not mentioned keep whatever status
/// they already have.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkAttendance {
    pub allocation_id: AllocationId,
    pub date: NaiveDate,
    pub entries: Vec<AttendanceEntry>,
}

/// Move a session to a new date and/or re-mark some of its records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateAttendance {
    pub session_id: SessionId,
    pub date: NaiveDate,
    pub entries: Vec<AttendanceEntry>,
}

/// Bind a teacher to a class and subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAllocation {
    pub teacher_id: UserId,
    pub class_id: ClassId,
    pub subject_id: SubjectId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAssignment {
    pub allocation_id: AllocationId,
    pub title: String,
    pub due_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateAssignment {
    pub assignment_id: AssignmentId,
    pub title: String,
    pub due_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeSubmission {
    pub submission_id: SubmissionId,
    /// Percentage grade, 0..=100.
    pub grade: u8,
}
