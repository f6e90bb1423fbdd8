// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Standard rule sets, one pipeline per request type.
//!
//! The dispatcher builds these once at construction. Field error codes are
//! stable strings; messages are for humans only.

use crate::outcome::FieldError;
use crate::requests::{
    AttendanceEntry, CreateAllocation, CreateAssignment, GradeSubmission, MarkAttendance,
    UpdateAssignment, UpdateAttendance,
};
use crate::validate::Pipeline;
use std::collections::HashSet;

/// Maximum percentage grade.
pub const GRADE_MAX: u8 = 100;

fn require(field: &'static str, value: &str, errors: &mut Vec<FieldError>) {
    if value.trim().is_empty() {
        errors.push(FieldError::new(
            field,
            "field.required",
            format!("{field} is required"),
        ));
    }
}

/// Entries must name real students, and a single call must not mark the same
/// student twice: the upsert would make the second entry silently win.
fn entries_well_formed(entries: &[AttendanceEntry], errors: &mut Vec<FieldError>) {
    let mut seen = HashSet::new();
    for entry in entries {
        if entry.student_id.as_str().trim().is_empty() {
            errors.push(FieldError::new(
                "entries",
                "field.required",
                "entry student id is required",
            ));
            continue;
        }
        if !seen.insert(entry.student_id.clone()) {
            errors.push(FieldError::new(
                "entries",
                "attendance.duplicate_student",
                format!("student {} appears more than once", entry.student_id),
            ));
        }
    }
}

pub fn mark_attendance() -> Pipeline<MarkAttendance> {
    Pipeline::new()
        .with(|req: &MarkAttendance, errors: &mut Vec<FieldError>| {
            require("allocation_id", req.allocation_id.as_str(), errors);
        })
        .with(|req: &MarkAttendance, errors: &mut Vec<FieldError>| {
            entries_well_formed(&req.entries, errors);
        })
}

pub fn update_attendance() -> Pipeline<UpdateAttendance> {
    Pipeline::new()
        .with(|req: &UpdateAttendance, errors: &mut Vec<FieldError>| {
            require("session_id", req.session_id.as_str(), errors);
        })
        .with(|req: &UpdateAttendance, errors: &mut Vec<FieldError>| {
            entries_well_formed(&req.entries, errors);
        })
}

pub fn create_allocation() -> Pipeline<CreateAllocation> {
    Pipeline::new().with(|req: &CreateAllocation, errors: &mut Vec<FieldError>| {
        require("teacher_id", req.teacher_id.as_str(), errors);
        require("class_id", req.class_id.as_str(), errors);
        require("subject_id", req.subject_id.as_str(), errors);
    })
}

pub fn create_assignment() -> Pipeline<CreateAssignment> {
    Pipeline::new()
        .with(|req: &CreateAssignment, errors: &mut Vec<FieldError>| {
            require("allocation_id", req.allocation_id.as_str(), errors);
        })
        .with(|req: &CreateAssignment, errors: &mut Vec<FieldError>| {
            require("title", &req.title, errors);
        })
}

pub fn update_assignment() -> Pipeline<UpdateAssignment> {
    Pipeline::new()
        .with(|req: &UpdateAssignment, errors: &mut Vec<FieldError>| {
            require("assignment_id", req.assignment_id.as_str(), errors);
        })
        .with(|req: &UpdateAssignment, errors: &mut Vec<FieldError>| {
            require("title", &req.title, errors);
        })
}

pub fn grade_submission() -> Pipeline<GradeSubmission> {
    Pipeline::new()
        .with(|req: &GradeSubmission, errors: &mut Vec<FieldError>| {
            require("submission_id", req.submission_id.as_str(), errors);
        })
        .with(|req: &GradeSubmission, errors: &mut Vec<FieldError>| {
            if req.grade > GRADE_MAX {
                errors.push(FieldError::new(
                    "grade",
                    "submission.grade_range",
                    format!("grade must be at most {GRADE_MAX}"),
                ));
            }
        })
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
