//! The failure payload a transport mapper serializes.

use crate::prelude::*;
use campus_core::model::{Role, SessionId};
use campus_core::problem::ProblemDetails;
use campus_core::requests::{MarkAttendance, UpdateAttendance};
use similar_asserts::assert_eq;

#[tokio::test]
async fn a_not_found_failure_serializes_as_documented() {
    let world = world();

    let err = world
        .dispatcher
        .delete_attendance(&SessionId::new("ghost"))
        .await
        .unwrap_err();

    let json = serde_json::to_string_pretty(&ProblemDetails::from(&err)).unwrap();
    assert_eq!(
        json,
        r#"{
  "status": 404,
  "title": "Not Found",
  "code": "attendance.session_not_found",
  "detail": "attendance session not found"
}"#
    );
}

#[tokio::test]
async fn a_validation_failure_serializes_with_its_field_errors() {
    let world = world();

    let err = world
        .dispatcher
        .mark_attendance(MarkAttendance {
            allocation_id: campus_core::model::AllocationId::new(""),
            date: "2024-01-10".parse().unwrap(),
            entries: vec![],
        })
        .await
        .unwrap_err();

    let json = serde_json::to_string_pretty(&ProblemDetails::from(&err)).unwrap();
    assert_eq!(
        json,
        r#"{
  "status": 400,
  "title": "Validation Failed",
  "code": "error.validation",
  "detail": "request failed validation with 1 error(s)",
  "errors": [
    {
      "field": "allocation_id",
      "code": "field.required",
      "message": "allocation_id is required"
    }
  ]
}"#
    );
}

#[tokio::test]
async fn forbidden_and_conflict_map_to_their_statuses() {
    let world = world();
    world.seed_allocation("alloc-1", "t1").await;
    world.sign_in("t1", Role::Teacher);

    let x = world
        .dispatcher
        .mark_attendance(MarkAttendance {
            allocation_id: campus_core::model::AllocationId::new("alloc-1"),
            date: "2024-01-10".parse().unwrap(),
            entries: vec![],
        })
        .await
        .unwrap();
    world
        .dispatcher
        .mark_attendance(MarkAttendance {
            allocation_id: campus_core::model::AllocationId::new("alloc-1"),
            date: "2024-01-11".parse().unwrap(),
            entries: vec![],
        })
        .await
        .unwrap();

    let conflict = world
        .dispatcher
        .update_attendance(UpdateAttendance {
            session_id: x.clone(),
            date: "2024-01-11".parse().unwrap(),
            entries: vec![],
        })
        .await
        .unwrap_err();
    assert_eq!(ProblemDetails::from(&conflict).status, 409);

    world.sign_in("t2", Role::Teacher);
    let forbidden = world
        .dispatcher
        .update_attendance(UpdateAttendance {
            session_id: x,
            date: "2024-01-12".parse().unwrap(),
            entries: vec![],
        })
        .await
        .unwrap_err();
    assert_eq!(ProblemDetails::from(&forbidden).status, 403);
}
