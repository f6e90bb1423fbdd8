//! Deleting a session removes it and its records together.

use crate::prelude::*;
use campus_core::model::{AttendanceStatus, SessionId, StudentId};
use campus_core::outcome::ErrorKind;
use campus_core::requests::{AttendanceEntry, MarkAttendance};

#[tokio::test]
async fn delete_cascades_to_records() {
    let world = world();
    let allocation = world.seed_allocation("alloc-1", "t1").await;

    let session = world
        .dispatcher
        .mark_attendance(MarkAttendance {
            allocation_id: allocation,
            date: "2024-01-10".parse().unwrap(),
            entries: vec![
                AttendanceEntry {
                    student_id: StudentId::new("s1"),
                    status: AttendanceStatus::Present,
                },
                AttendanceEntry {
                    student_id: StudentId::new("s2"),
                    status: AttendanceStatus::Late,
                },
            ],
        })
        .await
        .unwrap();

    world.dispatcher.delete_attendance(&session).await.unwrap();

    assert_eq!(world.store.session_count(), 0);
    assert!(world.store.records_for(&session).is_empty());
}

#[tokio::test]
async fn deleting_an_unknown_session_is_not_found() {
    let world = world();

    let err = world
        .dispatcher
        .delete_attendance(&SessionId::new("ghost"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
    assert_eq!(err.code, "attendance.session_not_found");
}
