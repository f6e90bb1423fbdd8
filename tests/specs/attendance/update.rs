//! Updating a session: date moves, conflicts, and ownership.

use crate::prelude::*;
use campus_core::model::{AttendanceStatus, Role, SessionId, StudentId};
use campus_core::outcome::ErrorKind;
use campus_core::requests::{AttendanceEntry, MarkAttendance, UpdateAttendance};
use chrono::NaiveDate;

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

async fn seeded_session(world: &World, day: &str) -> SessionId {
    let allocation = campus_core::model::AllocationId::new("alloc-1");
    world
        .dispatcher
        .mark_attendance(MarkAttendance {
            allocation_id: allocation,
            date: date(day),
            entries: vec![AttendanceEntry {
                student_id: StudentId::new("s1"),
                status: AttendanceStatus::Present,
            }],
        })
        .await
        .unwrap()
}

fn update(session: &SessionId, day: &str) -> UpdateAttendance {
    UpdateAttendance {
        session_id: session.clone(),
        date: date(day),
        entries: vec![],
    }
}

#[tokio::test]
async fn moving_to_a_free_date_succeeds_and_touches_no_records() {
    let world = world();
    world.seed_allocation("alloc-1", "t1").await;
    world.sign_in("t1", Role::Teacher);
    let x = seeded_session(&world, "2024-01-10").await;

    world
        .dispatcher
        .update_attendance(update(&x, "2024-01-11"))
        .await
        .unwrap();

    assert_eq!(world.store.session(&x).unwrap().date, date("2024-01-11"));
    let records = world.store.records_for(&x);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].status, AttendanceStatus::Present);
}

#[tokio::test]
async fn moving_to_an_occupied_date_conflicts_and_leaves_both_sessions_alone() {
    let world = world();
    world.seed_allocation("alloc-1", "t1").await;
    world.sign_in("t1", Role::Teacher);
    let x = seeded_session(&world, "2024-01-10").await;
    let y = seeded_session(&world, "2024-01-11").await;

    let err = world
        .dispatcher
        .update_attendance(update(&x, "2024-01-11"))
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::Conflict);
    assert_eq!(err.code, "attendance.session_exists");
    assert_eq!(world.store.session(&x).unwrap().date, date("2024-01-10"));
    assert_eq!(world.store.session(&y).unwrap().date, date("2024-01-11"));
}

#[tokio::test]
async fn a_non_owner_update_is_forbidden_and_mutates_nothing() {
    let world = world();
    world.seed_allocation("alloc-1", "t1").await;
    world.sign_in("t1", Role::Teacher);
    let x = seeded_session(&world, "2024-01-10").await;

    world.sign_in("t2", Role::Teacher);
    let err = world
        .dispatcher
        .update_attendance(UpdateAttendance {
            session_id: x.clone(),
            date: date("2024-01-12"),
            entries: vec![AttendanceEntry {
                student_id: StudentId::new("s1"),
                status: AttendanceStatus::Absent,
            }],
        })
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::Forbidden);
    assert_eq!(world.store.session(&x).unwrap().date, date("2024-01-10"));
    assert_eq!(
        world.store.records_for(&x)[0].status,
        AttendanceStatus::Present
    );
}

#[tokio::test]
async fn an_admin_passes_only_under_the_bypass_policy() {
    use campus_core::authz::{AdminBypass, OwnershipPolicy};

    let strict = world();
    strict.seed_allocation("alloc-1", "t1").await;
    strict.sign_in("t1", Role::Teacher);
    let x = seeded_session(&strict, "2024-01-10").await;
    strict.sign_in("root", Role::Admin);
    let err = strict
        .dispatcher
        .update_attendance(update(&x, "2024-01-11"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Forbidden);

    let lenient = world_with_policy(OwnershipPolicy {
        admin_bypass: AdminBypass::Enabled,
    });
    lenient.seed_allocation("alloc-1", "t1").await;
    lenient.sign_in("t1", Role::Teacher);
    let x = seeded_session(&lenient, "2024-01-10").await;
    lenient.sign_in("root", Role::Admin);
    lenient
        .dispatcher
        .update_attendance(update(&x, "2024-01-11"))
        .await
        .unwrap();
    assert_eq!(lenient.store.session(&x).unwrap().date, date("2024-01-11"));
}

#[tokio::test]
async fn signing_out_makes_updates_unauthorized() {
    let world = world();
    world.seed_allocation("alloc-1", "t1").await;
    world.sign_in("t1", Role::Teacher);
    let x = seeded_session(&world, "2024-01-10").await;

    world.sign_out();
    let err = world
        .dispatcher
        .update_attendance(update(&x, "2024-01-11"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Unauthorized);
}
