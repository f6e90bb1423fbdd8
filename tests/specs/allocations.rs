//! Allocation administration through the dispatcher.

use crate::prelude::*;
use campus_core::model::{ClassId, Role, SubjectId, UserId};
use campus_core::outcome::{codes, ErrorKind};
use campus_core::requests::CreateAllocation;

fn binding(teacher: &str, class: &str, subject: &str) -> CreateAllocation {
    CreateAllocation {
        teacher_id: UserId::new(teacher),
        class_id: ClassId::new(class),
        subject_id: SubjectId::new(subject),
    }
}

#[tokio::test]
async fn admins_create_and_archive_allocations() {
    let world = world();
    world.sign_in("root", Role::Admin);

    let id = world
        .dispatcher
        .create_allocation(binding("t1", "7a", "math"))
        .await
        .unwrap();
    assert_eq!(world.dispatcher.list_allocations().await.unwrap().len(), 1);

    world.dispatcher.archive_allocation(&id).await.unwrap();
    assert!(world.dispatcher.list_allocations().await.unwrap().is_empty());
}

#[tokio::test]
async fn teachers_may_not_create_allocations() {
    let world = world();
    world.sign_in("t1", Role::Teacher);

    let err = world
        .dispatcher
        .create_allocation(binding("t1", "7a", "math"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Forbidden);
}

#[tokio::test]
async fn a_duplicate_binding_is_a_conflict() {
    let world = world();
    world.sign_in("root", Role::Admin);

    world
        .dispatcher
        .create_allocation(binding("t1", "7a", "math"))
        .await
        .unwrap();
    let err = world
        .dispatcher
        .create_allocation(binding("t1", "7a", "math"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Conflict);
}

#[tokio::test]
async fn blank_fields_are_collected_by_the_pipeline() {
    let world = world();
    world.sign_in("root", Role::Admin);

    let err = world
        .dispatcher
        .create_allocation(binding("", "", "math"))
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::Validation);
    assert_eq!(err.code, codes::VALIDATION_FAILED);
    assert_eq!(err.field_errors.len(), 2);
}

#[tokio::test]
async fn an_archived_allocation_no_longer_takes_attendance() {
    use campus_core::requests::MarkAttendance;

    let world = world();
    world.sign_in("root", Role::Admin);
    let id = world
        .dispatcher
        .create_allocation(binding("t1", "7a", "math"))
        .await
        .unwrap();
    world.dispatcher.archive_allocation(&id).await.unwrap();

    let err = world
        .dispatcher
        .mark_attendance(MarkAttendance {
            allocation_id: id,
            date: "2024-01-10".parse().unwrap(),
            entries: vec![],
        })
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}
