//! Assignment and submission writes share the ownership rule.

use crate::prelude::*;
use campus_core::model::{AssignmentId, Role, StudentId, Submission, SubmissionId};
use campus_core::outcome::ErrorKind;
use campus_core::requests::{CreateAssignment, GradeSubmission, UpdateAssignment};

async fn seeded_assignment(world: &World) -> AssignmentId {
    world.sign_in("t1", Role::Teacher);
    world
        .dispatcher
        .create_assignment(CreateAssignment {
            allocation_id: campus_core::model::AllocationId::new("alloc-1"),
            title: "Fractions".to_string(),
            due_date: None,
        })
        .await
        .unwrap()
}

fn seeded_submission(world: &World, assignment: &AssignmentId) -> SubmissionId {
    let id = SubmissionId::new("sub-1");
    world.store.seed_submission(Submission {
        id: id.clone(),
        assignment_id: assignment.clone(),
        student_id: StudentId::new("stu-1"),
        grade: None,
    });
    id
}

#[tokio::test]
async fn the_owning_teacher_edits_their_assignment() {
    let world = world();
    world.seed_allocation("alloc-1", "t1").await;
    let assignment = seeded_assignment(&world).await;

    world
        .dispatcher
        .update_assignment(UpdateAssignment {
            assignment_id: assignment.clone(),
            title: "Fractions, part two".to_string(),
            due_date: Some("2024-03-01".parse().unwrap()),
        })
        .await
        .unwrap();

    assert_eq!(
        world.store.assignment(&assignment).unwrap().title,
        "Fractions, part two"
    );
}

#[tokio::test]
async fn another_teacher_cannot_edit_or_delete_it() {
    let world = world();
    world.seed_allocation("alloc-1", "t1").await;
    let assignment = seeded_assignment(&world).await;

    world.sign_in("t2", Role::Teacher);
    let err = world
        .dispatcher
        .update_assignment(UpdateAssignment {
            assignment_id: assignment.clone(),
            title: "Hijacked".to_string(),
            due_date: None,
        })
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Forbidden);

    let err = world
        .dispatcher
        .delete_assignment(&assignment)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Forbidden);
    assert!(world.store.assignment(&assignment).is_some());
}

#[tokio::test]
async fn grading_walks_the_ownership_chain() {
    let world = world();
    world.seed_allocation("alloc-1", "t1").await;
    let assignment = seeded_assignment(&world).await;
    let submission = seeded_submission(&world, &assignment);

    world
        .dispatcher
        .grade_submission(GradeSubmission {
            submission_id: submission.clone(),
            grade: 85,
        })
        .await
        .unwrap();
    assert_eq!(world.store.submission(&submission).unwrap().grade, Some(85));

    world.sign_in("t2", Role::Teacher);
    let err = world
        .dispatcher
        .grade_submission(GradeSubmission {
            submission_id: submission.clone(),
            grade: 0,
        })
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Forbidden);
    assert_eq!(world.store.submission(&submission).unwrap().grade, Some(85));
}

#[tokio::test]
async fn out_of_range_grades_never_reach_the_store() {
    let world = world();
    world.seed_allocation("alloc-1", "t1").await;
    let assignment = seeded_assignment(&world).await;
    let submission = seeded_submission(&world, &assignment);

    let err = world
        .dispatcher
        .grade_submission(GradeSubmission {
            submission_id: submission.clone(),
            grade: 101,
        })
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::Validation);
    assert_eq!(world.store.submission(&submission).unwrap().grade, None);
}

#[tokio::test]
async fn the_owner_deletes_a_submission() {
    let world = world();
    world.seed_allocation("alloc-1", "t1").await;
    let assignment = seeded_assignment(&world).await;
    let submission = seeded_submission(&world, &assignment);

    world
        .dispatcher
        .delete_submission(&submission)
        .await
        .unwrap();
    assert!(world.store.submission(&submission).is_none());
}
