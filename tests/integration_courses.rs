mod common;

use std::collections::HashSet;

use common::{empty_state, generate_unique_course_name, seeded_state};
use registrar::modules::courses::CourseAddRequest;
use registrar_core::RegistryError;

#[test]
fn test_add_course_then_list() {
    let state = empty_state();
    let name = generate_unique_course_name();

    let added = state
        .courses
        .add_course(Some(CourseAddRequest::new(name.clone())))
        .unwrap();

    let all = state.courses.get_all();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0], added);
    assert_eq!(all[0].course_name, name);
}

#[test]
fn test_duplicate_course_name_is_conflict() {
    let state = seeded_state();

    let err = state
        .courses
        .add_course(Some(CourseAddRequest::new("Bachelor in Accounting")))
        .unwrap_err();

    assert_eq!(
        err,
        RegistryError::Conflict("Course name Bachelor in Accounting already exists".to_string())
    );
    assert_eq!(state.courses.len(), 3);
}

#[test]
fn test_blank_course_name_is_rejected() {
    let state = empty_state();

    let err = state
        .courses
        .add_course(Some(CourseAddRequest::new("")))
        .unwrap_err();

    assert_eq!(err.kind(), "validation");
    assert_eq!(err.violations()[0].message, "Course Name can't be blank");
    assert!(state.courses.is_empty());
}

#[test]
fn test_course_ids_are_unique() {
    let state = empty_state();
    for _ in 0..50 {
        state
            .courses
            .add_course(Some(CourseAddRequest::new(generate_unique_course_name())))
            .unwrap();
    }

    let ids: HashSet<_> = state
        .courses
        .get_all()
        .into_iter()
        .map(|course| course.course_id)
        .collect();
    assert_eq!(ids.len(), 50);
}

#[test]
fn test_concurrent_adds_of_same_name_admit_one() {
    let state = empty_state();

    let results: Vec<bool> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(|| {
                    state
                        .courses
                        .add_course(Some(CourseAddRequest::new("Rust")))
                        .is_ok()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(results.iter().filter(|ok| **ok).count(), 1);
    assert_eq!(state.courses.len(), 1);
}
