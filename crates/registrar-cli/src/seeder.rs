//! Fake student generation.
//!
//! Requests are generated in parallel and then pushed through the regular
//! `add_student` path, so seeded students are validated like any other.

use std::time::Instant;

use chrono::NaiveDate;
use fake::Fake;
use fake::faker::address::en::{BuildingNumber, StreetName};
use fake::faker::name::en::FirstName;
use rayon::prelude::*;
use registrar::StudentRegistry;
use registrar::registrar_core::RegistryResult;
use registrar_models::{CourseId, Gender, StudentAddRequest, StudentResponse};

/// Generate `count` valid add requests spread across `course_ids`.
///
/// With no courses the requests carry no course and will fail validation.
pub fn generate_students(count: usize, course_ids: &[CourseId]) -> Vec<StudentAddRequest> {
    (0..count)
        .into_par_iter()
        .map(|idx| generate_student(idx, course_ids))
        .collect()
}

fn generate_student(idx: usize, course_ids: &[CourseId]) -> StudentAddRequest {
    let first_name: String = FirstName().fake();
    let street: String = StreetName().fake();
    let building: String = BuildingNumber().fake();

    let local_part: String = first_name
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect::<String>()
        .to_lowercase();
    let email = format!("{}+{}@example.com", local_part, idx);

    let course_id = if course_ids.is_empty() {
        None
    } else {
        course_ids.get((0..course_ids.len()).fake::<usize>()).copied()
    };

    let date_of_birth = NaiveDate::from_ymd_opt(
        (1985..2006).fake::<i32>(),
        (1..13).fake::<u32>(),
        (1..29).fake::<u32>(),
    );

    StudentAddRequest {
        student_name: Some(first_name),
        student_email: Some(email),
        course_id,
        date_of_birth,
        address: Some(format!("{} {}", building, street)),
        gender: Some(Gender::ALL[(0..Gender::ALL.len()).fake::<usize>()]),
    }
}

/// Add every request to `registry`, stopping at the first rejection.
pub fn seed_students(
    registry: &StudentRegistry,
    requests: Vec<StudentAddRequest>,
) -> RegistryResult<Vec<StudentResponse>> {
    let start_time = Instant::now();
    println!("🎓 Seeding {} students...", requests.len());

    let added = requests
        .into_iter()
        .map(|request| registry.add_student(Some(request)))
        .collect::<RegistryResult<Vec<_>>>()?;

    println!(
        "   ✓ Inserted {} students in {:?}",
        added.len(),
        start_time.elapsed()
    );

    Ok(added)
}
