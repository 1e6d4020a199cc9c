use chrono::NaiveDate;
use fake::Fake;
use fake::faker::address::en::StreetName;
use fake::faker::name::en::FirstName;
use registrar::modules::courses::CourseAddRequest;
use registrar::{AppState, init_app_state};
use registrar_config::RegistrarConfig;
use registrar_models::{CourseId, Gender, StudentAddRequest};
use uuid::Uuid;

#[allow(dead_code)]
pub fn empty_state() -> AppState {
    init_app_state(RegistrarConfig {
        seed_demo_data: false,
        ..RegistrarConfig::default()
    })
}

#[allow(dead_code)]
pub fn seeded_state() -> AppState {
    init_app_state(RegistrarConfig::default())
}

#[allow(dead_code)]
pub fn generate_unique_course_name() -> String {
    format!("Course {}", Uuid::new_v4())
}

#[allow(dead_code)]
pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}

#[allow(dead_code)]
pub fn create_test_course(state: &AppState) -> CourseId {
    state
        .courses
        .add_course(Some(CourseAddRequest::new(generate_unique_course_name())))
        .unwrap()
        .course_id
}

/// A request that passes every validation rule.
#[allow(dead_code)]
pub fn valid_student_request(course_id: CourseId) -> StudentAddRequest {
    let street: String = StreetName().fake();
    StudentAddRequest {
        student_name: Some(FirstName().fake()),
        student_email: Some(generate_unique_email()),
        course_id: Some(course_id),
        date_of_birth: NaiveDate::from_ymd_opt((1980..2005).fake::<i32>(), 3, 14),
        address: Some(format!("{} {}", (1..500).fake::<u32>(), street)),
        gender: Some(Gender::Other),
    }
}
