use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use registrar_core::{RegistryError, RegistryResult};
use registrar_models::StudentId;
use tracing::{info, instrument, warn};

use crate::modules::courses::CourseRegistry;
use crate::modules::students::model::{
    Student, StudentAddRequest, StudentField, StudentQuery, StudentResponse, StudentUpdateRequest,
};
use crate::modules::students::query;

/// Owns every student record.
///
/// Reads clone a snapshot under the read lock and resolve course names after
/// releasing it, so the student lock is never held while the course registry
/// is consulted.
#[derive(Debug)]
pub struct StudentRegistry {
    students: RwLock<Vec<Student>>,
    courses: Arc<CourseRegistry>,
}

impl StudentRegistry {
    pub fn new(courses: Arc<CourseRegistry>) -> Self {
        Self::with_students(courses, Vec::new())
    }

    /// Start from a fixed set of students, stored as-is without validation.
    pub fn with_students(courses: Arc<CourseRegistry>, students: Vec<Student>) -> Self {
        Self {
            students: RwLock::new(students),
            courses,
        }
    }

    pub fn courses(&self) -> &Arc<CourseRegistry> {
        &self.courses
    }

    #[instrument(skip(self, request))]
    pub fn add_student(
        &self,
        request: Option<StudentAddRequest>,
    ) -> RegistryResult<StudentResponse> {
        let request = request.ok_or(RegistryError::InvalidArgument("student_add_request"))?;
        let details = request.into_details().inspect_err(|err| {
            warn!(error = %err, "Rejected invalid student");
        })?;

        let student = Student::new(StudentId::new(), details);
        self.write().push(student.clone());

        info!(student_id = %student.student_id, "Student added");

        Ok(self.to_response(&student, Utc::now()))
    }

    /// Every student with course name and age resolved, in insertion order.
    #[instrument(skip(self))]
    pub fn get_all(&self) -> Vec<StudentResponse> {
        let snapshot = self.read().clone();
        let now = Utc::now();
        snapshot
            .iter()
            .map(|student| self.to_response(student, now))
            .collect()
    }

    /// Lookup by id. An absent or unknown id is not an error.
    #[instrument(skip(self))]
    pub fn get_by_id(&self, student_id: Option<StudentId>) -> Option<StudentResponse> {
        let student_id = student_id?;
        let student = self
            .read()
            .iter()
            .find(|student| student.student_id == student_id)
            .cloned()?;
        Some(self.to_response(&student, Utc::now()))
    }

    #[instrument(skip(self, request))]
    pub fn update_student(
        &self,
        request: Option<StudentUpdateRequest>,
    ) -> RegistryResult<StudentResponse> {
        let request = request.ok_or(RegistryError::InvalidArgument("student_update_request"))?;
        let (student_id, details) = request.into_parts().inspect_err(|err| {
            warn!(error = %err, "Rejected invalid student update");
        })?;

        let updated = {
            let mut students = self.write();
            let student = students
                .iter_mut()
                .find(|student| student.student_id == student_id)
                .ok_or_else(|| {
                    warn!(%student_id, "Update for unknown student");
                    RegistryError::not_found("Given student id doesn't exist")
                })?;
            student.replace_details(details);
            student.clone()
        };

        info!(%student_id, "Student updated");

        Ok(self.to_response(&updated, Utc::now()))
    }

    /// Remove a student. Returns `false` when nothing matched.
    #[instrument(skip(self))]
    pub fn delete_student(&self, student_id: Option<StudentId>) -> RegistryResult<bool> {
        let student_id = student_id.ok_or(RegistryError::InvalidArgument("student_id"))?;

        let mut students = self.write();
        let before = students.len();
        students.retain(|student| student.student_id != student_id);
        let deleted = students.len() != before;

        if deleted {
            info!(%student_id, "Student deleted");
        }

        Ok(deleted)
    }

    /// Snapshot of every student filtered by `field` and `text`.
    #[instrument(skip(self))]
    pub fn get_filtered(&self, field: Option<StudentField>, text: &str) -> Vec<StudentResponse> {
        query::filter(self.get_all(), field, text)
    }

    /// Snapshot of every student, filtered then sorted.
    #[instrument(skip(self))]
    pub fn query(&self, student_query: &StudentQuery) -> Vec<StudentResponse> {
        query::apply(self.get_all(), student_query)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn to_response(&self, student: &Student, now: DateTime<Utc>) -> StudentResponse {
        student.to_response(self.courses.course_name(student.course_id), now)
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Student>> {
        self.students.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Student>> {
        self.students.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::courses::CourseAddRequest;
    use crate::modules::students::model::Gender;
    use chrono::NaiveDate;
    use registrar_models::CourseId;

    fn registry() -> StudentRegistry {
        StudentRegistry::new(Arc::new(CourseRegistry::new()))
    }

    fn anna(course_id: Option<CourseId>) -> StudentAddRequest {
        StudentAddRequest {
            student_name: Some("Anna".to_string()),
            student_email: Some("Anna@example.com".to_string()),
            course_id: course_id.or_else(|| Some(CourseId::new())),
            date_of_birth: NaiveDate::from_ymd_opt(2000, 1, 1),
            address: Some("Address anna".to_string()),
            gender: Some(Gender::Female),
        }
    }

    #[test]
    fn test_add_student_none_request() {
        let err = registry().add_student(None).unwrap_err();
        assert_eq!(err, RegistryError::InvalidArgument("student_add_request"));
    }

    #[test]
    fn test_add_student_name_missing() {
        let registry = registry();
        let request = StudentAddRequest {
            student_name: None,
            ..anna(None)
        };
        let err = registry.add_student(Some(request)).unwrap_err();
        assert_eq!(err.violations().len(), 1);
        assert_eq!(err.violations()[0].field, "student_name");
        assert!(registry.is_empty());
    }

    #[test]
    fn test_add_student_proper_details() {
        let registry = registry();
        let response = registry.add_student(Some(anna(None))).unwrap();

        assert!(!response.student_id.is_nil());
        assert!(registry.get_all().contains(&response));
    }

    #[test]
    fn test_add_student_resolves_course_name() {
        let courses = Arc::new(CourseRegistry::new());
        let course = courses.add_course(Some(CourseAddRequest::new("C#"))).unwrap();
        let registry = StudentRegistry::new(courses);

        let response = registry
            .add_student(Some(anna(Some(course.course_id))))
            .unwrap();
        assert_eq!(response.course.as_deref(), Some("C#"));
    }

    #[test]
    fn test_dangling_course_reference_is_allowed() {
        let response = registry().add_student(Some(anna(None))).unwrap();
        assert!(response.course_id.is_some());
        assert_eq!(response.course, None);
    }

    #[test]
    fn test_get_by_id() {
        let registry = registry();
        let added = registry.add_student(Some(anna(None))).unwrap();

        assert_eq!(registry.get_by_id(Some(added.student_id)), Some(added));
        assert_eq!(registry.get_by_id(None), None);
        assert_eq!(registry.get_by_id(Some(StudentId::new())), None);
    }

    #[test]
    fn test_update_student_replaces_fields() {
        let registry = registry();
        let added = registry.add_student(Some(anna(None))).unwrap();

        let mut request = added.to_update_request();
        request.student_name = Some("Annabel".to_string());
        request.gender = Some(Gender::Other);

        let updated = registry.update_student(Some(request)).unwrap();

        assert_eq!(updated.student_id, added.student_id);
        assert_eq!(updated.student_name, "Annabel");
        assert_eq!(updated.gender, Gender::Other);
        assert_eq!(registry.get_by_id(Some(added.student_id)), Some(updated));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_update_student_unknown_id() {
        let registry = registry();
        let mut request = StudentUpdateRequest::empty(StudentId::new());
        request.student_name = Some("Ghost".to_string());
        request.student_email = Some("ghost@example.com".to_string());
        request.course_id = Some(CourseId::new());
        request.date_of_birth = NaiveDate::from_ymd_opt(1990, 1, 1);
        request.address = Some("Nowhere".to_string());
        request.gender = Some(Gender::Male);

        let err = registry.update_student(Some(request)).unwrap_err();
        assert!(matches!(err, RegistryError::NotFound(_)));
    }

    #[test]
    fn test_update_student_validation_precedes_lookup() {
        let err = registry()
            .update_student(Some(StudentUpdateRequest::empty(StudentId::new())))
            .unwrap_err();
        assert_eq!(err.kind(), "validation");
    }

    #[test]
    fn test_update_student_none_request() {
        let err = registry().update_student(None).unwrap_err();
        assert_eq!(err, RegistryError::InvalidArgument("student_update_request"));
    }

    #[test]
    fn test_delete_student() {
        let registry = registry();
        let added = registry.add_student(Some(anna(None))).unwrap();

        assert!(registry.delete_student(Some(added.student_id)).unwrap());
        assert!(!registry.delete_student(Some(added.student_id)).unwrap());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_delete_student_unknown_id_leaves_store() {
        let registry = registry();
        registry.add_student(Some(anna(None))).unwrap();

        assert!(!registry.delete_student(Some(StudentId::new())).unwrap());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_delete_student_none_id() {
        let err = registry().delete_student(None).unwrap_err();
        assert_eq!(err, RegistryError::InvalidArgument("student_id"));
    }
}
