use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use registrar_core::{RegistryError, RegistryResult};
use tracing::{info, instrument, warn};

use crate::modules::courses::model::{Course, CourseAddRequest, CourseResponse};
use registrar_models::CourseId;

/// Owns every course record.
///
/// Courses are append-only: there is no update or delete. The duplicate-name
/// check and the insert run under one write lock.
#[derive(Debug, Default)]
pub struct CourseRegistry {
    courses: RwLock<Vec<Course>>,
}

impl CourseRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a fixed set of courses, stored as-is.
    pub fn with_courses(courses: Vec<Course>) -> Self {
        Self {
            courses: RwLock::new(courses),
        }
    }

    #[instrument(skip(self, request))]
    pub fn add_course(&self, request: Option<CourseAddRequest>) -> RegistryResult<CourseResponse> {
        let request = request.ok_or(RegistryError::InvalidArgument("course_add_request"))?;
        let course_name = request.into_course_name().inspect_err(|err| {
            warn!(error = %err, "Rejected invalid course");
        })?;

        let mut courses = self.write();

        if courses.iter().any(|course| course.course_name == course_name) {
            warn!(course_name = %course_name, "Rejected duplicate course name");
            return Err(RegistryError::conflict(format!(
                "Course name {} already exists",
                course_name
            )));
        }

        let course = Course {
            course_id: CourseId::new(),
            course_name,
        };
        courses.push(course.clone());

        info!(course_id = %course.course_id, course_name = %course.course_name, "Course added");

        Ok(CourseResponse::from(&course))
    }

    /// Every course, in insertion order.
    #[instrument(skip(self))]
    pub fn get_all(&self) -> Vec<CourseResponse> {
        self.read().iter().map(CourseResponse::from).collect()
    }

    /// Lookup by id. An absent or unknown id is not an error.
    #[instrument(skip(self))]
    pub fn get_by_id(&self, course_id: Option<CourseId>) -> Option<CourseResponse> {
        let course_id = course_id?;
        self.read()
            .iter()
            .find(|course| course.course_id == course_id)
            .map(CourseResponse::from)
    }

    /// Resolved display name for a student's weak course reference.
    pub fn course_name(&self, course_id: Option<CourseId>) -> Option<String> {
        self.get_by_id(course_id).map(|course| course.course_name)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // Every mutation completes before it can panic, so a poisoned lock still
    // guards a consistent list.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Course>> {
        self.courses.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Course>> {
        self.courses.write().unwrap_or_else(PoisonError::into_inner)
    }
}
