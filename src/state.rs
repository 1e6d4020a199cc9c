use std::sync::Arc;

use registrar_config::RegistrarConfig;
use tracing::info;

use crate::modules::courses::CourseRegistry;
use crate::modules::students::StudentRegistry;
use crate::seed;

/// Process-wide registries, shared by every caller.
#[derive(Clone, Debug)]
pub struct AppState {
    pub courses: Arc<CourseRegistry>,
    pub students: Arc<StudentRegistry>,
    pub config: RegistrarConfig,
}

pub fn init_app_state(config: RegistrarConfig) -> AppState {
    let courses = if config.seed_demo_data {
        Arc::new(CourseRegistry::with_courses(seed::demo_courses()))
    } else {
        Arc::new(CourseRegistry::new())
    };

    let students = if config.seed_demo_data {
        StudentRegistry::with_students(Arc::clone(&courses), seed::demo_students())
    } else {
        StudentRegistry::new(Arc::clone(&courses))
    };

    info!(
        courses = courses.len(),
        students = students.len(),
        seeded = config.seed_demo_data,
        "Registries initialized"
    );

    AppState {
        courses,
        students: Arc::new(students),
        config,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_state() {
        let state = init_app_state(RegistrarConfig::default());
        assert_eq!(state.courses.len(), 3);
        assert_eq!(state.students.len(), 5);
        assert!(Arc::ptr_eq(&state.courses, state.students.courses()));
    }

    #[test]
    fn test_empty_state() {
        let state = init_app_state(RegistrarConfig {
            seed_demo_data: false,
            ..RegistrarConfig::default()
        });
        assert!(state.courses.is_empty());
        assert!(state.students.is_empty());
    }

    #[test]
    fn test_seeded_students_resolve_courses() {
        let state = init_app_state(RegistrarConfig::default());
        assert!(state.students.get_all().iter().all(|s| s.course.is_some()));
    }
}
