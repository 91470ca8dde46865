use registrar_common::RegistrarError;
use registrar_common::models::course::CourseRef;
use registrar_common::models::user::{Principal, Student};
use tracing::{info, warn};

use crate::store::Store;

/// Enrolls `student` in the first course whose id is `course_id`.
///
/// Nothing changes when the course is unknown or the student already holds
/// that exact course.
pub fn register(
    courses: &Store<CourseRef>,
    student: &mut Student,
    course_id: &str,
) -> Result<CourseRef, RegistrarError> {
    let Some(course) = courses.find_first(|c| c.id() == course_id).cloned() else {
        warn!("{} asked for unknown course {course_id}", student.id());
        return Err(RegistrarError::CourseNotFound(course_id.to_string()));
    };

    student.enroll(course.clone())?;
    info!("{} enrolled in {}", student.id(), course.id());
    Ok(course)
}
