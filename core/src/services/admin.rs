//! Admin operations: adding records and handing courses to teachers.
//!
//! Course lookups elsewhere take the *first* course with a given id. Assigning
//! a course to a teacher takes the *last* teacher and the *last* course with
//! the requested ids instead, so a course re-registered under an existing id
//! is the one a teacher receives.

use registrar_common::RegistrarError;
use registrar_common::models::course::{Course, CourseRef, parse_credits};
use registrar_common::models::user::{Account, Principal, Student, Teacher, validate_password};
use tracing::{info, warn};

use crate::store::Store;

/// Adds a course. Duplicate ids are accepted.
pub fn add_course(
    courses: &mut Store<CourseRef>,
    id: &str,
    name: &str,
    credits: &str,
) -> Result<CourseRef, RegistrarError> {
    let credits: u32 = parse_credits(credits)?;
    let course: CourseRef = Course::shared(id, name, credits);

    if courses.find_first(|c| c.id() == id).is_some() {
        warn!("course id {id} registered more than once");
    }

    courses.add(course.clone());
    info!("added course {course}");
    Ok(course)
}

pub fn add_student(
    students: &mut Store<Student>,
    id: &str,
    name: &str,
    password: &str,
) -> Result<(), RegistrarError> {
    validate_password(password, Student::ROLE)?;
    students.add(Student::new(Account::new(id, name, password)));
    info!("added student {id}");
    Ok(())
}

pub fn add_teacher(
    teachers: &mut Store<Teacher>,
    id: &str,
    name: &str,
    password: &str,
) -> Result<(), RegistrarError> {
    validate_password(password, Teacher::ROLE)?;
    teachers.add(Teacher::new(Account::new(id, name, password)));
    info!("added teacher {id}");
    Ok(())
}

/// Result of a successful [`assign_course`].
#[derive(Debug)]
pub struct Assignment {
    pub teacher_name: String,
    pub course: CourseRef,
}

/// Appends the last course with `course_id` to the last teacher with
/// `teacher_id`. Repeating an assignment adds the course again.
pub fn assign_course(
    teachers: &mut Store<Teacher>,
    courses: &Store<CourseRef>,
    teacher_id: &str,
    course_id: &str,
) -> Result<Assignment, RegistrarError> {
    let not_found = || RegistrarError::TeacherOrCourseNotFound {
        teacher: teacher_id.to_string(),
        course: course_id.to_string(),
    };

    let course: CourseRef = courses
        .find_last(|c| c.id() == course_id)
        .cloned()
        .ok_or_else(not_found)?;
    let teacher: &mut Teacher = teachers
        .position_last(|t| t.id() == teacher_id)
        .and_then(|idx| teachers.get_mut(idx))
        .ok_or_else(not_found)?;

    teacher.assign(course.clone());
    info!("assigned {} to {teacher_id}", course.id());

    Ok(Assignment {
        teacher_name: teacher.name().to_string(),
        course,
    })
}
