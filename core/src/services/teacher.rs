use registrar_common::RegistrarError;
use registrar_common::models::course::CourseRef;
use registrar_common::models::user::{Principal, Student, Teacher};
use tracing::{info, warn};

use crate::store::Store;

/// One taught course and the students holding that exact course.
#[derive(Debug)]
pub struct RosterEntry<'a> {
    pub course: &'a CourseRef,
    pub students: Vec<&'a Student>,
}

/// Class lists for every course the teacher holds, in assignment order.
pub fn roster<'a>(teacher: &'a Teacher, students: &'a Store<Student>) -> Vec<RosterEntry<'a>> {
    teacher
        .courses()
        .iter()
        .map(|course| RosterEntry {
            course,
            students: students.iter().filter(|s| s.is_enrolled(course)).collect(),
        })
        .collect()
}

/// Grading rights are granted by course id alone. Whether the student is
/// actually enrolled is not checked.
pub fn authorize(teacher: &Teacher, course_id: &str) -> Result<(), RegistrarError> {
    if teacher.teaches(course_id) {
        Ok(())
    } else {
        warn!("{} tried to grade {course_id} without teaching it", teacher.id());
        Err(RegistrarError::NotTeaching(course_id.to_string()))
    }
}

/// Writes the grade onto the first student with `student_id`.
pub fn record_grade(
    students: &mut Store<Student>,
    student_id: &str,
    course_id: &str,
    grade: &str,
) -> Result<(), RegistrarError> {
    let idx: usize = students
        .position_first(|s| s.id() == student_id)
        .ok_or_else(|| RegistrarError::StudentNotFound(student_id.to_string()))?;

    let student: &mut Student = students
        .get_mut(idx)
        .ok_or_else(|| RegistrarError::StudentNotFound(student_id.to_string()))?;

    student.set_grade(course_id, grade);
    info!("{student_id} graded {grade} in {course_id}");
    Ok(())
}
