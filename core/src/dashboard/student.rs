use anyhow::Context;
use registrar_common::models::course::CourseRef;
use registrar_common::models::user::{Principal, Student};

use super::{Exit, MenuAction, choose};
use crate::registry::Registry;
use crate::services;
use crate::store::Store;
use crate::terminal::Terminal;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StudentAction {
    ViewCourses,
    Register,
    ViewGrades,
    Logout,
}

impl MenuAction for StudentAction {
    const ALL: &'static [Self] = &[
        StudentAction::ViewCourses,
        StudentAction::Register,
        StudentAction::ViewGrades,
        StudentAction::Logout,
    ];

    fn label(self) -> &'static str {
        match self {
            StudentAction::ViewCourses => "View Available Courses",
            StudentAction::Register => "Register for Course",
            StudentAction::ViewGrades => "View My Grades",
            StudentAction::Logout => "Logout",
        }
    }
}

pub fn run(
    registry: &mut Registry,
    idx: usize,
    terminal: &mut dyn Terminal,
) -> anyhow::Result<Exit> {
    let title: String = format!("STUDENT DASHBOARD ({})", student(&registry.students, idx)?.name());

    loop {
        let Some(action) = choose::<StudentAction>(terminal, &title)? else {
            return Ok(Exit::EndOfInput);
        };

        match action {
            StudentAction::ViewCourses => view_courses(&registry.courses, terminal),
            StudentAction::Register => {
                let course_id: String = prompt!(terminal, "Enter Course ID to Register");
                let Registry { courses, students, .. } = &mut *registry;
                let record: &mut Student = students
                    .get_mut(idx)
                    .with_context(|| format!("no student record at position {idx}"))?;

                match services::student::register(courses, record, &course_id) {
                    Ok(course) => {
                        terminal.display_success(&format!("Enrolled in {}", course.name()))
                    }
                    Err(e) => terminal.display_error(&e),
                }
            }
            StudentAction::ViewGrades => view_grades(student(&registry.students, idx)?, terminal),
            StudentAction::Logout => return Ok(Exit::Logout),
        }
    }
}

fn student(students: &Store<Student>, idx: usize) -> anyhow::Result<&Student> {
    students
        .get(idx)
        .with_context(|| format!("no student record at position {idx}"))
}

fn view_courses(courses: &Store<CourseRef>, terminal: &mut dyn Terminal) {
    terminal.print_line("Available Courses:");
    for course in courses {
        terminal.print_entry(&course.to_string());
    }
}

fn view_grades(student: &Student, terminal: &mut dyn Terminal) {
    terminal.print_line("My Grades:");
    if !student.has_grades() {
        terminal.display_notice("No grades assigned yet.");
        return;
    }
    for (course_id, grade) in student.grades() {
        terminal.print_entry(&format!("{course_id}: {grade}"));
    }
}
