use registrar_common::models::user::Principal;

use super::{Exit, MenuAction, choose};
use crate::registry::Registry;
use crate::services::admin::{self as service, Assignment};
use crate::terminal::Terminal;

const TITLE: &str = "ADMIN DASHBOARD";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdminAction {
    AddCourse,
    AddStudent,
    AddTeacher,
    AssignCourse,
    ViewAll,
    Logout,
}

impl MenuAction for AdminAction {
    const ALL: &'static [Self] = &[
        AdminAction::AddCourse,
        AdminAction::AddStudent,
        AdminAction::AddTeacher,
        AdminAction::AssignCourse,
        AdminAction::ViewAll,
        AdminAction::Logout,
    ];

    fn label(self) -> &'static str {
        match self {
            AdminAction::AddCourse => "Add New Course",
            AdminAction::AddStudent => "Add New Student",
            AdminAction::AddTeacher => "Add New Teacher",
            AdminAction::AssignCourse => "Assign Course to Teacher",
            AdminAction::ViewAll => "View All Users",
            AdminAction::Logout => "Logout",
        }
    }
}

pub fn run(registry: &mut Registry, terminal: &mut dyn Terminal) -> anyhow::Result<Exit> {
    loop {
        let Some(action) = choose::<AdminAction>(terminal, TITLE)? else {
            return Ok(Exit::EndOfInput);
        };

        match action {
            AdminAction::AddCourse => {
                let id: String = prompt!(terminal, "Course ID");
                let name: String = prompt!(terminal, "Course Name");
                let credits: String = prompt!(terminal, "Credits");

                match service::add_course(&mut registry.courses, &id, &name, &credits) {
                    Ok(course) => terminal.display_success(&format!("Course Added: {course}")),
                    Err(e) => terminal.display_error(&e),
                }
            }
            AdminAction::AddStudent => {
                let id: String = prompt!(terminal, "Student ID");
                let name: String = prompt!(terminal, "Name");
                let password: String = prompt!(terminal, "Password");

                match service::add_student(&mut registry.students, &id, &name, &password) {
                    Ok(()) => terminal.display_success("Student Added Successfully."),
                    Err(e) => terminal.display_error(&e),
                }
            }
            AdminAction::AddTeacher => {
                let id: String = prompt!(terminal, "Teacher ID");
                let name: String = prompt!(terminal, "Name");
                let password: String = prompt!(terminal, "Password");

                match service::add_teacher(&mut registry.teachers, &id, &name, &password) {
                    Ok(()) => terminal.display_success("Teacher Added Successfully."),
                    Err(e) => terminal.display_error(&e),
                }
            }
            AdminAction::AssignCourse => {
                let teacher_id: String = prompt!(terminal, "Enter Teacher ID");
                let course_id: String = prompt!(terminal, "Enter Course ID");

                let Registry { teachers, courses, .. } = &mut *registry;
                match service::assign_course(teachers, courses, &teacher_id, &course_id) {
                    Ok(Assignment { teacher_name, course }) => terminal
                        .display_success(&format!("Assigned {} to {teacher_name}", course.name())),
                    Err(e) => terminal.display_error(&e),
                }
            }
            AdminAction::ViewAll => view_all(registry, terminal),
            AdminAction::Logout => return Ok(Exit::Logout),
        }
    }
}

fn view_all(registry: &Registry, terminal: &mut dyn Terminal) {
    terminal.print_line("All Students:");
    for student in &registry.students {
        terminal.print_entry(&format!("{}: {}", student.id(), student.name()));
    }

    terminal.print_line("All Teachers:");
    for teacher in &registry.teachers {
        terminal.print_entry(&format!("{}: {}", teacher.id(), teacher.name()));
    }
}
