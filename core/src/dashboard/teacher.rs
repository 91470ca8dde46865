use anyhow::Context;
use registrar_common::models::user::{Principal, Teacher};

use super::{Exit, MenuAction, choose};
use crate::registry::Registry;
use crate::services::teacher::{self as service, RosterEntry};
use crate::store::Store;
use crate::terminal::Terminal;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TeacherAction {
    ViewStudents,
    AssignGrade,
    Logout,
}

impl MenuAction for TeacherAction {
    const ALL: &'static [Self] = &[
        TeacherAction::ViewStudents,
        TeacherAction::AssignGrade,
        TeacherAction::Logout,
    ];

    fn label(self) -> &'static str {
        match self {
            TeacherAction::ViewStudents => "View My Students",
            TeacherAction::AssignGrade => "Assign Grade",
            TeacherAction::Logout => "Logout",
        }
    }
}

pub fn run(
    registry: &mut Registry,
    idx: usize,
    terminal: &mut dyn Terminal,
) -> anyhow::Result<Exit> {
    let title: String = format!("TEACHER DASHBOARD ({})", teacher(&registry.teachers, idx)?.name());

    loop {
        let Some(action) = choose::<TeacherAction>(terminal, &title)? else {
            return Ok(Exit::EndOfInput);
        };

        match action {
            TeacherAction::ViewStudents => {
                let entries: Vec<RosterEntry<'_>> =
                    service::roster(teacher(&registry.teachers, idx)?, &registry.students);
                view_students(&entries, terminal);
            }
            TeacherAction::AssignGrade => {
                let student_id: String = prompt!(terminal, "Enter Student ID");
                let course_id: String = prompt!(terminal, "Enter Course ID");

                let Registry { teachers, students, .. } = &mut *registry;
                let me: &Teacher = teacher(teachers, idx)?;

                // The grade is only asked for once the course checks out.
                if let Err(e) = service::authorize(me, &course_id) {
                    terminal.display_error(&e);
                    continue;
                }
                let grade: String = prompt!(terminal, "Enter Grade (A/B/C/F)");

                match service::record_grade(students, &student_id, &course_id, &grade) {
                    Ok(()) => terminal.display_success("Grade assigned successfully."),
                    Err(e) => terminal.display_error(&e),
                }
            }
            TeacherAction::Logout => return Ok(Exit::Logout),
        }
    }
}

fn teacher(teachers: &Store<Teacher>, idx: usize) -> anyhow::Result<&Teacher> {
    teachers
        .get(idx)
        .with_context(|| format!("no teacher record at position {idx}"))
}

fn view_students(entries: &[RosterEntry<'_>], terminal: &mut dyn Terminal) {
    if entries.is_empty() {
        terminal.display_notice("You are not assigned to any courses.");
        return;
    }

    for entry in entries {
        terminal.print_line(&format!("Class: {} ({})", entry.course.name(), entry.course.id()));
        terminal.print_line("Students Enrolled:");
        if entry.students.is_empty() {
            terminal.display_notice("(No students enrolled yet)");
        }
        for student in &entry.students {
            terminal.print_entry(&format!("{} (ID: {})", student.name(), student.id()));
        }
    }
}
