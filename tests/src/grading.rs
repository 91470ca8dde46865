use registrar_common::RegistrarError;
use registrar_core::registry::Registry;
use registrar_core::seed;
use registrar_core::services::teacher;
use registrar_core::session;
use registrar_core::testing::ScriptedTerminal;

#[test]
fn student_sees_grade_after_teacher_assigns_it() -> anyhow::Result<()> {
    let mut registry: Registry = seed::bootstrap();
    let mut terminal = ScriptedTerminal::new(
        "s01 isha123 3 4 \
         t01 sandesh123 2 s01 CSC101 A 3 \
         s01 isha123 3 4 \
         exit",
    );

    session::run(&mut registry, &mut terminal)?;

    let transcript: String = terminal.transcript();
    let empty_at: usize = transcript.find("No grades assigned yet.").unwrap();
    let graded_at: usize = transcript.find("CSC101: A").unwrap();
    assert!(empty_at < graded_at);
    assert_eq!(terminal.remaining_input(), 0);
    Ok(())
}

#[test]
fn regrade_keeps_only_the_latest_value() {
    let mut registry: Registry = seed::bootstrap();
    let Registry { teachers, students, .. } = &mut registry;
    let zafar = teachers.get(1).unwrap();

    teacher::authorize(zafar, "CSC103").unwrap();
    teacher::record_grade(students, "s03", "CSC103", "C").unwrap();
    teacher::record_grade(students, "s03", "CSC103", "B").unwrap();

    let grades: Vec<(&str, &str)> = registry.students.get(2).unwrap().grades().collect();
    assert_eq!(grades, vec![("CSC103", "B")]);
}

#[test]
fn teacher_cannot_grade_a_course_they_do_not_hold() {
    let registry: Registry = seed::bootstrap();
    let zafar = registry.teachers.get(1).unwrap();

    // Isha is enrolled in CSC101, but only t01 teaches it.
    let res = teacher::authorize(zafar, "CSC101");

    assert_eq!(res, Err(RegistrarError::NotTeaching("CSC101".to_string())));
    assert!(!registry.students.get(0).unwrap().has_grades());
}

#[test]
fn newly_assigned_course_grants_grading_rights() -> anyhow::Result<()> {
    let mut registry: Registry = seed::bootstrap();
    let mut terminal = ScriptedTerminal::new(
        "t02 zafar123 2 s01 CSC101 3 \
         admin admin123 4 t02 CSC101 6 \
         t02 zafar123 2 s01 CSC101 B 3 \
         exit",
    );

    session::run(&mut registry, &mut terminal)?;

    assert_eq!(terminal.count("You do not teach course CSC101."), 1);
    assert!(terminal.printed("Assigned Object_Oriented_Programming to Sir. Zafarullah"));
    assert_eq!(registry.students.get(0).unwrap().grade("CSC101"), Some("B"));
    Ok(())
}
