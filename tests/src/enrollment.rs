use registrar_common::models::course::same_course;
use registrar_common::RegistrarError;
use registrar_core::registry::Registry;
use registrar_core::seed;
use registrar_core::services::{admin, student, teacher};

#[test]
fn enrolling_twice_is_idempotent() {
    let mut registry: Registry = seed::bootstrap();
    let Registry { courses, students, .. } = &mut registry;
    let talha = students.get_mut(2).unwrap();

    student::register(courses, talha, "CSC105").unwrap();
    let again = student::register(courses, talha, "CSC105");

    assert_eq!(again, Err(RegistrarError::AlreadyEnrolled("CSC105".to_string())));
    assert_eq!(talha.courses().len(), 2);
}

#[test]
fn new_enrollment_shows_up_in_the_teachers_roster() {
    let mut registry: Registry = seed::bootstrap();
    {
        let Registry { courses, students, .. } = &mut registry;
        student::register(courses, students.get_mut(2).unwrap(), "CSC104").unwrap();
    }

    let sandesh = registry.teachers.get(0).unwrap();
    let entries = teacher::roster(sandesh, &registry.students);

    let lab = entries.iter().find(|e| e.course.id() == "CSC104").unwrap();
    assert_eq!(lab.students.len(), 1);
}

#[test]
fn duplicate_course_id_assignment_attaches_the_later_course() {
    let mut registry: Registry = seed::bootstrap();
    let later =
        admin::add_course(&mut registry.courses, "CSC102", "Data_Structures_II", "4").unwrap();

    let Registry { teachers, courses, .. } = &mut registry;
    admin::assign_course(teachers, courses, "t02", "CSC102").unwrap();

    let zafar = registry.teachers.get(1).unwrap();
    assert!(same_course(zafar.courses().last().unwrap(), &later));
    assert!(!same_course(zafar.courses().last().unwrap(), registry.courses.get(1).unwrap()));

    // Registration still resolves the id to the earlier course.
    let Registry { courses, students, .. } = &mut registry;
    let owais = students.get_mut(1).unwrap();
    let taken = student::register(courses, owais, "CSC102").unwrap();
    assert_eq!(taken.name(), "Data_Structures");
}

#[test]
fn rejected_password_keeps_counts() {
    let mut registry: Registry = seed::bootstrap();

    for password in ["", "nil"] {
        assert!(admin::add_student(&mut registry.students, "s10", "X", password).is_err());
        assert!(admin::add_teacher(&mut registry.teachers, "t10", "Y", password).is_err());
    }

    assert_eq!(registry.students.len(), 3);
    assert_eq!(registry.teachers.len(), 2);
}
