//! Records every run starts with: one admin, five courses, two teachers and
//! three students, with some courses already assigned and taken.

use registrar_common::models::course::{Course, CourseRef};
use registrar_common::models::user::{Account, Admin, Student, Teacher};
use tracing::debug;

use crate::registry::Registry;

pub fn bootstrap() -> Registry {
    let mut registry: Registry = Registry::new();

    registry.admins.add(Admin::new(Account::new("admin", "SuperAdmin", "admin123")));

    let oop: CourseRef = Course::shared("CSC101", "Object_Oriented_Programming", 3);
    let data_structures: CourseRef = Course::shared("CSC102", "Data_Structures", 3);
    let calculus: CourseRef = Course::shared("CSC103", "Multicariable_Calculus", 3);
    let oop_lab: CourseRef = Course::shared("CSC104", "OOP_Lab", 1);
    let linear_algebra: CourseRef = Course::shared("CSC105", "Linear_Algebra", 3);

    for course in [&oop, &data_structures, &calculus, &oop_lab, &linear_algebra] {
        registry.courses.add(course.clone());
    }

    let mut sandesh: Teacher =
        Teacher::new(Account::new("t01", "Sir. Sandesh Kumar", "sandesh123"));
    sandesh.assign(oop.clone());
    sandesh.assign(oop_lab);
    let mut zafar: Teacher = Teacher::new(Account::new("t02", "Sir. Zafarullah", "zafar123"));
    zafar.assign(calculus.clone());

    registry.teachers.add(sandesh);
    registry.teachers.add(zafar);

    let enrolled = |account: Account, course: &CourseRef| {
        let mut student: Student = Student::new(account);
        // Fresh records cannot already hold the course.
        let _ = student.enroll(course.clone());
        student
    };

    registry.students.add(enrolled(Account::new("s01", "Isha", "isha123"), &oop));
    registry.students.add(enrolled(Account::new("s02", "Owais", "owais123"), &oop));
    registry.students.add(enrolled(Account::new("s03", "Talha", "talha123"), &calculus));

    debug!(
        "seeded {} courses, {} teachers, {} students",
        registry.courses.len(),
        registry.teachers.len(),
        registry.students.len()
    );
    registry
}
