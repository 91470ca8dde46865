//! # User Accounts
//!
//! Three kinds of users can sign in: [`Admin`], [`Teacher`] and [`Student`].
//! Each one wraps the same [`Account`] (login id, display name, password) and
//! adds whatever state its role needs.
//!
//! Login ids are not required to be unique, neither within one kind of user
//! nor across kinds. See `registrar_core::auth` for how collisions resolve.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::RegistrarError;
use crate::models::course::{CourseRef, same_course};

/// Password literal that is never accepted for a new account.
pub const NIL_PASSWORD: &str = "nil";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Admin,
    Teacher,
    Student,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token: &str = match self {
            Role::Admin => "Admin",
            Role::Teacher => "Teacher",
            Role::Student => "Student",
        };

        write!(f, "{token}")
    }
}

/// Identity and credential shared by every kind of user.
#[derive(Clone, Debug)]
pub struct Account {
    id: String,
    name: String,
    password: String,
}

impl Account {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            password: password.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Exact, case-sensitive comparison of both id and password.
    pub fn matches(&self, id: &str, password: &str) -> bool {
        self.id == id && self.password == password
    }
}

/// Rejects passwords that are empty or the `"nil"` sentinel.
pub fn validate_password(password: &str, role: Role) -> Result<(), RegistrarError> {
    if password.is_empty() || password == NIL_PASSWORD {
        return Err(RegistrarError::InvalidPassword { role });
    }
    Ok(())
}

/// Anything that can sign in.
pub trait Principal {
    const ROLE: Role;

    fn account(&self) -> &Account;

    fn id(&self) -> &str {
        self.account().id()
    }

    fn name(&self) -> &str {
        self.account().name()
    }
}

#[derive(Clone, Debug)]
pub struct Admin {
    account: Account,
}

impl Admin {
    pub fn new(account: Account) -> Self {
        Self { account }
    }
}

impl Principal for Admin {
    const ROLE: Role = Role::Admin;

    fn account(&self) -> &Account {
        &self.account
    }
}

#[derive(Clone, Debug)]
pub struct Teacher {
    account: Account,
    courses: Vec<CourseRef>,
}

impl Teacher {
    pub fn new(account: Account) -> Self {
        Self {
            account,
            courses: Vec::new(),
        }
    }

    /// Appends a course to the taught list. The same course may be added twice.
    pub fn assign(&mut self, course: CourseRef) {
        self.courses.push(course);
    }

    pub fn courses(&self) -> &[CourseRef] {
        &self.courses
    }

    /// Whether any taught course carries this id.
    pub fn teaches(&self, course_id: &str) -> bool {
        self.courses.iter().any(|c| c.id() == course_id)
    }
}

impl Principal for Teacher {
    const ROLE: Role = Role::Teacher;

    fn account(&self) -> &Account {
        &self.account
    }
}

#[derive(Clone, Debug)]
pub struct Student {
    account: Account,
    courses: Vec<CourseRef>,
    grades: BTreeMap<String, String>,
}

impl Student {
    pub fn new(account: Account) -> Self {
        Self {
            account,
            courses: Vec::new(),
            grades: BTreeMap::new(),
        }
    }

    /// Adds the course to the enrollment list unless this exact course is already there.
    pub fn enroll(&mut self, course: CourseRef) -> Result<(), RegistrarError> {
        if self.is_enrolled(&course) {
            return Err(RegistrarError::AlreadyEnrolled(course.id().to_string()));
        }
        self.courses.push(course);
        Ok(())
    }

    pub fn is_enrolled(&self, course: &CourseRef) -> bool {
        self.courses.iter().any(|c| same_course(c, course))
    }

    pub fn courses(&self) -> &[CourseRef] {
        &self.courses
    }

    /// Stores the grade for a course id, replacing any previous one.
    pub fn set_grade(&mut self, course_id: impl Into<String>, grade: impl Into<String>) {
        self.grades.insert(course_id.into(), grade.into());
    }

    pub fn grade(&self, course_id: &str) -> Option<&str> {
        self.grades.get(course_id).map(String::as_str)
    }

    /// Grades ordered by course id.
    pub fn grades(&self) -> impl Iterator<Item = (&str, &str)> {
        self.grades.iter().map(|(c, g)| (c.as_str(), g.as_str()))
    }

    pub fn has_grades(&self) -> bool {
        !self.grades.is_empty()
    }
}

impl Principal for Student {
    const ROLE: Role = Role::Student;

    fn account(&self) -> &Account {
        &self.account
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
