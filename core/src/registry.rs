//! # Registry
//!
//! The application context: every record store the dashboards read and
//! mutate, passed around by reference instead of living in globals.

use registrar_common::models::course::CourseRef;
use registrar_common::models::user::{Account, Admin, Principal, Role, Student, Teacher};

use crate::store::Store;

#[derive(Debug, Default)]
pub struct Registry {
    pub admins: Store<Admin>,
    pub courses: Store<CourseRef>,
    pub teachers: Store<Teacher>,
    pub students: Store<Student>,
}

/// A signed-in user, tagged by kind and pointing at its record.
///
/// Stores never remove records, so the index stays valid for the life of the
/// registry it came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Identity {
    Admin(usize),
    Teacher(usize),
    Student(usize),
}

impl Identity {
    pub fn role(&self) -> Role {
        match self {
            Identity::Admin(_) => Role::Admin,
            Identity::Teacher(_) => Role::Teacher,
            Identity::Student(_) => Role::Student,
        }
    }
}

/// Borrowed view of any user record.
#[derive(Clone, Copy, Debug)]
pub enum UserRef<'a> {
    Admin(&'a Admin),
    Teacher(&'a Teacher),
    Student(&'a Student),
}

impl<'a> UserRef<'a> {
    pub fn account(&self) -> &'a Account {
        match *self {
            UserRef::Admin(a) => a.account(),
            UserRef::Teacher(t) => t.account(),
            UserRef::Student(s) => s.account(),
        }
    }

    pub fn role(&self) -> Role {
        match self {
            UserRef::Admin(_) => Admin::ROLE,
            UserRef::Teacher(_) => Teacher::ROLE,
            UserRef::Student(_) => Student::ROLE,
        }
    }
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user(&self, identity: Identity) -> Option<UserRef<'_>> {
        match identity {
            Identity::Admin(i) => self.admins.get(i).map(UserRef::Admin),
            Identity::Teacher(i) => self.teachers.get(i).map(UserRef::Teacher),
            Identity::Student(i) => self.students.get(i).map(UserRef::Student),
        }
    }
}
