//! # Course Model
//!
//! A course is created once and never changes afterwards, so every list that
//! refers to it (the course store, enrollments, teaching assignments) shares
//! the same [`CourseRef`] handle.
//!
//! Identifiers are *not* unique. Two courses registered under the same id are
//! two different courses, and membership checks compare handles, not ids.

use std::fmt;
use std::rc::Rc;

use crate::error::RegistrarError;

/// Shared handle to an immutable course.
pub type CourseRef = Rc<Course>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Course {
    id: String,
    name: String,
    credits: u32,
}

impl Course {
    pub fn new(id: impl Into<String>, name: impl Into<String>, credits: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            credits,
        }
    }

    /// Convenience constructor returning a ready-to-share handle.
    pub fn shared(id: impl Into<String>, name: impl Into<String>, credits: u32) -> CourseRef {
        Rc::new(Self::new(id, name, credits))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn credits(&self) -> u32 {
        self.credits
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({} Credits)", self.id, self.name, self.credits)
    }
}

/// Parses a credit count typed at the console.
///
/// Only positive whole numbers are accepted.
pub fn parse_credits(s: &str) -> Result<u32, RegistrarError> {
    match s.trim().parse::<u32>() {
        Ok(0) | Err(_) => Err(RegistrarError::InvalidCredits(s.to_string())),
        Ok(n) => Ok(n),
    }
}

/// Identity comparison between two course handles.
pub fn same_course(a: &CourseRef, b: &CourseRef) -> bool {
    Rc::ptr_eq(a, b)
}
