use thiserror::Error;

use crate::models::user::Role;

/// Every failure a dashboard can run into.
///
/// None of these end the session: the message is shown and the menu comes
/// back. The `Display` text is what the user reads.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RegistrarError {
    #[error("Invalid Credentials.")]
    InvalidCredentials,

    #[error("Invalid choice '{0}', pick one of the listed numbers.")]
    InvalidChoice(String),

    #[error("Course {0} not found.")]
    CourseNotFound(String),

    #[error("Already enrolled in {0}.")]
    AlreadyEnrolled(String),

    #[error("You do not teach course {0}.")]
    NotTeaching(String),

    #[error("Student {0} not found.")]
    StudentNotFound(String),

    #[error("Teacher '{teacher}' or course '{course}' not found.")]
    TeacherOrCourseNotFound { teacher: String, course: String },

    #[error("Password cannot be 'nil' or empty. {role} NOT created.")]
    InvalidPassword { role: Role },

    #[error("Invalid credit count '{0}', expected a positive whole number.")]
    InvalidCredits(String),
}
