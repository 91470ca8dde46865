//! # Registrar Common
//!
//! Shared vocabulary of the registrar workspace.
//!
//! * **[`models`]**: Courses and the three kinds of user accounts.
//! * **[`error`]**: Recoverable domain failures reported back to the user.
//! * **[`config`]**: Runtime presentation settings collected from the command line.

pub mod config;
pub mod error;
pub mod models;

pub use error::RegistrarError;
