//! # Dashboard Services
//!
//! The operations behind every menu entry. They take the stores they need by
//! reference, never touch the terminal and report failures as
//! [`RegistrarError`](registrar_common::RegistrarError) values.

pub mod admin;
pub mod student;
pub mod teacher;
