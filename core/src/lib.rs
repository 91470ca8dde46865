//! # Registrar Core
//!
//! In-memory course registration: record stores, sign-in and the role
//! dashboards that mutate them.
//!
//! ## Layout
//! * **[`store`]** / **[`registry`]**: Append-only record stores and the context value
//!   holding them.
//! * **[`auth`]**: Resolves an id/password pair to a signed-in [`registry::Identity`].
//! * **[`services`]**: The operations behind each menu entry, free of any I/O.
//! * **[`terminal`]**: The port through which dashboards read input and report results.
//! * **[`dashboard`]** / **[`session`]**: Role menus and the top-level sign-in loop.
//! * **[`seed`]**: The records every run starts with.

pub mod auth;
pub mod dashboard;
pub mod registry;
pub mod seed;
pub mod services;
pub mod session;
pub mod store;
pub mod terminal;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
