//! End-to-end scenarios over the seeded registry.

#[cfg(test)]
mod enrollment;
#[cfg(test)]
mod grading;
#[cfg(test)]
mod sign_in;
