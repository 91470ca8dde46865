//! # Sign-in
//!
//! Credentials are checked against the admins first, then the teachers, then
//! the students, and the first record whose id and password both match wins.
//! Ids may collide across kinds of users, so this order decides which
//! dashboard a colliding id ends up in.

use registrar_common::RegistrarError;
use registrar_common::models::user::Principal;
use tracing::{debug, warn};

use crate::registry::{Identity, Registry};
use crate::store::Store;

pub fn login(registry: &Registry, id: &str, password: &str) -> Result<Identity, RegistrarError> {
    let identity: Option<Identity> = find(&registry.admins, id, password)
        .map(Identity::Admin)
        .or_else(|| find(&registry.teachers, id, password).map(Identity::Teacher))
        .or_else(|| find(&registry.students, id, password).map(Identity::Student));

    match identity {
        Some(identity) => {
            debug!("{id} signed in as {}", identity.role());
            Ok(identity)
        }
        None => {
            warn!("rejected sign-in for {id}");
            Err(RegistrarError::InvalidCredentials)
        }
    }
}

fn find<P: Principal>(store: &Store<P>, id: &str, password: &str) -> Option<usize> {
    store.position_first(|p| p.account().matches(id, password))
}
