//! Author-only mutation rule shared by every forum resource.

use crate::domain::{shared::errors::DomainError, user::entity::User};

/// A resource that records the user who created it.
pub trait Authored {
    /// Human-readable resource name used in error messages.
    const KIND: &'static str;

    fn author(&self) -> &User;
}

pub fn is_author<R: Authored>(caller: &User, resource: &R) -> bool {
    resource.author().pk == caller.pk
}

/// Allow the operation only when `caller` created `resource`.
pub fn ensure_author<R: Authored>(caller: &User, resource: &R) -> Result<(), DomainError> {
    if is_author(caller, resource) {
        Ok(())
    } else {
        Err(DomainError::Forbidden(format!(
            "Only the author may modify this {}",
            R::KIND
        )))
    }
}
