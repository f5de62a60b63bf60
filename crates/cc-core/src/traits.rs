//! # Core Traits (Ports)
//!
//! Any plugin must implement these traits to be used by the binary.

use async_trait::async_trait;
use secrecy::SecretString;

use crate::error::Result;
use crate::models::{Role, SessionUser};

/// The key-value slot holding the signed-in user between runs.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait SessionSlot: Send + Sync {
    /// Reads the slot. `Ok(None)` when nothing is stored;
    /// `Err(AppError::StorageReadError)` when the content is unreadable.
    async fn load(&self) -> Result<Option<SessionUser>>;
    /// Overwrites the slot with the given user.
    async fn save(&self, user: &SessionUser) -> Result<()>;
    /// Empties the slot. Clearing an empty slot is not an error.
    async fn clear(&self) -> Result<()>;
}

/// Identity contract used by the session store.
///
/// Implementations receive already presence-checked input. The shipped
/// implementation (`cc-auth-stub`) performs NO credential verification; a
/// real backend can be dropped in behind this trait without touching callers.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Resolves sign-in credentials to a user identity.
    async fn authenticate(&self, email: &str, password: &SecretString, role: Role)
        -> Result<SessionUser>;

    /// Creates a new identity from sign-up data, keeping `name` verbatim.
    async fn register(
        &self,
        name: &str,
        email: &str,
        password: &SecretString,
        role: Role,
    ) -> Result<SessionUser>;
}
