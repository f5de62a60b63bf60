//! # cc-auth-stub
//!
//! Mock implementation of `IdentityProvider`.
//! It fabricates identities and performs NO credential verification: any
//! non-empty password is accepted. Swap in a real provider behind the same
//! trait before exposing this to anyone.

use async_trait::async_trait;
use cc_core::error::Result;
use cc_core::models::{Role, SessionUser};
use cc_core::session::display_name_from_email;
use cc_core::traits::IdentityProvider;
use secrecy::SecretString;
use tracing::debug;
use uuid::Uuid;

/// Length of the fabricated session identifier.
const ID_LEN: usize = 9;

#[derive(Debug, Default, Clone)]
pub struct StubIdentityProvider;

impl StubIdentityProvider {
    pub fn new() -> Self {
        Self
    }

    /// A random opaque token (e.g., "3f9a0c1be").
    fn fabricate_id() -> String {
        let mut id = Uuid::new_v4().simple().to_string();
        id.truncate(ID_LEN);
        id
    }
}

#[async_trait]
impl IdentityProvider for StubIdentityProvider {
    /// Accepts the credentials as given and derives a display name from the
    /// email's local part.
    async fn authenticate(&self, email: &str, _password: &SecretString, role: Role) -> Result<SessionUser> {
        debug!(%role, "fabricating identity without verification");
        Ok(SessionUser {
            id: Self::fabricate_id(),
            name: display_name_from_email(email),
            email: email.to_string(),
            role,
            avatar: None,
        })
    }

    async fn register(
        &self,
        name: &str,
        email: &str,
        _password: &SecretString,
        role: Role,
    ) -> Result<SessionUser> {
        Ok(SessionUser {
            id: Self::fabricate_id(),
            name: name.to_string(),
            email: email.to_string(),
            role,
            avatar: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn password() -> SecretString {
        SecretString::from("anything".to_string())
    }

    #[tokio::test]
    async fn sign_in_derives_name_from_email() {
        let user = StubIdentityProvider::new()
            .authenticate("jane.doe@x.com", &password(), Role::Citizen)
            .await
            .unwrap();

        assert_eq!(user.name, "Jane Doe");
        assert_eq!(user.email, "jane.doe@x.com");
        assert_eq!(user.role, Role::Citizen);
        assert_eq!(user.id.len(), ID_LEN);
    }

    #[tokio::test]
    async fn register_keeps_supplied_name() {
        let user = StubIdentityProvider::new()
            .register("Anita Rao", "a.rao@x.com", &password(), Role::Moderator)
            .await
            .unwrap();

        assert_eq!(user.name, "Anita Rao");
        assert_eq!(user.role, Role::Moderator);
    }

    #[tokio::test]
    async fn identifiers_are_not_reused() {
        let provider = StubIdentityProvider::new();
        let a = provider.authenticate("a@x.com", &password(), Role::Admin).await.unwrap();
        let b = provider.authenticate("a@x.com", &password(), Role::Admin).await.unwrap();
        assert_ne!(a.id, b.id);
    }
}
