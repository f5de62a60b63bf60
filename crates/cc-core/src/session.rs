//! # Session Store
//!
//! Owns the single signed-in user. Constructed once at startup from the
//! persisted slot, mutated only through `sign_in`, `sign_up` and `sign_out`.
//!
//! The store checks that required fields are present and nothing more.
//! Credential verification, if any, is the `IdentityProvider`'s business.

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use tracing::{info, warn};

use crate::error::{AppError, Result};
use crate::models::{Role, SessionUser};
use crate::traits::{IdentityProvider, SessionSlot};

/// Credentials submitted from the sign-in form.
#[derive(Debug)]
pub struct SignInRequest {
    pub email: String,
    pub password: SecretString,
    pub role: Option<Role>,
}

/// Fields submitted from the sign-up form. Password confirmation and
/// strength are the caller's concern (see `forms::check_sign_up_form`).
#[derive(Debug)]
pub struct SignUpRequest {
    pub name: String,
    pub email: String,
    pub password: SecretString,
    pub role: Option<Role>,
}

pub struct SessionStore {
    slot: Arc<dyn SessionSlot>,
    identity: Arc<dyn IdentityProvider>,
    current: Option<SessionUser>,
}

impl SessionStore {
    /// Reads the persisted slot once. A missing or corrupt slot yields a
    /// signed-out store instead of an error.
    pub async fn restore(slot: Arc<dyn SessionSlot>, identity: Arc<dyn IdentityProvider>) -> Self {
        let current = match slot.load().await {
            Ok(user) => user,
            Err(err) => {
                warn!(error = %err, "ignoring unreadable session slot");
                None
            }
        };

        if let Some(user) = &current {
            info!(user_id = %user.id, role = %user.role, "restored session");
        }

        Self { slot, identity, current }
    }

    pub fn current(&self) -> Option<&SessionUser> {
        self.current.as_ref()
    }

    pub fn role(&self) -> Option<Role> {
        self.current.as_ref().map(|user| user.role)
    }

    pub async fn sign_in(&mut self, request: SignInRequest) -> Result<&SessionUser> {
        let role = match request.role {
            Some(role) if !request.email.is_empty() && !request.password.expose_secret().is_empty() => role,
            _ => return Err(AppError::validation("Email, password, and role are required.")),
        };

        let user = self.identity.authenticate(&request.email, &request.password, role).await?;
        self.activate(user).await
    }

    pub async fn sign_up(&mut self, request: SignUpRequest) -> Result<&SessionUser> {
        let role = match request.role {
            Some(role)
                if !request.name.is_empty()
                    && !request.email.is_empty()
                    && !request.password.expose_secret().is_empty() =>
            {
                role
            }
            _ => return Err(AppError::validation("All fields are required.")),
        };

        let user = self
            .identity
            .register(&request.name, &request.email, &request.password, role)
            .await?;
        self.activate(user).await
    }

    /// Clears the active session and the persisted slot. Safe to call when
    /// nobody is signed in.
    /// A failed clear leaves the session in place.
    pub async fn sign_out(&mut self) -> Result<()> {
        self.slot.clear().await?;
        if let Some(user) = self.current.take() {
            info!(user_id = %user.id, "session ended");
        }
        Ok(())
    }

    // The slot is written before the in-memory session changes, so a failed
    // write leaves the previous session in place.
    async fn activate(&mut self, user: SessionUser) -> Result<&SessionUser> {
        self.slot.save(&user).await?;
        info!(user_id = %user.id, role = %user.role, "session started");
        Ok(self.current.insert(user))
    }
}

/// Derives a display name from an email's local part:
/// "jane.doe@x.com" becomes "Jane Doe".
///
/// `.` and `_` turn into spaces and the first ASCII letter or digit of every
/// word is upper-cased. Other characters are kept as typed.
pub fn display_name_from_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or_default();

    let mut name = String::with_capacity(local.len());
    let mut in_word = false;
    for c in local.chars() {
        let c = if c == '.' || c == '_' { ' ' } else { c };
        let is_word = c.is_ascii_alphanumeric();
        if is_word && !in_word {
            name.push(c.to_ascii_uppercase());
        } else {
            name.push(c);
        }
        in_word = is_word;
    }
    name
}
