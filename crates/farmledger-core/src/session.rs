//! The identity holder: zero-or-one active user plus login transitions.

use farmledger_domain::User;
use thiserror::Error;
use tracing::{debug, info};

use crate::{CoreError, CoreResult};

/// Failures an identity backend can report.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Invalid verification code")]
    InvalidCode,
    #[error("Network error: {0}")]
    Network(String),
}

/// Abstraction over identity backends capable of resolving credentials into
/// users.
///
/// The real backend sits across a network boundary; swapping it in changes
/// this implementation, not the [`Session`] callers hold.
pub trait IdentityProvider: Send + Sync {
    fn login(&self, email: &str, password: &str) -> Result<User, AuthError>;
    fn login_with_phone(&self, phone_number: &str, code: &str) -> Result<User, AuthError>;
    fn register(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> Result<User, AuthError>;
}

/// Stand-in identity backend that accepts any credentials and fabricates a
/// matching user.
#[derive(Debug, Clone, Default)]
pub struct MockIdentityProvider;

impl IdentityProvider for MockIdentityProvider {
    fn login(&self, email: &str, _password: &str) -> Result<User, AuthError> {
        debug!(email, "mock login");
        let display_name = email.split('@').next().unwrap_or(email).to_string();
        Ok(User::new()
            .with_email(email)
            .with_display_name(display_name))
    }

    fn login_with_phone(&self, phone_number: &str, _code: &str) -> Result<User, AuthError> {
        debug!(phone_number, "mock phone login");
        Ok(User::new()
            .with_phone_number(phone_number)
            .with_display_name("Phone User"))
    }

    fn register(
        &self,
        email: &str,
        _password: &str,
        display_name: &str,
    ) -> Result<User, AuthError> {
        debug!(email, display_name, "mock registration");
        Ok(User::new()
            .with_email(email)
            .with_display_name(display_name))
    }
}

/// Holds the active user for the current in-memory session.
///
/// Transitions: anonymous → authenticated on any successful login or
/// registration, authenticated → anonymous on logout. Nothing survives a
/// restart.
#[derive(Debug)]
pub struct Session<P: IdentityProvider> {
    provider: P,
    user: Option<User>,
    loading: bool,
}

impl<P: IdentityProvider> Session<P> {
    /// Creates a session that is still resolving its startup state; call
    /// [`Session::restore`] to complete the check.
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            user: None,
            loading: true,
        }
    }

    /// Completes the startup session check. No session store exists in the
    /// current scope, so this only clears the loading flag.
    pub fn restore(&mut self) {
        self.loading = false;
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Returns the active user, or `NotAuthenticated` when none is.
    pub fn require_user(&self) -> CoreResult<&User> {
        self.user.as_ref().ok_or(CoreError::NotAuthenticated)
    }

    pub fn login(&mut self, email: &str, password: &str) -> Result<&User, AuthError> {
        self.loading = true;
        let result = self.provider.login(email, password);
        self.loading = false;
        let user = result?;
        info!(user = %user.id, "user logged in");
        Ok(self.activate(user))
    }

    pub fn login_with_phone(
        &mut self,
        phone_number: &str,
        code: &str,
    ) -> Result<&User, AuthError> {
        self.loading = true;
        let result = self.provider.login_with_phone(phone_number, code);
        self.loading = false;
        let user = result?;
        info!(user = %user.id, "user logged in via phone");
        Ok(self.activate(user))
    }

    pub fn register(
        &mut self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> Result<&User, AuthError> {
        self.loading = true;
        let result = self.provider.register(email, password, display_name);
        self.loading = false;
        let user = result?;
        info!(user = %user.id, "user registered");
        Ok(self.activate(user))
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            info!(user = %user.id, "user logged out");
        }
    }

    fn activate(&mut self, user: User) -> &User {
        self.user.insert(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session<MockIdentityProvider> {
        Session::new(MockIdentityProvider)
    }

    #[test]
    fn starts_loading_and_anonymous() {
        let mut session = session();
        assert!(session.is_loading());
        assert!(session.user().is_none());
        session.restore();
        assert!(!session.is_loading());
        assert!(session.user().is_none());
    }

    #[test]
    fn login_fabricates_user_from_email() {
        let mut session = session();
        session.restore();
        let user = session.login("ravi@example.com", "secret").unwrap();
        assert_eq!(user.email.as_deref(), Some("ravi@example.com"));
        assert_eq!(user.display_name.as_deref(), Some("ravi"));
        assert!(session.is_authenticated());
        assert!(!session.is_loading());
    }

    #[test]
    fn phone_login_fabricates_phone_user() {
        let mut session = session();
        session.restore();
        let user = session.login_with_phone("+911234567890", "000000").unwrap();
        assert_eq!(user.phone_number.as_deref(), Some("+911234567890"));
        assert_eq!(user.display_name.as_deref(), Some("Phone User"));
    }

    #[test]
    fn register_activates_new_user() {
        let mut session = session();
        session.restore();
        let user = session
            .register("meera@example.com", "secret", "Meera")
            .unwrap();
        assert_eq!(user.display_name.as_deref(), Some("Meera"));
        assert!(session.is_authenticated());
    }

    #[test]
    fn logout_clears_the_active_user() {
        let mut session = session();
        session.restore();
        session.login("ravi@example.com", "secret").unwrap();
        session.logout();
        assert!(session.user().is_none());
        assert!(matches!(
            session.require_user(),
            Err(CoreError::NotAuthenticated)
        ));
    }

    #[test]
    fn successive_logins_replace_the_user() {
        let mut session = session();
        session.restore();
        session.login("first@example.com", "secret").unwrap();
        session.login("second@example.com", "secret").unwrap();
        assert_eq!(
            session.user().unwrap().email.as_deref(),
            Some("second@example.com")
        );
    }
}
