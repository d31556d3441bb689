//! The admin access gate.
//!
//! This is a placeholder that keeps casual visitors out of the console. The
//! credentials live in process memory and there is no lockout; it is not a
//! security boundary.

use subtle::ConstantTimeEq;
use tracing::{info, warn};

use crate::error::{ClientError, Result};
use crate::settings::ClientSettings;

/// Decides whether a username and password pair may open the console.
pub trait Authenticator: Send + Sync {
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// A single fixed username and password.
pub struct StaticCredentials {
    username: String,
    password: String,
}

impl StaticCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn from_settings(settings: &ClientSettings) -> Self {
        Self::new(settings.admin_user.clone(), settings.admin_password.clone())
    }
}

impl Authenticator for StaticCredentials {
    fn verify(&self, username: &str, password: &str) -> bool {
        // Both halves are always compared.
        let user_ok = constant_time_eq(username, &self.username);
        let pass_ok = constant_time_eq(password, &self.password);
        user_ok & pass_ok
    }
}

fn constant_time_eq(given: &str, expected: &str) -> bool {
    let given = given.as_bytes();
    let expected = expected.as_bytes();
    given.len() == expected.len() && given.ct_eq(expected).unwrap_u8() == 1
}

/// Holds the logged-in flag for the console.
pub struct AdminGate {
    authenticator: Box<dyn Authenticator>,
    authenticated: bool,
}

impl AdminGate {
    pub fn new(authenticator: Box<dyn Authenticator>) -> Self {
        Self {
            authenticator,
            authenticated: false,
        }
    }

    pub fn login(&mut self, username: &str, password: &str) -> Result<()> {
        if self.authenticator.verify(username, password) {
            self.authenticated = true;
            info!("admin logged in");
            Ok(())
        } else {
            warn!("admin login rejected");
            Err(ClientError::InvalidCredentials)
        }
    }

    pub fn logout(&mut self) {
        if self.authenticated {
            info!("admin logged out");
        }
        self.authenticated = false;
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Fail with [`ClientError::NotAuthenticated`] while logged out.
    pub fn ensure(&self) -> Result<()> {
        if self.authenticated {
            Ok(())
        } else {
            Err(ClientError::NotAuthenticated)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate() -> AdminGate {
        AdminGate::new(Box::new(StaticCredentials::new("admin", "admin123")))
    }

    #[test]
    fn static_credentials_need_both_halves() {
        let creds = StaticCredentials::new("admin", "admin123");
        assert!(creds.verify("admin", "admin123"));
        assert!(!creds.verify("admin", "admin1234"));
        assert!(!creds.verify("Admin", "admin123"));
        assert!(!creds.verify("", ""));
    }

    #[test]
    fn login_and_logout() {
        let mut gate = gate();
        assert!(!gate.is_authenticated());
        assert!(matches!(gate.ensure(), Err(ClientError::NotAuthenticated)));

        assert!(matches!(
            gate.login("admin", "wrong"),
            Err(ClientError::InvalidCredentials)
        ));
        assert!(!gate.is_authenticated());

        gate.login("admin", "admin123").unwrap();
        assert!(gate.is_authenticated());
        gate.ensure().unwrap();

        gate.logout();
        assert!(!gate.is_authenticated());
    }

    #[test]
    fn authenticator_is_swappable() {
        struct AllowAll;
        impl Authenticator for AllowAll {
            fn verify(&self, _: &str, _: &str) -> bool {
                true
            }
        }

        let mut gate = AdminGate::new(Box::new(AllowAll));
        gate.login("anyone", "anything").unwrap();
        assert!(gate.is_authenticated());
    }

    #[test]
    fn settings_provide_the_pair() {
        let settings = ClientSettings {
            admin_user: "editor".into(),
            admin_password: "pw".into(),
            ..ClientSettings::default()
        };
        let creds = StaticCredentials::from_settings(&settings);
        assert!(creds.verify("editor", "pw"));
        assert!(!creds.verify("admin", "admin123"));
    }
}
