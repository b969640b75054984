//! Simulated sign-in against a fixed list of demo accounts.
//!
//! There is no server behind this: `login` and `signup` resolve
//! immediately against [`DEMO_USERS`], and the caller is responsible for
//! any artificial delay (it calls [`Session::begin_request`] when the delay
//! starts and `login`/`signup` when it ends).

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::seed_data::pexels;

/// The signed-in user as the rest of the app sees it. Never carries a
/// password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
}

pub struct DemoUser {
    pub id: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub password: &'static str,
    pub avatar_photo: u32,
}

pub const DEMO_USERS: [DemoUser; 2] = [
    DemoUser {
        id: "1",
        name: "Jane Doe",
        email: "jane@example.com",
        password: "password123",
        avatar_photo: 774909,
    },
    DemoUser {
        id: "2",
        name: "Admin User",
        email: "admin@example.com",
        password: "admin123",
        avatar_photo: 415829,
    },
];

const DEFAULT_AVATAR_PHOTO: u32 = 1036623;
const AVATAR_WIDTH: u32 = 150;

impl DemoUser {
    fn identity(&self) -> Identity {
        Identity {
            id: self.id.to_string(),
            name: self.name.to_string(),
            email: self.email.to_string(),
            avatar: Some(pexels(self.avatar_photo, AVATAR_WIDTH)),
        }
    }
}

/// The part of the session written to storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedSession {
    pub user: Option<Identity>,
    pub is_authenticated: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<Identity>,
    is_authenticated: bool,
    is_loading: bool,
}

impl Session {
    pub fn user(&self) -> Option<&Identity> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn begin_request(&mut self) {
        self.is_loading = true;
    }

    /// Returns false and leaves the identity untouched on bad credentials.
    pub fn login(&mut self, email: &str, password: &str) -> bool {
        self.is_loading = false;

        let found = DEMO_USERS
            .iter()
            .find(|user| user.email == email && user.password == password);

        match found {
            Some(user) => {
                self.user = Some(user.identity());
                self.is_authenticated = true;
                info!(user = user.id, "logged in");
                true
            }
            None => {
                info!(email, "login rejected");
                false
            }
        }
    }

    /// Registers a throwaway identity. Fails for an e-mail already taken by
    /// a demo account; the account list itself never grows.
    pub fn signup(&mut self, name: &str, email: &str, _password: &str) -> bool {
        self.is_loading = false;

        if DEMO_USERS.iter().any(|user| user.email == email) {
            info!(email, "signup rejected, e-mail taken");
            return false;
        }

        let identity = Identity {
            id: (DEMO_USERS.len() + 1).to_string(),
            name: name.to_string(),
            email: email.to_string(),
            avatar: Some(pexels(DEFAULT_AVATAR_PHOTO, AVATAR_WIDTH)),
        };
        info!(user = %identity.id, "signed up");
        self.user = Some(identity);
        self.is_authenticated = true;
        true
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            info!(user = %user.id, "logged out");
        }
        self.is_authenticated = false;
    }

    /// Trusts a restored identity: if one is present, the session counts
    /// as authenticated.
    pub fn check_auth(&mut self) {
        if self.user.is_some() && !self.is_authenticated {
            self.is_authenticated = true;
        }
    }

    pub fn persisted(&self) -> PersistedSession {
        PersistedSession {
            user: self.user.clone(),
            is_authenticated: self.is_authenticated,
        }
    }

    pub fn restore(persisted: PersistedSession) -> Self {
        Session {
            user: persisted.user,
            is_authenticated: persisted.is_authenticated,
            is_loading: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_login_succeeds() {
        let mut session = Session::default();
        session.begin_request();
        assert!(session.is_loading());

        assert!(session.login("jane@example.com", "password123"));
        assert!(session.is_authenticated());
        assert!(!session.is_loading());

        let user = session.user().unwrap();
        assert_eq!(user.id, "1");
        assert_eq!(user.name, "Jane Doe");
        assert!(user.avatar.as_deref().unwrap().contains("774909"));
    }

    #[test]
    fn wrong_password_changes_nothing_but_loading() {
        let mut session = Session::default();
        assert!(session.login("admin@example.com", "admin123"));
        let before = session.clone();

        session.begin_request();
        assert!(!session.login("jane@example.com", "wrong"));
        assert_eq!(session, before);
    }

    #[test]
    fn signup_with_taken_email_fails() {
        let mut session = Session::default();
        assert!(!session.signup("Someone", "jane@example.com", "whatever1"));
        assert_eq!(session, Session::default());
    }

    #[test]
    fn signup_fabricates_identity() {
        let mut session = Session::default();
        assert!(session.signup("Asha Rao", "asha@example.com", "longenough"));
        let user = session.user().unwrap();
        assert_eq!(user.id, "3");
        assert_eq!(user.email, "asha@example.com");
        assert!(user.avatar.as_deref().unwrap().contains("1036623"));

        // the demo list is fixed, so a second signup gets the same id
        let mut other = Session::default();
        assert!(other.signup("Mira", "mira@example.com", "longenough"));
        assert_eq!(other.user().unwrap().id, "3");
    }

    #[test]
    fn logout_and_check_auth() {
        let mut session = Session::default();
        session.login("jane@example.com", "password123");
        session.logout();
        assert!(session.user().is_none());
        assert!(!session.is_authenticated());

        let mut restored = Session::restore(PersistedSession {
            user: DEMO_USERS[1].identity().into(),
            is_authenticated: false,
        });
        restored.check_auth();
        assert!(restored.is_authenticated());

        let mut empty = Session::restore(PersistedSession::default());
        empty.check_auth();
        assert!(!empty.is_authenticated());
    }
}
