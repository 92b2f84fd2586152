//! User directory abstraction.
//!
//! Lookups and credential checks go through an injected trait instead of
//! process-wide mutable tables, so tests substitute fixtures rather than
//! mutating shared module state. The shipped [`MockDirectory`] is the
//! in-memory stand-in for a real backend: plaintext mock credentials keyed by
//! email, held in [`SecretString`]s so they never land in debug output.

use std::cell::RefCell;
use std::collections::HashMap;

use secrecy::{ExposeSecret, SecretString};

use secureview_core::{Email, Phone, UserId};

use crate::models::User;

/// Directory of known users and their credentials.
///
/// Email and phone matching is exact and case-sensitive. Credential lookups
/// are always keyed by email, even when sign-in happened via phone number.
pub trait UserDirectory {
    /// Find a user by exact email match.
    fn find_by_email(&self, email: &str) -> Option<User>;

    /// Find a user by exact phone match.
    fn find_by_phone(&self, phone: &str) -> Option<User>;

    /// Find a user by id.
    fn find_by_id(&self, id: &UserId) -> Option<User>;

    /// Add a new user with their credential.
    ///
    /// Callers check for duplicate email/phone first; the directory does not
    /// enforce uniqueness itself.
    fn insert(&self, user: User, password: SecretString);

    /// Check a password against the credential stored for `email`.
    fn verify_credential(&self, email: &Email, password: &str) -> bool;

    /// Re-persist a mutated user record (addresses changed). Returns false
    /// when the user is unknown.
    fn update(&self, user: &User) -> bool;
}

/// In-memory directory seeded with the development fixtures.
#[derive(Default)]
pub struct MockDirectory {
    users: RefCell<Vec<User>>,
    credentials: RefCell<HashMap<String, SecretString>>,
}

impl MockDirectory {
    /// An empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard development fixtures: two shoppers and one admin.
    ///
    /// # Panics
    ///
    /// Never panics; the fixture emails and phones are statically valid.
    #[must_use]
    #[allow(clippy::missing_panics_doc, clippy::unwrap_used)]
    pub fn seeded() -> Self {
        let directory = Self::new();
        directory.insert(
            User {
                id: UserId::new("user_123"),
                name: "Test User".to_owned(),
                email: Email::parse("test@example.com").unwrap(),
                phone: Some(Phone::parse("9876543210").unwrap()),
                addresses: Vec::new(),
                is_admin: false,
            },
            SecretString::from("password123"),
        );
        directory.insert(
            User {
                id: UserId::new("user_456"),
                name: "Jane Doe".to_owned(),
                email: Email::parse("jane@example.com").unwrap(),
                phone: Some(Phone::parse("0123456789").unwrap()),
                addresses: Vec::new(),
                is_admin: false,
            },
            SecretString::from("securepassword"),
        );
        directory.insert(
            User {
                id: UserId::new("user_admin"),
                name: "Store Admin".to_owned(),
                email: Email::parse("admin@example.com").unwrap(),
                phone: None,
                addresses: Vec::new(),
                is_admin: true,
            },
            SecretString::from("adminpassword"),
        );
        directory
    }
}

impl UserDirectory for MockDirectory {
    fn find_by_email(&self, email: &str) -> Option<User> {
        self.users
            .borrow()
            .iter()
            .find(|u| u.email.as_str() == email)
            .cloned()
    }

    fn find_by_phone(&self, phone: &str) -> Option<User> {
        self.users
            .borrow()
            .iter()
            .find(|u| u.phone.as_ref().is_some_and(|p| p.as_str() == phone))
            .cloned()
    }

    fn find_by_id(&self, id: &UserId) -> Option<User> {
        self.users.borrow().iter().find(|u| &u.id == id).cloned()
    }

    fn insert(&self, user: User, password: SecretString) {
        self.credentials
            .borrow_mut()
            .insert(user.email.as_str().to_owned(), password);
        self.users.borrow_mut().push(user);
    }

    fn verify_credential(&self, email: &Email, password: &str) -> bool {
        self.credentials
            .borrow()
            .get(email.as_str())
            .is_some_and(|stored| stored.expose_secret() == password)
    }

    fn update(&self, user: &User) -> bool {
        let mut users = self.users.borrow_mut();
        match users.iter_mut().find(|u| u.id == user.id) {
            Some(existing) => {
                *existing = user.clone();
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_lookups() {
        let directory = MockDirectory::seeded();

        let by_email = directory.find_by_email("test@example.com").unwrap();
        assert_eq!(by_email.id, UserId::new("user_123"));

        let by_phone = directory.find_by_phone("0123456789").unwrap();
        assert_eq!(by_phone.id, UserId::new("user_456"));

        assert!(directory.find_by_email("Test@Example.com").is_none());
        assert!(directory.find_by_phone("1112223334").is_none());
    }

    #[test]
    fn test_verify_credential() {
        let directory = MockDirectory::seeded();
        let email = Email::parse("test@example.com").unwrap();

        assert!(directory.verify_credential(&email, "password123"));
        assert!(!directory.verify_credential(&email, "wrong"));

        let unknown = Email::parse("nobody@example.com").unwrap();
        assert!(!directory.verify_credential(&unknown, "password123"));
    }

    #[test]
    fn test_update_unknown_user_is_rejected() {
        let directory = MockDirectory::seeded();
        let ghost = User {
            id: UserId::new("user_ghost"),
            name: "Ghost".to_owned(),
            email: Email::parse("ghost@example.com").unwrap(),
            phone: None,
            addresses: Vec::new(),
            is_admin: false,
        };
        assert!(!directory.update(&ghost));
    }

    #[test]
    fn test_admin_fixture_present() {
        let directory = MockDirectory::seeded();
        let admin = directory.find_by_email("admin@example.com").unwrap();
        assert!(admin.is_admin);
    }
}
