//! Session store: authentication state and address management.
//!
//! The current user is persisted whole under one key and re-serialized after
//! every mutation. Sign-in accepts an email or a phone number; the two are
//! told apart by shape, and credential checks are always keyed by the
//! matched user's email.
//!
//! Failure semantics follow the storefront contract: business-rule
//! rejections (unknown identifier, wrong password, duplicate signup) are
//! sentinel returns, not errors, and wrong-password vs unknown-identifier is
//! deliberately not distinguished to the caller. Only storage failures are
//! `Err`.

use std::time::Duration;

use secrecy::SecretString;
use uuid::Uuid;

use secureview_core::{AddressId, Email, Phone, UserId};

use crate::directory::UserDirectory;
use crate::keys;
use crate::kv::{KvStore, KvStoreExt, StorageError};
use crate::models::{Address, NewAddress, User};

/// How a sign-in identifier was classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identifier {
    Email(Email),
    Phone(Phone),
}

impl Identifier {
    /// Classify a raw identifier as an email or phone number by shape.
    ///
    /// Email shape wins when both could apply (it can't in practice: emails
    /// require an `@`, phones forbid it).
    #[must_use]
    pub fn classify(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if let Ok(email) = Email::parse(trimmed) {
            return Some(Self::Email(email));
        }
        if let Ok(phone) = Phone::parse(trimmed) {
            return Some(Self::Phone(phone));
        }
        None
    }
}

/// Authentication and profile state over a [`KvStore`] and a
/// [`UserDirectory`].
pub struct SessionStore<'a, S: KvStore + ?Sized, D: UserDirectory + ?Sized> {
    store: &'a S,
    directory: &'a D,
    latency: Duration,
}

impl<'a, S: KvStore + ?Sized, D: UserDirectory + ?Sized> SessionStore<'a, S, D> {
    /// Create a session store with no artificial latency (tests, library use).
    #[must_use]
    pub const fn new(store: &'a S, directory: &'a D) -> Self {
        Self {
            store,
            directory,
            latency: Duration::ZERO,
        }
    }

    /// Add a fixed artificial delay to login and signup, simulating the
    /// network round-trip a real backend would cost. The delay always runs
    /// to completion; nothing here is cancellable.
    #[must_use]
    pub const fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    fn pause(&self) {
        if !self.latency.is_zero() {
            std::thread::sleep(self.latency);
        }
    }

    /// The currently signed-in user, if any.
    ///
    /// A corrupt or unreadable session entry degrades to signed-out.
    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.store.read_json_or_default(keys::CURRENT_USER)
    }

    /// Whether a user is signed in.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }

    /// Sign in with an email or phone number plus password.
    ///
    /// Returns `Ok(None)` on any mismatch: unrecognized identifier shape,
    /// unknown user, or wrong password. Which one it was is not surfaced.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] only if persisting the session fails.
    pub fn login(
        &self,
        identifier: &str,
        password: &str,
    ) -> Result<Option<User>, StorageError> {
        self.pause();

        let user = match Identifier::classify(identifier) {
            Some(Identifier::Email(email)) => self.directory.find_by_email(email.as_str()),
            Some(Identifier::Phone(phone)) => self.directory.find_by_phone(phone.as_str()),
            None => None,
        };

        let Some(user) = user else {
            tracing::debug!("login rejected: identifier did not match a user");
            return Ok(None);
        };

        if !self.directory.verify_credential(&user.email, password) {
            tracing::debug!(user_id = %user.id, "login rejected: credential mismatch");
            return Ok(None);
        }

        self.store.write_json(keys::CURRENT_USER, &user)?;
        tracing::info!(user_id = %user.id, "user signed in");
        Ok(Some(user))
    }

    /// Register a new user and sign them in.
    ///
    /// Returns `Ok(false)` when the email or phone already belongs to an
    /// existing user; the directory is left untouched in that case.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] only if persisting the session fails.
    pub fn signup(
        &self,
        name: &str,
        email: Email,
        password: SecretString,
        phone: Phone,
    ) -> Result<bool, StorageError> {
        self.pause();

        if self.directory.find_by_email(email.as_str()).is_some() {
            tracing::debug!("signup rejected: email already registered");
            return Ok(false);
        }
        if self.directory.find_by_phone(phone.as_str()).is_some() {
            tracing::debug!("signup rejected: phone already registered");
            return Ok(false);
        }

        let user = User {
            id: UserId::new(format!("user_{}", Uuid::new_v4().simple())),
            name: name.to_owned(),
            email,
            phone: Some(phone),
            addresses: Vec::new(),
            is_admin: false,
        };

        self.directory.insert(user.clone(), password);
        self.store.write_json(keys::CURRENT_USER, &user)?;
        tracing::info!(user_id = %user.id, "user signed up");
        Ok(true)
    }

    /// Clear the session. A no-op when nobody is signed in.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the session entry cannot be removed.
    pub fn logout(&self) -> Result<(), StorageError> {
        self.store.remove(keys::CURRENT_USER)?;
        tracing::info!("user signed out");
        Ok(())
    }

    /// Check a password against the signed-in user's stored credential.
    ///
    /// Used for confirmation prompts. Credential rotation is out of scope:
    /// nothing in this model ever replaces a stored password.
    #[must_use]
    pub fn check_password(&self, password: &str) -> bool {
        self.current_user()
            .is_some_and(|user| self.directory.verify_credential(&user.email, password))
    }

    /// Append an address to the signed-in user. The first address added
    /// becomes the default.
    ///
    /// Returns `Ok(false)` when nobody is signed in.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if re-persisting the user fails.
    pub fn add_address(&self, new: NewAddress) -> Result<bool, StorageError> {
        let Some(mut user) = self.current_user() else {
            return Ok(false);
        };

        let address = Address {
            id: AddressId::new(format!("addr_{}", Uuid::new_v4().simple())),
            name: new.name,
            street: new.street,
            city: new.city,
            postal_code: new.postal_code,
            country: new.country,
            is_default: user.addresses.is_empty(),
        };
        user.addresses.push(address);

        self.persist_user(&user)?;
        Ok(true)
    }

    /// Remove an address by id. When the default address is removed and
    /// others remain, the first remaining address is promoted to default.
    ///
    /// Returns `Ok(false)` when nobody is signed in or the id is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if re-persisting the user fails.
    pub fn remove_address(&self, address_id: &AddressId) -> Result<bool, StorageError> {
        let Some(mut user) = self.current_user() else {
            return Ok(false);
        };

        let Some(index) = user.addresses.iter().position(|a| &a.id == address_id) else {
            return Ok(false);
        };
        let removed = user.addresses.remove(index);

        if removed.is_default
            && let Some(first) = user.addresses.first_mut()
        {
            first.is_default = true;
        }

        self.persist_user(&user)?;
        Ok(true)
    }

    /// Re-serialize the full user record into the session and push the
    /// update into the directory.
    fn persist_user(&self, user: &User) -> Result<(), StorageError> {
        self.store.write_json(keys::CURRENT_USER, user)?;
        if !self.directory.update(user) {
            tracing::warn!(user_id = %user.id, "directory update skipped: user unknown");
        }
        Ok(())
    }
}
