//! Authentication and profile commands.
//!
//! The user directory is the seeded in-memory mock, so accounts created with
//! `signup` only outlive the invocation through the persisted session; the
//! directory itself resets every run.
//!
//! # Usage
//!
//! ```bash
//! sv-cli auth login test@example.com -p password123
//! sv-cli auth login 9876543210 -p password123
//! sv-cli auth signup -n "New User" -e new@example.com --phone 5551234567 -p pw
//! sv-cli auth whoami
//! sv-cli auth logout
//! sv-cli auth add-address -n Home --street "1 Main St" --city Pune \
//!     --postal-code 411001 --country India
//! sv-cli auth remove-address addr_abc123
//! ```

use std::time::Duration;

use secrecy::SecretString;

use secureview_core::{AddressId, Email, Phone};
use secureview_storefront::directory::MockDirectory;
use secureview_storefront::kv::KvStore;
use secureview_storefront::models::NewAddress;
use secureview_storefront::session::SessionStore;

use super::CliError;

/// Sign in with an email or phone number.
///
/// # Errors
///
/// Returns [`CliError::LoginRejected`] on any mismatch, or a storage error.
pub fn login(
    store: &impl KvStore,
    latency: Duration,
    identifier: &str,
    password: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let directory = MockDirectory::seeded();
    let session = SessionStore::new(store, &directory).with_latency(latency);

    let user = session.login(identifier, password)?.ok_or(CliError::LoginRejected)?;
    println!("Signed in as {} <{}>.", user.name, user.email);
    Ok(())
}

/// Create an account and sign in.
///
/// # Errors
///
/// Returns [`CliError::InvalidInput`] for a malformed email or phone,
/// [`CliError::SignupRejected`] for duplicates, or a storage error.
pub fn signup(
    store: &impl KvStore,
    latency: Duration,
    name: &str,
    email: &str,
    phone: &str,
    password: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let email = Email::parse(email).map_err(|e| CliError::InvalidInput(e.to_string()))?;
    let phone = Phone::parse(phone).map_err(|e| CliError::InvalidInput(e.to_string()))?;

    let directory = MockDirectory::seeded();
    let session = SessionStore::new(store, &directory).with_latency(latency);

    if !session.signup(name, email, SecretString::from(password.to_owned()), phone)? {
        return Err(CliError::SignupRejected.into());
    }
    println!("Welcome, {name}! You are signed in.");
    Ok(())
}

/// Clear the session.
///
/// # Errors
///
/// Returns a storage error if the session cannot be removed.
pub fn logout(store: &impl KvStore) -> Result<(), Box<dyn std::error::Error>> {
    let directory = MockDirectory::seeded();
    SessionStore::new(store, &directory).logout()?;
    println!("Signed out.");
    Ok(())
}

/// Print the signed-in user and their saved addresses.
pub fn whoami(store: &impl KvStore) {
    let directory = MockDirectory::seeded();
    let session = SessionStore::new(store, &directory);
    match session.current_user() {
        Some(user) => {
            let role = if user.is_admin { " (admin)" } else { "" };
            println!("{} <{}>{role}", user.name, user.email);
            if let Some(phone) = &user.phone {
                println!("Phone: {phone}");
            }
            for address in &user.addresses {
                let default = if address.is_default { " [default]" } else { "" };
                println!(
                    "  {} {}: {}, {}, {} {}{default}",
                    address.id,
                    address.name,
                    address.street,
                    address.city,
                    address.postal_code,
                    address.country
                );
            }
        }
        None => println!("Not signed in."),
    }
}

/// Save a new address; the first one added becomes the default.
///
/// # Errors
///
/// Returns [`CliError::NotSignedIn`] or a storage error.
pub fn add_address(
    store: &impl KvStore,
    name: &str,
    street: &str,
    city: &str,
    postal_code: &str,
    country: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let directory = MockDirectory::seeded();
    let session = SessionStore::new(store, &directory);

    let added = session.add_address(NewAddress {
        name: name.to_owned(),
        street: street.to_owned(),
        city: city.to_owned(),
        postal_code: postal_code.to_owned(),
        country: country.to_owned(),
    })?;
    if !added {
        return Err(CliError::NotSignedIn.into());
    }
    println!("Address saved.");
    Ok(())
}

/// Remove a saved address by id.
///
/// # Errors
///
/// Returns [`CliError::NotSignedIn`] when signed out, or
/// [`CliError::InvalidInput`] for an unknown id.
pub fn remove_address(
    store: &impl KvStore,
    address_id: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let directory = MockDirectory::seeded();
    let session = SessionStore::new(store, &directory);
    if session.current_user().is_none() {
        return Err(CliError::NotSignedIn.into());
    }

    if !session.remove_address(&AddressId::new(address_id))? {
        return Err(CliError::InvalidInput(format!("unknown address: {address_id}")).into());
    }
    println!("Address removed.");
    Ok(())
}
