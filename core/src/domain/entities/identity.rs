//! Identity abstraction shared by the customer and driver domains.

use chrono::{DateTime, Utc};
use std::fmt::{self, Debug, Display};
use std::hash::Hash;
use std::str::FromStr;
use thiserror::Error;

/// The two independent identity spaces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentityDomain {
    Customer,
    Driver,
}

impl IdentityDomain {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdentityDomain::Customer => "customer",
            IdentityDomain::Driver => "driver",
        }
    }
}

impl Display for IdentityDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A claim value that could not be turned back into an identity key
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid identity key: {0}")]
pub struct KeyParseError(pub String);

/// Key embedded in the `jti` claim of a session credential.
///
/// Round-trips through its string form.
pub trait IdentityKey:
    Clone + Eq + Hash + Debug + Display + FromStr<Err = KeyParseError> + Send + Sync + 'static
{
}

impl<T> IdentityKey for T where
    T: Clone + Eq + Hash + Debug + Display + FromStr<Err = KeyParseError> + Send + Sync + 'static
{
}

/// A durable, phone-keyed user record that can hold one session credential.
pub trait Identity: Clone + Debug + Send + Sync + 'static {
    type Key: IdentityKey;

    const DOMAIN: IdentityDomain;

    /// Minimal record for a first-contact phone number: every optional
    /// field empty and no credential.
    fn register(id: u64, telephone: &str, now: DateTime<Utc>) -> Self;

    fn key(&self) -> Self::Key;

    fn telephone(&self) -> &str;

    /// Currently authoritative session credential, if any
    fn session_token(&self) -> Option<&str>;

    fn session_issued_at(&self) -> Option<DateTime<Utc>>;

    /// Replace (or clear, with `None`) the authoritative credential
    fn set_session(&mut self, token: Option<String>, issued_at: Option<DateTime<Utc>>);
}
