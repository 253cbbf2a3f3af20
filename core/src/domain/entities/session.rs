//! Session credential claims and issuance result.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Claims carried by a session credential.
///
/// `jti` holds the identity key of the domain the credential was issued for,
/// serialized in its string form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "K: Display",
    deserialize = "K: FromStr, <K as FromStr>::Err: Display"
))]
pub struct SessionClaims<K> {
    /// Issuer
    pub iss: String,

    /// Purpose of the credential
    pub sub: String,

    pub aud: Vec<String>,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Identity key
    #[serde(with = "identity_key")]
    pub jti: K,

    /// Per-issuance id; two credentials minted in the same second still differ
    pub sid: String,
}

mod identity_key {
    use serde::{de, Deserialize, Deserializer, Serializer};
    use std::fmt::Display;
    use std::str::FromStr;

    pub fn serialize<K, S>(key: &K, serializer: S) -> Result<S::Ok, S::Error>
    where
        K: Display,
        S: Serializer,
    {
        serializer.collect_str(key)
    }

    pub fn deserialize<'de, K, D>(deserializer: D) -> Result<K, D::Error>
    where
        K: FromStr,
        K::Err: Display,
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// A freshly minted and persisted session credential
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssuedSession {
    pub token: String,

    pub issued_at: DateTime<Utc>,

    /// Lifetime in seconds
    pub ttl_seconds: i64,
}
