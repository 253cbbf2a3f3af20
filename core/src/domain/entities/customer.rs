//! Customer entity: a passenger booking rides.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::identity::{Identity, IdentityDomain, KeyParseError};

/// Primary key of a customer; embedded in the customer session credential
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(pub u64);

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CustomerId {
    type Err = KeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>()
            .map(CustomerId)
            .map_err(|_| KeyParseError(s.to_string()))
    }
}

/// Customer entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,

    /// Mobile number, unique per customer
    pub telephone: String,

    pub name: Option<String>,

    pub email: Option<String>,

    pub wechat: Option<String>,

    /// City used for fare rules
    pub city_id: Option<u32>,

    /// Authoritative session credential
    #[serde(skip_serializing)]
    pub token: Option<String>,

    pub token_created_at: Option<DateTime<Utc>>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Customer {
    pub fn new(id: CustomerId, telephone: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            telephone: telephone.into(),
            name: None,
            email: None,
            wechat: None,
            city_id: None,
            token: None,
            token_created_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }
}

impl Identity for Customer {
    type Key = CustomerId;

    const DOMAIN: IdentityDomain = IdentityDomain::Customer;

    fn register(id: u64, telephone: &str, now: DateTime<Utc>) -> Self {
        Self {
            created_at: now,
            updated_at: now,
            ..Self::new(CustomerId(id), telephone)
        }
    }

    fn key(&self) -> CustomerId {
        self.id
    }

    fn telephone(&self) -> &str {
        &self.telephone
    }

    fn session_token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn session_issued_at(&self) -> Option<DateTime<Utc>> {
        self.token_created_at
    }

    fn set_session(&mut self, token: Option<String>, issued_at: Option<DateTime<Utc>>) {
        self.token = token;
        self.token_created_at = issued_at;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_id_round_trip() {
        let id: CustomerId = "42".parse().unwrap();
        assert_eq!(id, CustomerId(42));
        assert_eq!(id.to_string(), "42");
        assert!("13800138000x".parse::<CustomerId>().is_err());
    }

    #[test]
    fn test_register_creates_minimal_record() {
        let customer = Customer::register(7, "13800138000", Utc::now());
        assert_eq!(customer.key(), CustomerId(7));
        assert_eq!(customer.telephone(), "13800138000");
        assert!(customer.name.is_none());
        assert!(customer.email.is_none());
        assert!(customer.city_id.is_none());
        assert!(!customer.is_logged_in());
    }

    #[test]
    fn test_set_session_overwrites_and_clears() {
        let mut customer = Customer::new(CustomerId(1), "13800138000");
        let issued = Utc::now();
        customer.set_session(Some("t1".to_string()), Some(issued));
        customer.set_session(Some("t2".to_string()), Some(issued));
        assert_eq!(customer.session_token(), Some("t2"));

        customer.set_session(None, None);
        assert!(customer.session_token().is_none());
        assert!(customer.session_issued_at().is_none());
    }
}
