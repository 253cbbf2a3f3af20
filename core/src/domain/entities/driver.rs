//! Driver entity: a chauffeur accepting ride orders.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::identity::{Identity, IdentityDomain, KeyParseError};

/// Driver identity key: drivers are addressed by their mobile number
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Telephone(pub String);

impl Telephone {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Telephone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Telephone {
    type Err = KeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit()) {
            return Err(KeyParseError(s.to_string()));
        }
        Ok(Telephone(s.to_string()))
    }
}

/// Work status of a driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DriverStatus {
    /// Off shift
    Out,
    /// On shift, not taking orders
    In,
    /// Waiting for orders
    Listen,
    /// Registration submitted, not yet active
    Stop,
}

impl DriverStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DriverStatus::Out => "out",
            DriverStatus::In => "in",
            DriverStatus::Listen => "listen",
            DriverStatus::Stop => "stop",
        }
    }
}

impl fmt::Display for DriverStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DriverStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "out" => Ok(DriverStatus::Out),
            "in" => Ok(DriverStatus::In),
            "listen" => Ok(DriverStatus::Listen),
            "stop" => Ok(DriverStatus::Stop),
            other => Err(format!("unknown driver status: {}", other)),
        }
    }
}

/// Driver entity with its registration and audit profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Driver {
    pub id: u64,

    /// Mobile number, unique per driver
    pub telephone: String,

    #[serde(skip_serializing)]
    pub token: Option<String>,

    pub token_created_at: Option<DateTime<Utc>>,

    pub status: Option<DriverStatus>,

    pub name: Option<String>,

    /// National ID card number
    pub id_number: Option<String>,

    pub id_image_a: Option<String>,

    pub license_image_a: Option<String>,

    pub license_image_b: Option<String>,

    /// District code of the operating area
    pub distinct_code: Option<String>,

    /// Backup contact number
    pub telephone_bak: Option<String>,

    pub audit_at: Option<DateTime<Utc>>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Driver {
    pub fn new(id: u64, telephone: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            telephone: telephone.into(),
            token: None,
            token_created_at: None,
            status: Some(DriverStatus::Stop),
            name: None,
            id_number: None,
            id_image_a: None,
            license_image_a: None,
            license_image_b: None,
            distinct_code: None,
            telephone_bak: None,
            audit_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_audited(&self) -> bool {
        self.audit_at.is_some()
    }
}

impl Identity for Driver {
    type Key = Telephone;

    const DOMAIN: IdentityDomain = IdentityDomain::Driver;

    fn register(id: u64, telephone: &str, now: DateTime<Utc>) -> Self {
        Self {
            created_at: now,
            updated_at: now,
            ..Self::new(id, telephone)
        }
    }

    fn key(&self) -> Telephone {
        Telephone(self.telephone.clone())
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
