//! Authenticated users and their roles.

use super::registration::{RegistrantKind, Registration};
use crate::domain::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fixed set of portal roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Salesperson,
    Dentist,
    Receptionist,
    Client,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Salesperson => "salesperson",
            Self::Dentist => "dentist",
            Self::Receptionist => "receptionist",
            Self::Client => "client",
        }
    }
}

impl FromStr for Role {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "salesperson" => Ok(Self::Salesperson),
            "dentist" => Ok(Self::Dentist),
            "receptionist" => Ok(Self::Receptionist),
            "client" => Ok(Self::Client),
            other => Err(ValidationError::UnknownVariant {
                kind: "role",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A signed-in portal user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub role: Role,
    pub active: bool,
    pub profile: Registration,
}

impl User {
    pub fn kind(&self) -> RegistrantKind {
        self.profile.kind()
    }
}
