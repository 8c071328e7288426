//! PIX keys addressing accounts in the directory.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::account::Account;
use crate::error::ValidationError;
use crate::validate;

/// Kinds of key the directory accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyKind {
    Email,
    Cpf,
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyKind::Email => write!(f, "email"),
            KeyKind::Cpf => write!(f, "cpf"),
        }
    }
}

impl FromStr for KeyKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "email" => Ok(KeyKind::Email),
            "cpf" => Ok(KeyKind::Cpf),
            other => Err(ValidationError::UnknownKeyKind(other.to_string())),
        }
    }
}

/// Directory lifecycle of a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyStatus {
    Active,
    Inactive,
}

impl KeyStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, KeyStatus::Active)
    }
}

impl fmt::Display for KeyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyStatus::Active => write!(f, "active"),
            KeyStatus::Inactive => write!(f, "inactive"),
        }
    }
}

/// A key pointing at an account. The (kind, value) pair is unique
/// across the directory; uniqueness is enforced at registration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PixKey {
    pub id: Uuid,
    pub kind: KeyKind,
    pub value: String,
    pub account_id: Uuid,
    pub status: KeyStatus,
    pub created_at: DateTime<Utc>,
}

impl PixKey {
    /// Build a key for an account, validating the value against the
    /// kind. New keys start active.
    pub fn new(
        kind: KeyKind,
        account: &Account,
        value: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let value = value.into();
        match kind {
            KeyKind::Email if !validate::email_shape_ok(&value) => {
                return Err(ValidationError::InvalidEmail(value));
            }
            KeyKind::Cpf if !validate::cpf_shape_ok(&value) => {
                return Err(ValidationError::InvalidCpf(value));
            }
            _ => {}
        }

        Ok(Self {
            id: Uuid::new_v4(),
            kind,
            value,
            account_id: account.id,
            status: KeyStatus::Active,
            created_at: Utc::now(),
        })
    }
}
