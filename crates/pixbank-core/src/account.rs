//! Bank accounts that send and receive transactions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::bank::Bank;
use crate::error::ValidationError;
use crate::validate;

/// An account held at a registered bank.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,
    pub bank_id: Uuid,
    /// Branch-local account number, e.g. "33821-0".
    pub number: String,
    pub owner_name: String,
    pub created_at: DateTime<Utc>,
}

impl Account {
    pub fn new(
        bank: &Bank,
        number: impl Into<String>,
        owner_name: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let number = number.into();
        let owner_name = owner_name.into();
        validate::require_non_empty("account number", &number)?;
        validate::require_non_empty("owner name", &owner_name)?;

        Ok(Self {
            id: Uuid::new_v4(),
            bank_id: bank.id,
            number,
            owner_name,
            created_at: Utc::now(),
        })
    }
}
