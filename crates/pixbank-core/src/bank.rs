//! Participating bank institutions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;
use crate::validate;

/// A bank registered with the PIX directory.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bank {
    pub id: Uuid,
    /// Central bank institution code, e.g. "260".
    pub code: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Bank {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Result<Self, ValidationError> {
        let code = code.into();
        let name = name.into();
        validate::require_non_empty("bank code", &code)?;
        validate::require_non_empty("bank name", &name)?;

        Ok(Self {
            id: Uuid::new_v4(),
            code,
            name,
            created_at: Utc::now(),
        })
    }
}
