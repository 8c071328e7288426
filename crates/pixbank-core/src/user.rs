//! Account holders.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;
use crate::validate;

/// A person holding accounts at participating banks.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        let email = email.into();
        validate::require_non_empty("user name", &name)?;
        if !validate::email_shape_ok(&email) {
            return Err(ValidationError::InvalidEmail(email));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            email,
            created_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_user_with_valid_email() {
        let user = User::new("Maria Silva", "maria.silva@example.com").unwrap();
        assert_eq!(user.name, "Maria Silva");
        assert_eq!(user.email, "maria.silva@example.com");
    }

    #[test]
    fn rejects_invalid_email() {
        let err = User::new("Maria Silva", "maria.silva").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidEmail(_)));
    }

    #[test]
    fn rejects_blank_name() {
        assert!(matches!(
            User::new("", "maria.silva@example.com"),
            Err(ValidationError::EmptyField("user name"))
        ));
    }
}
