//! Transactions and their status state machine.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::account::Account;
use crate::error::{TransitionError, ValidationError};
use crate::pix_key::PixKey;

/// Lifecycle of a transaction.
///
/// Allowed transitions: `Pending -> Confirmed -> Completed`, and
/// `Pending | Confirmed -> Failed`. Completed and Failed are terminal.
/// Display and serde use the wire terms exchanged between banks, which
/// call the failed state "error".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Pending,
    Confirmed,
    Completed,
    #[serde(rename = "error")]
    Failed,
}

impl TransactionStatus {
    /// Whether the transaction still awaits a counterparty step.
    pub fn is_open(&self) -> bool {
        matches!(self, TransactionStatus::Pending | TransactionStatus::Confirmed)
    }

    pub fn is_terminal(&self) -> bool {
        !self.is_open()
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionStatus::Pending => write!(f, "pending"),
            TransactionStatus::Confirmed => write!(f, "confirmed"),
            TransactionStatus::Completed => write!(f, "completed"),
            TransactionStatus::Failed => write!(f, "error"),
        }
    }
}

/// A PIX transfer from an account to a destination key.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub account_from_id: Uuid,
    pub pix_key_to_id: Uuid,
    /// Account the destination key resolved to at creation time.
    pub account_to_id: Uuid,
    pub amount: f64,
    pub description: String,
    pub status: TransactionStatus,
    /// Reason recorded when the transaction fails.
    pub cancel_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Transaction {
    /// Create a pending transaction, validating amount, description,
    /// and that the money actually moves between two accounts.
    pub fn new(
        account_from: &Account,
        amount: f64,
        key_to: &PixKey,
        description: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let description = description.into();
        if !amount.is_finite() || amount <= 0.0 {
            return Err(ValidationError::NonPositiveAmount);
        }
        if description.trim().is_empty() {
            return Err(ValidationError::EmptyField("description"));
        }
        if key_to.account_id == account_from.id {
            return Err(ValidationError::SameAccount);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            account_from_id: account_from.id,
            pix_key_to_id: key_to.id,
            account_to_id: key_to.account_id,
            amount,
            description,
            status: TransactionStatus::Pending,
            cancel_reason: None,
            created_at: Utc::now(),
            updated_at: None,
        })
    }

    /// The destination bank acknowledged the transaction.
    pub fn confirm(&mut self) -> Result<(), TransitionError> {
        self.transition(TransactionStatus::Confirmed, &[TransactionStatus::Pending])
    }

    /// The source bank settled a confirmed transaction.
    pub fn complete(&mut self) -> Result<(), TransitionError> {
        self.transition(TransactionStatus::Completed, &[TransactionStatus::Confirmed])
    }

    /// Abort an open transaction, recording why.
    pub fn fail(&mut self, reason: impl Into<String>) -> Result<(), TransitionError> {
        self.transition(
            TransactionStatus::Failed,
            &[TransactionStatus::Pending, TransactionStatus::Confirmed],
        )?;
        self.cancel_reason = Some(reason.into());
        Ok(())
    }

    fn transition(
        &mut self,
        to: TransactionStatus,
        allowed_from: &[TransactionStatus],
    ) -> Result<(), TransitionError> {
        if !allowed_from.contains(&self.status) {
            return Err(TransitionError {
                from: self.status,
                to,
            });
        }
        self.status = to;
        self.updated_at = Some(Utc::now());
        Ok(())
    }
}
