//! Error types for the PIX domain.

use thiserror::Error;
use uuid::Uuid;

use crate::transaction::TransactionStatus;

/// Rejected entity construction or field validation.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    #[error("invalid CPF, expected 11 digits: {0}")]
    InvalidCpf(String),

    #[error("unknown key kind: {0}")]
    UnknownKeyKind(String),

    #[error("transaction amount must be greater than zero")]
    NonPositiveAmount,

    #[error("source and destination accounts must differ")]
    SameAccount,
}

/// Rejected transaction status transition.
#[derive(Debug, Error)]
#[error("cannot move transaction from {from} to {to}")]
pub struct TransitionError {
    pub from: TransactionStatus,
    pub to: TransactionStatus,
}

/// Failure surfaced by a repository implementation.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("bank not found: {0}")]
    BankNotFound(Uuid),

    #[error("account not found: {0}")]
    AccountNotFound(Uuid),

    #[error("pix key not found: {0}")]
    KeyNotFound(String),

    #[error("pix key already registered: {0}")]
    DuplicateKey(String),

    #[error("transaction not found: {0}")]
    TransactionNotFound(Uuid),

    #[error("storage backend error: {0}")]
    Backend(String),
}
