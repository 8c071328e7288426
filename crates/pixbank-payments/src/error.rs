//! Error type for payment flows.

use thiserror::Error;

use pixbank_core::{RepositoryError, TransitionError, ValidationError};

/// Anything a payment flow can fail with.
#[derive(Debug, Error)]
pub enum PaymentError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Transition(#[from] TransitionError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
