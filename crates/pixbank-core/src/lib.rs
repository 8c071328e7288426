//! PIX domain model for pixbank.
//!
//! Entities with validating constructors, the transaction status state
//! machine, and the repository traits the storage and payments layers
//! build on.

pub mod account;
pub mod bank;
pub mod error;
pub mod pix_key;
pub mod repository;
pub mod transaction;
pub mod user;

mod validate;

pub use account::Account;
pub use bank::Bank;
pub use error::{RepositoryError, TransitionError, ValidationError};
pub use pix_key::{KeyKind, KeyStatus, PixKey};
pub use repository::{PixKeyRepository, TransactionRepository};
pub use transaction::{Transaction, TransactionStatus};
pub use user::User;
