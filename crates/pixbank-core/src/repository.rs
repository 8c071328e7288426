//! Storage seams for the key directory and the transaction ledger.
//!
//! The payments layer is generic over these traits; `pixbank-storage`
//! provides in-memory implementations and a database-backed one can
//! slot in without touching the flows.

use uuid::Uuid;

use crate::account::Account;
use crate::bank::Bank;
use crate::error::RepositoryError;
use crate::pix_key::{KeyKind, PixKey};
use crate::transaction::Transaction;

/// Persistence contract for banks, accounts, and PIX keys.
pub trait PixKeyRepository {
    fn add_bank(&mut self, bank: Bank) -> Result<(), RepositoryError>;

    /// Persist an account. The bank it references must already exist.
    fn add_account(&mut self, account: Account) -> Result<(), RepositoryError>;

    fn find_account(&self, id: Uuid) -> Result<Account, RepositoryError>;

    /// Persist a new key. Fails with [`RepositoryError::DuplicateKey`]
    /// when the (kind, value) pair is already registered.
    fn register_key(&mut self, key: PixKey) -> Result<PixKey, RepositoryError>;

    fn find_key(&self, value: &str, kind: KeyKind) -> Result<PixKey, RepositoryError>;
}

/// Persistence contract for transactions.
pub trait TransactionRepository {
    /// Persist a newly created transaction.
    fn register(&mut self, transaction: Transaction) -> Result<(), RepositoryError>;

    /// Persist the new state of an already registered transaction.
    fn save(&mut self, transaction: &Transaction) -> Result<(), RepositoryError>;

    fn find(&self, id: Uuid) -> Result<Transaction, RepositoryError>;
}
