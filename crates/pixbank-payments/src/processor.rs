//! Transaction lifecycle flows.

use tracing::{info, warn};
use uuid::Uuid;

use pixbank_core::{KeyKind, PixKeyRepository, Transaction, TransactionRepository};
use pixbank_storage::{InMemoryPixKeyRepository, InMemoryTransactionRepository};

use crate::error::PaymentError;

type Result<T> = std::result::Result<T, PaymentError>;

/// Drives PIX transactions from registration through confirmation and
/// completion, or into the failed state with a recorded reason.
///
/// Each step persists the updated transaction and returns it, so
/// callers always hold the latest state.
pub struct PaymentProcessor<K, T>
where
    K: PixKeyRepository,
    T: TransactionRepository,
{
    keys: K,
    transactions: T,
}

impl PaymentProcessor<InMemoryPixKeyRepository, InMemoryTransactionRepository> {
    /// A processor over fresh in-memory repositories.
    pub fn in_memory() -> Self {
        Self::new(
            InMemoryPixKeyRepository::new(),
            InMemoryTransactionRepository::new(),
        )
    }
}

impl<K, T> PaymentProcessor<K, T>
where
    K: PixKeyRepository,
    T: TransactionRepository,
{
    pub fn new(keys: K, transactions: T) -> Self {
        Self { keys, transactions }
    }

    /// Resolve the parties and persist a new pending transaction.
    pub fn register(
        &mut self,
        account_from_id: Uuid,
        amount: f64,
        key_value: &str,
        key_kind: KeyKind,
        description: &str,
    ) -> Result<Transaction> {
        let account_from = self.keys.find_account(account_from_id)?;
        let key_to = self.keys.find_key(key_value, key_kind)?;

        let transaction = Transaction::new(&account_from, amount, &key_to, description)?;
        self.transactions.register(transaction.clone())?;
        info!(transaction = %transaction.id, amount, "transaction registered");
        Ok(transaction)
    }

    /// The destination bank acknowledged the transaction.
    pub fn confirm(&mut self, id: Uuid) -> Result<Transaction> {
        let mut transaction = self.load(id)?;
        transaction.confirm()?;
        self.transactions.save(&transaction)?;
        info!(transaction = %id, "transaction confirmed");
        Ok(transaction)
    }

    /// The source bank settled the transaction.
    pub fn complete(&mut self, id: Uuid) -> Result<Transaction> {
        let mut transaction = self.load(id)?;
        transaction.complete()?;
        self.transactions.save(&transaction)?;
        info!(transaction = %id, "transaction completed");
        Ok(transaction)
    }

    /// Abort an open transaction, recording the reason.
    pub fn fail(&mut self, id: Uuid, reason: &str) -> Result<Transaction> {
        let mut transaction = self.load(id)?;
        transaction.fail(reason)?;
        self.transactions.save(&transaction)?;
        warn!(transaction = %id, reason, "transaction failed");
        Ok(transaction)
    }

    /// Latest persisted state of a transaction.
    pub fn find(&self, id: Uuid) -> Result<Transaction> {
        self.load(id)
    }

    fn load(&self, id: Uuid) -> Result<Transaction> {
        self.transactions.find(id).map_err(|err| {
            warn!(transaction = %id, "transaction lookup failed");
            err.into()
        })
    }
}
