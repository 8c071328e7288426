//! HashMap-backed repositories.

use std::collections::HashMap;

use tracing::{debug, trace};
use uuid::Uuid;

use pixbank_core::{
    Account, Bank, KeyKind, PixKey, PixKeyRepository, RepositoryError, Transaction,
    TransactionRepository,
};

/// In-memory key directory.
#[derive(Debug, Default)]
pub struct InMemoryPixKeyRepository {
    banks: HashMap<Uuid, Bank>,
    accounts: HashMap<Uuid, Account>,
    keys: HashMap<Uuid, PixKey>,
    /// Index from (kind, value) to key id, enforcing directory
    /// uniqueness.
    by_value: HashMap<(KeyKind, String), Uuid>,
}

impl InMemoryPixKeyRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bank_count(&self) -> usize {
        self.banks.len()
    }

    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    pub fn key_count(&self) -> usize {
        self.keys.len()
    }
}

impl PixKeyRepository for InMemoryPixKeyRepository {
    fn add_bank(&mut self, bank: Bank) -> Result<(), RepositoryError> {
        trace!(bank = %bank.id, code = %bank.code, "storing bank");
        self.banks.insert(bank.id, bank);
        Ok(())
    }

    fn add_account(&mut self, account: Account) -> Result<(), RepositoryError> {
        if !self.banks.contains_key(&account.bank_id) {
            return Err(RepositoryError::BankNotFound(account.bank_id));
        }
        trace!(account = %account.id, "storing account");
        self.accounts.insert(account.id, account);
        Ok(())
    }

    fn find_account(&self, id: Uuid) -> Result<Account, RepositoryError> {
        self.accounts
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::AccountNotFound(id))
    }

    fn register_key(&mut self, key: PixKey) -> Result<PixKey, RepositoryError> {
        if !self.accounts.contains_key(&key.account_id) {
            return Err(RepositoryError::AccountNotFound(key.account_id));
        }
        let index = (key.kind, key.value.clone());
        if self.by_value.contains_key(&index) {
            return Err(RepositoryError::DuplicateKey(key.value.clone()));
        }
        debug!(key = %key.id, kind = %key.kind, "stored pix key");
        self.by_value.insert(index, key.id);
        self.keys.insert(key.id, key.clone());
        Ok(key)
    }

    fn find_key(&self, value: &str, kind: KeyKind) -> Result<PixKey, RepositoryError> {
        self.by_value
            .get(&(kind, value.to_string()))
            .and_then(|id| self.keys.get(id))
            .cloned()
            .ok_or_else(|| RepositoryError::KeyNotFound(value.to_string()))
    }
}

/// In-memory transaction ledger.
#[derive(Debug, Default)]
pub struct InMemoryTransactionRepository {
    transactions: HashMap<Uuid, Transaction>,
}

impl InMemoryTransactionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

impl TransactionRepository for InMemoryTransactionRepository {
    fn register(&mut self, transaction: Transaction) -> Result<(), RepositoryError> {
        debug!(transaction = %transaction.id, status = %transaction.status, "stored transaction");
        self.transactions.insert(transaction.id, transaction);
        Ok(())
    }

    fn save(&mut self, transaction: &Transaction) -> Result<(), RepositoryError> {
        let Some(stored) = self.transactions.get_mut(&transaction.id) else {
            return Err(RepositoryError::TransactionNotFound(transaction.id));
        };
        trace!(transaction = %transaction.id, status = %transaction.status, "updating transaction");
        *stored = transaction.clone();
        Ok(())
    }

    fn find(&self, id: Uuid) -> Result<Transaction, RepositoryError> {
        self.transactions
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::TransactionNotFound(id))
    }
}
