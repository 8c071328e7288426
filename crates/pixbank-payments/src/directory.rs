//! Bank, account, and key registration.

use tracing::debug;
use uuid::Uuid;

use pixbank_core::{Account, Bank, KeyKind, PixKey, PixKeyRepository};
use pixbank_storage::InMemoryPixKeyRepository;

use crate::error::PaymentError;

type Result<T> = std::result::Result<T, PaymentError>;

/// Registration and lookup over the PIX key directory.
pub struct KeyDirectory<R: PixKeyRepository> {
    repository: R,
}

impl KeyDirectory<InMemoryPixKeyRepository> {
    /// A directory over in-memory storage.
    pub fn in_memory() -> Self {
        Self::new(InMemoryPixKeyRepository::new())
    }
}

impl<R: PixKeyRepository> KeyDirectory<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Create and persist a bank.
    pub fn register_bank(&mut self, code: &str, name: &str) -> Result<Bank> {
        let bank = Bank::new(code, name)?;
        self.repository.add_bank(bank.clone())?;
        debug!(bank = %bank.id, code, "registered bank");
        Ok(bank)
    }

    /// Create and persist an account at an already registered bank.
    pub fn register_account(
        &mut self,
        bank: &Bank,
        number: &str,
        owner_name: &str,
    ) -> Result<Account> {
        let account = Account::new(bank, number, owner_name)?;
        self.repository.add_account(account.clone())?;
        debug!(account = %account.id, bank = %bank.id, "registered account");
        Ok(account)
    }

    /// Validate and register a key for an existing account.
    pub fn register_key(&mut self, kind: KeyKind, value: &str, account_id: Uuid) -> Result<PixKey> {
        let account = self.repository.find_account(account_id)?;
        let key = PixKey::new(kind, &account, value)?;
        let key = self.repository.register_key(key)?;
        debug!(key = %key.id, kind = %kind, account = %account_id, "registered pix key");
        Ok(key)
    }

    pub fn find_key(&self, value: &str, kind: KeyKind) -> Result<PixKey> {
        Ok(self.repository.find_key(value, kind)?)
    }

    pub fn find_account(&self, id: Uuid) -> Result<Account> {
        Ok(self.repository.find_account(id)?)
    }

    /// Hand the underlying repository on, e.g. to a
    /// [`crate::PaymentProcessor`] after seeding.
    pub fn into_repository(self) -> R {
        self.repository
    }
}
