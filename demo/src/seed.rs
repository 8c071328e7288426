//! Seed data for the statement demo.
//!
//! Registers two banks, two accounts, and a pair of keys, then walks
//! three transactions through different lifecycle paths so the
//! statement page has something of every status to show.

use anyhow::Result;

use pixbank_core::{KeyKind, Transaction, User};
use pixbank_payments::{KeyDirectory, PaymentProcessor};
use pixbank_storage::InMemoryTransactionRepository;

/// Everything the statement page needs.
pub struct Statement {
    pub owner: User,
    pub account_number: String,
    pub bank_name: String,
    pub transactions: Vec<Transaction>,
}

pub fn run() -> Result<Statement> {
    let mut directory = KeyDirectory::in_memory();

    let nubank = directory.register_bank("260", "Nubank")?;
    let caixa = directory.register_bank("104", "Caixa Econômica Federal")?;

    let owner = User::new("Maria Silva", "maria.silva@example.com")?;
    let from = directory.register_account(&nubank, "0001-7", &owner.name)?;
    let to = directory.register_account(&caixa, "33821-0", "João Santos")?;

    directory.register_key(KeyKind::Email, "joao.santos@example.com", to.id)?;
    directory.register_key(KeyKind::Cpf, "52998224725", to.id)?;

    let mut processor = PaymentProcessor::new(
        directory.into_repository(),
        InMemoryTransactionRepository::new(),
    );

    // Settled end to end.
    let paid = processor.register(
        from.id,
        125.50,
        "joao.santos@example.com",
        KeyKind::Email,
        "Aluguel de agosto",
    )?;
    processor.confirm(paid.id)?;
    let paid = processor.complete(paid.id)?;

    // Confirmed, still waiting for settlement.
    let open = processor.register(from.id, 89.90, "52998224725", KeyKind::Cpf, "Mercado")?;
    let open = processor.confirm(open.id)?;

    // Aborted by the destination bank.
    let failed = processor.register(
        from.id,
        1200.0,
        "joao.santos@example.com",
        KeyKind::Email,
        "Notebook usado",
    )?;
    let failed = processor.fail(failed.id, "conta de destino bloqueada")?;

    Ok(Statement {
        owner,
        account_number: from.number.clone(),
        bank_name: nubank.name.clone(),
        transactions: vec![paid, open, failed],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixbank_core::TransactionStatus;

    #[test]
    fn seed_covers_every_visible_status() {
        let statement = run().unwrap();
        let statuses: Vec<_> = statement.transactions.iter().map(|tx| tx.status).collect();

        assert!(statuses.contains(&TransactionStatus::Completed));
        assert!(statuses.contains(&TransactionStatus::Confirmed));
        assert!(statuses.contains(&TransactionStatus::Failed));
    }
}
