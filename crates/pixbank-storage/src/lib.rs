//! In-memory storage for pixbank.
//!
//! HashMap-backed implementations of the `pixbank-core` repository
//! traits, suitable for tests, demos, and single-process use. Anything
//! durable belongs behind the same traits in a separate crate.

pub mod memory;

pub use memory::{InMemoryPixKeyRepository, InMemoryTransactionRepository};
