//! Payment flows for pixbank.
//!
//! [`KeyDirectory`] registers banks, accounts, and PIX keys;
//! [`PaymentProcessor`] drives transactions through their lifecycle.
//! Both are generic over the repository traits in `pixbank-core` and
//! come with in-memory constructors for tests and standalone use.

pub mod directory;
pub mod error;
pub mod processor;

pub use directory::KeyDirectory;
pub use error::PaymentError;
pub use processor::PaymentProcessor;
