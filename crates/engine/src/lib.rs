//! Shared wallets whose spending needs approval from several owners.
//!
//! [`Store`] keeps the records, [`approval`] decides what an action does to
//! them and [`Engine`] ties the two together for the transport layer.

pub use error::EngineError;
pub use ops::{Engine, EngineBuilder};
pub use store::Store;
pub use transactions::{Transaction, TransactionStatus};
pub use wallets::Wallet;

pub mod approval;
mod error;
mod ops;
mod store;
mod transactions;
mod wallets;

type ResultEngine<T> = Result<T, EngineError>;
