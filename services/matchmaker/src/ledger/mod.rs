//! Request ledger module
//!
//! Contains the waiting queue and the request store built on top of it.

pub mod waiting_queue;
pub mod request_ledger;

pub use waiting_queue::WaitingQueue;
pub use request_ledger::{LedgerSubmit, RequestLedger};
