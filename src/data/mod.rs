//! Static in-memory data source
//!
//! Everything the app shows comes from here; the lists are built once on
//! first access and never change for the life of the process.

pub mod contacts;
pub mod transactions;

pub use contacts::{contacts, find_contact};
pub use transactions::{all_transactions, recent_transactions};

/// Balance shown on the dashboard card
pub const ACCOUNT_BALANCE: f64 = 25_847.50;

/// Preset amounts offered on the amount step
pub const QUICK_AMOUNTS: [u32; 5] = [100, 500, 1000, 2000, 5000];
