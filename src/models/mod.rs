//! Data models for PayWise views and services
//!
//! Records loaded from the static data source, the transfer draft threaded
//! through the wizard, and the filter state of the history view.

pub mod contact;
pub mod detail;
pub mod history;
pub mod route;
pub mod transaction;
pub mod transfer;

// Re-export commonly used types for convenience
pub use contact::Contact;
pub use detail::DetailLookup;
pub use history::{DateRange, Filter, FilterState, HistoryQuery, HistorySummary};
pub use route::Route;
pub use transaction::{Category, Counterparty, Direction, Status, Transaction};
pub use transfer::{Field, FieldError, TransferDraft, TransferReceipt, TransferStep};
