//! Transaction detail models

use super::transaction::Transaction;

/// Result of looking up a transaction by id. Not finding one is a normal outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailLookup {
    Found(Transaction),
    NotFound { id: String },
}

impl DetailLookup {
    pub fn is_found(&self) -> bool {
        matches!(self, DetailLookup::Found(_))
    }
}
