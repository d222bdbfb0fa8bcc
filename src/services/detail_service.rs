use tracing::debug;

use crate::models::{DetailLookup, Transaction};

/// Look up a transaction by id. An unknown id is an ordinary `NotFound`.
pub fn find_transaction(all: &[Transaction], id: &str) -> DetailLookup {
    match all.iter().find(|t| t.id == id.trim()) {
        Some(tx) => DetailLookup::Found(tx.clone()),
        None => {
            debug!("Transaction {} not found", id);
            DetailLookup::NotFound { id: id.to_string() }
        }
    }
}

/// Fee line for the detail view; transfers are free unless the data says otherwise
pub fn fee_label(tx: &Transaction) -> String {
    if tx.fee > 0.0 {
        crate::utils::format_baht(tx.fee)
    } else {
        "Free".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;

    #[test]
    fn test_found() {
        match find_transaction(data::all_transactions(), "TXN003") {
            DetailLookup::Found(tx) => {
                assert_eq!(tx.amount, 2500.0);
                assert_eq!(tx.recipient(), Some("ประยุทธ์ มั่นคง"));
                assert_eq!(fee_label(&tx), "Free");
            }
            other => panic!("expected TXN003, got {:?}", other),
        }
    }

    #[test]
    fn test_not_found_is_not_an_error() {
        let lookup = find_transaction(data::all_transactions(), "INVALID_ID");
        assert_eq!(
            lookup,
            DetailLookup::NotFound {
                id: "INVALID_ID".to_string()
            }
        );
        assert!(!lookup.is_found());
    }

    #[test]
    fn test_empty_source() {
        assert!(!find_transaction(&[], "TXN001").is_found());
    }
}
