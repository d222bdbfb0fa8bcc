use crate::data;
use crate::models::Transaction;
use crate::utils::format_baht;

/// What the dashboard shows
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub balance: String,
    pub recent: Vec<Transaction>,
}

/// Build the dashboard, masking the balance when the user has hidden it
pub fn dashboard(show_balance: bool) -> Dashboard {
    let balance = if show_balance {
        format_baht(data::ACCOUNT_BALANCE)
    } else {
        "฿••••••".to_string()
    };

    Dashboard {
        balance,
        recent: data::recent_transactions(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_balance_masking() {
        assert_eq!(dashboard(true).balance, "฿25,847.50");
        assert_eq!(dashboard(false).balance, "฿••••••");
    }

    #[test]
    fn test_dashboard_recent() {
        let board = dashboard(true);
        assert_eq!(board.recent.len(), 3);
        assert_eq!(board.recent[0].id, "TXN001");
    }
}
