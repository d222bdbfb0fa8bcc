use chrono::{NaiveDate, NaiveDateTime};
use lazy_static::lazy_static;
use tracing::warn;

use crate::models::{Category, Counterparty, Direction, Status, Transaction};

lazy_static! {
    static ref TRANSACTIONS: Vec<Transaction> = build_transactions();
}

/// Local wall-clock time; an impossible date falls back to the epoch
fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .unwrap_or_default()
}

/// One row of mock data, before it becomes a `Transaction`
struct Record {
    id: &'static str,
    counterparty: Counterparty,
    pay_tag: &'static str,
    amount: f64,
    label: &'static str,
    timestamp: NaiveDateTime,
    status: Status,
    memo: &'static str,
    category: Category,
    reference: &'static str,
}

fn outgoing(name: &str) -> Counterparty {
    Counterparty::Recipient(name.to_string())
}

fn incoming(name: &str) -> Counterparty {
    Counterparty::Sender(name.to_string())
}

impl Record {
    fn build(self) -> Result<Transaction, String> {
        let direction = match self.counterparty {
            Counterparty::Recipient(_) => Direction::Outgoing,
            Counterparty::Sender(_) => Direction::Incoming,
        };
        let tx = Transaction::new(
            self.id,
            direction,
            self.counterparty,
            self.pay_tag,
            self.amount,
            self.timestamp,
            self.status,
        )?;
        Ok(tx
            .with_date_label(self.label)
            .with_memo(self.memo)
            .with_category(self.category)
            .with_reference(self.reference))
    }
}

fn build_transactions() -> Vec<Transaction> {
    let records = vec![
        Record {
            id: "TXN001",
            counterparty: outgoing("สมชาย ใจดี"),
            pay_tag: "@somchai123",
            amount: 500.0,
            label: "วันนี้ 14:30",
            timestamp: at(2025, 6, 19, 14, 30),
            status: Status::Completed,
            memo: "ค่าอาหารเที่ยง",
            category: Category::Food,
            reference: "REF001234567",
        },
        Record {
            id: "TXN002",
            counterparty: incoming("นิดา สวยงาม"),
            pay_tag: "@nida456",
            amount: 1200.0,
            label: "เมื่อวาน 19:45",
            timestamp: at(2025, 6, 18, 19, 45),
            status: Status::Completed,
            memo: "คืนเงินค่าหนัง",
            category: Category::Entertainment,
            reference: "REF001234568",
        },
        Record {
            id: "TXN003",
            counterparty: outgoing("ประยุทธ์ มั่นคง"),
            pay_tag: "@prayuth789",
            amount: 2500.0,
            label: "2 วันที่แล้ว",
            timestamp: at(2025, 6, 17, 10, 0),
            status: Status::Completed,
            memo: "ค่าเช่าบ้าน",
            category: Category::Bills,
            reference: "REF001234569",
        },
        Record {
            id: "TXN004",
            counterparty: outgoing("มาลี ใจงาม"),
            pay_tag: "@malee999",
            amount: 850.0,
            label: "3 วันที่แล้ว",
            timestamp: at(2025, 6, 16, 8, 15),
            status: Status::Completed,
            memo: "ค่าแท็กซี่",
            category: Category::Transport,
            reference: "REF001234570",
        },
        Record {
            id: "TXN005",
            counterparty: incoming("บริษัท ABC จำกัด"),
            pay_tag: "@abc_company",
            amount: 25000.0,
            label: "1 สัปดาห์ที่แล้ว",
            timestamp: at(2025, 6, 12, 9, 0),
            status: Status::Completed,
            memo: "เงินเดือนเดือนมิถุนายน",
            category: Category::Other,
            reference: "REF001234571",
        },
        Record {
            id: "TXN006",
            counterparty: outgoing("ร้านกาแฟดี"),
            pay_tag: "@coffee_dee",
            amount: 120.0,
            label: "1 สัปดาห์ที่แล้ว",
            timestamp: at(2025, 6, 12, 7, 30),
            status: Status::Failed,
            memo: "กาแฟเอสเปรสโซ",
            category: Category::Food,
            reference: "REF001234572",
        },
        Record {
            id: "TXN007",
            counterparty: outgoing("โลตัส"),
            pay_tag: "@lotus_store",
            amount: 1580.0,
            label: "2 สัปดาห์ที่แล้ว",
            timestamp: at(2025, 6, 5, 16, 20),
            status: Status::Completed,
            memo: "ซื้อของใช้ในบ้าน",
            category: Category::Shopping,
            reference: "REF001234573",
        },
        Record {
            id: "TXN008",
            counterparty: outgoing("Netflix"),
            pay_tag: "@netflix_th",
            amount: 349.0,
            label: "3 สัปดาห์ที่แล้ว",
            timestamp: at(2025, 5, 29, 12, 0),
            status: Status::Pending,
            memo: "ค่าสมาชิก Netflix",
            category: Category::Entertainment,
            reference: "REF001234574",
        },
    ];

    records
        .into_iter()
        .map(Record::build)
        .filter_map(|record| match record {
            Ok(t) => Some(t),
            Err(e) => {
                warn!("Skipping malformed mock transaction: {}", e);
                None
            }
        })
        .collect()
}

/// Every known transaction, in source order (unsorted)
pub fn all_transactions() -> &'static [Transaction] {
    &TRANSACTIONS
}

/// The three most recent transactions, newest first
pub fn recent_transactions() -> Vec<Transaction> {
    let mut recent = TRANSACTIONS.clone();
    recent.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    recent.truncate(3);
    recent
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_records_load() {
        let all = all_transactions();
        assert_eq!(all.len(), 8);
        assert_eq!(all[0].id, "TXN001");
        assert!(all.iter().all(|t| t.amount > 0.0 && t.fee == 0.0));
    }

    #[test]
    fn test_ids_are_unique() {
        let mut ids: Vec<&str> = all_transactions().iter().map(|t| t.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), all_transactions().len());
    }

    #[test]
    fn test_recent_transactions_are_newest_three() {
        let recent = recent_transactions();
        let ids: Vec<&str> = recent.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["TXN001", "TXN002", "TXN003"]);
    }
}
