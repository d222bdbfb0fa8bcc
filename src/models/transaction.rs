//! Transaction models

use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Whether money was received or sent by the account holder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Incoming,
    Outgoing,
}

/// Settlement status of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Completed,
    Pending,
    Failed,
}

/// Spending category attached to a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Transport,
    Shopping,
    Bills,
    Entertainment,
    Other,
}

/// The other party of a transaction. Outgoing transactions name a recipient,
/// incoming ones a sender.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Counterparty {
    Recipient(String),
    Sender(String),
}

impl Counterparty {
    pub fn name(&self) -> &str {
        match self {
            Counterparty::Recipient(name) | Counterparty::Sender(name) => name,
        }
    }

    fn matches(&self, direction: Direction) -> bool {
        matches!(
            (self, direction),
            (Counterparty::Recipient(_), Direction::Outgoing)
                | (Counterparty::Sender(_), Direction::Incoming)
        )
    }
}

/// A single historical money movement
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    pub id: String,
    pub direction: Direction,
    pub counterparty: Counterparty,
    pub pay_tag: String,
    pub amount: f64,
    pub memo: Option<String>,
    pub date_label: String,
    pub timestamp: NaiveDateTime,
    pub status: Status,
    pub category: Option<Category>,
    pub reference: Option<String>,
    pub fee: f64,
}

impl Transaction {
    /// Build a transaction, refusing a counterparty that does not fit the direction
    /// or a non-positive amount.
    ///
    /// The display date defaults to the timestamp; mock data overrides it with
    /// `with_date_label`.
    pub fn new(
        id: &str,
        direction: Direction,
        counterparty: Counterparty,
        pay_tag: &str,
        amount: f64,
        timestamp: NaiveDateTime,
        status: Status,
    ) -> Result<Self, String> {
        if !counterparty.matches(direction) {
            return Err(format!(
                "Transaction {} has a counterparty that does not match its direction",
                id
            ));
        }
        if !(amount > 0.0) {
            return Err(format!("Transaction {} must have a positive amount", id));
        }

        Ok(Transaction {
            id: id.to_string(),
            direction,
            counterparty,
            pay_tag: pay_tag.to_string(),
            amount,
            memo: None,
            date_label: timestamp.format("%Y-%m-%d %H:%M").to_string(),
            timestamp,
            status,
            category: None,
            reference: None,
            fee: 0.0,
        })
    }

    pub fn with_date_label(mut self, label: &str) -> Self {
        self.date_label = label.to_string();
        self
    }

    pub fn with_memo(mut self, memo: &str) -> Self {
        self.memo = Some(memo.to_string());
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_reference(mut self, reference: &str) -> Self {
        self.reference = Some(reference.to_string());
        self
    }

    pub fn counterparty_name(&self) -> &str {
        self.counterparty.name()
    }

    pub fn recipient(&self) -> Option<&str> {
        match &self.counterparty {
            Counterparty::Recipient(name) => Some(name),
            Counterparty::Sender(_) => None,
        }
    }

    pub fn sender(&self) -> Option<&str> {
        match &self.counterparty {
            Counterparty::Sender(name) => Some(name),
            Counterparty::Recipient(_) => None,
        }
    }

    /// Amount with a sign prefix as shown in lists
    pub fn signed_amount(&self) -> String {
        match self.direction {
            Direction::Incoming => format!("+{:.2}", self.amount),
            Direction::Outgoing => format!("-{:.2}", self.amount),
        }
    }
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Incoming => "incoming",
            Direction::Outgoing => "outgoing",
        }
    }
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Completed => "completed",
            Status::Pending => "pending",
            Status::Failed => "failed",
        }
    }
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Transport => "transport",
            Category::Shopping => "shopping",
            Category::Bills => "bills",
            Category::Entertainment => "entertainment",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "incoming" | "in" => Ok(Direction::Incoming),
            "outgoing" | "out" => Ok(Direction::Outgoing),
            other => Err(format!("Unknown direction '{}'", other)),
        }
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "completed" => Ok(Status::Completed),
            "pending" => Ok(Status::Pending),
            "failed" => Ok(Status::Failed),
            other => Err(format!("Unknown status '{}'", other)),
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "food" => Ok(Category::Food),
            "transport" => Ok(Category::Transport),
            "shopping" => Ok(Category::Shopping),
            "bills" => Ok(Category::Bills),
            "entertainment" => Ok(Category::Entertainment),
            "other" => Ok(Category::Other),
            other => Err(format!("Unknown category '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, day)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_counterparty_must_match_direction() {
        let bad = Transaction::new(
            "TXN900",
            Direction::Incoming,
            Counterparty::Recipient("Somchai".to_string()),
            "@somchai123",
            100.0,
            at(19),
            Status::Completed,
        );
        assert!(bad.is_err());

        let good = Transaction::new(
            "TXN901",
            Direction::Incoming,
            Counterparty::Sender("Nida".to_string()),
            "@nida456",
            100.0,
            at(19),
            Status::Completed,
        )
        .unwrap();
        assert_eq!(good.sender(), Some("Nida"));
        assert_eq!(good.recipient(), None);
        assert_eq!(good.fee, 0.0);
        assert_eq!(good.date_label, "2025-06-19 12:00");
        assert_eq!(good.with_date_label("today").date_label, "today");
    }

    #[test]
    fn test_amount_must_be_positive() {
        let zero = Transaction::new(
            "TXN902",
            Direction::Outgoing,
            Counterparty::Recipient("Malee".to_string()),
            "@malee999",
            0.0,
            at(19),
            Status::Pending,
        );
        assert!(zero.is_err());
    }

    #[test]
    fn test_enum_parsing() {
        assert_eq!("OUT".parse::<Direction>().unwrap(), Direction::Outgoing);
        assert_eq!("pending".parse::<Status>().unwrap(), Status::Pending);
        assert_eq!("Bills".parse::<Category>().unwrap(), Category::Bills);
        assert!("sideways".parse::<Direction>().is_err());
    }
}
