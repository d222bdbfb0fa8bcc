//! Transaction history: filter/search pipeline, totals and the simulated fetch

use chrono::{Duration as ChronoDuration, NaiveDateTime};
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::Config;
use crate::data;
use crate::models::{DateRange, Direction, HistoryQuery, HistorySummary, Status, Transaction};
use crate::utils::{HistoryError, OutcomeSource};

/// Whether a record falls inside `range` as seen from `now`
fn in_date_range(timestamp: NaiveDateTime, range: DateRange, now: NaiveDateTime) -> bool {
    match range {
        DateRange::All => true,
        DateRange::Today => timestamp.date() == now.date(),
        DateRange::Week => timestamp >= now - ChronoDuration::days(7),
        DateRange::Month => timestamp >= now - ChronoDuration::days(30),
    }
}

/// Case-insensitive match of an already lowercased needle against the searchable fields
fn matches_search(tx: &Transaction, needle: &str) -> bool {
    let contains = |field: &str| field.to_lowercase().contains(needle);

    contains(tx.counterparty_name())
        || contains(&tx.pay_tag)
        || tx.memo.as_deref().is_some_and(contains)
        || tx.reference.as_deref().is_some_and(contains)
}

/// Derive the displayed list from the full set.
///
/// Direction, status, category and date range narrow the set in turn, then the
/// search text, and the survivors are sorted newest first. The sort is stable,
/// so records with equal timestamps keep their source order.
pub fn filter_transactions(
    all: &[Transaction],
    query: &HistoryQuery,
    now: NaiveDateTime,
) -> Vec<Transaction> {
    let filters = &query.filters;
    let needle = query.search.to_lowercase();

    let mut filtered: Vec<Transaction> = all
        .iter()
        .filter(|t| filters.direction.accepts(&t.direction))
        .filter(|t| filters.status.accepts(&t.status))
        .filter(|t| filters.category.accepts_opt(t.category.as_ref()))
        .filter(|t| in_date_range(t.timestamp, filters.date_range, now))
        .filter(|t| needle.is_empty() || matches_search(t, &needle))
        .cloned()
        .collect();

    filtered.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    debug!("History filter kept {} of {} transactions", filtered.len(), all.len());
    filtered
}

/// Totals over completed records only
pub fn summarize(transactions: &[Transaction]) -> HistorySummary {
    let completed_total = |direction: Direction| -> f64 {
        transactions
            .iter()
            .filter(|t| t.direction == direction && t.status == Status::Completed)
            .map(|t| t.amount)
            .sum()
    };

    HistorySummary {
        incoming_total: completed_total(Direction::Incoming),
        outgoing_total: completed_total(Direction::Outgoing),
        count: transactions.len(),
    }
}

/// Simulated fetch of the transaction list
pub struct HistoryService {
    delay: Duration,
    failure_rate: f64,
    outcomes: Box<dyn OutcomeSource>,
}

impl HistoryService {
    pub fn new(config: &Config, outcomes: Box<dyn OutcomeSource>) -> Self {
        Self {
            delay: config.load_delay,
            failure_rate: config.load_failure_rate,
            outcomes,
        }
    }

    /// Wait out the fake latency, then either fail or hand back every transaction
    pub async fn load(&mut self) -> Result<Vec<Transaction>, HistoryError> {
        tokio::time::sleep(self.delay).await;

        if self.outcomes.fails(self.failure_rate) {
            warn!("Simulated history load failure");
            return Err(HistoryError::LoadFailed);
        }

        let all = data::all_transactions().to_vec();
        debug!("Loaded {} transactions", all.len());
        Ok(all)
    }
}
