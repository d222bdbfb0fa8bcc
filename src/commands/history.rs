use crate::commands::session::Session;
use crate::models::{FilterState, HistoryQuery, HistorySummary, Route, Transaction};
use crate::services::history_service;
use crate::utils::{format_baht, Align, CommandError, Page, Table};

const USAGE: &str = "Usage: `$history [show [page]|next|prev|type <all|incoming|outgoing>|status <all|completed|pending|failed>|range <all|today|week|month>|category <all|food|transport|shopping|bills|entertainment|other>|search [text]|clear|reload]`";

pub async fn execute(session: &mut Session, args: &[&str]) -> Result<String, CommandError> {
    session.navigate(Route::History);

    let sub = args.first().map(|s| s.to_lowercase()).unwrap_or_else(|| "show".to_string());
    let rest = if args.len() > 1 { &args[1..] } else { &[][..] };
    let mut turn = Turn::Stay;

    match sub.as_str() {
        "show" | "page" => {
            if let Some(raw) = rest.first() {
                let page = raw
                    .trim_start_matches(|c: char| c.eq_ignore_ascii_case(&'p'))
                    .parse::<usize>()
                    .map_err(|_| CommandError::InvalidArgument("❌ Invalid page number".to_string()))?;
                session.history.page = page;
            }
        }
        "next" => turn = Turn::Next,
        "prev" | "previous" => turn = Turn::Previous,
        "type" | "status" | "range" | "category" => {
            let value = rest
                .first()
                .ok_or_else(|| CommandError::Usage(USAGE.to_string()))?;
            apply_filter(&mut session.history.query.filters, &sub, value)
                .map_err(|e| CommandError::InvalidArgument(format!("❌ {}", e)))?;
            session.history.page = 1;
        }
        "search" => {
            session.history.query.search = rest.join(" ");
            session.history.page = 1;
        }
        "clear" => {
            session.history.query = HistoryQuery::default();
            session.history.page = 1;
        }
        "reload" => {
            session.reload_history().await?;
        }
        _ => return Err(CommandError::Usage(USAGE.to_string())),
    }

    render(session, turn).await
}

/// Page movement requested alongside a render
#[derive(Debug, Clone, Copy, PartialEq)]
enum Turn {
    Stay,
    Next,
    Previous,
}

fn apply_filter(filters: &mut FilterState, axis: &str, value: &str) -> Result<(), String> {
    match axis {
        "type" => filters.direction = value.parse()?,
        "status" => filters.status = value.parse()?,
        "range" => filters.date_range = value.parse()?,
        "category" => filters.category = value.parse()?,
        other => return Err(format!("Unknown filter '{}'", other)),
    }
    Ok(())
}

async fn render(session: &mut Session, turn: Turn) -> Result<String, CommandError> {
    let now = session.config.now();
    let page_size = session.config.page_size;
    let query = session.history.query.clone();
    let requested_page = session.history.page.max(1);

    let all = session.ensure_history_loaded().await?;
    let filtered = history_service::filter_transactions(all, &query, now);
    let summary = history_service::summarize(&filtered);

    let mut page = Page::new(filtered, page_size);
    if let Err(e) = page.go_to(requested_page) {
        session.history.page = 1;
        return Err(CommandError::InvalidArgument(format!("❌ {}", e)));
    }

    let moved = match turn {
        Turn::Stay => true,
        Turn::Next => page.next(),
        Turn::Previous => page.previous(),
    };
    if !moved {
        return Err(CommandError::InvalidArgument(
            "❌ There is no page in that direction".to_string(),
        ));
    }
    session.history.page = page.current_page + 1;

    let mut out = String::from("📋 Transaction History\n");
    out.push_str(&describe_query(&query));
    out.push('\n');
    out.push_str(&render_summary(&summary));
    out.push('\n');

    if page.current().is_empty() {
        out.push_str("No transactions match these filters");
        return Ok(out);
    }

    out.push_str(&render_rows(page.current()));
    out.push_str(&page.footer());
    if !page.is_first() {
        out.push_str(" | `$history prev`");
    }
    if !page.is_last() {
        out.push_str(" | `$history next`");
    }
    Ok(out)
}

fn describe_query(query: &HistoryQuery) -> String {
    let f = &query.filters;
    let mut line = format!(
        "Filters: type={} status={} range={} category={}",
        f.direction, f.status, f.date_range, f.category
    );
    if !query.search.is_empty() {
        line.push_str(&format!(" search=\"{}\"", query.search));
    }
    line
}

fn render_summary(summary: &HistorySummary) -> String {
    format!(
        "{} transaction(s) | Received {} | Sent {}",
        summary.count,
        format_baht(summary.incoming_total),
        format_baht(summary.outgoing_total)
    )
}

fn render_rows(rows: &[Transaction]) -> String {
    let mut table = Table::new(vec!["ID", "Date", "Name", "PayTag", "Amount", "Status"])
        .align(4, Align::Right);
    for tx in rows {
        table.add_row(vec![
            tx.id.clone(),
            tx.date_label.clone(),
            tx.counterparty_name().to_string(),
            tx.pay_tag.clone(),
            tx.signed_amount(),
            tx.status.to_string(),
        ]);
    }
    table.render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::session::{test_support::session, LoadState};
    use crate::models::{Direction, Filter};
    use crate::utils::{FixedOutcome, HistoryError};

    async fn run(s: &mut Session, line: &str) -> Result<String, CommandError> {
        let args: Vec<&str> = line.split_whitespace().collect();
        execute(s, &args).await
    }

    #[tokio::test]
    async fn test_show_lists_everything() {
        let mut s = session(FixedOutcome::always_succeed(), FixedOutcome::always_succeed());
        let out = run(&mut s, "").await.unwrap();
        assert!(out.contains("8 transaction(s)"));
        assert!(out.contains("Received ฿26,200.00"));
        assert!(out.contains("Sent ฿5,430.00"));
        assert!(out.contains("Page 1/1 (8 total)"));
    }

    #[tokio::test]
    async fn test_filters_accumulate_and_clear() {
        let mut s = session(FixedOutcome::always_succeed(), FixedOutcome::always_succeed());
        run(&mut s, "type outgoing").await.unwrap();
        let out = run(&mut s, "status completed").await.unwrap();
        assert!(out.contains("4 transaction(s)"));
        assert_eq!(s.history.query.filters.direction, Filter::Only(Direction::Outgoing));

        let out = run(&mut s, "clear").await.unwrap();
        assert!(out.contains("8 transaction(s)"));
    }

    #[tokio::test]
    async fn test_search_and_empty_result() {
        let mut s = session(FixedOutcome::always_succeed(), FixedOutcome::always_succeed());
        let out = run(&mut s, "search coffee").await.unwrap();
        assert!(out.contains("TXN006"));
        assert!(out.contains("Sent ฿0.00"));

        let out = run(&mut s, "search zzz").await.unwrap();
        assert!(out.contains("No transactions match"));
    }

    #[tokio::test]
    async fn test_bad_filter_value() {
        let mut s = session(FixedOutcome::always_succeed(), FixedOutcome::always_succeed());
        assert!(matches!(run(&mut s, "status lost").await, Err(CommandError::InvalidArgument(_))));
        assert!(matches!(run(&mut s, "type").await, Err(CommandError::Usage(_))));
    }

    #[tokio::test]
    async fn test_paging() {
        let mut s = session(FixedOutcome::always_succeed(), FixedOutcome::always_succeed());
        s.config.page_size = 3;
        let out = run(&mut s, "show p3").await.unwrap();
        assert!(out.contains("Page 3/3 (8 total)"));
        assert!(out.contains("TXN008"));
        assert!(run(&mut s, "show 4").await.is_err());
    }

    #[tokio::test]
    async fn test_next_and_prev_pages() {
        let mut s = session(FixedOutcome::always_succeed(), FixedOutcome::always_succeed());
        s.config.page_size = 3;

        let first = run(&mut s, "show").await.unwrap();
        assert!(first.contains("Page 1/3 (8 total) | `$history next`"));
        assert!(run(&mut s, "prev").await.is_err());
        assert_eq!(s.history.page, 1);

        let second = run(&mut s, "next").await.unwrap();
        assert!(second.contains("Page 2/3 (8 total) | `$history prev` | `$history next`"));
        let third = run(&mut s, "next").await.unwrap();
        assert!(third.contains("Page 3/3"));
        assert!(!third.contains("`$history next`"));
        assert!(run(&mut s, "next").await.is_err());
        assert_eq!(s.history.page, 3);

        let back = run(&mut s, "prev").await.unwrap();
        assert!(back.contains("Page 2/3"));
        assert_eq!(s.history.page, 2);
    }

    #[tokio::test]
    async fn test_load_failure_then_reload() {
        let mut s = session(
            FixedOutcome::always_succeed(),
            FixedOutcome::sequence(&[true, false]),
        );
        let err = run(&mut s, "show").await.unwrap_err();
        assert!(matches!(err, CommandError::History(HistoryError::LoadFailed)));
        assert_eq!(s.history.load, LoadState::Failed(HistoryError::LoadFailed));

        let out = run(&mut s, "reload").await.unwrap();
        assert!(out.contains("8 transaction(s)"));
    }
}
