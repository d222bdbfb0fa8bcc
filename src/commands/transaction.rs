use crate::commands::session::Session;
use crate::data;
use crate::models::{DetailLookup, Direction, Route, Transaction};
use crate::services::detail_service;
use crate::utils::{format_baht, Align, CommandError, Table};

pub async fn execute(session: &mut Session, args: &[&str]) -> Result<String, CommandError> {
    let id = args
        .first()
        .ok_or_else(|| CommandError::Usage(USAGE.to_string()))?;
    let view = match args.get(1).map(|a| a.to_lowercase()).as_deref() {
        None => View::Detail,
        Some("receipt") => View::Receipt,
        Some("json") => View::Json,
        Some(_) => return Err(CommandError::Usage(USAGE.to_string())),
    };

    session.navigate(Route::TransactionDetail(id.to_string()));

    match detail_service::find_transaction(data::all_transactions(), id) {
        DetailLookup::Found(tx) => match view {
            View::Detail => Ok(render_detail(&tx)),
            View::Receipt => Ok(render_receipt(&tx)),
            View::Json => Ok(serde_json::to_string_pretty(&tx)?),
        },
        DetailLookup::NotFound { id } => Ok(render_not_found(&id)),
    }
}

const USAGE: &str = "Usage: `$tx <transaction id> [receipt|json]`";

enum View {
    Detail,
    Receipt,
    Json,
}

pub fn render_detail(tx: &Transaction) -> String {
    let (title, party_label) = match tx.direction {
        Direction::Outgoing => ("💸 Money sent", "To"),
        Direction::Incoming => ("💰 Money received", "From"),
    };

    let mut out = format!("📜 Transaction {}\n{}\n", tx.id, title);
    out.push_str(&format!("Amount:    {}\n", format_baht(tx.amount)));
    out.push_str(&format!("{:<10} {} ({})\n", format!("{}:", party_label), tx.counterparty_name(), tx.pay_tag));
    out.push_str(&format!("Status:    {}\n", tx.status));
    out.push_str(&format!("Date:      {} ({})\n", tx.date_label, tx.timestamp.format("%Y-%m-%d %H:%M")));
    if let Some(memo) = &tx.memo {
        out.push_str(&format!("Memo:      {}\n", memo));
    }
    if let Some(category) = &tx.category {
        out.push_str(&format!("Category:  {}\n", category));
    }
    out.push_str(&format!("Fee:       {}\n", detail_service::fee_label(tx)));
    if let Some(reference) = &tx.reference {
        out.push_str(&format!("Reference: {}\n", reference));
    }
    out.push_str("Back to the dashboard: `$open /home`");
    out
}

/// Printable transfer receipt
pub fn render_receipt(tx: &Transaction) -> String {
    let party_label = match tx.direction {
        Direction::Outgoing => "Recipient:",
        Direction::Incoming => "Sender:",
    };

    let mut table = Table::new(vec!["PayWise Transfer Receipt", ""]).align(1, Align::Right);
    table.add_row(vec!["Transaction ID:".to_string(), tx.id.clone()]);
    table.add_row(vec![
        "Reference ID:".to_string(),
        tx.reference.clone().unwrap_or_else(|| "-".to_string()),
    ]);
    table.add_row(vec![party_label.to_string(), tx.counterparty_name().to_string()]);
    table.add_row(vec!["PayTag:".to_string(), tx.pay_tag.clone()]);
    table.add_row(vec!["Amount:".to_string(), format_baht(tx.amount)]);
    table.add_row(vec!["Date:".to_string(), tx.date_label.clone()]);
    table.add_row(vec!["Status:".to_string(), tx.status.to_string()]);

    format!("🧾 Receipt\n{}", table.render())
}

fn render_not_found(id: &str) -> String {
    format!(
        "🔍 Transaction not found\nNo transaction with id '{}' exists.\nBack to the dashboard: `$open /home`",
        id
    )
}
