use crate::commands::session::Session;
use crate::models::Route;
use crate::services::home_service;
use crate::utils::{Align, CommandError, Table};

pub async fn execute(session: &mut Session, args: &[&str]) -> Result<String, CommandError> {
    session.navigate(Route::Home);

    match args.first().map(|s| s.to_lowercase()).as_deref() {
        None => {}
        Some("show") => session.show_balance = true,
        Some("hide") => session.show_balance = false,
        Some(_) => return Err(CommandError::Usage("Usage: `$home [show|hide]`".to_string())),
    }

    Ok(render(session.show_balance))
}

pub fn render(show_balance: bool) -> String {
    let board = home_service::dashboard(show_balance);

    let mut out = String::from("🏠 PayWise\n");
    out.push_str(&format!("Available balance: {}\n\n", board.balance));
    out.push_str("Quick actions: `$open /transfer`  `$open /history`\n\n");
    out.push_str("Recent transactions\n");

    let mut table = Table::new(vec!["ID", "Date", "Name", "Amount"]).align(3, Align::Right);
    for tx in &board.recent {
        table.add_row(vec![
            tx.id.clone(),
            tx.date_label.clone(),
            tx.counterparty_name().to_string(),
            tx.signed_amount(),
        ]);
    }
    out.push_str(&table.render());
    out.push_str("View one with `$tx <id>`");
    out
}
