pub mod help;
pub mod history;
pub mod home;
pub mod session;
pub mod transaction;
pub mod transfer;

pub use session::Session;

use tracing::{debug, warn};

use crate::models::Route;
use crate::utils::CommandError;

/// What the input loop should do after a line has been handled
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Show(String),
    Quit,
    Ignore,
}

/// Handle one line of user input. Each command runs to completion before the
/// next line is read; errors become a message and never end the session.
pub async fn handle_line(session: &mut Session, line: &str) -> Reply {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.is_empty() {
        return Reply::Ignore;
    }

    let command = parts[0];
    let args = &parts[1..];

    let result = match command {
        "$help" | "$h" => Ok(help::render()),
        "$open" | "$go" => open(session, args).await,
        "$home" => home::execute(session, args).await,
        "$transfer" | "$send" => transfer::execute(session, args).await,
        "$history" | "$hist" => history::execute(session, args).await,
        "$transaction" | "$tx" => transaction::execute(session, args).await,
        "$quit" | "$exit" => return Reply::Quit,
        _ if command.starts_with('$') => Err(CommandError::Usage(format!(
            "Unknown command `{}`. Type `$help` for the list",
            command
        ))),
        _ => return Reply::Ignore,
    };

    match result {
        Ok(view) => Reply::Show(view),
        Err(e) => {
            warn!("Error executing command {}: {}", command, e);
            let message = e.to_string();
            if message.starts_with('❌') {
                Reply::Show(message)
            } else {
                Reply::Show(format!("❌ {}", message))
            }
        }
    }
}

/// Navigate by path and render the page found there
async fn open(session: &mut Session, args: &[&str]) -> Result<String, CommandError> {
    let path = args
        .first()
        .ok_or_else(|| CommandError::Usage("Usage: `$open <path>`".to_string()))?;
    let route = Route::parse(path).ok_or_else(|| CommandError::UnknownRoute(path.to_string()))?;
    debug!("Opening {}", route);

    match route {
        Route::Root => {
            session.navigate(Route::Root);
            Ok(help::render_landing())
        }
        Route::Home => home::execute(session, &[]).await,
        Route::Transfer => transfer::execute(session, &[]).await,
        Route::History => history::execute(session, &[]).await,
        Route::TransactionDetail(id) => transaction::execute(session, &[id.as_str()]).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::session::test_support::session;
    use crate::models::TransferStep;
    use crate::utils::FixedOutcome;

    fn shown(reply: Reply) -> String {
        match reply {
            Reply::Show(text) => text,
            other => panic!("expected output, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_dispatch_basics() {
        let mut s = session(FixedOutcome::always_succeed(), FixedOutcome::always_succeed());
        assert_eq!(handle_line(&mut s, "   ").await, Reply::Ignore);
        assert_eq!(handle_line(&mut s, "hello there").await, Reply::Ignore);
        assert_eq!(handle_line(&mut s, "$quit").await, Reply::Quit);
        assert!(shown(handle_line(&mut s, "$help").await).contains("$transfer"));
        assert!(shown(handle_line(&mut s, "$bogus").await).starts_with("❌"));
    }

    #[tokio::test]
    async fn test_open_routes() {
        let mut s = session(FixedOutcome::always_succeed(), FixedOutcome::always_succeed());
        assert!(shown(handle_line(&mut s, "$open /").await).contains("Welcome"));
        assert!(shown(handle_line(&mut s, "$open /home").await).contains("Available balance"));
        assert!(shown(handle_line(&mut s, "$open /history").await).contains("Transaction History"));
        assert!(shown(handle_line(&mut s, "$open /transaction/TXN005").await).contains("25,000.00"));
        assert!(shown(handle_line(&mut s, "$open /transaction/INVALID_ID").await).contains("not found"));
        assert!(shown(handle_line(&mut s, "$open /nowhere").await).contains("Page not found"));
    }

    #[tokio::test]
    async fn test_navigating_away_abandons_transfer() {
        let mut s = session(FixedOutcome::always_succeed(), FixedOutcome::always_succeed());
        handle_line(&mut s, "$transfer pick 1").await;
        handle_line(&mut s, "$transfer next").await;
        assert_eq!(s.draft.step, TransferStep::Amount);

        handle_line(&mut s, "$open /home").await;
        let view = shown(handle_line(&mut s, "$open /transfer").await);
        assert!(view.contains("Step 1"));
        assert_eq!(s.draft.step, TransferStep::Recipient);
    }

    #[tokio::test]
    async fn test_load_error_is_reported_not_fatal() {
        let mut s = session(FixedOutcome::always_succeed(), FixedOutcome::always_fail());
        let reply = shown(handle_line(&mut s, "$history").await);
        assert!(reply.contains("Failed to load transactions"));
        assert!(shown(handle_line(&mut s, "$home").await).contains("PayWise"));
    }
}
