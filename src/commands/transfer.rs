use crate::commands::session::Session;
use crate::data;
use crate::models::{Route, TransferDraft, TransferReceipt, TransferStep};
use crate::services::transfer_service;
use crate::utils::{format_baht, CommandError, Table, TransferError};

const USAGE: &str = "Usage: `$transfer [status|contacts|pick <id>|tag <@paytag>|amount <value>|quick <amount>|memo <text>|pin <digits>|next|back|send|cancel]`";

pub async fn execute(session: &mut Session, args: &[&str]) -> Result<String, CommandError> {
    session.navigate(Route::Transfer);

    let sub = args.first().map(|s| s.to_lowercase()).unwrap_or_else(|| "status".to_string());
    let rest = if args.len() > 1 { &args[1..] } else { &[][..] };
    let draft = std::mem::take(&mut session.draft);

    let (draft, output) = match sub.as_str() {
        "status" => (draft, None),
        "contacts" => {
            session.draft = draft;
            return Ok(render_contacts());
        }
        "pick" => {
            let draft = require_step(draft, TransferStep::Recipient, session)?;
            let id = first_arg(rest, "Usage: `$transfer pick <contact id>`", session, &draft)?;
            match data::find_contact(id) {
                Some(contact) => (transfer_service::select_contact(draft, contact), None),
                None => {
                    session.draft = draft;
                    return Err(CommandError::InvalidArgument(format!(
                        "❌ No contact with id '{}'. Use `$transfer contacts` to list them",
                        id
                    )));
                }
            }
        }
        "tag" => {
            let draft = require_step(draft, TransferStep::Recipient, session)?;
            let tag = first_arg(rest, "Usage: `$transfer tag <@paytag>`", session, &draft)?;
            (transfer_service::set_pay_tag(draft, tag), None)
        }
        "amount" => {
            let draft = require_step(draft, TransferStep::Amount, session)?;
            let raw = first_arg(rest, "Usage: `$transfer amount <value>`", session, &draft)?;
            (transfer_service::set_amount(draft, raw), None)
        }
        "quick" => {
            let draft = require_step(draft, TransferStep::Amount, session)?;
            let preset = rest
                .first()
                .and_then(|s| s.parse::<u32>().ok())
                .filter(|n| data::QUICK_AMOUNTS.contains(n));
            match preset {
                Some(n) => (transfer_service::apply_quick_amount(draft, n), None),
                None => {
                    session.draft = draft;
                    return Err(CommandError::InvalidArgument(format!(
                        "❌ Quick amount must be one of {:?}",
                        data::QUICK_AMOUNTS
                    )));
                }
            }
        }
        "memo" => {
            let draft = require_step(draft, TransferStep::Amount, session)?;
            (transfer_service::set_memo(draft, &rest.join(" ")), None)
        }
        "pin" => {
            let draft = require_step(draft, TransferStep::Confirm, session)?;
            let pin = first_arg(rest, "Usage: `$transfer pin <6 digits>`", session, &draft)?;
            (transfer_service::set_pin(draft, pin), None)
        }
        "next" => match draft.step {
            TransferStep::Recipient => (transfer_service::submit_recipient(draft), None),
            TransferStep::Amount => (transfer_service::submit_amount(draft), None),
            TransferStep::Confirm => {
                session.draft = draft;
                return Err(CommandError::Usage(
                    "Use `$transfer send` to confirm the transfer".to_string(),
                ));
            }
        },
        "back" => (transfer_service::back(draft), None),
        "send" => {
            let (draft, result) = session.transfers.submit(draft).await;
            match result {
                Ok(receipt) => (draft, Some(render_receipt(&receipt))),
                // Validation and balance errors are already on the draft and render inline
                Err(TransferError::Validation(_)) | Err(TransferError::InsufficientBalance) => {
                    (draft, None)
                }
                Err(e) => {
                    session.draft = draft;
                    return Err(e.into());
                }
            }
        }
        "cancel" => (TransferDraft::default(), None),
        _ => {
            session.draft = draft;
            return Err(CommandError::Usage(USAGE.to_string()));
        }
    };

    let view = render_draft(&draft);
    session.draft = draft;

    Ok(match output {
        Some(receipt) => format!("{}\n\n{}", receipt, view),
        None => view,
    })
}

/// Put the draft back and refuse when the input does not belong to the current step
fn require_step(
    draft: TransferDraft,
    step: TransferStep,
    session: &mut Session,
) -> Result<TransferDraft, CommandError> {
    if draft.step == step {
        Ok(draft)
    } else {
        let current = draft.step;
        session.draft = draft;
        Err(CommandError::Usage(format!(
            "That input belongs to the {} step; you are on the {} step",
            step.as_str(),
            current.as_str()
        )))
    }
}

fn first_arg<'a>(
    rest: &[&'a str],
    usage: &str,
    session: &mut Session,
    draft: &TransferDraft,
) -> Result<&'a str, CommandError> {
    match rest.first() {
        Some(arg) => Ok(arg),
        None => {
            session.draft = draft.clone();
            Err(CommandError::Usage(usage.to_string()))
        }
    }
}

fn progress(step: TransferStep) -> String {
    [TransferStep::Recipient, TransferStep::Amount, TransferStep::Confirm]
        .iter()
        .map(|s| {
            if *s == step {
                format!("[{}]", s.number())
            } else if s.number() < step.number() {
                format!("({})", s.number())
            } else {
                format!(" {} ", s.number())
            }
        })
        .collect::<Vec<_>>()
        .join("──")
}

pub fn render_draft(draft: &TransferDraft) -> String {
    let mut out = format!("💸 PayWise Transfer   {}\n", progress(draft.step));

    for error in &draft.errors {
        out.push_str(&format!("⚠️ {}\n", error.message));
    }

    match draft.step {
        TransferStep::Recipient => {
            out.push_str("Step 1: choose a recipient\n");
            out.push_str(&format!(
                "PayTag: {}\n",
                if draft.pay_tag.is_empty() { "-" } else { draft.pay_tag.as_str() }
            ));
            if let Some(contact) = &draft.contact {
                out.push_str(&format!("Selected: {} ({})\n", contact.name, contact.pay_tag));
            }
            out.push_str("Pick a contact with `$transfer pick <id>` or type `$transfer tag <@paytag>`, then `$transfer next`");
        }
        TransferStep::Amount => {
            out.push_str(&format!("Step 2: amount to {}\n", draft.recipient_label()));
            out.push_str(&format!(
                "Amount: {}\n",
                if draft.amount.is_empty() { "-" } else { draft.amount.as_str() }
            ));
            if !draft.memo.is_empty() {
                out.push_str(&format!("Memo: {}\n", draft.memo));
            }
            let presets: Vec<String> = data::QUICK_AMOUNTS.iter().map(|n| format_baht(*n as f64)).collect();
            out.push_str(&format!("Quick amounts: {}\n", presets.join("  ")));
            out.push_str("Set `$transfer amount <value>` (and optionally `$transfer memo <text>`), then `$transfer next`");
        }
        TransferStep::Confirm => {
            let amount = transfer_service::parse_amount(&draft.amount).unwrap_or_default();
            out.push_str("Step 3: confirm\n");
            out.push_str(&format!("To:     {} ({})\n", draft.recipient_label(), draft.pay_tag));
            out.push_str(&format!("Amount: {}\n", format_baht(amount)));
            out.push_str("Fee:    Free\n");
            if !draft.memo.is_empty() {
                out.push_str(&format!("Memo:   {}\n", draft.memo));
            }
            out.push_str(&format!("Total:  {}\n", format_baht(amount)));
            out.push_str(&format!("PIN:    {}\n", "•".repeat(draft.pin.chars().count())));
            out.push_str("Enter `$transfer pin <6 digits>` and `$transfer send`, or `$transfer back`");
        }
    }

    out
}

fn render_contacts() -> String {
    let mut table = Table::new(vec!["ID", "Name", "PayTag", "Frequent"]);
    for contact in data::contacts() {
        table.add_row(vec![
            contact.id.clone(),
            contact.name.clone(),
            contact.pay_tag.clone(),
            if contact.is_frequent { "★".to_string() } else { String::new() },
        ]);
    }
    format!("👥 Recent recipients\n{}", table.render())
}

fn render_receipt(receipt: &TransferReceipt) -> String {
    let mut out = String::from("✅ Transfer successful!\n");
    out.push_str(&format!("To:        {} ({})\n", receipt.recipient, receipt.pay_tag));
    out.push_str(&format!("Amount:    {}\n", format_baht(receipt.amount)));
    if let Some(memo) = &receipt.memo {
        out.push_str(&format!("Memo:      {}\n", memo));
    }
    out.push_str(&format!("Reference: {}", receipt.reference));
    out
}
