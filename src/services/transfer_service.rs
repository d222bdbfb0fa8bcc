//! Transfer wizard: step transitions, input validation and the simulated submission
//!
//! Every transition takes the current draft by value and hands back the next
//! one, so the wizard can be driven and tested without any rendering layer.
//! Validation failures never change the step; they replace `draft.errors`.

use lazy_static::lazy_static;
use regex::Regex;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::models::{Contact, Field, FieldError, TransferDraft, TransferReceipt, TransferStep};
use crate::utils::{OutcomeSource, TransferError};

lazy_static! {
    static ref PAY_TAG_RE: Regex = Regex::new(r"^@[A-Za-z0-9_]{3,20}$").unwrap();
}

/// Largest amount a single transfer may move
pub const MAX_TRANSFER_AMOUNT: f64 = 50_000.0;

pub const PIN_LENGTH: usize = 6;

const MSG_NO_RECIPIENT: &str = "Please select a recipient or enter a PayTag";
const MSG_BAD_PAY_TAG: &str = "PayTag must be @ followed by 3-20 letters, digits or underscores";
const MSG_NO_AMOUNT: &str = "Please enter an amount";
const MSG_BAD_AMOUNT: &str = "Amount must be greater than ฿0 and no more than ฿50,000";
const MSG_BAD_PIN: &str = "Please enter your 6-digit PIN";
const MSG_INSUFFICIENT: &str = "Insufficient balance";

/// Whether `tag` is a well-formed PayTag
pub fn validate_pay_tag(tag: &str) -> bool {
    PAY_TAG_RE.is_match(tag)
}

/// Parse a raw amount, accepting only finite values in `(0, 50000]`.
/// Surrounding whitespace is ignored; anything else after the number is not.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let value = raw.trim().parse::<f64>().ok()?;
    if value.is_finite() && value > 0.0 && value <= MAX_TRANSFER_AMOUNT {
        Some(value)
    } else {
        None
    }
}

/// Move to `step`, dropping errors left over from the previous one
pub fn enter_step(mut draft: TransferDraft, step: TransferStep) -> TransferDraft {
    debug!("Transfer wizard: {} -> {}", draft.step.as_str(), step.as_str());
    draft.step = step;
    draft.errors.clear();
    draft
}

fn reject(mut draft: TransferDraft, errors: Vec<FieldError>) -> TransferDraft {
    debug!("Transfer wizard: {} step rejected ({} error(s))", draft.step.as_str(), errors.len());
    draft.errors = errors;
    draft
}

/// Pick a saved contact; its PayTag fills the tag field
pub fn select_contact(mut draft: TransferDraft, contact: &Contact) -> TransferDraft {
    draft.pay_tag = contact.pay_tag.clone();
    draft.contact = Some(contact.clone());
    draft
}

/// Type a PayTag by hand. The input is kept as typed, so stray whitespace fails the
/// recipient gate. A previously picked contact is dropped once the tag no longer matches it.
pub fn set_pay_tag(mut draft: TransferDraft, tag: &str) -> TransferDraft {
    draft.pay_tag = tag.to_string();
    if draft
        .contact
        .as_ref()
        .is_some_and(|c| c.pay_tag != draft.pay_tag)
    {
        draft.contact = None;
    }
    draft
}

pub fn set_amount(mut draft: TransferDraft, raw: &str) -> TransferDraft {
    draft.amount = raw.to_string();
    draft
}

/// Fill the amount from one of the preset buttons
pub fn apply_quick_amount(draft: TransferDraft, amount: u32) -> TransferDraft {
    set_amount(draft, &amount.to_string())
}

pub fn set_memo(mut draft: TransferDraft, memo: &str) -> TransferDraft {
    draft.memo = memo.trim().to_string();
    draft
}

pub fn set_pin(mut draft: TransferDraft, pin: &str) -> TransferDraft {
    draft.pin = pin.to_string();
    draft
}

/// Recipient step: needs a contact or a tag, and any tag given must be well formed
pub fn submit_recipient(draft: TransferDraft) -> TransferDraft {
    if draft.step != TransferStep::Recipient {
        return draft;
    }

    let mut errors = Vec::new();
    if draft.contact.is_none() && draft.pay_tag.is_empty() {
        errors.push(FieldError::new(Field::Recipient, MSG_NO_RECIPIENT));
    }
    if !draft.pay_tag.is_empty() && !validate_pay_tag(&draft.pay_tag) {
        errors.push(FieldError::new(Field::PayTag, MSG_BAD_PAY_TAG));
    }

    if errors.is_empty() {
        enter_step(draft, TransferStep::Amount)
    } else {
        reject(draft, errors)
    }
}

/// Amount step: the amount must be present and within limits
pub fn submit_amount(draft: TransferDraft) -> TransferDraft {
    if draft.step != TransferStep::Amount {
        return draft;
    }

    if draft.amount.is_empty() {
        return reject(draft, vec![FieldError::new(Field::Amount, MSG_NO_AMOUNT)]);
    }
    if parse_amount(&draft.amount).is_none() {
        return reject(draft, vec![FieldError::new(Field::Amount, MSG_BAD_AMOUNT)]);
    }

    enter_step(draft, TransferStep::Confirm)
}

/// Confirm step: check the PIN and mark the draft busy.
///
/// Only the PIN length is checked, never its digits.
pub fn begin_submission(mut draft: TransferDraft) -> Result<TransferDraft, TransferError> {
    if draft.step != TransferStep::Confirm || draft.is_submitting {
        return Err(TransferError::NotSubmittable);
    }

    if draft.pin.chars().count() != PIN_LENGTH {
        return Ok(reject(draft, vec![FieldError::new(Field::Pin, MSG_BAD_PIN)]));
    }

    draft.errors.clear();
    draft.is_submitting = true;
    Ok(draft)
}

/// Settle a busy draft. Success hands back a receipt and a fresh draft;
/// failure keeps everything on the confirm step with a single error.
pub fn complete_submission(
    mut draft: TransferDraft,
    failed: bool,
) -> (TransferDraft, Result<TransferReceipt, TransferError>) {
    draft.is_submitting = false;

    if failed {
        draft.errors = vec![FieldError::new(Field::Transfer, MSG_INSUFFICIENT)];
        return (draft, Err(TransferError::InsufficientBalance));
    }

    let receipt = TransferReceipt {
        reference: uuid::Uuid::new_v4().to_string(),
        recipient: draft.recipient_label().to_string(),
        pay_tag: draft.pay_tag.clone(),
        amount: parse_amount(&draft.amount).unwrap_or_default(),
        memo: Some(draft.memo.clone()).filter(|m| !m.is_empty()),
        fee: 0.0,
    };

    (TransferDraft::default(), Ok(receipt))
}

/// Step back through the wizard. Ignored while a submission is in flight.
pub fn back(draft: TransferDraft) -> TransferDraft {
    if draft.is_submitting {
        return draft;
    }

    match draft.step {
        TransferStep::Confirm => enter_step(draft, TransferStep::Amount),
        TransferStep::Amount => enter_step(draft, TransferStep::Recipient),
        TransferStep::Recipient => draft,
    }
}

/// Runs the simulated submission: fixed delay, then a random chance of failure
pub struct TransferService {
    delay: Duration,
    failure_rate: f64,
    outcomes: Box<dyn OutcomeSource>,
}

impl TransferService {
    pub fn new(config: &Config, outcomes: Box<dyn OutcomeSource>) -> Self {
        Self {
            delay: config.submit_delay,
            failure_rate: config.submit_failure_rate,
            outcomes,
        }
    }

    /// Send the draft from the confirm step.
    ///
    /// A PIN error comes back as `TransferError::Validation` with the draft still on
    /// the confirm step. Nothing is recorded anywhere on success.
    pub async fn submit(
        &mut self,
        draft: TransferDraft,
    ) -> (TransferDraft, Result<TransferReceipt, TransferError>) {
        let draft = match begin_submission(draft.clone()) {
            Ok(d) if d.is_submitting => d,
            Ok(rejected) => {
                let errors = rejected.errors.clone();
                return (rejected, Err(TransferError::Validation(errors)));
            }
            Err(e) => return (draft, Err(e)),
        };

        debug!("Submitting transfer to {} ({})", draft.recipient_label(), draft.amount);
        tokio::time::sleep(self.delay).await;

        let failed = self.outcomes.fails(self.failure_rate);
        let (draft, result) = complete_submission(draft, failed);

        match &result {
            Ok(receipt) => info!(
                "Transfer of {:.2} to {} succeeded (ref {})",
                receipt.amount, receipt.pay_tag, receipt.reference
            ),
            Err(e) => warn!("Transfer failed: {}", e),
        }

        (draft, result)
    }
}
