//! Transfer wizard models

use serde::Serialize;
use std::fmt;

use super::contact::Contact;

/// Step of the transfer wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferStep {
    #[default]
    Recipient,
    Amount,
    Confirm,
}

impl TransferStep {
    /// 1-based position, used by the progress indicator
    pub fn number(&self) -> usize {
        match self {
            TransferStep::Recipient => 1,
            TransferStep::Amount => 2,
            TransferStep::Confirm => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransferStep::Recipient => "recipient",
            TransferStep::Amount => "amount",
            TransferStep::Confirm => "confirm",
        }
    }
}

/// Input field a validation message belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Recipient,
    PayTag,
    Amount,
    Pin,
    Transfer,
}

/// Inline error shown next to a wizard field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl FieldError {
    pub fn new(field: Field, message: &str) -> Self {
        FieldError {
            field,
            message: message.to_string(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// In-progress state of a transfer being composed.
///
/// The default value is the empty draft sitting on the recipient step.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TransferDraft {
    pub step: TransferStep,
    pub contact: Option<Contact>,
    pub pay_tag: String,
    pub amount: String,
    pub memo: String,
    pub pin: String,
    pub errors: Vec<FieldError>,
    pub is_submitting: bool,
}

impl TransferDraft {
    /// Name shown for the chosen recipient: contact name if one was picked, raw tag otherwise
    pub fn recipient_label(&self) -> &str {
        match &self.contact {
            Some(contact) => &contact.name,
            None => &self.pay_tag,
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Acknowledgement returned after a simulated transfer succeeds
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransferReceipt {
    pub reference: String,
    pub recipient: String,
    pub pay_tag: String,
    pub amount: f64,
    pub memo: Option<String>,
    pub fee: f64,
}
