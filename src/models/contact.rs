//! Contact models

use serde::Serialize;

/// A saved transfer recipient shown as a shortcut in the transfer wizard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub pay_tag: String,
    pub is_frequent: bool,
}

impl Contact {
    pub fn new(id: &str, name: &str, pay_tag: &str, is_frequent: bool) -> Self {
        Contact {
            id: id.to_string(),
            name: name.to_string(),
            pay_tag: pay_tag.to_string(),
            is_frequent,
        }
    }
}
