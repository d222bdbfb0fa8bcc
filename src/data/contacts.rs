use lazy_static::lazy_static;

use crate::models::Contact;

lazy_static! {
    static ref CONTACTS: Vec<Contact> = vec![
        Contact::new("1", "สมชาย ใจดี", "@somchai123", true),
        Contact::new("2", "นิดา สวยงาม", "@nida456", true),
        Contact::new("3", "ประยุทธ์ มั่นคง", "@prayuth789", false),
        Contact::new("4", "มาลี ใจงาม", "@malee999", false),
    ];
}

/// Recent recipients offered as shortcuts on the recipient step
pub fn contacts() -> &'static [Contact] {
    &CONTACTS
}

pub fn find_contact(id: &str) -> Option<&'static Contact> {
    CONTACTS.iter().find(|c| c.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequent_contacts_come_first() {
        let list = contacts();
        assert_eq!(list.len(), 4);
        assert!(list[0].is_frequent && list[1].is_frequent);
        assert!(!list[2].is_frequent && !list[3].is_frequent);
    }

    #[test]
    fn test_find_contact() {
        assert_eq!(find_contact("2").map(|c| c.pay_tag.as_str()), Some("@nida456"));
        assert!(find_contact("99").is_none());
    }
}
