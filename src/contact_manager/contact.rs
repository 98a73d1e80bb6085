use crate::contact_manager::field::{Birthday, Name, Phone};
use crate::contact_manager::updatable::Updatable;
use crate::error::{BotError, BotResult};

use std::fmt;

#[derive(Clone, Debug)]
pub struct Contact {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>
}

impl Contact {
    pub fn new(name: &str) -> Self {
        Contact { name: Name::new(name), phones: Vec::new(), birthday: None }
    }

    pub fn get_name(&self) -> &str {
        self.name.value()
    }

    #[cfg(test)]
    pub fn get_phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn get_birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    pub fn joined_phones(&self) -> String {
        self.phones.iter().map(|p| p.value()).collect::<Vec<_>>().join(", ")
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contact name: {}, phones: {}, birthday: ", self.name, self.joined_phones())?;
        match &self.birthday {
            Some(birthday) => write!(f, "{}", birthday),
            None => write!(f, "N/A")
        }
    }
}

impl Updatable for Contact {
    fn add_phone(&mut self, phone: &str) -> BotResult<()> {
        self.phones.push(Phone::new(phone)?);
        Ok(())
    }

    fn remove_phone(&mut self, phone: &str) {
        self.phones.retain(|p| p.value() != phone);
    }

    fn edit_phone(&mut self, old_phone: &str, new_phone: &str) -> BotResult<()> {
        match self.phones.iter_mut().find(|p| p.value() == old_phone) {
            Some(slot) => {
                *slot = Phone::new(new_phone)?;
                Ok(())
            }
            None => Err(BotError::NotFound("Phone number not found".to_string()))
        }
    }

    fn add_birthday(&mut self, birthday: &str) -> BotResult<()> {
        self.birthday = Some(Birthday::new(birthday)?);
        Ok(())
    }
}

#[test]
fn phones_keep_insertion_order_and_duplicates() {
    let mut contact = Contact::new("John");
    assert!(contact.add_phone("1234567890").is_ok());
    assert!(contact.add_phone("0987654321").is_ok());
    assert!(contact.add_phone("1234567890").is_ok());
    assert_eq!(contact.joined_phones(), "1234567890, 0987654321, 1234567890");

    assert!(contact.add_phone("12345").is_err());
    assert_eq!(contact.get_phones().len(), 3);

    contact.remove_phone("1234567890");
    assert_eq!(contact.joined_phones(), "0987654321");
    contact.remove_phone("5555555555");
    assert_eq!(contact.joined_phones(), "0987654321");
    assert_eq!(contact.get_phones().len(), 1);
}

#[test]
fn edit_phone_test() {
    {
        let mut contact = Contact::new("John");
        let _ = contact.add_phone("1111111111");
        assert!(contact.edit_phone("1111111111", "2222222222").is_ok());
        assert_eq!(contact.joined_phones(), "2222222222");
    }
    {
        let mut contact = Contact::new("John");
        let _ = contact.add_phone("1111111111");
        assert_eq!(contact.edit_phone("9999999999", "2222222222"), Err(BotError::NotFound("Phone number not found".to_string())));
        assert_eq!(contact.joined_phones(), "1111111111");
    }
    {
        let mut contact = Contact::new("John");
        let _ = contact.add_phone("1111111111");
        let _ = contact.add_phone("1111111111");
        assert!(contact.edit_phone("1111111111", "2222222222").is_ok());
        assert_eq!(contact.joined_phones(), "2222222222, 1111111111");
        assert!(contact.edit_phone("1111111111", "222").is_err());
        assert_eq!(contact.joined_phones(), "2222222222, 1111111111");
    }
}

#[test]
fn display_test() {
    let mut contact = Contact::new("John");
    assert_eq!(contact.to_string(), "Contact name: John, phones: , birthday: N/A");

    let _ = contact.add_phone("1234567890");
    let _ = contact.add_phone("0987654321");
    assert!(contact.add_birthday("15.06.1990").is_ok());
    assert_eq!(contact.to_string(), "Contact name: John, phones: 1234567890, 0987654321, birthday: 15.06.1990");

    assert!(contact.add_birthday("1990-06-15").is_err());
    assert!(contact.add_birthday("01.01.2001").is_ok());
    assert_eq!(contact.get_birthday().map(|b| b.to_string()), Some("01.01.2001".to_string()));
}
