mod contact;
mod field;
mod updatable;

pub use contact::Contact;
pub(crate) use field::BIRTHDAY_FORMAT;
pub(crate) use updatable::Updatable;

use chrono::{Datelike, Days, Local, NaiveDate};

use std::collections::HashMap;
use std::fmt;

const UPCOMING_WINDOW_DAYS: u64 = 7;

#[derive(Debug, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    pub birthday: NaiveDate
}

/// In-memory contacts keyed by name. Iteration follows the order in which
/// names were first added.
pub struct AddressBook {
    contacts: HashMap<String, Contact>,
    order: Vec<String>
}

fn anniversary(date: NaiveDate, year: i32) -> Option<NaiveDate> {
    // 29.02 falls back to 28.02 outside leap years.
    NaiveDate::from_ymd_opt(year, date.month(), date.day()).or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
}

impl AddressBook {
    pub fn new() -> AddressBook {
        AddressBook { contacts: HashMap::new(), order: Vec::new() }
    }

    pub fn add_record(&mut self, contact: Contact) {
        let name = contact.get_name().to_string();
        if self.contacts.insert(name.clone(), contact).is_none() {
            self.order.push(name);
        }
    }

    pub fn find(&self, name: &str) -> Option<&Contact> {
        self.contacts.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Contact> {
        self.contacts.get_mut(name)
    }

    pub fn delete(&mut self, name: &str) {
        if self.contacts.remove(name).is_some() {
            self.order.retain(|n| n != name);
        }
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.order.iter().filter_map(|name| self.contacts.get(name))
    }

    pub fn get_upcoming_birthdays(&self) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_from(Local::now().date_naive())
    }

    /// Birthdays whose next anniversary lies in `[today, today + 7 days]`.
    /// An anniversary already past this year is looked up in the next one,
    /// so late-December queries see early-January birthdays.
    pub fn upcoming_birthdays_from(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        let Some(window_end) = today.checked_add_days(Days::new(UPCOMING_WINDOW_DAYS)) else {
            return Vec::new();
        };

        let mut upcoming: Vec<UpcomingBirthday> = self.iter()
            .filter_map(|contact| {
                let date = contact.get_birthday()?.date();
                let mut next = anniversary(date, today.year())?;
                if next < today {
                    next = anniversary(date, today.year() + 1)?;
                }
                (next <= window_end).then(|| UpcomingBirthday { name: contact.get_name().to_string(), birthday: next })
            })
            .collect();

        upcoming.sort_by(|a, b| a.birthday.cmp(&b.birthday).then_with(|| a.name.cmp(&b.name)));
        upcoming
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self.iter().map(|contact| contact.to_string()).collect();
        write!(f, "{}", lines.join("\n"))
    }
}

#[cfg(test)]
fn contact_with_birthday(name: &str, birthday: &str) -> Contact {
    let mut contact = Contact::new(name);
    contact.add_birthday(birthday).unwrap();
    contact
}

#[cfg(test)]
fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn book_methods_tests() {
    let mut book = AddressBook::new();
    assert!(book.is_empty());

    let mut john = Contact::new("John");
    let _ = john.add_phone("1234567890");
    book.add_record(john);
    book.add_record(Contact::new("Jane"));
    book.add_record(Contact::new("Adam"));
    assert_eq!(book.len(), 3);

    {
        let found = book.find("John");
        assert!(found.is_some());
        assert_eq!(found.unwrap().joined_phones(), "1234567890");
        assert!(book.find("Nobody").is_none());
    }
    {
        book.add_record(Contact::new("John"));
        assert_eq!(book.len(), 3);
        assert_eq!(book.find("John").unwrap().get_phones().len(), 0);
        let names: Vec<&str> = book.iter().map(|c| c.get_name()).collect();
        assert_eq!(names, vec!["John", "Jane", "Adam"]);
    }
    {
        book.delete("Jane");
        book.delete("Jane");
        assert_eq!(book.len(), 2);
        assert!(book.find("Jane").is_none());
        let names: Vec<&str> = book.iter().map(|c| c.get_name()).collect();
        assert_eq!(names, vec!["John", "Adam"]);
    }
    {
        let _ = book.find_mut("Adam").unwrap().add_phone("0987654321");
        assert_eq!(book.to_string(), "Contact name: John, phones: , birthday: N/A\nContact name: Adam, phones: 0987654321, birthday: N/A");
    }

    assert_eq!(AddressBook::new().to_string(), "");
}

#[test]
fn upcoming_birthdays_window() {
    let today = ymd(2024, 6, 10);
    let mut book = AddressBook::new();
    book.add_record(contact_with_birthday("Today", "10.06.1990"));
    book.add_record(contact_with_birthday("Week", "17.06.1985"));
    book.add_record(contact_with_birthday("EightDays", "18.06.1985"));
    book.add_record(contact_with_birthday("Yesterday", "09.06.2000"));
    book.add_record(contact_with_birthday("Tomorrow", "11.06.2000"));
    book.add_record(Contact::new("NoBirthday"));

    let upcoming = book.upcoming_birthdays_from(today);
    assert_eq!(upcoming, vec![
        UpcomingBirthday { name: "Today".to_string(), birthday: ymd(2024, 6, 10) },
        UpcomingBirthday { name: "Tomorrow".to_string(), birthday: ymd(2024, 6, 11) },
        UpcomingBirthday { name: "Week".to_string(), birthday: ymd(2024, 6, 17) },
    ]);
}

#[test]
fn upcoming_birthdays_across_new_year() {
    let mut book = AddressBook::new();
    book.add_record(contact_with_birthday("January", "02.01.1990"));
    book.add_record(contact_with_birthday("December", "31.12.1990"));
    book.add_record(contact_with_birthday("TooLate", "06.01.1990"));

    let upcoming = book.upcoming_birthdays_from(ymd(2024, 12, 29));
    assert_eq!(upcoming, vec![
        UpcomingBirthday { name: "December".to_string(), birthday: ymd(2024, 12, 31) },
        UpcomingBirthday { name: "January".to_string(), birthday: ymd(2025, 1, 2) },
    ]);
}

#[test]
fn upcoming_leap_day_birthday() {
    let mut book = AddressBook::new();
    book.add_record(contact_with_birthday("Leap", "29.02.2000"));

    let upcoming = book.upcoming_birthdays_from(ymd(2023, 2, 25));
    assert_eq!(upcoming, vec![UpcomingBirthday { name: "Leap".to_string(), birthday: ymd(2023, 2, 28) }]);

    let upcoming = book.upcoming_birthdays_from(ymd(2024, 2, 25));
    assert_eq!(upcoming, vec![UpcomingBirthday { name: "Leap".to_string(), birthday: ymd(2024, 2, 29) }]);
}

#[test]
fn upcoming_birthdays_relative_to_local_today() {
    let today = Local::now().date_naive();
    let mut book = AddressBook::new();
    book.add_record(contact_with_birthday("Now", &format!("{:02}.{:02}.2000", today.day(), today.month())));

    let names: Vec<String> = book.get_upcoming_birthdays().into_iter().map(|u| u.name).collect();
    assert!(names.contains(&"Now".to_string()));
}
