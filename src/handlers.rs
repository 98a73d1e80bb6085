use crate::cli::CommandType;
use crate::contact_manager::{AddressBook, Contact, Updatable, BIRTHDAY_FORMAT};
use crate::error::{BotError, BotResult};
use crate::reporting::logger::Logger;

pub const GREETING: &str = "How can I help you?";
pub const FAREWELL: &str = "Good bye!";
pub const INVALID_COMMAND: &str = "Invalid command.";

const CONTACT_NOT_FOUND: &str = "Contact not found.";

/// Wraps a handler so that any `BotError` it returns becomes the reply text
/// instead of escaping to the command loop.
pub fn input_error<F>(handler: F) -> impl Fn(&[String], &mut AddressBook, &mut Logger) -> String
where
    F: Fn(&[String], &mut AddressBook) -> BotResult<String>
{
    move |args: &[String], book: &mut AddressBook, logger: &mut Logger| {
        match handler(args, book) {
            Ok(reply) => reply,
            Err(e) => {
                logger.error("handlers", e.to_string());
                e.to_string()
            }
        }
    }
}

/// Leading `N` arguments of a command; anything past them is ignored.
fn require<'a, const N: usize>(command: &str, args: &'a [String]) -> BotResult<&'a [String; N]> {
    args.get(..N)
        .and_then(|head| <&[String; N]>::try_from(head).ok())
        .ok_or_else(|| BotError::MissingArguments { command: command.to_string(), expected: N, got: args.len() })
}

pub fn add_contact(args: &[String], book: &mut AddressBook) -> BotResult<String> {
    let [name, phone] = require::<2>("add", args)?;

    if let Some(contact) = book.find_mut(name) {
        contact.add_phone(phone)?;
        return Ok("Contact updated.".to_string());
    }

    let mut contact = Contact::new(name);
    contact.add_phone(phone)?;
    book.add_record(contact);
    Ok("Contact added.".to_string())
}

pub fn change_contact(args: &[String], book: &mut AddressBook) -> BotResult<String> {
    let [name, old_phone, new_phone] = require::<3>("change", args)?;

    match book.find_mut(name) {
        Some(contact) => {
            contact.edit_phone(old_phone, new_phone)?;
            Ok("Phone number updated.".to_string())
        }
        None => Ok(CONTACT_NOT_FOUND.to_string())
    }
}

pub fn show_phone(args: &[String], book: &AddressBook) -> BotResult<String> {
    let [name] = require::<1>("phone", args)?;

    match book.find(name) {
        Some(contact) => Ok(contact.joined_phones()),
        None => Ok(CONTACT_NOT_FOUND.to_string())
    }
}

pub fn show_all(book: &AddressBook) -> BotResult<String> {
    Ok(book.to_string())
}

pub fn add_birthday(args: &[String], book: &mut AddressBook) -> BotResult<String> {
    let [name, birthday] = require::<2>("add-birthday", args)?;

    match book.find_mut(name) {
        Some(contact) => {
            contact.add_birthday(birthday)?;
            Ok("Birthday added.".to_string())
        }
        None => Ok(CONTACT_NOT_FOUND.to_string())
    }
}

pub fn show_birthday(args: &[String], book: &AddressBook) -> BotResult<String> {
    let [name] = require::<1>("show-birthday", args)?;

    match book.find(name).and_then(|contact| contact.get_birthday()) {
        Some(birthday) => Ok(format!("Birthday: {}", birthday)),
        None => Ok("Birthday not found.".to_string())
    }
}

pub fn birthdays(book: &AddressBook) -> BotResult<String> {
    let upcoming = book.get_upcoming_birthdays();
    if upcoming.is_empty() {
        return Ok("No upcoming birthdays.".to_string());
    }

    let lines: Vec<String> = upcoming.iter()
        .map(|entry| format!("{} - {}", entry.name, entry.birthday.format(BIRTHDAY_FORMAT)))
        .collect();
    Ok(lines.join("\n"))
}

pub fn handle_command(cmd: CommandType, args: &[String], book: &mut AddressBook, logger: &mut Logger) -> String {
    match cmd {
        CommandType::Hello => GREETING.to_string(),
        CommandType::Add => input_error(add_contact)(args, book, logger),
        CommandType::Change => input_error(change_contact)(args, book, logger),
        CommandType::Phone => input_error(|args, book| show_phone(args, book))(args, book, logger),
        CommandType::All => input_error(|_, book| show_all(book))(args, book, logger),
        CommandType::AddBirthday => input_error(add_birthday)(args, book, logger),
        CommandType::ShowBirthday => input_error(|args, book| show_birthday(args, book))(args, book, logger),
        CommandType::Birthdays => input_error(|_, book| birthdays(book))(args, book, logger),
        CommandType::Exit => FAREWELL.to_string(),
        CommandType::Invalid => INVALID_COMMAND.to_string()
    }
}

#[cfg(test)]
fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn add_and_show_phone_scenario() {
    let mut book = AddressBook::new();
    assert_eq!(add_contact(&args(&["John", "1234567890"]), &mut book), Ok("Contact added.".to_string()));
    assert_eq!(add_contact(&args(&["John", "0987654321"]), &mut book), Ok("Contact updated.".to_string()));
    assert_eq!(show_phone(&args(&["John"]), &book), Ok("1234567890, 0987654321".to_string()));
    assert_eq!(book.len(), 1);
}

#[test]
fn add_with_invalid_phone_creates_nothing() {
    let mut book = AddressBook::new();
    assert_eq!(add_contact(&args(&["John", "123"]), &mut book), Err(BotError::Validation("Phone number must be 10 digits.".to_string())));
    assert!(book.find("John").is_none());
}

#[test]
fn change_contact_test() {
    let mut book = AddressBook::new();
    let _ = add_contact(&args(&["John", "1111111111"]), &mut book);

    assert_eq!(change_contact(&args(&["John", "1111111111", "2222222222"]), &mut book), Ok("Phone number updated.".to_string()));
    assert_eq!(show_phone(&args(&["John"]), &book), Ok("2222222222".to_string()));

    assert_eq!(change_contact(&args(&["John", "9999999999", "3333333333"]), &mut book), Err(BotError::NotFound("Phone number not found".to_string())));
    assert_eq!(change_contact(&args(&["Jane", "2222222222", "3333333333"]), &mut book), Ok("Contact not found.".to_string()));
    assert_eq!(show_phone(&args(&["John"]), &book), Ok("2222222222".to_string()));
    assert!(book.find("Jane").is_none());
}

#[test]
fn birthday_scenario() {
    let mut book = AddressBook::new();
    let _ = add_contact(&args(&["John", "1234567890"]), &mut book);

    assert_eq!(add_birthday(&args(&["John", "15.06.1990"]), &mut book), Ok("Birthday added.".to_string()));
    assert_eq!(show_birthday(&args(&["John"]), &book), Ok("Birthday: 15.06.1990".to_string()));
    assert_eq!(add_birthday(&args(&["John", "1990.06.15"]), &mut book), Err(BotError::Validation("Invalid date format. Use DD.MM.YYYY".to_string())));
    assert_eq!(show_birthday(&args(&["John"]), &book), Ok("Birthday: 15.06.1990".to_string()));

    assert_eq!(add_birthday(&args(&["Jane", "15.06.1990"]), &mut book), Ok("Contact not found.".to_string()));
    assert_eq!(show_birthday(&args(&["Jane"]), &book), Ok("Birthday not found.".to_string()));

    let _ = add_contact(&args(&["Adam", "1234567890"]), &mut book);
    assert_eq!(show_birthday(&args(&["Adam"]), &book), Ok("Birthday not found.".to_string()));
}

#[test]
fn lookups_on_missing_contact() {
    let mut book = AddressBook::new();
    assert_eq!(show_phone(&args(&["Ghost"]), &book), Ok("Contact not found.".to_string()));
    assert_eq!(change_contact(&args(&["Ghost", "1111111111", "2222222222"]), &mut book), Ok("Contact not found.".to_string()));
    assert!(book.is_empty());
}

#[test]
fn birthdays_listing() {
    use chrono::{Datelike, Local};

    let mut book = AddressBook::new();
    assert_eq!(birthdays(&book), Ok("No upcoming birthdays.".to_string()));

    let today = Local::now().date_naive();
    let _ = add_contact(&args(&["John", "1234567890"]), &mut book);
    let _ = add_birthday(&args(&["John", &format!("{:02}.{:02}.2000", today.day(), today.month())]), &mut book);
    assert_eq!(birthdays(&book), Ok(format!("John - {}", today.format("%d.%m.%Y"))));
}

#[test]
fn input_error_adapts_failures() {
    let mut book = AddressBook::new();
    let mut logger = Logger::disabled();

    let add = input_error(add_contact);
    assert_eq!(add(&args(&["John"]), &mut book, &mut logger), "Not enough arguments for 'add': expected 2, got 1.");
    assert_eq!(add(&args(&[]), &mut book, &mut logger), "Not enough arguments for 'add': expected 2, got 0.");
    assert_eq!(add(&args(&["John", "abc"]), &mut book, &mut logger), "Phone number must be 10 digits.");
    assert_eq!(add(&args(&["John", "1234567890", "ignored"]), &mut book, &mut logger), "Contact added.");

    assert_eq!(handle_command(CommandType::All, &args(&[]), &mut book, &mut logger), "Contact name: John, phones: 1234567890, birthday: N/A");
    assert_eq!(handle_command(CommandType::ShowBirthday, &args(&[]), &mut book, &mut logger), "Not enough arguments for 'show-birthday': expected 1, got 0.");
    assert_eq!(handle_command(CommandType::Hello, &args(&[]), &mut book, &mut logger), "How can I help you?");
    assert_eq!(handle_command(CommandType::Invalid, &args(&[]), &mut book, &mut logger), "Invalid command.");
}
