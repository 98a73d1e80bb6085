use crate::contact_manager::AddressBook;
use crate::handlers;
use crate::reporting::logger::Logger;

use std::io::{self, BufRead, Write};

pub const WELCOME: &str = "Welcome to the assistant bot!";
const PROMPT: &str = "Enter a command: ";

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CommandType {
    Hello,
    Add, // name, phone
    Change, // name, old phone, new phone
    Phone, // name
    All,
    AddBirthday, // name, DD.MM.YYYY
    ShowBirthday, // name
    Birthdays,
    Exit,
    Invalid
}

impl From<&str> for CommandType {
    fn from(command: &str) -> Self {
        match command {
            "hello" => CommandType::Hello,
            "add" => CommandType::Add,
            "change" => CommandType::Change,
            "phone" => CommandType::Phone,
            "all" => CommandType::All,
            "add-birthday" => CommandType::AddBirthday,
            "show-birthday" => CommandType::ShowBirthday,
            "birthdays" => CommandType::Birthdays,
            "close" | "exit" => CommandType::Exit,
            _ => CommandType::Invalid
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SessionState {
    Running,
    Terminated
}

/// Splits a console line into the command token and its arguments.
/// An empty line yields an empty command.
pub fn parse_input(line: &str) -> (String, Vec<String>) {
    let mut tokens = line.split_whitespace().map(|t| t.to_string());
    let command = tokens.next().unwrap_or_default();
    (command, tokens.collect())
}

pub fn process_line(line: &str, book: &mut AddressBook, logger: &mut Logger) -> (String, SessionState) {
    let (command, args) = parse_input(line);
    let cmd = CommandType::from(command.as_str());
    logger.debug("cli", format!("command: {:?}, arguments: {}", cmd, args.len()));

    let reply = handlers::handle_command(cmd, &args, book, logger);
    match cmd {
        CommandType::Exit => (reply, SessionState::Terminated),
        _ => (reply, SessionState::Running)
    }
}

/// Read-dispatch-print loop. Ends on `close`/`exit` or when input runs out.
pub fn run<R: BufRead, W: Write>(mut input: R, output: &mut W, book: &mut AddressBook, logger: &mut Logger) -> io::Result<()> {
    logger.info("cli", "session started".to_string());
    writeln!(output, "{}", WELCOME)?;

    let mut state = SessionState::Running;
    while state == SessionState::Running {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let mut raw_line = Vec::new();
        if input.read_until(b'\n', &mut raw_line)? == 0 {
            writeln!(output, "{}", handlers::FAREWELL)?;
            break;
        }

        let reply = match String::from_utf8(raw_line) {
            Ok(line) => {
                let (reply, next_state) = process_line(&line, book, logger);
                state = next_state;
                reply
            }
            Err(e) => {
                logger.error("cli", format!("input line is not valid UTF-8: {}", e));
                handlers::INVALID_COMMAND.to_string()
            }
        };
        writeln!(output, "{}", reply)?;
    }

    logger.info("cli", format!("session ended with {} contact(s)", book.len()));
    Ok(())
}

#[cfg(test)]
fn run_session(script: &str) -> Vec<String> {
    run_raw_session(script.as_bytes())
}

#[cfg(test)]
fn run_raw_session(script: &[u8]) -> Vec<String> {
    let mut output = Vec::<u8>::new();
    let mut book = AddressBook::new();
    let mut logger = Logger::disabled();
    run(io::Cursor::new(script), &mut output, &mut book, &mut logger).unwrap();

    String::from_utf8(output).unwrap()
        .split(PROMPT)
        .skip(1)
        .map(|reply| reply.trim_end_matches('\n').to_string())
        .collect()
}

#[test]
fn parse_input_test() {
    assert_eq!(parse_input("  add   John 1234567890 \n"), ("add".to_string(), vec!["John".to_string(), "1234567890".to_string()]));
    assert_eq!(parse_input("all"), ("all".to_string(), vec![]));
    assert_eq!(parse_input("   \n"), (String::new(), vec![]));
}

#[test]
fn command_type_test() {
    assert_eq!(CommandType::from("add-birthday"), CommandType::AddBirthday);
    assert_eq!(CommandType::from("close"), CommandType::Exit);
    assert_eq!(CommandType::from("exit"), CommandType::Exit);
    assert_eq!(CommandType::from("ADD"), CommandType::Invalid);
    assert_eq!(CommandType::from(""), CommandType::Invalid);
}

#[test]
fn process_line_states() {
    let mut book = AddressBook::new();
    let mut logger = Logger::disabled();
    assert_eq!(process_line("hello", &mut book, &mut logger), ("How can I help you?".to_string(), SessionState::Running));
    assert_eq!(process_line("foo bar", &mut book, &mut logger), ("Invalid command.".to_string(), SessionState::Running));
    assert_eq!(process_line("", &mut book, &mut logger), ("Invalid command.".to_string(), SessionState::Running));
    assert_eq!(process_line("exit", &mut book, &mut logger), ("Good bye!".to_string(), SessionState::Terminated));
}

#[test]
fn full_session() {
    let replies = run_session("hello\nadd John 1234567890\nadd John 0987654321\nphone John\nadd-birthday John 15.06.1990\nshow-birthday John\nchange John 1234567890 1111111111\nall\nphone Jane\nadd Jane\nadd Jane 12\nunknown\nclose\nhello\n");
    assert_eq!(replies, vec![
        "How can I help you?",
        "Contact added.",
        "Contact updated.",
        "1234567890, 0987654321",
        "Birthday added.",
        "Birthday: 15.06.1990",
        "Phone number updated.",
        "Contact name: John, phones: 1111111111, 0987654321, birthday: 15.06.1990",
        "Contact not found.",
        "Not enough arguments for 'add': expected 2, got 1.",
        "Phone number must be 10 digits.",
        "Invalid command.",
        "Good bye!",
    ]);
}

#[test]
fn session_survives_undecodable_line() {
    let replies = run_raw_session(b"add John 1234567890\nadd \xff\xfe 1234567890\nphone John\nexit\n");
    assert_eq!(replies, vec!["Contact added.", "Invalid command.", "1234567890", "Good bye!"]);
}

#[test]
fn session_ends_on_end_of_input() {
    let replies = run_session("add John 1234567890\n");
    assert_eq!(replies, vec!["Contact added.", "Good bye!"]);
}

#[test]
fn session_starts_with_welcome() {
    let mut output = Vec::<u8>::new();
    run(io::Cursor::new("exit\n".as_bytes()), &mut output, &mut AddressBook::new(), &mut Logger::disabled()).unwrap();
    assert_eq!(String::from_utf8(output).unwrap(), "Welcome to the assistant bot!\nEnter a command: Good bye!\n");
}
