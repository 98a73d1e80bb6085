use thiserror::Error;

/// Failures a command can run into. The display text of every variant is
/// exactly what gets printed back to the user.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BotError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Not enough arguments for '{command}': expected {expected}, got {got}.")]
    MissingArguments { command: String, expected: usize, got: usize },
}

pub type BotResult<T> = Result<T, BotError>;

#[test]
fn error_messages() {
    assert_eq!(BotError::Validation("Phone number must be 10 digits.".to_string()).to_string(), "Phone number must be 10 digits.");
    assert_eq!(BotError::NotFound("Phone number not found".to_string()).to_string(), "Phone number not found");
    let err = BotError::MissingArguments { command: "add".to_string(), expected: 2, got: 1 };
    assert_eq!(err.to_string(), "Not enough arguments for 'add': expected 2, got 1.");
}
