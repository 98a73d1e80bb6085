use crate::error::{BotError, BotResult};

use chrono::NaiveDate;

use std::fmt;

pub(crate) const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

const PHONE_LENGTH: usize = 10;
const PHONE_ERROR: &str = "Phone number must be 10 digits.";
const BIRTHDAY_ERROR: &str = "Invalid date format. Use DD.MM.YYYY";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Name {
    value: String
}

impl Name {
    pub fn new(value: &str) -> Self {
        Name { value: value.to_string() }
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Phone {
    value: String
}

impl Phone {
    pub fn new(value: &str) -> BotResult<Self> {
        if value.chars().count() != PHONE_LENGTH || !value.chars().all(|c| c.is_ascii_digit()) {
            return Err(BotError::Validation(PHONE_ERROR.to_string()));
        }

        Ok(Phone { value: value.to_string() })
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Birthday {
    value: NaiveDate
}

impl Birthday {
    /// Accepts only `DD.MM.YYYY`. chrono alone is lenient about field widths
    /// (it takes `1.6.1990` too), so the shape is checked before parsing.
    pub fn new(value: &str) -> BotResult<Self> {
        let bytes = value.as_bytes();
        let well_shaped = bytes.len() == 10 && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'.',
            _ => b.is_ascii_digit()
        });

        if !well_shaped {
            return Err(BotError::Validation(BIRTHDAY_ERROR.to_string()));
        }

        match NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT) {
            Ok(date) => Ok(Birthday { value: date }),
            Err(_) => Err(BotError::Validation(BIRTHDAY_ERROR.to_string()))
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.value
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value.format(BIRTHDAY_FORMAT))
    }
}

#[test]
fn phone_validation() {
    for valid in ["1234567890", "0000000000", "0987654321"] {
        let phone = Phone::new(valid);
        assert!(phone.is_ok());
        assert_eq!(phone.unwrap().to_string(), valid);
    }

    for invalid in ["", "123456789", "12345678901", "12345abcde", "+123456789", "123 456 78", "١٢٣٤٥٦٧٨٩٠"] {
        assert_eq!(Phone::new(invalid), Err(BotError::Validation("Phone number must be 10 digits.".to_string())));
    }
}

#[test]
fn birthday_validation() {
    for valid in ["15.06.1990", "01.01.2000", "29.02.2024", "31.12.1999"] {
        let birthday = Birthday::new(valid);
        assert!(birthday.is_ok());
        assert_eq!(birthday.unwrap().to_string(), valid);
    }

    assert_eq!(Birthday::new("15.06.1990").unwrap().date(), NaiveDate::from_ymd_opt(1990, 6, 15).unwrap());

    for invalid in ["", "1.6.1990", "15-06-1990", "1990.06.15", "15.06.90", "32.01.2000", "29.02.2023", "aa.bb.cccc", "15.06.1990 "] {
        assert_eq!(Birthday::new(invalid), Err(BotError::Validation("Invalid date format. Use DD.MM.YYYY".to_string())));
    }
}

#[test]
fn name_is_verbatim() {
    let name = Name::new("John Smith");
    assert_eq!(name.value(), "John Smith");
    assert_eq!(name.to_string(), "John Smith");
}
