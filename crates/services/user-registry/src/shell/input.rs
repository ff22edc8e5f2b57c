//! Parsing of the free-text answers typed at the prompt.

use std::str::FromStr;

use thiserror::Error;

/// Malformed console input. Never reaches the service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("{field} must be a number")]
    NotANumber { field: &'static str },

    #[error("Option {0} does not exist")]
    UnknownOption(i64),
}

/// Entries of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Create,
    Show,
    List,
    Update,
    Delete,
    Exit,
}

impl MenuOption {
    /// Parse the number typed at the main menu.
    pub fn parse(text: &str) -> Result<Self, InputError> {
        match parse_number::<i64>(text, "Menu option")? {
            1 => Ok(MenuOption::Create),
            2 => Ok(MenuOption::Show),
            3 => Ok(MenuOption::List),
            4 => Ok(MenuOption::Update),
            5 => Ok(MenuOption::Delete),
            0 => Ok(MenuOption::Exit),
            other => Err(InputError::UnknownOption(other)),
        }
    }
}

/// Parse a whole-number field, ignoring surrounding whitespace.
pub fn parse_number<T: FromStr>(text: &str, field: &'static str) -> Result<T, InputError> {
    text.trim()
        .parse()
        .map_err(|_| InputError::NotANumber { field })
}

/// Parse an optional replacement value: blank keeps the current one.
pub fn parse_optional_number<T: FromStr>(
    text: &str,
    field: &'static str,
) -> Result<Option<T>, InputError> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    parse_number(text, field).map(Some)
}
