//! Command module
//!
//! Describes the commands available at the directory prompt.

use variantly;

/// Commands that can be executed from the directory prompt.
#[derive(Debug, PartialEq, Eq, variantly::Variantly)]
pub enum Command {
    Filter { field: String, value: String },
    FilterClear,
    Help,
    Import(String),
    List,
    Progress,
    Quit,
    Share,
    Show(String),
    Sort { field: String, direction: Option<String> },
    Suggest,
    Toggle(String),
    Unknown,
    Unvisit(String),
    Update(String),
    Visit(String),
}

/// Parses an input string and returns a corresponding `Command` if recognized.
///
/// Sort and filter operands stay raw strings here; the handlers validate
/// them against the known fields and report problems interactively.
pub fn parse_command(input: &str) -> Command {
    let words: Vec<&str> = input.split_whitespace().collect();
    match words.as_slice() {
        ["list" | "ls"] => Command::List,
        ["show" | "info", rest @ ..] if !rest.is_empty() => Command::Show(rest.join(" ")),
        ["filter", "clear" | "reset"] => Command::FilterClear,
        ["filter", field, value] => Command::Filter {
            field: (*field).to_lowercase(),
            value: (*value).to_lowercase(),
        },
        ["sort", field] => Command::Sort {
            field: (*field).to_lowercase(),
            direction: None,
        },
        ["sort", field, direction] => Command::Sort {
            field: (*field).to_lowercase(),
            direction: Some((*direction).to_lowercase()),
        },
        ["visit" | "check", rest @ ..] if !rest.is_empty() => Command::Visit(rest.join(" ")),
        ["unvisit" | "uncheck", rest @ ..] if !rest.is_empty() => Command::Unvisit(rest.join(" ")),
        ["toggle", rest @ ..] if !rest.is_empty() => Command::Toggle(rest.join(" ")),
        ["progress" | "visited"] => Command::Progress,
        ["share"] => Command::Share,
        ["import", token] => Command::Import((*token).to_string()),
        ["update" | "correct", rest @ ..] if !rest.is_empty() => Command::Update(rest.join(" ")),
        ["suggest"] => Command::Suggest,
        ["help" | "?"] => Command::Help,
        ["quit" | "exit"] => Command::Quit,
        _ => Command::Unknown,
    }
}
