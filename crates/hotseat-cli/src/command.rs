//! Input line parsing.

use hotseat_core::Square;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}' (type 'help' for a list)")]
    Unknown(String),
}

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// A square was picked; forwarded to the session as a selection event.
    Select(Square),
    /// Start a new game.
    Reset,
    /// List the legal moves of the side to move.
    Moves,
    Help,
    Quit,
    /// Blank line.
    Empty,
}

impl Command {
    /// Parses a line of input.
    pub fn parse(input: &str) -> Result<Self, CommandError> {
        let input = input.trim();
        match input.to_ascii_lowercase().as_str() {
            "" => Ok(Command::Empty),
            "reset" | "new" => Ok(Command::Reset),
            "moves" => Ok(Command::Moves),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => other
                .parse::<Square>()
                .map(Command::Select)
                .map_err(|_| CommandError::Unknown(input.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_squares() {
        assert_eq!(
            Command::parse("e2\n"),
            Ok(Command::Select(Square::from_algebraic("e2").unwrap()))
        );
        assert_eq!(
            Command::parse("  H8 "),
            Ok(Command::Select(Square::from_algebraic("h8").unwrap()))
        );
    }

    #[test]
    fn parse_keywords() {
        assert_eq!(Command::parse("reset"), Ok(Command::Reset));
        assert_eq!(Command::parse("NEW"), Ok(Command::Reset));
        assert_eq!(Command::parse("moves"), Ok(Command::Moves));
        assert_eq!(Command::parse("?"), Ok(Command::Help));
        assert_eq!(Command::parse("quit"), Ok(Command::Quit));
        assert_eq!(Command::parse("   "), Ok(Command::Empty));
    }

    #[test]
    fn parse_unknown() {
        assert_eq!(
            Command::parse("e9"),
            Err(CommandError::Unknown("e9".to_string()))
        );
        assert_eq!(
            Command::parse("castle"),
            Err(CommandError::Unknown("castle".to_string()))
        );
    }
}
