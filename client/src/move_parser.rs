use std::fmt;

use tictactoe_common::games::tictactoe::Position;

const ORDINALS: [(&str, &str); 7] = [
    ("first", "1st"),
    ("second", "2nd"),
    ("third", "3rd"),
    ("fourth", "4th"),
    ("fifth", "5th"),
    ("sixth", "6th"),
    ("seventh", "7th"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Row or column could not be determined.
    Incomplete,
    /// An ordinal was followed by something other than `row` or `column`.
    UnexpectedToken(String),
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::Incomplete => write!(f, "could not find both a row and a column"),
            MoveParseError::UnexpectedToken(token) => {
                write!(f, "expected 'row' or 'column' after an ordinal, got '{}'", token)
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Extracts a zero-based position from text such as `1 2`,
/// `first row and second column` or `middle`.
pub fn parse_move(input: &str, size: usize) -> Result<Position, MoveParseError> {
    let tokens: Vec<String> = input
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
        .collect();

    let mut row = None;
    let mut col = None;

    for (i, token) in tokens.iter().enumerate() {
        if let Some(index) = ordinal_index(token, size) {
            let Some(next) = tokens.get(i + 1) else {
                continue;
            };
            match next.as_str() {
                "row" | "rows" => row = Some(index),
                "column" | "columns" | "col" | "cols" => col = Some(index),
                other => return Err(MoveParseError::UnexpectedToken(other.to_string())),
            }
        } else if token == "middle" {
            row = Some(size / 2);
            col = Some(size / 2);
        } else if let Ok(number) = token.parse::<usize>() {
            if !(1..=size).contains(&number) {
                continue;
            }
            if row.is_none() {
                row = Some(number - 1);
            } else if col.is_none() {
                col = Some(number - 1);
            }
        }
    }

    match (row, col) {
        (Some(row), Some(col)) => Ok(Position::new(row, col)),
        _ => Err(MoveParseError::Incomplete),
    }
}

fn ordinal_index(token: &str, size: usize) -> Option<usize> {
    ORDINALS
        .iter()
        .take(size)
        .position(|&(word, short)| token == word || token == short)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_numbers() {
        assert_eq!(parse_move("1 2", 3), Ok(Position::new(0, 1)));
        assert_eq!(parse_move("  7,7 ", 7), Ok(Position::new(6, 6)));
    }

    #[test]
    fn test_numbers_with_words() {
        assert_eq!(parse_move("1 row and 2 column", 3), Ok(Position::new(0, 1)));
    }

    #[test]
    fn test_ordinals() {
        assert_eq!(parse_move("first row and second column", 3), Ok(Position::new(0, 1)));
        assert_eq!(parse_move("Third column, 2nd row", 3), Ok(Position::new(1, 2)));
        assert_eq!(parse_move("fifth row fourth col", 5), Ok(Position::new(4, 3)));
    }

    #[test]
    fn test_ordinal_beyond_board_size_is_ignored() {
        assert_eq!(parse_move("fifth row first column", 3), Err(MoveParseError::Incomplete));
    }

    #[test]
    fn test_ordinal_followed_by_other_word_is_rejected() {
        assert_eq!(
            parse_move("first cell second column", 3),
            Err(MoveParseError::UnexpectedToken("cell".to_string()))
        );
    }

    #[test]
    fn test_middle() {
        assert_eq!(parse_move("middle", 3), Ok(Position::new(1, 1)));
        assert_eq!(parse_move("the middle please", 7), Ok(Position::new(3, 3)));
    }

    #[test]
    fn test_out_of_range_and_extra_numbers_are_ignored() {
        assert_eq!(parse_move("9 1 2", 3), Ok(Position::new(0, 1)));
        assert_eq!(parse_move("1 2 3", 3), Ok(Position::new(0, 1)));
    }

    #[test]
    fn test_incomplete_input() {
        assert_eq!(parse_move("", 3), Err(MoveParseError::Incomplete));
        assert_eq!(parse_move("2", 3), Err(MoveParseError::Incomplete));
        assert_eq!(parse_move("hello there", 5), Err(MoveParseError::Incomplete));
    }
}
