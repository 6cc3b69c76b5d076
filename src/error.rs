use std::num::ParseIntError;

#[derive(thiserror::Error, Debug)]
pub enum SolveError {
    #[error("cannot parse line {line} ({text:?}) as a number: {source}")]
    BadNumber {line: usize, text: String, source: ParseIntError},

    #[error("unexpected character {found:?} at row {row}, column {col}")]
    BadChar {row: usize, col: usize, found: char},

    /// Every row of a grid or report must be as wide as the first one.
    #[error("row {row} has width {width}, expected {expected}")]
    RaggedRow {row: usize, width: usize, expected: usize},

    #[error("rows of {0} bits do not fit in a 64-bit number")]
    TooWide(usize),

    #[error("input is empty")]
    EmptyInput,

    #[error("cannot parse line {line} ({text:?}) as a rule of the form XY -> Z")]
    BadRule {line: usize, text: String},

    #[error("expected a blank line after the template, found {0:?}")]
    MissingSeparator(String),

    #[error("template {0:?} needs at least two symbols")]
    TemplateTooShort(String),

    #[error("no single number survives the {0} rating filter")]
    NoRating(&'static str),

    #[error("part {0} does not exist, expected 1 or 2")]
    BadPart(u8),
}
