pub mod basin;
pub mod diagnostic;
pub mod error;
pub mod polymer;
pub mod sonar;

pub use error::SolveError;

/// Runs one part (1 or 2) of a day against the puzzle input.
pub type Solver = fn(u8, &str) -> Result<String, SolveError>;

pub fn solver(day: u8) -> Option<Solver> {
    let solver: Solver = match day {
        1 => sonar::solve,
        3 => diagnostic::solve,
        9 => basin::solve,
        14 => polymer::solve,
        _ => return None
    };
    Some(solver)
}
