use crate::error::SolveError;

pub fn parse_depths(input: &str) -> Result<Vec<u64>, SolveError> {
    input.trim().lines().enumerate().map(|(ix, line)|
        line.trim().parse().map_err(|source| SolveError::BadNumber {line: ix + 1, text: line.to_owned(), source})
    ).collect()
}

/// How often a sliding window's sum beats the previous window's sum.
/// Neighbouring windows share all but their outer elements, so only those are compared.
pub fn count_increases(depths: &[u64], window: usize) -> usize {
    depths.iter().zip(depths.iter().skip(window)).filter(|(prev, next)| next > prev).count()
}

pub fn solve(part: u8, input: &str) -> Result<String, SolveError> {
    let window = match part {
        1 => 1,
        2 => 3,
        _ => return Err(SolveError::BadPart(part))
    };
    Ok(count_increases(&parse_depths(input)?, window).to_string())
}
