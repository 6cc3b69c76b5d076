use bitvec::prelude::*;
use itertools::Itertools;

use crate::error::SolveError;

/// Diagnostic report: equally wide rows of bits, most significant first.
#[derive(Debug)]
pub struct Report {
    width: usize,
    rows: Vec<BitVec>,
}

impl Report {
    pub fn parse(input: &str) -> Result<Report, SolveError> {
        let mut rows: Vec<BitVec> = vec![];
        for (ri, line) in input.trim().lines().enumerate() {
            let row = line.trim().chars().enumerate().map(|(ci, c)| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                found => Err(SolveError::BadChar {row: ri + 1, col: ci + 1, found})
            }).collect::<Result<BitVec, _>>()?;
            if let Some(first) = rows.first() {
                if row.len() != first.len() {
                    return Err(SolveError::RaggedRow {row: ri + 1, width: row.len(), expected: first.len()});
                }
            }
            rows.push(row);
        }
        let width = rows.first().map_or(0, |row| row.len());
        match width {
            0 => Err(SolveError::EmptyInput),
            65 .. => Err(SolveError::TooWide(width)),
            _ => Ok(Report {width, rows})
        }
    }

    /// Strict majority per column; a tied column goes to epsilon.
    pub fn gamma(&self) -> u64 {
        let rows = self.rows.iter().collect::<Vec<_>>();
        (0 .. self.width).fold(0, |acc, col| 2 * acc + (2 * ones(&rows, col) > rows.len()) as u64)
    }

    pub fn epsilon(&self) -> u64 {
        !self.gamma() & (u64::MAX >> (64 - self.width))
    }

    pub fn power_consumption(&self) -> u128 {
        self.gamma() as u128 * self.epsilon() as u128
    }

    /// Narrows the report column by column until one row is left. Oxygen keeps the
    /// most common bit, CO2 the least common one. A column every candidate agrees on
    /// cannot narrow anything and is skipped. Identical survivors share one rating.
    fn rating(&self, keep_most_common: bool, name: &'static str) -> Result<u64, SolveError> {
        let mut candidates = self.rows.iter().collect::<Vec<_>>();
        for col in 0 .. self.width {
            if candidates.iter().all_equal() {break}
            let n_ones = ones(&candidates, col);
            if n_ones == 0 || n_ones == candidates.len() {continue}
            // ties count as 1
            let keep = (2 * n_ones >= candidates.len()) == keep_most_common;
            candidates.retain(|row| row[col] == keep);
        }
        match candidates.first() {
            Some(first) if candidates.iter().all_equal() => Ok(to_number(first)),
            _ => Err(SolveError::NoRating(name))
        }
    }

    pub fn oxygen_rating(&self) -> Result<u64, SolveError> {
        self.rating(true, "oxygen generator")
    }

    pub fn co2_rating(&self) -> Result<u64, SolveError> {
        self.rating(false, "CO2 scrubber")
    }

    pub fn life_support(&self) -> Result<u128, SolveError> {
        Ok(self.oxygen_rating()? as u128 * self.co2_rating()? as u128)
    }
}

fn ones(rows: &[&BitVec], col: usize) -> usize {
    rows.iter().filter(|row| row[col]).count()
}

fn to_number(bits: &BitSlice) -> u64 {
    bits.iter().by_vals().fold(0, |acc, bit| 2 * acc + bit as u64)
}

pub fn solve(part: u8, input: &str) -> Result<String, SolveError> {
    let report = Report::parse(input)?;
    match part {
        1 => Ok(report.power_consumption().to_string()),
        2 => Ok(report.life_support()?.to_string()),
        _ => Err(SolveError::BadPart(part))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "00100
11110
10110
10111
10101
01111
00111
11100
10000
11001
00010
01010
";

    #[test]
    fn sample_answers() {
        assert_eq!(solve(1, SAMPLE).unwrap(), "198");
        assert_eq!(solve(2, SAMPLE).unwrap(), "230");
    }

    #[test]
    fn sample_rates() {
        let report = Report::parse(SAMPLE).unwrap();
        assert_eq!(report.gamma(), 0b10110);
        assert_eq!(report.epsilon(), 0b01001);
        assert_eq!(report.oxygen_rating().unwrap(), 0b10111);
        assert_eq!(report.co2_rating().unwrap(), 0b01010);
    }

    #[test]
    fn ties() {
        let report = Report::parse("10\n01\n").unwrap();
        assert_eq!(report.gamma(), 0b00);
        assert_eq!(report.epsilon(), 0b11);
        assert_eq!(report.power_consumption(), 0);
        assert_eq!(report.oxygen_rating().unwrap(), 0b10);
        assert_eq!(report.co2_rating().unwrap(), 0b01);
    }

    #[test]
    fn shared_leading_bits_are_skipped() {
        let report = Report::parse("110\n111\n101\n").unwrap();
        assert_eq!(report.oxygen_rating().unwrap(), 0b111);
        assert_eq!(report.co2_rating().unwrap(), 0b101);
    }

    #[test]
    fn duplicate_rows_share_a_rating() {
        let report = Report::parse("110\n110\n001\n").unwrap();
        assert_eq!(report.oxygen_rating().unwrap(), 0b110);
        assert_eq!(report.co2_rating().unwrap(), 0b001);

        let report = Report::parse("101\n101\n").unwrap();
        assert_eq!(report.life_support().unwrap(), 25);
    }

    #[test]
    fn wide_rows_do_not_overflow() {
        let report = Report::parse(&"10".repeat(20)).unwrap();
        assert_eq!(report.gamma(), 733007751850);
        assert_eq!(report.epsilon(), 366503875925);
        assert_eq!(solve(1, &"10".repeat(20)).unwrap(), "268650182136095589211250");
        assert_eq!(solve(2, &"10".repeat(20)).unwrap(), "537300364272191178422500");
    }

    #[test]
    fn malformed_report() {
        assert!(matches!(Report::parse("0101\n0121\n"), Err(SolveError::BadChar {row: 2, col: 3, found: '2'})));
        assert!(matches!(Report::parse("0101\n011\n"), Err(SolveError::RaggedRow {row: 2, width: 3, expected: 4})));
        assert!(matches!(Report::parse("\n"), Err(SolveError::EmptyInput)));
        assert!(matches!(Report::parse(&"1".repeat(65)), Err(SolveError::TooWide(65))));
    }
}
