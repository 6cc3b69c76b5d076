use arrayvec::ArrayVec;
use bitvec::prelude::*;
use itertools::Itertools;

use crate::error::SolveError;

type Cell = (usize, usize);

/// Row-major grid of heights 0-9.
#[derive(Debug)]
pub struct Heightmap {
    rows: usize,
    cols: usize,
    heights: Vec<u8>,
}

impl Heightmap {
    pub fn parse(input: &str) -> Result<Heightmap, SolveError> {
        let mut heights = vec![];
        let mut rows = 0;
        let mut cols = 0;
        for (ri, line) in input.trim().lines().enumerate() {
            let line = line.trim();
            for (ci, c) in line.chars().enumerate() {
                let Some(height) = c.to_digit(10) else {
                    return Err(SolveError::BadChar {row: ri + 1, col: ci + 1, found: c});
                };
                heights.push(height as u8);
            }
            let width = line.chars().count();
            if ri == 0 {
                cols = width;
            } else if width != cols {
                return Err(SolveError::RaggedRow {row: ri + 1, width, expected: cols});
            }
            rows += 1;
        }
        if heights.is_empty() {return Err(SolveError::EmptyInput)}
        Ok(Heightmap {rows, cols, heights})
    }

    fn height(&self, (ri, ci): Cell) -> u8 {
        self.heights[ri * self.cols + ci]
    }

    fn neighbours(&self, (ri, ci): Cell) -> ArrayVec<Cell, 4> {
        let mut cells = ArrayVec::new();
        if ri > 0 {cells.push((ri - 1, ci))}
        if ri + 1 < self.rows {cells.push((ri + 1, ci))}
        if ci > 0 {cells.push((ri, ci - 1))}
        if ci + 1 < self.cols {cells.push((ri, ci + 1))}
        cells
    }

    pub fn low_points(&self) -> impl Iterator<Item = Cell> + '_ {
        (0 .. self.rows).cartesian_product(0 .. self.cols).filter(move |&cell|
            self.neighbours(cell).iter().all(|&next| self.height(next) > self.height(cell))
        )
    }

    pub fn risk_level(&self) -> u64 {
        self.low_points().map(|cell| 1 + self.height(cell) as u64).sum()
    }

    /// Fills outward from `low` through cells below 9, marking them in `visited`.
    fn basin_size(&self, low: Cell, visited: &mut BitVec) -> usize {
        let mut stack = vec![low];
        let mut size = 0;
        while let Some(cell @ (ri, ci)) = stack.pop() {
            let ix = ri * self.cols + ci;
            if visited[ix] || self.height(cell) >= 9 {continue}
            visited.set(ix, true);
            size += 1;
            stack.extend(self.neighbours(cell).into_iter().filter(|&next| self.height(next) < 9));
        }
        size
    }

    pub fn basin_sizes(&self) -> Vec<usize> {
        let mut visited = bitvec![0; self.rows * self.cols];
        self.low_points().map(|low| self.basin_size(low, &mut visited)).collect()
    }
}

pub fn solve(part: u8, input: &str) -> Result<String, SolveError> {
    let map = Heightmap::parse(input)?;
    match part {
        1 => Ok(map.risk_level().to_string()),
        2 => Ok(map.basin_sizes().into_iter().sorted_unstable_by(|a, b| b.cmp(a))
                   .take(3).product::<usize>().to_string()),
        _ => Err(SolveError::BadPart(part))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "2199943210
3987894921
9856789892
8767896789
9899965678
";

    #[test]
    fn sample_answers() {
        assert_eq!(solve(1, SAMPLE).unwrap(), "15");
        assert_eq!(solve(2, SAMPLE).unwrap(), "1134");
    }

    #[test]
    fn sample_low_points_and_basins() {
        let map = Heightmap::parse(SAMPLE).unwrap();
        assert_eq!(map.low_points().collect::<Vec<_>>(), [(0, 1), (0, 9), (2, 2), (4, 6)]);
        assert_eq!(map.basin_sizes(), [3, 9, 14, 9]);
    }

    #[test]
    fn non_square_grid() {
        // wide and tall variants of the same two basins
        let wide = Heightmap::parse("1290\n2391\n").unwrap();
        assert_eq!(wide.low_points().collect::<Vec<_>>(), [(0, 0), (0, 3)]);
        assert_eq!(wide.basin_sizes(), [4, 2]);

        let tall = Heightmap::parse("12\n23\n99\n01\n").unwrap();
        assert_eq!(tall.low_points().collect::<Vec<_>>(), [(0, 0), (3, 0)]);
        assert_eq!(tall.basin_sizes(), [4, 2]);
        assert_eq!(solve(1, "12\n23\n99\n01\n").unwrap(), "3");
    }

    #[test]
    fn single_cell() {
        assert_eq!(solve(1, "7\n").unwrap(), "8");
        assert_eq!(solve(2, "7\n").unwrap(), "1");
    }

    #[test]
    fn malformed_grid() {
        assert!(matches!(Heightmap::parse("123\n1a3\n"), Err(SolveError::BadChar {row: 2, col: 2, found: 'a'})));
        assert!(matches!(Heightmap::parse("123\n12\n"), Err(SolveError::RaggedRow {row: 2, width: 2, expected: 3})));
        assert!(matches!(Heightmap::parse(""), Err(SolveError::EmptyInput)));
    }
}
