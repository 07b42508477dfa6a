//! Owned 2D byte grid for the map-shaped puzzles.
//!
//! Coordinates are signed so callers can probe neighbor positions without
//! wrapping; out-of-bounds access simply yields `None` instead of panicking.

const NEIGHBORS_8: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Builds a grid from newline-separated rows. Short rows are padded with
    /// `fill` so the grid is always rectangular.
    pub fn parse(input: &str, fill: u8) -> Grid {
        let rows: Vec<&[u8]> = input
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::as_bytes)
            .collect();
        let width = rows.iter().map(|row| row.len()).max().unwrap_or(0);
        let mut cells = Vec::with_capacity(width * rows.len());
        for row in &rows {
            cells.extend_from_slice(row);
            cells.resize(cells.len() + width - row.len(), fill);
        }
        Grid {
            width,
            height: rows.len(),
            cells,
        }
    }

    pub fn width(&self) -> i64 {
        self.width as i64
    }

    pub fn height(&self) -> i64 {
        self.height as i64
    }

    pub fn get(&self, x: i64, y: i64) -> Option<u8> {
        if x < 0 || y < 0 || x >= self.width() || y >= self.height() {
            None
        } else {
            Some(self.cells[y as usize * self.width + x as usize])
        }
    }

    /// Writes `value` at (x, y); out-of-bounds writes are ignored and reported
    /// via the returned flag.
    pub fn set(&mut self, x: i64, y: i64, value: u8) -> bool {
        if x < 0 || y < 0 || x >= self.width() || y >= self.height() {
            return false;
        }
        self.cells[y as usize * self.width + x as usize] = value;
        true
    }

    /// All positions holding `needle`, in row-major order.
    pub fn positions(&self, needle: u8) -> Vec<(i64, i64)> {
        let mut found = Vec::new();
        for y in 0..self.height() {
            for x in 0..self.width() {
                if self.get(x, y) == Some(needle) {
                    found.push((x, y));
                }
            }
        }
        found
    }

    /// Number of the 8 surrounding cells holding `needle`.
    pub fn count_neighbors8(&self, x: i64, y: i64, needle: u8) -> usize {
        NEIGHBORS_8
            .iter()
            .filter(|(dx, dy)| self.get(x + dx, y + dy) == Some(needle))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        let grid = Grid::parse(".#.\n#.#\n", b'.');
        assert_eq!((grid.width(), grid.height()), (3, 2));
        assert_eq!(grid.get(1, 0), Some(b'#'));
        assert_eq!(grid.get(-1, 0), None);
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.get(0, 2), None);
    }

    #[test]
    fn test_ragged_rows_are_padded() {
        let grid = Grid::parse("##\n#\n", b'.');
        assert_eq!(grid.get(1, 1), Some(b'.'));
    }

    #[test]
    fn test_neighbors() {
        let grid = Grid::parse("###\n#.#\n###\n", b'#');
        assert_eq!(grid.count_neighbors8(1, 1, b'#'), 8);
        assert_eq!(grid.count_neighbors8(0, 0, b'#'), 2);
    }

    #[test]
    fn test_set_out_of_bounds_is_rejected() {
        let mut grid = Grid::parse("..\n..\n", b'.');
        assert!(grid.set(1, 1, b'#'));
        assert!(!grid.set(2, 0, b'#'));
        assert_eq!(grid.get(1, 1), Some(b'#'));
    }
}
