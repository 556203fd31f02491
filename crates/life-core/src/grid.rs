use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, GridParseError, SimError, StateError};
use crate::pos::{Dimensions, Pos};
use crate::state::CellState;

/// Row-major grid of cell states with fixed dimensions.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    dims: Dimensions,
    cells: Vec<CellState>,
}

#[derive(Deserialize)]
struct RawGrid {
    dims: Dimensions,
    cells: Vec<CellState>,
}

impl TryFrom<RawGrid> for Grid {
    type Error = ConfigError;

    fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
        Self::from_cells(raw.dims, raw.cells)
    }
}

impl Grid {
    /// An all-dead grid.
    pub fn new(dims: Dimensions) -> Self {
        Self {
            dims,
            cells: vec![CellState::Dead; dims.area()],
        }
    }

    pub fn from_cells(dims: Dimensions, cells: Vec<CellState>) -> Result<Self, ConfigError> {
        if cells.len() != dims.area() {
            return Err(ConfigError::DimensionMismatch {
                expected: dims.area(),
                actual: cells.len(),
            });
        }
        Ok(Self { dims, cells })
    }

    /// Build a grid from raw state values, rejecting anything outside the
    /// state set.
    pub fn from_raw(dims: Dimensions, values: &[u8]) -> Result<Self, SimError> {
        if values.len() != dims.area() {
            return Err(ConfigError::DimensionMismatch {
                expected: dims.area(),
                actual: values.len(),
            }
            .into());
        }

        let cells = values
            .iter()
            .enumerate()
            .map(|(i, &value)| {
                CellState::try_from(value).map_err(|_| StateError {
                    pos: dims.pos(i),
                    value,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { dims, cells })
    }

    /// Build a grid from equally long rows.
    pub fn from_rows<R: AsRef<[CellState]>>(rows: &[R]) -> Result<Self, ConfigError> {
        let cols = rows.first().map_or(0, |row| row.as_ref().len());
        let dims = Dimensions::new(rows.len(), cols)?;

        let mut cells = Vec::with_capacity(dims.area());
        for row in rows {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(ConfigError::DimensionMismatch {
                    expected: cols,
                    actual: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }

        Ok(Self { dims, cells })
    }

    pub const fn dims(&self) -> Dimensions {
        self.dims
    }

    pub const fn rows(&self) -> usize {
        self.dims.rows()
    }

    pub const fn cols(&self) -> usize {
        self.dims.cols()
    }

    /// Total number of cells.
    pub const fn area(&self) -> usize {
        self.dims.area()
    }

    pub fn get(&self, pos: Pos) -> Option<CellState> {
        self.dims
            .contains(pos)
            .then(|| self.cells[self.dims.index(pos)])
    }

    /// # Panics
    /// Panics if `pos` is outside the grid.
    pub fn set(&mut self, pos: Pos, state: CellState) {
        self[pos] = state;
    }

    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Mutable view of all cells. The length is fixed, so the shape cannot
    /// change through it.
    pub fn cells_mut(&mut self) -> &mut [CellState] {
        &mut self.cells
    }

    pub fn row(&self, row: usize) -> &[CellState] {
        let start = row * self.cols();
        &self.cells[start..start + self.cols()]
    }

    pub fn rows_iter(&self) -> impl ExactSizeIterator<Item = &[CellState]> {
        self.cells.chunks_exact(self.cols())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Pos, CellState)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &state)| (self.dims.pos(i), state))
    }

    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }

    pub fn is_all(&self, state: CellState) -> bool {
        self.cells.iter().all(|&c| c == state)
    }

    /// Raw state values in row-major order.
    pub fn to_raw(&self) -> Vec<u8> {
        self.cells.iter().map(|&c| u8::from(c)).collect()
    }
}

impl Index<Pos> for Grid {
    type Output = CellState;

    fn index(&self, pos: Pos) -> &Self::Output {
        assert!(self.dims.contains(pos), "{pos} outside {} grid", self.dims);
        &self.cells[self.dims.index(pos)]
    }
}

impl IndexMut<Pos> for Grid {
    fn index_mut(&mut self, pos: Pos) -> &mut Self::Output {
        assert!(self.dims.contains(pos), "{pos} outside {} grid", self.dims);
        let index = self.dims.index(pos);
        &mut self.cells[index]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows_iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for &cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = GridParseError;

    /// Parse the text form: one line per row, `.` dead, `#` alive, `x` sick.
    /// Blank lines and surrounding whitespace are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::new();
        let mut cols = None;
        let mut rows = 0;

        for (line_no, line) in s.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let start = cells.len();
            for (column, symbol) in line.chars().enumerate() {
                let state =
                    CellState::from_symbol(symbol).ok_or(GridParseError::UnknownSymbol {
                        line: line_no + 1,
                        column: column + 1,
                        symbol,
                    })?;
                cells.push(state);
            }

            let width = cells.len() - start;
            match cols {
                None => cols = Some(width),
                Some(expected) if expected != width => {
                    return Err(GridParseError::Ragged {
                        line: line_no + 1,
                        expected,
                        actual: width,
                    });
                }
                Some(_) => {}
            }
            rows += 1;
        }

        let cols = cols.ok_or(GridParseError::Empty)?;
        let dims = Dimensions::new(rows, cols).map_err(|_| GridParseError::Empty)?;
        Ok(Self { dims, cells })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn dims(rows: usize, cols: usize) -> Dimensions {
        Dimensions::new(rows, cols).unwrap()
    }

    #[test]
    fn new_grid_is_dead() {
        let grid = Grid::new(dims(4, 6));
        assert_eq!(grid.area(), 24);
        assert!(grid.is_all(CellState::Dead));
        assert_eq!(grid.count(CellState::Alive), 0);
    }

    #[test]
    fn set_and_get() {
        let mut grid = Grid::new(dims(3, 3));
        grid.set(Pos::new(1, 2), CellState::Sick);

        assert_eq!(grid.get(Pos::new(1, 2)), Some(CellState::Sick));
        assert_eq!(grid[Pos::new(1, 2)], CellState::Sick);
        assert_eq!(grid.get(Pos::new(3, 0)), None);
        assert_eq!(grid.row(1), &[CellState::Dead, CellState::Dead, CellState::Sick]);
    }

    #[test]
    fn from_raw_rejects_unknown_state() {
        let err = Grid::from_raw(dims(2, 2), &[0, 1, 3, 2]).unwrap_err();
        assert_eq!(
            err,
            SimError::State(StateError {
                pos: Pos::new(1, 0),
                value: 3,
            })
        );
    }

    #[test]
    fn from_raw_rejects_wrong_length() {
        let err = Grid::from_raw(dims(2, 2), &[0, 1, 2]).unwrap_err();
        assert_eq!(
            err,
            SimError::Config(ConfigError::DimensionMismatch {
                expected: 4,
                actual: 3,
            })
        );
    }

    #[test]
    fn from_raw_round_trip() {
        let raw = [0, 1, 2, 2, 1, 0];
        let grid = Grid::from_raw(dims(2, 3), &raw).unwrap();
        assert_eq!(grid.to_raw(), raw);
    }

    #[test]
    fn from_rows_rejects_ragged() {
        use CellState::{Alive, Dead};
        assert!(Grid::from_rows(&[vec![Dead, Alive], vec![Dead]]).is_err());
        let empty: [Vec<CellState>; 0] = [];
        assert!(Grid::from_rows(&empty).is_err());
    }

    #[test]
    fn text_form() {
        let text = "
            .#.
            x..
        ";
        let grid: Grid = text.parse().unwrap();
        assert_eq!(grid.dims(), dims(2, 3));
        assert_eq!(grid[Pos::new(0, 1)], CellState::Alive);
        assert_eq!(grid[Pos::new(1, 0)], CellState::Sick);
        assert_eq!(grid.to_string(), ".#.\nx..");
    }

    #[test]
    fn text_form_errors() {
        assert_eq!("".parse::<Grid>(), Err(GridParseError::Empty));
        assert_eq!(
            "..\n...".parse::<Grid>(),
            Err(GridParseError::Ragged {
                line: 2,
                expected: 2,
                actual: 3,
            })
        );
        assert_eq!(
            ".?".parse::<Grid>(),
            Err(GridParseError::UnknownSymbol {
                line: 1,
                column: 2,
                symbol: '?',
            })
        );
    }

    #[test]
    fn deserialize_checks_cell_count() {
        let json = r#"{"dims":{"rows":1,"cols":2},"cells":[0,1,2]}"#;
        assert!(serde_json::from_str::<Grid>(json).is_err());

        let json = r#"{"dims":{"rows":1,"cols":2},"cells":[0,5]}"#;
        assert!(serde_json::from_str::<Grid>(json).is_err());

        let json = r#"{"dims":{"rows":1,"cols":2},"cells":[2,1]}"#;
        let grid: Grid = serde_json::from_str(json).unwrap();
        assert_eq!(grid.cells(), &[CellState::Sick, CellState::Alive]);
    }
}
