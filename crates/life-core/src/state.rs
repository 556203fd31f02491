use serde::{Deserialize, Serialize};

use crate::error::UnknownState;

/// The state a single cell holds for one generation.
///
/// The discriminants are the values used on disk and in raw input grids.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum CellState {
    #[default]
    Dead = 0,
    Alive = 1,
    Sick = 2,
}

impl CellState {
    pub const ALL: [CellState; 3] = [CellState::Dead, CellState::Alive, CellState::Sick];

    /// Number of distinct states.
    pub const COUNT: usize = Self::ALL.len();

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Character used by the text form of a grid.
    pub const fn symbol(self) -> char {
        match self {
            CellState::Dead => '.',
            CellState::Alive => '#',
            CellState::Sick => 'x',
        }
    }

    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' => Some(CellState::Dead),
            '#' => Some(CellState::Alive),
            'x' => Some(CellState::Sick),
            _ => None,
        }
    }
}

impl TryFrom<u8> for CellState {
    type Error = UnknownState;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(CellState::Dead),
            1 => Ok(CellState::Alive),
            2 => Ok(CellState::Sick),
            other => Err(UnknownState(other)),
        }
    }
}

impl From<CellState> for u8 {
    fn from(state: CellState) -> Self {
        state as u8
    }
}
