//! Transition rules.
//!
//! A [`Rule`] maps a cell's current state and its neighbor counts to its
//! next state. It sees nothing else, so the result cannot depend on the
//! order cells are visited in.

use life_core::CellState;

use crate::neighbors::Counts;

pub trait Rule: Send + Sync {
    fn next_state(&self, current: CellState, counts: Counts) -> CellState;
}

impl<R: Rule + ?Sized> Rule for &R {
    fn next_state(&self, current: CellState, counts: Counts) -> CellState {
        (**self).next_state(current, counts)
    }
}

/// The seven predicates of the sick-life rule.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Transition {
    /// Dead, exactly 3 alive or sick neighbors: becomes alive.
    Birth,
    /// Alive, 2 or 3 alive neighbors: stays alive.
    Survive,
    /// Alive, more than 2 sick neighbors: becomes sick.
    CatchSick,
    /// Sick, 1 to 4 alive or sick neighbors: stays sick.
    RemainSick,
    /// Sick, at most 1 alive or sick neighbor: dies.
    IsolationDeath,
    /// Sick, 5 or more sick neighbors: dies.
    SicknessDeath,
    /// Sick, no sick neighbors: recovers.
    Recovery,
}

impl Transition {
    pub const ALL: [Transition; 7] = [
        Transition::Birth,
        Transition::Survive,
        Transition::CatchSick,
        Transition::RemainSick,
        Transition::IsolationDeath,
        Transition::SicknessDeath,
        Transition::Recovery,
    ];

    /// State a cell takes when this predicate decides it.
    pub const fn target(self) -> CellState {
        match self {
            Transition::Birth | Transition::Survive | Transition::Recovery => CellState::Alive,
            Transition::CatchSick | Transition::RemainSick => CellState::Sick,
            Transition::IsolationDeath | Transition::SicknessDeath => CellState::Dead,
        }
    }

    pub const fn matches(self, current: CellState, counts: Counts) -> bool {
        let occupied = counts.occupied();
        match (self, current) {
            (Transition::Birth, CellState::Dead) => occupied == 3,
            (Transition::Survive, CellState::Alive) => matches!(counts.alive, 2 | 3),
            (Transition::CatchSick, CellState::Alive) => counts.sick > 2,
            (Transition::RemainSick, CellState::Sick) => occupied >= 1 && occupied <= 4,
            (Transition::IsolationDeath, CellState::Sick) => occupied <= 1,
            (Transition::SicknessDeath, CellState::Sick) => counts.sick >= 5,
            (Transition::Recovery, CellState::Sick) => counts.sick == 0,
            _ => false,
        }
    }
}

/// Game of Life with a third, infectious "sick" state.
///
/// The predicates overlap, so a cell can match several at once. The one
/// that decides is picked by the state it leads to:
///
/// | tier | predicates                          | next state |
/// |------|-------------------------------------|------------|
/// | 1    | `CatchSick`, `RemainSick`           | sick       |
/// | 2    | `Birth`, `Survive`, `Recovery`      | alive      |
/// | 3    | `IsolationDeath`, `SicknessDeath`   | dead       |
/// | -    | nothing matched                     | dead       |
///
/// An isolated sick cell matches both `IsolationDeath` and `Recovery` and
/// therefore recovers.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SickLife;

impl SickLife {
    const TIERS: [&'static [Transition]; 3] = [
        &[Transition::CatchSick, Transition::RemainSick],
        &[Transition::Birth, Transition::Survive, Transition::Recovery],
        &[Transition::IsolationDeath, Transition::SicknessDeath],
    ];

    /// Every predicate that holds, in declaration order.
    pub fn matching(current: CellState, counts: Counts) -> impl Iterator<Item = Transition> {
        Transition::ALL
            .into_iter()
            .filter(move |t| t.matches(current, counts))
    }

    /// The predicate that decides the next state, if any holds.
    pub fn deciding(current: CellState, counts: Counts) -> Option<Transition> {
        Self::TIERS
            .iter()
            .flat_map(|tier| tier.iter().copied())
            .find(|t| t.matches(current, counts))
    }
}

impl Rule for SickLife {
    fn next_state(&self, current: CellState, counts: Counts) -> CellState {
        Self::deciding(current, counts).map_or(CellState::Dead, Transition::target)
    }
}

/// Plain B3/S23 Game of Life. Sick cells die and do not count as alive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Conway;

impl Rule for Conway {
    fn next_state(&self, current: CellState, counts: Counts) -> CellState {
        match (current, counts.alive) {
            (CellState::Alive, 2 | 3) | (CellState::Dead, 3) => CellState::Alive,
            _ => CellState::Dead,
        }
    }
}
