//! Route translation: cell paths to movement commands and back.

use std::fmt;

use faregrid_core::Position;

use crate::error::ContractViolation;

/// One unit move handed to a movement actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StepCommand {
    Up,
    Down,
    Left,
    Right,
}

impl StepCommand {
    /// The (row, column) offset this command moves by.
    #[inline]
    pub const fn delta(self) -> Position {
        match self {
            Self::Up => Position::UP,
            Self::Down => Position::DOWN,
            Self::Left => Position::LEFT,
            Self::Right => Position::RIGHT,
        }
    }

    /// The command for a unit offset, or `None` for any other offset.
    #[inline]
    pub fn from_delta(d: Position) -> Option<Self> {
        match (d.row, d.col) {
            (-1, 0) => Some(Self::Up),
            (1, 0) => Some(Self::Down),
            (0, -1) => Some(Self::Left),
            (0, 1) => Some(Self::Right),
            _ => None,
        }
    }

    /// WASD key for this command.
    #[inline]
    pub const fn key(self) -> char {
        match self {
            Self::Up => 'W',
            Self::Down => 'S',
            Self::Left => 'A',
            Self::Right => 'D',
        }
    }
}

impl fmt::Display for StepCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Translate a cell path into step commands, one per consecutive pair.
///
/// Paths of zero or one cell yield no commands. A pair that is not one
/// cardinal step apart is a defect in whichever search produced the path.
pub fn to_steps(path: &[Position]) -> Result<Vec<StepCommand>, ContractViolation> {
    path.windows(2)
        .map(|w| {
            StepCommand::from_delta(w[1] - w[0]).ok_or(ContractViolation::NonAdjacentStep {
                from: w[0],
                to: w[1],
            })
        })
        .collect()
}

/// Replay `steps` from `start`, returning every visited cell including
/// `start` itself.
pub fn apply(start: Position, steps: &[StepCommand]) -> Vec<Position> {
    let mut cells = Vec::with_capacity(steps.len() + 1);
    cells.push(start);
    let mut cur = start;
    for s in steps {
        cur = cur + s.delta();
        cells.push(cur);
    }
    cells
}
