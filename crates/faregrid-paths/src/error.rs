use faregrid_core::Position;

/// A route that breaks the search contract.
///
/// Correct searches never produce one; seeing this error means a search
/// implementation is defective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ContractViolation {
    /// The path does not begin at the requested start.
    #[error("route starts at {found}, expected {expected}")]
    WrongStart { expected: Position, found: Position },
    /// The path does not end at the requested goal.
    #[error("route ends at {found}, expected {expected}")]
    WrongGoal { expected: Position, found: Position },
    /// Two consecutive cells are not one axis-aligned step apart.
    #[error("route jumps from {from} to {to}")]
    NonAdjacentStep { from: Position, to: Position },
    /// The path passes through a blocked or out-of-grid cell.
    #[error("route crosses blocked cell {0}")]
    BlockedCell(Position),
}
