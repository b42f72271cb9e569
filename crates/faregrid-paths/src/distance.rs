use faregrid_core::Position;

/// Euclidean (L2) distance between two cells.
///
/// Never larger than the Manhattan distance, so it is an admissible
/// estimate for unit-cost 4-directional moves.
#[inline]
pub fn euclidean(a: Position, b: Position) -> f64 {
    let dr = f64::from(a.row - b.row);
    let dc = f64::from(a.col - b.col);
    (dr * dr + dc * dc).sqrt()
}

/// Manhattan (L1) distance between two cells.
#[inline]
pub fn manhattan(a: Position, b: Position) -> i32 {
    a.manhattan(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euclidean_is_admissible() {
        let origin = Position::ZERO;
        for row in -6..=6 {
            for col in -6..=6 {
                let p = Position::new(row, col);
                assert!(euclidean(origin, p) <= f64::from(manhattan(origin, p)));
            }
        }
    }

    #[test]
    fn known_values() {
        assert_eq!(euclidean(Position::new(0, 0), Position::new(3, 4)), 5.0);
        assert_eq!(euclidean(Position::new(2, 2), Position::new(2, 2)), 0.0);
        assert_eq!(manhattan(Position::new(0, 0), Position::new(3, 4)), 7);
    }
}
