use super::Filter;
use crate::grid::Coord;

/// The knight never hops straight back to the position it just came from: `seq[i] != seq[i - 2]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBacktrack;

impl Filter for NoBacktrack {
    fn name(&self) -> &'static str {
        "NoBacktrack"
    }

    fn check(&self, seq: &[Coord]) -> bool {
        seq.windows(3).all(|w| w[0] != w[2])
    }
}

#[test]
fn test_no_backtrack() {
    let filter = NoBacktrack;

    assert!(filter.check(&[]));
    assert!(filter.check(&[(1, 1)]));
    assert!(filter.check(&[(1, 1), (3, 2)]));
    assert!(filter.check(&[(1, 1), (3, 2), (1, 3)]));
    assert!(!filter.check(&[(1, 1), (3, 2), (1, 1)]));
    assert!(!filter.check(&[(1, 1), (3, 2), (1, 3), (3, 2)]));
    // Returning later is allowed.
    assert!(filter.check(&[
        (1, 1),
        (2, 3),
        (3, 5),
        (1, 4),
        (3, 3),
        (1, 2),
        (3, 1),
        (2, 3),
        (1, 1)
    ]));
}
