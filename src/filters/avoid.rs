use super::Filter;
use crate::grid::Coord;
use crate::positions::CellSet;

/// No position is one of the forbidden ones.
#[derive(Debug, Clone)]
pub struct Avoids {
    forbidden: CellSet,
}

impl Avoids {
    pub fn new(forbidden: CellSet) -> Avoids {
        Avoids { forbidden }
    }
}

impl Filter for Avoids {
    fn name(&self) -> &'static str {
        "Avoids"
    }

    fn check(&self, seq: &[Coord]) -> bool {
        !seq.iter().any(|coord| self.forbidden.contains(*coord))
    }
}

#[test]
fn test_avoids() {
    let filter = Avoids::new([(4, 4), (4, 5)].into_iter().collect());

    assert!(filter.check(&[(4, 3), (2, 4), (3, 2)]));
    assert!(!filter.check(&[(2, 3), (4, 4)]));
    assert!(!filter.check(&[(4, 5)]));
    // Far away from anything forbidden.
    assert!(filter.check(&[(-7, 40)]));

    let nothing = Avoids::new(CellSet::new());
    assert!(nothing.check(&[(4, 4), (4, 5)]));
}

#[test]
fn test_avoids_extreme_coords() {
    let filter = Avoids::new([(0, i32::MIN), (0, i32::MAX)].into_iter().collect());
    assert!(filter.check(&[(0, 0), (2, 1)]));
    assert!(!filter.check(&[(0, 0), (0, i32::MAX)]));
    assert!(!filter.check(&[(0, i32::MIN)]));
}
