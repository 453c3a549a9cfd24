use super::Filter;
use crate::error::Error;
use crate::grid::Coord;
use crate::positions::Bounds;

/// Every position lies inside a (closed) rectangle.
#[derive(Debug, Clone)]
pub struct WithinBounds {
    bounds: Bounds,
}

impl WithinBounds {
    /// Fails if the rectangle is inside-out, since it could never accept anything.
    pub fn new(bounds: Bounds) -> Result<WithinBounds, Error> {
        if bounds.min_row > bounds.max_row {
            return Err(Error::MalformedFilter {
                filter: "WithinBounds",
                reason: format!("min_row {} > max_row {}", bounds.min_row, bounds.max_row),
            });
        }
        if bounds.min_col > bounds.max_col {
            return Err(Error::MalformedFilter {
                filter: "WithinBounds",
                reason: format!("min_col {} > max_col {}", bounds.min_col, bounds.max_col),
            });
        }
        Ok(WithinBounds { bounds })
    }
}

impl Filter for WithinBounds {
    fn name(&self) -> &'static str {
        "WithinBounds"
    }

    fn check(&self, seq: &[Coord]) -> bool {
        seq.iter().all(|coord| self.bounds.contains(*coord))
    }
}

#[test]
fn test_within_bounds() {
    let filter = WithinBounds::new(Bounds::new(1, 4, 1, 5)).unwrap();

    assert!(filter.check(&[(1, 1), (3, 2), (4, 4)]));
    assert!(filter.check(&[(4, 5)]));
    assert!(filter.check(&[]));
    assert!(!filter.check(&[(1, 1), (5, 2)]));
    assert!(!filter.check(&[(1, 1), (3, 6)]));
    assert!(!filter.check(&[(0, 3), (2, 4)]));
    assert!(!filter.check(&[(2, 0)]));
}

#[test]
fn test_inside_out_bounds() {
    let err = WithinBounds::new(Bounds::new(4, 1, 1, 5)).unwrap_err();
    assert_eq!(
        err,
        Error::MalformedFilter {
            filter: "WithinBounds",
            reason: "min_row 4 > max_row 1".to_owned(),
        }
    );
    assert!(WithinBounds::new(Bounds::new(1, 1, 2, 1)).is_err());
    assert!(WithinBounds::new(Bounds::new(1, 1, 1, 1)).is_ok());
}
