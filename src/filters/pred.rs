use super::Filter;
use crate::grid::Coord;
use std::fmt;

/// The filter that `pred(seq)` holds, for one-off rules that don't deserve their own type.
///
/// The engine can't tell whether an arbitrary closure is prefix-monotonic; that's on you.
pub struct Pred {
    name: &'static str,
    pred: Box<dyn Fn(&[Coord]) -> bool + Send + Sync + 'static>,
}

impl Pred {
    pub fn new(
        name: &'static str,
        pred: impl Fn(&[Coord]) -> bool + Send + Sync + 'static,
    ) -> Pred {
        Pred {
            name,
            pred: Box::new(pred),
        }
    }

    /// A filter on individual positions: a sequence passes iff every one of its positions
    /// satisfies `pred`.
    pub fn each(name: &'static str, pred: impl Fn(Coord) -> bool + Send + Sync + 'static) -> Pred {
        Pred::new(name, move |seq| seq.iter().all(|coord| pred(*coord)))
    }
}

// #derive doesn't work here; closures aren't Debug
impl fmt::Debug for Pred {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Pred({})", self.name)
    }
}

impl Filter for Pred {
    fn name(&self) -> &'static str {
        self.name
    }

    fn check(&self, seq: &[Coord]) -> bool {
        (self.pred)(seq)
    }
}

#[test]
fn test_pred() {
    let short = Pred::new("Short", |seq| seq.len() <= 2);
    assert_eq!(short.name(), "Short");
    assert_eq!(format!("{:?}", short), "Pred(Short)");
    assert!(short.check(&[(1, 1), (2, 3)]));
    assert!(!short.check(&[(1, 1), (2, 3), (1, 1)]));

    let top_half = Pred::each("TopHalf", |(row, _)| row <= 2);
    assert!(top_half.check(&[(1, 1), (2, 3)]));
    assert!(!top_half.check(&[(1, 1), (3, 2), (1, 3)]));
}
