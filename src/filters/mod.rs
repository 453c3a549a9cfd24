//! Predicates over knight-move sequences.
//!
//! Every filter looks at a whole candidate sequence and says whether to keep it. The engine
//! checks them after every step, so a filter must reject every extension of a sequence it
//! rejects (all the filters here do: they only ever look for something bad that, once present
//! in a prefix, stays present).

mod avoid;
mod backtrack;
mod bounds;
mod pred;
mod vowels;

use crate::grid::Coord;
use std::fmt::Debug;

pub use avoid::Avoids;
pub use backtrack::NoBacktrack;
pub use bounds::WithinBounds;
pub use pred::Pred;
pub use vowels::VowelHitLimit;

pub trait Filter: Debug + Send + Sync {
    /// A name for this filter, for logging and error messages.
    fn name(&self) -> &'static str;

    /// Should `seq` be kept?
    fn check(&self, seq: &[Coord]) -> bool;
}

impl<F: Filter + ?Sized> Filter for Box<F> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn check(&self, seq: &[Coord]) -> bool {
        (**self).check(seq)
    }
}

impl<F: Filter + ?Sized> Filter for &F {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn check(&self, seq: &[Coord]) -> bool {
        (**self).check(seq)
    }
}

/// Both filters must accept. `A` is checked first.
#[derive(Debug, Clone)]
pub struct And<A: Filter, B: Filter>(pub A, pub B);

impl<A: Filter, B: Filter> Filter for And<A, B> {
    fn name(&self) -> &'static str {
        "And"
    }

    fn check(&self, seq: &[Coord]) -> bool {
        self.0.check(seq) && self.1.check(seq)
    }
}

/// Every filter in the list must accept. Checked left to right, stopping at the first rejection.
pub fn check_all<F: Filter>(filters: &[F], seq: &[Coord]) -> bool {
    filters.iter().all(|filter| filter.check(seq))
}

#[test]
fn test_and() {
    use crate::positions::Bounds;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    let in_box = WithinBounds::new(Bounds::new(1, 4, 1, 5)).unwrap();
    let no_vowels = VowelHitLimit::new([(1, 1)].into_iter().collect(), 0);
    let both = And(in_box.clone(), no_vowels);

    assert!(both.check(&[(3, 2), (1, 3)]));
    assert!(!both.check(&[(3, 2), (1, 1)]));
    assert!(!both.check(&[(3, 2), (5, 3)]));

    // Short-circuits: the second filter isn't consulted once the first says no.
    let calls = Arc::new(AtomicUsize::new(0));
    let calls_copy = calls.clone();
    let counting = Pred::new("Counting", move |_| {
        calls_copy.fetch_add(1, Ordering::SeqCst);
        true
    });
    let filters: Vec<Box<dyn Filter>> = vec![Box::new(in_box), Box::new(counting)];
    assert!(!check_all(&filters, &[(0, 0)]));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert!(check_all(&filters, &[(1, 1)]));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_empty_filter_list() {
    let filters: Vec<Box<dyn Filter>> = Vec::new();
    assert!(check_all(&filters, &[(-100, 100)]));
}
