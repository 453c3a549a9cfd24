use super::Filter;
use crate::grid::Coord;
use crate::positions::CellSet;

/// At most `max_hits` positions of the sequence are vowels. Revisiting a vowel counts again.
#[derive(Debug, Clone)]
pub struct VowelHitLimit {
    vowels: CellSet,
    max_hits: usize,
}

impl VowelHitLimit {
    pub fn new(vowels: CellSet, max_hits: usize) -> VowelHitLimit {
        VowelHitLimit { vowels, max_hits }
    }

    pub fn hits(&self, seq: &[Coord]) -> usize {
        seq.iter()
            .filter(|coord| self.vowels.contains(**coord))
            .count()
    }
}

impl Filter for VowelHitLimit {
    fn name(&self) -> &'static str {
        "VowelHitLimit"
    }

    fn check(&self, seq: &[Coord]) -> bool {
        self.hits(seq) <= self.max_hits
    }
}

#[test]
fn test_vowel_hit_limit() {
    use crate::grid::get_grid;
    use crate::positions::vowel_positions;

    let filter = VowelHitLimit::new(vowel_positions(&get_grid()), 2);

    // Passes through A and O.
    let two = [(1, 1), (3, 2), (1, 3), (2, 5), (3, 3), (1, 4), (3, 5), (1, 4), (2, 2), (4, 3)];
    assert_eq!(filter.hits(&two), 2);
    assert!(filter.check(&two));
    // Passes through A, O and E.
    let three = [(1, 1), (2, 3), (3, 5), (1, 4), (2, 2), (1, 4), (2, 2), (3, 4), (1, 5)];
    assert_eq!(filter.hits(&three), 3);
    assert!(!filter.check(&three));

    // Exactly two vowels is fine.
    assert!(filter.check(&[(1, 1), (2, 3), (3, 5)]));
    // Coming back to the same vowel counts twice.
    assert!(filter.check(&[(1, 1), (3, 2), (1, 1)]));
    assert!(!filter.check(&[(1, 1), (3, 2), (1, 1), (3, 2), (1, 1)]));
}

#[test]
fn test_no_vowels_allowed() {
    let filter = VowelHitLimit::new([(1, 1)].into_iter().collect(), 0);
    assert!(filter.check(&[(1, 2), (3, 3)]));
    assert!(!filter.check(&[(1, 1)]));
}
