use knightpad::filters::{Avoids, Filter, NoBacktrack, VowelHitLimit, WithinBounds};
use knightpad::grid::get_grid;
use knightpad::positions::{bounds, missing_positions, vowel_positions};
use knightpad::{count_sequences, generate_sequences, Enumerator};

fn keypad_enumerator(max_vowels: usize) -> Enumerator {
    let mut enumerator = Enumerator::new(get_grid()).unwrap();
    enumerator.keypad_filters(max_vowels).unwrap();
    enumerator
}

#[test]
fn test_default_total() {
    let tally = keypad_enumerator(2).count_all(9).unwrap();
    assert_eq!(tally.total, 815896);

    let counts = tally.per_start.iter().copied().collect::<Vec<_>>();
    assert_eq!(counts[0], ((1, 1), 18189));
    assert_eq!(counts[12], ((3, 3), 71979));
    assert_eq!(counts[15], ((4, 1), 39063));
    assert_eq!(counts[18], ((4, 4), 0));
    assert_eq!(counts[19], ((4, 5), 0));
}

#[test]
fn test_totals_by_length() {
    let enumerator = keypad_enumerator(2);
    let totals = (0..=4)
        .map(|steps| enumerator.count_all(steps).unwrap().total)
        .collect::<Vec<_>>();
    assert_eq!(totals, vec![18, 58, 202, 674, 2216]);
}

#[test]
fn test_no_backtrack_total() {
    let mut enumerator = keypad_enumerator(2);
    enumerator.filter(NoBacktrack);
    assert_eq!(enumerator.count_all(9).unwrap().total, 44290);
}

#[test]
fn test_no_vowels() {
    assert_eq!(keypad_enumerator(0).count_all(3).unwrap().total, 338);
}

#[test]
fn test_hand_built_filters() {
    let grid = get_grid();
    let bounds = bounds(&grid).unwrap();
    let filters: Vec<Box<dyn Filter>> = vec![
        Box::new(WithinBounds::new(bounds).unwrap()),
        Box::new(Avoids::new(missing_positions(&grid, bounds))),
        Box::new(VowelHitLimit::new(vowel_positions(&grid), 2)),
    ];

    let seqs = generate_sequences((4, 1), 9, &filters).unwrap();
    assert_eq!(seqs.len(), 39063);
    assert_eq!(count_sequences((4, 1), 9, &filters).unwrap(), 39063);
    for seq in &seqs {
        assert_eq!(seq.len(), 10);
        assert_eq!(seq[0], (4, 1));
        assert!(seq.iter().all(|coord| grid.label(*coord).is_some()));
    }

    // Same answer every time.
    assert_eq!(generate_sequences((4, 1), 9, &filters).unwrap(), seqs);
}

#[test]
fn test_two_moves_from_corner() {
    let enumerator = keypad_enumerator(2);
    let seqs = enumerator.sequences_from((1, 1), 2).unwrap();
    assert_eq!(
        seqs,
        vec![
            vec![(1, 1), (3, 2), (1, 3)],
            vec![(1, 1), (3, 2), (1, 1)],
            vec![(1, 1), (3, 2), (2, 4)],
            vec![(1, 1), (2, 3), (4, 2)],
            vec![(1, 1), (2, 3), (3, 5)],
            vec![(1, 1), (2, 3), (3, 1)],
            vec![(1, 1), (2, 3), (1, 5)],
            vec![(1, 1), (2, 3), (1, 1)],
        ]
    );
}
