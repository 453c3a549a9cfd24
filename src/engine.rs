use crate::error::Error;
use crate::filters::{check_all, Filter};
use crate::grid::Coord;
use crate::moves::knight_targets;
use tracing::trace;

/// A path of knight moves, starting position first.
pub type Sequence = Vec<Coord>;

fn step_count_to_usize(step_count: i64) -> Result<usize, Error> {
    usize::try_from(step_count).map_err(|_| Error::InvalidStepCount(step_count))
}

/// The starting generation: just `[start]`, if the filters allow it.
fn first_generation(start: Coord, filters: &[Box<dyn Filter>]) -> Vec<Sequence> {
    let seq = vec![start];
    if check_all(filters, &seq) {
        vec![seq]
    } else {
        Vec::new()
    }
}

/// Extend every sequence by one knight move, in every direction, and keep the extensions that
/// pass all of the filters. The result is a brand new generation; `generation` can be dropped.
fn next_generation(generation: &[Sequence], filters: &[Box<dyn Filter>]) -> Vec<Sequence> {
    let mut next = Vec::new();
    for seq in generation {
        let Some(&last) = seq.last() else {
            continue;
        };
        for target in knight_targets(last) {
            let mut candidate = Vec::with_capacity(seq.len() + 1);
            candidate.extend_from_slice(seq);
            candidate.push(target);
            if check_all(filters, &candidate) {
                next.push(candidate);
            }
        }
    }
    next
}

/// Like `next_generation`, but only count the survivors.
fn count_next_generation(generation: &[Sequence], filters: &[Box<dyn Filter>]) -> usize {
    let mut count = 0;
    let mut candidate = Vec::new();
    for seq in generation {
        let Some(&last) = seq.last() else {
            continue;
        };
        for target in knight_targets(last) {
            candidate.clear();
            candidate.extend_from_slice(seq);
            candidate.push(target);
            if check_all(filters, &candidate) {
                count += 1;
            }
        }
    }
    count
}

/// Every sequence of `step_count` knight moves from `start` such that every prefix of it
/// (including `[start]` itself) passes all of `filters`.
///
/// Filters are applied after every single move, so sequences that go wrong early are never
/// extended. Sequences come out in a deterministic order: by the order their prefixes survived,
/// then by the order of `moves::KNIGHT_OFFSETS`.
///
/// Fails with `InvalidStepCount` if `step_count` is negative. The engine has no idea what the grid
/// looks like: if `start` is off the grid, it's up to the filters to say so.
pub fn generate_sequences(
    start: Coord,
    step_count: i64,
    filters: &[Box<dyn Filter>],
) -> Result<Vec<Sequence>, Error> {
    let steps = step_count_to_usize(step_count)?;

    let mut generation = first_generation(start, filters);
    for step in 1..=steps {
        if generation.is_empty() {
            break;
        }
        generation = next_generation(&generation, filters);
        trace!(?start, step, survivors = generation.len(), "generation");
    }
    Ok(generation)
}

/// The number of sequences `generate_sequences` would return, without building the last
/// generation.
pub fn count_sequences(
    start: Coord,
    step_count: i64,
    filters: &[Box<dyn Filter>],
) -> Result<usize, Error> {
    let steps = step_count_to_usize(step_count)?;

    let mut generation = first_generation(start, filters);
    if steps == 0 {
        return Ok(generation.len());
    }
    for step in 1..steps {
        if generation.is_empty() {
            return Ok(0);
        }
        generation = next_generation(&generation, filters);
        trace!(?start, step, survivors = generation.len(), "generation");
    }
    Ok(count_next_generation(&generation, filters))
}

#[cfg(test)]
fn keypad_filters(max_vowels: usize) -> Vec<Box<dyn Filter>> {
    use crate::filters::{Avoids, VowelHitLimit, WithinBounds};
    use crate::grid::get_grid;
    use crate::positions::{bounds, missing_positions, vowel_positions};

    let grid = get_grid();
    let bounds = bounds(&grid).unwrap();
    vec![
        Box::new(WithinBounds::new(bounds).unwrap()),
        Box::new(Avoids::new(missing_positions(&grid, bounds))),
        Box::new(VowelHitLimit::new(vowel_positions(&grid), max_vowels)),
    ]
}

#[test]
fn test_unfiltered_growth() {
    for n in 0..=4 {
        let seqs = generate_sequences((1, 1), n, &[]).unwrap();
        assert_eq!(seqs.len(), 8usize.pow(n as u32));
        for seq in &seqs {
            assert_eq!(seq.len(), n as usize + 1);
            assert_eq!(seq[0], (1, 1));
        }
        assert_eq!(count_sequences((1, 1), n, &[]).unwrap(), seqs.len());
    }
}

#[test]
fn test_sequences_are_knight_paths() {
    use crate::moves::is_knight_move;

    let filters = keypad_filters(2);
    let seqs = generate_sequences((2, 3), 5, &filters).unwrap();
    assert!(!seqs.is_empty());
    for seq in &seqs {
        assert_eq!(seq.len(), 6);
        assert!(seq.windows(2).all(|w| is_knight_move(w[0], w[1])));
        assert!(check_all(&filters, seq));
    }
}

#[test]
fn test_one_step_in_bounds() {
    use crate::filters::WithinBounds;
    use crate::positions::Bounds;

    let filters: Vec<Box<dyn Filter>> =
        vec![Box::new(WithinBounds::new(Bounds::new(1, 4, 1, 5)).unwrap())];
    let seqs = generate_sequences((1, 1), 1, &filters).unwrap();
    assert_eq!(seqs, vec![vec![(1, 1), (3, 2)], vec![(1, 1), (2, 3)]]);
}

#[test]
fn test_zero_steps() {
    let filters = keypad_filters(2);
    assert_eq!(
        generate_sequences((4, 1), 0, &filters).unwrap(),
        vec![vec![(4, 1)]]
    );
    // A missing position can't even be started from.
    assert!(generate_sequences((4, 4), 0, &filters).unwrap().is_empty());
    assert_eq!(count_sequences((4, 4), 0, &filters).unwrap(), 0);
    // Nor can a vowel, if no vowels are allowed.
    assert!(generate_sequences((1, 1), 0, &keypad_filters(0))
        .unwrap()
        .is_empty());
}

#[test]
fn test_off_grid_start() {
    let filters = keypad_filters(2);
    assert!(generate_sequences((9, 9), 3, &filters).unwrap().is_empty());
    assert_eq!(count_sequences((-1, 0), 3, &filters).unwrap(), 0);
    // Without filters, the engine doesn't care where it starts.
    assert_eq!(generate_sequences((9, 9), 1, &[]).unwrap().len(), 8);
}

#[test]
fn test_negative_step_count() {
    assert_eq!(
        generate_sequences((1, 1), -1, &[]),
        Err(Error::InvalidStepCount(-1))
    );
    assert_eq!(
        count_sequences((1, 1), -5, &[]),
        Err(Error::InvalidStepCount(-5))
    );
}

#[test]
fn test_rejected_prefixes_are_never_extended() {
    use crate::filters::Pred;

    // Reject any sequence that visits (3, 2) at step 1.
    let banned_prefix = [(1, 1), (3, 2)];
    let filters: Vec<Box<dyn Filter>> = vec![Box::new(Pred::new("NoPrefix", move |seq| {
        !seq.starts_with(&banned_prefix)
    }))];
    let seqs = generate_sequences((1, 1), 3, &filters).unwrap();
    assert_eq!(seqs.len(), 7 * 8 * 8);
    assert!(seqs.iter().all(|seq| !seq.starts_with(&banned_prefix)));

    let keypad = keypad_filters(2);
    for seq in generate_sequences((4, 1), 4, &keypad).unwrap() {
        for len in 1..=seq.len() {
            assert!(check_all(&keypad, &seq[..len]));
        }
    }
}

#[test]
fn test_count_matches_generate() {
    let filters = keypad_filters(2);
    for start in [(1, 1), (2, 2), (3, 5), (4, 1), (4, 5)] {
        for n in 0..=6 {
            assert_eq!(
                count_sequences(start, n, &filters).unwrap(),
                generate_sequences(start, n, &filters).unwrap().len()
            );
        }
    }
}

#[test]
fn test_keypad_start() {
    let filters = keypad_filters(2);
    assert_eq!(count_sequences((4, 1), 3, &filters).unwrap(), 26);
    assert_eq!(count_sequences((4, 1), 9, &filters).unwrap(), 39063);
}

#[test]
fn test_start_at_i32_edge() {
    assert_eq!(generate_sequences((i32::MAX, 0), 1, &[]).unwrap().len(), 6);
    assert_eq!(count_sequences((i32::MIN, i32::MIN), 1, &[]).unwrap(), 2);
}

#[test]
#[should_panic(expected = "no knights past row 2")]
fn test_filter_panics_propagate() {
    use crate::filters::Pred;

    let filters: Vec<Box<dyn Filter>> = vec![Box::new(Pred::each("Fussy", |(row, _)| {
        if row > 2 {
            panic!("no knights past row 2");
        }
        true
    }))];
    let _ = count_sequences((1, 1), 2, &filters);
}
