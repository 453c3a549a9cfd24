use crate::grid::Coord;

/// The eight L-shaped `(row, col)` displacements of a knight.
pub const KNIGHT_OFFSETS: [Coord; 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// Every position a knight at `from` could jump to, in the order of `KNIGHT_OFFSETS`.
///
/// This knows nothing about any grid: targets may have negative or otherwise out-of-range
/// coordinates. Throwing those away is the job of filters. The only targets skipped are the ones
/// that can't be represented as a `Coord` at all, so there are 8 unless `from` is within two of
/// the edge of `i32`.
pub fn knight_targets(from: Coord) -> impl Iterator<Item = Coord> {
    let (row, col) = from;
    KNIGHT_OFFSETS
        .into_iter()
        .filter_map(move |(d_row, d_col)| Some((row.checked_add(d_row)?, col.checked_add(d_col)?)))
}

/// Whether `b` is one knight move away from `a`.
pub fn is_knight_move(a: Coord, b: Coord) -> bool {
    let d_row = (a.0 as i64 - b.0 as i64).abs();
    let d_col = (a.1 as i64 - b.1 as i64).abs();
    (d_row, d_col) == (1, 2) || (d_row, d_col) == (2, 1)
}

#[test]
fn test_knight_targets() {
    use std::collections::HashSet;

    for from in [(0, 0), (1, 1), (4, 5), (-3, 12), (2, 3)] {
        let targets = knight_targets(from).collect::<Vec<_>>();
        let distinct = targets.iter().copied().collect::<HashSet<_>>();
        assert_eq!(distinct.len(), 8);
        assert!(!distinct.contains(&from));
        for target in targets {
            assert!(is_knight_move(from, target), "{:?} -> {:?}", from, target);
        }
    }
}

#[test]
fn test_knight_targets_ignore_edges() {
    assert_eq!(
        knight_targets((1, 1)).collect::<Vec<_>>(),
        vec![
            (3, 2),
            (3, 0),
            (-1, 2),
            (-1, 0),
            (2, 3),
            (2, -1),
            (0, 3),
            (0, -1)
        ]
    );
}

#[test]
fn test_is_knight_move() {
    assert!(is_knight_move((1, 1), (2, 3)));
    assert!(is_knight_move((2, 3), (1, 1)));
    assert!(!is_knight_move((1, 1), (1, 1)));
    assert!(!is_knight_move((1, 1), (3, 3)));
    assert!(!is_knight_move((1, 1), (1, 3)));
    assert!(!is_knight_move((0, i32::MIN), (0, i32::MAX)));
    assert!(is_knight_move((i32::MAX, 0), (i32::MAX - 1, 2)));
}

#[test]
fn test_knight_targets_at_i32_edges() {
    let from = (i32::MAX, i32::MIN);
    let targets = knight_targets(from).collect::<Vec<_>>();
    // Only the moves that go down in row and up in col stay representable.
    assert_eq!(
        targets,
        vec![(i32::MAX - 2, i32::MIN + 1), (i32::MAX - 1, i32::MIN + 2)]
    );
    assert!(targets.iter().all(|target| is_knight_move(from, *target)));

    assert_eq!(knight_targets((i32::MAX - 1, 0)).count(), 6);
}
