use crate::error::Error;
use crate::grid::{Coord, Grid};
use bitvec::{bitvec, vec::BitVec};
use std::collections::BTreeSet;
use std::fmt;

/************************
 *     Bounds           *
 ************************/

/// A closed rectangle of coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub min_row: i32,
    pub max_row: i32,
    pub min_col: i32,
    pub max_col: i32,
}

impl Bounds {
    pub fn new(min_row: i32, max_row: i32, min_col: i32, max_col: i32) -> Bounds {
        Bounds {
            min_row,
            max_row,
            min_col,
            max_col,
        }
    }

    /// The smallest rectangle containing every coordinate, or `None` if there are none.
    pub fn enclosing(coords: impl IntoIterator<Item = Coord>) -> Option<Bounds> {
        let mut coords = coords.into_iter();
        let (row, col) = coords.next()?;
        let mut bounds = Bounds::new(row, row, col, col);
        for (row, col) in coords {
            bounds.min_row = bounds.min_row.min(row);
            bounds.max_row = bounds.max_row.max(row);
            bounds.min_col = bounds.min_col.min(col);
            bounds.max_col = bounds.max_col.max(col);
        }
        Some(bounds)
    }

    pub fn contains(&self, (row, col): Coord) -> bool {
        row >= self.min_row && row <= self.max_row && col >= self.min_col && col <= self.max_col
    }

    pub fn height(&self) -> usize {
        (self.max_row as i64 - self.min_row as i64 + 1).max(0) as usize
    }

    pub fn width(&self) -> usize {
        (self.max_col as i64 - self.min_col as i64 + 1).max(0) as usize
    }

    /// The number of positions in the rectangle, or `None` if that doesn't fit in a `usize`.
    pub fn area(&self) -> Option<usize> {
        self.height().checked_mul(self.width())
    }

    /// Every coordinate in the rectangle, in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let (min_col, max_col) = (self.min_col, self.max_col);
        (self.min_row..=self.max_row)
            .flat_map(move |row| (min_col..=max_col).map(move |col| (row, col)))
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "rows {}..={}, cols {}..={}",
            self.min_row, self.max_row, self.min_col, self.max_col
        )
    }
}

/************************
 *     CellSet          *
 ************************/

/// Frames with more positions than this are stored sparsely.
const MAX_DENSE_AREA: usize = 1 << 16;

/// A set of coordinates. Usually stored as one bit per position of the rectangle enclosing its
/// members, so lookups of far-flung knight targets are cheap. Members spread too far apart for
/// that are kept in a sorted set instead.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CellSet {
    members: Members,
}

// Which variant is used depends only on the members, so derived equality is set equality.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum Members {
    #[default]
    Empty,
    Dense {
        frame: Bounds,
        /// Row-major over `frame`.
        bits: BitVec,
    },
    Sparse(BTreeSet<Coord>),
}

impl CellSet {
    pub fn new() -> CellSet {
        CellSet::default()
    }

    pub fn contains(&self, coord: Coord) -> bool {
        match &self.members {
            Members::Empty => false,
            Members::Dense { frame, bits } => match dense_index(frame, coord) {
                Some(i) => bits[i],
                None => false,
            },
            Members::Sparse(set) => set.contains(&coord),
        }
    }

    pub fn len(&self) -> usize {
        match &self.members {
            Members::Empty => 0,
            Members::Dense { bits, .. } => bits.count_ones(),
            Members::Sparse(set) => set.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.members == Members::Empty
    }

    /// Members in row-major order.
    pub fn iter(&self) -> Box<dyn Iterator<Item = Coord> + '_> {
        match &self.members {
            Members::Empty => Box::new(std::iter::empty()),
            Members::Dense { frame, bits } => {
                let frame = *frame;
                let width = frame.width();
                Box::new(bits.iter_ones().map(move |i| {
                    (
                        frame.min_row + (i / width) as i32,
                        frame.min_col + (i % width) as i32,
                    )
                }))
            }
            Members::Sparse(set) => Box::new(set.iter().copied()),
        }
    }
}

/// Where `coord` lives in a dense frame's bits, if it's inside the frame at all.
fn dense_index(frame: &Bounds, coord: Coord) -> Option<usize> {
    if !frame.contains(coord) {
        return None;
    }
    let (row, col) = coord;
    let d_row = (row as i64 - frame.min_row as i64) as usize;
    let d_col = (col as i64 - frame.min_col as i64) as usize;
    Some(d_row * frame.width() + d_col)
}

impl FromIterator<Coord> for CellSet {
    fn from_iter<I: IntoIterator<Item = Coord>>(coords: I) -> CellSet {
        let coords = coords.into_iter().collect::<Vec<_>>();
        let Some(frame) = Bounds::enclosing(coords.iter().copied()) else {
            return CellSet::default();
        };
        let members = match frame.area() {
            Some(area) if area <= MAX_DENSE_AREA => {
                let mut bits = bitvec![0; area];
                for coord in coords {
                    if let Some(i) = dense_index(&frame, coord) {
                        bits.set(i, true);
                    }
                }
                Members::Dense { frame, bits }
            }
            _ => Members::Sparse(coords.into_iter().collect()),
        };
        CellSet { members }
    }
}

impl fmt::Display for CellSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (row, col)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "({}, {})", row, col)?;
        }
        write!(f, "}}")
    }
}

/************************
 *     Classification   *
 ************************/

/// Positions whose key is labeled with a vowel (A, E, I, O or U, either case).
pub fn vowel_positions(grid: &Grid) -> CellSet {
    grid.cells()
        .iter()
        .filter(|cell| cell.label.is_vowel())
        .map(|cell| cell.coord())
        .collect()
}

/// Positions inside `bounds` that have no key.
pub fn missing_positions(grid: &Grid, bounds: Bounds) -> CellSet {
    bounds
        .coords()
        .filter(|coord| grid.label(*coord).is_none())
        .collect()
}

/// The smallest rectangle containing every key of the grid.
pub fn bounds(grid: &Grid) -> Result<Bounds, Error> {
    Bounds::enclosing(grid.coords()).ok_or(Error::EmptyGrid)
}

#[test]
fn test_keypad_positions() {
    use crate::grid::get_grid;

    let grid = get_grid();
    let bounds = bounds(&grid).unwrap();
    assert_eq!(bounds, Bounds::new(1, 4, 1, 5));

    let vowels = vowel_positions(&grid);
    assert_eq!(
        vowels.iter().collect::<Vec<_>>(),
        vec![(1, 1), (1, 5), (2, 4), (3, 5)]
    );

    let missing = missing_positions(&grid, bounds);
    assert_eq!(missing.iter().collect::<Vec<_>>(), vec![(4, 4), (4, 5)]);
    assert_eq!(missing.to_string(), "{(4, 4), (4, 5)}");
}

#[test]
fn test_lowercase_vowels() {
    let grid = Grid::from_rows(["a1O", "x.u"]);
    assert_eq!(
        vowel_positions(&grid).iter().collect::<Vec<_>>(),
        vec![(1, 1), (1, 3), (2, 3)]
    );
    assert_eq!(
        missing_positions(&grid, Bounds::new(1, 2, 1, 3))
            .iter()
            .collect::<Vec<_>>(),
        vec![(2, 2)]
    );
    // Positions outside the grid's own rectangle count as missing too.
    assert_eq!(missing_positions(&grid, Bounds::new(1, 3, 1, 3)).len(), 4);
}

#[test]
fn test_empty_grid() {
    assert_eq!(bounds(&Grid::default()), Err(Error::EmptyGrid));
    assert!(vowel_positions(&Grid::default()).is_empty());
}

#[test]
fn test_cell_set() {
    let set = [(5, -2), (3, 7), (5, -2), (-1, 0)]
        .into_iter()
        .collect::<CellSet>();
    assert_eq!(set.len(), 3);
    assert!(set.contains((5, -2)));
    assert!(set.contains((3, 7)));
    assert!(set.contains((-1, 0)));
    assert!(!set.contains((3, 6)));
    assert!(!set.contains((100, 100)));
    assert_eq!(set.iter().collect::<Vec<_>>(), vec![(-1, 0), (3, 7), (5, -2)]);

    let empty = CellSet::new();
    assert!(empty.is_empty());
    assert!(!empty.contains((0, 0)));
    assert_eq!(empty.iter().count(), 0);

    // Equality doesn't depend on insertion order.
    let reversed = [(-1, 0), (3, 7), (5, -2)].into_iter().collect::<CellSet>();
    assert_eq!(set, reversed);
}

#[test]
fn test_bounds_coords() {
    let bounds = Bounds::new(1, 2, 3, 4);
    assert_eq!(
        bounds.coords().collect::<Vec<_>>(),
        vec![(1, 3), (1, 4), (2, 3), (2, 4)]
    );
    assert!(bounds.contains((2, 4)));
    assert!(!bounds.contains((0, 4)));
    assert!(!bounds.contains((2, 5)));
    assert_eq!(Bounds::new(3, 1, 1, 1).height(), 0);
}

#[test]
fn test_far_apart_cell_set() {
    let extremes = [(0, i32::MIN), (0, i32::MAX)].into_iter().collect::<CellSet>();
    assert_eq!(extremes.len(), 2);
    assert!(extremes.contains((0, i32::MIN)));
    assert!(extremes.contains((0, i32::MAX)));
    assert!(!extremes.contains((0, 0)));
    assert_eq!(
        extremes.iter().collect::<Vec<_>>(),
        vec![(0, i32::MIN), (0, i32::MAX)]
    );
    assert_eq!(extremes.to_string(), "{(0, -2147483648), (0, 2147483647)}");

    let corners = [(20_000, 20_000), (0, 0), (0, 0)]
        .into_iter()
        .collect::<CellSet>();
    assert!(matches!(corners.members, Members::Sparse(_)));
    assert_eq!(corners.len(), 2);
    assert!(corners.contains((20_000, 20_000)));
    assert!(!corners.contains((20_000, 0)));
    assert_eq!(
        corners,
        [(0, 0), (20_000, 20_000)].into_iter().collect::<CellSet>()
    );

    let whole_plane = Bounds::new(i32::MIN, i32::MAX, i32::MIN, i32::MAX);
    assert_eq!(whole_plane.width(), 1 << 32);
    assert!(Bounds::new(i32::MIN, i32::MAX, 0, 0).area().is_some());
}
