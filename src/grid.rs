use crate::positions;
use std::fmt;

/// A `(row, col)` position. Signed, because knight moves happily wander off the board.
pub type Coord = (i32, i32);

/// The keypad, read left to right and top to bottom. `.` marks a position with no key.
const KEYPAD: [&str; 4] = ["ABCDE", "FGHIJ", "KLMNO", "123.."];

/************************
 *     Label            *
 ************************/

/// What's printed on a key: either a letter or a digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Label {
    Letter(char),
    Digit(u8),
}

impl Label {
    /// Read a label from a layout character. Returns `None` for anything that isn't an ASCII
    /// letter or digit, which is how absent keys are written.
    pub fn from_char(ch: char) -> Option<Label> {
        if ch.is_ascii_alphabetic() {
            Some(Label::Letter(ch))
        } else if let Some(digit) = ch.to_digit(10) {
            Some(Label::Digit(digit as u8))
        } else {
            None
        }
    }

    pub fn is_vowel(&self) -> bool {
        match self {
            Label::Letter(ch) => matches!(ch.to_ascii_uppercase(), 'A' | 'E' | 'I' | 'O' | 'U'),
            Label::Digit(_) => false,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Label::Letter(ch) => write!(f, "{}", ch),
            Label::Digit(n) => write!(f, "{}", n),
        }
    }
}

/************************
 *     Grid             *
 ************************/

/// One key of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
    pub label: Label,
}

impl Cell {
    pub fn coord(&self) -> Coord {
        (self.row, self.col)
    }
}

/// A set of labeled cells. Positions with no key simply have no cell.
///
/// Cells are kept sorted in row-major order, so two grids with the same cells compare equal no
/// matter how they were built.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(cells: impl IntoIterator<Item = Cell>) -> Grid {
        let mut cells = cells.into_iter().collect::<Vec<_>>();
        cells.sort();
        cells.dedup_by_key(|cell| cell.coord());
        Grid { cells }
    }

    /// Build a grid from rows of layout characters, with the top-left character at `(1, 1)`.
    /// Characters that aren't letters or digits (conventionally `.`) leave their position empty.
    pub fn from_rows<'a>(rows: impl IntoIterator<Item = &'a str>) -> Grid {
        let mut cells = Vec::new();
        for (i, row) in rows.into_iter().enumerate() {
            for (j, ch) in row.chars().enumerate() {
                if let Some(label) = Label::from_char(ch) {
                    cells.push(Cell {
                        row: i as i32 + 1,
                        col: j as i32 + 1,
                        label,
                    });
                }
            }
        }
        Grid::new(cells)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.iter().map(|cell| cell.coord())
    }

    pub fn label(&self, coord: Coord) -> Option<Label> {
        self.cells
            .binary_search_by_key(&coord, |cell| cell.coord())
            .ok()
            .map(|i| self.cells[i].label)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// The keypad:
///
/// ```text
///   A B C D E
///   F G H I J
///   K L M N O
///   1 2 3 . .
/// ```
///
/// Rows run 1..=4 and columns 1..=5. `(4, 4)` and `(4, 5)` have no key.
pub fn get_grid() -> Grid {
    Grid::from_rows(KEYPAD)
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let Ok(bounds) = positions::bounds(self) else {
            return Ok(());
        };

        write!(f, "   ")?;
        for col in bounds.min_col..=bounds.max_col {
            write!(f, " {:>2}", col)?;
        }
        writeln!(f)?;
        for row in bounds.min_row..=bounds.max_row {
            write!(f, "{:>2} ", row)?;
            for col in bounds.min_col..=bounds.max_col {
                match self.label((row, col)) {
                    Some(label) => write!(f, " {:>2}", label.to_string())?,
                    None => write!(f, "  .")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[test]
fn test_keypad() {
    let grid = get_grid();
    assert_eq!(grid.len(), 18);
    assert_eq!(grid.label((1, 1)), Some(Label::Letter('A')));
    assert_eq!(grid.label((2, 4)), Some(Label::Letter('I')));
    assert_eq!(grid.label((3, 5)), Some(Label::Letter('O')));
    assert_eq!(grid.label((4, 1)), Some(Label::Digit(1)));
    assert_eq!(grid.label((4, 3)), Some(Label::Digit(3)));
    assert_eq!(grid.label((4, 4)), None);
    assert_eq!(grid.label((4, 5)), None);
    assert_eq!(grid.label((0, 0)), None);

    // Same cells every time.
    assert_eq!(get_grid(), grid);
}

#[test]
fn test_labels() {
    assert_eq!(Label::from_char('q'), Some(Label::Letter('q')));
    assert_eq!(Label::from_char('7'), Some(Label::Digit(7)));
    assert_eq!(Label::from_char('.'), None);
    assert_eq!(Label::from_char(' '), None);

    assert!(Label::Letter('E').is_vowel());
    assert!(Label::Letter('u').is_vowel());
    assert!(!Label::Letter('Y').is_vowel());
    assert!(!Label::Digit(1).is_vowel());
}

#[test]
fn test_display_grid() {
    let expected = "     1  2  3  4  5
 1   A  B  C  D  E
 2   F  G  H  I  J
 3   K  L  M  N  O
 4   1  2  3  .  .
";
    assert_eq!(get_grid().to_string(), expected);
    assert_eq!(Grid::default().to_string(), "");
}
