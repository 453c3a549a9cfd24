use crate::grid::{Coord, Grid};
use crate::positions::bounds;
use std::fmt;

const TEXT_BOX_PADDING: usize = 4;
const TEXT_BOX_WIDTH: usize = 90;

/// One sequence drawn on its grid. The first line spells out the labels visited; below it, each
/// key shows the step at which it was last visited (`0` for the start, then `1`-`9`, `a`-`z`),
/// `-` if it wasn't visited, and `.` for positions without a key.
pub struct SequenceDrawing<'a> {
    pub grid: &'a Grid,
    pub seq: &'a [Coord],
}

impl<'a> SequenceDrawing<'a> {
    /// Columns taken up: the label line, or the grid, whichever is wider.
    pub fn width(&self) -> usize {
        let grid_width = bounds(self.grid).map(|bounds| bounds.width()).unwrap_or(0);
        self.seq.len().max(grid_width)
    }
}

impl<'a> fmt::Display for SequenceDrawing<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for coord in self.seq {
            match self.grid.label(*coord) {
                Some(label) => write!(f, "{}", label)?,
                None => write!(f, "?")?,
            }
        }
        writeln!(f)?;

        let Ok(bounds) = bounds(self.grid) else {
            return Ok(());
        };
        for row in bounds.min_row..=bounds.max_row {
            for col in bounds.min_col..=bounds.max_col {
                let step = self.seq.iter().rposition(|coord| *coord == (row, col));
                let ch = match (self.grid.label((row, col)), step) {
                    (None, _) => '.',
                    (Some(_), None) => '-',
                    (Some(_), Some(step)) => std::char::from_digit(step as u32, 36).unwrap_or('+'),
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A bunch of sequences. This type exists solely for its `Display` method, which will draw all of
/// them, and will put them side by side when they fit in `width` columns.
pub struct SequenceSet<'a> {
    pub grid: &'a Grid,
    pub seqs: &'a [Vec<Coord>],
    pub width: usize,
}

impl<'a> SequenceSet<'a> {
    /// Fit the drawings to the terminal, if there is one.
    pub fn new(grid: &'a Grid, seqs: &'a [Vec<Coord>]) -> SequenceSet<'a> {
        let width = termsize::get()
            .map(|size| size.cols as usize)
            .unwrap_or(TEXT_BOX_WIDTH);
        SequenceSet { grid, seqs, width }
    }
}

impl<'a> fmt::Display for SequenceSet<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut bands = Bands::new(self.width);
        for seq in self.seqs {
            bands.push(SequenceDrawing {
                grid: self.grid,
                seq,
            });
        }
        for (i, band) in bands.done.iter().chain(Some(&bands.cur)).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write_band(f, band)?;
        }
        Ok(())
    }
}

/// A drawing, already rendered, and how many columns it takes up.
struct Block {
    width: usize,
    lines: Vec<String>,
}

/// Drawings laid out left to right, starting a new band below whenever the next one won't fit in
/// `max_width` columns. Every drawing is preceded by `TEXT_BOX_PADDING` spaces.
struct Bands {
    max_width: usize,
    done: Vec<Vec<Block>>,
    cur: Vec<Block>,
    cur_width: usize,
}

impl Bands {
    fn new(max_width: usize) -> Bands {
        Bands {
            max_width,
            done: Vec::new(),
            cur: Vec::new(),
            cur_width: 0,
        }
    }

    fn push(&mut self, drawing: SequenceDrawing) {
        let width = drawing.width() + TEXT_BOX_PADDING;
        if !self.cur.is_empty() && self.cur_width + width > self.max_width {
            self.done.push(std::mem::take(&mut self.cur));
            self.cur_width = 0;
        }
        self.cur.push(Block {
            width,
            lines: drawing.to_string().lines().map(String::from).collect(),
        });
        self.cur_width += width;
    }
}

fn write_band(f: &mut fmt::Formatter, band: &[Block]) -> fmt::Result {
    let height = band.iter().map(|block| block.lines.len()).max().unwrap_or(0);
    for row in 0..height {
        let mut line = String::new();
        let mut col = 0;
        for block in band {
            if let Some(text) = block.lines.get(row) {
                let len = line.chars().count();
                let indent = (col + TEXT_BOX_PADDING).saturating_sub(len);
                line.push_str(&" ".repeat(indent));
                line.push_str(text);
            }
            col += block.width;
        }
        writeln!(f, "{}", line)?;
    }
    Ok(())
}

#[test]
fn test_drawing() {
    use crate::grid::get_grid;

    let grid = get_grid();
    let seq = [(4, 1), (2, 2), (1, 4), (3, 3), (1, 2)];
    let drawing = SequenceDrawing {
        grid: &grid,
        seq: &seq,
    };
    let expected = "1GDMB\n-4-2-\n-1---\n--3--\n0--..\n";
    assert_eq!(drawing.to_string(), expected);
    assert_eq!(drawing.width(), 5);

    let long = [(4, 1), (2, 2), (4, 3), (2, 2), (4, 1), (2, 2), (4, 3)];
    let drawing = SequenceDrawing {
        grid: &grid,
        seq: &long,
    };
    assert_eq!(drawing.width(), 7);
    assert_eq!(drawing.to_string().lines().next(), Some("1G3G1G3"));
}

#[test]
fn test_side_by_side() {
    let grid = Grid::from_rows(["AB", "CD"]);
    let seqs = vec![vec![(1, 1)], vec![(2, 2)], vec![(1, 2)]];
    let set = SequenceSet {
        grid: &grid,
        seqs: &seqs,
        width: 12,
    };
    // Each drawing is 2 wide plus padding, so two fit per row.
    let expected = "    A     D\n    0-    --\n    --    -0\n\n    B\n    -0\n    --\n";
    assert_eq!(set.to_string(), expected);
}

#[test]
fn test_one_per_band() {
    let grid = Grid::from_rows(["AB", "CD"]);
    let seqs = vec![vec![(1, 1), (2, 2)], vec![(2, 1)]];
    let set = SequenceSet {
        grid: &grid,
        seqs: &seqs,
        width: 5,
    };
    // Too narrow for even one drawing, which still gets a band of its own.
    let expected = "    AD\n    0-\n    -1\n\n    C\n    --\n    0-\n";
    assert_eq!(set.to_string(), expected);
    assert_eq!(
        SequenceSet {
            grid: &grid,
            seqs: &[],
            width: 5
        }
        .to_string(),
        ""
    );
}
