//! How many ways can a knight hop around a keypad?
//!
//! Knightpad counts knight-move sequences on a small keypad, keeping only those that obey a set
//! of filters. With the default rules (stay on the keypad, never land on a missing key, visit at
//! most two vowels) there are a few hundred thousand ten-key sequences, out of the 134 million
//! (`8^9`) per start that a knight could trace without any rules at all. The trick is that the
//! filters are checked after every single hop, so a sequence that falls off the keypad on its
//! second move is never extended any further.
//!
//! Knightpad can be used either as an application (`knightpad --help`), or as a library.
//!
//! ## The keypad
//!
//! ```text
//!      1  2  3  4  5
//!  1   A  B  C  D  E
//!  2   F  G  H  I  J
//!  3   K  L  M  N  O
//!  4   1  2  3  .  .
//! ```
//!
//! ```
//! use knightpad::grid::{get_grid, Label};
//! use knightpad::positions::{bounds, missing_positions, vowel_positions, Bounds};
//!
//! let grid = get_grid();
//! assert_eq!(grid.label((4, 1)), Some(Label::Digit(1)));
//!
//! let bounds = bounds(&grid).unwrap();
//! assert_eq!(bounds, Bounds::new(1, 4, 1, 5));
//! assert_eq!(missing_positions(&grid, bounds).to_string(), "{(4, 4), (4, 5)}");
//! assert_eq!(vowel_positions(&grid).len(), 4);
//! ```
//!
//! ## Enumerating sequences
//!
//! The engine takes a start, a number of moves, and a list of filters:
//!
//! ```
//! use knightpad::engine::generate_sequences;
//! use knightpad::filters::{Filter, WithinBounds};
//! use knightpad::positions::Bounds;
//!
//! let filters: Vec<Box<dyn Filter>> =
//!     vec![Box::new(WithinBounds::new(Bounds::new(1, 4, 1, 5)).unwrap())];
//! let seqs = generate_sequences((1, 1), 1, &filters).unwrap();
//! assert_eq!(seqs, vec![vec![(1, 1), (3, 2)], vec![(1, 1), (2, 3)]]);
//! ```
//!
//! Or use an `Enumerator` to do the bookkeeping over every start on the keypad:
//!
//! ```
//! use knightpad::grid::get_grid;
//! use knightpad::Enumerator;
//!
//! let mut enumerator = Enumerator::new(get_grid()).unwrap();
//! enumerator.keypad_filters(2).unwrap();
//! let tally = enumerator.count_all(2).unwrap();
//! assert_eq!(tally.total, 202);
//! ```

pub mod display;
pub mod engine;
pub mod error;
pub mod filters;
pub mod grid;
pub mod moves;
pub mod positions;

pub use engine::{count_sequences, generate_sequences, Sequence};
pub use error::Error;

use filters::{Avoids, Filter, VowelHitLimit, WithinBounds};
use grid::{Coord, Grid};
use positions::{Bounds, CellSet};
use rayon::prelude::*;
use std::fmt;
use std::time::Instant;
use tracing::info;

/************************
 *     Tally            *
 ************************/

/// How many sequences survived from each start, and in total.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tally {
    /// In row-major order of the start.
    pub per_start: Vec<(Coord, usize)>,
    pub total: usize,
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for ((row, col), count) in &self.per_start {
            writeln!(f, "  ({}, {}): {:>7}", row, col, count)?;
        }
        writeln!(f, "  total:  {:>7}", self.total)
    }
}

/************************
 *     Enumerator       *
 ************************/

/// Counts the sequences that pass a set of filters, from every start on a grid.
pub struct Enumerator {
    grid: Grid,
    bounds: Bounds,
    vowels: CellSet,
    missing: CellSet,
    filters: Vec<Box<dyn Filter>>,
    config: Config,
}

impl Enumerator {
    /// Classify the grid's positions. Call `filter()` or `keypad_filters()` to say which
    /// sequences to keep, then `count_all()` to count them.
    pub fn new(grid: Grid) -> Result<Enumerator, Error> {
        let bounds = positions::bounds(&grid)?;
        let vowels = positions::vowel_positions(&grid);
        let missing = positions::missing_positions(&grid, bounds);
        Ok(Enumerator {
            grid,
            bounds,
            vowels,
            missing,
            filters: Vec::new(),
            config: Config::default(),
        })
    }

    pub fn config(&mut self) -> &mut Config {
        &mut self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn vowels(&self) -> &CellSet {
        &self.vowels
    }

    pub fn missing(&self) -> &CellSet {
        &self.missing
    }

    pub fn filters(&self) -> &[Box<dyn Filter>] {
        &self.filters
    }

    /// Add the requirement that every sequence passes `filter`. Filters are checked in the order
    /// they were added.
    pub fn filter(&mut self, filter: impl Filter + 'static) {
        if self.config.log_filters {
            info!("Filter {} = {:?}", filter.name(), filter);
        }
        self.filters.push(Box::new(filter));
    }

    /// The standard rules: stay inside the grid's bounds, never land on a missing position, and
    /// visit vowels at most `max_vowels` times.
    pub fn keypad_filters(&mut self, max_vowels: usize) -> Result<(), Error> {
        self.filter(WithinBounds::new(self.bounds)?);
        self.filter(Avoids::new(self.missing.clone()));
        self.filter(VowelHitLimit::new(self.vowels.clone(), max_vowels));
        Ok(())
    }

    /// Every position in the grid's bounding rectangle, missing ones included. (Filters get to
    /// decide whether a missing position is a valid start.)
    pub fn starts(&self) -> Vec<Coord> {
        self.bounds.coords().collect()
    }

    pub fn sequences_from(&self, start: Coord, step_count: i64) -> Result<Vec<Sequence>, Error> {
        generate_sequences(start, step_count, &self.filters)
    }

    pub fn count_from(&self, start: Coord, step_count: i64) -> Result<usize, Error> {
        let start_time = Instant::now();
        let count = count_sequences(start, step_count, &self.filters)?;
        if self.config.log_steps {
            info!("Start ({}, {}): {} sequences", start.0, start.1, count);
        }
        if self.config.log_elapsed {
            info!("  elapsed: {:5?}ms", start_time.elapsed().as_millis());
        }
        Ok(count)
    }

    /// Count the sequences of `step_count` moves from every start. Starts are independent, so
    /// unless `config.serial` is set they're counted in parallel.
    pub fn count_all(&self, step_count: i64) -> Result<Tally, Error> {
        let start_time = Instant::now();
        let starts = self.starts();

        let per_start = if self.config.serial {
            starts
                .iter()
                .map(|start| {
                    self.count_from(*start, step_count)
                        .map(|count| (*start, count))
                })
                .collect::<Result<Vec<_>, Error>>()?
        } else {
            starts
                .par_iter()
                .map(|start| {
                    self.count_from(*start, step_count)
                        .map(|count| (*start, count))
                })
                .collect::<Result<Vec<_>, Error>>()?
        };
        let total: usize = per_start.iter().map(|(_, count)| count).sum();

        if self.config.log_steps {
            info!(
                "Total: {} sequences of {} moves from {} starts",
                total,
                step_count,
                starts.len()
            );
        }
        if self.config.log_elapsed {
            info!("Total time: {}ms", start_time.elapsed().as_millis());
        }
        Ok(Tally { per_start, total })
    }
}

/************************
 *     Config           *
 ************************/

// When running `main`, this is loaded from command line args.
// See `Config` in `main.rs`.
/// Configuration options. Set these using `Enumerator.config()`.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Count one start at a time instead of in parallel
    pub serial: bool,
    /// Log the count from each start, and the total
    pub log_steps: bool,
    /// Log how long each start took
    pub log_elapsed: bool,
    /// Log the list of filters as they're added
    pub log_filters: bool,
}

#[test]
fn test_enumerator_classification() {
    let enumerator = Enumerator::new(grid::get_grid()).unwrap();
    assert_eq!(enumerator.bounds(), Bounds::new(1, 4, 1, 5));
    assert_eq!(enumerator.vowels().len(), 4);
    assert_eq!(
        enumerator.missing().iter().collect::<Vec<_>>(),
        vec![(4, 4), (4, 5)]
    );
    assert_eq!(enumerator.starts().len(), 20);
    assert!(enumerator.filters().is_empty());
}

#[test]
fn test_enumerator_empty_grid() {
    assert!(matches!(
        Enumerator::new(Grid::default()),
        Err(Error::EmptyGrid)
    ));
}

#[test]
fn test_serial_matches_parallel() {
    let mut enumerator = Enumerator::new(grid::get_grid()).unwrap();
    enumerator.keypad_filters(2).unwrap();
    let parallel = enumerator.count_all(5).unwrap();
    enumerator.config().serial = true;
    let serial = enumerator.count_all(5).unwrap();
    assert_eq!(parallel, serial);
    assert_eq!(parallel.per_start.len(), 20);
    assert_eq!(parallel.per_start[0].0, (1, 1));
    assert_eq!(parallel.per_start[19], ((4, 5), 0));
}

#[test]
fn test_enumerator_bad_step_count() {
    let enumerator = Enumerator::new(grid::get_grid()).unwrap();
    assert_eq!(enumerator.count_all(-2), Err(Error::InvalidStepCount(-2)));
}

#[test]
#[should_panic(expected = "the filter gave up")]
fn test_parallel_filter_panics_propagate() {
    use filters::Pred;

    let mut enumerator = Enumerator::new(grid::get_grid()).unwrap();
    enumerator.config().serial = false;
    enumerator.filter(Pred::new("GivesUp", |seq| {
        if seq.len() > 2 {
            panic!("the filter gave up");
        }
        true
    }));
    let _ = enumerator.count_all(3);
}
