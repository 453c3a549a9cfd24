//! Count the knight-move sequences on the keypad. See the crate docs in `lib.rs`.

use argh::FromArgs;
use knightpad::display::SequenceSet;
use knightpad::filters::NoBacktrack;
use knightpad::grid::get_grid;
use knightpad::{Enumerator, Error};
use std::process::ExitCode;
use tracing::Level;

/************************
 *     Main             *
 ************************/

/// knightpad: count knight-move sequences on a keypad
#[derive(Debug, Clone, FromArgs)]
struct Config {
    /// number of knight moves per sequence (sequences have one more key than this)
    #[argh(option, default = "9")]
    steps: i64,

    /// maximum number of vowel keys a sequence may land on
    #[argh(option, default = "2")]
    max_vowels: usize,

    /// forbid hopping straight back to the previous key
    #[argh(switch, long = "no-backtrack")]
    no_backtrack: bool,

    /// count one start at a time instead of in parallel
    #[argh(switch, long = "serial")]
    serial: bool,

    /// draw up to this many sample sequences from each start (on stderr)
    #[argh(option)]
    show: Option<usize>,

    /// don't log anything besides the total
    #[argh(switch, short = 'q', long = "quiet")]
    quiet: bool,

    /// log the size of every generation of sequences
    #[argh(switch, short = 'v', long = "verbose")]
    verbose: bool,

    /// log the count from each start
    #[argh(switch, long = "log-steps")]
    log_steps: bool,

    /// log how long each start took
    #[argh(switch, long = "log-elapsed")]
    log_elapsed: bool,

    /// log the list of filters before counting
    #[argh(switch, long = "log-filters")]
    log_filters: bool,
}

fn init_logging(config: &Config) {
    let level = if config.quiet {
        Level::WARN
    } else if config.verbose {
        Level::TRACE
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .init();
}

fn run(config: &Config) -> Result<usize, Error> {
    let mut enumerator = Enumerator::new(get_grid())?;

    enumerator.config().serial = config.serial;
    if !config.quiet {
        enumerator.config().log_steps = config.log_steps;
        enumerator.config().log_elapsed = config.log_elapsed;
        enumerator.config().log_filters = config.log_filters;
    }

    enumerator.keypad_filters(config.max_vowels)?;
    if config.no_backtrack {
        enumerator.filter(NoBacktrack);
    }

    if let Some(limit) = config.show {
        for start in enumerator.starts() {
            let mut seqs = enumerator.sequences_from(start, config.steps)?;
            if seqs.is_empty() {
                continue;
            }
            seqs.truncate(limit);
            eprintln!("From ({}, {}):", start.0, start.1);
            eprintln!("{}", SequenceSet::new(enumerator.grid(), &seqs));
        }
    }

    let tally = enumerator.count_all(config.steps)?;
    Ok(tally.total)
}

fn main() -> ExitCode {
    let config = argh::from_env::<Config>();
    init_logging(&config);

    match run(&config) {
        Ok(total) => {
            println!("{}", total);
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
