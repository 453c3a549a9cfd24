//! Walk through the keypad count step by step: the keypad, how its keys are classified, how many
//! sequences survive from each start, and a few of them drawn out.

use knightpad::display::SequenceSet;
use knightpad::grid::get_grid;
use knightpad::Enumerator;

const STEPS: i64 = 9;
const MAX_VOWELS: usize = 2;

fn main() {
    let mut enumerator = Enumerator::new(get_grid()).unwrap();

    println!("Keypad:");
    println!("{}", enumerator.grid());
    println!("Bounds:            {}", enumerator.bounds());
    println!("Missing positions: {}", enumerator.missing());
    println!("Vowel positions:   {}", enumerator.vowels());
    println!();

    enumerator.keypad_filters(MAX_VOWELS).unwrap();
    let tally = enumerator.count_all(STEPS).unwrap();
    println!(
        "Sequences of {} keys with at most {} vowels:",
        STEPS + 1,
        MAX_VOWELS
    );
    println!("{}", tally);

    let samples = enumerator.sequences_from((4, 1), 4).unwrap();
    println!("A few 4-move sequences from key '1':");
    println!(
        "{}",
        SequenceSet::new(enumerator.grid(), &samples[..samples.len().min(6)])
    );
}
