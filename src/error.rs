use thiserror::Error;

/// Everything that can go wrong while setting up or running an enumeration.
///
/// None of these are retried: each one means the caller asked for something that doesn't make
/// sense, and is reported once.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("cannot compute the bounds of an empty grid")]
    EmptyGrid,

    #[error("step count must be non-negative, got {0}")]
    InvalidStepCount(i64),

    #[error("malformed filter {filter}: {reason}")]
    MalformedFilter {
        filter: &'static str,
        reason: String,
    },
}

#[test]
fn test_error_messages() {
    assert_eq!(
        Error::EmptyGrid.to_string(),
        "cannot compute the bounds of an empty grid"
    );
    assert_eq!(
        Error::InvalidStepCount(-3).to_string(),
        "step count must be non-negative, got -3"
    );
    let err = Error::MalformedFilter {
        filter: "WithinBounds",
        reason: "min_row 4 > max_row 1".to_owned(),
    };
    assert_eq!(
        err.to_string(),
        "malformed filter WithinBounds: min_row 4 > max_row 1"
    );
}
