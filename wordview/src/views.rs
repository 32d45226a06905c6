use std::fmt;

/// Shown while a lookup is in flight.
pub struct Spinner;

impl fmt::Display for Spinner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Looking up the word...")
    }
}

/// Shown when the dictionary has no entry for the word.
pub struct NotFoundPage;

impl fmt::Display for NotFoundPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Couldn't find the word you were looking for.")
    }
}

/// Shown for any lookup failure other than a missing word.
pub struct ErrorMessage;

impl fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Encountered an error while searching for the word definition."
        )
    }
}
