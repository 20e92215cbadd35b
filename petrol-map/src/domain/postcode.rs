//! UK postcode shape validation.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Outward code, a space, then a digit and two letters drawn from the
/// letters Royal Mail uses in the unit (no C, I, K, M, O or V).
static POSTCODE_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z]{1,2}[0-9][A-Z0-9]? [0-9][ABD-HJLNP-UW-Z]{2}\b")
        .expect("postcode pattern is valid")
});

const MIN_LEN: usize = 5;
const MAX_LEN: usize = 7;

/// Reasons a postcode field is rejected.
///
/// The messages are shown to the user next to the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidPostcode {
    #[error("This field is required.")]
    Missing,

    #[error("Should be 5 to 7 letters")]
    Length,

    #[error("Not a recognised postcode")]
    Shape,
}

/// A postcode that passed the shape check.
///
/// Stored as entered apart from surrounding whitespace; the geocoder is
/// sent exactly this text.
///
/// # Examples
///
/// ```
/// use petrol_map::domain::{InvalidPostcode, Postcode};
///
/// let pc = Postcode::parse("N19 4LD").unwrap();
/// assert_eq!(pc.as_str(), "N19 4LD");
///
/// assert_eq!(Postcode::parse("M1"), Err(InvalidPostcode::Length));
/// assert_eq!(Postcode::parse("M1 1CC"), Err(InvalidPostcode::Shape));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Postcode(String);

impl Postcode {
    /// Run every check and collect all failures.
    ///
    /// A missing value short-circuits: nothing else is reported for it.
    pub fn validate(input: &str) -> Vec<InvalidPostcode> {
        if input.trim().is_empty() {
            return vec![InvalidPostcode::Missing];
        }

        let mut problems = Vec::new();
        let len = input.chars().count();
        if !(MIN_LEN..=MAX_LEN).contains(&len) {
            problems.push(InvalidPostcode::Length);
        }
        if !POSTCODE_SHAPE.is_match(input) {
            problems.push(InvalidPostcode::Shape);
        }
        problems
    }

    /// Parse a postcode, returning the first failure if any.
    pub fn parse(input: &str) -> Result<Self, InvalidPostcode> {
        match Self::validate(input).into_iter().next() {
            Some(problem) => Err(problem),
            None => Ok(Postcode(input.trim().to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Postcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Postcode({})", self.0)
    }
}

impl fmt::Display for Postcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
