//! Postal address owned by a client

use std::fmt;

use serde::Serialize;

/// A client's home address.
///
/// Immutable after construction. `state` is a two-letter code and is the
/// grouping key for the per-state queries; it is compared case-sensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Address {
    pub street_number: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

impl Address {
    pub fn new(
        street_number: impl Into<String>,
        street: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        zip: impl Into<String>,
    ) -> Self {
        Self {
            street_number: street_number.into(),
            street: street.into(),
            city: city.into(),
            state: state.into(),
            zip: zip.into(),
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}, {}, {} {}",
            self.street_number, self.street, self.city, self.state, self.zip
        )
    }
}
