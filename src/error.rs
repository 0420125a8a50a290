//! Error types and handling for address-autofill.

/// Result type alias for address-autofill operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for address-autofill operations.
///
/// The selection path itself is infallible by design: missing or malformed
/// place components degrade to empty field values and surface through form
/// validation instead of errors. Errors here are confined to configuration
/// input that the external widget would reject.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Unrecognized place-type category string
    #[error("Invalid place type: {value:?} (expected \"establishment\", \"address\" or \"geocode\")")]
    InvalidPlaceType {
        /// The rejected category string
        value: String,
    },

    /// Malformed ISO 3166-1 alpha-2 country code
    #[error("Invalid country code: {value:?} (expected two ASCII letters)")]
    InvalidCountryCode {
        /// The rejected country code
        value: String,
    },
}

impl Error {
    /// Create a new invalid-place-type error
    pub fn invalid_place_type(value: impl Into<String>) -> Self {
        Self::InvalidPlaceType {
            value: value.into(),
        }
    }

    /// Create a new invalid-country-code error
    pub fn invalid_country_code(value: impl Into<String>) -> Self {
        Self::InvalidCountryCode {
            value: value.into(),
        }
    }
}
