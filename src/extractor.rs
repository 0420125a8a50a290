//! Address extraction from opaque place results.

use tracing::trace;

use crate::place::{ComponentType, PlaceResult};

/// Structured address record assembled from one place selection.
///
/// Every field is plain text; a component missing from the source place
/// extracts as the empty string and is left to form validation to flag.
/// `address_line2` is never populated from the external source. Records are
/// value-only: each selection produces a fresh record that supersedes the
/// previous one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Address {
    /// Street line composed of street number and route (e.g. "221B Baker St")
    pub address_line1: String,
    /// Secondary line (unit, suite); never filled by extraction
    pub address_line2: String,
    /// City/locality
    pub city: String,
    /// State abbreviation (short form of the first-level administrative area)
    pub state: String,
    /// Postal code
    pub postal_code: String,
    /// ISO 3166-1 alpha-2 country code
    pub country: String,
}

impl Address {
    /// Check if every field is empty.
    pub fn is_empty(&self) -> bool {
        self.address_line1.is_empty()
            && self.address_line2.is_empty()
            && self.city.is_empty()
            && self.state.is_empty()
            && self.postal_code.is_empty()
            && self.country.is_empty()
    }
}

/// Maps opaque place results to [`Address`] records.
///
/// All lookups are best-effort: a missing component never errors, it yields
/// an empty field. The only policy knob is how the street line is composed
/// when the street number is absent.
///
/// # Examples
///
/// ```rust
/// use address_autofill::{AddressComponent, AddressExtractor, ComponentType, PlaceResult};
///
/// let place = PlaceResult::new()
///     .with_component(AddressComponent::new("221B", "221B", vec![ComponentType::StreetNumber]))
///     .with_component(AddressComponent::new("Baker Street", "Baker St", vec![ComponentType::Route]));
///
/// let address = AddressExtractor::new().extract(&place);
/// assert_eq!(address.address_line1, "221B Baker Street");
/// ```
#[derive(Debug, Clone, Default)]
pub struct AddressExtractor {
    trim_street_line: bool,
}

impl AddressExtractor {
    /// Create an extractor with default options.
    ///
    /// By default the street line is the raw `"{street_number} {street}"`
    /// composition with either side empty when absent, so a missing street
    /// number leaves a leading space.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether the composed street line is whitespace-trimmed.
    pub fn with_trim_street_line(mut self, trim: bool) -> Self {
        self.trim_street_line = trim;
        self
    }

    /// Street number of the place, if present.
    pub fn street_number<'a>(&self, place: &'a PlaceResult) -> Option<&'a str> {
        place.long_name(&ComponentType::StreetNumber)
    }

    /// Street/route name of the place, if present.
    pub fn street<'a>(&self, place: &'a PlaceResult) -> Option<&'a str> {
        place.long_name(&ComponentType::Route)
    }

    /// City/locality of the place, if present.
    pub fn locality<'a>(&self, place: &'a PlaceResult) -> Option<&'a str> {
        place.long_name(&ComponentType::Locality)
    }

    /// State abbreviation of the place, if present.
    pub fn state<'a>(&self, place: &'a PlaceResult) -> Option<&'a str> {
        place.short_name(&ComponentType::AdministrativeAreaLevel1)
    }

    /// Postal code of the place, if present.
    pub fn postal_code<'a>(&self, place: &'a PlaceResult) -> Option<&'a str> {
        place.long_name(&ComponentType::PostalCode)
    }

    /// ISO alpha-2 country code of the place, if present.
    pub fn country<'a>(&self, place: &'a PlaceResult) -> Option<&'a str> {
        place.short_name(&ComponentType::Country)
    }

    /// The provider's formatted display string, passed through unchanged.
    pub fn formatted_address<'a>(&self, place: &'a PlaceResult) -> Option<&'a str> {
        place.formatted_address.as_deref()
    }

    /// Compose the street line from street number and route.
    pub fn street_line(&self, place: &PlaceResult) -> String {
        let line = format!(
            "{} {}",
            self.street_number(place).unwrap_or_default(),
            self.street(place).unwrap_or_default()
        );
        if self.trim_street_line {
            line.trim().to_string()
        } else {
            line
        }
    }

    /// Extract a full [`Address`] record from a place result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use address_autofill::{AddressExtractor, PlaceResult};
    ///
    /// // A result with no recognized components extracts cleanly; the form's
    /// // required-field validators produce the user-facing feedback.
    /// let address = AddressExtractor::new()
    ///     .with_trim_street_line(true)
    ///     .extract(&PlaceResult::new());
    /// assert!(address.is_empty());
    /// ```
    pub fn extract(&self, place: &PlaceResult) -> Address {
        let address = Address {
            address_line1: self.street_line(place),
            address_line2: String::new(),
            city: self.locality(place).unwrap_or_default().to_string(),
            state: self.state(place).unwrap_or_default().to_string(),
            postal_code: self.postal_code(place).unwrap_or_default().to_string(),
            country: self.country(place).unwrap_or_default().to_string(),
        };
        trace!(
            components = place.address_components.len(),
            empty = address.is_empty(),
            "extracted address from place result"
        );
        address
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::place::AddressComponent;

    fn full_place() -> PlaceResult {
        PlaceResult::new()
            .with_component(AddressComponent::new(
                "221B",
                "221B",
                vec![ComponentType::StreetNumber],
            ))
            .with_component(AddressComponent::new(
                "Baker St",
                "Baker St",
                vec![ComponentType::Route],
            ))
            .with_component(AddressComponent::new(
                "London",
                "London",
                vec![ComponentType::Locality],
            ))
            .with_component(AddressComponent::new(
                "Greater London",
                "LDN",
                vec![ComponentType::AdministrativeAreaLevel1],
            ))
            .with_component(AddressComponent::new(
                "NW1 6XE",
                "NW1 6XE",
                vec![ComponentType::PostalCode],
            ))
            .with_component(AddressComponent::new(
                "United Kingdom",
                "GB",
                vec![ComponentType::Country],
            ))
            .with_formatted_address("221B Baker St, London NW1 6XE, UK")
    }

    #[test]
    fn extracts_all_six_fields() {
        let address = AddressExtractor::new().extract(&full_place());

        assert_eq!(address.address_line1, "221B Baker St");
        assert_eq!(address.address_line2, "");
        assert_eq!(address.city, "London");
        assert_eq!(address.state, "LDN");
        assert_eq!(address.postal_code, "NW1 6XE");
        assert_eq!(address.country, "GB");
    }

    #[test]
    fn short_forms_for_state_and_country() {
        let extractor = AddressExtractor::new();
        let place = full_place();

        assert_eq!(extractor.state(&place), Some("LDN"));
        assert_eq!(extractor.country(&place), Some("GB"));
    }

    #[test]
    fn missing_street_number_keeps_leading_space() {
        let place = PlaceResult::new().with_component(AddressComponent::new(
            "Baker St",
            "Baker St",
            vec![ComponentType::Route],
        ));

        let address = AddressExtractor::new().extract(&place);
        assert_eq!(address.address_line1, " Baker St");
    }

    #[test]
    fn trim_option_normalizes_street_line() {
        let place = PlaceResult::new().with_component(AddressComponent::new(
            "Baker St",
            "Baker St",
            vec![ComponentType::Route],
        ));

        let extractor = AddressExtractor::new().with_trim_street_line(true);
        assert_eq!(extractor.extract(&place).address_line1, "Baker St");
        assert_eq!(extractor.street_line(&PlaceResult::new()), "");
    }

    #[test]
    fn empty_place_extracts_empty_record() {
        let address = AddressExtractor::new().extract(&PlaceResult::new());
        // Default composition is a lone space between two empty sides.
        assert_eq!(address.address_line1, " ");
        assert_eq!(address.city, "");
        assert_eq!(address.state, "");
        assert_eq!(address.postal_code, "");
        assert_eq!(address.country, "");
    }

    #[test]
    fn formatted_address_passes_through() {
        let extractor = AddressExtractor::new();
        assert_eq!(
            extractor.formatted_address(&full_place()),
            Some("221B Baker St, London NW1 6XE, UK")
        );
        assert_eq!(extractor.formatted_address(&PlaceResult::new()), None);
    }

    #[test]
    fn address_is_empty() {
        assert!(Address::default().is_empty());
        assert!(!AddressExtractor::new().extract(&full_place()).is_empty());
    }
}
