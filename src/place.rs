//! Place-result types produced by the external autocomplete widget.
//!
//! The widget is an opaque collaborator: it owns suggestion matching and
//! delivers a selected place as a list of typed components plus a formatted
//! display string. Nothing in this crate validates that structure; lookups
//! are best-effort by type tag and absence is a normal outcome.

use std::fmt;

use crate::error::{Error, Result};

/// Type tag identifying which part of an address a component represents.
///
/// The closed variants are the tags the extractor consumes; every other tag
/// the provider emits is carried through as [`ComponentType::Other`] and
/// ignored during extraction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ComponentType {
    /// Street number (e.g. "221B")
    StreetNumber,
    /// Street/route name (e.g. "Baker St")
    Route,
    /// City/locality (e.g. "London")
    Locality,
    /// First-level administrative area; its short form is the state abbreviation
    AdministrativeAreaLevel1,
    /// Postal code (e.g. "NW1 6XE")
    PostalCode,
    /// Country; its short form is the ISO 3166-1 alpha-2 code
    Country,
    /// Any tag the extractor does not consume
    Other(String),
}

impl ComponentType {
    /// The provider's tag string for this component type.
    pub fn tag(&self) -> &str {
        match self {
            ComponentType::StreetNumber => "street_number",
            ComponentType::Route => "route",
            ComponentType::Locality => "locality",
            ComponentType::AdministrativeAreaLevel1 => "administrative_area_level_1",
            ComponentType::PostalCode => "postal_code",
            ComponentType::Country => "country",
            ComponentType::Other(tag) => tag,
        }
    }

    /// Parse from the provider's tag string.
    ///
    /// Never fails; unrecognized tags become [`ComponentType::Other`].
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "street_number" => ComponentType::StreetNumber,
            "route" => ComponentType::Route,
            "locality" => ComponentType::Locality,
            "administrative_area_level_1" => ComponentType::AdministrativeAreaLevel1,
            "postal_code" => ComponentType::PostalCode,
            "country" => ComponentType::Country,
            _ => ComponentType::Other(tag.to_string()),
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ComponentType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.tag())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ComponentType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(ComponentType::from_tag(&tag))
    }
}

/// One typed component of a selected place.
///
/// Components carry both a long form ("California") and a short form ("CA");
/// which one the extractor reads depends on the target field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AddressComponent {
    /// Full text of the component
    pub long_name: String,
    /// Abbreviated text of the component
    pub short_name: String,
    /// Type tags this component carries (a component may carry several)
    pub types: Vec<ComponentType>,
}

impl AddressComponent {
    /// Create a component with the given long form, short form, and type tags.
    pub fn new(
        long_name: impl Into<String>,
        short_name: impl Into<String>,
        types: Vec<ComponentType>,
    ) -> Self {
        Self {
            long_name: long_name.into(),
            short_name: short_name.into(),
            types,
        }
    }

    /// Whether this component carries the given type tag.
    pub fn has_type(&self, component_type: &ComponentType) -> bool {
        self.types.contains(component_type)
    }
}

/// Opaque place result delivered by the widget on selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlaceResult {
    /// Typed components of the selected place
    #[cfg_attr(feature = "serde", serde(default))]
    pub address_components: Vec<AddressComponent>,
    /// The provider's own formatted display string for the place
    #[cfg_attr(feature = "serde", serde(default))]
    pub formatted_address: Option<String>,
}

impl PlaceResult {
    /// Create an empty place result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a component (builder-style, mainly for tests and demos).
    pub fn with_component(mut self, component: AddressComponent) -> Self {
        self.address_components.push(component);
        self
    }

    /// Set the formatted display string (builder-style).
    pub fn with_formatted_address(mut self, formatted: impl Into<String>) -> Self {
        self.formatted_address = Some(formatted.into());
        self
    }

    /// First component carrying the given type tag, if any.
    pub fn component(&self, component_type: &ComponentType) -> Option<&AddressComponent> {
        self.address_components
            .iter()
            .find(|c| c.has_type(component_type))
    }

    /// Long form of the first component carrying the given type tag.
    pub fn long_name(&self, component_type: &ComponentType) -> Option<&str> {
        self.component(component_type).map(|c| c.long_name.as_str())
    }

    /// Short form of the first component carrying the given type tag.
    pub fn short_name(&self, component_type: &ComponentType) -> Option<&str> {
        self.component(component_type)
            .map(|c| c.short_name.as_str())
    }

    /// Check if the result carries no components and no formatted address.
    pub fn is_empty(&self) -> bool {
        self.address_components.is_empty() && self.formatted_address.is_none()
    }
}

/// Place-type category the widget is restricted to.
///
/// The widget accepts exactly these three categories; anything else is a
/// configuration error, not a runtime degradation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlaceType {
    /// Business/point-of-interest results
    Establishment,
    /// Precise street-address results
    Address,
    /// Geocoding results (the broadest category)
    #[default]
    Geocode,
}

impl PlaceType {
    /// The provider's category string for this place type.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlaceType::Establishment => "establishment",
            PlaceType::Address => "address",
            PlaceType::Geocode => "geocode",
        }
    }
}

impl fmt::Display for PlaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PlaceType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "establishment" => Ok(PlaceType::Establishment),
            "address" => Ok(PlaceType::Address),
            "geocode" => Ok(PlaceType::Geocode),
            _ => Err(Error::invalid_place_type(s)),
        }
    }
}

/// ISO 3166-1 alpha-2 country code used for the widget's country restriction.
///
/// Normalized to uppercase on construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CountryCode(String);

impl CountryCode {
    /// Create a country code, validating shape (two ASCII letters).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use address_autofill::CountryCode;
    ///
    /// let us = CountryCode::new("us")?;
    /// assert_eq!(us.as_str(), "US");
    /// assert!(CountryCode::new("USA").is_err());
    /// # Ok::<(), address_autofill::Error>(())
    /// ```
    pub fn new(code: impl AsRef<str>) -> Result<Self> {
        let code = code.as_ref();
        if code.len() == 2 && code.bytes().all(|b| b.is_ascii_alphabetic()) {
            Ok(Self(code.to_ascii_uppercase()))
        } else {
            Err(Error::invalid_country_code(code))
        }
    }

    /// The uppercase alpha-2 code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for CountryCode {
    /// The observed widget restriction: United States.
    fn default() -> Self {
        Self("US".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn baker_street() -> PlaceResult {
        PlaceResult::new()
            .with_component(AddressComponent::new(
                "221B",
                "221B",
                vec![ComponentType::StreetNumber],
            ))
            .with_component(AddressComponent::new(
                "Baker Street",
                "Baker St",
                vec![ComponentType::Route],
            ))
            .with_component(AddressComponent::new(
                "London",
                "London",
                vec![
                    ComponentType::Locality,
                    ComponentType::Other("political".to_string()),
                ],
            ))
            .with_formatted_address("221B Baker St, London NW1 6XE, UK")
    }

    #[test]
    fn component_type_tag_round_trip() {
        assert_eq!(ComponentType::StreetNumber.tag(), "street_number");
        assert_eq!(
            ComponentType::from_tag("administrative_area_level_1"),
            ComponentType::AdministrativeAreaLevel1
        );
        assert_eq!(
            ComponentType::from_tag("sublocality"),
            ComponentType::Other("sublocality".to_string())
        );
    }

    #[test]
    fn component_lookup_by_type() {
        let place = baker_street();

        assert_eq!(place.long_name(&ComponentType::StreetNumber), Some("221B"));
        assert_eq!(place.long_name(&ComponentType::Route), Some("Baker Street"));
        assert_eq!(place.short_name(&ComponentType::Route), Some("Baker St"));
        assert_eq!(place.long_name(&ComponentType::PostalCode), None);
    }

    #[test]
    fn multi_tagged_component_matches_each_tag() {
        let place = baker_street();

        let by_locality = place.component(&ComponentType::Locality);
        let by_political = place.component(&ComponentType::Other("political".to_string()));
        assert_eq!(by_locality, by_political);
        assert_eq!(by_locality.map(|c| c.long_name.as_str()), Some("London"));
    }

    #[test]
    fn empty_place_result() {
        assert!(PlaceResult::new().is_empty());
        assert!(!baker_street().is_empty());
    }

    #[test]
    fn place_type_parsing() {
        assert_eq!("geocode".parse::<PlaceType>().unwrap(), PlaceType::Geocode);
        assert_eq!(
            "establishment".parse::<PlaceType>().unwrap(),
            PlaceType::Establishment
        );
        assert_matches!(
            "Address".parse::<PlaceType>(),
            Err(Error::InvalidPlaceType { value }) if value == "Address"
        );
    }

    #[test]
    fn country_code_normalization() {
        assert_eq!(CountryCode::new("gb").unwrap().as_str(), "GB");
        assert_eq!(CountryCode::default().as_str(), "US");
        assert_matches!(
            CountryCode::new("USA"),
            Err(Error::InvalidCountryCode { value }) if value == "USA"
        );
        assert_matches!(CountryCode::new("1A"), Err(Error::InvalidCountryCode { .. }));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn place_result_wire_shape() {
        let json = r#"{
            "address_components": [
                {
                    "long_name": "221B",
                    "short_name": "221B",
                    "types": ["street_number"]
                },
                {
                    "long_name": "London",
                    "short_name": "London",
                    "types": ["locality", "political"]
                }
            ],
            "formatted_address": "221B Baker St, London NW1 6XE, UK"
        }"#;

        let place: PlaceResult = serde_json::from_str(json).unwrap();
        assert_eq!(place.long_name(&ComponentType::StreetNumber), Some("221B"));
        assert_eq!(place.long_name(&ComponentType::Locality), Some("London"));
        assert_eq!(
            place.formatted_address.as_deref(),
            Some("221B Baker St, London NW1 6XE, UK")
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_wire_payload_deserializes() {
        let place: PlaceResult = serde_json::from_str("{}").unwrap();
        assert!(place.is_empty());
    }
}
