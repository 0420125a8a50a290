//! # address-autofill
//!
//! Structured address extraction and form autofill for place-autocomplete
//! results.
//!
//! A third-party mapping widget owns suggestion matching and delivers a
//! selected place as an opaque result (typed components plus a formatted
//! display string). This crate owns everything after that: decomposing the
//! result into a structured address record, filling a validated six-field
//! form, and tracking the host view's selection state.
//!
//! ## Features
//!
//! - **Address Extraction**: Best-effort, non-failing decomposition of place
//!   results into street line, city, state, postal code, and country
//! - **Validated Form**: Explicit field schema with required/max-length rules
//!   and a pure validation pass returning per-field error lists
//! - **Widget Binding**: Host-owned handler registration, current-selection
//!   holder, and details-visible flag; the widget stays an opaque collaborator
//!
//! ## Quick Start
//!
//! ```rust
//! use address_autofill::{
//!     AddressAutofill, AddressComponent, ComponentType, FieldName, PlaceResult,
//! };
//!
//! let mut autofill = AddressAutofill::new();
//! autofill.initialize_form();
//!
//! // Delivered by the widget glue on selection.
//! let place = PlaceResult::new()
//!     .with_component(AddressComponent::new("221B", "221B", vec![ComponentType::StreetNumber]))
//!     .with_component(AddressComponent::new("Baker St", "Baker St", vec![ComponentType::Route]))
//!     .with_component(AddressComponent::new("London", "London", vec![ComponentType::Locality]))
//!     .with_formatted_address("221B Baker St, London, UK");
//!
//! let address = autofill.place_selected(place);
//! assert_eq!(address.address_line1, "221B Baker St");
//!
//! let form = autofill.form().expect("form was initialized");
//! assert_eq!(form.value(FieldName::City), "London");
//! assert!(autofill.details_visible());
//! ```

#![deny(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod binder;
pub mod error;
pub mod extractor;
pub mod form;
pub mod place;

// Re-export main API
pub use binder::{AutocompleteBinder, AutocompleteOptions, SelectionHandler};
pub use error::{Error, Result};
pub use extractor::{Address, AddressExtractor};
pub use form::{
    AddressForm, AddressFormController, FieldName, FieldRules, ValidationError, ValidationReport,
};
pub use place::{AddressComponent, ComponentType, CountryCode, PlaceResult, PlaceType};

use tracing::debug;

/// Main entry point: wires the binder, extractor, and form together.
///
/// Owns the whole selection flow the way the host view does: a selection is
/// retained as the current place, decomposed into an [`Address`], patched
/// into the form (marking it touched), and the details section is revealed.
///
/// # Examples
///
/// ```rust
/// use address_autofill::{AddressAutofill, AutofillConfig, CountryCode, PlaceType};
///
/// let config = AutofillConfig::builder()
///     .country(CountryCode::new("GB")?)
///     .place_type(PlaceType::Address)
///     .trim_street_line(true)
///     .build();
///
/// let mut autofill = AddressAutofill::with_config(config);
/// autofill.initialize_form();
/// # Ok::<(), address_autofill::Error>(())
/// ```
#[derive(Debug)]
pub struct AddressAutofill {
    config: AutofillConfig,
    extractor: AddressExtractor,
    binder: AutocompleteBinder,
    controller: AddressFormController,
    formatted_address: Option<String>,
}

impl AddressAutofill {
    /// Create an autofill with the default configuration.
    pub fn new() -> Self {
        Self::with_config(AutofillConfig::default())
    }

    /// Create an autofill with a custom configuration.
    pub fn with_config(config: AutofillConfig) -> Self {
        let options = AutocompleteOptions::new()
            .with_country(config.country.clone())
            .with_place_type(config.place_type);
        let extractor = AddressExtractor::new().with_trim_street_line(config.trim_street_line);
        Self {
            config,
            extractor,
            binder: AutocompleteBinder::new(options),
            controller: AddressFormController::new(),
            formatted_address: None,
        }
    }

    /// Create (or replace) the address form, all fields empty.
    pub fn initialize_form(&mut self) {
        self.controller.initialize();
    }

    /// Register a handler for future selections.
    pub fn subscribe(&mut self, handler: impl FnMut(&PlaceResult) + 'static) {
        self.binder.subscribe(handler);
    }

    /// Run the full selection flow for a place delivered by the widget.
    ///
    /// Retains the place and its formatted address, notifies subscribers,
    /// reveals the details section, extracts the address record, and patches
    /// it into the form. Returns the extracted record. If the form was never
    /// initialized the patch is silently skipped.
    pub fn place_selected(&mut self, place: PlaceResult) -> Address {
        let address = self.extractor.extract(&place);
        self.formatted_address = self
            .extractor
            .formatted_address(&place)
            .map(|s| s.to_string());
        self.binder.place_selected(place);
        self.controller.patch(&address);
        debug!(
            formatted = self.formatted_address.as_deref().unwrap_or(""),
            "selection flow complete"
        );
        address
    }

    /// The current form, if initialized.
    pub fn form(&self) -> Option<&AddressForm> {
        self.controller.form()
    }

    /// Mutable access to the current form, if initialized.
    pub fn form_mut(&mut self) -> Option<&mut AddressForm> {
        self.controller.form_mut()
    }

    /// The most recent selection, if any.
    pub fn current_place(&self) -> Option<&PlaceResult> {
        self.binder.current_place()
    }

    /// The formatted display string of the most recent selection.
    pub fn formatted_address(&self) -> Option<&str> {
        self.formatted_address.as_deref()
    }

    /// Whether the details section is revealed.
    pub fn details_visible(&self) -> bool {
        self.binder.details_visible()
    }

    /// Get the configuration used by this instance.
    pub fn config(&self) -> &AutofillConfig {
        &self.config
    }
}

impl Default for AddressAutofill {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration for the autofill flow.
#[derive(Debug, Clone, Default)]
pub struct AutofillConfig {
    /// Country restriction applied to the widget
    pub country: CountryCode,

    /// Place-type category the widget is limited to
    pub place_type: PlaceType,

    /// Whether the composed street line is whitespace-trimmed
    pub trim_street_line: bool,
}

impl AutofillConfig {
    /// Create a new configuration builder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use address_autofill::{AutofillConfig, PlaceType};
    ///
    /// let config = AutofillConfig::builder()
    ///     .place_type(PlaceType::Establishment)
    ///     .build();
    /// assert_eq!(config.country.as_str(), "US");
    /// ```
    pub fn builder() -> AutofillConfigBuilder {
        AutofillConfigBuilder::new()
    }
}

/// Builder for [`AutofillConfig`].
#[derive(Debug, Clone, Default)]
pub struct AutofillConfigBuilder {
    country: CountryCode,
    place_type: PlaceType,
    trim_street_line: bool,
}

impl AutofillConfigBuilder {
    /// Create a new configuration builder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the country restriction.
    pub fn country(mut self, country: CountryCode) -> Self {
        self.country = country;
        self
    }

    /// Set the place-type category.
    pub fn place_type(mut self, place_type: PlaceType) -> Self {
        self.place_type = place_type;
        self
    }

    /// Set whether the composed street line is whitespace-trimmed.
    pub fn trim_street_line(mut self, trim: bool) -> Self {
        self.trim_street_line = trim;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> AutofillConfig {
        AutofillConfig {
            country: self.country,
            place_type: self.place_type,
            trim_street_line: self.trim_street_line,
        }
    }
}
