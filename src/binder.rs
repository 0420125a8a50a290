//! Host-side binding to the external place-autocomplete widget.
//!
//! The widget itself (suggestion matching, rendering, input attachment) is an
//! external collaborator. This module owns what the host keeps of it: the
//! attachment options, a registration point for selection handlers, the most
//! recent selection, and the details-visible flag the view renders from. The
//! widget glue calls [`AutocompleteBinder::place_selected`] on the host's
//! normal event-dispatch path; there is no queuing or cancellation because at
//! most one selection is outstanding at a time.

use std::fmt;

use tracing::debug;

use crate::place::{CountryCode, PlaceResult, PlaceType};

/// Options the widget is attached with.
///
/// # Examples
///
/// ```rust
/// use address_autofill::{AutocompleteOptions, CountryCode, PlaceType};
///
/// let options = AutocompleteOptions::new()
///     .with_country(CountryCode::new("GB")?)
///     .with_place_type(PlaceType::Establishment);
/// assert_eq!(options.country.as_str(), "GB");
/// # Ok::<(), address_autofill::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct AutocompleteOptions {
    /// Single-country restriction applied to suggestions
    pub country: CountryCode,
    /// Place-type category the widget is limited to
    pub place_type: PlaceType,
}

impl AutocompleteOptions {
    /// Options with the default restriction (US, geocode).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the country restriction.
    pub fn with_country(mut self, country: CountryCode) -> Self {
        self.country = country;
        self
    }

    /// Set the place-type category.
    pub fn with_place_type(mut self, place_type: PlaceType) -> Self {
        self.place_type = place_type;
        self
    }
}

/// A registered "place selected" handler.
pub type SelectionHandler = Box<dyn FnMut(&PlaceResult)>;

/// Attachment point between the host view and the autocomplete widget.
///
/// Handlers registered through [`subscribe`](AutocompleteBinder::subscribe)
/// run in registration order on every selection, after the current-place
/// holder and the details flag have been written, so a handler reading the
/// binder observes post-selection state.
pub struct AutocompleteBinder {
    options: AutocompleteOptions,
    handlers: Vec<SelectionHandler>,
    current_place: Option<PlaceResult>,
    details_visible: bool,
}

impl AutocompleteBinder {
    /// Create a binder with the given attachment options.
    pub fn new(options: AutocompleteOptions) -> Self {
        Self {
            options,
            handlers: Vec::new(),
            current_place: None,
            details_visible: false,
        }
    }

    /// Register a selection handler.
    pub fn subscribe(&mut self, handler: impl FnMut(&PlaceResult) + 'static) {
        self.handlers.push(Box::new(handler));
    }

    /// Deliver a selection from the widget.
    ///
    /// Stores the place as the current result, reveals the details section,
    /// then notifies every registered handler. Re-triggerable indefinitely;
    /// each call supersedes the previous selection.
    pub fn place_selected(&mut self, place: PlaceResult) {
        debug!(
            country = %self.options.country,
            place_type = %self.options.place_type,
            components = place.address_components.len(),
            "place selected"
        );
        self.details_visible = true;
        let place = &*self.current_place.insert(place);
        for handler in &mut self.handlers {
            handler(place);
        }
    }

    /// The most recent selection, if any ("get result" accessor).
    pub fn current_place(&self) -> Option<&PlaceResult> {
        self.current_place.as_ref()
    }

    /// Whether the details section is revealed.
    pub fn details_visible(&self) -> bool {
        self.details_visible
    }

    /// The attachment options.
    pub fn options(&self) -> &AutocompleteOptions {
        &self.options
    }
}

impl fmt::Debug for AutocompleteBinder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AutocompleteBinder")
            .field("options", &self.options)
            .field("handlers", &self.handlers.len())
            .field("current_place", &self.current_place)
            .field("details_visible", &self.details_visible)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::place::{AddressComponent, ComponentType};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn place(city: &str) -> PlaceResult {
        PlaceResult::new().with_component(AddressComponent::new(
            city,
            city,
            vec![ComponentType::Locality],
        ))
    }

    #[test]
    fn selection_updates_holder_and_flag() {
        let mut binder = AutocompleteBinder::new(AutocompleteOptions::new());
        assert!(binder.current_place().is_none());
        assert!(!binder.details_visible());

        binder.place_selected(place("London"));

        assert!(binder.details_visible());
        assert_eq!(
            binder
                .current_place()
                .and_then(|p| p.long_name(&ComponentType::Locality)),
            Some("London")
        );
    }

    #[test]
    fn handlers_run_in_registration_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut binder = AutocompleteBinder::new(AutocompleteOptions::new());

        for tag in ["first", "second"] {
            let seen = Rc::clone(&seen);
            binder.subscribe(move |_| seen.borrow_mut().push(tag));
        }
        binder.place_selected(place("London"));

        assert_eq!(*seen.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn handler_receives_each_selection() {
        let cities = Rc::new(RefCell::new(Vec::new()));
        let mut binder = AutocompleteBinder::new(AutocompleteOptions::new());
        {
            let cities = Rc::clone(&cities);
            binder.subscribe(move |p| {
                let city = p
                    .long_name(&ComponentType::Locality)
                    .unwrap_or_default()
                    .to_string();
                cities.borrow_mut().push(city);
            });
        }

        binder.place_selected(place("London"));
        binder.place_selected(place("Leeds"));

        assert_eq!(*cities.borrow(), vec!["London", "Leeds"]);
        // The holder keeps only the latest selection.
        assert_eq!(
            binder
                .current_place()
                .and_then(|p| p.long_name(&ComponentType::Locality)),
            Some("Leeds")
        );
        assert!(binder.details_visible());
    }

    #[test]
    fn selection_without_handlers_is_fine() {
        let mut binder = AutocompleteBinder::new(
            AutocompleteOptions::new().with_place_type(PlaceType::Address),
        );
        binder.place_selected(place("London"));
        assert!(binder.details_visible());
    }

    #[test]
    fn options_are_retained() {
        let options = AutocompleteOptions::new()
            .with_country(CountryCode::new("gb").unwrap())
            .with_place_type(PlaceType::Establishment);
        let binder = AutocompleteBinder::new(options);

        assert_eq!(binder.options().country.as_str(), "GB");
        assert_eq!(binder.options().place_type, PlaceType::Establishment);
    }
}
