//! Basic usage example for address-autofill.
//!
//! This example demonstrates the core selection flow:
//! - Initializing the autofill and its form
//! - Delivering a place result the way the widget glue would
//! - Reading the patched form and its validation state
//!
//! Run with: cargo run --example basic_autofill

use address_autofill::{
    AddressAutofill, AddressComponent, AutofillConfig, ComponentType, CountryCode, FieldName,
    PlaceResult, PlaceType,
};

fn main() -> Result<(), address_autofill::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .init();

    println!("address-autofill Basic Usage Example");
    println!("====================================\n");

    let config = AutofillConfig::builder()
        .country(CountryCode::new("US")?)
        .place_type(PlaceType::Address)
        .build();
    let mut autofill = AddressAutofill::with_config(config);
    autofill.initialize_form();

    autofill.subscribe(|place| {
        println!(
            "  [subscriber] selection with {} components",
            place.address_components.len()
        );
    });

    // Example 1: a complete selection
    println!("1. Complete Selection");
    println!("---------------------");

    let place = PlaceResult::new()
        .with_component(AddressComponent::new(
            "1600",
            "1600",
            vec![ComponentType::StreetNumber],
        ))
        .with_component(AddressComponent::new(
            "Amphitheatre Parkway",
            "Amphitheatre Pkwy",
            vec![ComponentType::Route],
        ))
        .with_component(AddressComponent::new(
            "Mountain View",
            "Mountain View",
            vec![ComponentType::Locality],
        ))
        .with_component(AddressComponent::new(
            "California",
            "CA",
            vec![ComponentType::AdministrativeAreaLevel1],
        ))
        .with_component(AddressComponent::new(
            "94043",
            "94043",
            vec![ComponentType::PostalCode],
        ))
        .with_component(AddressComponent::new(
            "United States",
            "US",
            vec![ComponentType::Country],
        ))
        .with_formatted_address("1600 Amphitheatre Pkwy, Mountain View, CA 94043, USA");

    let address = autofill.place_selected(place);
    println!("Extracted record:");
    println!("  Address line 1: {}", address.address_line1);
    println!("  City:           {}", address.city);
    println!("  State:          {}", address.state);
    println!("  Postal code:    {}", address.postal_code);
    println!("  Country:        {}", address.country);
    if let Some(formatted) = autofill.formatted_address() {
        println!("  Formatted:      {formatted}");
    }

    let form = autofill.form().expect("form was initialized");
    println!("Form valid: {}\n", form.is_valid());

    // Example 2: a partial selection degrades to validation feedback
    println!("2. Partial Selection");
    println!("--------------------");

    let partial = PlaceResult::new().with_component(AddressComponent::new(
        "Mountain View",
        "Mountain View",
        vec![ComponentType::Locality],
    ));
    autofill.place_selected(partial);

    let form = autofill.form().expect("form was initialized");
    let report = form.validate();
    println!("Form valid: {}", report.is_valid());
    for (field, error) in report.errors() {
        println!("  {field}: {error}");
    }
    println!("Current field values:");
    for field in FieldName::ALL {
        println!("  {field}: {:?}", form.value(field));
    }
    println!("Details section visible: {}", autofill.details_visible());

    Ok(())
}
