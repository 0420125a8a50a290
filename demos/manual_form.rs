//! Manual form entry example for address-autofill.
//!
//! Uses the form and validation layer directly, without the autocomplete
//! flow — the shape a host view takes when the user types an address by hand.
//!
//! Run with: cargo run --example manual_form

use address_autofill::{AddressForm, AddressFormController, FieldName};

fn main() {
    println!("address-autofill Manual Form Example");
    println!("====================================\n");

    let mut controller = AddressFormController::new();

    // Patching before initialization is a guarded no-op.
    controller.patch(&Default::default());
    assert!(controller.form().is_none());

    controller.initialize();
    let form: &mut AddressForm = controller.form_mut().expect("just initialized");

    // Simulated keystroke-by-keystroke entry: one field per patch.
    form.patch_value(FieldName::AddressLine1, "350 Fifth Avenue");
    form.patch_value(FieldName::AddressLine2, "Suite 3300");
    form.patch_value(FieldName::City, "New York");
    form.patch_value(FieldName::State, "NY");
    form.patch_value(FieldName::PostalCode, "10118");

    let report = form.validate();
    println!("After partial entry (country still empty):");
    for (field, error) in report.errors() {
        println!("  {field}: {error}");
    }

    form.patch_value(FieldName::Country, "US");
    println!("\nAfter completing entry:");
    println!("  valid: {}", form.is_valid());

    let record = form.values();
    println!("  record: {} / {}, {}, {} {} ({})",
        record.address_line1,
        record.address_line2,
        record.city,
        record.state,
        record.postal_code,
        record.country,
    );
}
