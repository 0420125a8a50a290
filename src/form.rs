//! Validated address form: field schema, patch semantics, and validation.
//!
//! The form replaces a framework-managed reactive form with an explicit
//! value struct plus a parallel set of per-field rules and a pure validation
//! pass. Touched state is tracked per field but only gates *display* of
//! validation feedback in the host view; [`AddressForm::validate`] itself is
//! unconditional.

use std::fmt;

use tracing::debug;

use crate::extractor::Address;

/// Names of the six address form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    /// Primary street line
    AddressLine1,
    /// Secondary street line (unit, suite)
    AddressLine2,
    /// City/locality
    City,
    /// State abbreviation
    State,
    /// Postal code
    PostalCode,
    /// Country code
    Country,
}

impl FieldName {
    /// Every form field, in schema order.
    pub const ALL: [FieldName; 6] = [
        FieldName::AddressLine1,
        FieldName::AddressLine2,
        FieldName::City,
        FieldName::State,
        FieldName::PostalCode,
        FieldName::Country,
    ];

    /// Snake-case field identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::AddressLine1 => "address_line1",
            FieldName::AddressLine2 => "address_line2",
            FieldName::City => "city",
            FieldName::State => "state",
            FieldName::PostalCode => "postal_code",
            FieldName::Country => "country",
        }
    }

    /// Validation rules for this field.
    ///
    /// Every field except the secondary street line is required and
    /// length-bounded.
    pub fn rules(&self) -> FieldRules {
        match self {
            FieldName::AddressLine1 => FieldRules::required(200),
            FieldName::AddressLine2 => FieldRules::unconstrained(),
            FieldName::City => FieldRules::required(100),
            FieldName::State => FieldRules::required(50),
            FieldName::PostalCode => FieldRules::required(15),
            FieldName::Country => FieldRules::required(50),
        }
    }

    fn idx(self) -> usize {
        match self {
            FieldName::AddressLine1 => 0,
            FieldName::AddressLine2 => 1,
            FieldName::City => 2,
            FieldName::State => 3,
            FieldName::PostalCode => 4,
            FieldName::Country => 5,
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Constraints attached to one form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRules {
    /// Whether an empty value is a validation failure
    pub required: bool,
    /// Maximum value length in characters, if bounded
    pub max_length: Option<usize>,
}

impl FieldRules {
    /// Rules for a required field with the given maximum length.
    pub fn required(max_length: usize) -> Self {
        Self {
            required: true,
            max_length: Some(max_length),
        }
    }

    /// Rules for a field with no constraints.
    pub fn unconstrained() -> Self {
        Self {
            required: false,
            max_length: None,
        }
    }
}

/// A single field's validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required field is empty
    #[error("value is required")]
    Required,

    /// A value exceeds the field's maximum length
    #[error("value exceeds maximum length of {max} characters (got {actual})")]
    TooLong {
        /// Maximum allowed length in characters
        max: usize,
        /// Actual value length in characters
        actual: usize,
    },
}

/// Outcome of one validation pass over the whole form.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    errors: Vec<(FieldName, ValidationError)>,
}

impl ValidationReport {
    /// All failures, in schema field order.
    pub fn errors(&self) -> &[(FieldName, ValidationError)] {
        &self.errors
    }

    /// Failures for one field.
    pub fn field_errors(&self, field: FieldName) -> Vec<&ValidationError> {
        self.errors
            .iter()
            .filter(|(f, _)| *f == field)
            .map(|(_, e)| e)
            .collect()
    }

    /// Whether the pass found no failures.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
struct FieldState {
    value: String,
    touched: bool,
}

/// The six-field address form.
///
/// Created with every field empty and untouched. Values change only through
/// patching: either one field at a time ([`AddressForm::patch_value`]) or
/// from a whole extracted record ([`AddressForm::patch`]), which also marks
/// the form touched so required-field feedback can render without user
/// interaction.
///
/// # Examples
///
/// ```rust
/// use address_autofill::{AddressForm, FieldName};
///
/// let mut form = AddressForm::new();
/// form.patch_value(FieldName::City, "London");
///
/// assert_eq!(form.value(FieldName::City), "London");
/// assert!(!form.validate().is_valid()); // other required fields still empty
/// ```
#[derive(Debug, Clone, Default)]
pub struct AddressForm {
    fields: [FieldState; 6],
}

impl AddressForm {
    /// Create a form with all six fields empty and untouched.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of one field.
    pub fn value(&self, field: FieldName) -> &str {
        &self.fields[field.idx()].value
    }

    /// Whether one field has been touched.
    pub fn is_touched(&self, field: FieldName) -> bool {
        self.fields[field.idx()].touched
    }

    /// Set one field's value, leaving every other field unchanged.
    pub fn patch_value(&mut self, field: FieldName, value: impl Into<String>) {
        self.fields[field.idx()].value = value.into();
    }

    /// Mark every field touched so validation feedback renders immediately.
    pub fn mark_all_touched(&mut self) {
        for field in &mut self.fields {
            field.touched = true;
        }
    }

    /// Patch all six fields from an extracted address record.
    ///
    /// The whole form is marked touched first, then each field is patched
    /// individually from the record.
    pub fn patch(&mut self, address: &Address) {
        self.mark_all_touched();
        self.patch_value(FieldName::AddressLine1, address.address_line1.clone());
        self.patch_value(FieldName::AddressLine2, address.address_line2.clone());
        self.patch_value(FieldName::City, address.city.clone());
        self.patch_value(FieldName::State, address.state.clone());
        self.patch_value(FieldName::PostalCode, address.postal_code.clone());
        self.patch_value(FieldName::Country, address.country.clone());
    }

    /// Read the current field values back as an address record.
    pub fn values(&self) -> Address {
        Address {
            address_line1: self.value(FieldName::AddressLine1).to_string(),
            address_line2: self.value(FieldName::AddressLine2).to_string(),
            city: self.value(FieldName::City).to_string(),
            state: self.value(FieldName::State).to_string(),
            postal_code: self.value(FieldName::PostalCode).to_string(),
            country: self.value(FieldName::Country).to_string(),
        }
    }

    /// Run a validation pass over every field.
    ///
    /// Lengths are counted in characters, not bytes.
    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::default();
        for field in FieldName::ALL {
            let rules = field.rules();
            let value = self.value(field);
            if rules.required && value.is_empty() {
                report.errors.push((field, ValidationError::Required));
            }
            if let Some(max) = rules.max_length {
                let actual = value.chars().count();
                if actual > max {
                    report
                        .errors
                        .push((field, ValidationError::TooLong { max, actual }));
                }
            }
        }
        report
    }

    /// Whether the form currently passes validation.
    pub fn is_valid(&self) -> bool {
        self.validate().is_valid()
    }
}

/// Owner of the form lifecycle: creation, replacement, and guarded patching.
///
/// Until [`initialize`](AddressFormController::initialize) has run there is
/// no form, and patching is a silent no-op rather than an error.
/// Re-initializing replaces the form wholesale; there is no narrower reset.
#[derive(Debug, Clone, Default)]
pub struct AddressFormController {
    form: Option<AddressForm>,
}

impl AddressFormController {
    /// Create a controller with no form yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create (or replace) the form, all fields reset to empty.
    pub fn initialize(&mut self) {
        self.form = Some(AddressForm::new());
    }

    /// Patch the form from an extracted record.
    ///
    /// Marks the form touched, then patches every field. Does nothing if the
    /// controller is uninitialized.
    pub fn patch(&mut self, address: &Address) {
        match &mut self.form {
            Some(form) => {
                form.patch(address);
                debug!(empty = address.is_empty(), "patched address form");
            }
            None => debug!("patch ignored: form not initialized"),
        }
    }

    /// The current form, if initialized.
    pub fn form(&self) -> Option<&AddressForm> {
        self.form.as_ref()
    }

    /// Mutable access to the current form, if initialized.
    pub fn form_mut(&mut self) -> Option<&mut AddressForm> {
        self.form.as_mut()
    }
}
