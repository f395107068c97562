//! Checkout form fields, input normalisation and validation.

use core::fmt;
use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::types::Email;

const CARD_DIGITS: usize = 16;
const EXPIRY_DIGITS: usize = 4;

static CARD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{16}$").expect("Invalid regex"));
static EXPIRY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}/[0-9]{2}$").expect("Invalid regex"));
static CVV_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{3,4}$").expect("Invalid regex"));

/// One input on the checkout form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CheckoutField {
    FirstName,
    LastName,
    Email,
    Address,
    City,
    Country,
    Zip,
    CardNumber,
    Expiry,
    Cvv,
}

impl CheckoutField {
    /// Every field in form order.
    pub const ALL: [Self; 10] = [
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::Address,
        Self::City,
        Self::Country,
        Self::Zip,
        Self::CardNumber,
        Self::Expiry,
        Self::Cvv,
    ];

    /// HTML `name` attribute, matching the form's serde field name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Email => "email",
            Self::Address => "address",
            Self::City => "city",
            Self::Country => "country",
            Self::Zip => "zip",
            Self::CardNumber => "card_number",
            Self::Expiry => "expiry",
            Self::Cvv => "cvv",
        }
    }

    /// Visible label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email Address",
            Self::Address => "Street Address",
            Self::City => "City",
            Self::Country => "Country",
            Self::Zip => "ZIP / Postal Code",
            Self::CardNumber => "Card Number",
            Self::Expiry => "Expiry",
            Self::Cvv => "CVV",
        }
    }

    /// Example input shown in the empty field.
    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::FirstName => "John",
            Self::LastName => "Doe",
            Self::Email => "john@example.com",
            Self::Address => "123 VOLT Street",
            Self::City => "San Francisco",
            Self::Country => "United States",
            Self::Zip => "94102",
            Self::CardNumber => "1234 5678 9012 3456",
            Self::Expiry => "MM/YY",
            Self::Cvv => "123",
        }
    }
}

/// Validation failures keyed by field. Empty means the form is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<CheckoutField, &'static str>);

impl FieldErrors {
    /// Whether no field failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of failing fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The message for `field`, if it failed.
    #[must_use]
    pub fn get(&self, field: CheckoutField) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    /// The message for the field with HTML name `name`, if it failed.
    #[must_use]
    pub fn message(&self, name: &str) -> Option<&'static str> {
        self.0
            .iter()
            .find(|(field, _)| field.name() == name)
            .map(|(_, message)| *message)
    }

    /// Failing fields in form order.
    pub fn iter(&self) -> impl Iterator<Item = (CheckoutField, &'static str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, *message))
    }

    fn insert(&mut self, field: CheckoutField, message: &'static str) {
        self.0.insert(field, message);
    }
}

/// Shipping and payment details as submitted.
///
/// Every field is free text; [`validate`](Self::validate) decides whether the
/// submission is acceptable. Missing fields deserialize as empty strings.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CheckoutForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub country: String,
    pub zip: String,
    pub card_number: String,
    pub expiry: String,
    pub cvv: String,
}

impl fmt::Debug for CheckoutForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckoutForm")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("address", &self.address)
            .field("city", &self.city)
            .field("country", &self.country)
            .field("zip", &self.zip)
            .field("card_number", &"[REDACTED]")
            .field("expiry", &self.expiry)
            .field("cvv", &"[REDACTED]")
            .finish()
    }
}

impl CheckoutForm {
    /// The submitted value of `field`.
    #[must_use]
    pub fn value(&self, field: CheckoutField) -> &str {
        match field {
            CheckoutField::FirstName => &self.first_name,
            CheckoutField::LastName => &self.last_name,
            CheckoutField::Email => &self.email,
            CheckoutField::Address => &self.address,
            CheckoutField::City => &self.city,
            CheckoutField::Country => &self.country,
            CheckoutField::Zip => &self.zip,
            CheckoutField::CardNumber => &self.card_number,
            CheckoutField::Expiry => &self.expiry,
            CheckoutField::Cvv => &self.cvv,
        }
    }

    /// A copy with the card number and expiry reformatted the way the inputs
    /// format them while typing.
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self {
            card_number: format_card_number(&self.card_number),
            expiry: format_expiry(&self.expiry),
            ..self.clone()
        }
    }

    /// Check every field and collect one message per failing field.
    #[must_use]
    pub fn validate(&self) -> FieldErrors {
        self.check().err().unwrap_or_default()
    }

    /// `"First Last"`, trimmed.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
    }

    /// Validate, returning the parsed email when every field passes.
    pub(super) fn check(&self) -> Result<Email, FieldErrors> {
        let mut errors = FieldErrors::default();

        for field in [
            CheckoutField::FirstName,
            CheckoutField::LastName,
            CheckoutField::Address,
            CheckoutField::City,
            CheckoutField::Country,
            CheckoutField::Zip,
        ] {
            if self.value(field).trim().is_empty() {
                errors.insert(field, "Required");
            }
        }

        let email = Email::parse(&self.email);
        if email.is_err() {
            errors.insert(CheckoutField::Email, "Valid email required");
        }

        let card: String = self
            .card_number
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        if !CARD_RE.is_match(&card) {
            errors.insert(CheckoutField::CardNumber, "16-digit card number required");
        }

        if !EXPIRY_RE.is_match(&self.expiry) {
            errors.insert(CheckoutField::Expiry, "MM/YY format required");
        }

        if !CVV_RE.is_match(&self.cvv) {
            errors.insert(CheckoutField::Cvv, "3-4 digits required");
        }

        match email {
            Ok(email) if errors.is_empty() => Ok(email),
            _ => Err(errors),
        }
    }
}

/// Keep the first 16 digits and group them in fours: `"4242 4242 42"`.
#[must_use]
pub fn format_card_number(input: &str) -> String {
    let digits: Vec<char> = input
        .chars()
        .filter(char::is_ascii_digit)
        .take(CARD_DIGITS)
        .collect();
    digits
        .chunks(4)
        .map(|group| group.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Keep the first 4 digits and insert `/` after the month: `"12/2"`.
#[must_use]
pub fn format_expiry(input: &str) -> String {
    let digits: String = input
        .chars()
        .filter(char::is_ascii_digit)
        .take(EXPIRY_DIGITS)
        .collect();
    if digits.len() >= 2 {
        let (month, year) = digits.split_at(2);
        format!("{month}/{year}")
    } else {
        digits
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn valid_form() -> CheckoutForm {
        CheckoutForm {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@volt.io".to_string(),
            address: "12 Analytical Way".to_string(),
            city: "London".to_string(),
            country: "UK".to_string(),
            zip: "N1 9GU".to_string(),
            card_number: "4242 4242 4242 4242".to_string(),
            expiry: "12/28".to_string(),
            cvv: "123".to_string(),
        }
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        let errors = valid_form().validate();
        assert!(errors.is_empty(), "{errors:?}");
    }

    #[test]
    fn test_empty_form_fails_every_field() {
        let errors = CheckoutForm::default().validate();
        assert_eq!(errors.len(), CheckoutField::ALL.len());
        assert_eq!(errors.get(CheckoutField::FirstName), Some("Required"));
        assert_eq!(errors.get(CheckoutField::Email), Some("Valid email required"));
        assert_eq!(
            errors.get(CheckoutField::CardNumber),
            Some("16-digit card number required")
        );
        assert_eq!(errors.get(CheckoutField::Expiry), Some("MM/YY format required"));
        assert_eq!(errors.get(CheckoutField::Cvv), Some("3-4 digits required"));
    }

    #[test]
    fn test_whitespace_only_is_missing() {
        let form = CheckoutForm {
            city: "   ".to_string(),
            ..valid_form()
        };
        let errors = form.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.message("city"), Some("Required"));
    }

    #[test]
    fn test_email_rule() {
        for bad in ["ada", "ada@volt", "ada @volt.io", "@volt.io", "ada@@volt.io"] {
            let form = CheckoutForm {
                email: bad.to_string(),
                ..valid_form()
            };
            assert!(form.validate().get(CheckoutField::Email).is_some(), "{bad}");
        }
    }

    #[test]
    fn test_email_length_cap() {
        let at_cap = format!("{}@volt.io", "a".repeat(Email::MAX_LENGTH - 8));
        let over_cap = format!("a{at_cap}");
        assert_eq!(at_cap.len(), Email::MAX_LENGTH);

        let form = CheckoutForm {
            email: at_cap,
            ..valid_form()
        };
        assert!(form.validate().get(CheckoutField::Email).is_none());

        let form = CheckoutForm {
            email: over_cap,
            ..valid_form()
        };
        assert_eq!(
            form.validate().get(CheckoutField::Email),
            Some("Valid email required")
        );
    }

    #[test]
    fn test_card_number_rule() {
        let ok = CheckoutForm {
            card_number: "4242424242424242".to_string(),
            ..valid_form()
        };
        assert!(ok.validate().is_empty());

        for bad in ["4242 4242 4242 424", "4242-4242-4242-4242", "4242 4242 4242 42421"] {
            let form = CheckoutForm {
                card_number: bad.to_string(),
                ..valid_form()
            };
            assert!(form.validate().get(CheckoutField::CardNumber).is_some(), "{bad}");
        }
    }

    #[test]
    fn test_expiry_and_cvv_rules() {
        let form = CheckoutForm {
            expiry: "1228".to_string(),
            cvv: "12".to_string(),
            ..valid_form()
        };
        let errors = form.validate();
        assert!(errors.get(CheckoutField::Expiry).is_some());
        assert!(errors.get(CheckoutField::Cvv).is_some());

        let four_digit_cvv = CheckoutForm {
            cvv: "1234".to_string(),
            ..valid_form()
        };
        assert!(four_digit_cvv.validate().is_empty());
    }

    #[test]
    fn test_format_card_number() {
        assert_eq!(format_card_number("4242424242424242"), "4242 4242 4242 4242");
        assert_eq!(format_card_number("4242-42"), "4242 42");
        assert_eq!(format_card_number("4242"), "4242");
        assert_eq!(format_card_number("42424242424242429999"), "4242 4242 4242 4242");
        assert_eq!(format_card_number("abc"), "");
    }

    #[test]
    fn test_format_expiry() {
        assert_eq!(format_expiry("1"), "1");
        assert_eq!(format_expiry("12"), "12/");
        assert_eq!(format_expiry("1228"), "12/28");
        assert_eq!(format_expiry("12/2899"), "12/28");
    }

    #[test]
    fn test_normalized_fixes_formatting_only() {
        let form = CheckoutForm {
            card_number: "4242424242424242".to_string(),
            expiry: "1228".to_string(),
            ..valid_form()
        };
        let normalized = form.normalized();
        assert_eq!(normalized.card_number, "4242 4242 4242 4242");
        assert_eq!(normalized.expiry, "12/28");
        assert_eq!(normalized.email, form.email);
        assert!(normalized.validate().is_empty());
    }

    #[test]
    fn test_debug_redacts_payment_details() {
        let debug = format!("{:?}", valid_form());
        assert!(!debug.contains("4242"));
        assert!(!debug.contains("\"123\""));
        assert!(debug.contains("ada@volt.io"));
    }

    #[test]
    fn test_field_names_match_form_keys() {
        let form = valid_form();
        for field in CheckoutField::ALL {
            assert!(!form.value(field).is_empty(), "{}", field.name());
        }
        assert_eq!(form.full_name(), "Ada Lovelace");
    }
}
