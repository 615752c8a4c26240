//! Keystroke normalization applied before a value is stored.

use crate::models::PartyField;

/// Result of normalizing a proposed field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Normalized {
    /// Store this value
    Accept(String),
    /// Ignore the edit; the stored value stays as it was
    Reject,
}

/// Normalizes a raw value for `field`.
///
/// Digit-only fields drop every non-digit character and reject the edit once
/// the digit count would exceed the field's limit. Other fields pass through
/// verbatim.
#[must_use]
pub fn normalize(field: PartyField, raw: &str) -> Normalized {
    match field.class().max_digits() {
        Some(limit) => {
            let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
            if digits.len() > limit {
                Normalized::Reject
            } else {
                Normalized::Accept(digits)
            }
        }
        None => Normalized::Accept(raw.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_strips_non_digits() {
        assert_eq!(
            normalize(PartyField::ContactPerson1, "+91 98765-43210"),
            Normalized::Reject
        );
        assert_eq!(
            normalize(PartyField::ContactPerson1, "(987) 654-3210"),
            Normalized::Accept("9876543210".to_string())
        );
        assert_eq!(
            normalize(PartyField::AlternateContact2, "abc"),
            Normalized::Accept(String::new())
        );
    }

    #[test]
    fn test_phone_caps_keystroke_by_keystroke() {
        let mut stored = String::new();
        for c in "12345678901".chars() {
            let proposed = format!("{stored}{c}");
            if let Normalized::Accept(value) = normalize(PartyField::ContactPerson2, &proposed) {
                stored = value;
            }
        }
        assert_eq!(stored, "1234567890");
    }

    #[test]
    fn test_zipcode_limit() {
        assert_eq!(
            normalize(PartyField::Zipcode, "560 001"),
            Normalized::Accept("560001".to_string())
        );
        assert_eq!(normalize(PartyField::Zipcode, "5600011"), Normalized::Reject);
    }

    #[test]
    fn test_text_and_email_verbatim() {
        assert_eq!(
            normalize(PartyField::Email, " A@B.com "),
            Normalized::Accept(" A@B.com ".to_string())
        );
        assert_eq!(
            normalize(PartyField::Address, "12, MG Road"),
            Normalized::Accept("12, MG Road".to_string())
        );
        assert_eq!(
            normalize(PartyField::PartyName, "Acme 123"),
            Normalized::Accept("Acme 123".to_string())
        );
    }
}
