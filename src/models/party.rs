//! Party draft model and field metadata.

use serde::{Deserialize, Serialize};

/// Input class of a party field.
///
/// The class decides how raw input is normalized before storage and which
/// validation rule applies on submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldClass {
    /// Required display name
    Name,
    /// Ten-digit phone number
    Phone,
    /// `local@domain.tld` address
    Email,
    /// Six-digit postal code
    Zipcode,
    /// Stored verbatim, never validated
    FreeText,
}

impl FieldClass {
    /// Maximum number of digits for digit-only classes.
    #[must_use]
    pub const fn max_digits(self) -> Option<usize> {
        match self {
            Self::Phone => Some(10),
            Self::Zipcode => Some(6),
            Self::Name | Self::Email | Self::FreeText => None,
        }
    }
}

/// Field of the party intake form, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PartyField {
    /// Party (ledger) name
    PartyName,
    /// Primary contact phone
    ContactPerson1,
    /// Secondary contact phone
    ContactPerson2,
    /// Primary email
    Email,
    /// Secondary email
    AlternateEmail,
    /// Street address
    Address,
    /// Postal code
    Zipcode,
    /// Country
    Country,
    /// City
    City,
    /// State or province
    State,
    /// First alternate phone
    AlternateContact1,
    /// Second alternate phone
    AlternateContact2,
}

impl PartyField {
    /// All fields in focus order.
    pub const ALL: [Self; 12] = [
        Self::PartyName,
        Self::ContactPerson1,
        Self::ContactPerson2,
        Self::Email,
        Self::AlternateEmail,
        Self::Address,
        Self::Zipcode,
        Self::Country,
        Self::City,
        Self::State,
        Self::AlternateContact1,
        Self::AlternateContact2,
    ];

    fn position(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    /// Get the next field (wraps around).
    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    /// Get the previous field (wraps around).
    #[must_use]
    pub fn previous(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.position() + len - 1) % len]
    }

    /// Input class for this field.
    #[must_use]
    pub const fn class(self) -> FieldClass {
        match self {
            Self::PartyName => FieldClass::Name,
            Self::ContactPerson1
            | Self::ContactPerson2
            | Self::AlternateContact1
            | Self::AlternateContact2 => FieldClass::Phone,
            Self::Email | Self::AlternateEmail => FieldClass::Email,
            Self::Zipcode => FieldClass::Zipcode,
            Self::Address | Self::Country | Self::City | Self::State => FieldClass::FreeText,
        }
    }

    /// Form key (camelCase), as used in error maps and JSON output.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::PartyName => "partyName",
            Self::ContactPerson1 => "contactPerson1",
            Self::ContactPerson2 => "contactPerson2",
            Self::Email => "email",
            Self::AlternateEmail => "alternateEmail",
            Self::Address => "address",
            Self::Zipcode => "zipcode",
            Self::Country => "country",
            Self::City => "city",
            Self::State => "state",
            Self::AlternateContact1 => "alternateContact1",
            Self::AlternateContact2 => "alternateContact2",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PartyName => "Party Name",
            Self::ContactPerson1 => "Contact Person 1",
            Self::ContactPerson2 => "Contact Person 2",
            Self::Email => "Email",
            Self::AlternateEmail => "Alternate Email",
            Self::Address => "Address",
            Self::Zipcode => "Zipcode",
            Self::Country => "Country",
            Self::City => "City",
            Self::State => "State",
            Self::AlternateContact1 => "Alternate Contact 1",
            Self::AlternateContact2 => "Alternate Contact 2",
        }
    }
}

impl std::fmt::Display for PartyField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// In-progress party entity.
///
/// Every field is a plain string; only `party_name` is required. Unset
/// optional fields stay empty and are persisted as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartyDraft {
    /// Party (ledger) name
    pub party_name: String,
    /// Primary contact phone
    pub contact_person1: String,
    /// Secondary contact phone
    pub contact_person2: String,
    /// Primary email
    pub email: String,
    /// Secondary email
    pub alternate_email: String,
    /// Street address
    pub address: String,
    /// Postal code
    pub zipcode: String,
    /// Country
    pub country: String,
    /// City
    pub city: String,
    /// State or province
    pub state: String,
    /// First alternate phone
    pub alternate_contact1: String,
    /// Second alternate phone
    pub alternate_contact2: String,
}

impl PartyDraft {
    /// Creates an empty draft.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a draft with only the party name set.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            party_name: name.into(),
            ..Self::default()
        }
    }

    /// Read a field value.
    #[must_use]
    pub fn get(&self, field: PartyField) -> &str {
        match field {
            PartyField::PartyName => &self.party_name,
            PartyField::ContactPerson1 => &self.contact_person1,
            PartyField::ContactPerson2 => &self.contact_person2,
            PartyField::Email => &self.email,
            PartyField::AlternateEmail => &self.alternate_email,
            PartyField::Address => &self.address,
            PartyField::Zipcode => &self.zipcode,
            PartyField::Country => &self.country,
            PartyField::City => &self.city,
            PartyField::State => &self.state,
            PartyField::AlternateContact1 => &self.alternate_contact1,
            PartyField::AlternateContact2 => &self.alternate_contact2,
        }
    }

    /// Get a mutable reference to a field's value.
    pub fn get_mut(&mut self, field: PartyField) -> &mut String {
        match field {
            PartyField::PartyName => &mut self.party_name,
            PartyField::ContactPerson1 => &mut self.contact_person1,
            PartyField::ContactPerson2 => &mut self.contact_person2,
            PartyField::Email => &mut self.email,
            PartyField::AlternateEmail => &mut self.alternate_email,
            PartyField::Address => &mut self.address,
            PartyField::Zipcode => &mut self.zipcode,
            PartyField::Country => &mut self.country,
            PartyField::City => &mut self.city,
            PartyField::State => &mut self.state,
            PartyField::AlternateContact1 => &mut self.alternate_contact1,
            PartyField::AlternateContact2 => &mut self.alternate_contact2,
        }
    }

    /// Builder-style setter, stores the value verbatim.
    pub fn with(mut self, field: PartyField, value: impl Into<String>) -> Self {
        *self.get_mut(field) = value.into();
        self
    }

    /// True when a street address was entered.
    #[must_use]
    pub fn has_address(&self) -> bool {
        !self.address.trim().is_empty()
    }

    /// True when either contact person phone was entered.
    #[must_use]
    pub fn has_contacts(&self) -> bool {
        !self.contact_person1.is_empty() || !self.contact_person2.is_empty()
    }

    /// True when either alternate contact phone was entered.
    #[must_use]
    pub fn has_alternate_contacts(&self) -> bool {
        !self.alternate_contact1.is_empty() || !self.alternate_contact2.is_empty()
    }
}
