//! Wire records exchanged with the persistence store and the search screen.

use serde::{Deserialize, Deserializer, Serialize};

use crate::form::identifier::GeneratedId;
use crate::models::PartyDraft;

/// Separator used when joining prefill address lines.
const ADDRESS_SEPARATOR: &str = ", ";

/// Payload submitted to the persistence store.
///
/// Every optional field is present as a string (possibly empty), never null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyPayload {
    /// Party (ledger) name
    #[serde(rename = "LedgerName")]
    pub ledger_name: String,
    /// Primary contact phone
    #[serde(rename = "MobileNo")]
    pub mobile_no: String,
    /// Secondary contact phone
    #[serde(rename = "ContactPerson2")]
    pub contact_person2: String,
    /// Primary email
    #[serde(rename = "EmailId")]
    pub email_id: String,
    /// Secondary email
    #[serde(rename = "AlternateEmailId")]
    pub alternate_email_id: String,
    /// Street address
    #[serde(rename = "Address")]
    pub address: String,
    /// Postal code
    #[serde(rename = "Zipcode")]
    pub zipcode: String,
    /// Country
    #[serde(rename = "Country")]
    pub country: String,
    /// City
    #[serde(rename = "City")]
    pub city: String,
    /// State or province
    #[serde(rename = "State")]
    pub state: String,
    /// First alternate phone
    #[serde(rename = "AlternateContact1")]
    pub alternate_contact1: String,
    /// Second alternate phone
    #[serde(rename = "AlternateContact2")]
    pub alternate_contact2: String,
    /// Display id shown on the form
    #[serde(rename = "PartyCode")]
    pub party_code: GeneratedId,
    /// Tenant/session the party was created under
    #[serde(rename = "TenantId")]
    pub tenant_id: String,
    /// Creation time (RFC 3339, UTC)
    #[serde(rename = "CreatedAt")]
    pub created_at: String,
    /// Street address was entered
    #[serde(rename = "HasAddress")]
    pub has_address: bool,
    /// A contact person phone was entered
    #[serde(rename = "HasContacts")]
    pub has_contacts: bool,
    /// An alternate contact phone was entered
    #[serde(rename = "HasAlternateContacts")]
    pub has_alternate_contacts: bool,
}

impl PartyPayload {
    /// Builds the payload from a validated draft.
    pub fn from_draft(
        draft: &PartyDraft,
        party_code: GeneratedId,
        tenant_id: impl Into<String>,
        created_at: chrono::DateTime<chrono::Utc>,
    ) -> Self {
        Self {
            ledger_name: draft.party_name.trim().to_string(),
            mobile_no: draft.contact_person1.clone(),
            contact_person2: draft.contact_person2.clone(),
            email_id: draft.email.clone(),
            alternate_email_id: draft.alternate_email.clone(),
            address: draft.address.clone(),
            zipcode: draft.zipcode.clone(),
            country: draft.country.clone(),
            city: draft.city.clone(),
            state: draft.state.clone(),
            alternate_contact1: draft.alternate_contact1.clone(),
            alternate_contact2: draft.alternate_contact2.clone(),
            party_code,
            tenant_id: tenant_id.into(),
            created_at: created_at.to_rfc3339(),
            has_address: draft.has_address(),
            has_contacts: draft.has_contacts(),
            has_alternate_contacts: draft.has_alternate_contacts(),
        }
    }
}

/// Record returned by the store: the submitted payload plus its assigned id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyRecord {
    /// Server-assigned primary id
    #[serde(rename = "Id")]
    pub id: String,
    /// Submitted fields
    #[serde(flatten)]
    pub payload: PartyPayload,
}

/// A party that has been saved and handed to the booking screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersistedParty {
    record: PartyRecord,
}

impl PersistedParty {
    /// Wraps a store record.
    #[must_use]
    pub fn from_record(record: PartyRecord) -> Self {
        Self { record }
    }

    /// Underlying record.
    #[must_use]
    pub fn record(&self) -> &PartyRecord {
        &self.record
    }

    /// Server-assigned id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.record.id
    }

    /// Display id generated on the form.
    #[must_use]
    pub fn generated_id(&self) -> &GeneratedId {
        &self.record.payload.party_code
    }

    /// Party name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.record.payload.ledger_name
    }

    /// Primary phone.
    #[must_use]
    pub fn phone(&self) -> &str {
        &self.record.payload.mobile_no
    }

    /// Primary email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.record.payload.email_id
    }

    /// Street address.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.record.payload.address
    }

    /// City.
    #[must_use]
    pub fn city(&self) -> &str {
        &self.record.payload.city
    }

    /// State or province.
    #[must_use]
    pub fn state(&self) -> &str {
        &self.record.payload.state
    }

    /// Country.
    #[must_use]
    pub fn country(&self) -> &str {
        &self.record.payload.country
    }

    /// Postal code.
    #[must_use]
    pub fn zipcode(&self) -> &str {
        &self.record.payload.zipcode
    }
}

/// Party picked on the search screen, used to prefill a new draft.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectedParty {
    /// Ledger name
    #[serde(rename = "LedgerName", deserialize_with = "lenient_string")]
    pub ledger_name: String,
    /// Mobile number
    #[serde(rename = "MobileNo", deserialize_with = "lenient_string")]
    pub mobile_no: String,
    /// Email
    #[serde(rename = "EmailId", deserialize_with = "lenient_string")]
    pub email_id: String,
    /// First address line
    #[serde(rename = "Address_line1", deserialize_with = "lenient_string")]
    pub address_line1: String,
    /// Second address line
    #[serde(rename = "Address_line2", deserialize_with = "lenient_string")]
    pub address_line2: String,
    /// Postal code
    #[serde(rename = "Zipcode", deserialize_with = "lenient_string")]
    pub zipcode: String,
    /// Country
    #[serde(rename = "Country", deserialize_with = "lenient_string")]
    pub country: String,
    /// City
    #[serde(rename = "City", deserialize_with = "lenient_string")]
    pub city: String,
    /// State
    #[serde(rename = "State", deserialize_with = "lenient_string")]
    pub state: String,
}

impl SelectedParty {
    /// Parses the serialized slot content.
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    /// Address lines joined, skipping empty ones.
    #[must_use]
    pub fn joined_address(&self) -> String {
        [&self.address_line1, &self.address_line2]
            .iter()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join(ADDRESS_SEPARATOR)
    }

    /// Maps the selection into a fresh draft.
    #[must_use]
    pub fn to_draft(&self) -> PartyDraft {
        PartyDraft {
            party_name: self.ledger_name.clone(),
            contact_person1: self.mobile_no.clone(),
            email: self.email_id.clone(),
            address: self.joined_address(),
            zipcode: self.zipcode.clone(),
            country: self.country.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            ..PartyDraft::default()
        }
    }
}

/// Accepts strings, numbers and null (as empty) for prefill fields.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PartyField;
    use chrono::TimeZone;

    fn sample_id() -> GeneratedId {
        serde_json::from_str("\"PID-ACME-123456007\"").unwrap()
    }

    #[test]
    fn test_payload_fills_empty_strings() {
        let draft = PartyDraft::named("Acme Traders")
            .with(PartyField::ContactPerson1, "9876543210")
            .with(PartyField::Email, "a@b.com");
        let created = chrono::Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let payload = PartyPayload::from_draft(&draft, sample_id(), "tenant-1", created);

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["LedgerName"], "Acme Traders");
        assert_eq!(json["MobileNo"], "9876543210");
        assert_eq!(json["Address"], "");
        assert_eq!(json["AlternateContact2"], "");
        assert_eq!(json["PartyCode"], "PID-ACME-123456007");
        assert_eq!(json["TenantId"], "tenant-1");
        assert_eq!(json["CreatedAt"], "2025-01-01T00:00:00+00:00");
        assert_eq!(json["HasAddress"], false);
        assert_eq!(json["HasContacts"], true);
        assert_eq!(json["HasAlternateContacts"], false);
        assert!(json.as_object().unwrap().values().all(|v| !v.is_null()));
    }

    #[test]
    fn test_record_flattens_payload() {
        let created = chrono::Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let payload = PartyPayload::from_draft(&PartyDraft::named("Acme"), sample_id(), "t", created);
        let record = PartyRecord {
            id: "42".to_string(),
            payload,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["Id"], "42");
        assert_eq!(json["LedgerName"], "Acme");

        let back: PartyRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_selected_party_to_draft() {
        let raw = r#"{
            "LedgerName": "Grand Hotel",
            "MobileNo": "9876543210",
            "EmailId": "desk@grand.example",
            "Address_line1": "12 MG Road",
            "Address_line2": "",
            "Zipcode": 560001,
            "Country": "India",
            "City": "Bengaluru",
            "State": null
        }"#;
        let selected = SelectedParty::from_json(raw).unwrap();
        let draft = selected.to_draft();
        assert_eq!(draft.party_name, "Grand Hotel");
        assert_eq!(draft.contact_person1, "9876543210");
        assert_eq!(draft.email, "desk@grand.example");
        assert_eq!(draft.address, "12 MG Road");
        assert_eq!(draft.zipcode, "560001");
        assert_eq!(draft.state, "");
        assert_eq!(draft.contact_person2, "");
    }

    #[test]
    fn test_joined_address_drops_empty_lines() {
        let selected = SelectedParty {
            address_line1: "Floor 2".to_string(),
            address_line2: "Tower B".to_string(),
            ..SelectedParty::default()
        };
        assert_eq!(selected.joined_address(), "Floor 2, Tower B");

        let selected = SelectedParty {
            address_line2: "Tower B".to_string(),
            ..SelectedParty::default()
        };
        assert_eq!(selected.joined_address(), "Tower B");
    }

    #[test]
    fn test_selected_party_missing_fields_default() {
        let selected = SelectedParty::from_json(r#"{"LedgerName": "Solo"}"#).unwrap();
        assert_eq!(selected.ledger_name, "Solo");
        assert!(selected.city.is_empty());
    }
}
