//! Handoff of saved parties to the booking screen.
//!
//! The booking screen reads keyed values. A saved party is published under
//! several keys so older readers that only know one of them keep working.

use std::collections::BTreeMap;
use std::sync::Mutex;

use serde_json::Value;

use crate::models::PersistedParty;

/// Full record, as read by the booking screen.
pub const KEY_SELECTED_PARTY: &str = "selectedParty";
/// Full record, as read by screens that expect a fresh party.
pub const KEY_NEW_PARTY_DATA: &str = "newPartyData";
/// Server-assigned id.
pub const KEY_PARTY_ID: &str = "partyId";
/// Party name.
pub const KEY_PARTY_NAME: &str = "partyName";
/// Primary phone.
pub const KEY_PARTY_PHONE: &str = "partyPhone";
/// Primary email.
pub const KEY_PARTY_EMAIL: &str = "partyEmail";
/// Street address.
pub const KEY_PARTY_ADDRESS: &str = "partyAddress";
/// City.
pub const KEY_PARTY_CITY: &str = "partyCity";
/// State.
pub const KEY_PARTY_STATE: &str = "partyState";
/// Country.
pub const KEY_PARTY_COUNTRY: &str = "partyCountry";
/// Zipcode.
pub const KEY_PARTY_ZIPCODE: &str = "partyZipcode";

/// Receiver of keyed handoff values.
pub trait HandoffSink: Send + Sync {
    /// Stores `value` under `key`, replacing any previous value.
    fn publish(&self, key: &str, value: Value);
}

/// In-memory keyed slots.
#[derive(Debug, Default)]
pub struct HandoffSlots {
    slots: Mutex<BTreeMap<String, Value>>,
}

impl HandoffSlots {
    /// Creates empty slots.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Value> {
        self.slots.lock().ok()?.get(key).cloned()
    }

    /// All keys, sorted.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.slots
            .lock()
            .map(|slots| slots.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Copy of all slots.
    #[must_use]
    pub fn snapshot(&self) -> BTreeMap<String, Value> {
        self.slots
            .lock()
            .map(|slots| slots.clone())
            .unwrap_or_default()
    }
}

impl HandoffSink for HandoffSlots {
    fn publish(&self, key: &str, value: Value) {
        if let Ok(mut slots) = self.slots.lock() {
            slots.insert(key.to_string(), value);
        }
    }
}

/// Publishes `party` under every handoff key.
pub fn publish_party(sink: &dyn HandoffSink, party: &PersistedParty) {
    let record = serde_json::to_value(party).unwrap_or(Value::Null);
    sink.publish(KEY_SELECTED_PARTY, record.clone());
    sink.publish(KEY_NEW_PARTY_DATA, record);

    let fields = [
        (KEY_PARTY_ID, party.id()),
        (KEY_PARTY_NAME, party.name()),
        (KEY_PARTY_PHONE, party.phone()),
        (KEY_PARTY_EMAIL, party.email()),
        (KEY_PARTY_ADDRESS, party.address()),
        (KEY_PARTY_CITY, party.city()),
        (KEY_PARTY_STATE, party.state()),
        (KEY_PARTY_COUNTRY, party.country()),
        (KEY_PARTY_ZIPCODE, party.zipcode()),
    ];
    for (key, value) in fields {
        sink.publish(key, Value::String(value.to_string()));
    }
    tracing::debug!("Published party {} to handoff", party.id());
}
