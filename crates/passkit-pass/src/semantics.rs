//! # Semantic Tags
//!
//! Optional machine-readable enrichment data the wallet platform uses for
//! system-level suggestions: gate-change alerts, event reminders, balance
//! summaries, Wi-Fi prompts. Every member is optional and absence means
//! "not applicable". There are no cross-field invariants.
//!
//! Members fall into loose families:
//!
//! | Family | Members |
//! |--------|---------|
//! | Air / transit | `airlineCode`, `flightCode`, `flightNumber`, `departure*`, `destination*`, `boarding*`, `vehicle*`, `transit*`, `carNumber`, `securityScreening`, `priorityStatus` |
//! | Timing | `current*Date`, `original*Date`, `duration` |
//! | Event / venue | `eventName`, `eventType`, `eventStartDate`, `eventEndDate`, `genre`, `artistIDs`, `performerNames`, `venue*`, `silenceRequested` |
//! | Sport | `sportName`, `leagueName`, `leagueAbbreviation`, `homeTeam*`, `awayTeam*` |
//! | Retail / membership | `balance`, `totalPrice`, `membershipProgram*`, `confirmationNumber` |
//! | People / seating | `passengerName`, `seats`, `wifiAccess` |
//!
//! Nested records (`balance`, `totalPrice`, `passengerName`, `seats`,
//! `wifiAccess`) whose members are all unset count as absent. They are
//! skipped on output and [`SemanticTags::pruned`] drops them outright.

use serde::{Deserialize, Serialize};

use passkit_core::{is_false, IsEmpty, Timestamp};

/// A decimal amount in a given currency.
///
/// The amount is a decimal string so no precision is lost in transit.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyAmount {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub amount: String,

    /// ISO 4217 currency code.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub currency_code: String,
}

impl CurrencyAmount {
    pub fn new(amount: impl Into<String>, currency_code: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
            currency_code: currency_code.into(),
        }
    }
}

impl IsEmpty for CurrencyAmount {
    fn is_empty(&self) -> bool {
        self.amount.is_empty() && self.currency_code.is_empty()
    }
}

/// A latitude/longitude pair inside the semantic block.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SemanticLocation {
    pub latitude: f64,
    pub longitude: f64,
}

impl SemanticLocation {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Structured parts of a person's name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonNameComponents {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_suffix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phonetic_representation: Option<String>,
}

impl PersonNameComponents {
    pub fn new(given_name: impl Into<String>, family_name: impl Into<String>) -> Self {
        Self {
            given_name: Some(given_name.into()),
            family_name: Some(family_name.into()),
            ..Self::default()
        }
    }
}

impl IsEmpty for PersonNameComponents {
    fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// One seat held by the pass holder.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seat {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seat_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seat_identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seat_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seat_row: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seat_section: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seat_type: Option<String>,
}

impl IsEmpty for Seat {
    fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Credentials for a venue or vehicle Wi-Fi network.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WifiNetwork {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ssid: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub password: String,
}

impl WifiNetwork {
    pub fn new(ssid: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            ssid: ssid.into(),
            password: password.into(),
        }
    }
}

impl IsEmpty for WifiNetwork {
    fn is_empty(&self) -> bool {
        self.ssid.is_empty() && self.password.is_empty()
    }
}

/// The semantic annotation block (`semantics` in `pass.json`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemanticTags {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub airline_code: Option<String>,
    #[serde(rename = "artistIDs", default, skip_serializing_if = "Vec::is_empty")]
    pub artist_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub away_team_abbreviation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub away_team_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub away_team_name: Option<String>,
    #[serde(default, skip_serializing_if = "IsEmpty::is_empty")]
    pub balance: Option<CurrencyAmount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boarding_group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boarding_sequence_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub car_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmation_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_arrival_date: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_boarding_date: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_departure_date: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_airport_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_airport_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_gate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_location: Option<SemanticLocation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_location_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_platform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_station_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_terminal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_airport_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_airport_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_gate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_location: Option<SemanticLocation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_location_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_platform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_station_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_terminal: Option<String>,
    /// Seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_end_date: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_start_date: Option<Timestamp>,
    /// A `PKEventType…` string; the platform's list grows, so it is not closed here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flight_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flight_number: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_team_abbreviation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_team_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_team_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub league_abbreviation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub league_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub membership_program_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub membership_program_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_arrival_date: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_boarding_date: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_departure_date: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "IsEmpty::is_empty")]
    pub passenger_name: Option<PersonNameComponents>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub performer_names: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority_status: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub seats: Vec<Seat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_screening: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub silence_requested: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sport_name: Option<String>,
    #[serde(default, skip_serializing_if = "IsEmpty::is_empty")]
    pub total_price: Option<CurrencyAmount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transit_provider: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transit_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transit_status_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue_entrance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue_location: Option<SemanticLocation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue_phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue_room: Option<String>,
    #[serde(default, skip_serializing_if = "IsEmpty::is_empty")]
    pub wifi_access: Option<WifiNetwork>,
}

impl SemanticTags {
    /// The same tags with all-unset nested records removed.
    pub fn pruned(mut self) -> Self {
        self.balance = self.balance.filter(|b| !IsEmpty::is_empty(b));
        self.total_price = self.total_price.filter(|p| !IsEmpty::is_empty(p));
        self.passenger_name = self.passenger_name.filter(|n| !IsEmpty::is_empty(n));
        self.wifi_access = self.wifi_access.filter(|w| !IsEmpty::is_empty(w));
        self.seats.retain(|seat| !IsEmpty::is_empty(seat));
        self
    }
}

impl IsEmpty for SemanticTags {
    /// True when nothing would remain after pruning.
    fn is_empty(&self) -> bool {
        self.clone().pruned() == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_tags_are_empty_and_serialize_to_empty_object() {
        let tags = SemanticTags::default();
        assert!(IsEmpty::is_empty(&tags));
        assert_eq!(serde_json::to_value(&tags).unwrap(), json!({}));
    }

    #[test]
    fn flight_tags_use_wire_names() {
        let tags = SemanticTags {
            airline_code: Some("AC".to_string()),
            flight_number: Some(123),
            departure_location: Some(SemanticLocation::new(45.47, -73.74)),
            passenger_name: Some(PersonNameComponents::new("Jo", "Doe")),
            current_departure_date: Some(Timestamp::parse("2026-03-01T09:30:00Z").unwrap()),
            ..SemanticTags::default()
        };
        assert!(!IsEmpty::is_empty(&tags));
        assert_eq!(
            serde_json::to_value(&tags).unwrap(),
            json!({
                "airlineCode": "AC",
                "flightNumber": 123,
                "departureLocation": {"latitude": 45.47, "longitude": -73.74},
                "passengerName": {"familyName": "Doe", "givenName": "Jo"},
                "currentDepartureDate": "2026-03-01T09:30:00Z"
            })
        );
    }

    #[test]
    fn artist_ids_key_is_uppercase() {
        let tags = SemanticTags {
            artist_ids: vec!["a1".to_string()],
            ..SemanticTags::default()
        };
        assert_eq!(serde_json::to_value(&tags).unwrap(), json!({"artistIDs": ["a1"]}));
    }

    #[test]
    fn silence_requested_omitted_when_false() {
        let mut tags = SemanticTags::default();
        assert!(serde_json::to_value(&tags).unwrap().get("silenceRequested").is_none());
        tags.silence_requested = true;
        assert_eq!(serde_json::to_value(&tags).unwrap()["silenceRequested"], json!(true));
    }

    #[test]
    fn nested_records_omit_empty_members() {
        let tags = SemanticTags {
            balance: Some(CurrencyAmount::new("12.50", "")),
            wifi_access: Some(WifiNetwork::new("Lounge", "")),
            seats: vec![Seat {
                seat_row: Some("12".to_string()),
                ..Seat::default()
            }],
            ..SemanticTags::default()
        };
        assert_eq!(
            serde_json::to_value(&tags).unwrap(),
            json!({
                "balance": {"amount": "12.50"},
                "seats": [{"seatRow": "12"}],
                "wifiAccess": {"ssid": "Lounge"}
            })
        );
    }

    #[test]
    fn tags_of_only_empty_records_are_empty() {
        let tags = SemanticTags {
            balance: Some(CurrencyAmount::default()),
            passenger_name: Some(PersonNameComponents::default()),
            seats: vec![Seat::default(), Seat::default()],
            wifi_access: Some(WifiNetwork::default()),
            ..SemanticTags::default()
        };
        assert!(IsEmpty::is_empty(&tags));
        assert_eq!(tags.pruned(), SemanticTags::default());
    }

    #[test]
    fn pruning_keeps_populated_records() {
        let tags = SemanticTags {
            total_price: Some(CurrencyAmount::new("99.00", "GBP")),
            seats: vec![
                Seat::default(),
                Seat {
                    seat_number: Some("14C".to_string()),
                    ..Seat::default()
                },
            ],
            wifi_access: Some(WifiNetwork::default()),
            ..SemanticTags::default()
        }
        .pruned();
        assert_eq!(tags.seats.len(), 1);
        assert!(tags.wifi_access.is_none());
        assert_eq!(
            serde_json::to_value(&tags).unwrap(),
            json!({
                "seats": [{"seatNumber": "14C"}],
                "totalPrice": {"amount": "99.00", "currencyCode": "GBP"}
            })
        );
    }

    #[test]
    fn empty_optional_records_skipped_on_output() {
        let tags = SemanticTags {
            balance: Some(CurrencyAmount::default()),
            event_name: Some("Finals".to_string()),
            ..SemanticTags::default()
        };
        assert_eq!(serde_json::to_value(&tags).unwrap(), json!({"eventName": "Finals"}));
    }

    #[test]
    fn record_emptiness() {
        assert!(IsEmpty::is_empty(&CurrencyAmount::default()));
        assert!(!IsEmpty::is_empty(&CurrencyAmount::new("1", "USD")));
        assert!(IsEmpty::is_empty(&PersonNameComponents::default()));
        assert!(IsEmpty::is_empty(&Seat::default()));
        assert!(IsEmpty::is_empty(&WifiNetwork::default()));
    }

    #[test]
    fn parse_round_trip() {
        let raw = json!({
            "eventName": "Finals",
            "venueLocation": {"latitude": 51.5, "longitude": -0.12},
            "totalPrice": {"amount": "99.00", "currencyCode": "GBP"},
            "performerNames": ["A", "B"]
        });
        let tags: SemanticTags = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(tags.event_name.as_deref(), Some("Finals"));
        assert_eq!(serde_json::to_value(&tags).unwrap(), raw);
    }
}
