//! # Wire models for the console's REST resources
//!
//! All types (de)serialise with camelCase field names, matching the backend.
//!
//! | Type | Endpoint(s) |
//! |------|-------------|
//! | [`Inmate`] | `GET/POST /inmateProfile`, `PUT/DELETE /inmateprofile/{id}` |
//! | [`BookingListItem`] | `GET /booking` |
//! | [`NewBooking`] | `POST /booking` |
//! | [`ReleaseRequest`] | `POST /booking/{id}/release` |
//! | [`Charge`] | `GET /charge` |
//! | [`Page`] / [`ListQuery`] | every paged list |
//!
//! Dates travel as ISO strings. The backend sometimes sends a full timestamp
//! (`"1990-04-01T00:00:00"`) where only the date matters, so dates are read
//! from the first ten characters.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Gender, sent as its numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn code(self) -> u8 {
        match self {
            Gender::Male => 0,
            Gender::Female => 1,
            Gender::Other => 2,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.code() == code)
    }

    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

impl From<Gender> for u8 {
    fn from(gender: Gender) -> Self {
        gender.code()
    }
}

impl TryFrom<u8> for Gender {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Gender::from_code(code).ok_or_else(|| format!("unknown gender code {code}"))
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

mod iso_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&date.format("%Y-%m-%d").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(d)?;
        let day = raw.get(..10).unwrap_or(raw.as_str());
        NaiveDate::parse_from_str(day, "%Y-%m-%d").map_err(serde::de::Error::custom)
    }
}

/// An inmate profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inmate {
    #[serde(default, alias = "Id", skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub first_name: String,
    #[serde(default)]
    pub middle_name: String,
    pub last_name: String,
    #[serde(with = "iso_date")]
    pub date_of_birth: NaiveDate,
    pub citizenship_number: String,
    pub gender: Gender,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub emergency_contact: String,
    #[serde(default)]
    pub emergency_contact_phone: String,
}

impl Inmate {
    /// "First Middle Last", skipping an empty middle name.
    pub fn full_name(&self) -> String {
        [&self.first_name, &self.middle_name, &self.last_name]
            .iter()
            .map(|part| part.trim())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn is_new(&self) -> bool {
        self.id.is_empty()
    }
}

/// A row of the booking list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingListItem {
    pub id: String,
    pub booking_number: String,
    pub inmate_id: String,
    pub inmate_name: String,
    pub booking_location: String,
    pub facility_name: String,
    #[serde(with = "iso_date")]
    pub booking_date: NaiveDate,
}

/// Body of `POST /booking`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    pub inmate_id: String,
    pub charge_id: String,
    #[serde(with = "iso_date")]
    pub booking_date: NaiveDate,
    pub booking_location: String,
    pub facility_name: String,
}

/// Body of `POST /booking/{id}/release`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseRequest {
    pub release_reason: String,
}

/// A chargeable offence, offered when creating a booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Charge {
    pub id: String,
    pub charge_name: String,
}

/// One page of a list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(default)]
    pub total_count: Option<u64>,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total_count: None,
        }
    }
}

impl<T> Page<T> {
    /// Total rows across all pages; the item count when the backend omits it.
    pub fn total(&self) -> u64 {
        self.total_count.unwrap_or(self.items.len() as u64)
    }
}

/// Query parameters shared by every paged list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    /// Zero-based page index, sent as-is.
    pub page_number: u32,
    pub page_size: u32,
    pub search: String,
}

impl ListQuery {
    pub fn new(page_number: u32, page_size: u32, search: impl Into<String>) -> Self {
        Self {
            page_number,
            page_size,
            search: search.into(),
        }
    }
}
