use serde::{Deserialize, Serialize};

/// Category of a rental listing
///
/// The backend transports this as a free-form string with inconsistent
/// casing, so parsing is case-insensitive and anything unrecognized lands
/// in `Other` rather than failing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Apartment,
    House,
    Room,
    Other,
}

impl PropertyType {
    /// Parse a backend category string, case-insensitively
    pub fn parse(raw: &str) -> Self {
        match raw.to_lowercase().as_str() {
            "apartment" => PropertyType::Apartment,
            "house" => PropertyType::House,
            "room" => PropertyType::Room,
            _ => PropertyType::Other,
        }
    }

    /// Wire value sent back to the backend in query parameters
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "apartment",
            PropertyType::House => "house",
            PropertyType::Room => "room",
            PropertyType::Other => "other",
        }
    }

    /// Human-readable label for display
    pub fn label(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "Apartment",
            PropertyType::House => "House",
            PropertyType::Room => "Room",
            PropertyType::Other => "Other",
        }
    }
}

/// Property record as the backend serves it
///
/// Snake_case fields, plenty of optionals. Deserialization must never fail
/// on missing optional fields; defaulting happens in the mapper, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawProperty {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub rent_amount: f64,
    pub property_type: String,
    pub location_id: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub county: Option<String>,
    pub zip_code: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_whatsapp: Option<String>,
    pub owner_id: Option<String>,
    pub is_active: Option<bool>,
    pub created_at: Option<String>,
    /// Populated by the backend from its property_images table
    pub image_urls: Option<Vec<String>>,
}

/// Core property data model, as the UI consumes it
///
/// Produced by `mapper::normalize`. `images` is guaranteed non-empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Property {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub rent: f64,
    pub property_type: PropertyType,
    /// Best-effort single location label for cards and headings
    pub area: String,
    pub city: String,
    pub address: Option<String>,
    pub county: Option<String>,
    pub zip_code: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_whatsapp: Option<String>,
    pub created_at: Option<String>,
    pub images: Vec<String>,
}

/// Signed-in user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// One county and its towns, as served by `GET /meta/locations`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationRecord {
    pub county: String,
    pub towns: Vec<String>,
}
