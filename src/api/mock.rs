use crate::api::error::ApiError;
use crate::api::traits::PropertySource;
use crate::api::types::PropertyQuery;
use crate::models::RawProperty;
use async_trait::async_trait;
use tracing::info;

/// In-memory property source with a fixed Irish dataset
///
/// Used by the demo binary when the backend is unreachable and by tests.
/// Applies the same query semantics the backend does: exact match on
/// county/city/type, case-insensitive substring match for the search term.
pub struct MockPropertySource {
    listings: Vec<RawProperty>,
}

impl MockPropertySource {
    pub fn new() -> Self {
        Self {
            listings: sample_listings(),
        }
    }

    pub fn with_listings(listings: Vec<RawProperty>) -> Self {
        Self { listings }
    }

    fn matches(listing: &RawProperty, query: &PropertyQuery) -> bool {
        if let Some(county) = &query.county {
            if listing.county.as_deref() != Some(county.as_str()) {
                return false;
            }
        }
        if let Some(city) = &query.city {
            if listing.city.as_deref() != Some(city.as_str()) {
                return false;
            }
        }
        if let Some(property_type) = &query.property_type {
            if !listing.property_type.eq_ignore_ascii_case(property_type) {
                return false;
            }
        }
        if let Some(term) = &query.search {
            let term = term.to_lowercase();
            let haystack = format!(
                "{} {}",
                listing.title,
                listing.description.as_deref().unwrap_or("")
            )
            .to_lowercase();
            if !haystack.contains(&term) {
                return false;
            }
        }
        true
    }
}

impl Default for MockPropertySource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PropertySource for MockPropertySource {
    async fn fetch(&self, query: &PropertyQuery) -> Result<Vec<RawProperty>, ApiError> {
        let results: Vec<RawProperty> = self
            .listings
            .iter()
            .filter(|listing| Self::matches(listing, query))
            .cloned()
            .collect();
        info!("mock source matched {} of {} listings", results.len(), self.listings.len());
        Ok(results)
    }

    async fn fetch_one(&self, id: &str) -> Result<RawProperty, ApiError> {
        self.listings
            .iter()
            .find(|listing| listing.id == id)
            .cloned()
            .ok_or(ApiError::NotFound)
    }

    fn source_name(&self) -> &'static str {
        "mock"
    }
}

fn listing(
    id: &str,
    title: &str,
    description: &str,
    rent: f64,
    property_type: &str,
    city: &str,
    county: &str,
    created_at: &str,
    image_urls: Option<Vec<&str>>,
) -> RawProperty {
    RawProperty {
        id: id.to_string(),
        title: title.to_string(),
        description: Some(description.to_string()),
        rent_amount: rent,
        property_type: property_type.to_string(),
        location_id: None,
        address: None,
        city: Some(city.to_string()),
        county: Some(county.to_string()),
        zip_code: None,
        contact_phone: Some("+353851234567".to_string()),
        contact_whatsapp: Some("+353851234567".to_string()),
        owner_id: None,
        is_active: Some(true),
        created_at: Some(created_at.to_string()),
        image_urls: image_urls.map(|urls| urls.into_iter().map(str::to_string).collect()),
    }
}

/// Typical listings across a few counties, shaped like real backend output
fn sample_listings() -> Vec<RawProperty> {
    vec![
        listing(
            "mock-1",
            "Bright 2-Bed Apartment in City Centre",
            "Spacious 2-bedroom apartment in the heart of Dublin. Close to Luas, \
             DART and all amenities. Fully furnished.",
            1800.0,
            "apartment",
            "Dublin City",
            "Dublin",
            "2026-02-08T10:00:00Z",
            Some(vec![
                "https://images.unsplash.com/photo-1522708323590-d24dbb6b0267?w=800&q=80",
                "/media/mock-1/kitchen.jpg",
            ]),
        ),
        listing(
            "mock-2",
            "Cosy Room in Shared House",
            "Single room in a friendly, clean shared house near UCC. All bills \
             included. Great for students.",
            750.0,
            "room",
            "Bishopstown",
            "Cork",
            "2026-02-07T09:30:00Z",
            None,
        ),
        listing(
            "mock-3",
            "3-Bed Semi-Detached House",
            "Beautiful 3-bedroom semi-detached house in a quiet estate. Garden, \
             parking, close to schools.",
            2200.0,
            "House",
            "Knocknacarra",
            "Galway",
            "2026-02-06T14:15:00Z",
            None,
        ),
        listing(
            "mock-4",
            "Modern Studio near IFSC",
            "Compact studio ideal for a single professional. Walking distance to \
             IFSC. Building has gym and concierge.",
            1500.0,
            "apartment",
            "Dublin City",
            "Dublin",
            "2026-02-05T08:00:00Z",
            None,
        ),
        listing(
            "mock-5",
            "Double Room in Castletroy",
            "Large double room in a modern apartment close to University of \
             Limerick. Bills included.",
            650.0,
            "room",
            "Castletroy",
            "Limerick",
            "2026-02-04T19:45:00Z",
            None,
        ),
        listing(
            "mock-6",
            "Family Home with Garden in Swords",
            "Spacious 4-bed detached house in Swords. Large back garden, driveway \
             parking. Long-term let preferred.",
            2500.0,
            "house",
            "Swords",
            "Dublin",
            "2026-02-03T12:00:00Z",
            None,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn filters_are_and_combined() {
        let source = MockPropertySource::new();
        // Dublin has apartments and Cork has a room, but Dublin+room is empty
        let query = PropertyQuery {
            county: Some("Dublin".to_string()),
            property_type: Some("room".to_string()),
            ..Default::default()
        };
        let results = source.fetch(&query).await.unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn type_filter_ignores_stored_casing() {
        let source = MockPropertySource::new();
        let query = PropertyQuery {
            property_type: Some("house".to_string()),
            ..Default::default()
        };
        let results = source.fetch(&query).await.unwrap();
        // mock-3 stores "House", mock-6 stores "house"
        assert_eq!(results.len(), 2);
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let source = MockPropertySource::new();
        let err = source.fetch_one("nope").await.unwrap_err();
        assert!(err.is_not_found());
    }
}
