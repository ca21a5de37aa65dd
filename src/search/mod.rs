pub mod debounce;
pub mod feed;

pub use debounce::Debouncer;
pub use feed::{load_detail, DetailState, FeedState, PropertyFeed, LOAD_ERROR};

use std::cmp::Ordering;

use chrono::DateTime;
use serde::{Deserialize, Serialize};

use crate::api::types::PropertyQuery;
use crate::locations::LocationSelection;
use crate::models::{Property, PropertyType};

/// Result ordering offered by the sort selector
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum SortMode {
    /// Latest first (default)
    #[default]
    #[serde(rename = "latest")]
    Newest,
    /// Price: low to high
    #[serde(rename = "price-asc")]
    PriceAsc,
    /// Price: high to low
    #[serde(rename = "price-desc")]
    PriceDesc,
}

impl SortMode {
    /// Parse the sort selector's wire value, defaulting to latest-first
    pub fn parse(raw: &str) -> Self {
        match raw {
            "price-asc" => SortMode::PriceAsc,
            "price-desc" => SortMode::PriceDesc,
            _ => SortMode::Newest,
        }
    }
}

/// Current filter state of the listings page
///
/// Created empty at page mount, mutated by the filter bar handlers, never
/// persisted. `None` is the "all" sentinel for each criterion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub county: Option<String>,
    pub city: Option<String>,
    pub property_type: Option<PropertyType>,
    /// Free-text term, only set through the debouncer
    pub search: Option<String>,
    pub sort: SortMode,
}

impl FilterCriteria {
    /// Copy the county/town picker state into the criteria
    pub fn set_location(&mut self, selection: &LocationSelection) {
        self.county = selection.county().map(str::to_string);
        self.city = selection.town().map(str::to_string);
    }

    /// Build the backend query for these criteria
    ///
    /// The search term travels to the backend; sorting stays client-side.
    pub fn to_query(&self) -> PropertyQuery {
        PropertyQuery {
            county: self.county.clone(),
            city: self.city.clone(),
            property_type: self.property_type.map(|t| t.as_str().to_string()),
            search: self.search.clone(),
        }
    }
}

/// Keep the properties matching every present criterion
///
/// Criteria are AND-combined; absent ones are skipped. The free-text term
/// is not matched here — the backend already applied it to the result set.
pub fn filter(mut properties: Vec<Property>, criteria: &FilterCriteria) -> Vec<Property> {
    properties.retain(|property| {
        if let Some(county) = &criteria.county {
            if property.county.as_deref() != Some(county.as_str()) {
                return false;
            }
        }
        if let Some(city) = &criteria.city {
            if property.city != *city {
                return false;
            }
        }
        if let Some(property_type) = criteria.property_type {
            if property.property_type != property_type {
                return false;
            }
        }
        true
    });
    properties
}

/// Order properties in place; ties keep their incoming order
///
/// Latest-first puts records with missing or unparseable timestamps after
/// all dated ones.
pub fn sort(properties: &mut [Property], mode: SortMode) {
    match mode {
        SortMode::Newest => properties.sort_by(|a, b| {
            match (posted_at(a), posted_at(b)) {
                (Some(x), Some(y)) => y.cmp(&x),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            }
        }),
        SortMode::PriceAsc => properties.sort_by(|a, b| a.rent.total_cmp(&b.rent)),
        SortMode::PriceDesc => properties.sort_by(|a, b| b.rent.total_cmp(&a.rent)),
    }
}

fn posted_at(property: &Property) -> Option<DateTime<chrono::FixedOffset>> {
    property
        .created_at
        .as_deref()
        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
}
