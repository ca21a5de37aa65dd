use crate::config::AppConfig;
use crate::models::{Property, PropertyType, RawProperty};

/// Curated stock photos shown when a listing has no photos of its own
///
/// Keyed by lower-cased category. Each set has at least two entries so the
/// image carousel keeps its multi-image affordance.
const APARTMENT_FALLBACK: [&str; 2] = [
    "https://images.unsplash.com/photo-1522708323590-d24dbb6b0267?w=800&q=80&fit=crop",
    "https://images.unsplash.com/photo-1502672260266-1c1ef2d93688?w=800&q=80&fit=crop",
];
const HOUSE_FALLBACK: [&str; 2] = [
    "https://images.unsplash.com/photo-1568605114967-8130f3a36994?w=800&q=80&fit=crop",
    "https://images.unsplash.com/photo-1564013799919-ab600027ffc6?w=800&q=80&fit=crop",
];
const ROOM_FALLBACK: [&str; 2] = [
    "https://images.unsplash.com/photo-1513694203232-719a280e022f?w=800&q=80&fit=crop",
    "https://images.unsplash.com/photo-1586023492125-27b2c045efd7?w=800&q=80&fit=crop",
];

fn fallback_images(property_type: PropertyType) -> &'static [&'static str] {
    match property_type {
        PropertyType::Apartment => &APARTMENT_FALLBACK,
        PropertyType::House => &HOUSE_FALLBACK,
        PropertyType::Room => &ROOM_FALLBACK,
        // Unrecognized categories borrow the apartment set
        PropertyType::Other => &APARTMENT_FALLBACK,
    }
}

fn resolve_images(raw: &RawProperty, property_type: PropertyType, base_url: &str) -> Vec<String> {
    // Use real images from the backend if available
    if let Some(urls) = raw.image_urls.as_ref().filter(|urls| !urls.is_empty()) {
        return urls
            .iter()
            .map(|url| {
                if url.starts_with("http") {
                    url.clone()
                } else {
                    format!("{}{}", base_url.trim_end_matches('/'), url)
                }
            })
            .collect();
    }
    fallback_images(property_type)
        .iter()
        .map(|url| url.to_string())
        .collect()
}

/// Map a backend record into the canonical UI shape
///
/// Pure and total: missing optional fields degrade to defaults, never to
/// an error. The returned `images` sequence is never empty.
pub fn normalize(raw: &RawProperty, config: &AppConfig) -> Property {
    let property_type = PropertyType::parse(&raw.property_type);
    let area = raw
        .city
        .clone()
        .or_else(|| raw.location_id.clone())
        .unwrap_or_else(|| config.default_region.clone());

    Property {
        id: raw.id.clone(),
        title: raw.title.clone(),
        description: raw.description.clone(),
        rent: raw.rent_amount,
        property_type,
        area,
        city: raw
            .city
            .clone()
            .unwrap_or_else(|| config.default_region.clone()),
        address: raw.address.clone(),
        county: raw.county.clone(),
        zip_code: raw.zip_code.clone(),
        contact_phone: raw.contact_phone.clone(),
        contact_whatsapp: raw.contact_whatsapp.clone(),
        created_at: raw.created_at.clone(),
        images: resolve_images(raw, property_type, &config.api_base_url),
    }
}

/// Normalize a whole page of results, preserving order
pub fn normalize_all(raw: &[RawProperty], config: &AppConfig) -> Vec<Property> {
    raw.iter().map(|record| normalize(record, config)).collect()
}
