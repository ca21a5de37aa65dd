use serde::{Deserialize, Serialize};

/// Query parameters for a property search
///
/// Serializes straight into the `GET /properties` query string; absent
/// criteria are omitted rather than sent empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PropertyQuery {
    /// County to search in (e.g. "Dublin")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub county: Option<String>,
    /// Town or city within the county
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Listing category ("apartment", "house", "room")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_type: Option<String>,
    /// Free-text search term, already debounced by the caller
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

/// Payload for `POST /auth/login`
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Token plus profile returned by a successful login
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: crate::models::User,
}

/// Fields accepted by `POST /properties` and `PUT /properties/{id}`
///
/// Mirrors `RawProperty` minus the backend-owned fields (id, owner,
/// timestamps, resolved image URLs).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyDraft {
    pub title: String,
    pub description: Option<String>,
    pub rent_amount: f64,
    pub property_type: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub county: Option<String>,
    pub zip_code: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_whatsapp: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_criteria_are_omitted_from_the_query_string() {
        let query = PropertyQuery {
            city: Some("Cork".to_string()),
            ..Default::default()
        };
        let encoded = serde_json::to_value(&query).unwrap();
        assert_eq!(encoded.as_object().unwrap().len(), 1);
        assert_eq!(encoded["city"], "Cork");
    }
}
