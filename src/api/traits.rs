use crate::api::error::ApiError;
use crate::api::types::PropertyQuery;
use crate::models::RawProperty;
use async_trait::async_trait;

/// Common trait for all property sources
/// This allows the feed and the demo binary to run against either the real
/// backend or the in-memory mock dataset
#[async_trait]
pub trait PropertySource: Send + Sync {
    /// Fetch property records matching the query
    async fn fetch(&self, query: &PropertyQuery) -> Result<Vec<RawProperty>, ApiError>;

    /// Fetch a single record by id
    async fn fetch_one(&self, id: &str) -> Result<RawProperty, ApiError>;

    /// Get the name of the source
    fn source_name(&self) -> &'static str;
}
