pub mod error;
pub mod http;
pub mod mock;
pub mod traits;
pub mod types;

pub use error::ApiError;
pub use http::HttpPropertySource;
pub use mock::MockPropertySource;
pub use traits::PropertySource;
pub use types::PropertyQuery;
