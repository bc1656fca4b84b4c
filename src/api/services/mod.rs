pub mod content;
pub mod health;
pub mod types;

pub use content::{ContentApiService, content_routes, error_response, json_config};
pub use health::{AppStartTime, HealthService, health_routes};
pub use types::{ContentResponse, ErrorResponse, HealthResponse};
