// paddock-api: Async Rust client for the facility-management REST API

pub mod client;
pub mod error;
pub mod resource;
pub mod transport;
pub mod types;

pub use client::FacilityClient;
pub use error::Error;
pub use resource::Resource;
pub use transport::{TlsMode, TransportConfig};
pub use types::{DeleteResponse, HealthStatus};
