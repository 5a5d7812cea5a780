pub mod client;
pub mod config;
pub mod error;
pub mod request;

pub use client::{ApiResult, GitHubClient};
pub use config::GitHubConfig;
pub use error::{ApiErrorKind, ApiFailure};
pub use request::{HttpMethod, RequestDescriptor};
