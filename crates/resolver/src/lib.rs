//! Response normalization layer for the SocialDown API
//!
//! This crate maps heterogeneous per-platform payloads into one
//! [`UnifiedResult`] shape.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │        MediaResolver<A: MediaApi>            │
//! │  process_url(&str) -> UnifiedResult          │
//! └──────────────────────────────────────────────┘
//!        │                │
//!        ▼                ▼
//! detect_platform   transform::* (pure, per platform)
//! ```
//!
//! # Example
//!
//! ```ignore
//! use resolver::MediaResolver;
//! use socialdown::SocialdownClient;
//!
//! let client = SocialdownClient::new(reqwest::Client::new());
//! let resolver = MediaResolver::new(client);
//! let result = resolver.process_url("https://youtu.be/abc123").await;
//! ```

mod api;
mod error;
mod models;
mod platform;
mod resolver;
pub mod transform;

pub use api::MediaApi;
pub use error::ResolveError;
pub use models::{DownloadLink, DownloadType, UnifiedResult};
pub use platform::{detect_platform, Platform};
pub use resolver::MediaResolver;
