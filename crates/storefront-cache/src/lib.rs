//! Response cache headers for the storefront.
//!
//! This crate provides:
//! - `CacheHeaders` - Composes `cache-control`, `cdn-cache-control` and `cache-tag`
//! - `CacheTagOptions` - Content identifiers a response depends on
//! - `CdnCacheConfig` - Process-wide CDN caching configuration
//! - `HeaderSink` - Append-only header collections (`Vec` pairs, `http::HeaderMap`)
//!
//! # Example
//!
//! ```ignore
//! use storefront_cache::{CacheHeaders, CacheHeaderOptions, CacheTagOptions, CdnCacheConfig};
//!
//! let composer = CacheHeaders::new(CdnCacheConfig::default());
//! let options = CacheHeaderOptions::default()
//!     .with_cache_tags(CacheTagOptions::new().with_product("42"));
//!
//! let mut headers: Vec<(String, String)> = Vec::new();
//! composer.apply(&mut headers, Some(&options))?;
//! // cache-tag: pid_42
//! ```

mod config;
mod error;
mod headers;
mod ids;
pub mod tags;

pub use config::*;
pub use error::*;
pub use headers::*;
pub use ids::*;
pub use tags::CacheTagOptions;
