//! Response cache headers.

use std::time::Duration;

use http::header::{HeaderMap, HeaderName, HeaderValue};

use crate::config::CdnCacheConfig;
use crate::error::CacheHeaderError;
use crate::tags::{CacheTagOptions, TAG_SEPARATOR};

/// Header names written by [`CacheHeaders`].
pub mod header_names {
    /// Browser and generic cache directives.
    pub const CACHE_CONTROL: &str = "cache-control";
    /// CDN-only cache directives.
    pub const CDN_CACHE_CONTROL: &str = "cdn-cache-control";
    /// Tags for targeted CDN purges.
    pub const CACHE_TAG: &str = "cache-tag";
}

/// `cache-control` value: browsers always revalidate with the origin.
pub const CACHE_CONTROL_VALUE: &str = "public,max-age=0,must-revalidate";

/// How long the CDN may serve stale content while it revalidates.
pub const STALE_WHILE_REVALIDATE: Duration = Duration::from_secs(60 * 5);

/// A header collection that supports appending (multi-value) headers.
pub trait HeaderSink {
    /// Append a value under `name` without replacing existing values.
    fn append_header(&mut self, name: &'static str, value: &str) -> Result<(), CacheHeaderError>;

    /// Append every pair in order.
    ///
    /// Sinks that can reject a value override this to check every value before
    /// appending any, so a failed call leaves the collection untouched.
    fn append_headers(
        &mut self,
        headers: &[(&'static str, String)],
    ) -> Result<(), CacheHeaderError> {
        for &(name, ref value) in headers {
            self.append_header(name, value)?;
        }
        Ok(())
    }
}

impl HeaderSink for Vec<(String, String)> {
    fn append_header(&mut self, name: &'static str, value: &str) -> Result<(), CacheHeaderError> {
        self.push((name.to_string(), value.to_string()));
        Ok(())
    }
}

fn to_header_value(name: &'static str, value: &str) -> Result<HeaderValue, CacheHeaderError> {
    HeaderValue::from_str(value)
        .map_err(|source| CacheHeaderError::InvalidHeaderValue { name, source })
}

impl HeaderSink for HeaderMap {
    fn append_header(&mut self, name: &'static str, value: &str) -> Result<(), CacheHeaderError> {
        self.append(HeaderName::from_static(name), to_header_value(name, value)?);
        Ok(())
    }

    fn append_headers(
        &mut self,
        headers: &[(&'static str, String)],
    ) -> Result<(), CacheHeaderError> {
        let mut values = Vec::with_capacity(headers.len());
        for &(name, ref value) in headers {
            values.push((HeaderName::from_static(name), to_header_value(name, value)?));
        }

        for (name, value) in values {
            self.append(name, value);
        }
        Ok(())
    }
}

/// Per-response inputs to [`CacheHeaders`].
#[derive(Debug, Clone, Default)]
pub struct CacheHeaderOptions {
    /// Content the response depends on.
    pub cache_tags: Option<CacheTagOptions>,
}

impl CacheHeaderOptions {
    /// Set the cache tag inputs.
    pub fn with_cache_tags(mut self, tags: CacheTagOptions) -> Self {
        self.cache_tags = Some(tags);
        self
    }
}

/// Composes cache headers under a fixed [`CdnCacheConfig`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CacheHeaders {
    config: CdnCacheConfig,
}

impl CacheHeaders {
    /// Create a composer with the given configuration.
    pub fn new(config: CdnCacheConfig) -> Self {
        Self { config }
    }

    /// Create a composer configured from the environment.
    pub fn from_env() -> Self {
        Self::new(CdnCacheConfig::from_env())
    }

    /// The configuration in use.
    pub fn config(&self) -> &CdnCacheConfig {
        &self.config
    }

    /// `cdn-cache-control` value for the configured lifetime.
    pub fn cdn_cache_control_value(&self) -> String {
        format!(
            "public,durable,s-maxage={},stale-while-revalidate={}",
            self.config.one_day.as_secs(),
            STALE_WHILE_REVALIDATE.as_secs()
        )
    }

    /// Headers for a response, in the order they are written.
    pub fn compose(&self, options: Option<&CacheHeaderOptions>) -> Vec<(&'static str, String)> {
        let mut headers = vec![(header_names::CACHE_CONTROL, CACHE_CONTROL_VALUE.to_string())];

        if !self.config.cdn_cache_enabled() {
            tracing::trace!("CDN caching disabled, emitting cache-control only");
            return headers;
        }

        headers.push((header_names::CDN_CACHE_CONTROL, self.cdn_cache_control_value()));

        if let Some(tags) = options.and_then(|o| o.cache_tags.as_ref()) {
            let values = tags.to_values();
            if !values.is_empty() {
                tracing::debug!(tags = values.len(), "emitting cache-tag header");
                headers.push((header_names::CACHE_TAG, values.join(TAG_SEPARATOR)));
            }
        }

        headers
    }

    /// Append the composed headers to `headers`, all or nothing.
    pub fn apply<H>(
        &self,
        headers: &mut H,
        options: Option<&CacheHeaderOptions>,
    ) -> Result<(), CacheHeaderError>
    where
        H: HeaderSink + ?Sized,
    {
        headers.append_headers(&self.compose(options))
    }
}

/// Append cache headers using the process-wide [`CdnCacheConfig::global`].
pub fn apply_cache_headers<H>(
    headers: &mut H,
    options: Option<&CacheHeaderOptions>,
) -> Result<(), CacheHeaderError>
where
    H: HeaderSink + ?Sized,
{
    CacheHeaders::new(*CdnCacheConfig::global()).apply(headers, options)
}
