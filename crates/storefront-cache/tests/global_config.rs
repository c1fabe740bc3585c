//! Runs alone in its own binary: the global configuration is read once.

use storefront_cache::{
    apply_cache_headers, CacheHeaderOptions, CacheHeaders, CacheTagOptions, CdnCacheConfig,
};

#[test]
fn test_global_config_reads_disable_flag_once() {
    std::env::set_var("DISABLE_CDN_CACHE", "True");

    let options =
        CacheHeaderOptions::default().with_cache_tags(CacheTagOptions::new().with_product("42"));
    let mut headers: Vec<(String, String)> = Vec::new();
    apply_cache_headers(&mut headers, Some(&options)).unwrap();

    assert_eq!(
        headers,
        vec![("cache-control".to_string(), "public,max-age=0,must-revalidate".to_string())]
    );

    std::env::set_var("DISABLE_CDN_CACHE", "false");
    assert!(CdnCacheConfig::global().disable_cdn_cache);

    // A composer built from the environment reads the current value.
    let fresh = CacheHeaders::from_env();
    assert!(fresh.config().cdn_cache_enabled());
    let mut headers: Vec<(String, String)> = Vec::new();
    fresh.apply(&mut headers, Some(&options)).unwrap();
    assert_eq!(headers.len(), 3);
}
