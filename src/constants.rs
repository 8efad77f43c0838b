//! Application constants and configuration

pub const REGISTRY_URL: &str = "https://registry.npmjs.org";
pub const NPM_PACKAGE_URL: &str = "https://www.npmjs.com/package";
pub const DOCS_URL: &str = "https://docs.npmjs.com/";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result count requested from the search endpoint
pub const SEARCH_PAGE_SIZE: usize = 20;
