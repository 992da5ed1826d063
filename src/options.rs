//! Configuration options for article retrieval.
//!
//! The `Options` struct controls how the retrieval client talks to the
//! Wiktionary API. Extraction itself has no tunables.

use std::time::Duration;

/// Configuration options for the retrieval client.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use rs_wiktionary::Options;
///
/// let options = Options {
///     timeout: Duration::from_secs(30),
///     ..Options::default()
/// };
/// assert_eq!(options.search_limit, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Timeout for each HTTP request.
    ///
    /// Default: 10 seconds
    pub timeout: Duration,

    /// Maximum number of suggestions requested from the search endpoint.
    ///
    /// Default: `10`
    pub search_limit: usize,

    /// `User-Agent` header sent with every request.
    ///
    /// Wikimedia asks API clients to identify themselves.
    ///
    /// Default: `rs-wiktionary/<crate version>`
    pub user_agent: String,

    /// API endpoint template; `{lang}` is replaced by the language code.
    ///
    /// Default: `https://{lang}.wiktionary.org/w/api.php`
    pub api_url_template: String,
}

/// Default API endpoint template.
pub const DEFAULT_API_URL_TEMPLATE: &str = "https://{lang}.wiktionary.org/w/api.php";

impl Default for Options {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            search_limit: 10,
            user_agent: concat!("rs-wiktionary/", env!("CARGO_PKG_VERSION")).to_string(),
            api_url_template: DEFAULT_API_URL_TEMPLATE.to_string(),
        }
    }
}
