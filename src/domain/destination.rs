//! The fixed two-destination allow-list.
//!
//! Every tracked click must target one of exactly two configured destination
//! URLs. Anything else is rejected before any side effect occurs.

use thiserror::Error;

/// Default destination URLs, matching the public landing page links.
pub const DEFAULT_AMAZON_URL: &str = "https://www.amazon.com";
pub const DEFAULT_WALMART_URL: &str = "https://www.walmart.com";

/// One of the two permitted outbound destinations.
///
/// The set is closed: aggregate responses key on these two slots
/// (`amazon` / `walmart`) and the total is always their sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Amazon,
    Walmart,
}

impl Destination {
    /// All destinations, in stats-response order.
    pub const ALL: [Destination; 2] = [Destination::Amazon, Destination::Walmart];

    /// Stable identifier used as a JSON key and a metrics label.
    pub fn key(self) -> &'static str {
        match self {
            Destination::Amazon => "amazon",
            Destination::Walmart => "walmart",
        }
    }
}

/// Errors raised when building an allow-list from configuration.
#[derive(Debug, Error)]
pub enum AllowListError {
    #[error("destination URL is not a valid http(s) URL: {0}")]
    InvalidUrl(String),
    #[error("destination URLs must be distinct")]
    DuplicateUrl,
}

/// The configured URL for each destination slot.
///
/// Resolution is exact string equality with no normalization: a trailing
/// slash, a scheme change, or a case difference is a different (and thus
/// rejected) URL.
#[derive(Debug, Clone)]
pub struct AllowList {
    amazon_url: String,
    walmart_url: String,
}

impl AllowList {
    /// Builds an allow-list, validating that both entries are absolute
    /// http(s) URLs and distinct from each other.
    pub fn from_urls(
        amazon_url: impl Into<String>,
        walmart_url: impl Into<String>,
    ) -> Result<Self, AllowListError> {
        let amazon_url = amazon_url.into();
        let walmart_url = walmart_url.into();

        for entry in [&amazon_url, &walmart_url] {
            let parsed =
                url::Url::parse(entry).map_err(|_| AllowListError::InvalidUrl(entry.clone()))?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(AllowListError::InvalidUrl(entry.clone()));
            }
        }

        if amazon_url == walmart_url {
            return Err(AllowListError::DuplicateUrl);
        }

        Ok(Self {
            amazon_url,
            walmart_url,
        })
    }

    /// Resolves a submitted URL to its destination slot.
    ///
    /// Returns `None` for anything outside the allow-list, including
    /// near-misses that differ only in trailing slash or case.
    pub fn resolve(&self, link_url: &str) -> Option<Destination> {
        if link_url == self.amazon_url {
            Some(Destination::Amazon)
        } else if link_url == self.walmart_url {
            Some(Destination::Walmart)
        } else {
            None
        }
    }

    /// The configured URL for a destination slot.
    pub fn url_for(&self, destination: Destination) -> &str {
        match destination {
            Destination::Amazon => &self.amazon_url,
            Destination::Walmart => &self.walmart_url,
        }
    }
}

impl Default for AllowList {
    fn default() -> Self {
        Self {
            amazon_url: DEFAULT_AMAZON_URL.to_string(),
            walmart_url: DEFAULT_WALMART_URL.to_string(),
        }
    }
}
