//! Scryfall REST API endpoint constants.
//!
//! Paths are relative to the base URL and carry no leading slash so that they
//! resolve beneath a base URL that includes a path prefix.

use std::time::Duration;

/// Base URL for the Scryfall REST API.
pub const SCRYFALL_BASE_URL: &str = "https://api.scryfall.com";

/// Total time allowed for one HTTP call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// User agent sent when none is configured.
pub fn default_user_agent() -> String {
    format!("scryfall-api-client/{}", env!("CARGO_PKG_VERSION"))
}

/// Card endpoints.
pub mod cards {
    /// Full-text card search.
    pub const SEARCH: &str = "cards/search";
    /// Lookup by exact or fuzzy name.
    pub const NAMED: &str = "cards/named";
    /// Name autocompletion.
    pub const AUTOCOMPLETE: &str = "cards/autocomplete";
    /// A random card.
    pub const RANDOM: &str = "cards/random";
    /// Prefix for lookups by Scryfall id, set code or foreign ids.
    pub const CARDS: &str = "cards";
}

/// Set endpoints.
pub mod sets {
    /// All sets.
    pub const SETS: &str = "sets";
}

/// Card symbol endpoints.
pub mod symbology {
    /// All card symbols.
    pub const SYMBOLOGY: &str = "symbology";
    /// Mana cost parser.
    pub const PARSE_MANA: &str = "symbology/parse-mana";
}

/// Catalog endpoints.
pub mod catalog {
    /// Prefix for named catalogs.
    pub const CATALOG: &str = "catalog";
}

/// Bulk data endpoints.
pub mod bulk_data {
    /// All bulk data files.
    pub const BULK_DATA: &str = "bulk-data";
}

/// Account and OAuth endpoints (authentication required).
pub mod private {
    /// The account behind the grant secret.
    pub const ACCOUNT: &str = "account";
    /// The application behind the client secret.
    pub const APPLICATION: &str = "application";
    /// Exchange an OAuth code for a grant.
    pub const OAUTH_CONVERT: &str = "oauth/convert";
    /// Downgrade a grant's scope.
    pub const OAUTH_DOWNGRADE: &str = "oauth/downgrade";
    /// Revoke a grant.
    pub const OAUTH_REVOKE: &str = "oauth/revoke";
}

/// Percent-encode a single path segment.
pub(crate) fn path_segment(segment: &str) -> String {
    url::form_urlencoded::byte_serialize(segment.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// Join path segments, encoding each one.
pub(crate) fn join_path(prefix: &str, segments: &[&str]) -> String {
    let mut path = prefix.to_string();
    for segment in segments {
        path.push('/');
        path.push_str(&path_segment(segment));
    }
    path
}

/// Append an encoded query string to a path.
pub(crate) fn with_query<Q>(path: &str, query: &Q) -> Result<String, serde_urlencoded::ser::Error>
where
    Q: serde::Serialize + ?Sized,
{
    let query_string = serde_urlencoded::to_string(query)?;
    if query_string.is_empty() {
        Ok(path.to_string())
    } else {
        Ok(format!("{}?{}", path, query_string))
    }
}
