//! Library catalog search URL construction
//!
//! Missing titles get a direct search link into the public library's
//! catalog, so a report row is one click away from a borrow request.

use url::Url;

/// Build a catalog search URL for `title`.
///
/// Appends `param=title` to `base` with standard form encoding. The raw
/// title goes in, not the canonical key: the catalog's own search copes
/// with case and punctuation better than a stripped-down key would.
pub fn build_search_url(base: &Url, param: &str, title: &str) -> Url {
    let mut search = base.clone();
    search.query_pairs_mut().append_pair(param, title);
    search
}
