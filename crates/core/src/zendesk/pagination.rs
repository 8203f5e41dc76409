//! Incremental pagination link cleanup.
//!
//! `next_page` links returned by the help center incremental endpoint are
//! not directly fetchable: the path comes back with a literal `hc/` segment
//! (or no segment at all) where `help_center/` belongs, and the comma in
//! the `include` parameter arrives percent-encoded. Every link must be
//! corrected before the next fetch.

/// Correct a raw `next_page` link into a fetchable URL.
pub fn normalize_next_page(link: &str) -> String {
    let mut url = link.replace(
        "/api/v2/hc/incremental/",
        "/api/v2/help_center/incremental/",
    );
    if !url.contains("/api/v2/help_center/incremental/") {
        url = url.replace("/api/v2/incremental/", "/api/v2/help_center/incremental/");
    }
    url.replace("%2C", ",")
}
