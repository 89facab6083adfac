//! Pagination helpers for Freshdesk list endpoints.
//!
//! Freshdesk does not put paging state in the JSON body. Instead, list
//! responses carry a `Link` header of the form
//!
//! ```text
//! <https://acme.freshdesk.com/api/v2/tickets?page=3>; rel="next", <https://acme.freshdesk.com/api/v2/tickets?page=1>; rel="prev"
//! ```
//!
//! [`parse_link_header`] turns that header into a [`PaginationCursor`]
//! without touching the network.

use serde::Serialize;
use url::Url;

/// Lowest page number accepted by the remote API.
pub const MIN_PAGE: u32 = 1;

/// Page size used when the caller does not supply one.
pub const DEFAULT_PER_PAGE: u32 = 30;

/// Largest page size accepted by the remote API.
pub const MAX_PER_PAGE: u32 = 100;

/// Highest page reachable through the search endpoints.
pub const MAX_SEARCH_PAGE: u32 = 10;

/// Position within a remote listing, rebuilt from each response.
///
/// `next_page` / `prev_page` are only present when the corresponding
/// relation appeared in the `Link` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationCursor {
    /// Page that was requested.
    pub page: u32,
    /// Page size that was requested.
    pub per_page: u32,
    /// Page to request next, if there is one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page: Option<u32>,
    /// Page before this one, if there is one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_page: Option<u32>,
}

impl PaginationCursor {
    /// Creates a cursor with no neighbouring pages.
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page,
            per_page,
            next_page: None,
            prev_page: None,
        }
    }

    /// Returns true if another page can be requested.
    pub fn has_next(&self) -> bool {
        self.next_page.is_some()
    }
}

/// One page of a remote listing together with its cursor.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    /// Records on this page.
    pub items: Vec<T>,
    /// Where this page sits in the listing.
    pub pagination: PaginationCursor,
}

/// Clamps `value` into `min..=max`, using `default` when absent.
fn clamp_into(value: Option<i64>, default: u32, min: u32, max: u32) -> u32 {
    match value {
        None => default,
        Some(v) => v.clamp(i64::from(min), i64::from(max)) as u32,
    }
}

/// Clamps a requested page number to the API minimum, defaulting to 1.
pub fn clamp_page(page: Option<i64>) -> u32 {
    clamp_into(page, MIN_PAGE, MIN_PAGE, u32::MAX)
}

/// Clamps a requested page size into `1..=100`, defaulting to 30.
pub fn clamp_per_page(per_page: Option<i64>) -> u32 {
    clamp_into(per_page, DEFAULT_PER_PAGE, MIN_PAGE, MAX_PER_PAGE)
}

/// Clamps a search page into the range the search endpoints serve.
pub fn clamp_search_page(page: Option<i64>) -> u32 {
    clamp_into(page, MIN_PAGE, MIN_PAGE, MAX_SEARCH_PAGE)
}

/// Decodes a `Link` header into a cursor for the page that was requested.
///
/// Entries that cannot be parsed, or whose URL carries no numeric `page`
/// parameter, are ignored. `rel="previous"` is accepted as an alias of
/// `rel="prev"`.
pub fn parse_link_header(header: &str, page: u32, per_page: u32) -> PaginationCursor {
    let mut cursor = PaginationCursor::new(page, per_page);

    for entry in link_entries(header) {
        let Some((target, rel)) = parse_link_entry(entry) else {
            continue;
        };
        let Some(target_page) = page_param(target) else {
            continue;
        };

        match rel {
            "next" => cursor.next_page = Some(target_page),
            "prev" | "previous" => cursor.prev_page = Some(target_page),
            _ => {}
        }
    }

    cursor
}

/// Splits a `Link` header on the commas that separate entries.
///
/// Commas between `<` and `>` belong to a URL and do not split.
fn link_entries(header: &str) -> Vec<&str> {
    let mut entries = Vec::new();
    let mut in_target = false;
    let mut start = 0;

    for (index, ch) in header.char_indices() {
        match ch {
            '<' => in_target = true,
            '>' => in_target = false,
            ',' if !in_target => {
                entries.push(&header[start..index]);
                start = index + 1;
            }
            _ => {}
        }
    }
    entries.push(&header[start..]);

    entries
}

/// Splits `<url>; rel="next"` into the URL and the relation name.
fn parse_link_entry(entry: &str) -> Option<(&str, &str)> {
    let (target, params) = entry.trim().strip_prefix('<')?.split_once('>')?;

    let rel = params.split(';').find_map(|param| {
        let (key, value) = param.split_once('=')?;
        (key.trim().eq_ignore_ascii_case("rel")).then(|| value.trim().trim_matches('"'))
    })?;

    Some((target, rel))
}

/// Reads the `page` query parameter from an absolute or relative URL.
fn page_param(target: &str) -> Option<u32> {
    let url = Url::parse(target)
        .or_else(|_| Url::parse("http://localhost/").and_then(|base| base.join(target)))
        .ok()?;

    url.query_pairs()
        .find(|(key, _)| key == "page")
        .and_then(|(_, value)| value.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_commas_inside_urls_do_not_split_entries() {
        let header = concat!(
            r#"<https://x/api/v2/tickets?include=requester,stats&page=3>; rel="next", "#,
            r#"<https://x/api/v2/tickets?include=requester,stats&page=1>; rel="prev""#,
        );
        let cursor = parse_link_header(header, 2, 30);
        assert_eq!(cursor.next_page, Some(3));
        assert_eq!(cursor.prev_page, Some(1));
    }

    #[test]
    fn test_semicolon_inside_url_is_part_of_target() {
        let header = r#"<https://x/api/v2/tickets?a=b;c&page=4>; rel="next""#;
        let cursor = parse_link_header(header, 3, 30);
        assert_eq!(cursor.next_page, Some(4));
    }

    #[test]
    fn test_next_and_prev() {
        let header = r#"<https://x/api/v2/tickets?page=3>; rel="next", <https://x/api/v2/tickets?page=1>; rel="prev""#;
        let cursor = parse_link_header(header, 2, 30);
        assert_eq!(
            cursor,
            PaginationCursor {
                page: 2,
                per_page: 30,
                next_page: Some(3),
                prev_page: Some(1),
            }
        );
    }

    #[test]
    fn test_next_only_leaves_prev_absent() {
        let header = r#"<https://x/api/v2/tickets?page=2>; rel="next""#;
        let cursor = parse_link_header(header, 1, 30);
        assert_eq!(cursor.next_page, Some(2));
        assert_eq!(cursor.prev_page, None);
        assert!(cursor.has_next());
    }

    #[test]
    fn test_page_is_found_among_other_params() {
        let header =
            r#"<https://x/api/v2/contacts?per_page=50&page=4&email=a%40b.c>; rel="next""#;
        let cursor = parse_link_header(header, 3, 50);
        assert_eq!(cursor.next_page, Some(4));
    }

    #[test]
    fn test_relative_url_and_unquoted_rel() {
        let header = "</api/v2/tickets?page=5>; rel=next";
        let cursor = parse_link_header(header, 4, 30);
        assert_eq!(cursor.next_page, Some(5));
    }

    #[test]
    fn test_garbage_is_ignored() {
        let cursor = parse_link_header("not a link header", 1, 30);
        assert_eq!(cursor, PaginationCursor::new(1, 30));

        let cursor = parse_link_header(r#"<https://x/api/v2/tickets?page=abc>; rel="next""#, 1, 30);
        assert_eq!(cursor.next_page, None);
    }

    #[test]
    fn test_empty_header() {
        let cursor = parse_link_header("", 1, 10);
        assert!(!cursor.has_next());
        assert_eq!(cursor.prev_page, None);
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(None), 1);
        assert_eq!(clamp_page(Some(0)), 1);
        assert_eq!(clamp_page(Some(-4)), 1);
        assert_eq!(clamp_page(Some(7)), 7);
    }

    #[test]
    fn test_clamp_per_page() {
        assert_eq!(clamp_per_page(None), 30);
        assert_eq!(clamp_per_page(Some(0)), 1);
        assert_eq!(clamp_per_page(Some(-10)), 1);
        assert_eq!(clamp_per_page(Some(250)), 100);
        assert_eq!(clamp_per_page(Some(50)), 50);
    }

    #[test]
    fn test_clamp_search_page() {
        assert_eq!(clamp_search_page(Some(0)), 1);
        assert_eq!(clamp_search_page(Some(11)), 10);
    }

    #[test]
    fn test_cursor_serialization_skips_absent_pages() {
        let json = serde_json::to_value(PaginationCursor::new(1, 30)).unwrap();
        assert_eq!(json, serde_json::json!({"page": 1, "per_page": 30}));
    }
}
