//! Tool input parameter structs for MCP tools.
//!
//! Each submodule holds the argument records of one resource family,
//! with JSON Schema derivation for MCP tool discovery. Records that carry
//! an identifier next to a mutable field set keep the two apart, so the
//! identifier is never sent inside a request body.

mod contacts;
mod fields;
mod solutions;
mod tickets;

pub use contacts::*;
pub use fields::*;
pub use solutions::*;
pub use tickets::*;

/// Trims an optional string, turning blank values into `None`.
pub(crate) fn trim_option(s: &Option<String>) -> Option<String> {
    s.as_ref()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_option_trims_whitespace() {
        let s = Some("  hello  ".to_string());
        assert_eq!(trim_option(&s), Some("hello".to_string()));
    }

    #[test]
    fn test_trim_option_filters_empty() {
        let s = Some("   ".to_string());
        assert_eq!(trim_option(&s), None);
    }

    #[test]
    fn test_trim_option_none_stays_none() {
        let s: Option<String> = None;
        assert_eq!(trim_option(&s), None);
    }
}
