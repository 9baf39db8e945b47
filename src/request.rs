//! Request-parameter lookup for pagination overrides.
//!
//! The loop resolves its page number and page size from the current request
//! before falling back to configured defaults: request-provided values always
//! win. The page-number key is configurable per loop
//! ([`Args::with_page_arg`](crate::notifications::Args::with_page_arg)); the
//! page-size key is fixed at [`PER_PAGE_ARG`].

use std::collections::HashMap;

/// Fixed request key for the page-size override.
pub const PER_PAGE_ARG: &str = "num";

/// Read-only key/value view of the current request's query parameters.
///
/// # Examples
///
/// ```rust
/// use notification_loop::request::RequestParams;
/// use std::collections::HashMap;
///
/// let mut query = HashMap::new();
/// query.insert("npage".to_string(), "3".to_string());
///
/// assert_eq!(query.get_param("npage"), Some("3".to_string()));
/// assert_eq!(query.get_param("num"), None);
/// ```
pub trait RequestParams {
    /// Returns the raw value for `key`, if the request carries it.
    fn get_param(&self, key: &str) -> Option<String>;
}

/// An empty request. The default when no request context is injected.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRequest;

impl RequestParams for NoRequest {
    fn get_param(&self, _key: &str) -> Option<String> {
        None
    }
}

impl RequestParams for HashMap<String, String> {
    fn get_param(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Parses a request parameter as a page/size number. Non-numeric values are
/// treated as absent.
pub(crate) fn usize_param(params: &dyn RequestParams, key: &str) -> Option<usize> {
    params.get_param(key).and_then(|v| v.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_lookup_and_parse() {
        let mut query = HashMap::new();
        query.insert("npage".to_string(), " 4 ".to_string());
        query.insert("num".to_string(), "ten".to_string());

        assert_eq!(usize_param(&query, "npage"), Some(4));
        // Unparseable values fall back to the configured default.
        assert_eq!(usize_param(&query, "num"), None);
        assert_eq!(usize_param(&query, "missing"), None);
    }

    #[test]
    fn no_request_is_always_empty() {
        assert_eq!(NoRequest.get_param("npage"), None);
        assert_eq!(usize_param(&NoRequest, "num"), None);
    }
}
