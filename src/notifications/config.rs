//! Loop configuration.

/// Configuration for one notification loop.
///
/// Defaults match the conventional notifications screen: the unread tab,
/// page 1, 25 records per page, no item cap, no search, and `npage` as the
/// pagination query parameter.
///
/// Note that `page` and `per_page` are defaults only: when the injected
/// request carries overrides, the request wins (see
/// [`Model::new`](crate::notifications::Model::new)).
///
/// # Examples
///
/// ```rust
/// use notification_loop::notifications::Args;
///
/// let args = Args::new()
///     .with_user_id(7)
///     .with_unread_only(false)
///     .with_per_page(10)
///     .with_base_url("/members/me/notifications");
///
/// assert_eq!(args.user_id, 7);
/// assert_eq!(args.per_page, 10);
/// assert_eq!(args.page, 1);
/// assert_eq!(args.page_arg, "npage");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    /// User whose notifications the loop displays.
    pub user_id: u64,
    /// Limit the query to unread notifications (true) or read ones (false).
    pub unread_only: bool,
    /// Default 1-indexed page number, overridable by the request.
    pub page: usize,
    /// Default page size, overridable by the request.
    pub per_page: usize,
    /// Optional cap on how many fetched records the loop will iterate.
    pub max: Option<usize>,
    /// Search terms matched against component name and action. May carry
    /// transport escaping; it is unescaped before the fetch.
    pub search_terms: String,
    /// Request query parameter carrying the page-number override.
    pub page_arg: String,
    /// Base URL the pagination links are built on.
    pub base_url: String,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            user_id: 0,
            unread_only: true,
            page: 1,
            per_page: 25,
            max: None,
            search_terms: String::new(),
            page_arg: "npage".to_string(),
            base_url: String::new(),
        }
    }
}

impl Args {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the user whose notifications to display (builder pattern).
    pub fn with_user_id(mut self, user_id: u64) -> Self {
        self.user_id = user_id;
        self
    }

    /// Selects the unread (true) or read (false) tab (builder pattern).
    pub fn with_unread_only(mut self, unread_only: bool) -> Self {
        self.unread_only = unread_only;
        self
    }

    /// Sets the default page number (builder pattern). Clamped to at least 1.
    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page.max(1);
        self
    }

    /// Sets the default page size (builder pattern). Clamped to at least 1.
    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.per_page = per_page.max(1);
        self
    }

    /// Caps how many fetched records the loop will iterate (builder pattern).
    ///
    /// The cap bounds iteration only; the total count reported by the
    /// provider is displayed unchanged.
    pub fn with_max(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }

    /// Sets the search terms (builder pattern).
    pub fn with_search_terms(mut self, search_terms: &str) -> Self {
        self.search_terms = search_terms.to_string();
        self
    }

    /// Sets the request parameter used for the page-number override
    /// (builder pattern).
    pub fn with_page_arg(mut self, page_arg: &str) -> Self {
        self.page_arg = page_arg.to_string();
        self
    }

    /// Sets the base URL pagination links are built on (builder pattern).
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_notifications_screen() {
        let args = Args::default();
        assert_eq!(args.user_id, 0);
        assert!(args.unread_only);
        assert_eq!(args.page, 1);
        assert_eq!(args.per_page, 25);
        assert_eq!(args.max, None);
        assert_eq!(args.search_terms, "");
        assert_eq!(args.page_arg, "npage");
        assert_eq!(args.base_url, "");
    }

    #[test]
    fn page_values_are_clamped_to_one() {
        let args = Args::new().with_page(0).with_per_page(0);
        assert_eq!(args.page, 1);
        assert_eq!(args.per_page, 1);
    }
}
