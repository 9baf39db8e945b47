//! The data-provider seam and an in-memory reference provider.
//!
//! The loop fetches exactly one page of records at construction time through
//! the [`DataProvider`] trait. Real hosts back this with their storage layer;
//! [`MemoryProvider`] is a complete in-process implementation used by tests,
//! demos, and hosts that keep notifications in memory.
//!
//! A provider never fails: a query that matches nothing returns an empty page
//! with a total of zero.

use crate::record::NotificationRecord;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// One fetch request, as issued by the loop constructor.
#[derive(Debug, Clone)]
pub struct FetchArgs {
    /// User whose notifications are being listed.
    pub user_id: u64,
    /// When true, fetch unread notifications; when false, fetch read ones.
    pub unread_only: bool,
    /// 1-indexed page number to fetch.
    pub page: usize,
    /// Number of records per page.
    pub per_page: usize,
    /// Search terms matched against component name and action; empty means
    /// no search.
    pub search_terms: String,
}

/// One page of results plus the total match count across all pages.
#[derive(Debug, Clone, Default)]
pub struct NotificationPage {
    /// The records on the requested page, in provider order.
    pub records: Vec<NotificationRecord>,
    /// Total number of matching records across all pages.
    pub total: usize,
}

/// External data collaborator the loop fetches from.
///
/// # Examples
///
/// A fixed-page provider, the minimal useful implementation:
///
/// ```rust
/// use notification_loop::provider::{DataProvider, FetchArgs, NotificationPage};
/// use notification_loop::record::NotificationRecord;
///
/// struct OnePage(Vec<NotificationRecord>);
///
/// impl DataProvider for OnePage {
///     fn fetch(&self, _args: &FetchArgs) -> NotificationPage {
///         NotificationPage { records: self.0.clone(), total: self.0.len() }
///     }
/// }
/// ```
pub trait DataProvider {
    /// Returns the requested page of records and the total match count.
    ///
    /// Implementations must treat an out-of-range page as an empty page with
    /// the total still reported, never as an error.
    fn fetch(&self, args: &FetchArgs) -> NotificationPage;
}

/// In-memory provider keyed by owner user id.
///
/// Records are filtered by owner and unread state, fuzzy-matched against the
/// search terms, ordered newest first (ties broken by descending id), then
/// sliced to the requested page. The total reflects all matches, not just the
/// returned slice.
///
/// # Examples
///
/// ```rust
/// use notification_loop::provider::{DataProvider, FetchArgs, MemoryProvider};
/// use notification_loop::record::NotificationRecord;
///
/// let mut provider = MemoryProvider::new();
/// for n in 1..=30 {
///     provider.insert(
///         1,
///         NotificationRecord::new(n, "messages", "new_message", &format!("2024-05-{:02} 09:00:00", n)),
///     );
/// }
///
/// let page = provider.fetch(&FetchArgs {
///     user_id: 1,
///     unread_only: true,
///     page: 2,
///     per_page: 25,
///     search_terms: String::new(),
/// });
///
/// assert_eq!(page.total, 30);
/// assert_eq!(page.records.len(), 5);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryProvider {
    entries: Vec<(u64, NotificationRecord)>,
}

impl MemoryProvider {
    /// Creates an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a provider pre-loaded with records for a single user.
    pub fn from_records(user_id: u64, records: Vec<NotificationRecord>) -> Self {
        Self {
            entries: records.into_iter().map(|r| (user_id, r)).collect(),
        }
    }

    /// Adds a record owned by the given user.
    pub fn insert(&mut self, user_id: u64, record: NotificationRecord) {
        self.entries.push((user_id, record));
    }

    /// Returns the number of stored records across all users.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no records are stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl DataProvider for MemoryProvider {
    fn fetch(&self, args: &FetchArgs) -> NotificationPage {
        let matcher = SkimMatcherV2::default();

        let mut matched: Vec<&NotificationRecord> = self
            .entries
            .iter()
            .filter(|(owner, _)| *owner == args.user_id)
            .map(|(_, record)| record)
            .filter(|record| record.unread == args.unread_only)
            .filter(|record| {
                args.search_terms.is_empty()
                    || matcher
                        .fuzzy_match(&record.filter_value(), &args.search_terms)
                        .is_some()
            })
            .collect();

        matched.sort_by(|a, b| {
            b.date_notified
                .cmp(&a.date_notified)
                .then_with(|| b.id.cmp(&a.id))
        });

        let total = matched.len();
        let per_page = args.per_page.max(1);
        let start = (args.page.max(1) - 1) * per_page;
        let records = if start >= total {
            Vec::new()
        } else {
            let end = (start + per_page).min(total);
            matched[start..end].iter().map(|r| (*r).clone()).collect()
        };

        NotificationPage { records, total }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider_with(count: u64) -> MemoryProvider {
        let records = (1..=count)
            .map(|n| {
                NotificationRecord::new(
                    n,
                    "messages",
                    "new_message",
                    &format!("2024-03-{:02} 10:00:00", n),
                )
            })
            .collect();
        MemoryProvider::from_records(1, records)
    }

    fn args(page: usize, per_page: usize) -> FetchArgs {
        FetchArgs {
            user_id: 1,
            unread_only: true,
            page,
            per_page,
            search_terms: String::new(),
        }
    }

    #[test]
    fn pages_slice_newest_first() {
        let provider = provider_with(30);
        let page = provider.fetch(&args(1, 10));
        assert_eq!(page.total, 30);
        assert_eq!(page.records.len(), 10);
        // Newest record (highest date) comes first.
        assert_eq!(page.records[0].id, 30);
        assert_eq!(page.records[9].id, 21);

        let page3 = provider.fetch(&args(3, 10));
        assert_eq!(page3.records[0].id, 10);
        assert_eq!(page3.records[9].id, 1);
    }

    #[test]
    fn out_of_range_page_is_empty_with_total_intact() {
        let provider = provider_with(5);
        let page = provider.fetch(&args(4, 10));
        assert!(page.records.is_empty());
        assert_eq!(page.total, 5);
    }

    #[test]
    fn unread_flag_selects_tab() {
        let mut provider = MemoryProvider::new();
        provider.insert(1, NotificationRecord::new(1, "messages", "new_message", "2024-03-01 10:00:00"));
        provider.insert(
            1,
            NotificationRecord::new(2, "groups", "member_joined", "2024-03-02 10:00:00").with_unread(false),
        );

        let unread = provider.fetch(&args(1, 25));
        assert_eq!(unread.total, 1);
        assert_eq!(unread.records[0].id, 1);

        let read = provider.fetch(&FetchArgs { unread_only: false, ..args(1, 25) });
        assert_eq!(read.total, 1);
        assert_eq!(read.records[0].id, 2);
    }

    #[test]
    fn records_are_scoped_to_the_requested_user() {
        let mut provider = MemoryProvider::new();
        provider.insert(1, NotificationRecord::new(1, "messages", "new_message", "2024-03-01 10:00:00"));
        provider.insert(2, NotificationRecord::new(2, "messages", "new_message", "2024-03-01 10:00:00"));

        let page = provider.fetch(&args(1, 25));
        assert_eq!(page.total, 1);
        assert_eq!(page.records[0].id, 1);
    }

    #[test]
    fn search_terms_fuzzy_match_name_and_action() {
        let mut provider = MemoryProvider::new();
        provider.insert(1, NotificationRecord::new(1, "messages", "new_message", "2024-03-01 10:00:00"));
        provider.insert(1, NotificationRecord::new(2, "groups", "member_joined", "2024-03-02 10:00:00"));

        let page = provider.fetch(&FetchArgs {
            search_terms: "group".to_string(),
            ..args(1, 25)
        });
        assert_eq!(page.total, 1);
        assert_eq!(page.records[0].id, 2);

        let none = provider.fetch(&FetchArgs {
            search_terms: "zzzz".to_string(),
            ..args(1, 25)
        });
        assert_eq!(none.total, 0);
        assert!(none.records.is_empty());
    }
}
