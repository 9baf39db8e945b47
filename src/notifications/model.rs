//! The notification loop state machine.
//!
//! [`Model`] wraps one fetched page of notifications behind a stateful,
//! forward-only iterator with pagination metadata, driven by a rendering
//! caller through the template-loop protocol:
//!
//! ```text
//! if model.has_items() {
//!     while model.continue_loop() {
//!         model.enter_next();
//!         // read per-field accessors, render one record
//!     }
//! }
//! ```
//!
//! The cursor starts at −1 (before the first element) and moves through
//! `0..count-1`; running off the end emits the loop-end event and rewinds to
//! −1, so the same model can be iterated again. One model serves one render
//! pass in one execution context; there is no shared state between loops.

use crate::hooks::{
    self, HookDispatcher, IdentityFilter, NullDispatcher, ValueFilter,
};
use crate::pagination::{self, PaginationRenderer};
use crate::provider::{DataProvider, FetchArgs};
use crate::record::{unescape_transport, NotificationRecord};
use crate::request::{usize_param, NoRequest, RequestParams, PER_PAGE_ARG};

use super::config::Args;

static NULL_DISPATCHER: NullDispatcher = NullDispatcher;
static IDENTITY_FILTER: IdentityFilter = IdentityFilter;
static NO_REQUEST: NoRequest = NoRequest;

/// The collaborator context a loop is constructed against.
///
/// This replaces any notion of process-wide state: each render pass builds a
/// `Host` from whatever collaborators it has and passes it to
/// [`Model::new`]. Only the data provider and pagination renderer are
/// required; the dispatcher, value filter, and request default to no-ops.
///
/// # Examples
///
/// ```rust
/// use notification_loop::notifications::Host;
/// use notification_loop::provider::MemoryProvider;
/// use notification_loop::pagination::StyledLinkRenderer;
/// use notification_loop::hooks::RecordingDispatcher;
///
/// let provider = MemoryProvider::new();
/// let renderer = StyledLinkRenderer::new();
/// let dispatcher = RecordingDispatcher::new();
///
/// let host = Host::new(&provider, &renderer).with_dispatcher(&dispatcher);
/// ```
#[derive(Clone, Copy)]
pub struct Host<'a> {
    /// Data provider the loop fetches its page from.
    pub provider: &'a dyn DataProvider,
    /// Renderer for the pagination link strip.
    pub renderer: &'a dyn PaginationRenderer,
    /// Observer for loop lifecycle events.
    pub dispatcher: &'a dyn HookDispatcher,
    /// Value transform applied at the accessor boundary.
    pub filter: &'a dyn ValueFilter,
    /// Request parameters consulted for pagination overrides.
    pub request: &'a dyn RequestParams,
}

impl<'a> Host<'a> {
    /// Creates a host with the given provider and renderer and no-op
    /// defaults for everything else.
    pub fn new(provider: &'a dyn DataProvider, renderer: &'a dyn PaginationRenderer) -> Self {
        Self {
            provider,
            renderer,
            dispatcher: &NULL_DISPATCHER,
            filter: &IDENTITY_FILTER,
            request: &NO_REQUEST,
        }
    }

    /// Installs a lifecycle event observer (builder pattern).
    pub fn with_dispatcher(mut self, dispatcher: &'a dyn HookDispatcher) -> Self {
        self.dispatcher = dispatcher;
        self
    }

    /// Installs a value filter (builder pattern).
    pub fn with_filter(mut self, filter: &'a dyn ValueFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Installs the current request's parameters (builder pattern).
    pub fn with_request(mut self, request: &'a dyn RequestParams) -> Self {
        self.request = request;
        self
    }
}

impl std::fmt::Debug for Host<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Host").finish_non_exhaustive()
    }
}

/// One page of notifications behind a template-loop iterator.
///
/// Constructed once per render pass, populated synchronously from the data
/// provider, iterated by a rendering caller, and discarded. See the
/// [module docs](self) for the protocol.
///
/// # Examples
///
/// ```rust
/// use notification_loop::notifications::{Args, Host, Model};
/// use notification_loop::pagination::StyledLinkRenderer;
/// use notification_loop::provider::MemoryProvider;
/// use notification_loop::record::NotificationRecord;
///
/// let records = (1..=3)
///     .map(|n| NotificationRecord::new(n, "messages", "new_message",
///                                      &format!("2024-05-0{n} 12:00:00")))
///     .collect();
/// let provider = MemoryProvider::from_records(1, records);
/// let renderer = StyledLinkRenderer::new();
/// let host = Host::new(&provider, &renderer);
///
/// let mut model = Model::new(&Args::new().with_user_id(1), &host);
/// assert!(model.has_items());
///
/// let mut seen = Vec::new();
/// while model.continue_loop() {
///     model.enter_next();
///     seen.push(model.id().unwrap());
/// }
/// assert_eq!(seen.len(), 3);
/// ```
pub struct Model<'a> {
    records: Vec<NotificationRecord>,
    current: Option<NotificationRecord>,
    cursor: isize,
    count: usize,
    total_count: usize,
    in_loop: bool,

    user_id: u64,
    unread_only: bool,
    page: usize,
    per_page: usize,
    page_arg: String,
    search_terms: String,
    pag_links: String,

    dispatcher: &'a dyn HookDispatcher,
    filter: &'a dyn ValueFilter,
}

impl<'a> Model<'a> {
    /// Builds the loop: resolves paging, fetches one page, and pre-renders
    /// the pagination links.
    ///
    /// Request-provided overrides take precedence over the configured
    /// defaults: the page number is read from the request under
    /// `args.page_arg` and the page size under `num`. A page override of 0
    /// is clamped to 1.
    ///
    /// An empty result page is a valid empty state, not an error: both the
    /// page count and the total collapse to zero and no pagination markup is
    /// produced.
    pub fn new(args: &Args, host: &Host<'a>) -> Self {
        let page = usize_param(host.request, &args.page_arg)
            .unwrap_or(args.page)
            .max(1);
        let per_page = usize_param(host.request, PER_PAGE_ARG).unwrap_or(args.per_page);
        let search_terms = unescape_transport(&args.search_terms);

        let fetched = host.provider.fetch(&FetchArgs {
            user_id: args.user_id,
            unread_only: args.unread_only,
            page,
            per_page,
            search_terms: search_terms.clone(),
        });

        let (count, total_count) = if fetched.records.is_empty() {
            (0, 0)
        } else {
            let count = match args.max {
                Some(max) => max.min(fetched.records.len()),
                None => fetched.records.len(),
            };
            (count, fetched.total)
        };

        let pag_links = if total_count > 0 && per_page > 0 {
            host.renderer.render_links(
                &pagination::add_page_arg(&args.base_url, &args.page_arg),
                pagination::total_pages(total_count, per_page),
                page,
                1,
            )
        } else {
            String::new()
        };

        Self {
            records: fetched.records,
            current: None,
            cursor: -1,
            count,
            total_count,
            in_loop: false,
            user_id: args.user_id,
            unread_only: args.unread_only,
            page,
            per_page,
            page_arg: args.page_arg.clone(),
            search_terms,
            pag_links,
            dispatcher: host.dispatcher,
            filter: host.filter,
        }
    }

    /// Returns true if the loop has any records to iterate.
    ///
    /// This respects the `max` cap: a non-empty fetch capped to zero has no
    /// items.
    pub fn has_items(&self) -> bool {
        self.count > 0
    }

    /// Loop-continuation predicate; the `while` condition of the protocol.
    ///
    /// Returns true while records remain. On the call that runs off the end
    /// it emits [`hooks::LOOP_END`], rewinds the cursor, and returns false,
    /// which makes the loop restartable within the same model. Every
    /// false-returning path clears the in-loop flag.
    pub fn continue_loop(&mut self) -> bool {
        let next = self.cursor + 1;
        if next < self.count as isize {
            return true;
        }
        if next == self.count as isize {
            self.dispatcher.emit(hooks::LOOP_END);
            self.rewind();
        }
        self.in_loop = false;
        false
    }

    /// Per-iteration entry point: marks the loop active and advances to the
    /// next record.
    ///
    /// Emits [`hooks::LOOP_START`] when the first element of a pass has just
    /// been consumed. Callers invoke this once per iteration, after
    /// [`continue_loop`](Self::continue_loop) has returned true and before
    /// reading the per-field accessors.
    pub fn enter_next(&mut self) {
        self.in_loop = true;
        self.advance();
        if self.cursor == 0 {
            self.dispatcher.emit(hooks::LOOP_START);
        }
    }

    /// Advances the cursor and loads the record at the new position as the
    /// current record.
    ///
    /// Bounded in practice by [`continue_loop`](Self::continue_loop);
    /// advancing past the end leaves no current record.
    pub fn advance(&mut self) -> Option<&NotificationRecord> {
        self.cursor += 1;
        self.current = usize::try_from(self.cursor)
            .ok()
            .and_then(|i| self.records.get(i))
            .cloned();
        self.current.as_ref()
    }

    /// Rewinds the cursor to before the first element.
    ///
    /// When the page is non-empty the current record is pre-seeded to the
    /// first element; the cursor itself stays at −1 until the next advance.
    pub fn rewind(&mut self) {
        self.cursor = -1;
        if self.count > 0 {
            self.current = Some(self.records[0].clone());
        }
    }

    /// Returns true while a rendering caller is between loop entry and the
    /// loop-finished signal.
    pub fn in_loop(&self) -> bool {
        self.in_loop
    }

    /// Number of records the loop will iterate on this page (after the
    /// `max` cap).
    pub fn count(&self) -> usize {
        self.count
    }

    /// Total matching records across all pages, as reported by the provider.
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// The 1-indexed page this loop displays.
    pub fn page(&self) -> usize {
        self.page
    }

    /// The page size in effect (after any request override).
    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// The request parameter used for page-number overrides.
    pub fn page_arg(&self) -> &str {
        &self.page_arg
    }

    /// The search terms in effect, already unescaped.
    pub fn search_terms(&self) -> &str {
        &self.search_terms
    }

    /// The user whose notifications are displayed.
    pub fn user_id(&self) -> u64 {
        self.user_id
    }

    /// Whether the loop shows the unread tab.
    pub fn unread_only(&self) -> bool {
        self.unread_only
    }

    /// The cursor position: −1 before the first element, then the index of
    /// the current record.
    pub fn cursor(&self) -> isize {
        self.cursor
    }

    /// The record currently being iterated, unfiltered.
    ///
    /// Rendering callers normally use the per-field accessors instead, which
    /// apply the host's value filter and transport unescaping.
    pub fn current(&self) -> Option<&NotificationRecord> {
        self.current.as_ref()
    }

    /// Id of the current record, passed through the value filter.
    pub fn id(&self) -> Option<u64> {
        self.current
            .as_ref()
            .map(|n| self.filter.filter_id(hooks::THE_ID, n.id))
    }

    /// Primary item id of the current record, passed through the value
    /// filter.
    pub fn item_id(&self) -> Option<u64> {
        self.current
            .as_ref()
            .map(|n| self.filter.filter_id(hooks::THE_ITEM_ID, n.item_id))
    }

    /// Secondary item id of the current record, passed through the value
    /// filter.
    pub fn secondary_item_id(&self) -> Option<u64> {
        self.current.as_ref().map(|n| {
            self.filter
                .filter_id(hooks::THE_SECONDARY_ITEM_ID, n.secondary_item_id)
        })
    }

    /// Component name of the current record, unescaped and filtered.
    pub fn component_name(&self) -> Option<String> {
        self.current.as_ref().map(|n| {
            self.filter.filter_text(
                hooks::THE_COMPONENT_NAME,
                unescape_transport(&n.component_name),
            )
        })
    }

    /// Component action of the current record, unescaped and filtered.
    pub fn component_action(&self) -> Option<String> {
        self.current.as_ref().map(|n| {
            self.filter.filter_text(
                hooks::THE_COMPONENT_ACTION,
                unescape_transport(&n.component_action),
            )
        })
    }

    /// Timestamp of the current record, unescaped and filtered.
    pub fn date_notified(&self) -> Option<String> {
        self.current.as_ref().map(|n| {
            self.filter.filter_text(
                hooks::THE_DATE_NOTIFIED,
                unescape_transport(&n.date_notified),
            )
        })
    }

    /// Human-readable position summary for the current page, filtered.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use notification_loop::notifications::{Args, Host, Model};
    /// use notification_loop::pagination::StyledLinkRenderer;
    /// use notification_loop::provider::MemoryProvider;
    /// use notification_loop::record::NotificationRecord;
    ///
    /// let records = (1..=60)
    ///     .map(|n| NotificationRecord::new(n, "messages", "new_message",
    ///                                      &format!("2024-05-01 10:{:02}:00", n % 60)))
    ///     .collect();
    /// let provider = MemoryProvider::from_records(1, records);
    /// let renderer = StyledLinkRenderer::new();
    /// let host = Host::new(&provider, &renderer);
    ///
    /// let model = Model::new(&Args::new().with_user_id(1).with_page(2), &host);
    /// assert_eq!(model.pagination_count(), "Viewing 26 to 50 (of 60 notifications)");
    /// ```
    pub fn pagination_count(&self) -> String {
        let (from, to) = if self.total_count == 0 {
            (0, 0)
        } else {
            let from = (self.page - 1) * self.per_page + 1;
            let to = (from + self.per_page - 1).min(self.total_count);
            (from, to)
        };
        let noun = if self.total_count == 1 {
            "notification"
        } else {
            "notifications"
        };
        let text = format!(
            "Viewing {} to {} (of {} {})",
            pagination::format_number(from),
            pagination::format_number(to),
            pagination::format_number(self.total_count),
            noun
        );
        self.filter.filter_text(hooks::PAGINATION_COUNT, text)
    }

    /// The pre-rendered pagination link strip, filtered.
    ///
    /// Empty when there is nothing to paginate.
    pub fn pagination_links(&self) -> String {
        self.filter
            .filter_text(hooks::PAGINATION_LINKS, self.pag_links.clone())
    }
}

impl std::fmt::Debug for Model<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("cursor", &self.cursor)
            .field("count", &self.count)
            .field("total_count", &self.total_count)
            .field("page", &self.page)
            .field("per_page", &self.per_page)
            .field("in_loop", &self.in_loop)
            .finish_non_exhaustive()
    }
}
