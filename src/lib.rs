#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/notification-loop/")]

//! # notification-loop
//!
//! A display-layer template loop for a user's notification list: fetch one
//! page of notifications from a pluggable data provider, iterate it
//! forward-only while a rendering caller emits markup per record, and expose
//! pagination metadata and a pre-rendered pagination link strip.
//!
//! ## Overview
//!
//! The crate is presentation glue between two parties it deliberately knows
//! nothing about: a storage layer that answers paged queries, and a host that
//! renders records and may observe or transform what the loop hands out. All
//! of those seams are traits:
//!
//! - [`provider::DataProvider`] — answers one paged fetch per loop
//! - [`pagination::PaginationRenderer`] — turns page arithmetic into markup
//! - [`hooks::HookDispatcher`] — observes loop lifecycle events
//! - [`hooks::ValueFilter`] — transforms values at the accessor boundary
//! - [`request::RequestParams`] — supplies request-level paging overrides
//!
//! Working defaults ship for all of them: [`provider::MemoryProvider`],
//! [`pagination::StyledLinkRenderer`], and no-op hook/filter/request stubs.
//!
//! ## The loop protocol
//!
//! ```rust
//! use notification_loop::prelude::*;
//!
//! let provider = MemoryProvider::from_records(7, vec![
//!     NotificationRecord::new(1, "messages", "new_message", "2024-05-01 12:00:00"),
//!     NotificationRecord::new(2, "groups", "member_joined", "2024-05-02 08:30:00"),
//! ]);
//! let renderer = StyledLinkRenderer::new();
//! let host = Host::new(&provider, &renderer);
//!
//! let mut model = NotificationLoop::new(&Args::new().with_user_id(7), &host);
//!
//! assert!(model.has_items());
//! while model.continue_loop() {
//!     model.enter_next();
//!     let line = format!(
//!         "#{} {}: {}",
//!         model.id().unwrap(),
//!         model.component_name().unwrap(),
//!         model.component_action().unwrap(),
//!     );
//!     assert!(!line.is_empty());
//! }
//! assert_eq!(model.pagination_count(), "Viewing 1 to 2 (of 2 notifications)");
//! ```
//!
//! The loop is restartable: running off the end emits the loop-end event and
//! rewinds the cursor, so the same model can serve another pass.
//!
//! ## Pagination
//!
//! The page number and page size come from the request when present
//! (`npage`/`num` by default) and from [`notifications::Args`] otherwise.
//! When there is anything to paginate, the loop pre-renders a windowed link
//! strip such as `← 1 … 4 5 6 … 12 →` through the injected renderer; page
//! URLs are built from a base template carrying a `%#%` placeholder.
//!
//! ## What this crate is not
//!
//! There is no storage engine, no request routing, no templating, and no
//! error taxonomy: an empty result page is a valid empty state, and misuse
//! of the protocol (advancing past the end) simply leaves no current record.

pub mod hooks;
pub mod notifications;
pub mod pagination;
pub mod provider;
pub mod record;
pub mod request;

pub use hooks::{HookDispatcher, IdentityFilter, NullDispatcher, RecordingDispatcher, ValueFilter};
pub use notifications::{Args, DefaultRecordRenderer, Host, Model as NotificationLoop, RecordStyles};
pub use pagination::{LinkStyles, PaginationRenderer, StyledLinkRenderer};
pub use provider::{DataProvider, FetchArgs, MemoryProvider, NotificationPage};
pub use record::NotificationRecord;
pub use request::{NoRequest, RequestParams};

/// Prelude module for convenient imports.
///
/// Re-exports the types most hosts need: the loop itself, its configuration
/// and collaborator context, the bundled collaborator implementations, and
/// the seam traits.
///
/// # Usage
///
/// ```rust
/// use notification_loop::prelude::*;
/// ```
pub mod prelude {
    pub use crate::hooks::{
        HookDispatcher, IdentityFilter, NullDispatcher, RecordingDispatcher, ValueFilter,
    };
    pub use crate::notifications::{
        Args, DefaultRecordRenderer, Host, Model as NotificationLoop, RecordStyles,
    };
    pub use crate::pagination::{LinkStyles, PaginationRenderer, StyledLinkRenderer};
    pub use crate::provider::{DataProvider, FetchArgs, MemoryProvider, NotificationPage};
    pub use crate::record::NotificationRecord;
    pub use crate::request::{NoRequest, RequestParams};
}
