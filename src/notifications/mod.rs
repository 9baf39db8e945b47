//! The notification loop component: configuration, state machine, and
//! default rendering.
//!
//! This is the crate's main module. A rendering caller builds an [`Args`]
//! configuration and a [`Host`] of collaborators, constructs a [`Model`]
//! (which fetches one page synchronously), and then drives the template-loop
//! protocol:
//!
//! ```rust
//! use notification_loop::notifications::{Args, Host, Model};
//! use notification_loop::pagination::StyledLinkRenderer;
//! use notification_loop::provider::MemoryProvider;
//! use notification_loop::record::NotificationRecord;
//!
//! let provider = MemoryProvider::from_records(1, vec![
//!     NotificationRecord::new(1, "messages", "new_message", "2024-05-01 12:00:00"),
//! ]);
//! let renderer = StyledLinkRenderer::new();
//! let host = Host::new(&provider, &renderer);
//! let mut model = Model::new(&Args::new().with_user_id(1), &host);
//!
//! if model.has_items() {
//!     while model.continue_loop() {
//!         model.enter_next();
//!         println!(
//!             "{}: {} ({})",
//!             model.component_name().unwrap(),
//!             model.component_action().unwrap(),
//!             model.date_notified().unwrap(),
//!         );
//!     }
//! }
//! println!("{}", model.pagination_count());
//! println!("{}", model.pagination_links());
//! ```
//!
//! Each model serves exactly one render pass in one execution context; there
//! is no global "current loop" and no shared mutable state across requests.

/// Loop configuration with screen-conventional defaults.
pub mod config;

/// The loop state machine, its collaborator context, and accessors.
pub mod model;

/// Default per-record line rendering for hosts without templates.
pub mod render;

pub use config::Args;
pub use model::{Host, Model};
pub use render::{DefaultRecordRenderer, RecordStyles};
