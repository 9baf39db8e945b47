//! Hook and filter seams for host-level customization.
//!
//! The loop never calls into a host framework directly. Instead it emits
//! named events through a [`HookDispatcher`] and passes every accessor value
//! through a [`ValueFilter`]. Hosts that want to observe loop lifecycle or
//! substitute values implement these traits; everyone else gets the no-op
//! defaults.
//!
//! Event and filter names are published as constants so hosts can match on
//! them without magic strings.

use std::cell::RefCell;

/// Event emitted when the first record of a pass is consumed.
pub const LOOP_START: &str = "notifications_loop_start";
/// Event emitted when a pass runs off the end of the page.
pub const LOOP_END: &str = "notifications_loop_end";

/// Filter applied to the current record's `id`.
pub const THE_ID: &str = "the_notification_id";
/// Filter applied to the current record's `item_id`.
pub const THE_ITEM_ID: &str = "the_notification_item_id";
/// Filter applied to the current record's `secondary_item_id`.
pub const THE_SECONDARY_ITEM_ID: &str = "the_notification_secondary_item_id";
/// Filter applied to the current record's `component_name`.
pub const THE_COMPONENT_NAME: &str = "the_notification_component_name";
/// Filter applied to the current record's `component_action`.
pub const THE_COMPONENT_ACTION: &str = "the_notification_component_action";
/// Filter applied to the current record's `date_notified`.
pub const THE_DATE_NOTIFIED: &str = "the_notification_date_notified";
/// Filter applied to the "Viewing X to Y" pagination summary.
pub const PAGINATION_COUNT: &str = "notifications_pagination_count";
/// Filter applied to the pre-rendered pagination link strip.
pub const PAGINATION_LINKS: &str = "notifications_pagination_links";

/// Fire-and-forget observer for loop lifecycle events.
///
/// The loop emits [`LOOP_START`] and [`LOOP_END`] through this trait and
/// never consumes a return value.
///
/// # Examples
///
/// ```rust
/// use notification_loop::hooks::HookDispatcher;
///
/// struct Printer;
///
/// impl HookDispatcher for Printer {
///     fn emit(&self, event: &str) {
///         println!("event: {event}");
///     }
/// }
/// ```
pub trait HookDispatcher {
    /// Delivers a named event to the host. Must not fail.
    fn emit(&self, event: &str);
}

/// A dispatcher that swallows every event. The default.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullDispatcher;

impl HookDispatcher for NullDispatcher {
    fn emit(&self, _event: &str) {}
}

/// A dispatcher that records every event in order.
///
/// Useful for hosts that batch event handling, and for asserting on loop
/// lifecycle in tests.
///
/// # Examples
///
/// ```rust
/// use notification_loop::hooks::{HookDispatcher, RecordingDispatcher, LOOP_END};
///
/// let dispatcher = RecordingDispatcher::new();
/// dispatcher.emit(LOOP_END);
///
/// assert_eq!(dispatcher.events(), vec![LOOP_END.to_string()]);
/// assert_eq!(dispatcher.count(LOOP_END), 1);
/// ```
#[derive(Debug, Default)]
pub struct RecordingDispatcher {
    events: RefCell<Vec<String>>,
}

impl RecordingDispatcher {
    /// Creates an empty recording dispatcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the events emitted so far, in emission order.
    pub fn events(&self) -> Vec<String> {
        self.events.borrow().clone()
    }

    /// Returns how many times the given event has been emitted.
    pub fn count(&self, event: &str) -> usize {
        self.events.borrow().iter().filter(|e| e.as_str() == event).count()
    }
}

impl HookDispatcher for RecordingDispatcher {
    fn emit(&self, event: &str) {
        self.events.borrow_mut().push(event.to_string());
    }
}

/// Value-transform strategy invoked uniformly at the accessor boundary.
///
/// Every value a rendering caller reads from the loop passes through here
/// first, keyed by the filter-name constants in this module. Both methods are
/// identity by default, so implementors override only what they care about.
///
/// # Examples
///
/// ```rust
/// use notification_loop::hooks::{ValueFilter, THE_COMPONENT_NAME};
///
/// /// Renders component names in title case.
/// struct TitleCase;
///
/// impl ValueFilter for TitleCase {
///     fn filter_text(&self, hook: &str, value: String) -> String {
///         if hook != THE_COMPONENT_NAME {
///             return value;
///         }
///         let mut chars = value.chars();
///         match chars.next() {
///             Some(first) => first.to_uppercase().chain(chars).collect(),
///             None => String::new(),
///         }
///     }
/// }
///
/// let filter = TitleCase;
/// assert_eq!(
///     filter.filter_text(THE_COMPONENT_NAME, "messages".to_string()),
///     "Messages"
/// );
/// ```
pub trait ValueFilter {
    /// Transforms a numeric identifier before it is returned to the caller.
    fn filter_id(&self, hook: &str, value: u64) -> u64 {
        let _ = hook;
        value
    }

    /// Transforms a text value before it is returned to the caller.
    fn filter_text(&self, hook: &str, value: String) -> String {
        let _ = hook;
        value
    }
}

/// The identity filter. The default when a host installs nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityFilter;

impl ValueFilter for IdentityFilter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_dispatcher_keeps_order_and_counts() {
        let dispatcher = RecordingDispatcher::new();
        dispatcher.emit(LOOP_START);
        dispatcher.emit(LOOP_END);
        dispatcher.emit(LOOP_START);

        assert_eq!(
            dispatcher.events(),
            vec![LOOP_START.to_string(), LOOP_END.to_string(), LOOP_START.to_string()]
        );
        assert_eq!(dispatcher.count(LOOP_START), 2);
        assert_eq!(dispatcher.count(LOOP_END), 1);
        assert_eq!(dispatcher.count("unrelated"), 0);
    }

    #[test]
    fn identity_filter_passes_values_through() {
        let filter = IdentityFilter;
        assert_eq!(filter.filter_id(THE_ID, 41), 41);
        assert_eq!(filter.filter_text(THE_COMPONENT_NAME, "messages".to_string()), "messages");
    }
}
