//! The notification record type and transport unescaping.
//!
//! A [`NotificationRecord`] is the unit the loop iterates over. The loop treats
//! it as opaque data: fields are fetched from a [`DataProvider`](crate::provider::DataProvider)
//! and handed back to rendering callers through the per-field accessors on
//! [`Model`](crate::notifications::Model).
//!
//! String fields may arrive with backslash escaping added by the storage
//! transport. [`unescape_transport`] removes it; the loop applies it at the
//! accessor boundary so callers always see clean values.

use std::fmt::Display;

/// A single notification as fetched for the current page.
///
/// Identifier fields (`id`, `item_id`, `secondary_item_id`) locate the
/// notification and the content it points at. `component_name` and
/// `component_action` identify which part of the host platform raised it and
/// why, and are what search terms are matched against. `date_notified` is the
/// transport timestamp string, kept sortable as-is (newest-first ordering is a
/// plain string comparison for the usual `YYYY-MM-DD HH:MM:SS` format).
///
/// # Examples
///
/// ```rust
/// use notification_loop::record::NotificationRecord;
///
/// let record = NotificationRecord::new(7, "messages", "new_message", "2024-05-01 12:00:00")
///     .with_item_ids(42, 0)
///     .with_unread(true);
///
/// assert_eq!(record.id, 7);
/// assert_eq!(record.item_id, 42);
/// assert!(record.unread);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NotificationRecord {
    /// Unique identifier of the notification itself.
    pub id: u64,
    /// Identifier of the primary item this notification refers to.
    pub item_id: u64,
    /// Identifier of the secondary item, when the action involves two objects.
    pub secondary_item_id: u64,
    /// Name of the host component that raised the notification.
    pub component_name: String,
    /// Action within the component that the notification describes.
    pub component_action: String,
    /// Timestamp of the notification, in transport string form.
    pub date_notified: String,
    /// Whether the notification is still unread.
    pub unread: bool,
}

impl NotificationRecord {
    /// Creates a record with the given identity and component fields.
    ///
    /// Item identifiers default to 0 and the record starts unread; use the
    /// builder methods to override.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use notification_loop::record::NotificationRecord;
    ///
    /// let record = NotificationRecord::new(1, "groups", "member_joined", "2024-05-02 08:30:00");
    /// assert_eq!(record.component_name, "groups");
    /// assert!(record.unread);
    /// ```
    pub fn new(id: u64, component_name: &str, component_action: &str, date_notified: &str) -> Self {
        Self {
            id,
            item_id: 0,
            secondary_item_id: 0,
            component_name: component_name.to_string(),
            component_action: component_action.to_string(),
            date_notified: date_notified.to_string(),
            unread: true,
        }
    }

    /// Sets the primary and secondary item identifiers (builder pattern).
    pub fn with_item_ids(mut self, item_id: u64, secondary_item_id: u64) -> Self {
        self.item_id = item_id;
        self.secondary_item_id = secondary_item_id;
        self
    }

    /// Sets the unread state (builder pattern).
    pub fn with_unread(mut self, unread: bool) -> Self {
        self.unread = unread;
        self
    }

    /// Returns the text search terms are matched against.
    ///
    /// Search covers the component name and action, matching the data
    /// provider contract.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use notification_loop::record::NotificationRecord;
    ///
    /// let record = NotificationRecord::new(1, "messages", "new_message", "2024-05-01 12:00:00");
    /// assert_eq!(record.filter_value(), "messages new_message");
    /// ```
    pub fn filter_value(&self) -> String {
        format!("{} {}", self.component_name, self.component_action)
    }
}

impl Display for NotificationRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.component_name, self.component_action)
    }
}

/// Removes backslash escaping introduced by the storage transport.
///
/// Every escaped pair `\x` collapses to `x` (so `\\` becomes `\` and `\'`
/// becomes `'`); a trailing lone backslash is dropped. The loop applies this
/// to string fields before they cross the accessor boundary, and to search
/// terms before they reach the data provider.
///
/// # Examples
///
/// ```rust
/// use notification_loop::record::unescape_transport;
///
/// assert_eq!(unescape_transport(r"O\'Reilly"), "O'Reilly");
/// assert_eq!(unescape_transport(r"a\\b"), r"a\b");
/// assert_eq!(unescape_transport("plain"), "plain");
/// ```
pub fn unescape_transport(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            if let Some(escaped) = chars.next() {
                out.push(escaped);
            }
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_item_ids_and_unread() {
        let record = NotificationRecord::new(9, "friends", "friendship_request", "2024-01-01 00:00:00")
            .with_item_ids(3, 4)
            .with_unread(false);
        assert_eq!(record.item_id, 3);
        assert_eq!(record.secondary_item_id, 4);
        assert!(!record.unread);
    }

    #[test]
    fn unescape_collapses_escaped_pairs() {
        assert_eq!(unescape_transport(r"it\'s \\ fine"), r"it's \ fine");
        // Double-escaped transport data unescapes one level per pass.
        assert_eq!(unescape_transport(r"\\\\"), r"\\");
    }

    #[test]
    fn unescape_drops_trailing_lone_backslash() {
        assert_eq!(unescape_transport("end\\"), "end");
    }

    #[test]
    fn unescape_leaves_clean_text_untouched() {
        assert_eq!(unescape_transport("no escapes here"), "no escapes here");
    }
}
