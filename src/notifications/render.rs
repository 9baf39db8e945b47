//! Default line rendering for notification records.
//!
//! Hosts usually own their templates; this module is for the ones that just
//! want a presentable list. [`DefaultRecordRenderer`] renders one line per
//! record with a width-aligned component column, and
//! [`DefaultRecordRenderer::render_list`] drives a whole
//! [`Model`](super::Model) through the loop protocol the way a host template
//! would.

use lipgloss_extras::prelude::*;
use unicode_width::UnicodeWidthStr;

use super::Model;

/// Styles for the parts of a rendered record line.
#[derive(Debug, Clone)]
pub struct RecordStyles {
    /// Style for the component-name column.
    pub name: Style,
    /// Style for the component-name column of unread records.
    pub unread_name: Style,
    /// Style for the action text.
    pub action: Style,
    /// Style for the timestamp.
    pub date: Style,
}

impl Default for RecordStyles {
    fn default() -> Self {
        let name = Style::new().foreground(Color::from("#dddddd"));
        let unread_name = Style::new().foreground(Color::from("#EE6FF8")).bold(true);
        let action = Style::new().foreground(Color::from("#777777"));
        let date = Style::new().foreground(AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        });
        Self {
            name,
            unread_name,
            action,
            date,
        }
    }
}

/// Renders notification records as aligned, styled lines.
///
/// # Examples
///
/// ```rust
/// use notification_loop::notifications::{Args, DefaultRecordRenderer, Host, Model};
/// use notification_loop::pagination::StyledLinkRenderer;
/// use notification_loop::provider::MemoryProvider;
/// use notification_loop::record::NotificationRecord;
/// use lipgloss_extras::lipgloss::strip_ansi;
///
/// let provider = MemoryProvider::from_records(1, vec![
///     NotificationRecord::new(1, "messages", "new_message", "2024-05-01 12:00:00"),
///     NotificationRecord::new(2, "groups", "member_joined", "2024-05-02 08:30:00"),
/// ]);
/// let link_renderer = StyledLinkRenderer::new();
/// let host = Host::new(&provider, &link_renderer);
/// let mut model = Model::new(&Args::new().with_user_id(1), &host);
///
/// let lines = DefaultRecordRenderer::new().render_list(&mut model);
/// assert_eq!(lines.len(), 2);
/// assert!(strip_ansi(&lines[0]).starts_with("groups"));
/// ```
#[derive(Debug, Clone)]
pub struct DefaultRecordRenderer {
    /// Styles applied to each line's parts.
    pub styles: RecordStyles,
    /// Minimum display width of the component-name column.
    pub name_width: usize,
}

impl Default for DefaultRecordRenderer {
    fn default() -> Self {
        Self {
            styles: RecordStyles::default(),
            name_width: 12,
        }
    }
}

impl DefaultRecordRenderer {
    /// Creates a renderer with default styles and a 12-cell name column.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the styles (builder pattern).
    pub fn with_styles(mut self, styles: RecordStyles) -> Self {
        self.styles = styles;
        self
    }

    /// Sets the minimum name-column width (builder pattern).
    pub fn with_name_width(mut self, name_width: usize) -> Self {
        self.name_width = name_width;
        self
    }

    /// Renders the current record of the loop as one line.
    ///
    /// Values are read through the loop's accessors, so the host's value
    /// filter and transport unescaping apply. Returns `None` when the loop
    /// has no current record.
    pub fn render_current(&self, model: &Model<'_>) -> Option<String> {
        let name = model.component_name()?;
        let action = model.component_action()?;
        let date = model.date_notified()?;
        let unread = model.current().is_some_and(|record| record.unread);

        let pad = self.name_width.saturating_sub(name.width());
        let name_column = format!("{}{}", name, " ".repeat(pad));
        let name_style = if unread {
            &self.styles.unread_name
        } else {
            &self.styles.name
        };

        Some(format!(
            "{} {} {}",
            name_style.render(&name_column),
            self.styles.action.render(&action),
            self.styles.date.render(&date),
        ))
    }

    /// Drives the loop protocol to completion, one rendered line per record.
    ///
    /// Equivalent to what a host template does: check, continue, enter,
    /// render. Leaves the model rewound and ready for another pass.
    pub fn render_list(&self, model: &mut Model<'_>) -> Vec<String> {
        let mut lines = Vec::with_capacity(model.count());
        if !model.has_items() {
            return lines;
        }
        while model.continue_loop() {
            model.enter_next();
            if let Some(line) = self.render_current(model) {
                lines.push(line);
            }
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::{Args, Host};
    use crate::pagination::StyledLinkRenderer;
    use crate::provider::MemoryProvider;
    use crate::record::NotificationRecord;
    use lipgloss_extras::lipgloss::strip_ansi;

    fn model_host() -> (MemoryProvider, StyledLinkRenderer) {
        let provider = MemoryProvider::from_records(
            1,
            vec![
                NotificationRecord::new(1, "messages", "new_message", "2024-05-01 12:00:00"),
                NotificationRecord::new(2, "groups", "member_joined", "2024-05-02 08:30:00"),
            ],
        );
        (provider, StyledLinkRenderer::new())
    }

    #[test]
    fn renders_one_line_per_record() {
        let (provider, link_renderer) = model_host();
        let host = Host::new(&provider, &link_renderer);
        let mut model = Model::new(&Args::new().with_user_id(1), &host);

        let lines = DefaultRecordRenderer::new().render_list(&mut model);
        assert_eq!(lines.len(), 2);
        // Newest first, name column padded to width 12.
        assert_eq!(strip_ansi(&lines[0]), "groups       member_joined 2024-05-02 08:30:00");
        assert_eq!(strip_ansi(&lines[1]), "messages     new_message 2024-05-01 12:00:00");
    }

    #[test]
    fn render_list_leaves_the_model_restartable() {
        let (provider, link_renderer) = model_host();
        let host = Host::new(&provider, &link_renderer);
        let mut model = Model::new(&Args::new().with_user_id(1), &host);

        let renderer = DefaultRecordRenderer::new();
        let first = renderer.render_list(&mut model);
        let second = renderer.render_list(&mut model);
        assert_eq!(first, second);
        assert_eq!(model.cursor(), -1);
    }

    #[test]
    fn empty_model_renders_nothing() {
        let provider = MemoryProvider::new();
        let link_renderer = StyledLinkRenderer::new();
        let host = Host::new(&provider, &link_renderer);
        let mut model = Model::new(&Args::new().with_user_id(1), &host);

        assert!(DefaultRecordRenderer::new().render_list(&mut model).is_empty());
    }

    #[test]
    fn wide_names_are_not_truncated() {
        let provider = MemoryProvider::from_records(
            1,
            vec![NotificationRecord::new(1, "a-very-long-component", "did_thing", "2024-05-01 12:00:00")],
        );
        let link_renderer = StyledLinkRenderer::new();
        let host = Host::new(&provider, &link_renderer);
        let mut model = Model::new(&Args::new().with_user_id(1), &host);

        let lines = DefaultRecordRenderer::new().render_list(&mut model);
        assert_eq!(strip_ansi(&lines[0]), "a-very-long-component did_thing 2024-05-01 12:00:00");
    }
}
