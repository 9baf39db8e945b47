//! Pagination arithmetic and link-strip rendering.
//!
//! Two things live here: the page arithmetic the loop needs
//! ([`total_pages`], [`format_number`], [`add_page_arg`]) and the
//! [`PaginationRenderer`] seam with its default implementation,
//! [`StyledLinkRenderer`].
//!
//! The renderer receives a base URL template containing the
//! [`PAGE_PLACEHOLDER`] token; substituting a page number into the template
//! yields that page's URL. The default renderer emits a windowed strip such
//! as `← 1 … 4 5 6 … 12 →`: previous/next arrows, the first and last page
//! always visible, a band of adjacent pages around the current one, and `…`
//! marking the gaps. Entries are styled with lipgloss and, when a base
//! template is supplied, wrapped in OSC 8 terminal hyperlinks so capable
//! terminals make them clickable.

use lipgloss_extras::prelude::*;

/// Token in a base URL template that stands in for the page number.
pub const PAGE_PLACEHOLDER: &str = "%#%";

/// Unicode ellipsis (…) marking collapsed page ranges.
pub const ELLIPSIS: &str = "…";

/// Default previous-page arrow.
pub const PREV_ARROW: &str = "←";

/// Default next-page arrow.
pub const NEXT_ARROW: &str = "→";

/// Returns the number of pages needed for `total_items` at `per_page` items
/// per page.
///
/// This is `ceil(total_items / per_page)`; zero items (or a zero page size)
/// yield zero pages.
///
/// # Examples
///
/// ```rust
/// use notification_loop::pagination::total_pages;
///
/// assert_eq!(total_pages(60, 25), 3);
/// assert_eq!(total_pages(50, 25), 2);
/// assert_eq!(total_pages(1, 25), 1);
/// assert_eq!(total_pages(0, 25), 0);
/// ```
pub fn total_pages(total_items: usize, per_page: usize) -> usize {
    if total_items == 0 || per_page == 0 {
        0
    } else {
        total_items.div_ceil(per_page)
    }
}

/// Formats a count for display with thousands separators.
///
/// # Examples
///
/// ```rust
/// use notification_loop::pagination::format_number;
///
/// assert_eq!(format_number(999), "999");
/// assert_eq!(format_number(1000), "1,000");
/// assert_eq!(format_number(1234567), "1,234,567");
/// ```
pub fn format_number(value: usize) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Appends the pagination query parameter with the page placeholder to a
/// base URL.
///
/// The result is the base URL template handed to the
/// [`PaginationRenderer`]; replacing [`PAGE_PLACEHOLDER`] with a page number
/// produces that page's URL.
///
/// # Examples
///
/// ```rust
/// use notification_loop::pagination::add_page_arg;
///
/// assert_eq!(add_page_arg("/members/me/notifications", "npage"),
///            "/members/me/notifications?npage=%#%");
/// assert_eq!(add_page_arg("/list?tab=unread", "npage"),
///            "/list?tab=unread&npage=%#%");
/// ```
pub fn add_page_arg(base_url: &str, key: &str) -> String {
    let sep = if base_url.contains('?') { '&' } else { '?' };
    format!("{base_url}{sep}{key}={PAGE_PLACEHOLDER}")
}

/// External collaborator that turns pagination state into markup.
///
/// `window` is the number of adjacent pages to keep visible on each side of
/// the current page.
pub trait PaginationRenderer {
    /// Renders the link strip for `total_pages` pages with `current_page`
    /// (1-indexed) active.
    fn render_links(
        &self,
        base_url_template: &str,
        total_pages: usize,
        current_page: usize,
        window: usize,
    ) -> String;
}

/// Styles for the parts of the rendered link strip.
#[derive(Debug, Clone)]
pub struct LinkStyles {
    /// Style for the current page number.
    pub current: Style,
    /// Style for other page numbers.
    pub link: Style,
    /// Style for the previous/next arrows.
    pub arrow: Style,
    /// Style for the ellipsis between page ranges.
    pub gap: Style,
}

impl Default for LinkStyles {
    fn default() -> Self {
        let current = Style::new().foreground(Color::from("#EE6FF8")).bold(true);
        let link = Style::new().foreground(AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        });
        let arrow = link.clone();
        let gap = Style::new().foreground(AdaptiveColor {
            Light: "#DDDADA",
            Dark: "#3C3C3C",
        });
        Self {
            current,
            link,
            arrow,
            gap,
        }
    }
}

/// Default pagination renderer: a styled, windowed link strip.
///
/// # Examples
///
/// ```rust
/// use notification_loop::pagination::{PaginationRenderer, StyledLinkRenderer};
/// use lipgloss_extras::lipgloss::strip_ansi;
///
/// let renderer = StyledLinkRenderer::new().with_hyperlinks(false);
/// let strip = renderer.render_links("", 9, 4, 1);
///
/// assert_eq!(strip_ansi(&strip), "← 1 … 3 4 5 … 9 →");
/// ```
#[derive(Debug, Clone)]
pub struct StyledLinkRenderer {
    /// Styles applied to the strip's parts.
    pub styles: LinkStyles,
    /// Text for the previous-page entry.
    pub prev_text: String,
    /// Text for the next-page entry.
    pub next_text: String,
    /// Whether to wrap entries in OSC 8 terminal hyperlinks.
    pub hyperlinks: bool,
}

impl Default for StyledLinkRenderer {
    fn default() -> Self {
        Self {
            styles: LinkStyles::default(),
            prev_text: PREV_ARROW.to_string(),
            next_text: NEXT_ARROW.to_string(),
            hyperlinks: true,
        }
    }
}

impl StyledLinkRenderer {
    /// Creates a renderer with default styles, arrows, and hyperlinks on.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the styles (builder pattern).
    pub fn with_styles(mut self, styles: LinkStyles) -> Self {
        self.styles = styles;
        self
    }

    /// Sets the previous/next entry text (builder pattern).
    pub fn with_arrows(mut self, prev: &str, next: &str) -> Self {
        self.prev_text = prev.to_string();
        self.next_text = next.to_string();
        self
    }

    /// Enables or disables OSC 8 hyperlink wrapping (builder pattern).
    pub fn with_hyperlinks(mut self, enabled: bool) -> Self {
        self.hyperlinks = enabled;
        self
    }

    fn page_url(template: &str, page: usize) -> String {
        template.replace(PAGE_PLACEHOLDER, &page.to_string())
    }

    fn linkify(&self, template: &str, page: usize, text: String) -> String {
        if !self.hyperlinks || template.is_empty() {
            return text;
        }
        let url = Self::page_url(template, page);
        format!("\x1b]8;;{url}\x1b\\{text}\x1b]8;;\x1b\\")
    }
}

impl PaginationRenderer for StyledLinkRenderer {
    fn render_links(
        &self,
        base_url_template: &str,
        total_pages: usize,
        current_page: usize,
        window: usize,
    ) -> String {
        // A single page needs no navigation.
        if total_pages < 2 {
            return String::new();
        }
        let current = current_page.clamp(1, total_pages);

        let mut parts: Vec<String> = Vec::new();
        if current > 1 {
            parts.push(self.linkify(
                base_url_template,
                current - 1,
                self.styles.arrow.render(&self.prev_text),
            ));
        }

        let mut last_emitted = 0usize;
        for n in 1..=total_pages {
            let in_window = n + window >= current && n <= current + window;
            if n != 1 && n != total_pages && !in_window {
                continue;
            }
            if last_emitted != 0 && n > last_emitted + 1 {
                parts.push(self.styles.gap.render(ELLIPSIS));
            }
            if n == current {
                parts.push(self.styles.current.render(&n.to_string()));
            } else {
                parts.push(self.linkify(
                    base_url_template,
                    n,
                    self.styles.link.render(&n.to_string()),
                ));
            }
            last_emitted = n;
        }

        if current < total_pages {
            parts.push(self.linkify(
                base_url_template,
                current + 1,
                self.styles.arrow.render(&self.next_text),
            ));
        }

        parts.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lipgloss_extras::lipgloss::strip_ansi;

    fn plain_renderer() -> StyledLinkRenderer {
        StyledLinkRenderer::new().with_hyperlinks(false)
    }

    #[test]
    fn total_pages_is_ceiling_division() {
        for (total, per_page, expected) in [
            (60usize, 25usize, 3usize),
            (50, 25, 2),
            (51, 25, 3),
            (25, 25, 1),
            (24, 25, 1),
            (1, 1, 1),
            (0, 25, 0),
            (100, 7, 15),
        ] {
            assert_eq!(total_pages(total, per_page), expected, "{total}/{per_page}");
        }
    }

    #[test]
    fn format_number_groups_thousands() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(60), "60");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(987654321), "987,654,321");
    }

    #[test]
    fn add_page_arg_picks_separator() {
        assert_eq!(add_page_arg("", "npage"), "?npage=%#%");
        assert_eq!(add_page_arg("/n", "npage"), "/n?npage=%#%");
        assert_eq!(add_page_arg("/n?tab=unread", "p"), "/n?tab=unread&p=%#%");
    }

    #[test]
    fn strip_windows_around_current_page() {
        let renderer = plain_renderer();
        assert_eq!(strip_ansi(&renderer.render_links("", 9, 4, 1)), "← 1 … 3 4 5 … 9 →");
        assert_eq!(strip_ansi(&renderer.render_links("", 9, 1, 1)), "1 2 … 9 →");
        assert_eq!(strip_ansi(&renderer.render_links("", 9, 9, 1)), "← 1 … 8 9");
        assert_eq!(strip_ansi(&renderer.render_links("", 3, 2, 1)), "← 1 2 3 →");
    }

    #[test]
    fn single_page_renders_nothing() {
        let renderer = plain_renderer();
        assert_eq!(renderer.render_links("", 1, 1, 1), "");
        assert_eq!(renderer.render_links("", 0, 1, 1), "");
    }

    #[test]
    fn wider_window_shows_more_neighbors() {
        let renderer = plain_renderer();
        assert_eq!(
            strip_ansi(&renderer.render_links("", 10, 5, 2)),
            "← 1 … 3 4 5 6 7 … 10 →"
        );
    }

    #[test]
    fn hyperlinks_substitute_the_placeholder() {
        let renderer = StyledLinkRenderer::new();
        let strip = renderer.render_links("/n?npage=%#%", 3, 2, 1);
        // Prev arrow targets page 1, next arrow page 3.
        assert!(strip.contains("\x1b]8;;/n?npage=1\x1b\\"));
        assert!(strip.contains("\x1b]8;;/n?npage=3\x1b\\"));
        // The current page is not a link.
        assert!(!strip.contains("\x1b]8;;/n?npage=2\x1b\\"));
    }

    #[test]
    fn custom_arrows_are_used() {
        let renderer = plain_renderer().with_arrows("prev", "next");
        assert_eq!(strip_ansi(&renderer.render_links("", 2, 1, 1)), "1 2 next");
    }
}
