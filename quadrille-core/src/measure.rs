//! Text display-width measurement.
//!
//! Column minimums are seeded from the measured width of rendered text,
//! so wide (CJK, emoji) content gets the terminal cells it actually
//! occupies rather than its char count.

use unicode_width::UnicodeWidthStr;

/// Display width of a string in terminal cells.
pub fn display_width(text: &str) -> u16 {
    u16::try_from(text.width()).unwrap_or(u16::MAX)
}

/// Widest display width across a set of strings.
///
/// Returns 0 for an empty iterator.
pub fn max_display_width<'a, I>(texts: I) -> u16
where
    I: IntoIterator<Item = &'a str>,
{
    texts.into_iter().map(display_width).max().unwrap_or(0)
}
