pub mod detail;
pub mod favorites;
pub mod search;

pub use detail::DetailView;
pub use favorites::FavoritesView;
pub use search::SearchView;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub(crate) fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width.saturating_sub(1) {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::truncate_to_width;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate_to_width("Toast", 10), "Toast");
    }

    #[test]
    fn long_text_gets_an_ellipsis() {
        let truncated = truncate_to_width("Teriyaki Chicken Casserole", 10);
        assert!(truncated.ends_with('…'));
        assert!(truncated.chars().count() <= 10);
    }
}
