// Text helpers shared by the page sections
//
// Word wrapping is done up front so every section knows exactly how many rows
// it occupies; the page paragraph is rendered without ratatui's own wrapping.

use ratatui::{
    style::{Modifier, Style},
    text::Span,
};
use unicode_width::UnicodeWidthStr;

use crate::theme::palette::Gradient;

/// Terminal column width of a string
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Greedy word wrap to `width` columns
///
/// Always returns at least one (possibly empty) line. Words wider than
/// `width` get a line of their own and are clipped by the renderer.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = display_width(word);
        if current_width > 0 && current_width + 1 + word_width > width {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }
        if current_width > 0 {
            current.push(' ');
            current_width += 1;
        }
        current.push_str(word);
        current_width += word_width;
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// One span per character, colored along `gradient`
///
/// `phase` (0.0 ~ 1.0) slides the gradient across the text; the gradient is
/// mirrored so the loop has no visible seam.
pub fn gradient_spans(text: &str, gradient: &Gradient, phase: f32, bold: bool) -> Vec<Span<'static>> {
    let count = text.chars().count().max(1) as f32;
    let modifier = if bold {
        Modifier::BOLD
    } else {
        Modifier::empty()
    };

    text.chars()
        .enumerate()
        .map(|(i, c)| {
            let t = (i as f32 / count + phase).fract();
            let mirrored = if t <= 0.5 { t * 2.0 } else { (1.0 - t) * 2.0 };
            Span::styled(
                c.to_string(),
                Style::default()
                    .fg(gradient.at(mirrored))
                    .add_modifier(modifier),
            )
        })
        .collect()
}

/// Pad `text` with spaces to `width` columns
pub fn pad_to(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(display_width(text));
    format!("{text}{}", " ".repeat(pad))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Wrapped lines fit the width unless a single word is wider
        #[test]
        fn prop_wrap_respects_width(words in proptest::collection::vec("[a-z]{1,8}", 0..40), width in 8usize..60) {
            let text = words.join(" ");
            for line in wrap_text(&text, width) {
                prop_assert!(display_width(&line) <= width);
            }
        }

        /// Wrapping keeps every word in order
        #[test]
        fn prop_wrap_keeps_words(words in proptest::collection::vec("[a-z]{1,8}", 1..40), width in 8usize..60) {
            let text = words.join(" ");
            let rejoined = wrap_text(&text, width).join(" ");
            prop_assert_eq!(rejoined, text);
        }
    }

    #[test]
    fn test_wrap_basic() {
        assert_eq!(wrap_text("one two three", 7), vec!["one two", "three"]);
        assert_eq!(wrap_text("", 10), vec![String::new()]);
        assert_eq!(wrap_text("  spaced   out  ", 20), vec!["spaced out"]);
    }

    #[test]
    fn test_wide_glyph_width() {
        assert_eq!(display_width("❄ Winter"), display_width("❄") + 7);
        assert_eq!(pad_to("ab", 5), "ab   ");
        assert_eq!(pad_to("abcdef", 3), "abcdef");
    }

    #[test]
    fn test_gradient_spans_one_per_char() {
        let gradient = Gradient::new((0, 0, 0), (128, 128, 128), (255, 255, 255));
        let spans = gradient_spans("Satya", &gradient, 0.0, true);
        assert_eq!(spans.len(), 5);
        assert_eq!(spans[0].style.fg, Some(gradient.at(0.0)));
    }
}
