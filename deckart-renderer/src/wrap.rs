//! Greedy word wrapping and paragraph flow.

use crate::measure::{FontSpec, TextMeasurer};

/// One line of flowed body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyLine {
    /// Painted text.
    Text(String),
    /// Paragraph gap: advances the cursor, paints nothing.
    Blank,
}

impl BodyLine {
    /// Text of the line, if any.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(t) => Some(t),
            Self::Blank => None,
        }
    }
}

/// Wrap `text` into lines no wider than `max_width`.
///
/// Words accumulate while the measured line fits; a word that would
/// overflow starts a new line. Words are never split, so a single word
/// wider than `max_width` stays whole on its own line. Any whitespace run
/// (including line breaks) separates words.
#[must_use]
pub fn wrap_words<M: TextMeasurer + ?Sized>(
    text: &str,
    max_width: f32,
    font: &FontSpec,
    measurer: &M,
) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }
        let candidate = format!("{current} {word}");
        if measurer.measure(&candidate, font) <= max_width {
            current = candidate;
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Split a body into paragraphs on blank lines.
///
/// `\r\n` is treated as `\n`; empty paragraphs are dropped.
#[must_use]
pub fn paragraphs(body: &str) -> Vec<String> {
    body.replace("\r\n", "\n")
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

/// Flow a multi-paragraph body into at most `max_lines` lines.
///
/// Each paragraph is wrapped independently with one [`BodyLine::Blank`]
/// between consecutive paragraphs. Lines past the cap are dropped.
#[must_use]
pub fn flow_body<M: TextMeasurer + ?Sized>(
    body: &str,
    max_width: f32,
    font: &FontSpec,
    measurer: &M,
    max_lines: usize,
) -> Vec<BodyLine> {
    let mut lines = Vec::new();
    for (i, paragraph) in paragraphs(body).iter().enumerate() {
        if i > 0 {
            lines.push(BodyLine::Blank);
        }
        lines.extend(
            wrap_words(paragraph, max_width, font, measurer)
                .into_iter()
                .map(BodyLine::Text),
        );
        if lines.len() >= max_lines {
            break;
        }
    }

    if lines.len() > max_lines {
        tracing::debug!(
            total = lines.len(),
            kept = max_lines,
            "truncating body to visible lines"
        );
        lines.truncate(max_lines);
    }
    // A gap only separates paragraphs; it never ends the body.
    if lines.last() == Some(&BodyLine::Blank) {
        lines.pop();
    }
    lines
}

/// Ellipsis appended to a shortened line.
pub const ELLIPSIS: &str = "\u{2026}";

/// Drop trailing words from `line` until it fits with an [`ELLIPSIS`].
///
/// The first word is always kept, so an overlong single word still ends
/// in the ellipsis rather than vanishing.
#[must_use]
pub fn ellipsize<M: TextMeasurer + ?Sized>(
    line: &str,
    max_width: f32,
    font: &FontSpec,
    measurer: &M,
) -> String {
    let mut words: Vec<&str> = line.split_whitespace().collect();
    while words.len() > 1 {
        let candidate = format!("{}{ELLIPSIS}", words.join(" "));
        if measurer.measure(&candidate, font) <= max_width {
            return candidate;
        }
        words.pop();
    }
    format!("{}{ELLIPSIS}", words.first().copied().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::{FixedAdvanceMeasurer, FontWeight};
    use proptest::prelude::*;

    // 10px per character.
    const FONT: FontSpec = FontSpec::new(20.0, FontWeight::Regular);
    const STUB: FixedAdvanceMeasurer = FixedAdvanceMeasurer { advance: 0.5 };

    #[test]
    fn test_wrap_breaks_between_words() {
        let lines = wrap_words("the quick brown fox", 100.0, &FONT, &STUB);
        assert_eq!(lines, vec!["the quick", "brown fox"]);
    }

    #[test]
    fn test_wrap_exact_fit_stays_on_line() {
        // "aaaa bbbbb" is 10 chars = 100px.
        let lines = wrap_words("aaaa bbbbb", 100.0, &FONT, &STUB);
        assert_eq!(lines, vec!["aaaa bbbbb"]);
    }

    #[test]
    fn test_long_word_kept_whole() {
        let lines = wrap_words("a supercalifragilistic b", 50.0, &FONT, &STUB);
        assert_eq!(lines, vec!["a", "supercalifragilistic", "b"]);
    }

    #[test]
    fn test_wrap_empty_text() {
        assert!(wrap_words("", 100.0, &FONT, &STUB).is_empty());
        assert!(wrap_words("   \n ", 100.0, &FONT, &STUB).is_empty());
    }

    #[test]
    fn test_two_paragraphs_one_blank() {
        let lines = flow_body("Para one.\n\nPara two.", 500.0, &FONT, &STUB, 20);
        assert_eq!(
            lines,
            vec![
                BodyLine::Text("Para one.".into()),
                BodyLine::Blank,
                BodyLine::Text("Para two.".into()),
            ]
        );
    }

    #[test]
    fn test_extra_blank_lines_collapse() {
        let lines = flow_body("One.\n\n\n\nTwo.\r\n\r\nThree.", 500.0, &FONT, &STUB, 20);
        let blanks = lines.iter().filter(|l| **l == BodyLine::Blank).count();
        assert_eq!(blanks, 2);
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_single_newline_joins_words() {
        let lines = flow_body("line\nbreak", 500.0, &FONT, &STUB, 20);
        assert_eq!(lines, vec![BodyLine::Text("line break".into())]);
    }

    #[test]
    fn test_truncates_to_cap() {
        let body = (0..30)
            .map(|i| format!("Paragraph number {i} has words."))
            .collect::<Vec<_>>()
            .join("\n\n");
        // Three lines per paragraph plus a gap; the 11th line is text.
        let lines = flow_body(&body, 120.0, &FONT, &STUB, 11);
        assert_eq!(lines.len(), 11);
    }

    #[test]
    fn test_cap_on_paragraph_gap_drops_the_gap() {
        let lines = flow_body("A.\n\nB.", 500.0, &FONT, &STUB, 2);
        assert_eq!(lines, vec![BodyLine::Text("A.".into())]);
    }

    #[test]
    fn test_ellipsize_drops_words_until_fit() {
        // "the quick…" is 10 chars = 100px.
        assert_eq!(ellipsize("the quick brown", 100.0, &FONT, &STUB), "the quick\u{2026}");
        assert_eq!(ellipsize("fits", 100.0, &FONT, &STUB), "fits\u{2026}");
    }

    #[test]
    fn test_ellipsize_keeps_first_word() {
        assert_eq!(
            ellipsize("supercalifragilistic word", 50.0, &FONT, &STUB),
            "supercalifragilistic\u{2026}"
        );
    }

    #[test]
    fn test_blank_has_no_text() {
        assert_eq!(BodyLine::Blank.text(), None);
        assert_eq!(BodyLine::Text("x".into()).text(), Some("x"));
    }

    proptest! {
        #[test]
        fn prop_lines_fit_unless_single_word(
            words in prop::collection::vec("[a-zA-Z]{1,15}", 0..40),
            max_width in 40.0f32..400.0,
        ) {
            let text = words.join(" ");
            for line in wrap_words(&text, max_width, &FONT, &STUB) {
                let width = STUB.measure(&line, &FONT);
                prop_assert!(
                    width <= max_width || !line.contains(' '),
                    "line {line:?} is {width}px wide, max {max_width}"
                );
            }
        }

        #[test]
        fn prop_wrap_preserves_words(
            words in prop::collection::vec("[a-z]{1,10}", 0..40),
            max_width in 40.0f32..400.0,
        ) {
            let text = words.join(" ");
            let rejoined = wrap_words(&text, max_width, &FONT, &STUB).join(" ");
            prop_assert_eq!(rejoined, text);
        }

        #[test]
        fn prop_body_never_exceeds_cap(
            paras in prop::collection::vec("[a-z ]{1,80}", 0..12),
            cap in 1usize..20,
        ) {
            let body = paras.join("\n\n");
            let lines = flow_body(&body, 200.0, &FONT, &STUB, cap);
            prop_assert!(lines.len() <= cap);
            prop_assert_ne!(lines.last(), Some(&BodyLine::Blank));
        }
    }
}
