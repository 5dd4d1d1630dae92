//! Inline span tokenizer.
//!
//! Code spans are found first; emphasis is only looked for in the text
//! between them. Emphasis alternatives are tried in order triple, double,
//! single, so `***x***` is bold+italic rather than italic around bold.
//! Unmatched markers stay in the text as plain characters.

use once_cell::sync::Lazy;
use regex::Regex;

use super::style::{push_run, Style, StyledRun};

static CODE_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"`([^`]+)`").expect("code span pattern is valid"));

static EMPHASIS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\*\*\*(.+?)\*\*\*|\*\*(.+?)\*\*|\*(.+?)\*").expect("emphasis pattern is valid")
});

/// Split one line into styled runs. An empty line yields no runs.
pub fn tokenize(line: &str) -> Vec<StyledRun> {
    let mut runs = Vec::new();
    tokenize_into(line, Style::PLAIN, &mut runs);
    runs
}

/// Tokenize `line`, adding `base` to every run produced.
pub(crate) fn tokenize_into(line: &str, base: Style, out: &mut Vec<StyledRun>) {
    let mut pos = 0;
    for caps in CODE_SPAN.captures_iter(line) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        emphasis_into(&line[pos..whole.start()], base, out);
        push_run(out, inner.as_str(), base | Style::INLINE_CODE);
        pos = whole.end();
    }
    emphasis_into(&line[pos..], base, out);
}

fn emphasis_into(segment: &str, base: Style, out: &mut Vec<StyledRun>) {
    let mut pos = 0;
    for caps in EMPHASIS.captures_iter(segment) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        let (inner, style) = if let Some(m) = caps.get(1) {
            (m, Style::BOLD_ITALIC)
        } else if let Some(m) = caps.get(2) {
            (m, Style::BOLD)
        } else if let Some(m) = caps.get(3) {
            (m, Style::ITALIC)
        } else {
            continue;
        };
        push_run(out, &segment[pos..whole.start()], base);
        push_run(out, inner.as_str(), base | style);
        pos = whole.end();
    }
    push_run(out, &segment[pos..], base);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runs(line: &str) -> Vec<(String, String)> {
        tokenize(line)
            .into_iter()
            .map(|run| (run.text, run.style.to_string()))
            .collect()
    }

    fn pair(text: &str, style: &str) -> (String, String) {
        (text.to_string(), style.to_string())
    }

    #[test]
    fn test_empty_line_has_no_runs() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_plain_text_single_run() {
        assert_eq!(runs("just words"), vec![pair("just words", "plain")]);
    }

    #[test]
    fn test_emphasis_precedence() {
        assert_eq!(
            runs("**bold** and *italic* and ***both***"),
            vec![
                pair("bold", "bold"),
                pair(" and ", "plain"),
                pair("italic", "italic"),
                pair(" and ", "plain"),
                pair("both", "bold+italic"),
            ]
        );
    }

    #[test]
    fn test_code_span_is_verbatim() {
        assert_eq!(
            runs("run `cargo **build**` now"),
            vec![
                pair("run ", "plain"),
                pair("cargo **build**", "inline_code"),
                pair(" now", "plain"),
            ]
        );
    }

    #[test]
    fn test_empty_code_span_is_literal() {
        assert_eq!(runs("a `` b"), vec![pair("a `` b", "plain")]);
    }

    #[test]
    fn test_unmatched_markers_stay_plain() {
        assert_eq!(runs("2 * 3 = 6"), vec![pair("2 * 3 = 6", "plain")]);
        assert_eq!(runs("**open only"), vec![pair("**open only", "plain")]);
        assert_eq!(runs("tick ` alone"), vec![pair("tick ` alone", "plain")]);
    }

    #[test]
    fn test_emphasis_on_both_sides_of_code() {
        assert_eq!(
            runs("*a* `b` **c**"),
            vec![
                pair("a", "italic"),
                pair(" ", "plain"),
                pair("b", "inline_code"),
                pair(" ", "plain"),
                pair("c", "bold"),
            ]
        );
    }

    #[test]
    fn test_markers_do_not_span_code() {
        // The stars sit in different segments, so neither pairs up.
        assert_eq!(
            runs("*x `y` z*"),
            vec![
                pair("*x ", "plain"),
                pair("y", "inline_code"),
                pair(" z*", "plain"),
            ]
        );
    }

    #[test]
    fn test_base_style_is_added() {
        let mut out = Vec::new();
        tokenize_into("say **hi**", Style::BLOCKQUOTE, &mut out);
        assert_eq!(
            out,
            vec![
                StyledRun::new("say ", Style::BLOCKQUOTE),
                StyledRun::new("hi", Style::BLOCKQUOTE | Style::BOLD),
            ]
        );
    }
}
