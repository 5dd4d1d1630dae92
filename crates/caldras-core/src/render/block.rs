//! Line classifier and renderer.
//!
//! Input is processed one line at a time. The only state carried between
//! lines is whether a fenced code block is open.

use once_cell::sync::Lazy;
use regex::Regex;

use super::inline::tokenize_into;
use super::style::{push_run, Style, StyledRun};
use super::theme::Theme;

const FENCE: &str = "```";

static BULLET_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\s*)[-*+]\s(.*)$").expect("bullet pattern is valid"));

static ORDERED_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\s*)(\d+)\.\s(.*)$").expect("ordered pattern is valid"));

/// Fenced code block state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Fence {
    #[default]
    Outside,
    Inside,
}

/// Classification of a single source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// A fence line while outside a block; the tag is the trimmed text after
    /// the marker, if any.
    FenceOpen { lang: Option<&'a str> },
    /// A fence line while inside a block.
    FenceClose,
    /// Any other line inside a block.
    Code(&'a str),
    Heading { level: u8, text: &'a str },
    Quote(&'a str),
    Bullet { depth: usize, text: &'a str },
    Ordered { depth: usize, number: &'a str, text: &'a str },
    Blank,
    Paragraph(&'a str),
}

impl<'a> LineKind<'a> {
    /// Classify `line` given the current fence state. First match wins.
    pub fn classify(line: &'a str, fence: Fence) -> Self {
        if let Some(rest) = line.strip_prefix(FENCE) {
            return match fence {
                Fence::Outside => {
                    let lang = rest.trim();
                    LineKind::FenceOpen {
                        lang: (!lang.is_empty()).then_some(lang),
                    }
                }
                Fence::Inside => LineKind::FenceClose,
            };
        }
        if fence == Fence::Inside {
            return LineKind::Code(line);
        }
        for (level, marker) in [(3, "### "), (2, "## "), (1, "# ")] {
            if let Some(text) = line.strip_prefix(marker) {
                return LineKind::Heading { level, text };
            }
        }
        if let Some(text) = line.strip_prefix("> ") {
            return LineKind::Quote(text);
        }
        if let Some(caps) = BULLET_ITEM.captures(line) {
            if let (Some(indent), Some(text)) = (caps.get(1), caps.get(2)) {
                return LineKind::Bullet {
                    depth: depth_of(indent.as_str()),
                    text: text.as_str(),
                };
            }
        }
        if let Some(caps) = ORDERED_ITEM.captures(line) {
            if let (Some(indent), Some(number), Some(text)) = (caps.get(1), caps.get(2), caps.get(3))
            {
                return LineKind::Ordered {
                    depth: depth_of(indent.as_str()),
                    number: number.as_str(),
                    text: text.as_str(),
                };
            }
        }
        if line.trim().is_empty() {
            return LineKind::Blank;
        }
        LineKind::Paragraph(line)
    }
}

/// Two leading whitespace characters make one indentation level.
fn depth_of(indent: &str) -> usize {
    indent.chars().count() / 2
}

/// Incremental renderer: feed lines, then take the runs.
///
/// Lines that produce visible output are separated by a line-break run.
/// Fence lines without a language tag produce no output line at all.
#[derive(Debug)]
pub struct Renderer<'t> {
    theme: &'t Theme,
    fence: Fence,
    runs: Vec<StyledRun>,
    started: bool,
}

impl<'t> Renderer<'t> {
    pub fn new(theme: &'t Theme) -> Self {
        Self {
            theme,
            fence: Fence::Outside,
            runs: Vec::new(),
            started: false,
        }
    }

    pub fn in_code_block(&self) -> bool {
        self.fence == Fence::Inside
    }

    /// Render one line (without its trailing newline).
    pub fn push_line(&mut self, line: &str) {
        let kind = LineKind::classify(line, self.fence);
        match kind {
            LineKind::FenceOpen { lang } => {
                self.fence = Fence::Inside;
                if let Some(lang) = lang {
                    self.begin_line();
                    self.runs
                        .push(StyledRun::new(format!("[{}]", lang), Style::CODE_BLOCK));
                }
            }
            LineKind::FenceClose => {
                self.fence = Fence::Outside;
            }
            LineKind::Code(text) => {
                self.begin_line();
                push_run(&mut self.runs, text, Style::CODE_BLOCK);
            }
            LineKind::Heading { level, text } => {
                self.begin_line();
                push_run(&mut self.runs, text, Style::heading(level));
            }
            LineKind::Quote(text) => {
                self.begin_line();
                push_run(&mut self.runs, self.theme.quote_glyph(), Style::BLOCKQUOTE);
                tokenize_into(text, Style::BLOCKQUOTE, &mut self.runs);
            }
            LineKind::Bullet { depth, text } => {
                self.begin_line();
                let bullet = format!("{}{}", "  ".repeat(depth), self.theme.bullet_glyph());
                push_run(&mut self.runs, &bullet, Style::PLAIN);
                tokenize_into(text, Style::PLAIN, &mut self.runs);
            }
            LineKind::Ordered {
                depth,
                number,
                text,
            } => {
                self.begin_line();
                let prefix = format!("{}{}. ", "  ".repeat(depth), number);
                push_run(&mut self.runs, &prefix, Style::PLAIN);
                tokenize_into(text, Style::PLAIN, &mut self.runs);
            }
            LineKind::Blank => {
                self.begin_line();
            }
            LineKind::Paragraph(text) => {
                self.begin_line();
                tokenize_into(text, Style::PLAIN, &mut self.runs);
            }
        }
    }

    fn begin_line(&mut self) {
        if self.started {
            self.runs.push(StyledRun::line_break());
        }
        self.started = true;
    }

    pub fn finish(self) -> Vec<StyledRun> {
        self.runs
    }
}

/// Render markdown text into styled runs.
///
/// Each call starts outside any code block; an unterminated fence styles the
/// remainder of the input as code.
///
/// Breaks separate lines, so `n` visible lines yield `n - 1` break runs. A
/// blank line counts as a line with no content: between two lines it shows
/// up as one extra break, and input made of a single blank line renders to
/// no runs at all.
pub fn render(markdown: &str, theme: &Theme) -> Vec<StyledRun> {
    let mut renderer = Renderer::new(theme);
    for line in markdown.lines() {
        renderer.push_line(line);
    }
    renderer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(markdown: &str) -> Vec<(String, String)> {
        render(markdown, &Theme::default())
            .into_iter()
            .map(|run| (run.text, run.style.to_string()))
            .collect()
    }

    fn pair(text: &str, style: &str) -> (String, String) {
        (text.to_string(), style.to_string())
    }

    #[test]
    fn test_heading_single_run() {
        assert_eq!(rendered("# Title"), vec![pair("Title", "heading1")]);
        assert_eq!(rendered("## Sub"), vec![pair("Sub", "heading2")]);
        assert_eq!(rendered("### Small"), vec![pair("Small", "heading3")]);
    }

    #[test]
    fn test_heading_is_not_inline_tokenized() {
        assert_eq!(
            rendered("# **Loud** title"),
            vec![pair("**Loud** title", "heading1")]
        );
    }

    #[test]
    fn test_deep_or_unspaced_heading_is_paragraph() {
        assert_eq!(rendered("#### Four"), vec![pair("#### Four", "plain")]);
        assert_eq!(rendered("#tag"), vec![pair("#tag", "plain")]);
    }

    #[test]
    fn test_inline_line() {
        assert_eq!(
            rendered("**bold** and *italic* and ***both***"),
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
    fn test_blockquote_is_tagged_and_tokenized() {
        assert_eq!(
            rendered("> quoted *words*"),
            vec![
                pair("\u{276F} ", "blockquote"),
                pair("quoted ", "blockquote"),
                pair("words", "italic+blockquote"),
            ]
        );
    }

    #[test]
    fn test_bullets_scale_with_indent() {
        assert_eq!(
            rendered("- one\n  * two\n    + three"),
            vec![
                pair("\u{2022} ", "plain"),
                pair("one", "plain"),
                pair("\n", "plain"),
                pair("  \u{2022} ", "plain"),
                pair("two", "plain"),
                pair("\n", "plain"),
                pair("    \u{2022} ", "plain"),
                pair("three", "plain"),
            ]
        );
    }

    #[test]
    fn test_bullet_content_is_tokenized() {
        assert_eq!(
            rendered("* **done** `ok`"),
            vec![
                pair("\u{2022} ", "plain"),
                pair("done", "bold"),
                pair(" ", "plain"),
                pair("ok", "inline_code"),
            ]
        );
    }

    #[test]
    fn test_ordered_keeps_number() {
        assert_eq!(
            rendered("12. *twelfth*"),
            vec![pair("12. ", "plain"), pair("twelfth", "italic")]
        );
    }

    #[test]
    fn test_ascii_glyphs() {
        let theme = Theme::default().with_unicode(false);
        let runs = render("> q\n- b", &theme);
        assert_eq!(runs[0].text, "> ");
        assert_eq!(runs[3].text, "* ");
    }

    #[test]
    fn test_blank_line_is_a_break() {
        assert_eq!(
            rendered("a\n\nb"),
            vec![
                pair("a", "plain"),
                pair("\n", "plain"),
                pair("\n", "plain"),
                pair("b", "plain"),
            ]
        );
    }

    #[test]
    fn test_fenced_block_verbatim() {
        assert_eq!(
            rendered("```rust\nlet x = **y**;\n```\nafter"),
            vec![
                pair("[rust]", "code_block"),
                pair("\n", "plain"),
                pair("let x = **y**;", "code_block"),
                pair("\n", "plain"),
                pair("after", "plain"),
            ]
        );
    }

    #[test]
    fn test_fence_without_language_emits_nothing() {
        assert_eq!(
            rendered("```\ncode\n```"),
            vec![pair("code", "code_block")]
        );
    }

    #[test]
    fn test_markdown_inside_block_is_not_classified() {
        assert_eq!(
            rendered("```\n# not a heading\n- not a bullet\n```"),
            vec![
                pair("# not a heading", "code_block"),
                pair("\n", "plain"),
                pair("- not a bullet", "code_block"),
            ]
        );
    }

    #[test]
    fn test_unterminated_fence_runs_to_end() {
        let runs = render("intro\n```\n# one\n**two**", &Theme::default());
        let styles: Vec<_> = runs
            .iter()
            .filter(|run| !run.is_line_break())
            .map(|run| (run.text.as_str(), run.style))
            .collect();
        assert_eq!(
            styles,
            vec![
                ("intro", Style::PLAIN),
                ("# one", Style::CODE_BLOCK),
                ("**two**", Style::CODE_BLOCK),
            ]
        );
    }

    #[test]
    fn test_fence_line_toggles_regardless_of_trailing_text() {
        let theme = Theme::default();
        let mut renderer = Renderer::new(&theme);
        renderer.push_line("```python");
        assert!(renderer.in_code_block());
        renderer.push_line("``` trailing words");
        assert!(!renderer.in_code_block());
    }

    #[test]
    fn test_each_render_starts_outside_block() {
        let theme = Theme::default();
        let first = render("```\nopen", &theme);
        assert_eq!(first.last().map(|r| r.style), Some(Style::CODE_BLOCK));
        let second = render("plain", &theme);
        assert_eq!(second, vec![StyledRun::plain("plain")]);
    }

    #[test]
    fn test_lone_blank_line_renders_nothing() {
        assert!(render("\n", &Theme::default()).is_empty());
        assert!(render("   ", &Theme::default()).is_empty());
    }

    #[test]
    fn test_leading_blank_lines_each_add_one_break() {
        assert_eq!(
            rendered("\n\nx"),
            vec![pair("\n", "plain"), pair("\n", "plain"), pair("x", "plain")]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(render("", &Theme::default()).is_empty());
    }

    #[test]
    fn test_classify_order() {
        assert_eq!(
            LineKind::classify("```", Fence::Inside),
            LineKind::FenceClose
        );
        assert_eq!(
            LineKind::classify("# x", Fence::Inside),
            LineKind::Code("# x")
        );
        assert_eq!(
            LineKind::classify("   ", Fence::Outside),
            LineKind::Blank
        );
        assert_eq!(
            LineKind::classify("-dash", Fence::Outside),
            LineKind::Paragraph("-dash")
        );
        assert_eq!(
            LineKind::classify("1) no", Fence::Outside),
            LineKind::Paragraph("1) no")
        );
    }
}
