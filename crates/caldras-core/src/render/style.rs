//! Style tags and styled runs.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

/// A single presentation tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleTag {
    Heading1,
    Heading2,
    Heading3,
    Bold,
    Italic,
    InlineCode,
    Blockquote,
    CodeBlock,
}

impl StyleTag {
    pub const ALL: [StyleTag; 8] = [
        StyleTag::Heading1,
        StyleTag::Heading2,
        StyleTag::Heading3,
        StyleTag::Bold,
        StyleTag::Italic,
        StyleTag::InlineCode,
        StyleTag::Blockquote,
        StyleTag::CodeBlock,
    ];

    const fn bit(self) -> u16 {
        1 << self as u16
    }

    pub fn name(self) -> &'static str {
        match self {
            StyleTag::Heading1 => "heading1",
            StyleTag::Heading2 => "heading2",
            StyleTag::Heading3 => "heading3",
            StyleTag::Bold => "bold",
            StyleTag::Italic => "italic",
            StyleTag::InlineCode => "inline_code",
            StyleTag::Blockquote => "blockquote",
            StyleTag::CodeBlock => "code_block",
        }
    }
}

/// A set of style tags. The empty set is `plain`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style(u16);

impl Style {
    pub const PLAIN: Style = Style(0);
    pub const HEADING1: Style = Style(StyleTag::Heading1.bit());
    pub const HEADING2: Style = Style(StyleTag::Heading2.bit());
    pub const HEADING3: Style = Style(StyleTag::Heading3.bit());
    pub const BOLD: Style = Style(StyleTag::Bold.bit());
    pub const ITALIC: Style = Style(StyleTag::Italic.bit());
    pub const BOLD_ITALIC: Style = Style(StyleTag::Bold.bit() | StyleTag::Italic.bit());
    pub const INLINE_CODE: Style = Style(StyleTag::InlineCode.bit());
    pub const BLOCKQUOTE: Style = Style(StyleTag::Blockquote.bit());
    pub const CODE_BLOCK: Style = Style(StyleTag::CodeBlock.bit());

    /// Heading style for levels 1 to 3; other levels are plain.
    pub fn heading(level: u8) -> Style {
        match level {
            1 => Style::HEADING1,
            2 => Style::HEADING2,
            3 => Style::HEADING3,
            _ => Style::PLAIN,
        }
    }

    pub const fn union(self, other: Style) -> Style {
        Style(self.0 | other.0)
    }

    pub fn contains(self, tag: StyleTag) -> bool {
        self.0 & tag.bit() != 0
    }

    pub fn is_plain(self) -> bool {
        self.0 == 0
    }

    /// Tags in declaration order.
    pub fn tags(self) -> impl Iterator<Item = StyleTag> {
        StyleTag::ALL.into_iter().filter(move |tag| self.contains(*tag))
    }
}

impl From<StyleTag> for Style {
    fn from(tag: StyleTag) -> Self {
        Style(tag.bit())
    }
}

impl std::ops::BitOr for Style {
    type Output = Style;

    fn bitor(self, rhs: Style) -> Style {
        self.union(rhs)
    }
}

/// `plain`, or tag names joined with `+` (e.g. `bold+italic`).
impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_plain() {
            return f.write_str("plain");
        }
        let names: Vec<&str> = self.tags().map(StyleTag::name).collect();
        f.write_str(&names.join("+"))
    }
}

impl Serialize for Style {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A contiguous slice of rendered text with its style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyledRun {
    pub text: String,
    pub style: Style,
}

impl StyledRun {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Style::PLAIN)
    }

    pub fn line_break() -> Self {
        Self::plain("\n")
    }

    pub fn is_line_break(&self) -> bool {
        self.style.is_plain() && self.text == "\n"
    }
}

/// Append a run, dropping empty text.
pub(crate) fn push_run(out: &mut Vec<StyledRun>, text: &str, style: Style) {
    if !text.is_empty() {
        out.push(StyledRun::new(text, style));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names() {
        assert_eq!(Style::PLAIN.to_string(), "plain");
        assert_eq!(Style::BOLD_ITALIC.to_string(), "bold+italic");
        assert_eq!(
            (Style::BLOCKQUOTE | Style::INLINE_CODE).to_string(),
            "inline_code+blockquote"
        );
    }

    #[test]
    fn test_contains_and_tags() {
        let style = Style::BOLD | Style::BLOCKQUOTE;
        assert!(style.contains(StyleTag::Bold));
        assert!(style.contains(StyleTag::Blockquote));
        assert!(!style.contains(StyleTag::Italic));
        assert_eq!(
            style.tags().collect::<Vec<_>>(),
            vec![StyleTag::Bold, StyleTag::Blockquote]
        );
    }

    #[test]
    fn test_heading_levels() {
        assert_eq!(Style::heading(1), Style::HEADING1);
        assert_eq!(Style::heading(3), Style::HEADING3);
        assert_eq!(Style::heading(4), Style::PLAIN);
    }

    #[test]
    fn test_run_serializes_style_as_string() {
        let run = StyledRun::new("both", Style::BOLD_ITALIC);
        let value = serde_json::to_value(&run).unwrap();
        assert_eq!(value["style"], "bold+italic");
        assert_eq!(value["text"], "both");
    }
}
