//! Style themes: presentation attributes per style tag, plus glyphs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::style::{Style, StyleTag};
use crate::error::CaldrasError;

/// 24-bit colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    const fn hex(value: u32) -> Rgb {
        Rgb((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// How a run should look on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Attributes {
    pub foreground: Option<Rgb>,
    pub background: Option<Rgb>,
    pub bold: bool,
    pub italic: bool,
}

impl Attributes {
    const fn fg(color: Rgb) -> Self {
        Self {
            foreground: Some(color),
            background: None,
            bold: false,
            italic: false,
        }
    }

    const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    const fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    const fn on(mut self, color: Rgb) -> Self {
        self.background = Some(color);
        self
    }

    /// Layer `over` on top: colours replace, flags accumulate.
    pub fn merge(self, over: Attributes) -> Attributes {
        Attributes {
            foreground: over.foreground.or(self.foreground),
            background: over.background.or(self.background),
            bold: self.bold || over.bold,
            italic: self.italic || over.italic,
        }
    }
}

/// Symbol pair for ASCII and Unicode variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolPair {
    pub ascii: &'static str,
    pub unicode: &'static str,
}

impl SymbolPair {
    pub const fn new(ascii: &'static str, unicode: &'static str) -> Self {
        Self { ascii, unicode }
    }

    /// Get the appropriate symbol based on unicode flag.
    pub fn get(&self, unicode: bool) -> &'static str {
        if unicode {
            self.unicode
        } else {
            self.ascii
        }
    }
}

const QUOTE_GLYPH: SymbolPair = SymbolPair::new("> ", "\u{276F} "); // ❯
const BULLET_GLYPH: SymbolPair = SymbolPair::new("* ", "\u{2022} "); // •

/// Built-in theme names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeName {
    #[default]
    AlienDark,
    AlienLight,
}

impl ThemeName {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeName::AlienDark => "alien-dark",
            ThemeName::AlienLight => "alien-light",
        }
    }

    pub fn toggled(self) -> ThemeName {
        match self {
            ThemeName::AlienDark => ThemeName::AlienLight,
            ThemeName::AlienLight => ThemeName::AlienDark,
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeName {
    type Err = CaldrasError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "alien-dark" | "dark" => Ok(ThemeName::AlienDark),
            "alien-light" | "light" => Ok(ThemeName::AlienLight),
            other => Err(CaldrasError::InvalidInput(format!(
                "Unknown theme '{}' (expected alien-dark or alien-light)",
                other
            ))),
        }
    }
}

struct Palette {
    normal: Rgb,
    header: Rgb,
    bold: Rgb,
    italic: Rgb,
    code: Rgb,
    code_background: Rgb,
}

const DARK: Palette = Palette {
    normal: Rgb::hex(0xc6f6ff),
    header: Rgb::hex(0x76f6ff),
    bold: Rgb::hex(0xffffff),
    italic: Rgb::hex(0xb9e3ff),
    code: Rgb::hex(0xffb347),
    code_background: Rgb::hex(0x2d2d2d),
};

const LIGHT: Palette = Palette {
    normal: Rgb::hex(0x28323a),
    header: Rgb::hex(0x37a3c6),
    bold: Rgb::hex(0x000000),
    italic: Rgb::hex(0x555555),
    code: Rgb::hex(0xd63384),
    code_background: Rgb::hex(0xf5f5f5),
};

/// Mapping from style tag to presentation attributes.
///
/// Passed explicitly to the renderer; there is no process-wide theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    name: ThemeName,
    unicode: bool,
    base: Attributes,
    tags: [Attributes; StyleTag::ALL.len()],
}

impl Theme {
    pub fn named(name: ThemeName) -> Self {
        let palette = match name {
            ThemeName::AlienDark => &DARK,
            ThemeName::AlienLight => &LIGHT,
        };
        let code = Attributes::fg(palette.code).on(palette.code_background);
        let tags = StyleTag::ALL.map(|tag| match tag {
            StyleTag::Heading1 | StyleTag::Heading2 | StyleTag::Heading3 => {
                Attributes::fg(palette.header).bold()
            }
            StyleTag::Bold => Attributes::fg(palette.bold).bold(),
            StyleTag::Italic => Attributes::fg(palette.italic).italic(),
            StyleTag::InlineCode | StyleTag::CodeBlock => code,
            StyleTag::Blockquote => Attributes::fg(palette.italic).italic(),
        });
        Self {
            name,
            unicode: true,
            base: Attributes::fg(palette.normal),
            tags,
        }
    }

    pub fn alien_dark() -> Self {
        Self::named(ThemeName::AlienDark)
    }

    pub fn alien_light() -> Self {
        Self::named(ThemeName::AlienLight)
    }

    /// Use ASCII glyphs when `unicode` is false.
    pub fn with_unicode(mut self, unicode: bool) -> Self {
        self.unicode = unicode;
        self
    }

    pub fn name(&self) -> ThemeName {
        self.name
    }

    pub fn unicode(&self) -> bool {
        self.unicode
    }

    /// The other built-in theme, keeping the glyph setting.
    pub fn toggled(&self) -> Theme {
        Theme::named(self.name.toggled()).with_unicode(self.unicode)
    }

    pub fn tag_attributes(&self, tag: StyleTag) -> Attributes {
        self.tags[tag as usize]
    }

    /// Attributes for a run: the base text attributes with every tag layered on.
    pub fn attributes(&self, style: Style) -> Attributes {
        style
            .tags()
            .fold(self.base, |acc, tag| acc.merge(self.tag_attributes(tag)))
    }

    pub fn quote_glyph(&self) -> &'static str {
        QUOTE_GLYPH.get(self.unicode)
    }

    pub fn bullet_glyph(&self) -> &'static str {
        BULLET_GLYPH.get(self.unicode)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::alien_dark()
    }
}
