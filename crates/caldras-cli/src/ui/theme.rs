//! Badges, terminal styles, and the bridge from markdown attributes to owo-colors.

use owo_colors::{OwoColorize, Style};

use caldras_core::render::Attributes;

/// Badge types for status indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Ok,
    Warn,
    Err,
    Info,
}

impl Badge {
    /// Get badge text (e.g., "[OK]")
    #[cfg(test)]
    pub fn text(&self) -> &'static str {
        match self {
            Self::Ok => "[OK]",
            Self::Warn => "[WARN]",
            Self::Err => "[ERR]",
            Self::Info => "[INFO]",
        }
    }

    /// Get badge with symbol for display.
    pub fn display(&self, unicode: bool) -> &'static str {
        match (self, unicode) {
            (Self::Ok, true) => "[\u{2713}]",   // [✓]
            (Self::Ok, false) => "[OK]",
            (Self::Warn, true) => "[\u{26A0}]", // [⚠]
            (Self::Warn, false) => "[WARN]",
            (Self::Err, true) => "[\u{2717}]",  // [✗]
            (Self::Err, false) => "[ERR]",
            (Self::Info, true) => "[\u{2139}]", // [ℹ]
            (Self::Info, false) => "[INFO]",
        }
    }

    pub fn style(&self) -> Style {
        match self {
            Self::Ok => styles::success(),
            Self::Warn => styles::warning(),
            Self::Err => styles::error(),
            Self::Info => styles::info(),
        }
    }
}

/// Common styles.
pub mod styles {
    use owo_colors::Style;

    pub fn bold() -> Style {
        Style::new().bold()
    }

    pub fn dim() -> Style {
        Style::new().dimmed()
    }

    pub fn success() -> Style {
        Style::new().green().bold()
    }

    pub fn warning() -> Style {
        Style::new().yellow().bold()
    }

    pub fn error() -> Style {
        Style::new().red().bold()
    }

    pub fn info() -> Style {
        Style::new().cyan()
    }
}

/// Apply `style` to `text` when color is enabled.
pub fn styled(text: &str, style: Style, color: bool) -> String {
    if color {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}

/// Terminal style for a themed run.
pub fn attributes_style(attrs: Attributes) -> Style {
    let mut style = Style::new();
    if let Some(fg) = attrs.foreground {
        style = style.truecolor(fg.0, fg.1, fg.2);
    }
    if let Some(bg) = attrs.background {
        style = style.on_truecolor(bg.0, bg.1, bg.2);
    }
    if attrs.bold {
        style = style.bold();
    }
    if attrs.italic {
        style = style.italic();
    }
    style
}
