//! Terminal style palette
//!
//! The fixed set of text decorations the report uses, and the policy for
//! whether they are emitted at all.

use clap::ValueEnum;
use colored::Color;

/// Select Graphic Rendition sequence that clears every decoration
pub const SGR_RESET: &str = "\x1b[0m";

/// A named text decoration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Bright magenta, used for the welcome header
    Header,
    /// Bright blue, used for variable labels
    Blue,
    /// Bright cyan, used for section titles
    Cyan,
    /// Bright green, used for values and success lines
    Green,
    /// Bright yellow, used for informational lines
    Yellow,
    /// Bright red
    Red,
    /// Clears every decoration applied before it
    Reset,
    /// Bold weight
    Bold,
    /// Underline
    Underline,
}

impl Style {
    /// Every style in the palette
    pub const ALL: [Self; 9] = [
        Self::Header,
        Self::Blue,
        Self::Cyan,
        Self::Green,
        Self::Yellow,
        Self::Red,
        Self::Reset,
        Self::Bold,
        Self::Underline,
    ];

    /// Foreground color of this style, if it is a color
    #[must_use]
    pub const fn color(self) -> Option<Color> {
        match self {
            Self::Header => Some(Color::BrightMagenta),
            Self::Blue => Some(Color::BrightBlue),
            Self::Cyan => Some(Color::BrightCyan),
            Self::Green => Some(Color::BrightGreen),
            Self::Yellow => Some(Color::BrightYellow),
            Self::Red => Some(Color::BrightRed),
            Self::Reset | Self::Bold | Self::Underline => None,
        }
    }

    /// SGR parameter for this style (`"95"`, `"1"`, ...)
    #[must_use]
    pub fn code(self) -> String {
        match self {
            Self::Reset => "0".to_string(),
            Self::Bold => "1".to_string(),
            Self::Underline => "4".to_string(),
            _ => self
                .color()
                .map_or_else(String::new, |color| color.to_fg_str().to_string()),
        }
    }
}

/// Escape sequence that turns on `styles`, or `None` if they cancel out.
///
/// A `Reset` drops every style listed before it.
#[must_use]
pub fn prefix(styles: &[Style]) -> Option<String> {
    let codes = styles.iter().fold(Vec::new(), |mut codes, style| {
        if *style == Style::Reset {
            codes.clear();
        } else {
            codes.push(style.code());
        }
        codes
    });
    (!codes.is_empty()).then(|| format!("\x1b[{}m", codes.join(";")))
}

/// Wrap `text` in the escape sequences for `styles`.
///
/// The text is written as-is between the prefix and the reset, including any
/// escape sequences it already contains.
#[must_use]
pub fn paint(text: &str, styles: &[Style]) -> String {
    prefix(styles).map_or_else(|| text.to_string(), |on| format!("{on}{text}{SGR_RESET}"))
}

/// When to emit ANSI escape sequences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorMode {
    /// Always emit, even when stdout is not a terminal
    #[default]
    Always,
    /// Emit only when stdout is a terminal and `NO_COLOR`/`CLICOLOR` allow it
    Auto,
    /// Never emit
    Never,
}

impl ColorMode {
    /// Whether this mode colors output in the current process.
    #[must_use]
    pub fn resolve(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => colored::control::ShouldColorize::from_env().should_colorize(),
        }
    }
}
