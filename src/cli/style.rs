//! Terminal styling helpers
//!
//! Semantic styling via the [`Stylize`] extension trait; color support
//! detection (NO_COLOR, CLICOLOR, TTY) is delegated to `owo-colors`.

use std::fmt::{self, Display};

pub use owo_colors::Stream;
use owo_colors::{OwoColorize, Style};

const ACCENT: Style = Style::new().cyan();
const SUCCESS: Style = Style::new().green();
const ERROR: Style = Style::new().red();
const WARN: Style = Style::new().yellow();
const MUTED: Style = Style::new().dimmed();
const EMPHASIS: Style = Style::new().bold();

/// A value rendered with a semantic style when the stream supports color
#[derive(Clone, Debug)]
pub struct Styled<T> {
    value: T,
    style: Style,
    stream: Stream,
}

impl<T: Display> Display for Styled<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.value
                .if_supports_color(self.stream, |v| v.style(self.style))
        )
    }
}

/// Extension trait for semantic terminal styling
///
/// Implemented for all [`Display`] types; methods borrow so styled output
/// can wrap borrowed data.
pub trait Stylize: Display {
    /// Cyan, for primary information: sites, URLs, counts
    fn accent(&self) -> Styled<&Self> {
        styled(self, ACCENT, Stream::Stdout)
    }

    /// Green, for completed operations
    fn success(&self) -> Styled<&Self> {
        styled(self, SUCCESS, Stream::Stdout)
    }

    /// Red, for failures (stderr detection)
    fn error(&self) -> Styled<&Self> {
        styled(self, ERROR, Stream::Stderr)
    }

    /// Yellow, for partial failures and attention states
    fn warn(&self) -> Styled<&Self> {
        styled(self, WARN, Stream::Stdout)
    }

    /// Dimmed, for secondary detail
    fn muted(&self) -> Styled<&Self> {
        styled(self, MUTED, Stream::Stdout)
    }

    /// Bold, for headers and key facts
    fn emphasis(&self) -> Styled<&Self> {
        styled(self, EMPHASIS, Stream::Stdout)
    }
}

impl<T: Display + ?Sized> Stylize for T {}

const fn styled<T>(value: T, style: Style, stream: Stream) -> Styled<T> {
    Styled {
        value,
        style,
        stream,
    }
}

/// Success checkmark
pub const CHECK: &str = "✓";

/// Failure cross
pub const CROSS: &str = "✗";

/// List bullet
pub const BULLET: &str = "○";

/// Green checkmark for success states
#[inline]
pub const fn check() -> Styled<&'static str> {
    styled(CHECK, SUCCESS, Stream::Stdout)
}

/// Red cross for failure states
#[inline]
pub const fn cross() -> Styled<&'static str> {
    styled(CROSS, ERROR, Stream::Stderr)
}

/// Dimmed bullet for list items
#[inline]
pub const fn bullet() -> Styled<&'static str> {
    styled(BULLET, MUTED, Stream::Stdout)
}

/// Render a URL as a clickable OSC 8 hyperlink where supported
pub fn hyperlink_url(url: &str) -> String {
    if supports_hyperlinks::on(supports_hyperlinks::Stream::Stdout) {
        terminal_link::Link::new(url, url).to_string()
    } else {
        url.to_string()
    }
}

/// Spinner style for the sequential inspection pass
pub fn spinner_style() -> indicatif::ProgressStyle {
    use std::sync::OnceLock;
    static STYLE: OnceLock<indicatif::ProgressStyle> = OnceLock::new();
    STYLE
        .get_or_init(|| {
            indicatif::ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .expect("hardcoded spinner template is valid")
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
        })
        .clone()
}
