// Theme support for the TUI
//
// Provides color palettes that can be configured via config file.
// "auto" uses terminal's ANSI palette, named themes use true color (RGB).

use ratatui::style::Color;
use ratatui::widgets::BorderType;

/// Color palette for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // Board colors
    pub bit_set: Color,
    pub bit_clear: Color,
    pub preview: Color,
    pub labels: Color,
    pub value: Color,

    // UI element colors
    pub title: Color,
    pub status_bar: Color,
    pub border: Color,
    pub highlight: Color,
    pub key: Color,
    pub error: Color,
    pub foreground: Color,
    pub background: Color,
    pub border_type: BorderType,
}

impl Theme {
    /// Load theme by name
    ///
    /// `use_background` false keeps the terminal's own background.
    pub fn by_name(name: &str, use_background: bool) -> Self {
        let mut theme = match name.to_lowercase().as_str() {
            "dracula" => Self::dracula(),
            "nord" => Self::nord(),
            "gruvbox" => Self::gruvbox(),
            "monokai" => Self::monokai(),
            _ => Self::auto(), // "auto" or unknown
        };
        if !use_background {
            theme.background = Color::Reset;
        }
        theme
    }

    /// Names accepted by `by_name`
    pub fn names() -> &'static [&'static str] {
        &["auto", "dracula", "nord", "gruvbox", "monokai"]
    }

    /// Auto theme - uses terminal's ANSI palette
    pub fn auto() -> Self {
        Self {
            name: "auto".to_string(),
            bit_set: Color::Green,
            bit_clear: Color::DarkGray,
            preview: Color::Yellow,
            labels: Color::Gray,
            value: Color::Cyan,
            title: Color::Cyan,
            status_bar: Color::Green,
            border: Color::White,
            highlight: Color::Yellow,
            key: Color::Cyan,
            error: Color::Red,
            foreground: Color::Reset,
            background: Color::Reset,
            border_type: BorderType::Plain,
        }
    }

    /// Dracula theme - https://draculatheme.com
    pub fn dracula() -> Self {
        Self {
            name: "dracula".to_string(),
            bit_set: Color::Rgb(0x50, 0xfa, 0x7b),    // green
            bit_clear: Color::Rgb(0x62, 0x72, 0xa4),  // comment
            preview: Color::Rgb(0xff, 0xb8, 0x6c),    // orange
            labels: Color::Rgb(0xbd, 0x93, 0xf9),     // purple
            value: Color::Rgb(0x8b, 0xe9, 0xfd),      // cyan
            title: Color::Rgb(0x8b, 0xe9, 0xfd),      // cyan
            status_bar: Color::Rgb(0x50, 0xfa, 0x7b), // green
            border: Color::Rgb(0x62, 0x72, 0xa4),     // comment
            highlight: Color::Rgb(0xf1, 0xfa, 0x8c),  // yellow
            key: Color::Rgb(0xff, 0x79, 0xc6),        // pink
            error: Color::Rgb(0xff, 0x55, 0x55),      // red
            foreground: Color::Rgb(0xf8, 0xf8, 0xf2),
            background: Color::Rgb(0x28, 0x2a, 0x36),
            border_type: BorderType::Rounded,
        }
    }

    /// Nord theme - https://nordtheme.com
    pub fn nord() -> Self {
        Self {
            name: "nord".to_string(),
            bit_set: Color::Rgb(0xa3, 0xbe, 0x8c),    // aurora green
            bit_clear: Color::Rgb(0x4c, 0x56, 0x6a),  // polar night
            preview: Color::Rgb(0xd0, 0x87, 0x70),    // aurora orange
            labels: Color::Rgb(0x81, 0xa1, 0xc1),     // frost blue
            value: Color::Rgb(0x88, 0xc0, 0xd0),      // frost cyan
            title: Color::Rgb(0x88, 0xc0, 0xd0),      // frost cyan
            status_bar: Color::Rgb(0xa3, 0xbe, 0x8c), // green
            border: Color::Rgb(0x4c, 0x56, 0x6a),     // polar night
            highlight: Color::Rgb(0xeb, 0xcb, 0x8b),  // aurora yellow
            key: Color::Rgb(0x8f, 0xbc, 0xbb),        // frost teal
            error: Color::Rgb(0xbf, 0x61, 0x6a),      // aurora red
            foreground: Color::Rgb(0xd8, 0xde, 0xe9),
            background: Color::Rgb(0x2e, 0x34, 0x40),
            border_type: BorderType::Rounded,
        }
    }

    /// Gruvbox theme - https://github.com/morhetz/gruvbox
    pub fn gruvbox() -> Self {
        Self {
            name: "gruvbox".to_string(),
            bit_set: Color::Rgb(0xb8, 0xbb, 0x26),    // green
            bit_clear: Color::Rgb(0x92, 0x83, 0x74),  // gray
            preview: Color::Rgb(0xfe, 0x80, 0x19),    // orange
            labels: Color::Rgb(0xd3, 0x86, 0x9b),     // purple
            value: Color::Rgb(0x83, 0xa5, 0x98),      // aqua
            title: Color::Rgb(0x83, 0xa5, 0x98),      // aqua
            status_bar: Color::Rgb(0xb8, 0xbb, 0x26), // green
            border: Color::Rgb(0x92, 0x83, 0x74),     // gray
            highlight: Color::Rgb(0xfa, 0xbd, 0x2f),  // yellow
            key: Color::Rgb(0x8e, 0xc0, 0x7c),        // bright aqua
            error: Color::Rgb(0xfb, 0x49, 0x34),      // red
            foreground: Color::Rgb(0xeb, 0xdb, 0xb2),
            background: Color::Rgb(0x28, 0x28, 0x28),
            border_type: BorderType::Plain,
        }
    }

    /// Monokai Pro theme
    pub fn monokai() -> Self {
        Self {
            name: "monokai".to_string(),
            bit_set: Color::Rgb(0xa6, 0xe2, 0x2e),    // green
            bit_clear: Color::Rgb(0x75, 0x71, 0x5e),  // comment
            preview: Color::Rgb(0xfd, 0x97, 0x1f),    // orange
            labels: Color::Rgb(0xae, 0x81, 0xff),     // purple
            value: Color::Rgb(0x66, 0xd9, 0xef),      // blue
            title: Color::Rgb(0x66, 0xd9, 0xef),      // blue
            status_bar: Color::Rgb(0xa6, 0xe2, 0x2e), // green
            border: Color::Rgb(0x75, 0x71, 0x5e),     // comment
            highlight: Color::Rgb(0xe6, 0xdb, 0x74),  // yellow
            key: Color::Rgb(0xf9, 0x26, 0x72),        // pink
            error: Color::Rgb(0xf9, 0x26, 0x72),      // pink/red
            foreground: Color::Rgb(0xf8, 0xf8, 0xf2),
            background: Color::Rgb(0x27, 0x28, 0x22),
            border_type: BorderType::Plain,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::auto()
    }
}
