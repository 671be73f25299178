//! Styled label values passed from name formatting to the renderer.
//!
//! A [`Label`] carries the text together with its color tag and whether it
//! must be drawn with the substitute glyph font. The renderer applies both;
//! no control characters are embedded in the text itself.

use std::fmt;

use crate::color::Color;

/// The sixteen named text colors of the host's chat palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
}

impl TextColor {
    /// Opaque RGB value of this palette entry.
    pub const fn rgb(self) -> Color {
        match self {
            Self::Black => Color::from_hex(0x000000),
            Self::DarkBlue => Color::from_hex(0x0000AA),
            Self::DarkGreen => Color::from_hex(0x00AA00),
            Self::DarkAqua => Color::from_hex(0x00AAAA),
            Self::DarkRed => Color::from_hex(0xAA0000),
            Self::DarkPurple => Color::from_hex(0xAA00AA),
            Self::Gold => Color::from_hex(0xFFAA00),
            Self::Gray => Color::from_hex(0xAAAAAA),
            Self::DarkGray => Color::from_hex(0x555555),
            Self::Blue => Color::from_hex(0x5555FF),
            Self::Green => Color::from_hex(0x55FF55),
            Self::Aqua => Color::from_hex(0x55FFFF),
            Self::Red => Color::from_hex(0xFF5555),
            Self::LightPurple => Color::from_hex(0xFF55FF),
            Self::Yellow => Color::from_hex(0xFFFF55),
            Self::White => Color::from_hex(0xFFFFFF),
        }
    }

    /// Lowercase snake_case name, as used in settings and logs.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::DarkBlue => "dark_blue",
            Self::DarkGreen => "dark_green",
            Self::DarkAqua => "dark_aqua",
            Self::DarkRed => "dark_red",
            Self::DarkPurple => "dark_purple",
            Self::Gold => "gold",
            Self::Gray => "gray",
            Self::DarkGray => "dark_gray",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Aqua => "aqua",
            Self::Red => "red",
            Self::LightPurple => "light_purple",
            Self::Yellow => "yellow",
            Self::White => "white",
        }
    }
}

impl fmt::Display for TextColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A run of text with its color tag and font selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub text: String,
    pub color: TextColor,
    /// Draw with the substitute glyph font instead of the regular font.
    pub glyph: bool,
}

impl Label {
    pub fn new(text: impl Into<String>, color: TextColor) -> Self {
        Self {
            text: text.into(),
            color,
            glyph: false,
        }
    }

    /// A label drawn in the glyph font.
    pub fn glyph(text: impl Into<String>, color: TextColor) -> Self {
        Self {
            text: text.into(),
            color,
            glyph: true,
        }
    }

    /// Final draw color: the label's palette color with the tint's alpha.
    ///
    /// The tint only contributes translucency; its RGB is overridden by the
    /// color tag.
    pub fn resolve_color(&self, tint: Color) -> Color {
        self.color.rgb().with_alpha(tint.a)
    }
}
