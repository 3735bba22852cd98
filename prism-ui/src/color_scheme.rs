//! Light and dark appearance schemes.
//!
//! The scheme is the only input needed to turn a semantic [`Color`] into a
//! concrete one. The label hierarchy below mirrors the host platform's label
//! colors so text drawn with [`Color::SECONDARY`] and friends matches native
//! controls next to it.

use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::color::{Color, Rgba, SemanticColor};

/// Label colors indexed by `[scheme][tag]`.
const LABEL_COLORS: [[Rgba; 4]; 2] = [
    // Light
    [
        Rgba::new(0.00, 0.00, 0.00, 1.00),
        Rgba::new(0.235, 0.235, 0.263, 0.60),
        Rgba::new(0.235, 0.235, 0.263, 0.30),
        Rgba::new(0.235, 0.235, 0.263, 0.18),
    ],
    // Dark
    [
        Rgba::new(1.00, 1.00, 1.00, 1.00),
        Rgba::new(0.922, 0.922, 0.961, 0.60),
        Rgba::new(0.922, 0.922, 0.961, 0.30),
        Rgba::new(0.922, 0.922, 0.961, 0.18),
    ],
];

/// The active appearance mode.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ColorScheme {
    /// Dark content on a light background.
    #[default]
    Light,
    /// Light content on a dark background.
    Dark,
}

impl ColorScheme {
    /// Both schemes, in table order.
    pub const ALL: [ColorScheme; 2] = [ColorScheme::Light, ColorScheme::Dark];

    /// Returns the other scheme.
    ///
    /// ```
    /// use prism_ui::ColorScheme;
    ///
    /// assert_eq!(ColorScheme::Light.opposite(), ColorScheme::Dark);
    /// assert_eq!(ColorScheme::Dark.opposite().opposite(), ColorScheme::Dark);
    /// ```
    pub const fn opposite(self) -> ColorScheme {
        match self {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        }
    }

    /// Whether this is [`ColorScheme::Dark`].
    pub const fn is_dark(self) -> bool {
        matches!(self, ColorScheme::Dark)
    }

    /// Foreground used when nothing more specific is set: black on light,
    /// white on dark.
    pub const fn default_foreground_color(self) -> Color {
        match self {
            ColorScheme::Light => Color::BLACK,
            ColorScheme::Dark => Color::WHITE,
        }
    }

    /// Returns the concrete color for `tag` in this scheme.
    pub const fn color_for(self, tag: SemanticColor) -> Color {
        Color::Concrete(self.rgba_for(tag))
    }

    /// Returns the raw RGBA value for `tag` in this scheme.
    pub const fn rgba_for(self, tag: SemanticColor) -> Rgba {
        LABEL_COLORS[self as usize][tag.index()]
    }

    /// Lowercase name of the scheme.
    pub const fn name(self) -> &'static str {
        match self {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string names neither `light` nor `dark`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown color scheme `{0}`, expected `light` or `dark`")]
pub struct ParseColorSchemeError(pub String);

impl FromStr for ColorScheme {
    type Err = ParseColorSchemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ColorScheme::ALL
            .into_iter()
            .find(|scheme| scheme.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseColorSchemeError(s.to_owned()))
    }
}
