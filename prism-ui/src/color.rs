//! Scheme-adaptive colors.
//!
//! A [`Color`] is either a concrete RGBA value or a semantic placeholder whose
//! concrete value is only known once a [`ColorScheme`] is supplied. Views keep
//! the unresolved `Color` in their state and call [`Color::resolve`] (or
//! [`Color::resolve_rgba`]) on every update pass, so a scheme change is picked
//! up without rebuilding the color.
//!
//! # Example
//!
//! ```
//! use prism_ui::{Color, ColorScheme};
//!
//! let label = Color::PRIMARY;
//! assert_eq!(label.resolve(ColorScheme::Light), Color::BLACK);
//! assert_eq!(label.resolve(ColorScheme::Dark), Color::WHITE);
//!
//! // Concrete colors are unaffected by the scheme.
//! assert_eq!(Color::RED.resolve(ColorScheme::Dark), Color::RED);
//! ```

use std::str::FromStr;

use bytemuck::{Pod, Zeroable};
use thiserror::Error;
use tracing::trace;

use crate::color_scheme::ColorScheme;

/// A concrete color with straight (non-premultiplied) alpha.
///
/// Components are `f32`s nominally in `[0.0, 1.0]`. Nothing in this crate
/// clamps them; out-of-range values reach the rendering bridge unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)] // Uploaded as-is by GPU-backed bridges
pub struct Rgba {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Rgba {
    /// Creates a new `Rgba` from four `f32` values.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a new opaque `Rgba` from three `f32` values.
    #[inline]
    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Creates a new `Rgba` from four `u8` values.
    #[inline]
    pub fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: f32::from(r) / 255.0,
            g: f32::from(g) / 255.0,
            b: f32::from(b) / 255.0,
            a: f32::from(a) / 255.0,
        }
    }

    /// Creates a new opaque `Rgba` from three `u8` values.
    #[inline]
    pub fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba_u8(r, g, b, 255)
    }

    /// Converts the color to `[r, g, b, a]`.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[f32; 4]> for Rgba {
    #[inline]
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Self { r, g, b, a }
    }
}

impl From<[f32; 3]> for Rgba {
    #[inline]
    fn from([r, g, b]: [f32; 3]) -> Self {
        Self::from_rgb(r, g, b)
    }
}

impl From<[u8; 4]> for Rgba {
    #[inline]
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::from_rgba_u8(r, g, b, a)
    }
}

impl From<[u8; 3]> for Rgba {
    #[inline]
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::from_rgb_u8(r, g, b)
    }
}

impl From<Rgba> for [f32; 4] {
    #[inline]
    fn from(color: Rgba) -> Self {
        color.to_array()
    }
}

/// Semantic label roles, ordered by decreasing emphasis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SemanticColor {
    /// Primary content such as body text.
    Primary,
    /// Secondary content such as subtitles.
    Secondary,
    /// Tertiary content such as placeholder text.
    Tertiary,
    /// Quaternary content such as disabled text.
    Quaternary,
}

impl SemanticColor {
    /// Every semantic role, in table order.
    pub const ALL: [SemanticColor; 4] = [
        SemanticColor::Primary,
        SemanticColor::Secondary,
        SemanticColor::Tertiary,
        SemanticColor::Quaternary,
    ];

    /// Lowercase name of the role.
    pub const fn name(self) -> &'static str {
        match self {
            SemanticColor::Primary => "primary",
            SemanticColor::Secondary => "secondary",
            SemanticColor::Tertiary => "tertiary",
            SemanticColor::Quaternary => "quaternary",
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

/// A color that is either fixed or resolved against the active scheme.
///
/// The semantic variant has no RGB components at all, so nothing can read a
/// placeholder value by accident. It does carry the opacity multiplier
/// accumulated through [`Color::opacity`], which is applied to the alpha of
/// the scheme's color at resolution time.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Color {
    /// A fixed RGBA value.
    Concrete(Rgba),
    /// A placeholder resolved through [`ColorScheme::color_for`].
    Semantic {
        /// The role this color stands for.
        tag: SemanticColor,
        /// Pending alpha multiplier, `1.0` unless [`Color::opacity`] was used.
        opacity: f32,
    },
}

impl Color {
    /// Opaque black.
    pub const BLACK: Color = Color::rgb(0.00, 0.00, 0.00);
    /// Opaque white.
    pub const WHITE: Color = Color::rgb(1.00, 1.00, 1.00);
    /// Opaque gray.
    pub const GRAY: Color = Color::rgb(0.56, 0.56, 0.58);
    /// Fully transparent. The RGB channels are mid-gray, not black.
    pub const CLEAR: Color = Color::new(0.50, 0.50, 0.50, 0.00);
    /// Opaque red.
    pub const RED: Color = Color::rgb(1.00, 0.23, 0.19);
    /// Opaque orange.
    pub const ORANGE: Color = Color::rgb(1.00, 0.58, 0.00);
    /// Opaque yellow.
    pub const YELLOW: Color = Color::rgb(1.00, 0.80, 0.00);
    /// Opaque green.
    pub const GREEN: Color = Color::rgb(0.20, 0.78, 0.35);
    /// Opaque teal.
    pub const TEAL: Color = Color::rgb(0.19, 0.69, 0.78);
    /// Opaque cyan.
    pub const CYAN: Color = Color::rgb(0.20, 0.68, 0.90);
    /// Opaque blue.
    pub const BLUE: Color = Color::rgb(0.00, 0.48, 1.00);
    /// Opaque indigo.
    pub const INDIGO: Color = Color::rgb(0.35, 0.34, 0.84);
    /// Opaque purple.
    pub const PURPLE: Color = Color::rgb(0.69, 0.32, 0.87);
    /// Opaque pink.
    pub const PINK: Color = Color::rgb(1.00, 0.18, 0.33);
    /// Opaque brown.
    pub const BROWN: Color = Color::rgb(0.64, 0.52, 0.37);

    /// Primary label color of the active scheme.
    pub const PRIMARY: Color = Color::semantic(SemanticColor::Primary);
    /// Secondary label color of the active scheme.
    pub const SECONDARY: Color = Color::semantic(SemanticColor::Secondary);
    /// Tertiary label color of the active scheme.
    pub const TERTIARY: Color = Color::semantic(SemanticColor::Tertiary);
    /// Quaternary label color of the active scheme.
    pub const QUATERNARY: Color = Color::semantic(SemanticColor::Quaternary);

    /// Every named color, looked up by [`Color::from_name`].
    pub const NAMED: &'static [(&'static str, Color)] = &[
        ("black", Color::BLACK),
        ("white", Color::WHITE),
        ("gray", Color::GRAY),
        ("clear", Color::CLEAR),
        ("red", Color::RED),
        ("orange", Color::ORANGE),
        ("yellow", Color::YELLOW),
        ("green", Color::GREEN),
        ("teal", Color::TEAL),
        ("cyan", Color::CYAN),
        ("blue", Color::BLUE),
        ("indigo", Color::INDIGO),
        ("purple", Color::PURPLE),
        ("pink", Color::PINK),
        ("brown", Color::BROWN),
        ("primary", Color::PRIMARY),
        ("secondary", Color::SECONDARY),
        ("tertiary", Color::TERTIARY),
        ("quaternary", Color::QUATERNARY),
    ];

    /// Creates a concrete color. Components are stored as given.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Color::Concrete(Rgba::new(r, g, b, a))
    }

    /// Creates an opaque concrete color.
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Color::Concrete(Rgba::from_rgb(r, g, b))
    }

    /// Creates a semantic placeholder for `tag`.
    #[inline]
    pub const fn semantic(tag: SemanticColor) -> Self {
        Color::Semantic { tag, opacity: 1.0 }
    }

    /// Creates a concrete color from four `u8` values.
    #[inline]
    pub fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color::Concrete(Rgba::from_rgba_u8(r, g, b, a))
    }

    /// Creates an opaque concrete color from three `u8` values.
    #[inline]
    pub fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Color::Concrete(Rgba::from_rgb_u8(r, g, b))
    }

    /// Looks up a named palette or semantic color, ignoring ASCII case.
    ///
    /// ```
    /// use prism_ui::Color;
    ///
    /// assert_eq!(Color::from_name("Teal"), Some(Color::TEAL));
    /// assert_eq!(Color::from_name("secondary"), Some(Color::SECONDARY));
    /// assert_eq!(Color::from_name("mauve"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Color> {
        Self::NAMED
            .iter()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
            .map(|(_, color)| *color)
    }

    /// Returns the semantic role, or `None` for concrete colors.
    pub const fn semantic_tag(&self) -> Option<SemanticColor> {
        match self {
            Color::Concrete(_) => None,
            Color::Semantic { tag, .. } => Some(*tag),
        }
    }

    /// Whether this color depends on the active scheme.
    pub const fn is_semantic(&self) -> bool {
        matches!(self, Color::Semantic { .. })
    }

    /// Returns the RGBA value of a concrete color.
    pub const fn as_concrete(&self) -> Option<Rgba> {
        match self {
            Color::Concrete(rgba) => Some(*rgba),
            Color::Semantic { .. } => None,
        }
    }

    /// Resolves this color for `scheme`.
    ///
    /// Concrete colors are returned unchanged. Semantic colors become the
    /// scheme's concrete color for their role, with any pending opacity folded
    /// into the alpha channel.
    pub fn resolve(self, scheme: ColorScheme) -> Color {
        match self {
            Color::Concrete(_) => self,
            Color::Semantic { .. } => Color::Concrete(self.resolve_rgba(scheme)),
        }
    }

    /// Resolves this color for `scheme` and returns the raw RGBA value.
    ///
    /// This is what a rendering bridge receives as a fill.
    pub fn resolve_rgba(self, scheme: ColorScheme) -> Rgba {
        match self {
            Color::Concrete(rgba) => rgba,
            Color::Semantic { tag, opacity } => {
                let mut rgba = scheme.rgba_for(tag);
                rgba.a *= opacity;
                trace!(?scheme, tag = tag.name(), ?rgba, "resolved semantic color");
                rgba
            }
        }
    }

    /// Multiplies the alpha by `factor`.
    ///
    /// On a semantic color the factor is kept and applied once the color is
    /// resolved. Repeated calls compose multiplicatively, exact only up to
    /// `f32` rounding: `c.opacity(a).opacity(b)` and `c.opacity(a * b)` may
    /// differ in the last bit of alpha.
    ///
    /// ```
    /// use prism_ui::{Color, ColorScheme, Rgba};
    ///
    /// let faded = Color::BLUE.opacity(0.5);
    /// assert_eq!(faded.as_concrete().map(|c| c.a), Some(0.5));
    ///
    /// let faded_label = Color::PRIMARY.opacity(0.5);
    /// assert_eq!(
    ///     faded_label.resolve_rgba(ColorScheme::Dark),
    ///     Rgba::new(1.0, 1.0, 1.0, 0.5)
    /// );
    /// ```
    #[must_use]
    pub fn opacity(self, factor: f32) -> Self {
        match self {
            Color::Concrete(mut rgba) => {
                rgba.a *= factor;
                Color::Concrete(rgba)
            }
            Color::Semantic { tag, opacity } => Color::Semantic {
                tag,
                opacity: opacity * factor,
            },
        }
    }
}

/// Defaults to [`Color::PRIMARY`], the adaptive foreground.
impl Default for Color {
    #[inline]
    fn default() -> Self {
        Color::PRIMARY
    }
}

impl From<Rgba> for Color {
    #[inline]
    fn from(rgba: Rgba) -> Self {
        Color::Concrete(rgba)
    }
}

impl From<SemanticColor> for Color {
    #[inline]
    fn from(tag: SemanticColor) -> Self {
        Color::semantic(tag)
    }
}

impl From<[f32; 4]> for Color {
    #[inline]
    fn from(components: [f32; 4]) -> Self {
        Color::Concrete(components.into())
    }
}

impl From<[f32; 3]> for Color {
    #[inline]
    fn from(components: [f32; 3]) -> Self {
        Color::Concrete(components.into())
    }
}

/// Errors produced when parsing a [`Color`] from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// The input is neither a hex literal nor a registered name.
    #[error("unknown color name `{0}`")]
    UnknownName(String),
    /// A `#` literal did not have 6 or 8 digits.
    #[error("expected 6 or 8 hexadecimal digits, found {0}")]
    InvalidHexLength(usize),
    /// A `#` literal contained a non-hexadecimal character.
    #[error("invalid hexadecimal digit in `{0}`")]
    InvalidHexDigit(String),
}

/// Parses a registered name (`"primary"`, `"red"`, ...) or a `#rrggbb` /
/// `#rrggbbaa` literal.
impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let Some(hex) = s.strip_prefix('#') else {
            return Color::from_name(s).ok_or_else(|| ParseColorError::UnknownName(s.to_owned()));
        };

        if !hex.bytes().all(|byte| byte.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidHexDigit(s.to_owned()));
        }
        let channel = |index: usize| {
            u8::from_str_radix(&hex[index * 2..index * 2 + 2], 16)
                .map_err(|_| ParseColorError::InvalidHexDigit(s.to_owned()))
        };
        match hex.len() {
            6 => Ok(Color::from_rgb_u8(channel(0)?, channel(1)?, channel(2)?)),
            8 => Ok(Color::from_rgba_u8(
                channel(0)?,
                channel(1)?,
                channel(2)?,
                channel(3)?,
            )),
            len => Err(ParseColorError::InvalidHexLength(len)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn concrete_palette() -> impl Iterator<Item = Color> {
        Color::NAMED
            .iter()
            .map(|(_, color)| *color)
            .filter(|color| !color.is_semantic())
    }

    #[test]
    fn palette_has_fifteen_concrete_and_four_semantic_entries() {
        assert_eq!(concrete_palette().count(), 15);
        let semantic: Vec<_> = Color::NAMED
            .iter()
            .filter_map(|(_, color)| color.semantic_tag())
            .collect();
        assert_eq!(semantic, SemanticColor::ALL);
    }

    #[test]
    fn palette_names_are_unique() {
        for (i, (name, _)) in Color::NAMED.iter().enumerate() {
            assert!(
                Color::NAMED[i + 1..].iter().all(|(other, _)| other != name),
                "duplicate name {name}"
            );
        }
    }

    #[test]
    fn resolve_is_identity_on_concrete_colors() {
        let custom = Color::new(0.1, 0.2, 0.3, 0.4);
        for color in concrete_palette().chain([custom]) {
            for scheme in ColorScheme::ALL {
                assert_eq!(color.resolve(scheme), color);
            }
        }
    }

    #[test]
    fn resolve_semantic_matches_scheme_table() {
        for scheme in ColorScheme::ALL {
            for tag in SemanticColor::ALL {
                let resolved = Color::semantic(tag).resolve(scheme);
                assert_eq!(resolved, scheme.color_for(tag));
                assert!(!resolved.is_semantic());
            }
        }
    }

    #[test]
    fn primary_resolves_to_black_and_white() {
        assert_eq!(
            Color::PRIMARY.resolve(ColorScheme::Light),
            Color::new(0.0, 0.0, 0.0, 1.0)
        );
        assert_eq!(
            Color::PRIMARY.resolve(ColorScheme::Dark),
            Color::new(1.0, 1.0, 1.0, 1.0)
        );
    }

    #[test]
    fn clear_is_transparent_mid_gray() {
        assert_eq!(Color::CLEAR, Color::new(0.5, 0.5, 0.5, 0.0));
    }

    #[test]
    fn opacity_composes_multiplicatively() {
        let base = Color::new(0.2, 0.4, 0.6, 1.0);
        let (a, b) = (0.5, 0.25);

        let chained = base.opacity(a).opacity(b);
        let combined = base.opacity(a * b);
        assert_eq!(
            chained.as_concrete().map(|c| c.a),
            combined.as_concrete().map(|c| c.a)
        );

        let rgba = chained.as_concrete().expect("opacity keeps colors concrete");
        assert_eq!((rgba.r, rgba.g, rgba.b), (0.2, 0.4, 0.6));
        assert!(!chained.is_semantic());
    }

    #[test]
    fn opacity_composition_holds_within_rounding_for_any_alpha() {
        let alpha_of = |color: Color| color.as_concrete().map_or(f32::NAN, |c| c.a);
        let (a, b) = (0.3_f32, 0.1_f32);

        for alpha in [0.7_f32, 0.33, 0.18, 1.0] {
            let base = Color::new(0.2, 0.4, 0.6, alpha);
            let chained = alpha_of(base.opacity(a).opacity(b));
            let combined = alpha_of(base.opacity(a * b));
            assert!(
                (chained - combined).abs() < 1e-6,
                "alpha {alpha}: {chained} vs {combined}"
            );
            assert!((chained - alpha * a * b).abs() < 1e-6);
        }

        let faded = Color::TERTIARY.opacity(a).opacity(b);
        for scheme in ColorScheme::ALL {
            let expected = scheme.rgba_for(SemanticColor::Tertiary).a * a * b;
            assert!((faded.resolve_rgba(scheme).a - expected).abs() < 1e-6);
        }
    }

    #[test]
    fn opacity_on_semantic_color_is_deferred() {
        let faded = Color::SECONDARY.opacity(0.5);
        assert_eq!(faded.semantic_tag(), Some(SemanticColor::Secondary));
        assert_eq!(faded.as_concrete(), None);

        let resolved = faded.resolve_rgba(ColorScheme::Light);
        assert_eq!(resolved.a, 0.60_f32 * 0.5);
        assert_eq!((resolved.r, resolved.g, resolved.b), (0.235, 0.235, 0.263));
    }

    #[test]
    fn out_of_range_components_pass_through() {
        let hot = Color::new(1.5, -0.25, 2.0, 1.0).opacity(3.0);
        assert_eq!(hot.as_concrete(), Some(Rgba::new(1.5, -0.25, 2.0, 3.0)));
        assert_eq!(hot.resolve(ColorScheme::Dark), hot);
    }

    #[test]
    fn parse_names_and_hex() {
        assert_eq!("tertiary".parse::<Color>(), Ok(Color::TERTIARY));
        assert_eq!(" BLUE ".parse::<Color>(), Ok(Color::BLUE));
        assert_eq!("#ff0000".parse::<Color>(), Ok(Color::from_rgb_u8(255, 0, 0)));
        assert_eq!(
            "#00000080".parse::<Color>(),
            Ok(Color::from_rgba_u8(0, 0, 0, 128))
        );
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert_eq!(
            "mauve".parse::<Color>(),
            Err(ParseColorError::UnknownName("mauve".to_owned()))
        );
        assert_eq!(
            "#fff".parse::<Color>(),
            Err(ParseColorError::InvalidHexLength(3))
        );
        assert_eq!(
            "#gg0000".parse::<Color>(),
            Err(ParseColorError::InvalidHexDigit("#gg0000".to_owned()))
        );
    }

    #[test]
    fn rgba_u8_conversions() {
        let rgba = Rgba::from([255u8, 0, 255, 0]);
        assert_eq!(rgba, Rgba::new(1.0, 0.0, 1.0, 0.0));
        assert_eq!(<[f32; 4]>::from(rgba), [1.0, 0.0, 1.0, 0.0]);
        assert_eq!(bytemuck::cast::<Rgba, [f32; 4]>(rgba), rgba.to_array());
    }
}
