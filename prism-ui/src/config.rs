//! Startup appearance configuration.
//!
//! ## Usage
//!
//! Build an [`AppearanceConfig`] (directly, or from the process environment
//! with [`AppearanceConfig::from_env`]) and turn it into the root
//! [`EnvironmentValues`].
//!
//! | variable | values |
//! |---|---|
//! | `PRISM_COLOR_SCHEME` | `light`, `dark` |
//! | `PRISM_FOREGROUND_COLOR` | a palette or semantic name, `#rrggbb`, `#rrggbbaa` |

use tracing::warn;

use crate::{color::Color, color_scheme::ColorScheme, environment::EnvironmentValues};

/// Environment variable selecting the initial color scheme.
pub const COLOR_SCHEME_VAR: &str = "PRISM_COLOR_SCHEME";
/// Environment variable overriding the foreground color.
pub const FOREGROUND_COLOR_VAR: &str = "PRISM_FOREGROUND_COLOR";

/// Initial appearance for an application.
///
/// # Examples
///
/// ```
/// use prism_ui::{AppearanceConfig, ColorScheme};
///
/// let config = AppearanceConfig {
///     color_scheme: ColorScheme::Dark,
///     ..Default::default()
/// };
/// assert_eq!(config.into_environment().color_scheme, ColorScheme::Dark);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AppearanceConfig {
    /// Scheme the root environment starts in. Defaults to light.
    pub color_scheme: ColorScheme,
    /// Foreground override for the root environment.
    pub foreground_color: Option<Color>,
}

impl AppearanceConfig {
    /// Reads the configuration from process environment variables.
    ///
    /// Unset variables keep their defaults; unparsable ones are logged and
    /// ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(COLOR_SCHEME_VAR) {
            match raw.parse::<ColorScheme>() {
                Ok(scheme) => config.color_scheme = scheme,
                Err(err) => warn!("Ignoring {COLOR_SCHEME_VAR}: {err}"),
            }
        }

        if let Some(raw) = lookup(FOREGROUND_COLOR_VAR) {
            match raw.parse::<Color>() {
                Ok(color) => config.foreground_color = Some(color),
                Err(err) => warn!("Ignoring {FOREGROUND_COLOR_VAR}: {err}"),
            }
        }

        config
    }

    /// Builds the root environment described by this configuration.
    pub const fn into_environment(self) -> EnvironmentValues {
        EnvironmentValues {
            color_scheme: self.color_scheme,
            foreground_color: self.foreground_color,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::color::SemanticColor;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_lookup_yields_defaults() {
        let config = AppearanceConfig::from_lookup(|_| None);
        assert_eq!(config, AppearanceConfig::default());
        assert_eq!(config.color_scheme, ColorScheme::Light);
    }

    #[test]
    fn reads_scheme_and_foreground() {
        let config = AppearanceConfig::from_lookup(lookup_from(&[
            (COLOR_SCHEME_VAR, "DARK"),
            (FOREGROUND_COLOR_VAR, "secondary"),
        ]));
        assert_eq!(config.color_scheme, ColorScheme::Dark);
        assert_eq!(config.foreground_color, Some(Color::SECONDARY));

        let env = config.into_environment();
        assert_eq!(
            env.foreground_color(),
            ColorScheme::Dark.color_for(SemanticColor::Secondary)
        );
    }

    #[test]
    fn invalid_values_fall_back_independently() {
        let config = AppearanceConfig::from_lookup(lookup_from(&[
            (COLOR_SCHEME_VAR, "dusk"),
            (FOREGROUND_COLOR_VAR, "#00ff00"),
        ]));
        assert_eq!(config.color_scheme, ColorScheme::Light);
        assert_eq!(config.foreground_color, Some(Color::from_rgb_u8(0, 255, 0)));

        let config = AppearanceConfig::from_lookup(lookup_from(&[
            (COLOR_SCHEME_VAR, "dark"),
            (FOREGROUND_COLOR_VAR, "#00ff"),
        ]));
        assert_eq!(config.color_scheme, ColorScheme::Dark);
        assert_eq!(config.foreground_color, None);
    }
}
