//! Read-only environment sampled once per update pass.
//!
//! ## Usage
//!
//! Provide an [`EnvironmentValues`] at the root of a subtree, then read it with
//! [`current_environment`] when building the [`UpdateInput`] for a view.
//!
//! [`UpdateInput`]: crate::layout::UpdateInput

use crate::{
    color::Color,
    color_scheme::ColorScheme,
    context::{provide_context, use_context},
};

/// Ambient values a view consults while updating.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct EnvironmentValues {
    /// Scheme used to resolve semantic colors.
    pub color_scheme: ColorScheme,
    /// Explicit foreground; `None` means the scheme's default.
    pub foreground_color: Option<Color>,
}

impl EnvironmentValues {
    /// Creates an environment for `color_scheme` with no foreground override.
    pub const fn new(color_scheme: ColorScheme) -> Self {
        Self {
            color_scheme,
            foreground_color: None,
        }
    }

    /// Returns a copy using `color_scheme`.
    #[must_use]
    pub const fn with_color_scheme(mut self, color_scheme: ColorScheme) -> Self {
        self.color_scheme = color_scheme;
        self
    }

    /// Returns a copy with the foreground set to `color`.
    #[must_use]
    pub const fn with_foreground_color(mut self, color: Color) -> Self {
        self.foreground_color = Some(color);
        self
    }

    /// Resolves `color` against this environment's scheme.
    pub fn resolve(&self, color: Color) -> Color {
        color.resolve(self.color_scheme)
    }

    /// The concrete foreground color: the override resolved for the current
    /// scheme, or [`ColorScheme::default_foreground_color`].
    ///
    /// ```
    /// use prism_ui::{Color, ColorScheme, EnvironmentValues};
    ///
    /// let env = EnvironmentValues::new(ColorScheme::Dark);
    /// assert_eq!(env.foreground_color(), Color::WHITE);
    ///
    /// let tinted = env.with_foreground_color(Color::SECONDARY);
    /// assert_eq!(
    ///     tinted.foreground_color(),
    ///     ColorScheme::Dark.color_for(prism_ui::SemanticColor::Secondary)
    /// );
    /// ```
    pub fn foreground_color(&self) -> Color {
        match self.foreground_color {
            Some(color) => self.resolve(color),
            None => self.color_scheme.default_foreground_color(),
        }
    }
}

/// Makes `environment` current for the duration of `f`.
pub fn provide_environment<R>(environment: EnvironmentValues, f: impl FnOnce() -> R) -> R {
    provide_context(environment, f)
}

/// Returns the environment of the enclosing scope, or the default (light, no
/// foreground override) outside any provider.
pub fn current_environment() -> EnvironmentValues {
    *use_context::<EnvironmentValues>()
}

/// Runs `f` in a copy of the current environment that uses `color_scheme`.
pub fn with_color_scheme<R>(color_scheme: ColorScheme, f: impl FnOnce() -> R) -> R {
    provide_environment(current_environment().with_color_scheme(color_scheme), f)
}

/// Runs `f` in a copy of the current environment with the scheme flipped.
///
/// Useful for inverted regions such as a dark toolbar inside a light window.
pub fn with_opposite_color_scheme<R>(f: impl FnOnce() -> R) -> R {
    let scheme = current_environment().color_scheme.opposite();
    with_color_scheme(scheme, f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_environment_is_light_without_override() {
        let env = current_environment();
        assert_eq!(env, EnvironmentValues::new(ColorScheme::Light));
        assert_eq!(env.foreground_color(), Color::BLACK);
    }

    #[test]
    fn nested_scheme_overrides_keep_other_values() {
        let root = EnvironmentValues::new(ColorScheme::Light).with_foreground_color(Color::RED);
        provide_environment(root, || {
            with_color_scheme(ColorScheme::Dark, || {
                let env = current_environment();
                assert_eq!(env.color_scheme, ColorScheme::Dark);
                assert_eq!(env.foreground_color(), Color::RED);
            });
            assert_eq!(current_environment(), root);
        });
    }

    #[test]
    fn opposite_scheme_flips_each_level() {
        with_color_scheme(ColorScheme::Dark, || {
            with_opposite_color_scheme(|| {
                assert_eq!(current_environment().color_scheme, ColorScheme::Light);
                with_opposite_color_scheme(|| {
                    assert_eq!(current_environment().color_scheme, ColorScheme::Dark);
                });
            });
        });
    }

    #[test]
    fn semantic_foreground_follows_scheme() {
        let env = EnvironmentValues::new(ColorScheme::Light).with_foreground_color(Color::PRIMARY);
        assert_eq!(env.foreground_color(), Color::BLACK);
        assert_eq!(
            env.with_color_scheme(ColorScheme::Dark).foreground_color(),
            Color::WHITE
        );
    }
}
