//! A rectangle filled with a single color.
//!
//! ## Usage
//!
//! Use as a solid block, a swatch, or a background layer. Semantic colors
//! follow the environment's scheme on every update.

use prism_ui::{
    Color, LeafView, Px, PxSize, SurfaceBackend, UpdateInput, ViewLayoutResult, ViewSize,
};
use tracing::debug;

/// Size a color view asks for when its parent has no preference.
pub const IDEAL_SIZE: PxSize = PxSize::splat(Px(10));

/// # color_view
///
/// Fills its whole proposed area with `color`.
///
/// ## Usage
///
/// Keep the unresolved [`Color`] in the view; it is resolved against the
/// environment's [`ColorScheme`](prism_ui::ColorScheme) on each non-dry update,
/// so toggling the scheme recolors the surface without rebuilding the view.
///
/// ## Examples
///
/// ```
/// use prism_components::ColorView;
/// use prism_ui::{
///     Color, ColorScheme, EnvironmentValues, LeafView, Px, PxSize, RecordingBackend,
///     UpdateInput,
/// };
///
/// let view = ColorView::new(Color::PRIMARY);
/// let mut backend = RecordingBackend::new();
/// let surface = view.create_surface(&mut backend);
///
/// let env = EnvironmentValues::new(ColorScheme::Dark);
/// let result = view.update(
///     &surface,
///     &UpdateInput::new(PxSize::new(Px(40), Px(20)), &env),
///     &mut backend,
/// );
///
/// assert_eq!(result.size.size, PxSize::new(Px(40), Px(20)));
/// assert_eq!(backend.fills(surface), vec![prism_ui::Rgba::new(1.0, 1.0, 1.0, 1.0)]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorView {
    color: Color,
}

impl ColorView {
    /// Creates a view filled with `color`.
    pub fn new(color: impl Into<Color>) -> Self {
        Self {
            color: color.into(),
        }
    }

    /// The unresolved color of this view.
    pub const fn color(&self) -> Color {
        self.color
    }
}

impl From<Color> for ColorView {
    fn from(color: Color) -> Self {
        Self::new(color)
    }
}

impl LeafView for ColorView {
    fn update<B: SurfaceBackend>(
        &self,
        surface: &B::Surface,
        input: &UpdateInput<'_>,
        backend: &mut B,
    ) -> ViewLayoutResult {
        if !input.dry_run {
            let fill = self.color.resolve_rgba(input.environment.color_scheme);
            debug!(
                size = ?input.proposed_size,
                ?fill,
                semantic = self.color.is_semantic(),
                "color_view commit"
            );
            backend.set_size(surface, input.proposed_size);
            backend.set_fill_color(surface, fill);
        }

        ViewLayoutResult::leaf(ViewSize::flexible(input.proposed_size, IDEAL_SIZE))
    }
}
