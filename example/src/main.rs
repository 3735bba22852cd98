//! Runs a few color views through update passes in both schemes.
//!
//! Set `PRISM_COLOR_SCHEME=dark` to start in the dark scheme and `RUST_LOG`
//! to change verbosity.

mod log_backend;

use prism_components::ColorView;
use prism_ui::{
    AppearanceConfig, Color, LeafView, PxSize, UpdateInput, ViewLayoutResult,
    current_environment, init_tracing, provide_environment, update_leaf,
    with_opposite_color_scheme,
};
use tracing::info;

use crate::log_backend::LogBackend;

struct Swatch {
    name: &'static str,
    view: ColorView,
    surface: usize,
}

fn swatches(backend: &mut LogBackend) -> Vec<Swatch> {
    [
        ("label", Color::PRIMARY),
        ("subtitle", Color::SECONDARY),
        ("placeholder", Color::TERTIARY),
        ("faded label", Color::PRIMARY.opacity(0.5)),
        ("accent", Color::TEAL),
        ("backdrop", Color::CLEAR),
    ]
    .into_iter()
    .map(|(name, color)| {
        let view = ColorView::new(color);
        let surface = view.create_surface(backend);
        Swatch {
            name,
            view,
            surface,
        }
    })
    .collect()
}

/// Measures every swatch with a dry run, then commits them at the measured size.
fn render_pass(swatches: &[Swatch], backend: &mut LogBackend, row: PxSize) {
    let env = current_environment();
    info!(scheme = %env.color_scheme, "render pass");

    for swatch in swatches {
        let measured: ViewLayoutResult = update_leaf(
            &swatch.view,
            &swatch.surface,
            &UpdateInput::dry_run(row, &env),
            backend,
        );
        update_leaf(
            &swatch.view,
            &swatch.surface,
            &UpdateInput::new(measured.size.size, &env),
            backend,
        );

        if let Some(state) = backend.surface(swatch.surface) {
            info!(
                swatch = swatch.name,
                ideal = ?measured.size.ideal_size,
                size = ?state.size,
                fill = ?state.fill,
                "committed"
            );
        }
    }
}

fn main() {
    init_tracing();

    let config = AppearanceConfig::from_env();
    let mut backend = LogBackend::default();
    let swatches = swatches(&mut backend);
    let row = PxSize::from((120, 24));

    provide_environment(config.into_environment(), || {
        render_pass(&swatches, &mut backend, row);
        with_opposite_color_scheme(|| render_pass(&swatches, &mut backend, row));
    });
}
