use prism_ui::{PxSize, Rgba, SurfaceBackend};
use tracing::info;

/// Last state pushed into a surface.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct SurfaceState {
    pub size: Option<PxSize>,
    pub fill: Option<Rgba>,
}

/// Headless backend that keeps surface state in memory and logs every call.
#[derive(Debug, Default)]
pub struct LogBackend {
    surfaces: Vec<SurfaceState>,
}

impl LogBackend {
    pub fn surface(&self, index: usize) -> Option<&SurfaceState> {
        self.surfaces.get(index)
    }
}

impl SurfaceBackend for LogBackend {
    type Surface = usize;

    fn create_surface(&mut self) -> usize {
        self.surfaces.push(SurfaceState::default());
        let index = self.surfaces.len() - 1;
        info!(surface = index, "create_surface");
        index
    }

    fn set_size(&mut self, surface: &usize, size: PxSize) {
        if let Some(state) = self.surfaces.get_mut(*surface) {
            state.size = Some(size);
        }
        info!(surface, width = size.width.raw(), height = size.height.raw(), "set_size");
    }

    fn set_fill_color(&mut self, surface: &usize, color: Rgba) {
        if let Some(state) = self.surfaces.get_mut(*surface) {
            state.fill = Some(color);
        }
        let [r, g, b, a] = color.to_array();
        info!(surface, r, g, b, a, "set_fill_color");
    }
}
