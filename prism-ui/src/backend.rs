//! The rendering bridge a backend implements for leaf views.
//!
//! A backend owns its surfaces. Views only ask for one to be created, then
//! push a size and a fill color into it on every non-dry update. The fill is an
//! [`Rgba`], so a semantic [`Color`](crate::Color) has to be resolved before it
//! can reach a backend.

use crate::{color::Rgba, px::PxSize};

/// Drawing capabilities consumed by leaf views.
///
/// # Example
///
/// ```
/// use prism_ui::{PxSize, Rgba, SurfaceBackend};
///
/// #[derive(Default)]
/// struct CountingBackend {
///     fills: usize,
/// }
///
/// impl SurfaceBackend for CountingBackend {
///     type Surface = u32;
///
///     fn create_surface(&mut self) -> u32 {
///         0
///     }
///
///     fn set_size(&mut self, _surface: &u32, _size: PxSize) {}
///
///     fn set_fill_color(&mut self, _surface: &u32, _color: Rgba) {
///         self.fills += 1;
///     }
/// }
/// ```
pub trait SurfaceBackend {
    /// Handle to a drawable rectangle owned by the backend.
    type Surface;

    /// Creates a new surface with no size and no fill.
    fn create_surface(&mut self) -> Self::Surface;

    /// Sets the size of `surface` in physical pixels.
    fn set_size(&mut self, surface: &Self::Surface, size: PxSize);

    /// Sets the fill of `surface`.
    fn set_fill_color(&mut self, surface: &Self::Surface, color: Rgba);
}

#[cfg(any(test, feature = "testing"))]
pub use recording::{BackendCall, RecordingBackend, SurfaceId};

#[cfg(any(test, feature = "testing"))]
mod recording {
    use std::sync::Arc;

    use parking_lot::Mutex;

    use super::SurfaceBackend;
    use crate::{color::Rgba, px::PxSize};

    /// Identifier handed out by [`RecordingBackend::create_surface`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SurfaceId(pub u32);

    /// A single call made against a [`RecordingBackend`].
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub enum BackendCall {
        /// A surface was created.
        CreateSurface(SurfaceId),
        /// A surface was resized.
        SetSize(SurfaceId, PxSize),
        /// A surface fill was set.
        SetFillColor(SurfaceId, Rgba),
    }

    /// Backend that records every call for inspection in tests.
    ///
    /// Clones share the same log, so a clone can be kept for assertions while
    /// the original is handed to the code under test.
    #[derive(Debug, Clone, Default)]
    pub struct RecordingBackend {
        log: Arc<Mutex<CallLog>>,
    }

    #[derive(Debug, Default)]
    struct CallLog {
        calls: Vec<BackendCall>,
        next_surface: u32,
    }

    impl RecordingBackend {
        /// Creates a backend with an empty log.
        pub fn new() -> Self {
            Self::default()
        }

        /// Returns a snapshot of all recorded calls.
        pub fn calls(&self) -> Vec<BackendCall> {
            self.log.lock().calls.clone()
        }

        /// Returns the fills recorded for `surface`, oldest first.
        pub fn fills(&self, surface: SurfaceId) -> Vec<Rgba> {
            self.log
                .lock()
                .calls
                .iter()
                .filter_map(|call| match call {
                    BackendCall::SetFillColor(id, color) if *id == surface => Some(*color),
                    _ => None,
                })
                .collect()
        }

        /// Clears the recorded calls. Surface ids keep counting up.
        pub fn clear(&self) {
            self.log.lock().calls.clear();
        }
    }

    impl SurfaceBackend for RecordingBackend {
        type Surface = SurfaceId;

        fn create_surface(&mut self) -> SurfaceId {
            let mut log = self.log.lock();
            let id = SurfaceId(log.next_surface);
            log.next_surface += 1;
            log.calls.push(BackendCall::CreateSurface(id));
            id
        }

        fn set_size(&mut self, surface: &SurfaceId, size: PxSize) {
            self.log
                .lock()
                .calls
                .push(BackendCall::SetSize(*surface, size));
        }

        fn set_fill_color(&mut self, surface: &SurfaceId, color: Rgba) {
            self.log
                .lock()
                .calls
                .push(BackendCall::SetFillColor(*surface, color));
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn clones_share_one_log() {
            let observer = RecordingBackend::new();
            let mut backend = observer.clone();

            let first = backend.create_surface();
            let second = observer.clone().create_surface();
            assert_ne!(first, second);

            backend.set_fill_color(&second, Rgba::new(1.0, 0.0, 0.0, 1.0));
            assert_eq!(observer.calls().len(), 3);
            assert_eq!(observer.fills(second), vec![Rgba::new(1.0, 0.0, 0.0, 1.0)]);
            assert!(observer.fills(first).is_empty());

            observer.clear();
            assert!(backend.calls().is_empty());
        }
    }
}
