//! Update contract between leaf views and the layout pass.
//!
//! ## Usage
//!
//! Implement [`LeafView`] for a view that draws into a single backend surface
//! and has no children. The layout pass calls [`update_leaf`] with the size it
//! proposes; the view reports how much of it it occupies and, unless the pass
//! is a dry run, pushes its state into the surface.

use tracing::debug_span;

use crate::{backend::SurfaceBackend, environment::EnvironmentValues, px::PxSize};

/// Sizing reported by a view after an update.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewSize {
    /// Size the view occupies for the proposal it was given.
    pub size: PxSize,
    /// Size the view would like when the parent has no preference.
    pub ideal_size: PxSize,
    /// Smallest size the view accepts, if bounded.
    pub min_size: Option<PxSize>,
    /// Largest size the view accepts, if bounded.
    pub max_size: Option<PxSize>,
}

impl ViewSize {
    /// A size that occupies `size`, prefers `ideal_size`, and is unbounded.
    pub const fn flexible(size: PxSize, ideal_size: PxSize) -> Self {
        Self {
            size,
            ideal_size,
            min_size: None,
            max_size: None,
        }
    }
}

/// Result of updating a view and, for containers, its children.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ViewLayoutResult {
    /// The view's own sizing.
    pub size: ViewSize,
    /// Results of the children, in child order. Always empty for leaves.
    pub children: Vec<ViewLayoutResult>,
}

impl ViewLayoutResult {
    /// Result for a view with no children.
    pub const fn leaf(size: ViewSize) -> Self {
        Self {
            size,
            children: Vec::new(),
        }
    }

    /// Whether this result has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Per-pass input for [`LeafView::update`].
#[derive(Debug, Clone, Copy)]
pub struct UpdateInput<'a> {
    /// Size offered by the parent.
    pub proposed_size: PxSize,
    /// Environment sampled for this pass.
    pub environment: &'a EnvironmentValues,
    /// When set, only sizing is computed and the surface is left untouched.
    pub dry_run: bool,
}

impl<'a> UpdateInput<'a> {
    /// Input for a pass that commits to the backend.
    pub const fn new(proposed_size: PxSize, environment: &'a EnvironmentValues) -> Self {
        Self {
            proposed_size,
            environment,
            dry_run: false,
        }
    }

    /// Input for a measurement-only pass.
    pub const fn dry_run(proposed_size: PxSize, environment: &'a EnvironmentValues) -> Self {
        Self {
            proposed_size,
            environment,
            dry_run: true,
        }
    }
}

/// A view backed by exactly one surface and without children.
pub trait LeafView: Send + Sync + Clone + PartialEq + 'static {
    /// Asks `backend` for the surface this view draws into.
    fn create_surface<B: SurfaceBackend>(&self, backend: &mut B) -> B::Surface {
        backend.create_surface()
    }

    /// Computes sizing for `input` and, unless it is a dry run, applies the
    /// view's state to `surface`.
    fn update<B: SurfaceBackend>(
        &self,
        surface: &B::Surface,
        input: &UpdateInput<'_>,
        backend: &mut B,
    ) -> ViewLayoutResult;
}

/// Runs one update pass of `view` inside a tracing span.
pub fn update_leaf<V, B>(
    view: &V,
    surface: &B::Surface,
    input: &UpdateInput<'_>,
    backend: &mut B,
) -> ViewLayoutResult
where
    V: LeafView,
    B: SurfaceBackend,
{
    let _span = debug_span!(
        "update_leaf",
        view = std::any::type_name::<V>(),
        scheme = %input.environment.color_scheme,
        dry_run = input.dry_run,
    )
    .entered();
    view.update(surface, input, backend)
}
