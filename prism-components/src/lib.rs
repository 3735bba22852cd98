//! Leaf components for prism-ui.
//!
//! Each component implements [`prism_ui::LeafView`] and is driven by the
//! layout pass through [`prism_ui::update_leaf`].
#![deny(missing_docs, clippy::unwrap_used)]

pub mod color_view;

pub use color_view::ColorView;
