//! prism-ui provides scheme-adaptive colors for tessera-style declarative UIs.
//!
//! # Colors
//!
//! A [`Color`] is either concrete or semantic. Semantic colors stand for a
//! role in the label hierarchy and only get a value once a [`ColorScheme`] is
//! known.
//!
//! ```
//! use prism_ui::{Color, ColorScheme, Rgba};
//!
//! let hint = Color::TERTIARY;
//! assert_eq!(
//!     hint.resolve_rgba(ColorScheme::Light),
//!     Rgba::new(0.235, 0.235, 0.263, 0.30)
//! );
//! assert_eq!(
//!     hint.resolve_rgba(ColorScheme::Dark),
//!     Rgba::new(0.922, 0.922, 0.961, 0.30)
//! );
//! ```
//!
//! # Environment
//!
//! The active scheme is ambient state. Provide it once near the root and read
//! it back wherever a view is updated.
//!
//! ```
//! use prism_ui::{ColorScheme, EnvironmentValues, current_environment, provide_environment};
//!
//! provide_environment(EnvironmentValues::new(ColorScheme::Dark), || {
//!     assert!(current_environment().color_scheme.is_dark());
//! });
//! ```
//!
//! # Leaf views
//!
//! Views that draw into a single backend surface implement [`LeafView`]. The
//! backend side of the contract is [`SurfaceBackend`]; only resolved [`Rgba`]
//! values are ever handed to it.
#![deny(missing_docs, clippy::unwrap_used)]

pub mod backend;
pub mod color;
pub mod color_scheme;
pub mod config;
pub mod context;
pub mod environment;
pub mod layout;
pub mod logging;
pub mod px;

#[cfg(any(test, feature = "testing"))]
pub use crate::backend::{BackendCall, RecordingBackend, SurfaceId};
pub use crate::{
    backend::SurfaceBackend,
    color::{Color, ParseColorError, Rgba, SemanticColor},
    color_scheme::{ColorScheme, ParseColorSchemeError},
    config::AppearanceConfig,
    context::{provide_context, use_context},
    environment::{
        EnvironmentValues, current_environment, provide_environment, with_color_scheme,
        with_opposite_color_scheme,
    },
    layout::{LeafView, UpdateInput, ViewLayoutResult, ViewSize, update_leaf},
    logging::{init_tracing, init_tracing_with},
    px::{Px, PxSize},
};
