//! Values inherited by every view updated inside a scope.
//!
//! A parent wraps part of an update pass in [`provide_context`]; leaf views
//! called from inside read the value back with [`use_context`] instead of
//! having it threaded through their arguments. The
//! [`EnvironmentValues`](crate::EnvironmentValues) helpers are built on this.
//!
//! Scopes are per thread. Each one is a persistent map layered over its
//! parent, so leaving a scope restores exactly what the parent saw.

use std::{
    any::{Any, TypeId},
    cell::RefCell,
    sync::Arc,
};

use im::HashMap;

type Layer = HashMap<TypeId, Arc<dyn Any + Send + Sync>>;

thread_local! {
    static SCOPES: RefCell<Vec<Layer>> = RefCell::new(vec![Layer::new()]);
}

/// Open scope; closes itself when dropped, including during unwinding.
struct Scope;

impl Scope {
    fn enter(type_id: TypeId, value: Arc<dyn Any + Send + Sync>) -> Self {
        SCOPES.with_borrow_mut(|scopes| {
            let layer = scopes.last().cloned().unwrap_or_default().update(type_id, value);
            scopes.push(layer);
        });
        Scope
    }
}

impl Drop for Scope {
    fn drop(&mut self) {
        SCOPES.with_borrow_mut(|scopes| {
            scopes.pop();
            if scopes.is_empty() {
                scopes.push(Layer::new());
            }
        });
    }
}

/// Runs `f` with `value` visible to [`use_context::<T>`](use_context).
///
/// An inner scope providing the same type shadows this one until it ends.
///
/// # Examples
///
/// ```
/// use prism_ui::{ColorScheme, EnvironmentValues, provide_context, use_context};
///
/// let dark = EnvironmentValues::new(ColorScheme::Dark);
/// let scheme = provide_context(dark, || use_context::<EnvironmentValues>().color_scheme);
///
/// assert_eq!(scheme, ColorScheme::Dark);
/// assert_eq!(use_context::<EnvironmentValues>().color_scheme, ColorScheme::Light);
/// ```
pub fn provide_context<T, F, R>(value: T, f: F) -> R
where
    T: Send + Sync + 'static,
    F: FnOnce() -> R,
{
    let _scope = Scope::enter(TypeId::of::<T>(), Arc::new(value));
    f()
}

/// Returns the innermost `T` provided on this thread, or `T::default()`.
pub fn use_context<T>() -> Arc<T>
where
    T: Default + Send + Sync + 'static,
{
    SCOPES
        .with_borrow(|scopes| {
            scopes
                .last()
                .and_then(|layer| layer.get(&TypeId::of::<T>()).cloned())
        })
        .and_then(|value| value.downcast::<T>().ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{color::Color, color_scheme::ColorScheme, environment::EnvironmentValues};

    #[test]
    fn unprovided_environment_is_the_default() {
        assert_eq!(*use_context::<EnvironmentValues>(), EnvironmentValues::default());
    }

    #[test]
    fn inner_environment_shadows_then_restores() {
        let dark = EnvironmentValues::new(ColorScheme::Dark);
        let tinted = dark.with_foreground_color(Color::RED);

        provide_context(dark, || {
            assert_eq!(*use_context::<EnvironmentValues>(), dark);
            provide_context(tinted, || {
                assert_eq!(use_context::<EnvironmentValues>().foreground_color, Some(Color::RED));
            });
            assert_eq!(use_context::<EnvironmentValues>().foreground_color, None);
        });
        assert_eq!(use_context::<EnvironmentValues>().color_scheme, ColorScheme::Light);
    }

    #[test]
    fn unrelated_types_do_not_shadow_each_other() {
        provide_context(EnvironmentValues::new(ColorScheme::Dark), || {
            provide_context(ColorScheme::Light, || {
                assert_eq!(use_context::<EnvironmentValues>().color_scheme, ColorScheme::Dark);
                assert_eq!(*use_context::<ColorScheme>(), ColorScheme::Light);
            });
        });
    }

    #[test]
    fn scope_closes_on_unwind() {
        let result = std::panic::catch_unwind(|| {
            let _: () = provide_context(EnvironmentValues::new(ColorScheme::Dark), || {
                panic!("update failed")
            });
        });
        assert!(result.is_err());
        assert_eq!(use_context::<EnvironmentValues>().color_scheme, ColorScheme::Light);
    }
}
