//! Stable, comparable callback handles for field props.
//!
//! Field models hold user-supplied closures (`on_focus`, `on_blur`,
//! `on_change`, ...) for the lifetime of the field. Wrapping them in a
//! shared handle keeps the owning structs cloneable and lets props compare
//! by identity instead of forcing deep closure comparisons.

use std::{fmt, sync::Arc};

/// Cloneable handle for a zero-argument notification callback.
///
/// Compares by identity (`Arc::ptr_eq`), so two handles are equal only when
/// they were cloned from the same original closure.
#[derive(Clone)]
pub struct Callback {
    inner: Arc<dyn Fn() + Send + Sync>,
}

impl Callback {
    /// Creates a callback handle from a closure.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(handler),
        }
    }

    /// Invokes the callback.
    pub fn call(&self) {
        (self.inner)();
    }
}

impl<F> From<F> for Callback
where
    F: Fn() + Send + Sync + 'static,
{
    fn from(handler: F) -> Self {
        Self::new(handler)
    }
}

impl Default for Callback {
    fn default() -> Self {
        Self::new(|| {})
    }
}

impl PartialEq for Callback {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for Callback {}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback").finish_non_exhaustive()
    }
}

/// Cloneable handle for a `Fn(T) -> R` callback.
///
/// Used for value-change handlers and similar one-argument callbacks.
pub struct CallbackWith<T, R = ()> {
    inner: Arc<dyn Fn(T) -> R + Send + Sync>,
}

impl<T, R> CallbackWith<T, R> {
    /// Creates a callback handle from a closure.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(T) -> R + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(handler),
        }
    }

    /// Invokes the callback with an argument.
    pub fn call(&self, value: T) -> R {
        (self.inner)(value)
    }
}

impl<T, R, F> From<F> for CallbackWith<T, R>
where
    F: Fn(T) -> R + Send + Sync + 'static,
{
    fn from(handler: F) -> Self {
        Self::new(handler)
    }
}

impl<T, R> Clone for CallbackWith<T, R> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T, R> PartialEq for CallbackWith<T, R> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T, R> Eq for CallbackWith<T, R> {}

impl<T, R> fmt::Debug for CallbackWith<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackWith").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn test_callback_invokes_closure() {
        let hits = Arc::new(AtomicUsize::new(0));
        let cb = {
            let hits = hits.clone();
            Callback::new(move || {
                hits.fetch_add(1, Ordering::SeqCst);
            })
        };
        cb.call();
        cb.call();
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_callback_identity_equality() {
        let a = Callback::new(|| {});
        let b = Callback::new(|| {});
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn test_callback_with_passes_argument() {
        let cb: CallbackWith<i32, i32> = CallbackWith::new(|v| v * 2);
        assert_eq!(cb.call(21), 42);
    }
}
