//! Per-element data contexts.
use std::any::Any;
use std::fmt;
use std::rc::Rc;

/// The data context a menu is instantiated against.
///
/// A [`BindingContext`] is owned by the host framework; the engine only
/// forwards it into template factories so that commands and titles resolve
/// against the data of the element that triggered the menu (e.g. the row
/// item of a recycled list cell).
#[derive(Clone)]
pub struct BindingContext(Rc<dyn Any>);

impl BindingContext {
    /// Creates a new [`BindingContext`] wrapping the given value.
    pub fn new<T: 'static>(value: T) -> Self {
        Self(Rc::new(value))
    }

    /// A [`BindingContext`] carrying no data.
    #[must_use]
    pub fn empty() -> Self {
        Self(Rc::new(()))
    }

    /// Attempts to view the wrapped value as a `T`.
    #[must_use]
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.0.downcast_ref()
    }

    pub(crate) fn into_raw(self) -> Rc<dyn Any> {
        self.0
    }
}

impl Default for BindingContext {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for BindingContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BindingContext(..)")
    }
}
