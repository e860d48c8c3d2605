//! Icon references and resolution.
//!
//! Image loading belongs to the host; the engine only carries opaque
//! references and asks an [`IconResolver`] to turn them into handles at
//! translation time. Resolution failures are non-fatal: the item is still
//! added to the menu, just without an icon.
use crate::menu::Action;

use std::any::Any;
use std::fmt;
use std::rc::Rc;

/// An opaque reference to an icon image.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IconSource {
    /// An image file bundled with or reachable by the application.
    File(String),
    /// A named resource looked up through the host's resource system.
    Resource(String),
}

/// A resolved, platform-ready icon.
#[derive(Clone)]
pub struct IconHandle(Rc<dyn Any>);

impl IconHandle {
    /// Creates a new [`IconHandle`] wrapping a platform image.
    pub fn new<T: 'static>(image: T) -> Self {
        Self(Rc::new(image))
    }

    /// Attempts to view the wrapped image as a `T`.
    #[must_use]
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.0.downcast_ref()
    }
}

impl fmt::Debug for IconHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("IconHandle(..)")
    }
}

/// Resolves icon references into platform images.
///
/// Implemented by the host; `size_hint` is a logical pixel size some
/// platforms use to pre-scale bitmaps.
pub trait IconResolver {
    /// Resolves a platform system icon by name (e.g. an SF Symbol).
    fn resolve_system(&self, name: &str, size_hint: Option<u32>) -> Option<IconHandle>;

    /// Resolves a custom [`IconSource`].
    fn resolve_source(&self, source: &IconSource, size_hint: Option<u32>) -> Option<IconHandle>;
}

/// Resolves the icon of an [`Action`]: system icon name first, then the
/// custom source, then none.
///
/// A reference that fails to resolve is logged and skipped rather than
/// aborting translation.
pub fn resolve_action_icon(
    action: &Action,
    icons: &dyn IconResolver,
    size_hint: Option<u32>,
) -> Option<IconHandle> {
    if let Some(name) = &action.system_icon {
        if let Some(handle) = icons.resolve_system(name, size_hint) {
            return Some(handle);
        }

        log::warn!("unresolved system icon {name:?} for action {:?}", action.title);
    }

    if let Some(source) = &action.icon {
        if let Some(handle) = icons.resolve_source(source, size_hint) {
            return Some(handle);
        }

        log::warn!("unresolved icon {source:?} for action {:?}", action.title);
    }

    None
}
