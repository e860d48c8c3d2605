//! Errors raised while translating a menu tree.
use thiserror::Error;

/// An error produced while translating a [`Menu`] into a native menu
/// representation.
///
/// These are configuration errors in the declarative tree and are raised
/// immediately, before any native structure is produced, so they surface
/// during development rather than rendering a half-built menu.
///
/// [`Menu`]: crate::menu::Menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TranslateError {
    /// A [`Group`] was nested directly inside another [`Group`].
    ///
    /// This is a restriction of the menu model itself, not of any one
    /// platform: groups flatten inline, so nesting them has no meaning.
    ///
    /// [`Group`]: crate::menu::Group
    #[error("context menu groups cannot be nested")]
    NestedGroup,

    /// A submenu was placed where the platform structurally requires a
    /// non-empty title.
    #[error("a submenu used inside a group requires a title on this platform")]
    UntitledSubmenu,
}
