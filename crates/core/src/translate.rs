//! The platform translation seam.
use crate::error::TranslateError;
use crate::icon::IconResolver;
use crate::menu::Menu;

/// Converts a declarative [`Menu`] into a platform's native menu
/// representation.
///
/// One stateless translator instance is selected at composition time and
/// injected into the engine; the engine re-translates the whole tree at
/// every activation instead of diffing, since the model may have been
/// rebuilt or rebound since the last display.
///
/// Implementations must observe the shared rules:
///
/// - Identifiers are unique within the scope they are added to, and every
///   submenu starts a fresh identifier space.
/// - A [`Group`] directly inside another [`Group`] is rejected with
///   [`TranslateError::NestedGroup`], never flattened.
/// - Invisible items are suppressed without disturbing the identifiers or
///   order of their siblings; keeping a hidden structural slot and fully
///   omitting the item are both acceptable.
/// - Destructive and disabled styling never affect ordering or ids.
/// - Icons resolve system name first, then custom source; failures degrade
///   to no icon.
///
/// [`Group`]: crate::menu::Group
pub trait Translator {
    /// The native menu representation this translator produces.
    type Native;

    /// Translates the given menu, resolving icons through `icons`.
    fn translate(
        &self,
        menu: &Menu,
        icons: &dyn IconResolver,
    ) -> Result<Self::Native, TranslateError>;
}
