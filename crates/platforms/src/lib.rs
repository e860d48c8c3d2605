//! The native menu translators of flyout.
//!
//! Each module converts the declarative [`Menu`](flyout_core::Menu) tree
//! into the menu representation of one platform family:
//!
//! - [`uikit`] — nested menus with presentation attributes; groups render
//!   as inline submenus and hidden items keep their structural slot.
//! - [`android`] — flat popup-menu entries identified by group and item
//!   ids allocated by a counter scheme; invisible items keep their slot.
//! - [`windows`] — flyout item lists with explicit separators; invisible
//!   items are omitted entirely.
//!
//! All three are stateless values implementing
//! [`Translator`](flyout_core::Translator); pick one at composition time
//! and hand it to the runtime.
pub mod android;
pub mod uikit;
pub mod windows;

pub use android::AndroidTranslator;
pub use uikit::UiKitTranslator;
pub use windows::WindowsTranslator;

use flyout_core::Color;

/// Tint applied to destructive menu items on platforms that color them
/// rather than carrying a destructive attribute.
pub const DESTRUCTIVE_TINT: Color = Color::from_rgb8(0xF4, 0x43, 0x36);
