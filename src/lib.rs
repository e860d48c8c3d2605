//! flyout attaches declarative context menus to the UI elements of a host
//! framework and materializes them on demand as platform-native menus.
//!
//! # Overview
//!
//! An application describes a menu as a tree of actions, groups, and
//! submenus, and assigns it — together with an optional preview and a
//! trigger mode — to any element. The engine takes care of the rest:
//!
//! - It waits until the element's platform handle exists before
//!   installing anything, and tears every hook down again when the
//!   configuration is cleared.
//! - It disambiguates taps from long presses, with cancellable shrink
//!   feedback while a press is held.
//! - It rebuilds the menu from its template at every activation and runs
//!   it through the platform translator picked at composition time.
//! - Inside recycling collection containers, it binds the container's
//!   configuration to every realized child against the child's own data
//!   context.
//!
//! # Example
//!
//! ```ignore
//! use flyout::{Action, ContextMenu, Group, Menu, MenuTemplate};
//! use flyout::platforms::UiKitTranslator;
//!
//! let menus = ContextMenu::new(host, UiKitTranslator);
//!
//! menus.set_menu(
//!     element,
//!     Some(MenuTemplate::new(|_context| {
//!         Menu::new(vec![
//!             Action::new("Reply").into(),
//!             Group::new(vec![
//!                 Action::new("Copy").into(),
//!                 Action::new("Delete").destructive().into(),
//!             ])
//!             .into(),
//!         ])
//!     })),
//! );
//! ```
//!
//! Clearing the property detaches everything again:
//!
//! ```ignore
//! menus.set_menu(element, None);
//! ```
pub use flyout_platforms as platforms;

pub use flyout_core::{
    Action, BindingContext, ClipRegion, Color, Command, CommandParameter, Group, IconHandle,
    IconResolver, IconSource, Insets, Menu, MenuElement, MenuTemplate, Point, Preview,
    PreviewSpec, PreviewTemplate, Rectangle, Shape, Size, TranslateError, Translator,
    TriggerMode, Vector, VisualContent,
};

pub use flyout_runtime::{ContextMenu, ElementId, Host, PressConfig, Status};
