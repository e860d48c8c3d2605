//! The menu attachment engine of flyout.
//!
//! [`ContextMenu`] binds declarative menu models from
//! [`flyout_core`](flyout_core) to live host UI elements: it waits for an
//! element's platform handle, installs the gesture hooks matching the
//! configured [`TriggerMode`](flyout_core::TriggerMode), runs the
//! long-press state machine with its cancellable shrink feedback, and —
//! on activation — rebuilds the menu tree, runs it through the composed
//! [`Translator`](flyout_core::Translator), and asks the [`Host`] to
//! present the result.
//!
//! All engine state lives on the host's UI thread; the only asynchrony is
//! the host timer queue, and every scheduled callback is cancellable.
//! Detaching at any point — while still waiting for a handle, during an
//! active shrink animation, or mid-display — leaves no dangling callback,
//! hook, or child registration behind.
pub mod host;

mod binding;
mod collection;
mod context_menu;
mod lifecycle;
mod trigger;

pub use context_menu::ContextMenu;
pub use host::{ChildrenToken, ElementId, GestureToken, Host, ReadyToken, Status, TimerToken};
pub use trigger::PressConfig;
