//! The core menu model of flyout.
//!
//! This crate defines the platform-agnostic building blocks shared by the
//! runtime and the platform translators:
//!
//! - The declarative [`Menu`] tree of [`Action`]s, [`Group`]s, and submenus.
//! - [`Command`] handles executed when an item is activated.
//! - The [`Preview`] configuration shown alongside a long-press menu.
//! - The [`Translator`] seam implemented once per platform.
//!
//! The model is plain data. The engine never mutates a menu it was handed;
//! it instantiates a fresh tree from a [`MenuTemplate`] at every activation
//! and reads commands at that point, so late-bound state is always current.
pub mod color;
pub mod command;
pub mod context;
pub mod error;
pub mod geometry;
pub mod icon;
pub mod menu;
pub mod preview;
pub mod translate;

pub use color::Color;
pub use command::{Command, CommandParameter};
pub use context::BindingContext;
pub use error::TranslateError;
pub use geometry::{Insets, Point, Rectangle, Size, Vector};
pub use icon::{IconHandle, IconResolver, IconSource};
pub use menu::{Action, Group, Menu, MenuElement, MenuTemplate, TriggerMode};
pub use preview::{ClipRegion, Preview, PreviewSpec, PreviewTemplate, Shape, VisualContent};
pub use translate::Translator;
