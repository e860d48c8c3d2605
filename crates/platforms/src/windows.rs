//! Windows flyout translation.
//!
//! Flyouts are item lists with explicit separators. Groups flatten into
//! the surrounding list, separated from neighbors on either side; a titled
//! group additionally renders its title as a disabled header item. An
//! untitled submenu cannot exist structurally, so its children are
//! flattened inline instead. Invisible actions are omitted entirely; the
//! list carries no identifiers, so omission cannot disturb siblings.
use crate::DESTRUCTIVE_TINT;

use flyout_core::icon::resolve_action_icon;
use flyout_core::menu::{Action, Group, Menu, MenuElement};
use flyout_core::{
    Color, Command, CommandParameter, IconHandle, IconResolver, TranslateError, Translator,
};

/// A translated flyout: the root menu or the item list of a sub-item.
#[derive(Debug, Clone)]
pub struct FlyoutMenu {
    /// The items of the flyout, in order.
    pub items: Vec<FlyoutItem>,
}

/// One item of a [`FlyoutMenu`].
#[derive(Debug, Clone)]
pub enum FlyoutItem {
    /// A selectable (or header) item.
    Item(FlyoutEntry),
    /// A separator line.
    Separator,
    /// An item opening a nested flyout.
    SubItem(FlyoutSubItem),
}

/// A selectable flyout entry.
#[derive(Debug, Clone)]
pub struct FlyoutEntry {
    /// Text label of the entry.
    pub title: String,
    /// Whether the entry can be selected. Group headers are disabled
    /// entries.
    pub enabled: bool,
    /// Resolved icon, if any.
    pub icon: Option<IconHandle>,
    /// Foreground tint; set for destructive entries.
    pub foreground: Option<Color>,
    /// Command executed on selection.
    pub command: Option<Command>,
    /// Parameter handed to the command.
    pub parameter: Option<CommandParameter>,
}

/// A nested flyout behind a titled item.
#[derive(Debug, Clone)]
pub struct FlyoutSubItem {
    /// Text label of the disclosure item.
    pub title: String,
    /// The nested items, in order.
    pub items: Vec<FlyoutItem>,
}

/// Translates a [`Menu`] into a [`FlyoutMenu`].
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowsTranslator;

impl Translator for WindowsTranslator {
    type Native = FlyoutMenu;

    fn translate(
        &self,
        menu: &Menu,
        icons: &dyn IconResolver,
    ) -> Result<Self::Native, TranslateError> {
        let mut items = Vec::new();
        add_children(&menu.children, &mut items, icons)?;

        Ok(FlyoutMenu { items })
    }
}

fn add_children(
    children: &[MenuElement],
    items: &mut Vec<FlyoutItem>,
    icons: &dyn IconResolver,
) -> Result<(), TranslateError> {
    for (index, element) in children.iter().enumerate() {
        match element {
            MenuElement::Action(action) => add_action(action, items, icons),
            MenuElement::Submenu(submenu) => add_submenu(submenu, items, icons)?,
            MenuElement::Group(group) => {
                separate(items);
                add_group(group, items, icons)?;

                if index + 1 < children.len() {
                    separate(items);
                }
            }
        }
    }

    Ok(())
}

fn add_group(
    group: &Group,
    items: &mut Vec<FlyoutItem>,
    icons: &dyn IconResolver,
) -> Result<(), TranslateError> {
    if let Some(title) = group.title.as_deref().filter(|title| !title.is_empty()) {
        items.push(FlyoutItem::Item(FlyoutEntry {
            title: title.to_owned(),
            enabled: false,
            icon: None,
            foreground: None,
            command: None,
            parameter: None,
        }));
    }

    for element in &group.children {
        match element {
            MenuElement::Action(action) => add_action(action, items, icons),
            MenuElement::Group(_) => return Err(TranslateError::NestedGroup),
            MenuElement::Submenu(submenu) => add_submenu(submenu, items, icons)?,
        }
    }

    Ok(())
}

fn add_submenu(
    submenu: &Menu,
    items: &mut Vec<FlyoutItem>,
    icons: &dyn IconResolver,
) -> Result<(), TranslateError> {
    let Some(title) = submenu.effective_title() else {
        // No structural slot for an untitled submenu; fold its children
        // into the current list.
        return add_children(&submenu.children, items, icons);
    };

    let mut nested = Vec::new();
    add_children(&submenu.children, &mut nested, icons)?;

    items.push(FlyoutItem::SubItem(FlyoutSubItem {
        title: title.to_owned(),
        items: nested,
    }));

    Ok(())
}

fn add_action(action: &Action, items: &mut Vec<FlyoutItem>, icons: &dyn IconResolver) {
    if !action.is_visible {
        return;
    }

    items.push(FlyoutItem::Item(FlyoutEntry {
        title: action.title.clone(),
        enabled: action.is_enabled,
        icon: resolve_action_icon(action, icons, None),
        foreground: action.is_destructive.then_some(DESTRUCTIVE_TINT),
        command: action.command.clone(),
        parameter: action.command_parameter.clone(),
    }));
}

fn separate(items: &mut Vec<FlyoutItem>) {
    if !items.is_empty() && !matches!(items.last(), Some(FlyoutItem::Separator)) {
        items.push(FlyoutItem::Separator);
    }
}
