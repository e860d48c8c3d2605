//! Android popup-menu translation.
//!
//! Android menus are flat per scope: every entry is added with a group id,
//! an item id, and an order, and the platform draws divider lines between
//! runs of different group ids. Ids are allocated by walking the tree:
//!
//! - An action takes the current item id and advances it.
//! - A group allocates a fresh group id for its run and burns another on
//!   the way out, so the items before and after it always sit in different
//!   groups and get their dividers.
//! - A submenu takes one group id and one item id in the parent scope and
//!   starts over at `(0, 0)` inside its own scope.
use crate::DESTRUCTIVE_TINT;

use flyout_core::icon::resolve_action_icon;
use flyout_core::menu::{Action, Group, Menu, MenuElement};
use flyout_core::{
    Color, Command, CommandParameter, IconHandle, IconResolver, TranslateError, Translator,
};

/// Logical pixel size bitmap icons are scaled to.
const ICON_SIZE: u32 = 32;

/// A translated menu scope: the root menu or one submenu.
#[derive(Debug, Clone)]
pub struct AndroidMenu {
    /// The entries of the scope, in the order they are added.
    pub entries: Vec<AndroidEntry>,
    /// Whether the platform should draw dividers between groups in this
    /// scope.
    pub group_divider: bool,
}

/// One entry of an [`AndroidMenu`] scope.
#[derive(Debug, Clone)]
pub struct AndroidEntry {
    /// Group id of the entry within its scope.
    pub group_id: i32,
    /// Item id of the entry within its scope.
    pub item_id: i32,
    /// Sort order of the entry; mirrors [`item_id`](Self::item_id).
    pub order: i32,
    /// Text label of the entry.
    pub title: String,
    /// What the entry is.
    pub kind: AndroidEntryKind,
}

/// The payload of an [`AndroidEntry`].
#[derive(Debug, Clone)]
pub enum AndroidEntryKind {
    /// An interactive item.
    Item {
        /// Whether the item can be selected.
        enabled: bool,
        /// Whether the item is shown. Hidden items keep their slot and
        /// their ids.
        visible: bool,
        /// Resolved icon, if any.
        icon: Option<IconHandle>,
        /// Icon tint; set for destructive enabled items.
        tint: Option<Color>,
        /// Command executed on selection.
        command: Option<Command>,
        /// Parameter handed to the command.
        parameter: Option<CommandParameter>,
    },
    /// A nested submenu with its own id scope.
    Submenu(AndroidMenu),
}

/// Translates a [`Menu`] into [`AndroidMenu`] scopes.
#[derive(Debug, Clone, Copy, Default)]
pub struct AndroidTranslator;

impl Translator for AndroidTranslator {
    type Native = AndroidMenu;

    fn translate(
        &self,
        menu: &Menu,
        icons: &dyn IconResolver,
    ) -> Result<Self::Native, TranslateError> {
        translate_scope(&menu.children, icons)
    }
}

fn translate_scope(
    children: &[MenuElement],
    icons: &dyn IconResolver,
) -> Result<AndroidMenu, TranslateError> {
    let mut entries = Vec::new();
    let mut has_group = false;
    let mut group_id = 0;
    let mut item_id = 0;

    for element in children {
        match element {
            MenuElement::Action(action) => {
                entries.push(action_entry(action, group_id, item_id, icons));
                item_id += 1;
            }
            MenuElement::Group(group) => {
                has_group = true;
                group_id += 1;
                item_id = add_group(group, &mut entries, group_id, item_id, icons)?;
                group_id += 1;
            }
            MenuElement::Submenu(submenu) => {
                entries.push(submenu_entry(submenu, group_id, item_id, icons)?);
                group_id += 1;
                item_id += 1;
            }
        }
    }

    Ok(AndroidMenu {
        entries,
        group_divider: has_group,
    })
}

fn add_group(
    group: &Group,
    entries: &mut Vec<AndroidEntry>,
    group_id: i32,
    mut item_id: i32,
    icons: &dyn IconResolver,
) -> Result<i32, TranslateError> {
    for element in &group.children {
        match element {
            MenuElement::Action(action) => {
                entries.push(action_entry(action, group_id, item_id, icons));
            }
            MenuElement::Group(_) => return Err(TranslateError::NestedGroup),
            MenuElement::Submenu(submenu) => {
                if submenu.effective_title().is_none() {
                    return Err(TranslateError::UntitledSubmenu);
                }

                entries.push(submenu_entry(submenu, group_id, item_id, icons)?);
            }
        }

        item_id += 1;
    }

    Ok(item_id)
}

fn action_entry(
    action: &Action,
    group_id: i32,
    item_id: i32,
    icons: &dyn IconResolver,
) -> AndroidEntry {
    let tint = (action.is_destructive && action.is_enabled).then_some(DESTRUCTIVE_TINT);

    AndroidEntry {
        group_id,
        item_id,
        order: item_id,
        title: action.title.clone(),
        kind: AndroidEntryKind::Item {
            enabled: action.is_enabled,
            visible: action.is_visible,
            icon: resolve_action_icon(action, icons, Some(ICON_SIZE)),
            tint,
            command: action.command.clone(),
            parameter: action.command_parameter.clone(),
        },
    }
}

fn submenu_entry(
    submenu: &Menu,
    group_id: i32,
    item_id: i32,
    icons: &dyn IconResolver,
) -> Result<AndroidEntry, TranslateError> {
    Ok(AndroidEntry {
        group_id,
        item_id,
        order: item_id,
        title: submenu.title.clone().unwrap_or_default(),
        kind: AndroidEntryKind::Submenu(translate_scope(&submenu.children, icons)?),
    })
}
