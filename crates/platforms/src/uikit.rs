//! UIKit menu translation.
//!
//! UIKit menus nest natively: a group becomes an inline child menu and a
//! submenu becomes a regular child menu, so no identifier allocation is
//! needed. Item state travels as a set of presentation [`Attributes`];
//! a hidden item keeps its structural slot, it just carries
//! [`Attributes::HIDDEN`].
use flyout_core::icon::resolve_action_icon;
use flyout_core::menu::{Action, Group, Menu, MenuElement};
use flyout_core::{
    Command, CommandParameter, IconHandle, IconResolver, TranslateError, Translator,
};

bitflags::bitflags! {
    /// Presentation attributes of a [`UiAction`].
    ///
    /// At most one attribute is set per item: hidden wins over
    /// destructive, which wins over disabled.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Attributes: u8 {
        /// The item keeps its slot but is neither shown nor interactable.
        const HIDDEN = 1 << 0;
        /// The item is shown but cannot be selected.
        const DISABLED = 1 << 1;
        /// The item is styled as destructive.
        const DESTRUCTIVE = 1 << 2;
    }
}

/// A translated menu node: the root menu, an inline group, or a submenu.
#[derive(Debug, Clone)]
pub struct UiMenu {
    /// Title of the node; `None` on the root and on untitled inline
    /// menus.
    pub title: Option<String>,
    /// Whether the children render inline in the parent menu instead of
    /// behind a disclosure item.
    pub inline: bool,
    /// The child elements, in order.
    pub children: Vec<UiElement>,
}

/// A child of a [`UiMenu`].
#[derive(Debug, Clone)]
pub enum UiElement {
    /// An interactive leaf.
    Action(UiAction),
    /// A nested menu.
    Menu(UiMenu),
}

/// A translated interactive leaf.
#[derive(Debug, Clone)]
pub struct UiAction {
    /// Text label of the item.
    pub title: String,
    /// Secondary discoverability text.
    pub subtitle: Option<String>,
    /// Resolved icon, if any.
    pub icon: Option<IconHandle>,
    /// Presentation attributes.
    pub attributes: Attributes,
    /// Command executed on selection.
    pub command: Option<Command>,
    /// Parameter handed to the command.
    pub parameter: Option<CommandParameter>,
}

/// Translates a [`Menu`] into a [`UiMenu`] tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct UiKitTranslator;

impl Translator for UiKitTranslator {
    type Native = UiMenu;

    fn translate(
        &self,
        menu: &Menu,
        icons: &dyn IconResolver,
    ) -> Result<Self::Native, TranslateError> {
        Ok(UiMenu {
            title: menu.effective_title().map(str::to_owned),
            inline: false,
            children: menu_children(&menu.children, icons)?,
        })
    }
}

fn menu_children(
    children: &[MenuElement],
    icons: &dyn IconResolver,
) -> Result<Vec<UiElement>, TranslateError> {
    children
        .iter()
        .map(|element| match element {
            MenuElement::Action(action) => Ok(UiElement::Action(ui_action(action, icons))),
            MenuElement::Group(group) => Ok(UiElement::Menu(inline_group(group, icons)?)),
            MenuElement::Submenu(submenu) => Ok(UiElement::Menu(submenu_node(submenu, icons)?)),
        })
        .collect()
}

fn inline_group(group: &Group, icons: &dyn IconResolver) -> Result<UiMenu, TranslateError> {
    let children = group
        .children
        .iter()
        .map(|element| match element {
            MenuElement::Action(action) => Ok(UiElement::Action(ui_action(action, icons))),
            MenuElement::Group(_) => Err(TranslateError::NestedGroup),
            MenuElement::Submenu(submenu) => Ok(UiElement::Menu(submenu_node(submenu, icons)?)),
        })
        .collect::<Result<_, _>>()?;

    Ok(UiMenu {
        title: group.title.clone().filter(|title| !title.is_empty()),
        inline: true,
        children,
    })
}

fn submenu_node(submenu: &Menu, icons: &dyn IconResolver) -> Result<UiMenu, TranslateError> {
    let title = submenu.effective_title().map(str::to_owned);

    Ok(UiMenu {
        // An untitled submenu renders inline here; UIKit supports it, so
        // there is no structural title requirement on this platform.
        inline: title.is_none(),
        title,
        children: menu_children(&submenu.children, icons)?,
    })
}

fn ui_action(action: &Action, icons: &dyn IconResolver) -> UiAction {
    let attributes = if !action.is_visible {
        Attributes::HIDDEN
    } else if action.is_destructive {
        Attributes::DESTRUCTIVE
    } else if !action.is_enabled {
        Attributes::DISABLED
    } else {
        Attributes::empty()
    };

    UiAction {
        title: action.title.clone(),
        subtitle: action.subtitle.clone(),
        icon: resolve_action_icon(action, icons, None),
        attributes,
        command: action.command.clone(),
        parameter: action.command_parameter.clone(),
    }
}
