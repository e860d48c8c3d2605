//! The declarative context menu model.
//!
//! A context menu is a [`Menu`]: an ordered tree of [`MenuElement`]s. The
//! three element kinds mirror what every supported platform can express:
//!
//! - [`Action`] — an interactive leaf bound to a [`Command`].
//! - [`Group`] — children rendered inline, visually separated from their
//!   neighbors. Groups never nest.
//! - A submenu — a nested [`Menu`] opened from its parent.
//!
//! The model is owned by the application and never mutated by the engine.
//! Attach a [`MenuTemplate`] rather than a [`Menu`] so a fresh tree is
//! built against the current [`BindingContext`] at every activation.
use crate::command::{Command, CommandParameter};
use crate::context::BindingContext;
use crate::icon::IconSource;

use std::fmt;
use std::rc::Rc;

/// How menu display is triggered on a bound element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriggerMode {
    /// A sustained press opens the menu, with shrink feedback while the
    /// press is held.
    #[default]
    LongPress,
    /// A single tap opens the menu immediately, with no feedback.
    Click,
}

/// A node of the declarative menu tree.
#[derive(Debug, Clone)]
pub enum MenuElement {
    /// An interactive leaf item.
    Action(Action),
    /// A run of elements rendered inline with visual separation.
    Group(Group),
    /// A nested submenu.
    Submenu(Menu),
}

impl From<Action> for MenuElement {
    fn from(action: Action) -> Self {
        MenuElement::Action(action)
    }
}

impl From<Group> for MenuElement {
    fn from(group: Group) -> Self {
        MenuElement::Group(group)
    }
}

impl From<Menu> for MenuElement {
    fn from(menu: Menu) -> Self {
        MenuElement::Submenu(menu)
    }
}

/// An interactive menu item.
#[derive(Debug, Clone)]
pub struct Action {
    /// Text label of the item.
    pub title: String,
    /// Command executed when the item is selected.
    pub command: Option<Command>,
    /// Parameter handed to [`command`](Self::command) on execution.
    pub command_parameter: Option<CommandParameter>,
    /// Custom icon shown next to the label.
    pub icon: Option<IconSource>,
    /// Platform system icon name, preferred over [`icon`](Self::icon).
    pub system_icon: Option<String>,
    /// Whether the item can be selected.
    pub is_enabled: bool,
    /// Whether the item is shown.
    pub is_visible: bool,
    /// Whether the item is styled as destructive.
    pub is_destructive: bool,
    /// Secondary text shown below or beside the label, where supported.
    pub subtitle: Option<String>,
}

impl Action {
    /// Creates a new enabled, visible [`Action`] with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            command: None,
            command_parameter: None,
            icon: None,
            system_icon: None,
            is_enabled: true,
            is_visible: true,
            is_destructive: false,
            subtitle: None,
        }
    }

    /// Sets the command executed when the item is selected.
    #[must_use]
    pub fn command(mut self, command: Command) -> Self {
        self.command = Some(command);
        self
    }

    /// Sets the parameter handed to the command on execution.
    #[must_use]
    pub fn command_parameter(mut self, parameter: CommandParameter) -> Self {
        self.command_parameter = Some(parameter);
        self
    }

    /// Sets a custom icon.
    #[must_use]
    pub fn icon(mut self, icon: IconSource) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Sets a platform system icon name.
    #[must_use]
    pub fn system_icon(mut self, name: impl Into<String>) -> Self {
        self.system_icon = Some(name.into());
        self
    }

    /// Sets whether the item can be selected.
    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.is_enabled = enabled;
        self
    }

    /// Sets whether the item is shown.
    #[must_use]
    pub fn visible(mut self, visible: bool) -> Self {
        self.is_visible = visible;
        self
    }

    /// Styles the item as destructive.
    #[must_use]
    pub fn destructive(mut self) -> Self {
        self.is_destructive = true;
        self
    }

    /// Sets the secondary text.
    #[must_use]
    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }
}

/// A run of menu elements rendered inline, without nesting indirection,
/// but visually separated from surrounding items.
///
/// A [`Group`] may contain [`Action`]s and submenus, never another
/// [`Group`]; nesting groups is rejected at translation time.
#[derive(Debug, Clone)]
pub struct Group {
    /// Optional heading, rendered by platforms that support group headers.
    pub title: Option<String>,
    /// The elements of the group, in order.
    pub children: Vec<MenuElement>,
}

impl Group {
    /// Creates a new [`Group`] with the given children.
    pub fn new(children: Vec<MenuElement>) -> Self {
        Self {
            title: None,
            children,
        }
    }

    /// Sets the group heading.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// A menu: the root of a context menu, or a submenu when nested.
///
/// A submenu used as a direct member of its parent menu needs no title.
/// Inside a [`Group`], platforms without inline untitled submenus require
/// a non-empty title; platforms that support them flatten the submenu
/// inline instead.
#[derive(Debug, Clone)]
pub struct Menu {
    /// Title shown on the submenu item opening this menu.
    pub title: Option<String>,
    /// The elements of the menu, in order.
    pub children: Vec<MenuElement>,
}

impl Menu {
    /// Creates a new untitled [`Menu`] with the given children.
    pub fn new(children: Vec<MenuElement>) -> Self {
        Self {
            title: None,
            children,
        }
    }

    /// Sets the menu title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Returns the title, treating an empty string as absent.
    #[must_use]
    pub fn effective_title(&self) -> Option<&str> {
        self.title.as_deref().filter(|title| !title.is_empty())
    }
}

/// A factory producing a fresh [`Menu`] for a [`BindingContext`].
///
/// The engine invokes the template at every activation, so the tree always
/// reflects the current application state and the context of the element
/// that triggered it.
#[derive(Clone)]
pub struct MenuTemplate(Rc<dyn Fn(&BindingContext) -> Menu>);

impl MenuTemplate {
    /// Creates a new [`MenuTemplate`] from the given factory.
    pub fn new(factory: impl Fn(&BindingContext) -> Menu + 'static) -> Self {
        Self(Rc::new(factory))
    }

    /// Builds a fresh [`Menu`] for the given context.
    #[must_use]
    pub fn instantiate(&self, context: &BindingContext) -> Menu {
        (self.0)(context)
    }
}

impl fmt::Debug for MenuTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MenuTemplate(..)")
    }
}
