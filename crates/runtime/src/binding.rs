//! Per-element attached state.
use crate::host::{ChildrenToken, ElementId, GestureToken, ReadyToken, TimerToken};

use flyout_core::{Command, CommandParameter, MenuTemplate, Preview, TriggerMode};

/// Where an element sits in the attach lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Phase {
    /// Nothing installed; the element has no activation configuration.
    #[default]
    Unbound,
    /// Configuration is set but the platform handle does not exist yet;
    /// the engine is waiting on a one-shot readiness notification.
    PendingHandler(ReadyToken),
    /// Hooks are installed against the live handle.
    Bound,
}

/// The two independently attachable concerns of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Concern {
    /// The context menu itself.
    Menu,
    /// The plain click command.
    Click,
}

/// Gesture hooks installed for the menu concern, by trigger mode.
#[derive(Debug)]
pub(crate) enum MenuHooks {
    /// A single tap hook; the menu opens immediately.
    Click {
        /// The installed tap hook.
        tap: GestureToken,
    },
    /// Press hooks driving the long-press state machine.
    LongPress {
        /// The press-down hook.
        press: GestureToken,
        /// The press-up hook.
        up: GestureToken,
        /// The press-cancel hook.
        cancel: GestureToken,
    },
}

impl MenuHooks {
    /// The installed tokens, for removal.
    pub fn tokens(&self) -> Vec<GestureToken> {
        match self {
            MenuHooks::Click { tap } => vec![*tap],
            MenuHooks::LongPress { press, up, cancel } => vec![*press, *up, *cancel],
        }
    }
}

/// Timers pending while a press is held.
#[derive(Debug, Default)]
pub(crate) struct PressState {
    /// Deferred shrink-feedback callback.
    pub shrink: Option<TimerToken>,
    /// Long-press threshold callback.
    pub fire: Option<TimerToken>,
}

impl PressState {
    pub fn is_idle(&self) -> bool {
        self.shrink.is_none() && self.fire.is_none()
    }
}

/// Everything the engine tracks for one element.
///
/// Records are created lazily by the first property set (or child
/// registration) touching the element, and removed as soon as every field
/// is back to its empty state.
#[derive(Debug, Default)]
pub(crate) struct BindingState {
    pub menu: Option<MenuTemplate>,
    pub preview: Option<Preview>,
    pub trigger: TriggerMode,
    pub click_command: Option<Command>,
    pub click_parameter: Option<CommandParameter>,

    /// Concerns requested by configuration (or by a container, for
    /// registered children). Installed hooks mirror these once bound.
    pub wants_menu: bool,
    pub wants_click: bool,

    pub phase: Phase,
    pub menu_hooks: Option<MenuHooks>,
    pub click_hook: Option<GestureToken>,
    pub press: PressState,

    /// Realized children, for collection containers, in registration
    /// order.
    pub children: Vec<ElementId>,
    pub children_subscription: Option<ChildrenToken>,

    /// For registered children: the container whose configuration they
    /// follow.
    pub config_source: Option<ElementId>,
}

impl BindingState {
    pub fn wants(&self, concern: Concern) -> bool {
        match concern {
            Concern::Menu => self.wants_menu,
            Concern::Click => self.wants_click,
        }
    }

    pub fn set_wants(&mut self, concern: Concern, wanted: bool) {
        match concern {
            Concern::Menu => self.wants_menu = wanted,
            Concern::Click => self.wants_click = wanted,
        }
    }

    pub fn wants_any(&self) -> bool {
        self.wants_menu || self.wants_click
    }

    /// Whether the record carries no state worth keeping.
    pub fn is_empty(&self) -> bool {
        self.menu.is_none()
            && self.preview.is_none()
            && self.trigger == TriggerMode::default()
            && self.click_command.is_none()
            && self.click_parameter.is_none()
            && !self.wants_any()
            && self.phase == Phase::Unbound
            && self.menu_hooks.is_none()
            && self.click_hook.is_none()
            && self.press.is_idle()
            && self.children.is_empty()
            && self.children_subscription.is_none()
            && self.config_source.is_none()
    }
}
