//! The engine facade.
use crate::binding::{BindingState, Concern};
use crate::host::{ElementId, Host};
use crate::trigger::PressConfig;

use flyout_core::{
    Command, CommandParameter, MenuTemplate, Preview, TranslateError, Translator, TriggerMode,
};

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::rc::Rc;

/// Attaches declarative context menus (and click commands) to host UI
/// elements.
///
/// One engine instance serves an entire host; it owns the side table of
/// per-element binding state and a single stateless translator chosen at
/// composition time. Attach and detach are driven
/// purely by setting and clearing the element properties below — there is
/// no other API surface:
///
/// - [`set_menu`](Self::set_menu)
/// - [`set_preview`](Self::set_preview)
/// - [`set_trigger_mode`](Self::set_trigger_mode)
/// - [`set_click_command`](Self::set_click_command) (+ parameter)
///
/// Setting a property from empty to non-empty attaches; clearing it back
/// detaches and releases every installed hook. Replacing one non-empty
/// value with another only swaps the stored value: the next activation
/// reads the new one. Changing the trigger mode while a menu is attached
/// is the exception — the underlying native hooks differ structurally, so
/// the engine detaches and immediately reattaches with the new mode.
pub struct ContextMenu<H, T>
where
    H: Host,
    T: Translator<Native = H::Native>,
{
    inner: Rc<Inner<H, T>>,
}

pub(crate) struct Inner<H, T>
where
    H: Host,
    T: Translator<Native = H::Native>,
{
    pub(crate) host: H,
    pub(crate) translator: T,
    pub(crate) press_config: PressConfig,
    pub(crate) bindings: RefCell<FxHashMap<ElementId, BindingState>>,
}

impl<H, T> ContextMenu<H, T>
where
    H: Host + 'static,
    T: Translator<Native = H::Native> + 'static,
{
    /// Creates a new engine over the given host and translator.
    pub fn new(host: H, translator: T) -> Self {
        Self::with_press_config(host, translator, PressConfig::default())
    }

    /// Creates a new engine with a custom [`PressConfig`].
    pub fn with_press_config(host: H, translator: T, press_config: PressConfig) -> Self {
        Self {
            inner: Rc::new(Inner {
                host,
                translator,
                press_config,
                bindings: RefCell::new(FxHashMap::default()),
            }),
        }
    }

    /// The host this engine drives.
    pub fn host(&self) -> &H {
        &self.inner.host
    }

    /// Sets or clears the menu of an element.
    pub fn set_menu(&self, element: ElementId, menu: Option<MenuTemplate>) {
        let transition = {
            let mut bindings = self.inner.bindings.borrow_mut();
            let state = bindings.entry(element).or_default();
            let had = state.menu.is_some();
            state.menu = menu;
            (had, state.menu.is_some())
        };

        match transition {
            (false, true) => self.inner.attach(element, Concern::Menu),
            (true, false) => self.inner.detach(element, Concern::Menu),
            _ => {}
        }

        self.inner.cleanup(element);
    }

    /// The menu of an element, if any.
    pub fn menu(&self, element: ElementId) -> Option<MenuTemplate> {
        self.inner
            .bindings
            .borrow()
            .get(&element)
            .and_then(|state| state.menu.clone())
    }

    /// Sets or clears the preview configuration of an element.
    ///
    /// The preview is read at activation time; it neither attaches nor
    /// detaches anything by itself.
    pub fn set_preview(&self, element: ElementId, preview: Option<Preview>) {
        {
            let mut bindings = self.inner.bindings.borrow_mut();
            let state = bindings.entry(element).or_default();
            state.preview = preview;
        }

        self.inner.cleanup(element);
    }

    /// The preview configuration of an element, if any.
    pub fn preview(&self, element: ElementId) -> Option<Preview> {
        self.inner
            .bindings
            .borrow()
            .get(&element)
            .and_then(|state| state.preview.clone())
    }

    /// Sets the trigger mode of an element.
    ///
    /// If a menu is currently attached, it is detached and immediately
    /// reattached using the new mode.
    pub fn set_trigger_mode(&self, element: ElementId, mode: TriggerMode) {
        let reattach = {
            let mut bindings = self.inner.bindings.borrow_mut();
            let state = bindings.entry(element).or_default();
            let changed = state.trigger != mode;
            state.trigger = mode;
            changed && state.wants_menu
        };

        if reattach {
            self.inner.detach(element, Concern::Menu);
            self.inner.attach(element, Concern::Menu);
        }

        self.inner.cleanup(element);
    }

    /// The trigger mode of an element.
    pub fn trigger_mode(&self, element: ElementId) -> TriggerMode {
        self.inner
            .bindings
            .borrow()
            .get(&element)
            .map_or_else(TriggerMode::default, |state| state.trigger)
    }

    /// Sets or clears the click command of an element.
    pub fn set_click_command(&self, element: ElementId, command: Option<Command>) {
        let transition = {
            let mut bindings = self.inner.bindings.borrow_mut();
            let state = bindings.entry(element).or_default();
            let had = state.click_command.is_some();
            state.click_command = command;
            (had, state.click_command.is_some())
        };

        match transition {
            (false, true) => self.inner.attach(element, Concern::Click),
            (true, false) => self.inner.detach(element, Concern::Click),
            _ => {}
        }

        self.inner.cleanup(element);
    }

    /// The click command of an element, if any.
    pub fn click_command(&self, element: ElementId) -> Option<Command> {
        self.inner
            .bindings
            .borrow()
            .get(&element)
            .and_then(|state| state.click_command.clone())
    }

    /// Sets or clears the parameter handed to the click command.
    ///
    /// When absent, the element's binding context is passed instead.
    pub fn set_click_command_parameter(
        &self,
        element: ElementId,
        parameter: Option<CommandParameter>,
    ) {
        {
            let mut bindings = self.inner.bindings.borrow_mut();
            let state = bindings.entry(element).or_default();
            state.click_parameter = parameter;
        }

        self.inner.cleanup(element);
    }

    /// The click command parameter of an element, if any.
    pub fn click_command_parameter(&self, element: ElementId) -> Option<CommandParameter> {
        self.inner
            .bindings
            .borrow()
            .get(&element)
            .and_then(|state| state.click_parameter.clone())
    }

    /// Registers a realized child of a collection container.
    ///
    /// If the container currently has a menu or click configuration, the
    /// child is attached immediately.
    pub fn register_child(&self, container: ElementId, child: ElementId) {
        self.inner.register_child(container, child);
    }

    /// Unregisters a child that is being recycled or removed.
    ///
    /// The child's hooks are released before the registration is dropped,
    /// so no event can fire against a recycled visual.
    pub fn unregister_child(&self, container: ElementId, child: ElementId) {
        self.inner.unregister_child(container, child);
    }

    /// Displays the element's menu now, with its preview if one is
    /// configured.
    ///
    /// Does nothing if the element has no menu set.
    pub fn show_menu(&self, element: ElementId) -> Result<(), TranslateError> {
        self.inner.present(element, true)
    }
}
