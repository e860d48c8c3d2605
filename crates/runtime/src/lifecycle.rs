//! The attach lifecycle.
//!
//! Every element moves through `Unbound → PendingHandler → Bound` and
//! back. Attachment is requested per [`Concern`] the moment its property
//! transitions from empty to non-empty; the real hook installation waits
//! until the element's platform handle exists. Detachment reverses
//! exactly what was installed and cancels a still-pending readiness
//! subscription, so clearing a property mid-wait can never bind later.
use crate::binding::{BindingState, Concern, MenuHooks, Phase};
use crate::context_menu::Inner;
use crate::host::{ElementId, GestureToken, Host, Status};

use flyout_core::{Translator, TriggerMode};

use std::rc::Rc;

enum Attach {
    Install,
    Subscribe,
    Nothing,
}

impl<H, T> Inner<H, T>
where
    H: Host + 'static,
    T: Translator<Native = H::Native> + 'static,
{
    /// Requests attachment of `concern` for the element, deferring until
    /// the platform handle exists.
    pub(crate) fn attach(self: &Rc<Self>, element: ElementId, concern: Concern) {
        let ready = self.host.handle_ready(element);

        let next = {
            let mut bindings = self.bindings.borrow_mut();
            let state = bindings.entry(element).or_default();

            if state.wants(concern) {
                Attach::Nothing
            } else {
                state.set_wants(concern, true);

                match state.phase {
                    Phase::Bound => Attach::Install,
                    Phase::PendingHandler(_) => Attach::Nothing,
                    Phase::Unbound => {
                        if ready {
                            state.phase = Phase::Bound;
                            Attach::Install
                        } else {
                            Attach::Subscribe
                        }
                    }
                }
            }
        };

        match next {
            Attach::Install => self.install(element, concern),
            Attach::Subscribe => {
                log::trace!("deferring attach of {element:?} until its handle is ready");

                let weak = Rc::downgrade(self);
                let token = self.host.subscribe_handle_ready(
                    element,
                    Rc::new(move || {
                        if let Some(inner) = weak.upgrade() {
                            inner.handle_became_ready(element);
                        }
                    }),
                );

                let mut bindings = self.bindings.borrow_mut();
                if let Some(state) = bindings.get_mut(&element) {
                    state.phase = Phase::PendingHandler(token);
                }
            }
            Attach::Nothing => {}
        }
    }

    /// One-shot readiness callback. A spurious second invocation finds
    /// the element already bound and does nothing.
    pub(crate) fn handle_became_ready(self: &Rc<Self>, element: ElementId) {
        let (install_menu, install_click) = {
            let mut bindings = self.bindings.borrow_mut();
            let Some(state) = bindings.get_mut(&element) else {
                return;
            };
            let Phase::PendingHandler(_) = state.phase else {
                return;
            };

            state.phase = Phase::Bound;
            (state.wants_menu, state.wants_click)
        };

        if install_menu {
            self.install(element, Concern::Menu);
        }
        if install_click {
            self.install(element, Concern::Click);
        }
    }

    /// Installs the hooks of `concern` against the live handle.
    pub(crate) fn install(self: &Rc<Self>, element: ElementId, concern: Concern) {
        if self.host.is_collection(element) {
            self.install_container(element, concern);
            return;
        }

        match concern {
            Concern::Menu => self.install_menu_hooks(element),
            Concern::Click => self.install_click_hook(element),
        }
    }

    fn install_menu_hooks(self: &Rc<Self>, element: ElementId) {
        let mode = {
            let bindings = self.bindings.borrow();
            let Some(state) = bindings.get(&element) else {
                return;
            };
            if state.menu_hooks.is_some() {
                return;
            }

            let source = state.config_source.unwrap_or(element);
            bindings
                .get(&source)
                .map_or_else(TriggerMode::default, |config| config.trigger)
        };

        let hooks = match mode {
            TriggerMode::Click => {
                let weak = Rc::downgrade(self);
                let tap = self.host.on_tap(
                    element,
                    Rc::new(move || {
                        weak.upgrade()
                            .map_or(Status::Ignored, |inner| inner.menu_tap(element))
                    }),
                );

                MenuHooks::Click { tap }
            }
            TriggerMode::LongPress => {
                let weak = Rc::downgrade(self);
                let press = self.host.on_press(
                    element,
                    Rc::new(move || {
                        weak.upgrade()
                            .map_or(Status::Ignored, |inner| inner.press_down(element))
                    }),
                );

                let weak = Rc::downgrade(self);
                let up = self.host.on_press_up(
                    element,
                    Rc::new(move || {
                        weak.upgrade()
                            .map_or(Status::Ignored, |inner| inner.press_released(element))
                    }),
                );

                let weak = Rc::downgrade(self);
                let cancel = self.host.on_press_cancel(
                    element,
                    Rc::new(move || {
                        weak.upgrade()
                            .map_or(Status::Ignored, |inner| inner.press_released(element))
                    }),
                );

                MenuHooks::LongPress { press, up, cancel }
            }
        };

        let mut bindings = self.bindings.borrow_mut();
        if let Some(state) = bindings.get_mut(&element) {
            state.menu_hooks = Some(hooks);
        }
    }

    fn install_click_hook(self: &Rc<Self>, element: ElementId) {
        {
            let bindings = self.bindings.borrow();
            let Some(state) = bindings.get(&element) else {
                return;
            };
            if state.click_hook.is_some() {
                return;
            }
        }

        let weak = Rc::downgrade(self);
        let token = self.host.on_tap(
            element,
            Rc::new(move || {
                weak.upgrade()
                    .map_or(Status::Ignored, |inner| inner.click_tap(element))
            }),
        );

        let mut bindings = self.bindings.borrow_mut();
        if let Some(state) = bindings.get_mut(&element) {
            state.click_hook = Some(token);
        }
    }

    /// Releases everything `concern` installed on the element. Idempotent:
    /// detaching an already-detached concern does nothing.
    pub(crate) fn detach(self: &Rc<Self>, element: ElementId, concern: Concern) {
        if self.host.is_collection(element) {
            self.detach_container(element, concern);
            return;
        }

        let (tokens, pending) = {
            let mut bindings = self.bindings.borrow_mut();
            let Some(state) = bindings.get_mut(&element) else {
                return;
            };
            if !state.wants(concern) {
                return;
            }

            state.set_wants(concern, false);

            let tokens: Vec<GestureToken> = match concern {
                Concern::Menu => state
                    .menu_hooks
                    .take()
                    .map(|hooks| hooks.tokens())
                    .unwrap_or_default(),
                Concern::Click => state.click_hook.take().into_iter().collect(),
            };

            let pending = if state.wants_any() {
                None
            } else {
                state.config_source = None;

                match state.phase {
                    Phase::PendingHandler(token) => {
                        state.phase = Phase::Unbound;
                        Some(token)
                    }
                    Phase::Bound => {
                        state.phase = Phase::Unbound;
                        None
                    }
                    Phase::Unbound => None,
                }
            };

            (tokens, pending)
        };

        for token in tokens {
            self.host.remove_gesture(token);
        }

        if concern == Concern::Menu {
            self.cancel_press(element);
        }

        if let Some(token) = pending {
            self.host.cancel_handle_ready(token);
        }

        self.cleanup(element);
    }

    /// Drops the element's record once every field is back to empty.
    pub(crate) fn cleanup(&self, element: ElementId) {
        let mut bindings = self.bindings.borrow_mut();
        if bindings
            .get(&element)
            .is_some_and(BindingState::is_empty)
        {
            let _ = bindings.remove(&element);
        }
    }
}
