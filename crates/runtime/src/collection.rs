//! Child tracking for recycling collection containers.
//!
//! A container carries the menu/click configuration; each realized child
//! visual gets its own hooks bound against the container's configuration
//! and the child's own data context. Children are registered as the
//! container realizes them and unregistered as they are recycled, with
//! detach strictly before unregistration so a native hook can never fire
//! against a visual the engine no longer tracks.
use crate::binding::{Concern, Phase};
use crate::context_menu::Inner;
use crate::host::{ElementId, Host};

use flyout_core::Translator;

use std::rc::Rc;

impl<H, T> Inner<H, T>
where
    H: Host + 'static,
    T: Translator<Native = H::Native> + 'static,
{
    /// Registers a realized child and, if the container currently has an
    /// active configuration, attaches it immediately.
    pub(crate) fn register_child(self: &Rc<Self>, container: ElementId, child: ElementId) {
        let (attach_menu, attach_click) = {
            let mut bindings = self.bindings.borrow_mut();
            let state = bindings.entry(container).or_default();
            state.children.push(child);

            (state.wants_menu, state.wants_click)
        };

        log::trace!("registered child {child:?} of {container:?}");

        if attach_menu {
            self.attach_child(child, container, Concern::Menu);
        }
        if attach_click {
            self.attach_child(child, container, Concern::Click);
        }
    }

    /// Detaches a child's hooks, then drops its registration.
    pub(crate) fn unregister_child(self: &Rc<Self>, container: ElementId, child: ElementId) {
        self.detach(child, Concern::Menu);
        self.detach(child, Concern::Click);

        {
            let mut bindings = self.bindings.borrow_mut();
            if let Some(state) = bindings.get_mut(&container) {
                if let Some(index) = state.children.iter().position(|c| *c == child) {
                    let _ = state.children.remove(index);
                }
            }
        }

        log::trace!("unregistered child {child:?} of {container:?}");

        self.cleanup(child);
        self.cleanup(container);
    }

    fn attach_child(self: &Rc<Self>, child: ElementId, container: ElementId, concern: Concern) {
        {
            let mut bindings = self.bindings.borrow_mut();
            let state = bindings.entry(child).or_default();
            state.config_source = Some(container);
        }

        self.attach(child, concern);
    }

    /// Container-level install: subscribe to child lifecycle events for
    /// the lifetime of the attachment and attach every registered child.
    pub(crate) fn install_container(self: &Rc<Self>, container: ElementId, concern: Concern) {
        let need_subscription = {
            let bindings = self.bindings.borrow();
            bindings
                .get(&container)
                .is_some_and(|state| state.children_subscription.is_none())
        };

        if need_subscription {
            let weak = Rc::downgrade(self);
            let on_added: Rc<dyn Fn(ElementId)> = Rc::new(move |child| {
                if let Some(inner) = weak.upgrade() {
                    inner.register_child(container, child);
                }
            });

            let weak = Rc::downgrade(self);
            let on_removed: Rc<dyn Fn(ElementId)> = Rc::new(move |child| {
                if let Some(inner) = weak.upgrade() {
                    inner.unregister_child(container, child);
                }
            });

            let token = self.host.subscribe_children(container, on_added, on_removed);

            let mut bindings = self.bindings.borrow_mut();
            if let Some(state) = bindings.get_mut(&container) {
                state.children_subscription = Some(token);
            }
        }

        let children = {
            let bindings = self.bindings.borrow();
            bindings
                .get(&container)
                .map(|state| state.children.clone())
                .unwrap_or_default()
        };

        for child in children {
            self.attach_child(child, container, concern);
        }
    }

    /// Container-level detach: detach every registered child and, once no
    /// concern remains, drop the child-lifecycle subscription. The
    /// registrations themselves survive — children stay realized.
    pub(crate) fn detach_container(self: &Rc<Self>, container: ElementId, concern: Concern) {
        let (children, subscription, pending) = {
            let mut bindings = self.bindings.borrow_mut();
            let Some(state) = bindings.get_mut(&container) else {
                return;
            };
            if !state.wants(concern) {
                return;
            }

            state.set_wants(concern, false);

            let (subscription, pending) = if state.wants_any() {
                (None, None)
            } else {
                let pending = match state.phase {
                    Phase::PendingHandler(token) => {
                        state.phase = Phase::Unbound;
                        Some(token)
                    }
                    Phase::Bound => {
                        state.phase = Phase::Unbound;
                        None
                    }
                    Phase::Unbound => None,
                };

                (state.children_subscription.take(), pending)
            };

            (state.children.clone(), subscription, pending)
        };

        for child in children {
            self.detach(child, concern);
            self.cleanup(child);
        }

        if let Some(token) = subscription {
            self.host.unsubscribe_children(token);
        }
        if let Some(token) = pending {
            self.host.cancel_handle_ready(token);
        }

        self.cleanup(container);
    }
}
