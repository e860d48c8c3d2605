//! A recording host for exercising the engine end to end.
//!
//! Every hook installation, timer, scale operation, and presentation is
//! observable, and time is advanced manually, so tests can assert exactly
//! what the engine installed and that detach reversed all of it.
#![allow(dead_code)]

use flyout_core::{BindingContext, IconHandle, IconResolver, IconSource, PreviewSpec, Rectangle};
use flyout_platforms::android::AndroidMenu;
use flyout_runtime::{
    ChildrenToken, ElementId, GestureToken, Host, ReadyToken, Status, TimerToken,
};

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::rc::Rc;
use std::time::Duration;

/// The platform long-press threshold the mock reports.
pub const LONG_PRESS: Duration = Duration::from_millis(500);

/// The kind of an installed gesture hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    Tap,
    Press,
    PressUp,
    PressCancel,
}

struct Gesture {
    token: GestureToken,
    element: ElementId,
    kind: GestureKind,
    handler: Rc<dyn Fn() -> Status>,
}

struct ReadySub {
    token: ReadyToken,
    element: ElementId,
    callback: Rc<dyn Fn()>,
}

struct Timer {
    token: TimerToken,
    deadline: u64,
    callback: Option<Box<dyn FnOnce()>>,
}

struct ChildSub {
    token: ChildrenToken,
    container: ElementId,
    on_added: Rc<dyn Fn(ElementId)>,
    on_removed: Rc<dyn Fn(ElementId)>,
}

/// A recorded scale operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScaleOp {
    Animate {
        element: ElementId,
        scale: f32,
        duration: Duration,
    },
    Cancel {
        element: ElementId,
    },
    Set {
        element: ElementId,
        scale: f32,
    },
}

/// A recorded menu presentation.
#[derive(Clone)]
pub struct Presented {
    pub element: ElementId,
    pub menu: AndroidMenu,
    pub preview: Option<PreviewSpec>,
}

#[derive(Default)]
pub struct MockHost {
    now: Cell<u64>,
    next_token: Cell<u64>,
    ready: RefCell<HashSet<ElementId>>,
    ready_subs: RefCell<Vec<ReadySub>>,
    cancelled_ready: Cell<usize>,
    gestures: RefCell<Vec<Gesture>>,
    removed_gestures: Cell<usize>,
    timers: RefCell<Vec<Timer>>,
    cancelled_timers: RefCell<Vec<TimerToken>>,
    scale_ops: RefCell<Vec<ScaleOp>>,
    child_subs: RefCell<Vec<ChildSub>>,
    collections: RefCell<HashSet<ElementId>>,
    contexts: RefCell<HashMap<ElementId, BindingContext>>,
    bounds: RefCell<HashMap<ElementId, Rectangle>>,
    presented: RefCell<Vec<Presented>>,
}

impl MockHost {
    pub fn new() -> Self {
        Self::default()
    }

    fn token(&self) -> u64 {
        let token = self.next_token.get();
        self.next_token.set(token + 1);
        token
    }

    /// Marks the element's platform handle as existing and fires pending
    /// readiness subscriptions.
    pub fn mark_ready(&self, element: ElementId) {
        let _ = self.ready.borrow_mut().insert(element);

        let due: Vec<Rc<dyn Fn()>> = {
            let mut subs = self.ready_subs.borrow_mut();
            let due = subs
                .iter()
                .filter(|sub| sub.element == element)
                .map(|sub| Rc::clone(&sub.callback))
                .collect();
            subs.retain(|sub| sub.element != element);
            due
        };

        for callback in due {
            callback();
        }
    }

    /// Clones the pending readiness callbacks of the element, letting a
    /// test fire one spuriously after the real notification.
    pub fn ready_handlers(&self, element: ElementId) -> Vec<Rc<dyn Fn()>> {
        self.ready_subs
            .borrow()
            .iter()
            .filter(|sub| sub.element == element)
            .map(|sub| Rc::clone(&sub.callback))
            .collect()
    }

    pub fn pending_ready_count(&self, element: ElementId) -> usize {
        self.ready_subs
            .borrow()
            .iter()
            .filter(|sub| sub.element == element)
            .count()
    }

    pub fn cancelled_ready_count(&self) -> usize {
        self.cancelled_ready.get()
    }

    pub fn gesture_kinds(&self, element: ElementId) -> Vec<GestureKind> {
        self.gestures
            .borrow()
            .iter()
            .filter(|gesture| gesture.element == element)
            .map(|gesture| gesture.kind)
            .collect()
    }

    pub fn gesture_tokens(&self, element: ElementId) -> Vec<GestureToken> {
        self.gestures
            .borrow()
            .iter()
            .filter(|gesture| gesture.element == element)
            .map(|gesture| gesture.token)
            .collect()
    }

    pub fn removed_gesture_count(&self) -> usize {
        self.removed_gestures.get()
    }

    fn fire(&self, element: ElementId, kind: GestureKind) -> Status {
        let handlers: Vec<Rc<dyn Fn() -> Status>> = {
            self.gestures
                .borrow()
                .iter()
                .filter(|gesture| gesture.element == element && gesture.kind == kind)
                .map(|gesture| Rc::clone(&gesture.handler))
                .collect()
        };

        handlers
            .into_iter()
            .fold(Status::Ignored, |status, handler| status.merge(handler()))
    }

    pub fn tap(&self, element: ElementId) -> Status {
        self.fire(element, GestureKind::Tap)
    }

    pub fn press(&self, element: ElementId) -> Status {
        self.fire(element, GestureKind::Press)
    }

    pub fn release(&self, element: ElementId) -> Status {
        self.fire(element, GestureKind::PressUp)
    }

    pub fn cancel_press_gesture(&self, element: ElementId) -> Status {
        self.fire(element, GestureKind::PressCancel)
    }

    /// Advances the clock, running due timer callbacks in deadline order.
    pub fn advance(&self, duration: Duration) {
        let target = self.now.get() + duration.as_millis() as u64;

        loop {
            let next = {
                let mut timers = self.timers.borrow_mut();
                let due = timers
                    .iter()
                    .enumerate()
                    .filter(|(_, timer)| timer.deadline <= target)
                    .min_by_key(|(_, timer)| timer.deadline)
                    .map(|(index, _)| index);

                due.map(|index| {
                    let mut timer = timers.remove(index);
                    (timer.deadline, timer.callback.take())
                })
            };

            match next {
                Some((deadline, Some(callback))) => {
                    self.now.set(deadline);
                    callback();
                }
                Some((_, None)) => {}
                None => break,
            }
        }

        self.now.set(target);
    }

    pub fn pending_timer_count(&self) -> usize {
        self.timers.borrow().len()
    }

    pub fn cancelled_timer_count(&self) -> usize {
        self.cancelled_timers.borrow().len()
    }

    pub fn scale_ops(&self) -> Vec<ScaleOp> {
        self.scale_ops.borrow().clone()
    }

    pub fn presented(&self) -> Vec<Presented> {
        self.presented.borrow().clone()
    }

    pub fn presented_count(&self) -> usize {
        self.presented.borrow().len()
    }

    pub fn make_collection(&self, element: ElementId) {
        let _ = self.collections.borrow_mut().insert(element);
    }

    pub fn set_context(&self, element: ElementId, context: BindingContext) {
        let _ = self.contexts.borrow_mut().insert(element, context);
    }

    pub fn set_bounds(&self, element: ElementId, bounds: Rectangle) {
        let _ = self.bounds.borrow_mut().insert(element, bounds);
    }

    pub fn child_subscription_count(&self, container: ElementId) -> usize {
        self.child_subs
            .borrow()
            .iter()
            .filter(|sub| sub.container == container)
            .count()
    }

    /// Simulates the container realizing a child visual.
    pub fn realize_child(&self, container: ElementId, child: ElementId) {
        let callbacks: Vec<Rc<dyn Fn(ElementId)>> = {
            self.child_subs
                .borrow()
                .iter()
                .filter(|sub| sub.container == container)
                .map(|sub| Rc::clone(&sub.on_added))
                .collect()
        };

        for callback in callbacks {
            callback(child);
        }
    }

    /// Simulates the container recycling a child visual.
    pub fn recycle_child(&self, container: ElementId, child: ElementId) {
        let callbacks: Vec<Rc<dyn Fn(ElementId)>> = {
            self.child_subs
                .borrow()
                .iter()
                .filter(|sub| sub.container == container)
                .map(|sub| Rc::clone(&sub.on_removed))
                .collect()
        };

        for callback in callbacks {
            callback(child);
        }
    }
}

impl IconResolver for MockHost {
    fn resolve_system(&self, name: &str, _size_hint: Option<u32>) -> Option<IconHandle> {
        Some(IconHandle::new(name.to_owned()))
    }

    fn resolve_source(&self, source: &IconSource, _size_hint: Option<u32>) -> Option<IconHandle> {
        match source {
            IconSource::File(path) => Some(IconHandle::new(path.clone())),
            IconSource::Resource(name) => Some(IconHandle::new(name.clone())),
        }
    }
}

impl Host for MockHost {
    type Native = AndroidMenu;

    fn handle_ready(&self, element: ElementId) -> bool {
        self.ready.borrow().contains(&element)
    }

    fn subscribe_handle_ready(&self, element: ElementId, callback: Rc<dyn Fn()>) -> ReadyToken {
        let token = ReadyToken(self.token());
        self.ready_subs.borrow_mut().push(ReadySub {
            token,
            element,
            callback,
        });
        token
    }

    fn cancel_handle_ready(&self, token: ReadyToken) {
        let mut subs = self.ready_subs.borrow_mut();
        let before = subs.len();
        subs.retain(|sub| sub.token != token);
        self.cancelled_ready
            .set(self.cancelled_ready.get() + before - subs.len());
    }

    fn on_tap(&self, element: ElementId, handler: Rc<dyn Fn() -> Status>) -> GestureToken {
        self.install_gesture(element, GestureKind::Tap, handler)
    }

    fn on_press(&self, element: ElementId, handler: Rc<dyn Fn() -> Status>) -> GestureToken {
        self.install_gesture(element, GestureKind::Press, handler)
    }

    fn on_press_up(&self, element: ElementId, handler: Rc<dyn Fn() -> Status>) -> GestureToken {
        self.install_gesture(element, GestureKind::PressUp, handler)
    }

    fn on_press_cancel(
        &self,
        element: ElementId,
        handler: Rc<dyn Fn() -> Status>,
    ) -> GestureToken {
        self.install_gesture(element, GestureKind::PressCancel, handler)
    }

    fn remove_gesture(&self, token: GestureToken) {
        let mut gestures = self.gestures.borrow_mut();
        let before = gestures.len();
        gestures.retain(|gesture| gesture.token != token);
        self.removed_gestures
            .set(self.removed_gestures.get() + before - gestures.len());
    }

    fn long_press_timeout(&self) -> Duration {
        LONG_PRESS
    }

    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerToken {
        let token = TimerToken(self.token());
        self.timers.borrow_mut().push(Timer {
            token,
            deadline: self.now.get() + delay.as_millis() as u64,
            callback: Some(callback),
        });
        token
    }

    fn cancel_timer(&self, token: TimerToken) {
        self.timers.borrow_mut().retain(|timer| timer.token != token);
        self.cancelled_timers.borrow_mut().push(token);
    }

    fn animate_scale(&self, element: ElementId, scale: f32, duration: Duration) {
        self.scale_ops.borrow_mut().push(ScaleOp::Animate {
            element,
            scale,
            duration,
        });
    }

    fn cancel_animations(&self, element: ElementId) {
        self.scale_ops.borrow_mut().push(ScaleOp::Cancel { element });
    }

    fn set_scale(&self, element: ElementId, scale: f32) {
        self.scale_ops
            .borrow_mut()
            .push(ScaleOp::Set { element, scale });
    }

    fn is_collection(&self, element: ElementId) -> bool {
        self.collections.borrow().contains(&element)
    }

    fn subscribe_children(
        &self,
        container: ElementId,
        on_added: Rc<dyn Fn(ElementId)>,
        on_removed: Rc<dyn Fn(ElementId)>,
    ) -> ChildrenToken {
        let token = ChildrenToken(self.token());
        self.child_subs.borrow_mut().push(ChildSub {
            token,
            container,
            on_added,
            on_removed,
        });
        token
    }

    fn unsubscribe_children(&self, token: ChildrenToken) {
        self.child_subs.borrow_mut().retain(|sub| sub.token != token);
    }

    fn binding_context(&self, element: ElementId) -> BindingContext {
        self.contexts
            .borrow()
            .get(&element)
            .cloned()
            .unwrap_or_default()
    }

    fn bounds(&self, element: ElementId) -> Rectangle {
        self.bounds
            .borrow()
            .get(&element)
            .copied()
            .unwrap_or(Rectangle::new(0.0, 0.0, 100.0, 50.0))
    }

    fn present_menu(&self, element: ElementId, menu: AndroidMenu, preview: Option<PreviewSpec>) {
        self.presented.borrow_mut().push(Presented {
            element,
            menu,
            preview,
        });
    }
}

impl MockHost {
    fn install_gesture(
        &self,
        element: ElementId,
        kind: GestureKind,
        handler: Rc<dyn Fn() -> Status>,
    ) -> GestureToken {
        let token = GestureToken(self.token());
        self.gestures.borrow_mut().push(Gesture {
            token,
            element,
            kind,
            handler,
        });
        token
    }
}
