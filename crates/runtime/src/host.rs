//! The host framework seam.
//!
//! The engine never talks to a UI toolkit directly. Everything it needs
//! from the element/handler model of the host — readiness notifications,
//! gesture primitives, a cancellable timer queue, scale feedback, child
//! lifecycle events, and menu presentation — goes through the [`Host`]
//! trait. All calls happen on the host's UI/event-dispatch thread.
use flyout_core::{BindingContext, IconResolver, PreviewSpec, Rectangle};

use std::rc::Rc;
use std::sync::atomic::{self, AtomicU64};
use std::time::Duration;

/// The identity of a host UI element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u64);

static COUNT: AtomicU64 = AtomicU64::new(1);

impl ElementId {
    /// Creates a new unique [`ElementId`].
    pub fn unique() -> ElementId {
        ElementId(COUNT.fetch_add(1, atomic::Ordering::Relaxed))
    }

    /// Creates an [`ElementId`] from a raw value, for hosts that already
    /// number their elements.
    #[must_use]
    pub const fn from_raw(id: u64) -> ElementId {
        ElementId(id)
    }
}

/// Handle of a pending handle-ready subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReadyToken(pub u64);

/// Handle of an installed gesture hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GestureToken(pub u64);

/// Handle of a scheduled timer callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(pub u64);

/// Handle of a child-lifecycle subscription on a collection container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChildrenToken(pub u64);

/// The status of a gesture event after a hook has seen it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The event was **not** handled and should propagate.
    Ignored,

    /// The event was handled and consumed.
    Captured,
}

impl Status {
    /// Merges two [`Status`] into one; `Captured` takes precedence.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        match self {
            Status::Ignored => other,
            Status::Captured => Status::Captured,
        }
    }
}

/// The host framework collaborator.
///
/// Tokens returned by the `subscribe`/`on_*` methods identify the
/// installed hook so the engine can remove exactly what it installed;
/// removal is mandatory bookkeeping, not best effort. In particular,
/// [`cancel_timer`](Self::cancel_timer) must guarantee the cancelled
/// callback never runs.
///
/// The [`IconResolver`] supertrait covers icon loading, which belongs to
/// the host as well.
pub trait Host: IconResolver {
    /// The native menu representation this host can present, matching the
    /// translator the engine was composed with.
    type Native;

    /// Whether the element's platform handle exists.
    fn handle_ready(&self, element: ElementId) -> bool;

    /// Subscribes to the one-shot notification fired when the element's
    /// platform handle becomes available.
    fn subscribe_handle_ready(&self, element: ElementId, callback: Rc<dyn Fn()>) -> ReadyToken;

    /// Cancels a pending handle-ready subscription.
    fn cancel_handle_ready(&self, token: ReadyToken);

    /// Installs a tap hook on the element.
    fn on_tap(&self, element: ElementId, handler: Rc<dyn Fn() -> Status>) -> GestureToken;

    /// Installs a press-down hook on the element.
    fn on_press(&self, element: ElementId, handler: Rc<dyn Fn() -> Status>) -> GestureToken;

    /// Installs a press-up hook on the element.
    fn on_press_up(&self, element: ElementId, handler: Rc<dyn Fn() -> Status>) -> GestureToken;

    /// Installs a press-cancel hook on the element.
    fn on_press_cancel(&self, element: ElementId, handler: Rc<dyn Fn() -> Status>)
    -> GestureToken;

    /// Removes a previously installed gesture hook.
    fn remove_gesture(&self, token: GestureToken);

    /// The platform's long-press threshold.
    fn long_press_timeout(&self) -> Duration;

    /// Schedules a callback on the UI thread's timer queue.
    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerToken;

    /// Removes a scheduled callback before it runs.
    fn cancel_timer(&self, token: TimerToken);

    /// Animates the element's scale towards `scale` over `duration`.
    fn animate_scale(&self, element: ElementId, scale: f32, duration: Duration);

    /// Cancels any running animations on the element.
    fn cancel_animations(&self, element: ElementId);

    /// Sets the element's scale immediately.
    fn set_scale(&self, element: ElementId, scale: f32);

    /// Whether the element is a recycling collection container.
    fn is_collection(&self, element: ElementId) -> bool;

    /// Subscribes to child realization events of a collection container.
    fn subscribe_children(
        &self,
        container: ElementId,
        on_added: Rc<dyn Fn(ElementId)>,
        on_removed: Rc<dyn Fn(ElementId)>,
    ) -> ChildrenToken;

    /// Removes a child-lifecycle subscription.
    fn unsubscribe_children(&self, token: ChildrenToken);

    /// The element's current data context.
    fn binding_context(&self, element: ElementId) -> BindingContext;

    /// The element's current bounds, in logical pixels.
    fn bounds(&self, element: ElementId) -> Rectangle;

    /// Displays a translated menu anchored to the element, optionally with
    /// an evaluated preview.
    ///
    /// Presentation is fire-and-forget: the engine does not await
    /// dismissal; selection feeds back through the commands embedded in
    /// the translated menu.
    fn present_menu(&self, element: ElementId, menu: Self::Native, preview: Option<PreviewSpec>);
}
