//! The press state machine.
//!
//! In long-press mode a press-down arms two cancellable timers: a shrink
//! timer giving visual feedback once the press has been held long enough
//! to plausibly become a long press, and a fire timer at the platform's
//! long-press threshold. A release or cancel before the threshold removes
//! both timers and undoes any feedback — the press was a plain tap, which
//! does not open the menu in this mode. Crossing the threshold restores
//! the scale first, then presents the menu together with its preview.
use crate::context_menu::Inner;
use crate::host::{ElementId, Host, Status};

use flyout_core::{CommandParameter, TranslateError, Translator, TriggerMode};

use std::rc::Rc;
use std::time::Duration;

/// Timing and feedback configuration of the long-press trigger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressConfig {
    /// Delay before the shrink feedback starts. A press released earlier
    /// shows no feedback at all.
    pub shrink_delay: Duration,
    /// Scale the pressed element shrinks towards.
    pub shrink_scale: f32,
}

impl Default for PressConfig {
    fn default() -> Self {
        Self {
            shrink_delay: Duration::from_millis(100),
            shrink_scale: 0.95,
        }
    }
}

impl<H, T> Inner<H, T>
where
    H: Host + 'static,
    T: Translator<Native = H::Native> + 'static,
{
    /// Tap hook of a click-mode menu.
    pub(crate) fn menu_tap(self: &Rc<Self>, element: ElementId) -> Status {
        if !self.has_menu(element) {
            return Status::Ignored;
        }

        self.activate(element, false);
        Status::Captured
    }

    /// Tap hook of the click command.
    pub(crate) fn click_tap(self: &Rc<Self>, element: ElementId) -> Status {
        let (command, parameter) = {
            let bindings = self.bindings.borrow();
            let Some(state) = bindings.get(&element) else {
                return Status::Ignored;
            };
            let source = state.config_source.unwrap_or(element);
            let Some(config) = bindings.get(&source) else {
                return Status::Ignored;
            };

            // A click-mode menu owns the tap; the click command only runs
            // when no menu is set.
            if config.menu.is_some() && config.trigger == TriggerMode::Click {
                return Status::Ignored;
            }

            (config.click_command.clone(), config.click_parameter.clone())
        };

        let Some(command) = command else {
            return Status::Ignored;
        };

        let parameter = parameter
            .unwrap_or_else(|| CommandParameter::from(self.host.binding_context(element)));
        command.execute(Some(&parameter));

        Status::Captured
    }

    /// Press-down hook of a long-press-mode menu.
    pub(crate) fn press_down(self: &Rc<Self>, element: ElementId) -> Status {
        if !self.has_menu(element) {
            return Status::Ignored;
        }

        // A missed release would leave stale timers armed.
        self.cancel_press(element);

        let weak = Rc::downgrade(self);
        let shrink = self.host.schedule(
            self.press_config.shrink_delay,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.shrink_elapsed(element);
                }
            }),
        );

        let weak = Rc::downgrade(self);
        let fire = self.host.schedule(
            self.host.long_press_timeout(),
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.long_press_fired(element);
                }
            }),
        );

        let mut stored = false;
        {
            let mut bindings = self.bindings.borrow_mut();
            if let Some(state) = bindings.get_mut(&element) {
                state.press.shrink = Some(shrink);
                state.press.fire = Some(fire);
                stored = true;
            }
        }

        if !stored {
            self.host.cancel_timer(shrink);
            self.host.cancel_timer(fire);
        }

        Status::Ignored
    }

    /// Press-up and press-cancel hook of a long-press-mode menu.
    pub(crate) fn press_released(self: &Rc<Self>, element: ElementId) -> Status {
        self.cancel_press(element);
        Status::Ignored
    }

    /// Disarms a held press: removes both pending timers and, if the
    /// shrink already started, reverts the feedback.
    pub(crate) fn cancel_press(self: &Rc<Self>, element: ElementId) {
        let (shrink, fire) = {
            let mut bindings = self.bindings.borrow_mut();
            let Some(state) = bindings.get_mut(&element) else {
                return;
            };

            (state.press.shrink.take(), state.press.fire.take())
        };

        if shrink.is_none() && fire.is_none() {
            return;
        }

        match shrink {
            Some(token) => self.host.cancel_timer(token),
            None => {
                // The shrink animation is already in flight.
                self.host.cancel_animations(element);
                self.host.set_scale(element, 1.0);
            }
        }

        if let Some(token) = fire {
            self.host.cancel_timer(token);
        }
    }

    fn shrink_elapsed(self: &Rc<Self>, element: ElementId) {
        let armed = {
            let mut bindings = self.bindings.borrow_mut();
            bindings
                .get_mut(&element)
                .is_some_and(|state| state.press.shrink.take().is_some())
        };

        if !armed {
            return;
        }

        let duration = self
            .host
            .long_press_timeout()
            .saturating_sub(self.press_config.shrink_delay);
        self.host
            .animate_scale(element, self.press_config.shrink_scale, duration);
    }

    fn long_press_fired(self: &Rc<Self>, element: ElementId) {
        let (pending_shrink, armed) = {
            let mut bindings = self.bindings.borrow_mut();
            let Some(state) = bindings.get_mut(&element) else {
                return;
            };

            (state.press.shrink.take(), state.press.fire.take().is_some())
        };

        if !armed {
            return;
        }

        if let Some(token) = pending_shrink {
            self.host.cancel_timer(token);
        }

        // The feedback must be fully reverted before the menu opens.
        self.host.cancel_animations(element);
        self.host.set_scale(element, 1.0);

        self.activate(element, true);
    }

    /// Presents from a gesture path, where translation errors cannot be
    /// returned: they are logged, and fail loudly in debug builds.
    pub(crate) fn activate(self: &Rc<Self>, element: ElementId, with_preview: bool) {
        if let Err(error) = self.present(element, with_preview) {
            log::error!("context menu translation failed: {error}");
            debug_assert!(false, "context menu translation failed: {error}");
        }
    }

    /// Builds a fresh menu from the current template and hands it to the
    /// host. Does nothing if no menu is set.
    pub(crate) fn present(
        self: &Rc<Self>,
        element: ElementId,
        with_preview: bool,
    ) -> Result<(), TranslateError> {
        let (template, preview) = {
            let bindings = self.bindings.borrow();
            let Some(state) = bindings.get(&element) else {
                return Ok(());
            };
            let source = state.config_source.unwrap_or(element);
            let Some(config) = bindings.get(&source) else {
                return Ok(());
            };

            (
                config.menu.clone(),
                if with_preview {
                    config.preview.clone()
                } else {
                    None
                },
            )
        };

        let Some(template) = template else {
            return Ok(());
        };

        let context = self.host.binding_context(element);
        let menu = template.instantiate(&context);
        let native = self.translator.translate(&menu, &self.host)?;
        let spec = preview.map(|preview| preview.spec(self.host.bounds(element), &context));

        self.host.present_menu(element, native, spec);

        Ok(())
    }

    pub(crate) fn has_menu(&self, element: ElementId) -> bool {
        let bindings = self.bindings.borrow();
        let Some(state) = bindings.get(&element) else {
            return false;
        };
        let source = state.config_source.unwrap_or(element);

        bindings
            .get(&source)
            .is_some_and(|config| config.menu.is_some())
    }
}
