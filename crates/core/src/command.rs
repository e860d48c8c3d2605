//! Commands executed when menu items are activated.
use crate::context::BindingContext;

use std::any::Any;
use std::fmt;
use std::rc::Rc;

/// A callback executed when a menu [`Action`] or a bound element is
/// activated.
///
/// Commands are owned by the application and read by the engine at
/// activation time, so rebinding a command between activations takes effect
/// without reattaching anything. Executing an absent command is a silent
/// no-op; menus may be purely presentational.
///
/// [`Action`]: crate::menu::Action
#[derive(Clone)]
pub struct Command(Rc<dyn Fn(Option<&CommandParameter>)>);

impl Command {
    /// Creates a new [`Command`] from the given callback.
    pub fn new(execute: impl Fn(Option<&CommandParameter>) + 'static) -> Self {
        Self(Rc::new(execute))
    }

    /// Executes the [`Command`] with the given parameter.
    pub fn execute(&self, parameter: Option<&CommandParameter>) {
        (self.0)(parameter);
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Command(..)")
    }
}

/// An opaque value handed to a [`Command`] when it executes.
#[derive(Clone)]
pub struct CommandParameter(Rc<dyn Any>);

impl CommandParameter {
    /// Creates a new [`CommandParameter`] wrapping the given value.
    pub fn new<T: 'static>(value: T) -> Self {
        Self(Rc::new(value))
    }

    /// Attempts to view the wrapped value as a `T`.
    #[must_use]
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.0.downcast_ref()
    }
}

impl fmt::Debug for CommandParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CommandParameter(..)")
    }
}

impl From<BindingContext> for CommandParameter {
    fn from(context: BindingContext) -> Self {
        Self(context.into_raw())
    }
}
