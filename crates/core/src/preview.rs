//! Preview configuration for long-press menus.
//!
//! A [`Preview`] describes the visual shown next to (or instead of) the
//! pressed element while its menu is open: an optional content template,
//! clip geometry, a backdrop color, and padding. The engine evaluates the
//! configuration against the target's bounds at presentation time and
//! hands the host a ready-to-render [`PreviewSpec`].
use crate::color::Color;
use crate::context::BindingContext;
use crate::geometry::{Insets, Rectangle, Vector};

use std::any::Any;
use std::fmt;
use std::rc::Rc;

/// Clip geometry applied to the preview, evaluated against the clipped
/// bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// A rectangle with the given corner radius.
    Rect {
        /// Corner radius in logical pixels.
        corner_radius: f32,
    },
    /// An ellipse inscribed in the bounds.
    Ellipse,
}

/// A host visual produced by a [`PreviewTemplate`].
#[derive(Clone)]
pub struct VisualContent(Rc<dyn Any>);

impl VisualContent {
    /// Creates a new [`VisualContent`] wrapping a host visual.
    pub fn new<T: 'static>(visual: T) -> Self {
        Self(Rc::new(visual))
    }

    /// Attempts to view the wrapped visual as a `T`.
    #[must_use]
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.0.downcast_ref()
    }
}

impl fmt::Debug for VisualContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("VisualContent(..)")
    }
}

/// A factory producing preview content for a [`BindingContext`].
#[derive(Clone)]
pub struct PreviewTemplate(Rc<dyn Fn(&BindingContext) -> VisualContent>);

impl PreviewTemplate {
    /// Creates a new [`PreviewTemplate`] from the given factory.
    pub fn new(factory: impl Fn(&BindingContext) -> VisualContent + 'static) -> Self {
        Self(Rc::new(factory))
    }

    /// Builds fresh preview content for the given context.
    #[must_use]
    pub fn instantiate(&self, context: &BindingContext) -> VisualContent {
        (self.0)(context)
    }
}

impl fmt::Debug for PreviewTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PreviewTemplate(..)")
    }
}

/// Configuration of the preview shown during long-press activation.
#[derive(Debug, Clone, Default)]
pub struct Preview {
    /// Template for custom preview content. When absent, the target
    /// element itself is previewed.
    pub template: Option<PreviewTemplate>,
    /// Clip geometry applied to the preview.
    pub visible_shape: Option<Shape>,
    /// Backdrop color behind the preview. Transparent when absent.
    pub background: Option<Color>,
    /// Inset applied to the clip and used to offset the menu relative to
    /// the preview.
    pub padding: Insets,
}

impl Preview {
    /// Creates an empty [`Preview`] that previews the target itself.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the content template.
    #[must_use]
    pub fn template(mut self, template: PreviewTemplate) -> Self {
        self.template = Some(template);
        self
    }

    /// Sets the clip geometry.
    #[must_use]
    pub fn visible_shape(mut self, shape: Shape) -> Self {
        self.visible_shape = Some(shape);
        self
    }

    /// Sets the backdrop color.
    #[must_use]
    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Sets the padding.
    #[must_use]
    pub fn padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    /// Evaluates the configuration against the target bounds and context,
    /// producing the [`PreviewSpec`] handed to the host.
    #[must_use]
    pub fn spec(&self, target_bounds: Rectangle, context: &BindingContext) -> PreviewSpec {
        let clip = self.visible_shape.map(|shape| ClipRegion {
            shape,
            bounds: target_bounds.inset(self.padding),
        });

        PreviewSpec {
            content: self
                .template
                .as_ref()
                .map(|template| template.instantiate(context)),
            clip,
            background: self.background.unwrap_or(Color::TRANSPARENT),
            menu_offset: Vector::new(self.padding.left, -self.padding.bottom),
        }
    }
}

/// Clip geometry resolved against concrete bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipRegion {
    /// The clip shape.
    pub shape: Shape,
    /// The bounds the shape is evaluated in, already inset by the preview
    /// padding.
    pub bounds: Rectangle,
}

/// A fully evaluated preview, ready for the host to render.
#[derive(Debug, Clone)]
pub struct PreviewSpec {
    /// Instantiated preview content; `None` means the target element
    /// itself is previewed.
    pub content: Option<VisualContent>,
    /// Resolved clip geometry, if any.
    pub clip: Option<ClipRegion>,
    /// Backdrop color behind the preview.
    pub background: Color,
    /// Offset of the menu relative to the preview.
    pub menu_offset: Vector,
}
