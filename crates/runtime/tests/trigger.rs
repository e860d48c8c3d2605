//! Long-press trigger behavior.
mod common;

use common::{MockHost, ScaleOp};

use flyout_core::{Action, Insets, Menu, MenuTemplate, Preview, Rectangle, Vector};
use flyout_platforms::AndroidTranslator;
use flyout_runtime::{ContextMenu, ElementId, Status};

use std::time::Duration;

fn engine() -> ContextMenu<MockHost, AndroidTranslator> {
    ContextMenu::new(MockHost::new(), AndroidTranslator)
}

fn template() -> MenuTemplate {
    MenuTemplate::new(|_| Menu::new(vec![Action::new("Copy").into()]))
}

fn bound_element(menus: &ContextMenu<MockHost, AndroidTranslator>) -> ElementId {
    let element = ElementId::from_raw(1);
    menus.host().mark_ready(element);
    menus.set_menu(element, Some(template()));
    element
}

#[test]
fn press_arms_shrink_and_fire_timers() {
    let menus = engine();
    let element = bound_element(&menus);

    assert_eq!(menus.host().press(element), Status::Ignored);
    assert_eq!(menus.host().pending_timer_count(), 2);
    assert!(menus.host().scale_ops().is_empty());
}

#[test]
fn quick_release_cancels_everything_and_shows_nothing() {
    let menus = engine();
    let element = bound_element(&menus);

    let _ = menus.host().press(element);
    menus.host().advance(Duration::from_millis(50));
    assert_eq!(menus.host().release(element), Status::Ignored);

    assert_eq!(menus.host().pending_timer_count(), 0);
    assert_eq!(menus.host().cancelled_timer_count(), 2);
    assert!(menus.host().scale_ops().is_empty());
    assert_eq!(menus.host().presented_count(), 0);
}

#[test]
fn holding_past_the_threshold_presents_the_menu() {
    let menus = engine();
    let element = bound_element(&menus);

    let _ = menus.host().press(element);
    menus.host().advance(Duration::from_millis(100));

    // Shrink feedback runs for the rest of the long-press window.
    assert_eq!(
        menus.host().scale_ops(),
        vec![ScaleOp::Animate {
            element,
            scale: 0.95,
            duration: Duration::from_millis(400),
        }]
    );

    menus.host().advance(Duration::from_millis(400));

    assert_eq!(
        menus.host().scale_ops()[1..],
        [
            ScaleOp::Cancel { element },
            ScaleOp::Set {
                element,
                scale: 1.0,
            },
        ]
    );
    assert_eq!(menus.host().presented_count(), 1);
    assert_eq!(menus.host().pending_timer_count(), 0);
}

#[test]
fn release_after_shrink_restores_the_scale() {
    let menus = engine();
    let element = bound_element(&menus);

    let _ = menus.host().press(element);
    menus.host().advance(Duration::from_millis(150));
    assert_eq!(menus.host().release(element), Status::Ignored);

    assert_eq!(
        menus.host().scale_ops(),
        vec![
            ScaleOp::Animate {
                element,
                scale: 0.95,
                duration: Duration::from_millis(400),
            },
            ScaleOp::Cancel { element },
            ScaleOp::Set {
                element,
                scale: 1.0,
            },
        ]
    );
    assert_eq!(menus.host().presented_count(), 0);
    assert_eq!(menus.host().pending_timer_count(), 0);
}

#[test]
fn press_cancel_behaves_like_release() {
    let menus = engine();
    let element = bound_element(&menus);

    let _ = menus.host().press(element);
    assert_eq!(menus.host().cancel_press_gesture(element), Status::Ignored);

    assert_eq!(menus.host().pending_timer_count(), 0);
    assert_eq!(menus.host().presented_count(), 0);
}

#[test]
fn press_without_a_binding_is_not_handled() {
    let menus = engine();
    let element = ElementId::from_raw(9);
    menus.host().mark_ready(element);

    assert_eq!(menus.host().press(element), Status::Ignored);
    assert_eq!(menus.host().pending_timer_count(), 0);
}

#[test]
fn detach_during_a_held_press_leaves_no_timers() {
    let menus = engine();
    let element = bound_element(&menus);

    let _ = menus.host().press(element);
    assert_eq!(menus.host().pending_timer_count(), 2);

    menus.set_menu(element, None);

    assert_eq!(menus.host().pending_timer_count(), 0);

    // Nothing stale fires later.
    menus.host().advance(Duration::from_secs(2));
    assert_eq!(menus.host().presented_count(), 0);
    assert!(menus.host().scale_ops().is_empty());
}

#[test]
fn detach_during_the_shrink_restores_the_scale() {
    let menus = engine();
    let element = bound_element(&menus);

    let _ = menus.host().press(element);
    menus.host().advance(Duration::from_millis(200));

    menus.set_menu(element, None);

    assert_eq!(
        menus.host().scale_ops()[1..],
        [
            ScaleOp::Cancel { element },
            ScaleOp::Set {
                element,
                scale: 1.0,
            },
        ]
    );
    assert_eq!(menus.host().pending_timer_count(), 0);
}

#[test]
fn long_press_carries_the_preview() {
    let menus = engine();
    let element = bound_element(&menus);
    menus
        .host()
        .set_bounds(element, Rectangle::new(0.0, 0.0, 200.0, 80.0));
    menus.set_preview(
        element,
        Some(Preview::new().padding(Insets::new(12.0, 0.0, 0.0, 20.0))),
    );

    let _ = menus.host().press(element);
    menus.host().advance(Duration::from_millis(500));

    let presented = menus.host().presented();
    assert_eq!(presented.len(), 1);

    let preview = presented[0].preview.as_ref().unwrap();
    assert_eq!(preview.menu_offset, Vector::new(12.0, -20.0));
    assert!(preview.content.is_none());
}

#[test]
fn second_press_after_presentation_works_again() {
    let menus = engine();
    let element = bound_element(&menus);

    let _ = menus.host().press(element);
    menus.host().advance(Duration::from_millis(500));
    let _ = menus.host().release(element);

    let _ = menus.host().press(element);
    menus.host().advance(Duration::from_millis(500));

    assert_eq!(menus.host().presented_count(), 2);
}
