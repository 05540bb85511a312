//! Drag Session Integration Tests

use crate::helpers::{TestItem, TestSelectorBuilder, down, drag_to, up};
use rubberband::{ChangeReason, Point, PointerEvent, Rect, SelectorSettings};

#[test]
fn test_growing_drag_adds_without_removing() {
    let (mut selector, log) = TestSelectorBuilder::new().with_abc().build();

    assert!(down(&mut selector, 0.0, 0.0));
    drag_to(&mut selector, 25.0, 25.0);
    assert_eq!(selector.selected().to_vec(), vec![0, 1]);
    assert_eq!(log.last().unwrap().added, vec![0, 1]);

    drag_to(&mut selector, 45.0, 45.0);
    assert_eq!(selector.selected().to_vec(), vec![0, 1, 2]);

    let last = log.last().unwrap();
    assert_eq!(last.added, vec![2]);
    assert!(last.removed.is_empty());
    assert_eq!(last.reason, ChangeReason::DragUpdate);
}

#[test]
fn test_reverse_drag_direction_selects_same_items() {
    let (mut selector, _log) = TestSelectorBuilder::new().with_abc().build();

    down(&mut selector, 45.0, 45.0);
    drag_to(&mut selector, 15.0, 15.0);
    assert_eq!(selector.drag_rect(), Some(Rect::new(15.0, 15.0, 30.0, 30.0)));
    assert_eq!(selector.selected().to_vec(), vec![1, 2]);
}

#[test]
fn test_callback_fires_on_every_accepted_move() {
    let (mut selector, log) = TestSelectorBuilder::new().with_abc().build();

    down(&mut selector, 0.0, 0.0);
    assert_eq!(log.len(), 0);

    drag_to(&mut selector, 5.0, 5.0);
    drag_to(&mut selector, 6.0, 6.0);
    drag_to(&mut selector, 7.0, 7.0);
    assert_eq!(log.len(), 3);
    assert!(log.all()[1..].iter().all(|c| c.added.is_empty() && c.removed.is_empty()));
    assert!(log.all().iter().all(|c| c.selected == vec![0]));
}

#[test]
fn test_unchanged_passes_can_be_silenced() {
    let settings = SelectorSettings {
        emit_unchanged: false,
        ..SelectorSettings::default()
    };
    let (mut selector, log) = TestSelectorBuilder::new().with_abc().with_settings(settings).build();

    down(&mut selector, 0.0, 0.0);
    drag_to(&mut selector, 5.0, 5.0);
    drag_to(&mut selector, 6.0, 6.0);
    drag_to(&mut selector, 25.0, 25.0);
    assert_eq!(log.len(), 2);
}

#[test]
fn test_invalid_start_leaves_state_untouched() {
    let (mut selector, log) = TestSelectorBuilder::new().with_abc().build();

    down(&mut selector, 0.0, 0.0);
    drag_to(&mut selector, 25.0, 25.0);
    up(&mut selector, 25.0, 25.0);

    // Build up a selection in a second session, then press outside.
    down(&mut selector, 0.0, 0.0);
    drag_to(&mut selector, 5.0, 5.0);
    let before = selector.selected().clone();

    assert!(!down(&mut selector, 150.0, 50.0));
    assert!(selector.is_dragging());
    assert_eq!(selector.selected(), &before);

    up(&mut selector, 5.0, 5.0);
    assert!(!down(&mut selector, -1.0, 50.0));
    assert!(!selector.is_dragging());
    assert!(selector.selected().is_empty());
    let calls = log.len();
    drag_to(&mut selector, 30.0, 30.0);
    assert_eq!(log.len(), calls);
}

#[test]
fn test_independent_axis_clamping_on_first_move() {
    let (mut selector, _log) = TestSelectorBuilder::new().build();

    down(&mut selector, 50.0, 50.0);
    drag_to(&mut selector, 150.0, 50.0);
    assert_eq!(selector.drag_state().end(), Some(Point::new(50.0, 50.0)));

    drag_to(&mut selector, 90.0, 70.0);
    drag_to(&mut selector, 150.0, 80.0);
    assert_eq!(selector.drag_state().end(), Some(Point::new(90.0, 80.0)));
    assert_eq!(selector.drag_rect(), Some(Rect::new(50.0, 50.0, 40.0, 30.0)));
}

#[test]
fn test_pointer_up_fully_resets() {
    let (mut selector, log) = TestSelectorBuilder::new().with_abc().build();

    down(&mut selector, 0.0, 0.0);
    drag_to(&mut selector, 45.0, 45.0);
    assert_eq!(selector.selected().len(), 3);
    let calls = log.len();

    up(&mut selector, 45.0, 45.0);
    assert!(!selector.is_dragging());
    assert!(selector.selected().is_empty());
    assert_eq!(selector.drag_rect(), None);
    assert_eq!(selector.drag_state().start(), None);
    // No reset notification by default.
    assert_eq!(log.len(), calls);
}

#[test]
fn test_reset_notification_is_opt_in() {
    let settings = SelectorSettings {
        notify_on_reset: true,
        ..SelectorSettings::default()
    };
    let (mut selector, log) = TestSelectorBuilder::new().with_abc().with_settings(settings).build();

    down(&mut selector, 0.0, 0.0);
    drag_to(&mut selector, 25.0, 25.0);
    up(&mut selector, 25.0, 25.0);

    let last = log.last().unwrap();
    assert_eq!(last.reason, ChangeReason::Reset);
    assert!(last.selected.is_empty());
    assert_eq!(last.removed, vec![0, 1]);

    // Nothing to clear, nothing sent.
    let calls = log.len();
    down(&mut selector, 90.0, 90.0);
    up(&mut selector, 90.0, 90.0);
    assert_eq!(log.len(), calls);
}

#[test]
fn test_move_without_buttons_acts_as_pointer_up() {
    let (mut explicit, _) = TestSelectorBuilder::new().with_abc().build();
    let (mut implicit, implicit_log) = TestSelectorBuilder::new().with_abc().build();

    for selector in [&mut explicit, &mut implicit] {
        down(selector, 0.0, 0.0);
        drag_to(selector, 45.0, 45.0);
    }
    up(&mut explicit, 45.0, 45.0);
    let calls = implicit_log.len();
    implicit.handle_pointer_move(&PointerEvent::primary(60.0, 60.0).released());

    assert_eq!(implicit.drag_state(), explicit.drag_state());
    assert_eq!(implicit.selected(), explicit.selected());
    assert!(implicit.selected().is_empty());
    assert_eq!(implicit.overlay_style(), explicit.overlay_style());
    assert_eq!(implicit_log.len(), calls);
}

#[test]
fn test_events_while_idle_are_ignored() {
    let (mut selector, log) = TestSelectorBuilder::new().with_abc().build();

    drag_to(&mut selector, 25.0, 25.0);
    up(&mut selector, 25.0, 25.0);
    assert!(!selector.is_dragging());
    assert_eq!(log.len(), 0);
}

#[test]
fn test_detached_item_is_skipped_until_laid_out() {
    let late = TestItem::detached(9);
    let handle = late.rect.clone();
    let (mut selector, _log) = TestSelectorBuilder::new()
        .with_box(0.0, 0.0, 10.0, 10.0)
        .with_item(late)
        .build();

    down(&mut selector, 0.0, 0.0);
    drag_to(&mut selector, 30.0, 30.0);
    assert_eq!(selector.selected().to_vec(), vec![0]);

    handle.set(Some(Rect::new(20.0, 20.0, 5.0, 5.0)));
    drag_to(&mut selector, 31.0, 31.0);
    assert_eq!(selector.selected().to_vec(), vec![0, 1]);
    let ids: Vec<u64> = selector.selected_items().map(|item| item.id).collect();
    assert_eq!(ids, vec![0, 9]);
}

#[test]
fn test_items_added_mid_drag_join_next_pass() {
    let (mut selector, _log) = TestSelectorBuilder::new().with_box(0.0, 0.0, 10.0, 10.0).build();

    down(&mut selector, 0.0, 0.0);
    drag_to(&mut selector, 50.0, 50.0);
    assert_eq!(selector.selected().len(), 1);

    assert_eq!(selector.add_item(TestItem::new(1, Rect::new(30.0, 30.0, 5.0, 5.0))), Some(1));
    assert_eq!(selector.add_item(TestItem::new(1, Rect::new(30.0, 30.0, 5.0, 5.0))), None);
    drag_to(&mut selector, 51.0, 51.0);
    assert_eq!(selector.selected().to_vec(), vec![0, 1]);
}

#[test]
fn test_new_session_starts_with_empty_selection() {
    let settings = SelectorSettings {
        notify_on_reset: true,
        ..SelectorSettings::default()
    };
    let (mut selector, log) = TestSelectorBuilder::new()
        .with_abc()
        .with_settings(settings)
        .build();

    down(&mut selector, 0.0, 0.0);
    drag_to(&mut selector, 45.0, 45.0);
    assert_eq!(selector.selected().to_vec(), vec![0, 1, 2]);

    // Second press without a release restarts the session.
    assert!(down(&mut selector, 90.0, 90.0));
    assert!(selector.selected().is_empty());
    assert_eq!(selector.drag_rect(), None);

    let last = log.last().unwrap();
    assert_eq!(last.reason, ChangeReason::Reset);
    assert_eq!(last.removed, vec![0, 1, 2]);
    assert!(last.selected.is_empty());
}

#[test]
fn test_restart_clears_silently_by_default() {
    let (mut selector, log) = TestSelectorBuilder::new().with_abc().build();

    down(&mut selector, 0.0, 0.0);
    drag_to(&mut selector, 25.0, 25.0);
    let before = log.len();

    assert!(down(&mut selector, 90.0, 90.0));
    assert!(selector.selected().is_empty());
    assert_eq!(log.len(), before);
}

#[test]
fn test_overlay_follows_session() {
    let (mut selector, _log) = TestSelectorBuilder::new().with_abc().build();

    assert_eq!(
        selector.overlay_style().to_css(),
        "position: absolute; z-index: 99; visibility: hidden;"
    );

    down(&mut selector, 10.0, 10.0);
    assert_eq!(
        selector.overlay_style().to_css(),
        "position: absolute; z-index: 99; visibility: visible;"
    );

    drag_to(&mut selector, 30.0, 40.0);
    assert_eq!(
        selector.overlay_style().to_css(),
        "position: absolute; z-index: 99; visibility: visible; \
         left: 10px; top: 10px; width: 20px; height: 30px;"
    );

    let rebuilds = selector.overlay_rebuilds();
    selector.overlay_style();
    assert_eq!(selector.overlay_rebuilds(), rebuilds);

    up(&mut selector, 30.0, 40.0);
    assert_eq!(
        selector.overlay_style().to_css(),
        "position: absolute; z-index: 99; visibility: hidden;"
    );
}

#[test]
fn test_explicit_selection_reset() {
    let settings = SelectorSettings {
        notify_on_reset: true,
        ..SelectorSettings::default()
    };
    let (mut selector, log) = TestSelectorBuilder::new()
        .with_abc()
        .with_settings(settings)
        .build();

    down(&mut selector, 0.0, 0.0);
    drag_to(&mut selector, 25.0, 25.0);
    let before = log.len();

    // The drag owns the selection until it ends.
    selector.reset_selection();
    assert!(selector.is_dragging());
    assert_eq!(selector.selected().to_vec(), vec![0, 1]);
    assert_eq!(log.len(), before);

    drag_to(&mut selector, 26.0, 26.0);
    assert_eq!(selector.selected().to_vec(), vec![0, 1]);

    up(&mut selector, 26.0, 26.0);
    assert!(selector.selected().is_empty());
    let after_up = log.len();

    selector.reset_selection();
    assert!(selector.selected().is_empty());
    assert_eq!(log.len(), after_up);
}
