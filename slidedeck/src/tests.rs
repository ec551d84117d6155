use crate::*;

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

#[derive(Clone, Debug, PartialEq, Eq)]
enum Call {
    Next(usize),
    Prev(usize),
    Change(usize),
    Leave,
}

#[derive(Clone, Default)]
struct Recorder(Arc<Mutex<Vec<Call>>>);

impl Recorder {
    fn options(&self) -> SlideControllerOptions {
        let next = self.0.clone();
        let prev = self.0.clone();
        let change = self.0.clone();
        let leave = self.0.clone();
        SlideControllerOptions::new()
            .with_on_next_slide(Some(move |i| next.lock().unwrap().push(Call::Next(i))))
            .with_on_prev_slide(Some(move |i| prev.lock().unwrap().push(Call::Prev(i))))
            .with_on_change_slide(Some(move |i| change.lock().unwrap().push(Call::Change(i))))
            .with_on_leave(Some(move || leave.lock().unwrap().push(Call::Leave)))
    }

    fn take(&self) -> Vec<Call> {
        core::mem::take(&mut *self.0.lock().unwrap())
    }
}

fn set(classes: &[SlideClass]) -> ClassSet {
    classes.iter().copied().collect()
}

fn deck(count: usize) -> (SlideController<MemoryViewport>, Recorder) {
    let rec = Recorder::default();
    let mut c = SlideController::new(count, rec.options(), MemoryViewport::new()).unwrap();
    c.initialize();
    (c, rec)
}

fn assert_single_active(c: &SlideController<MemoryViewport>) {
    let active = c.active_index();
    for i in 0..c.slide_count() {
        assert_eq!(
            c.slide_classes(i).contains(SlideClass::Active),
            i == active,
            "slide {i}"
        );
        assert_eq!(
            c.dot_classes(i).contains(SlideClass::Active),
            i == active,
            "dot {i}"
        );
    }
}

fn wheel(c: &mut SlideController<MemoryViewport>, delta_y: f64, now_ms: u64) -> bool {
    let mut ev = InputEvent::wheel(delta_y);
    c.handle_wheel(&mut ev, now_ms);
    ev.is_default_suppressed()
}

fn swipe(c: &mut SlideController<MemoryViewport>, from_y: f64, to_y: f64, now_ms: u64) {
    c.handle_touch_start(&mut InputEvent::touch(from_y), now_ms);
    c.handle_touch_move(&mut InputEvent::touch(to_y));
    c.handle_touch_end(&mut InputEvent::bare(), now_ms);
}

#[test]
fn empty_deck_is_rejected() {
    let err = SlideController::new(0, SlideControllerOptions::new(), MemoryViewport::new())
        .unwrap_err();
    assert_eq!(err, SetupError::NoSlides);
}

#[test]
fn initialize_pins_page_and_marks_first_slide() {
    let mut c = SlideController::new(
        3,
        SlideControllerOptions::new(),
        MemoryViewport::with_offset(420.0),
    )
    .unwrap();
    assert!(c.slide_classes(0).is_empty());
    assert!(c.navigation().is_empty());

    c.initialize();

    assert_eq!(c.viewport().offset, 0.0);
    assert_eq!(c.viewport().restoration, ScrollRestoration::Manual);
    assert_eq!(c.slide_classes(0), set(&[SlideClass::Active]));
    assert_eq!(c.navigation().len(), 3);
    assert_eq!(c.navigation().active_index(), Some(0));
    assert_single_active(&c);
}

#[test]
fn default_freeze_time_is_1500ms() {
    assert_eq!(SlideControllerOptions::new().freeze_time_ms, 1500);
    assert_eq!(
        SlideControllerOptions::new()
            .with_freeze_time_ms(0)
            .effective_freeze_time_ms(),
        DEFAULT_FREEZE_TIME_MS
    );
}

#[test]
fn wheel_down_runs_full_transition_lifecycle() {
    let (mut c, rec) = deck(4);

    assert!(wheel(&mut c, 120.0, 0));

    assert_eq!(c.active_index(), 1);
    assert!(c.is_frozen());
    assert_eq!(
        c.slide_classes(1),
        set(&[SlideClass::Active, SlideClass::FadeInUp])
    );
    assert_eq!(c.slide_classes(0), set(&[SlideClass::FadeOutUp]));
    assert_eq!(rec.take(), [Call::Change(1), Call::Next(1)]);
    assert_eq!(c.next_deadline(), Some(1500));

    assert_eq!(c.tick(1499), 0);
    assert!(c.is_frozen());

    assert_eq!(c.tick(1500), 1);
    assert!(!c.is_frozen());
    assert_eq!(c.slide_classes(1), set(&[SlideClass::Active]));
    assert!(c.slide_classes(0).is_empty());
    assert_eq!(c.next_deadline(), None);
    assert_single_active(&c);
}

#[test]
fn wheel_up_uses_downward_animation_variant() {
    let (mut c, rec) = deck(4);
    c.next_slide(0);
    c.tick(1500);
    rec.take();

    assert!(wheel(&mut c, -80.0, 2000));
    assert_eq!(c.active_index(), 0);
    assert_eq!(
        c.slide_classes(0),
        set(&[SlideClass::Active, SlideClass::FadeInDown])
    );
    assert_eq!(c.slide_classes(1), set(&[SlideClass::FadeOutDown]));
    assert_eq!(rec.take(), [Call::Change(0), Call::Prev(0)]);
}

#[test]
fn gestures_are_ignored_while_frozen() {
    let (mut c, rec) = deck(4);
    c.next_slide(0);
    rec.take();

    // Wheel is still intercepted, just not acted on.
    assert!(wheel(&mut c, 120.0, 100));
    let mut key = InputEvent::key(Key::ArrowDown);
    c.handle_key(&mut key, 200);
    assert!(key.is_default_suppressed());
    swipe(&mut c, 400.0, 100.0, 300);
    assert!(!c.click_dot(3, 400));
    assert!(!c.jump_to(3, 400));
    assert!(!c.next_slide(500));

    assert_eq!(c.active_index(), 1);
    assert!(rec.take().is_empty());

    c.tick(1500);
    assert!(wheel(&mut c, 120.0, 1600));
    assert_eq!(c.active_index(), 2);
}

#[test]
fn stepping_past_either_end_is_a_noop() {
    let (mut c, rec) = deck(2);

    assert!(!c.prev_slide(0));
    assert!(!wheel(&mut c, -120.0, 0));
    assert_eq!(c.active_index(), 0);
    assert!(!c.is_frozen());

    c.next_slide(0);
    c.tick(1500);
    rec.take();

    assert!(!c.next_slide(2000));
    assert!(!wheel(&mut c, 120.0, 2000));
    let mut key = InputEvent::key(Key::ArrowDown);
    c.handle_key(&mut key, 2000);
    assert!(!key.is_default_suppressed());

    assert_eq!(c.active_index(), 1);
    assert!(!c.is_frozen());
    assert!(rec.take().is_empty());
}

#[test]
fn every_valid_step_and_jump_keeps_one_active_marker() {
    let n = 5;
    for start in 0..n {
        for target in 0..n {
            let (mut c, _rec) = deck(n);
            if start != 0 {
                assert!(c.jump_to(start, 0));
                c.tick(1500);
            }
            let moved = c.jump_to(target, 2000);
            assert_eq!(moved, target != start);
            assert_eq!(c.active_index(), target);
            assert_single_active(&c);
            c.tick(3500);
            assert_single_active(&c);
            assert!(!c.is_frozen());
        }
    }
}

#[test]
fn dot_jump_fires_only_change_once() {
    let (mut c, rec) = deck(4);

    assert!(c.click_dot(2, 0));

    assert_eq!(c.active_index(), 2);
    assert_eq!(
        c.slide_classes(2),
        set(&[SlideClass::Active, SlideClass::FadeInUp])
    );
    assert_eq!(c.slide_classes(0), set(&[SlideClass::FadeOutUp]));
    assert!(c.slide_classes(1).is_empty());
    assert_eq!(c.dot_classes(2), set(&[SlideClass::Active]));
    assert_eq!(rec.take(), [Call::Change(2)]);

    c.tick(1500);
    assert!(c.slide_classes(0).is_empty());
    assert_eq!(c.slide_classes(2), set(&[SlideClass::Active]));
}

#[test]
fn jump_rejects_out_of_range_and_current_index() {
    let (mut c, rec) = deck(3);
    assert!(!c.jump_to(3, 0));
    assert!(!c.jump_to(0, 0));
    assert!(!c.is_frozen());
    assert!(rec.take().is_empty());
}

#[test]
fn keyboard_navigation() {
    let (mut c, rec) = deck(3);

    let mut up = InputEvent::key(Key::ArrowUp);
    c.handle_key(&mut up, 0);
    assert!(!up.is_default_suppressed());

    let mut down = InputEvent::key(Key::ArrowDown);
    c.handle_key(&mut down, 0);
    assert!(down.is_default_suppressed());
    assert_eq!(c.active_index(), 1);
    c.tick(1500);

    let mut other = InputEvent::key(Key::from_name("Enter"));
    c.handle_key(&mut other, 1600);
    assert!(!other.is_default_suppressed());

    // ArrowUp only goes back while the page is pinned to the top.
    c.viewport_mut().offset = 5.0;
    let mut up = InputEvent::key(Key::from_name("ArrowUp"));
    c.handle_key(&mut up, 1700);
    assert!(!up.is_default_suppressed());
    assert_eq!(c.active_index(), 1);

    c.viewport_mut().offset = 0.0;
    let mut up = InputEvent::key(Key::ArrowUp);
    c.handle_key(&mut up, 1800);
    assert!(up.is_default_suppressed());
    assert_eq!(c.active_index(), 0);
    assert_eq!(
        rec.take(),
        [Call::Change(1), Call::Next(1), Call::Change(0), Call::Prev(0)]
    );
}

#[test]
fn wheel_on_scrolled_page_signals_leave() {
    let (mut c, rec) = deck(3);
    c.viewport_mut().offset = 6.0;

    assert!(!wheel(&mut c, 120.0, 0));
    assert_eq!(c.active_index(), 0);
    assert_eq!(rec.take(), [Call::Leave]);

    // Exactly at the threshold the widget still owns the wheel.
    c.viewport_mut().offset = 5.0;
    assert!(wheel(&mut c, 120.0, 0));
    assert_eq!(c.active_index(), 1);
}

#[test]
fn swipe_up_and_down_step_slides() {
    let (mut c, rec) = deck(3);

    swipe(&mut c, 500.0, 400.0, 0);
    assert_eq!(c.active_index(), 1);
    assert!(c.touch_gesture().is_none());
    c.tick(1500);

    swipe(&mut c, 300.0, 360.0, 2000);
    assert_eq!(c.active_index(), 0);
    c.tick(3500);

    // Short swipes are ignored.
    swipe(&mut c, 300.0, 260.0, 4000);
    assert_eq!(c.active_index(), 0);
    assert!(!c.is_frozen());

    assert_eq!(
        rec.take(),
        [Call::Change(1), Call::Next(1), Call::Change(0), Call::Prev(0)]
    );
}

#[test]
fn touch_start_suppresses_default_except_on_interactive_targets() {
    let (mut c, _rec) = deck(3);

    let mut plain = InputEvent::touch(100.0);
    c.handle_touch_start(&mut plain, 0);
    assert!(plain.is_default_suppressed());

    let mut link = InputEvent::new(TouchInput {
        client_y: 100.0,
        interactive_target: true,
    });
    c.handle_touch_start(&mut link, 0);
    assert!(!link.is_default_suppressed());
    assert_eq!(
        c.touch_gesture(),
        Some(TouchTrack {
            start_y: 100.0,
            last_y: 100.0
        })
    );
}

#[test]
fn touch_start_is_ignored_when_page_scrolled() {
    let (mut c, _rec) = deck(3);
    c.viewport_mut().offset = 40.0;

    let mut ev = InputEvent::touch(100.0);
    c.handle_touch_start(&mut ev, 0);
    assert!(!ev.is_default_suppressed());
    assert!(c.touch_gesture().is_none());
}

#[test]
fn touch_move_locks_scroll_until_last_slide() {
    let (mut c, _rec) = deck(2);

    let mut mv = InputEvent::touch(10.0);
    c.handle_touch_move(&mut mv);
    assert!(mv.is_default_suppressed());

    c.next_slide(0);
    let mut mv = InputEvent::touch(10.0);
    c.handle_touch_move(&mut mv);
    assert!(!mv.is_default_suppressed());
}

#[test]
fn touch_end_at_last_slide_leaves_without_touch_start() {
    let (mut c, rec) = deck(4);
    c.jump_to(3, 0);
    c.tick(1500);
    rec.take();

    c.handle_touch_end(&mut InputEvent::bare(), 2000);
    assert_eq!(rec.take(), [Call::Leave]);

    assert!(!wheel(&mut c, 120.0, 2100));
    assert!(!c.next_slide(2100));
    assert_eq!(c.active_index(), 3);
    assert!(rec.take().is_empty());
}

#[test]
fn last_slide_touch_opens_unlock_window() {
    let (mut c, rec) = deck(2);
    c.next_slide(0);
    c.tick(1500);
    rec.take();

    let mut first = InputEvent::touch(300.0);
    c.handle_touch_start(&mut first, 2000);
    assert!(c.is_unlocked());
    assert!(c.is_at_bottom());
    assert!(!first.is_default_suppressed());
    assert!(c.touch_gesture().is_none());
    assert_eq!(c.next_deadline(), Some(3500));

    // Still unlocked: further touches are not tracked.
    let mut again = InputEvent::touch(300.0);
    c.handle_touch_start(&mut again, 2500);
    assert!(c.touch_gesture().is_none());
    assert_eq!(c.state().pending_timers, 1);

    c.tick(3500);
    assert!(!c.is_unlocked());

    // The next touch is tracked again and clears the bottom marker.
    let mut tracked = InputEvent::touch(300.0);
    c.handle_touch_start(&mut tracked, 4000);
    assert!(tracked.is_default_suppressed());
    assert!(!c.is_at_bottom());
    assert!(c.touch_gesture().is_some());

    // Swiping down from the last slide still goes back.
    c.handle_touch_move(&mut InputEvent::touch(400.0));
    c.handle_touch_end(&mut InputEvent::bare(), 4100);
    assert_eq!(c.active_index(), 0);
    assert_eq!(rec.take(), [Call::Leave, Call::Change(0), Call::Prev(0)]);
}

#[test]
fn scroll_is_pinned_until_unlocked_or_last() {
    let (mut c, _rec) = deck(2);
    c.viewport_mut().offset = 30.0;

    let mut ev = InputEvent::bare();
    c.handle_scroll(&mut ev);
    assert!(ev.is_default_suppressed());
    assert!(ev.is_propagation_stopped());
    assert_eq!(c.viewport().offset, 0.0);

    c.next_slide(0);
    c.viewport_mut().offset = 30.0;
    let mut ev = InputEvent::bare();
    c.handle_scroll(&mut ev);
    assert!(!ev.is_default_suppressed());
    assert_eq!(c.viewport().offset, 30.0);
}

#[test]
fn unlock_and_transition_timers_fire_independently() {
    let (mut c, _rec) = deck(3);
    c.jump_to(1, 0);
    c.tick(1500);

    c.next_slide(2000);
    c.handle_touch_start(&mut InputEvent::touch(0.0), 2100);
    assert!(c.is_frozen());
    assert!(c.is_unlocked());
    assert_eq!(c.state().pending_timers, 2);
    assert_eq!(c.next_deadline(), Some(3500));

    assert_eq!(c.tick(3500), 1);
    assert!(!c.is_frozen());
    assert!(c.is_unlocked());
    assert_eq!(c.next_deadline(), Some(3600));

    assert_eq!(c.tick(10_000), 1);
    assert!(!c.is_unlocked());
    assert_eq!(c.next_deadline(), None);
}

#[test]
fn freeze_time_is_configurable() {
    let counter = Arc::new(AtomicUsize::new(0));
    let seen = counter.clone();
    let mut c = SlideController::new(
        3,
        SlideControllerOptions::new()
            .with_freeze_time_ms(200)
            .with_on_change_slide(Some(move |_| {
                seen.fetch_add(1, Ordering::Relaxed);
            })),
        MemoryViewport::new(),
    )
    .unwrap();
    c.initialize();

    c.next_slide(0);
    assert_eq!(c.next_deadline(), Some(200));
    c.tick(200);
    assert!(c.next_slide(200));
    assert_eq!(counter.load(Ordering::Relaxed), 2);
}

#[test]
fn missing_callbacks_are_noops() {
    let mut c =
        SlideController::new(2, SlideControllerOptions::default(), MemoryViewport::new()).unwrap();
    c.initialize();
    assert!(c.next_slide(0));
    c.handle_touch_end(&mut InputEvent::bare(), 10);
    c.tick(1500);
    assert!(c.prev_slide(1600));
}

#[test]
fn swipe_threshold_is_configurable() {
    let mut c = SlideController::new(
        3,
        SlideControllerOptions::new().with_swipe_threshold(10.0),
        MemoryViewport::new(),
    )
    .unwrap();
    c.initialize();

    swipe(&mut c, 100.0, 80.0, 0);
    assert_eq!(c.active_index(), 1);
}

#[test]
fn state_snapshot_reflects_controller() {
    let (mut c, _rec) = deck(3);
    c.next_slide(0);
    c.handle_touch_start(&mut InputEvent::touch(10.0), 10);

    let s = c.state();
    assert_eq!(s.active_index, 1);
    assert_eq!(s.slide_count, 3);
    assert!(s.frozen);
    assert!(!s.is_idle());
    assert!(!s.is_last());
    assert!(s.touch_active);
    assert_eq!(s.pending_timers, 1);
}

#[test]
fn class_set_basics() {
    let mut s = ClassSet::EMPTY;
    s.insert(SlideClass::Active);
    s.insert(SlideClass::FadeOutDown);
    s.insert(SlideClass::Active);
    assert_eq!(s.len(), 2);
    assert_eq!(
        s.iter().map(SlideClass::name).collect::<Vec<_>>(),
        ["active", "fadeOutDown"]
    );
    s.remove(SlideClass::Active);
    assert!(!s.contains(SlideClass::Active));
    assert_eq!(std::format!("{s:?}"), "{\"fadeOutDown\"}");
}
