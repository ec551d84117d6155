use alloc::vec;
use alloc::vec::Vec;

use crate::timers::{TimerKind, TimerQueue};
use crate::{
    ClassSet, Direction, InputEvent, Key, KeyInput, NavigationDots, ScrollRestoration, SetupError,
    SlideClass, SlideControllerOptions, SliderState, TouchInput, ViewportPort, WheelInput,
};

/// Positions recorded during one touch-start → move → end gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchTrack {
    pub start_y: f64,
    pub last_y: f64,
}

impl TouchTrack {
    /// Signed vertical travel. Negative means the finger moved up (towards the next slide).
    pub fn delta_y(&self) -> f64 {
        self.last_y - self.start_y
    }
}

/// A headless fullscreen slide controller.
///
/// The controller holds no UI objects. It owns the active index, the cooldown ("freeze") state,
/// and the classes each slide and navigation dot should carry. Adapters drive it by:
/// - forwarding wheel, key, touch and scroll events through the `handle_*` methods, then
///   honoring [`InputEvent::is_default_suppressed`] on the native event
/// - calling [`SlideController::tick`] once [`SlideController::next_deadline`] has passed
/// - mirroring [`SlideController::slide_classes`] / [`SlideController::dot_classes`] onto their
///   elements
///
/// All timestamps are caller-provided milliseconds from any monotonic clock.
#[derive(Clone, Debug)]
pub struct SlideController<V> {
    options: SlideControllerOptions,
    viewport: V,
    slides: Vec<ClassSet>,
    dots: NavigationDots,
    active: usize,
    frozen: bool,
    unlocked: bool,
    is_at_bottom: bool,
    touch: Option<TouchTrack>,
    timers: TimerQueue,
}

impl<V: ViewportPort> SlideController<V> {
    /// Creates a controller for `slide_count` slides.
    ///
    /// Nothing is marked active and no viewport state is touched until
    /// [`SlideController::initialize`] runs.
    pub fn new(
        slide_count: usize,
        options: SlideControllerOptions,
        viewport: V,
    ) -> Result<Self, SetupError> {
        if slide_count == 0 {
            return Err(SetupError::NoSlides);
        }
        sddebug!(
            slide_count,
            freeze_time_ms = options.freeze_time_ms,
            "SlideController::new"
        );
        Ok(Self {
            options,
            viewport,
            slides: vec![ClassSet::EMPTY; slide_count],
            dots: NavigationDots::new(),
            active: 0,
            frozen: false,
            unlocked: false,
            is_at_bottom: false,
            touch: None,
            timers: TimerQueue::default(),
        })
    }

    /// Pins the page to the top, marks the first slide active and builds the navigation dots.
    ///
    /// Scroll restoration is switched to manual so a reload does not land mid-page.
    pub fn initialize(&mut self) {
        self.viewport.set_scroll_restoration(ScrollRestoration::Manual);
        self.viewport.set_scroll_offset(0.0);
        self.slides[self.active].insert(SlideClass::Active);
        self.dots.build(self.slides.len(), self.active);
        sddebug!(
            slide_count = self.slides.len(),
            active = self.active,
            "SlideController::initialize"
        );
    }

    pub fn options(&self) -> &SlideControllerOptions {
        &self.options
    }

    /// Replaces the options. A changed freeze time applies to timers scheduled afterwards.
    pub fn set_options(&mut self, options: SlideControllerOptions) {
        self.options = options;
        sdtrace!(
            freeze_time_ms = self.options.freeze_time_ms,
            "SlideController::set_options"
        );
    }

    pub fn update_options(&mut self, f: impl FnOnce(&mut SlideControllerOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }

    pub fn into_viewport(self) -> V {
        self.viewport
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn is_first(&self) -> bool {
        self.active == 0
    }

    pub fn is_last(&self) -> bool {
        self.active + 1 == self.slides.len()
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    pub fn is_at_bottom(&self) -> bool {
        self.is_at_bottom
    }

    pub fn touch_gesture(&self) -> Option<TouchTrack> {
        self.touch
    }

    pub fn slide_classes(&self, index: usize) -> ClassSet {
        self.slides.get(index).copied().unwrap_or_default()
    }

    pub fn dot_classes(&self, index: usize) -> ClassSet {
        self.dots.classes(index)
    }

    pub fn navigation(&self) -> &NavigationDots {
        &self.dots
    }

    pub fn state(&self) -> SliderState {
        SliderState {
            active_index: self.active,
            slide_count: self.slides.len(),
            frozen: self.frozen,
            unlocked: self.unlocked,
            is_at_bottom: self.is_at_bottom,
            touch_active: self.touch.is_some(),
            pending_timers: self.timers.len(),
        }
    }

    /// Earliest pending timer deadline, if any.
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.next_deadline()
    }

    fn freeze_time_ms(&self) -> u64 {
        self.options.effective_freeze_time_ms()
    }

    fn page_offset(&self) -> f64 {
        self.viewport.scroll_offset()
    }

    fn target_for(&self, delta: isize) -> Option<usize> {
        self.active
            .checked_add_signed(delta)
            .filter(|&to| to < self.slides.len())
    }

    /// Steps one slide in `direction`.
    ///
    /// Returns `false` (and changes nothing) while frozen or when the step would leave the
    /// sequence.
    pub fn advance(&mut self, direction: Direction, now_ms: u64) -> bool {
        if self.frozen {
            sdtrace!(?direction, "advance rejected: frozen");
            return false;
        }
        let Some(to) = self.target_for(direction.delta()) else {
            sdtrace!(?direction, active = self.active, "advance rejected: out of range");
            return false;
        };

        self.change_slide(direction.delta(), now_ms);

        let cb = match direction {
            Direction::Next => &self.options.on_next_slide,
            Direction::Prev => &self.options.on_prev_slide,
        };
        if let Some(cb) = cb {
            cb(to);
        }
        true
    }

    pub fn next_slide(&mut self, now_ms: u64) -> bool {
        self.advance(Direction::Next, now_ms)
    }

    pub fn prev_slide(&mut self, now_ms: u64) -> bool {
        self.advance(Direction::Prev, now_ms)
    }

    /// Jumps straight to `target` with a single transition.
    ///
    /// Only `on_change_slide` fires. The animation variant follows the sign of the jump.
    /// Rejected while frozen, for out-of-range targets, and for the current index.
    pub fn jump_to(&mut self, target: usize, now_ms: u64) -> bool {
        if self.frozen {
            sdtrace!(target, "jump_to rejected: frozen");
            return false;
        }
        if target >= self.slides.len() {
            sdwarn!(
                target,
                slide_count = self.slides.len(),
                "jump_to: target out of range"
            );
            return false;
        }
        if target == self.active {
            return false;
        }
        let delta = target as isize - self.active as isize;
        self.change_slide(delta, now_ms);
        true
    }

    /// Handles a click on navigation dot `index`.
    pub fn click_dot(&mut self, index: usize, now_ms: u64) -> bool {
        if self.frozen {
            return false;
        }
        self.jump_to(index, now_ms)
    }

    // Callers have validated `delta` against the bounds and the freeze flag.
    fn change_slide(&mut self, delta: isize, now_ms: u64) {
        let Some(direction) = Direction::from_delta(delta) else {
            return;
        };
        let from = self.active;
        let to = from.wrapping_add_signed(delta);
        debug_assert!(to < self.slides.len(), "change_slide: target out of range");

        self.frozen = true;

        let outgoing = &mut self.slides[from];
        outgoing.remove(SlideClass::Active);
        outgoing.insert(direction.exit_class());

        self.active = to;

        let incoming = &mut self.slides[to];
        incoming.insert(SlideClass::Active);
        incoming.insert(direction.enter_class());

        self.dots.move_active(from, to);

        let freeze_ms = self.freeze_time_ms();
        self.timers.schedule(
            now_ms,
            freeze_ms,
            TimerKind::ClearTransition {
                incoming: to,
                outgoing: from,
                direction,
            },
        );
        sddebug!(from, to, delta, "transition started");

        if let Some(cb) = &self.options.on_change_slide {
            cb(to);
        }
    }

    fn leave(&self) {
        sddebug!(active = self.active, "leave");
        if let Some(cb) = &self.options.on_leave {
            cb();
        }
    }

    /// Fires every timer due at `now_ms`, earliest first. Returns how many fired.
    pub fn tick(&mut self, now_ms: u64) -> usize {
        let mut fired = 0;
        while let Some(timer) = self.timers.pop_due(now_ms) {
            match timer.kind {
                TimerKind::Unlock => {
                    self.unlocked = false;
                    sdtrace!(due_ms = timer.due_ms, "unlock expired");
                }
                TimerKind::ClearTransition {
                    incoming,
                    outgoing,
                    direction,
                } => {
                    if let Some(slide) = self.slides.get_mut(incoming) {
                        slide.remove(direction.enter_class());
                    }
                    if let Some(slide) = self.slides.get_mut(outgoing) {
                        slide.remove(direction.exit_class());
                    }
                    self.frozen = false;
                    sdtrace!(due_ms = timer.due_ms, incoming, outgoing, "transition cleared");
                }
            }
            fired += 1;
        }
        fired
    }

    /// Mouse wheel.
    ///
    /// When the page has scrolled away from the top the widget hands off to native scrolling and
    /// signals leave. Otherwise wheel input is intercepted while frozen and turned into a step
    /// when possible.
    pub fn handle_wheel(&mut self, event: &mut InputEvent<WheelInput>, now_ms: u64) {
        if self.page_offset() > self.options.scroll_threshold {
            self.leave();
            return;
        }
        if self.frozen {
            event.suppress_default_action();
            return;
        }

        let delta_y = event.payload().delta_y;
        if !self.is_last() && delta_y > 0.0 {
            event.suppress_default_action();
            self.next_slide(now_ms);
        } else if !self.is_first() && delta_y < 0.0 {
            event.suppress_default_action();
            self.prev_slide(now_ms);
        }
    }

    pub fn handle_key(&mut self, event: &mut InputEvent<KeyInput>, now_ms: u64) {
        if self.frozen {
            event.suppress_default_action();
            return;
        }

        match event.payload().key {
            Key::ArrowDown if !self.is_last() => {
                event.suppress_default_action();
                self.next_slide(now_ms);
            }
            Key::ArrowUp
                if !self.is_first() && self.page_offset() < self.options.scroll_threshold =>
            {
                event.suppress_default_action();
                self.prev_slide(now_ms);
            }
            _ => {}
        }
    }

    /// Begins tracking a touch gesture.
    ///
    /// The first touch on the last slide opens an unlock window of `freeze_time_ms` instead, so
    /// the page can be scrolled past the widget.
    pub fn handle_touch_start(&mut self, event: &mut InputEvent<TouchInput>, now_ms: u64) {
        if self.page_offset() > self.options.scroll_threshold {
            return;
        }

        if self.is_last() && !self.is_at_bottom {
            self.is_at_bottom = true;
            self.unlocked = true;
            let freeze_ms = self.freeze_time_ms();
            self.timers.schedule(now_ms, freeze_ms, TimerKind::Unlock);
            sddebug!(active = self.active, "unlocked at last slide");
        }
        if self.unlocked {
            return;
        }

        let touch = *event.payload();
        if !touch.interactive_target {
            event.suppress_default_action();
        }
        self.touch = Some(TouchTrack {
            start_y: touch.client_y,
            last_y: touch.client_y,
        });
        self.is_at_bottom = false;
    }

    pub fn handle_touch_move(&mut self, event: &mut InputEvent<TouchInput>) {
        if !self.unlocked && !self.is_last() {
            event.suppress_default_action();
        }
        let y = event.payload().client_y;
        if let Some(track) = &mut self.touch {
            track.last_y = y;
        }
    }

    /// Ends the current gesture. A swipe longer than `swipe_threshold` steps one slide.
    ///
    /// Any touch end on the last slide signals leave, even without a tracked gesture.
    pub fn handle_touch_end(&mut self, _event: &mut InputEvent<()>, now_ms: u64) {
        if self.is_last() {
            self.leave();
        }

        let Some(track) = self.touch.take() else {
            return;
        };

        let delta_y = track.delta_y();
        let threshold = self.options.swipe_threshold;
        if !self.is_last() && delta_y < -threshold {
            self.next_slide(now_ms);
        } else if !self.is_first() && delta_y > threshold {
            self.prev_slide(now_ms);
        }
    }

    /// Page scroll. Keeps the page pinned to the top unless unlocked or on the last slide.
    pub fn handle_scroll(&mut self, event: &mut InputEvent<()>) {
        if !self.unlocked && !self.is_last() {
            event.suppress_default_action();
            event.stop_propagation();
            self.viewport.set_scroll_offset(0.0);
        }
    }
}
