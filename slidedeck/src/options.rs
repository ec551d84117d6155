use alloc::sync::Arc;

/// Default cooldown after a transition, in milliseconds.
pub const DEFAULT_FREEZE_TIME_MS: u64 = 1500;
/// Page scroll offset (px) above which the widget stops owning wheel/touch/key input.
pub const DEFAULT_SCROLL_THRESHOLD: f64 = 5.0;
/// Minimum vertical swipe distance (px) that counts as a gesture.
pub const DEFAULT_SWIPE_THRESHOLD: f64 = 50.0;

/// A callback receiving the new active slide index.
pub type SlideCallback = Arc<dyn Fn(usize) + Send + Sync>;

/// A callback fired when input signals departure past the last slide.
pub type LeaveCallback = Arc<dyn Fn() + Send + Sync>;

/// Configuration for [`crate::SlideController`].
///
/// Cheap to clone: callbacks live in `Arc`s, so hosts can tweak a field and call
/// `SlideController::set_options` without reallocating closures.
pub struct SlideControllerOptions {
    /// Fired after a forward step transition starts.
    pub on_next_slide: Option<SlideCallback>,
    /// Fired after a backward step transition starts.
    pub on_prev_slide: Option<SlideCallback>,
    /// Fired after any transition starts, including dot clicks and programmatic jumps.
    pub on_change_slide: Option<SlideCallback>,
    pub on_leave: Option<LeaveCallback>,

    /// Cooldown gating re-entrant transitions and the unlock window.
    pub freeze_time_ms: u64,

    pub scroll_threshold: f64,
    pub swipe_threshold: f64,
}

impl Clone for SlideControllerOptions {
    fn clone(&self) -> Self {
        Self {
            on_next_slide: self.on_next_slide.clone(),
            on_prev_slide: self.on_prev_slide.clone(),
            on_change_slide: self.on_change_slide.clone(),
            on_leave: self.on_leave.clone(),
            freeze_time_ms: self.freeze_time_ms,
            scroll_threshold: self.scroll_threshold,
            swipe_threshold: self.swipe_threshold,
        }
    }
}

impl Default for SlideControllerOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl SlideControllerOptions {
    pub fn new() -> Self {
        Self {
            on_next_slide: None,
            on_prev_slide: None,
            on_change_slide: None,
            on_leave: None,
            freeze_time_ms: DEFAULT_FREEZE_TIME_MS,
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
        }
    }

    pub fn with_on_next_slide(
        mut self,
        on_next_slide: Option<impl Fn(usize) + Send + Sync + 'static>,
    ) -> Self {
        self.on_next_slide = on_next_slide.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_prev_slide(
        mut self,
        on_prev_slide: Option<impl Fn(usize) + Send + Sync + 'static>,
    ) -> Self {
        self.on_prev_slide = on_prev_slide.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_change_slide(
        mut self,
        on_change_slide: Option<impl Fn(usize) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change_slide = on_change_slide.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_leave(mut self, on_leave: Option<impl Fn() + Send + Sync + 'static>) -> Self {
        self.on_leave = on_leave.map(|f| Arc::new(f) as _);
        self
    }

    /// Sets the cooldown. Zero falls back to [`DEFAULT_FREEZE_TIME_MS`].
    pub fn with_freeze_time_ms(mut self, freeze_time_ms: u64) -> Self {
        self.freeze_time_ms = freeze_time_ms;
        self
    }

    pub fn with_scroll_threshold(mut self, scroll_threshold: f64) -> Self {
        self.scroll_threshold = scroll_threshold;
        self
    }

    pub fn with_swipe_threshold(mut self, swipe_threshold: f64) -> Self {
        self.swipe_threshold = swipe_threshold;
        self
    }

    pub(crate) fn effective_freeze_time_ms(&self) -> u64 {
        if self.freeze_time_ms == 0 {
            DEFAULT_FREEZE_TIME_MS
        } else {
            self.freeze_time_ms
        }
    }
}

impl core::fmt::Debug for SlideControllerOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SlideControllerOptions")
            .field("freeze_time_ms", &self.freeze_time_ms)
            .field("scroll_threshold", &self.scroll_threshold)
            .field("swipe_threshold", &self.swipe_threshold)
            .finish_non_exhaustive()
    }
}
