/// A lightweight, serializable snapshot of the controller state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SliderState {
    pub active_index: usize,
    pub slide_count: usize,
    /// A transition cooldown is running.
    pub frozen: bool,
    /// Scroll interception is temporarily suspended at the last slide.
    pub unlocked: bool,
    pub is_at_bottom: bool,
    /// A touch gesture is being tracked.
    pub touch_active: bool,
    pub pending_timers: usize,
}

impl SliderState {
    pub fn is_idle(&self) -> bool {
        !self.frozen
    }

    pub fn is_last(&self) -> bool {
        self.active_index + 1 == self.slide_count
    }
}
