/// Browser scroll-restoration mode (`history.scrollRestoration`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollRestoration {
    #[default]
    Auto,
    Manual,
}

/// Access to the page-level scroll state the controller needs.
///
/// The controller never touches global browser state directly; adapters provide this port.
pub trait ViewportPort {
    /// Current vertical page scroll offset in CSS pixels.
    fn scroll_offset(&self) -> f64;

    fn set_scroll_offset(&mut self, offset: f64);

    fn set_scroll_restoration(&mut self, mode: ScrollRestoration);
}

impl<V: ViewportPort + ?Sized> ViewportPort for &mut V {
    fn scroll_offset(&self) -> f64 {
        (**self).scroll_offset()
    }

    fn set_scroll_offset(&mut self, offset: f64) {
        (**self).set_scroll_offset(offset);
    }

    fn set_scroll_restoration(&mut self, mode: ScrollRestoration) {
        (**self).set_scroll_restoration(mode);
    }
}

/// An in-memory viewport for headless hosts and tests.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MemoryViewport {
    pub offset: f64,
    pub restoration: ScrollRestoration,
    /// Number of `set_scroll_offset` calls observed.
    pub scroll_writes: usize,
}

impl MemoryViewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_offset(offset: f64) -> Self {
        Self {
            offset,
            ..Self::default()
        }
    }
}

impl ViewportPort for MemoryViewport {
    fn scroll_offset(&self) -> f64 {
        self.offset
    }

    fn set_scroll_offset(&mut self, offset: f64) {
        self.offset = offset;
        self.scroll_writes += 1;
    }

    fn set_scroll_restoration(&mut self, mode: ScrollRestoration) {
        self.restoration = mode;
    }
}
