use slidedeck::{ScrollRestoration, ViewportPort};
use web_sys::Window;

/// [`ViewportPort`] backed by the browser window and its `history` object.
#[derive(Clone, Debug)]
pub struct WindowViewport {
    window: Window,
}

impl WindowViewport {
    pub fn new(window: Window) -> Self {
        Self { window }
    }

    pub fn window(&self) -> &Window {
        &self.window
    }
}

impl ViewportPort for WindowViewport {
    fn scroll_offset(&self) -> f64 {
        self.window
            .scroll_y()
            .or_else(|_| self.window.page_y_offset())
            .unwrap_or(0.0)
    }

    fn set_scroll_offset(&mut self, offset: f64) {
        self.window.scroll_to_with_x_and_y(0.0, offset);
    }

    fn set_scroll_restoration(&mut self, mode: ScrollRestoration) {
        let Ok(history) = self.window.history() else {
            return;
        };
        let mode = match mode {
            ScrollRestoration::Auto => web_sys::ScrollRestoration::Auto,
            ScrollRestoration::Manual => web_sys::ScrollRestoration::Manual,
        };
        // Older browsers lack the property; the page then keeps its default behaviour.
        let _ = history.set_scroll_restoration(mode);
    }
}
