use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use slidedeck::{
    ClassSet, InputEvent, Key, SlideClass, SlideController, SlideControllerOptions, SliderState,
    TouchInput,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    AddEventListenerOptions, Element, Event, EventTarget, KeyboardEvent, TouchEvent, WheelEvent,
    Window,
};

use crate::WindowViewport;

/// Where the slider lives in the host page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MountOptions {
    pub container_selector: String,
    /// Resolved inside the container.
    pub slide_selector: String,
    /// Resolved inside the container. Dots are appended here.
    pub nav_selector: String,
    pub dot_class: String,
    /// Touches starting on elements matching this selector keep their default action.
    pub interactive_selector: String,
}

impl Default for MountOptions {
    fn default() -> Self {
        Self {
            container_selector: "#fullscreen-slide-container".to_owned(),
            slide_selector: ".fullscreen-slide".to_owned(),
            nav_selector: ".fullscreen-slider-nav".to_owned(),
            dot_class: "nav-dot".to_owned(),
            interactive_selector: "a, button, a>*".to_owned(),
        }
    }
}

struct Inner {
    window: Window,
    controller: RefCell<SlideController<WindowViewport>>,
    slides: Vec<Element>,
    dots: Vec<Element>,
    interactive_selector: String,
    /// Deadline the pending `setTimeout` was armed for.
    armed: Cell<Option<u64>>,
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl Inner {
    fn now_ms(&self) -> u64 {
        self.window
            .performance()
            .map(|p| p.now() as u64)
            .unwrap_or(0)
    }

    /// Runs `f` against the controller, then mirrors classes and arms the next timer.
    ///
    /// Re-entrant calls (e.g. a callback driving the handle) are dropped.
    fn dispatch<R>(
        &self,
        f: impl FnOnce(&mut SlideController<WindowViewport>, u64) -> R,
    ) -> Option<R> {
        let now_ms = self.now_ms();
        let out = {
            let mut c = self.controller.try_borrow_mut().ok()?;
            f(&mut *c, now_ms)
        };
        self.sync_classes();
        self.arm_timer(now_ms);
        Some(out)
    }

    fn sync_classes(&self) {
        let c = self.controller.borrow();
        for (i, el) in self.slides.iter().enumerate() {
            apply_classes(el, c.slide_classes(i));
        }
        for (i, el) in self.dots.iter().enumerate() {
            apply_classes(el, c.dot_classes(i));
        }
    }

    fn arm_timer(&self, now_ms: u64) {
        let Some(due) = self.controller.borrow().next_deadline() else {
            return;
        };
        if self.armed.get().is_some_and(|armed| armed <= due) {
            return;
        }
        let tick = self.tick.borrow();
        let Some(tick) = tick.as_ref() else {
            return;
        };
        let delay = due.saturating_sub(now_ms).min(i32::MAX as u64) as i32;
        if self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                tick.as_ref().unchecked_ref(),
                delay,
            )
            .is_ok()
        {
            self.armed.set(Some(due));
        }
    }

    fn is_interactive(&self, event: &Event) -> bool {
        event
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(|el| el.matches(&self.interactive_selector).ok())
            .unwrap_or(false)
    }
}

fn apply_classes(el: &Element, set: ClassSet) {
    let list = el.class_list();
    for class in SlideClass::ALL {
        let _ = list.toggle_with_force(class.name(), set.contains(class));
    }
}

fn honor<P>(event: &Event, input: &InputEvent<P>) {
    if input.is_default_suppressed() {
        event.prevent_default();
    }
    if input.is_propagation_stopped() {
        event.stop_propagation();
    }
}

fn listen(
    target: &EventTarget,
    kind: &str,
    passive: Option<bool>,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    match passive {
        Some(passive) => {
            let opts = AddEventListenerOptions::new();
            opts.set_passive(passive);
            target.add_event_listener_with_callback_and_add_event_listener_options(
                kind,
                closure.as_ref().unchecked_ref(),
                &opts,
            )?;
        }
        None => {
            target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
        }
    }
    closure.forget();
    Ok(())
}

fn first_touch_y(event: &Event) -> Option<f64> {
    let touch = event.dyn_ref::<TouchEvent>()?.touches().get(0)?;
    Some(touch.client_y() as f64)
}

/// A mounted slider. Cloning shares the same controller.
#[derive(Clone)]
pub struct SliderHandle {
    inner: Rc<Inner>,
}

impl SliderHandle {
    pub fn state(&self) -> SliderState {
        self.inner.controller.borrow().state()
    }

    pub fn active_index(&self) -> usize {
        self.inner.controller.borrow().active_index()
    }

    pub fn next_slide(&self) -> bool {
        self.inner
            .dispatch(|c, now_ms| c.next_slide(now_ms))
            .unwrap_or(false)
    }

    pub fn prev_slide(&self) -> bool {
        self.inner
            .dispatch(|c, now_ms| c.prev_slide(now_ms))
            .unwrap_or(false)
    }

    pub fn jump_to(&self, index: usize) -> bool {
        self.inner
            .dispatch(|c, now_ms| c.jump_to(index, now_ms))
            .unwrap_or(false)
    }
}

impl core::fmt::Debug for SliderHandle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SliderHandle")
            .field("state", &self.inner.controller.try_borrow().map(|c| c.state()))
            .finish_non_exhaustive()
    }
}

/// Discovers the slider markup, builds the navigation dots and starts listening for input.
///
/// Fails when the window, container, navigation host or slides are missing.
///
/// Callbacks in `options` run while the controller is busy; calling back into the returned
/// handle from inside one is ignored.
pub fn mount(
    options: SlideControllerOptions,
    mount: &MountOptions,
) -> Result<SliderHandle, JsValue> {
    let window = web_sys::window().ok_or("no global window exists")?;
    let document = window
        .document()
        .ok_or("should have a document on window")?;

    let container = document
        .query_selector(&mount.container_selector)?
        .ok_or_else(|| format!("slider container '{}' not found", mount.container_selector))?;
    let nav = container
        .query_selector(&mount.nav_selector)?
        .ok_or_else(|| format!("slider navigation '{}' not found", mount.nav_selector))?;

    let found = container.query_selector_all(&mount.slide_selector)?;
    let slides: Vec<Element> = (0..found.length())
        .filter_map(|i| found.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect();

    let mut controller =
        SlideController::new(slides.len(), options, WindowViewport::new(window.clone()))
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
    controller.initialize();

    let mut dots = Vec::with_capacity(slides.len());
    for _ in 0..slides.len() {
        let dot = document.create_element("div")?;
        dot.class_list().add_1(&mount.dot_class)?;
        nav.append_child(&dot)?;
        dots.push(dot);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        target: "slidedeck_web",
        slides = slides.len(),
        container = %mount.container_selector,
        "mount"
    );

    let inner = Rc::new(Inner {
        window: window.clone(),
        controller: RefCell::new(controller),
        slides,
        dots,
        interactive_selector: mount.interactive_selector.clone(),
        armed: Cell::new(None),
        tick: RefCell::new(None),
    });

    let weak: Weak<Inner> = Rc::downgrade(&inner);
    *inner.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let Some(inner) = weak.upgrade() else {
            return;
        };
        inner.armed.set(None);
        inner.dispatch(|c, now_ms| c.tick(now_ms));
    }) as Box<dyn FnMut()>));

    {
        let inner = Rc::clone(&inner);
        listen(&document, "wheel", Some(false), move |event| {
            let Some(wheel) = event.dyn_ref::<WheelEvent>() else {
                return;
            };
            let mut input = InputEvent::wheel(wheel.delta_y());
            inner.dispatch(|c, now_ms| c.handle_wheel(&mut input, now_ms));
            honor(&event, &input);
        })?;
    }

    {
        let inner = Rc::clone(&inner);
        listen(&container, "touchstart", Some(false), move |event| {
            let Some(client_y) = first_touch_y(&event) else {
                return;
            };
            let mut input = InputEvent::new(TouchInput {
                client_y,
                interactive_target: inner.is_interactive(&event),
            });
            inner.dispatch(|c, now_ms| c.handle_touch_start(&mut input, now_ms));
            honor(&event, &input);
        })?;
    }

    {
        let inner = Rc::clone(&inner);
        listen(&window, "scroll", Some(false), move |event| {
            let mut input = InputEvent::bare();
            inner.dispatch(|c, _| c.handle_scroll(&mut input));
            honor(&event, &input);
        })?;
    }

    {
        let inner = Rc::clone(&inner);
        listen(&document, "touchmove", Some(false), move |event| {
            let Some(client_y) = first_touch_y(&event) else {
                return;
            };
            let mut input = InputEvent::touch(client_y);
            inner.dispatch(|c, _| c.handle_touch_move(&mut input));
            honor(&event, &input);
        })?;
    }

    {
        let inner = Rc::clone(&inner);
        listen(&document, "touchend", None, move |event| {
            let mut input = InputEvent::bare();
            inner.dispatch(|c, now_ms| c.handle_touch_end(&mut input, now_ms));
            honor(&event, &input);
        })?;
    }

    {
        let inner = Rc::clone(&inner);
        listen(&document, "keydown", None, move |event| {
            let Some(key) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let mut input = InputEvent::key(Key::from_name(&key.key()));
            inner.dispatch(|c, now_ms| c.handle_key(&mut input, now_ms));
            honor(&event, &input);
        })?;
    }

    for (index, dot) in inner.dots.iter().enumerate() {
        let inner_for_dot = Rc::clone(&inner);
        listen(dot, "click", None, move |_event| {
            inner_for_dot.dispatch(|c, now_ms| c.click_dot(index, now_ms));
        })?;
    }

    inner.sync_classes();
    Ok(SliderHandle { inner })
}
