use core::fmt;

/// Direction of a slide transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Next,
    Prev,
}

impl Direction {
    /// Direction of a signed index delta. Zero has no direction.
    pub fn from_delta(delta: isize) -> Option<Self> {
        match delta {
            d if d > 0 => Some(Self::Next),
            d if d < 0 => Some(Self::Prev),
            _ => None,
        }
    }

    pub fn delta(self) -> isize {
        match self {
            Self::Next => 1,
            Self::Prev => -1,
        }
    }

    /// Animation class applied to the incoming slide.
    pub fn enter_class(self) -> SlideClass {
        match self {
            Self::Next => SlideClass::FadeInUp,
            Self::Prev => SlideClass::FadeInDown,
        }
    }

    /// Animation class applied to the outgoing slide.
    pub fn exit_class(self) -> SlideClass {
        match self {
            Self::Next => SlideClass::FadeOutUp,
            Self::Prev => SlideClass::FadeOutDown,
        }
    }
}

/// A CSS class the controller toggles on slide and dot elements.
///
/// The host page supplies the animation definitions; the controller only applies the names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlideClass {
    Active,
    FadeInUp,
    FadeInDown,
    FadeOutUp,
    FadeOutDown,
}

impl SlideClass {
    pub const ALL: [SlideClass; 5] = [
        SlideClass::Active,
        SlideClass::FadeInUp,
        SlideClass::FadeInDown,
        SlideClass::FadeOutUp,
        SlideClass::FadeOutDown,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::FadeInUp => "fadeInUp",
            Self::FadeInDown => "fadeInDown",
            Self::FadeOutUp => "fadeOutUp",
            Self::FadeOutDown => "fadeOutDown",
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for SlideClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The set of controller-managed classes currently applied to one element.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassSet(u8);

impl ClassSet {
    pub const EMPTY: ClassSet = ClassSet(0);

    pub fn contains(self, class: SlideClass) -> bool {
        self.0 & class.bit() != 0
    }

    pub fn insert(&mut self, class: SlideClass) {
        self.0 |= class.bit();
    }

    pub fn remove(&mut self, class: SlideClass) {
        self.0 &= !class.bit();
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(self) -> impl Iterator<Item = SlideClass> {
        SlideClass::ALL.into_iter().filter(move |c| self.contains(*c))
    }
}

impl FromIterator<SlideClass> for ClassSet {
    fn from_iter<I: IntoIterator<Item = SlideClass>>(iter: I) -> Self {
        let mut set = ClassSet::EMPTY;
        for class in iter {
            set.insert(class);
        }
        set
    }
}

impl fmt::Debug for ClassSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(SlideClass::name)).finish()
    }
}

/// Keys the controller reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    Other,
}

impl Key {
    /// Maps a DOM `KeyboardEvent.key` value.
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowUp" => Self::ArrowUp,
            "ArrowDown" => Self::ArrowDown,
            _ => Self::Other,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelInput {
    /// Positive values scroll down (towards the next slide).
    pub delta_y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyInput {
    pub key: Key,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchInput {
    /// Vertical position of the first touch point in client coordinates.
    pub client_y: f64,
    /// Whether the touch landed on a link or button. Such touches are tracked, but their default
    /// action is left alone so taps keep working.
    pub interactive_target: bool,
}

impl TouchInput {
    pub fn at(client_y: f64) -> Self {
        Self {
            client_y,
            interactive_target: false,
        }
    }
}

/// An input event as seen by the controller.
///
/// Adapters wrap their native event, dispatch it, then honor the flags: if
/// [`InputEvent::is_default_suppressed`] is set the native default action must be prevented.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InputEvent<P> {
    payload: P,
    default_suppressed: bool,
    propagation_stopped: bool,
}

impl<P> InputEvent<P> {
    pub fn new(payload: P) -> Self {
        Self {
            payload,
            default_suppressed: false,
            propagation_stopped: false,
        }
    }

    pub fn payload(&self) -> &P {
        &self.payload
    }

    pub fn suppress_default_action(&mut self) {
        self.default_suppressed = true;
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn is_default_suppressed(&self) -> bool {
        self.default_suppressed
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

impl InputEvent<WheelInput> {
    pub fn wheel(delta_y: f64) -> Self {
        Self::new(WheelInput { delta_y })
    }
}

impl InputEvent<KeyInput> {
    pub fn key(key: Key) -> Self {
        Self::new(KeyInput { key })
    }
}

impl InputEvent<TouchInput> {
    pub fn touch(client_y: f64) -> Self {
        Self::new(TouchInput::at(client_y))
    }
}

impl InputEvent<()> {
    pub fn bare() -> Self {
        Self::new(())
    }
}
