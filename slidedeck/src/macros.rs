#[cfg(feature = "tracing")]
macro_rules! sdtrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "slidedeck", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! sdtrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! sddebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "slidedeck", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! sddebug {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! sdwarn {
    ($($tt:tt)*) => {
        tracing::warn!(target: "slidedeck", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! sdwarn {
    ($($tt:tt)*) => {};
}
