/// Fatal precondition failures detected while constructing a [`crate::SlideController`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    /// The host provided an empty slide sequence.
    #[error("slide controller requires at least one slide")]
    NoSlides,
}
