use crossterm::event::Event as CrosstermEvent;

#[derive(Debug, Clone, derive_more::IsVariant, derive_more::From)]
pub(super) enum TuiEvent {
    /// The screen is out of date and may be redrawn now.
    Render,
    /// Key input, mouse, resize, and other terminal events.
    Crossterm(CrosstermEvent),
}
