use crossterm::event::Event;
use ratatui::Frame;

use super::Runtime;

/// Application driven by [`Runtime::run`].
///
/// There is no tick: the application only changes in response to terminal
/// events, and the runtime redraws after each one.
pub trait App {
    /// Called once before the first frame. Use this to configure the runtime.
    fn init(&mut self, runtime: &mut Runtime);

    fn should_exit(&self) -> bool;

    /// Handles one terminal event (key, mouse, resize, ...) to completion.
    fn handle_event(&mut self, runtime: &mut Runtime, event: &Event);

    fn draw(&self, frame: &mut Frame);
}
