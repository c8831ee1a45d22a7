use std::io;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
};

use super::{
    App,
    event::TuiEvent,
    event_loop::{EventLoop, RenderMode},
};

/// Terminal runtime.
///
/// Owns the event loop and drives an [`App`] until it asks to exit.
#[derive(Default, Debug)]
pub struct Runtime {
    events: EventLoop,
    mouse_capture: bool,
}

impl Runtime {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_render_mode(&mut self, mode: RenderMode) {
        self.events.set_render_mode(mode);
    }

    /// Requests mouse events from the terminal while the app runs.
    pub fn set_mouse_capture(&mut self, enabled: bool) {
        self.mouse_capture = enabled;
    }

    /// Runs the application.
    ///
    /// 1. Calls `app.init()`
    /// 2. Enters the alternate screen (and mouse capture, if requested)
    /// 3. Until `app.should_exit()`: draws on `Render`, forwards terminal events
    ///    to `app.handle_event()`
    /// 4. Restores the terminal, also when the loop failed
    pub fn run<A>(mut self, app: &mut A) -> io::Result<()>
    where
        A: App,
    {
        app.init(&mut self);

        let mouse_capture = self.mouse_capture;
        if mouse_capture {
            execute!(io::stdout(), EnableMouseCapture)?;
        }

        let result = ratatui::run(|terminal| {
            while !app.should_exit() {
                match self.events.next()? {
                    TuiEvent::Render => {
                        terminal.draw(|f| app.draw(f))?;
                    }
                    TuiEvent::Crossterm(event) => {
                        app.handle_event(&mut self, &event);
                    }
                }
            }
            Ok(())
        });

        if mouse_capture {
            let restored = execute!(io::stdout(), DisableMouseCapture);
            result?;
            return restored;
        }
        result
    }
}
