use std::{
    io,
    time::{Duration, Instant},
};

use crossterm::event;

use super::event::TuiEvent;

/// When a redraw is issued after state changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderMode {
    /// Redraw as soon as anything changed.
    #[default]
    OnDirty,
    /// Redraw after changes, at most once per interval.
    ///
    /// Bursts of events (mouse drags, key repeat) are folded into one frame.
    Throttled(Duration),
}

impl RenderMode {
    /// Creates `Throttled` mode from a maximum frame rate (FPS).
    #[must_use]
    pub fn throttled_from_rate(rate: f64) -> Self {
        Self::Throttled(Duration::from_secs_f64(1.0 / rate))
    }
}

/// Produces the next event for the runtime.
///
/// The loop blocks on terminal input while nothing needs drawing. Any terminal
/// event marks the screen dirty.
#[derive(Debug)]
pub(super) struct EventLoop {
    render_mode: RenderMode,
    last_render: Instant,
    dirty: bool,
}

impl Default for EventLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLoop {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            render_mode: RenderMode::default(),
            last_render: now.checked_sub(Duration::from_secs(86400)).unwrap_or(now),
            // The first frame must be drawn before any input arrives.
            dirty: true,
        }
    }

    pub(super) fn set_render_mode(&mut self, render_mode: RenderMode) {
        self.render_mode = render_mode;
    }

    pub(super) fn next(&mut self) -> io::Result<TuiEvent> {
        loop {
            let now = Instant::now();
            if self.should_render(now) {
                self.last_render = now;
                self.dirty = false;
                return Ok(TuiEvent::Render);
            }

            if let Some(timeout) = self.render_timeout(now)
                && !event::poll(timeout)?
            {
                continue;
            }

            self.dirty = true;
            return Ok(event::read()?.into());
        }
    }

    fn should_render(&self, now: Instant) -> bool {
        match self.render_mode {
            RenderMode::OnDirty => self.dirty,
            RenderMode::Throttled(interval) => {
                self.dirty && now.duration_since(self.last_render) >= interval
            }
        }
    }

    /// How long to wait for input before a pending redraw is due.
    ///
    /// `None` means nothing is pending and the loop may block indefinitely.
    fn render_timeout(&self, now: Instant) -> Option<Duration> {
        if !self.dirty {
            return None;
        }
        let due = match self.render_mode {
            RenderMode::OnDirty => now,
            RenderMode::Throttled(interval) => self.last_render + interval,
        };
        Some(due.saturating_duration_since(now))
    }
}
