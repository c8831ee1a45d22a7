use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use crate::view::{layout::PlayLayout, widgets::KeyBinding};

/// What a single input event asks the play screen to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Action {
    Place(usize),
    MoveCursor { dx: isize, dy: isize },
    PlaceAtCursor,
    NextRound,
    ResetBoard,
    ResetMatch,
    Quit,
}

impl Action {
    pub(super) fn from_key_event(event: &KeyEvent) -> Option<Self> {
        if event.kind != KeyEventKind::Press {
            return None;
        }
        match event.code {
            KeyCode::Char(c @ '1'..='9') => c.to_digit(10).map(|d| Self::Place(d as usize - 1)),
            KeyCode::Char('h') | KeyCode::Left => Some(Self::MoveCursor { dx: -1, dy: 0 }),
            KeyCode::Char('l') | KeyCode::Right => Some(Self::MoveCursor { dx: 1, dy: 0 }),
            KeyCode::Char('k') | KeyCode::Up => Some(Self::MoveCursor { dx: 0, dy: -1 }),
            KeyCode::Char('j') | KeyCode::Down => Some(Self::MoveCursor { dx: 0, dy: 1 }),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Self::PlaceAtCursor),
            KeyCode::Char('n') => Some(Self::NextRound),
            KeyCode::Char('r') => Some(Self::ResetBoard),
            KeyCode::Char('R') => Some(Self::ResetMatch),
            KeyCode::Char('q') | KeyCode::Esc => Some(Self::Quit),
            _ => None,
        }
    }

    /// Maps a left click on a board cell to a placement on that cell.
    pub(super) fn from_mouse_event(event: &MouseEvent, layout: &PlayLayout) -> Option<Self> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => layout
                .cell_at(Position::new(event.column, event.row))
                .map(Self::Place),
            _ => None,
        }
    }

    pub(super) fn bindings(round_over: bool) -> &'static [KeyBinding<'static>] {
        if round_over {
            &[
                (&["n"], "Next Round"),
                (&["r"], "Reset Board"),
                (&["R"], "Reset Match"),
                (&["q", "Esc"], "Quit"),
            ]
        } else {
            &[
                (&["1-9"], "Place"),
                (&["←↑↓→"], "Move"),
                (&["Enter"], "Select"),
                (&["r"], "Reset Board"),
                (&["R"], "Reset Match"),
                (&["q"], "Quit"),
            ]
        }
    }
}
