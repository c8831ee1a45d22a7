use std::cell::Cell;

use crossterm::event::Event;
use ratatui::{
    Frame,
    layout::Rect,
    text::Line,
    widgets::{Block as BlockWidget, Padding},
};
use tictactoe_engine::BOARD_SIDE;
use tracing::debug;

use crate::{
    command::play::action::Action,
    record::RecordingEngine,
    tui::{App, RenderMode, Runtime},
    view::{
        layout::PlayLayout,
        widgets::{BoardDisplay, KeyBindingDisplay, ScoreDisplay, style},
    },
};

const DEFAULT_FRAME_RATE: f64 = 60.0;
const CENTER_CELL: usize = 4;

/// The match screen: status line, board, scoreboard and key help.
#[derive(Debug)]
pub(super) struct PlayScreen {
    engine: RecordingEngine,
    cursor: usize,
    /// Layout of the last drawn frame, used to hit-test mouse clicks.
    layout: Cell<PlayLayout>,
    is_exiting: bool,
}

impl PlayScreen {
    pub(super) fn new(engine: RecordingEngine) -> Self {
        Self {
            engine,
            cursor: CENTER_CELL,
            layout: Cell::new(PlayLayout::new(Rect::default())),
            is_exiting: false,
        }
    }

    pub(super) fn into_engine(self) -> RecordingEngine {
        self.engine
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::Place(index) => {
                self.cursor = index;
                _ = self.engine.place_mark(index);
            }
            Action::PlaceAtCursor => _ = self.engine.place_mark(self.cursor),
            Action::MoveCursor { dx, dy } => self.move_cursor(dx, dy),
            Action::NextRound => {
                // Only offered once the round has ended.
                if self.engine.is_round_over() {
                    self.engine.start_next_round();
                }
            }
            Action::ResetBoard => self.engine.reset_board(),
            Action::ResetMatch => self.engine.reset_match(),
            Action::Quit => self.is_exiting = true,
        }
    }

    fn move_cursor(&mut self, dx: isize, dy: isize) {
        let max = BOARD_SIDE - 1;
        let x = (self.cursor % BOARD_SIDE).saturating_add_signed(dx).min(max);
        let y = (self.cursor / BOARD_SIDE).saturating_add_signed(dy).min(max);
        self.cursor = y * BOARD_SIDE + x;
    }
}

impl App for PlayScreen {
    fn init(&mut self, runtime: &mut Runtime) {
        runtime.set_render_mode(RenderMode::throttled_from_rate(DEFAULT_FRAME_RATE));
        runtime.set_mouse_capture(true);
    }

    fn should_exit(&self) -> bool {
        self.is_exiting
    }

    fn handle_event(&mut self, _runtime: &mut Runtime, event: &Event) {
        let action = match event {
            Event::Key(key) => Action::from_key_event(key),
            Event::Mouse(mouse) => Action::from_mouse_event(mouse, &self.layout.get()),
            _ => None,
        };
        if let Some(action) = action {
            debug!(?action, "input");
            self.apply(action);
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let layout = PlayLayout::new(frame.area());
        self.layout.set(layout);

        let outcome = self.engine.outcome();
        let status = self.engine.status();
        let round_over = outcome.is_terminal();

        frame.render_widget(
            Line::styled("Tic Tac Toe Arena", style::TITLE).centered(),
            layout.title,
        );
        frame.render_widget(
            Line::styled(status.to_string(), style::status(status)).centered(),
            layout.status,
        );

        let board = BoardDisplay::new(self.engine.board())
            .winning_line(outcome.winning_line())
            .cursor((!round_over).then_some(self.cursor));
        frame.render_widget(board, layout.board);

        let scoreboard = ScoreDisplay::new(&self.engine).block(
            BlockWidget::bordered()
                .title(" Scoreboard ")
                .border_style(style::DIM)
                .padding(Padding::horizontal(1)),
        );
        frame.render_widget(scoreboard, layout.scoreboard);

        if round_over {
            frame.render_widget(
                Line::styled("Press n to start the next round", style::DEFAULT).centered(),
                layout.next_round,
            );
        }

        frame.render_widget(KeyBindingDisplay::new(Action::bindings(round_over)), layout.help);
    }
}
