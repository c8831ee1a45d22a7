use std::iter;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};
use tictactoe_engine::{GameEngine, Mark};

use crate::view::widgets::style;

/// Scoreboard of the running match.
pub struct ScoreDisplay<'a> {
    engine: &'a GameEngine,
    block: Option<BlockWidget<'a>>,
}

impl<'a> ScoreDisplay<'a> {
    pub fn new(engine: &'a GameEngine) -> Self {
        Self {
            engine,
            block: None,
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }
}

#[derive(Clone, Copy)]
enum Row {
    Empty,
    FullLabel(&'static str),
    LabelValue(&'static str, &'static dyn Fn(&GameEngine) -> String),
}

const ROWS: &[Row] = &[
    Row::LabelValue("Player X", &|engine| {
        engine.score().wins(Mark::First).to_string()
    }),
    Row::LabelValue("Player O", &|engine| {
        engine.score().wins(Mark::Second).to_string()
    }),
    Row::LabelValue("Draws", &|engine| engine.score().draws().to_string()),
    Row::Empty,
    Row::LabelValue("Rounds", &|engine| {
        engine.score().rounds_completed().to_string()
    }),
    Row::LabelValue("Opened by", &|engine| engine.starting_player().to_string()),
    Row::Empty,
    Row::FullLabel("Rounds alternate the"),
    Row::FullLabel("starting player."),
];

impl Widget for ScoreDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let rows_areas =
            Layout::vertical((0..ROWS.len()).map(|_| Constraint::Length(1))).split(area);

        for (row, area) in iter::zip(ROWS.iter().copied(), rows_areas.iter().copied()) {
            match row {
                Row::Empty => {}
                Row::FullLabel(label) => {
                    Line::styled(label, style::DIM)
                        .left_aligned()
                        .render(area, buf);
                }
                Row::LabelValue(label, value) => {
                    let [label_area, value_area] = area.layout(&Layout::horizontal([
                        Constraint::Fill(1),
                        Constraint::Fill(1),
                    ]));
                    Line::styled(label, style::DEFAULT)
                        .left_aligned()
                        .render(label_area, buf);
                    Line::styled(value(self.engine), style::DEFAULT)
                        .right_aligned()
                        .render(value_area, buf);
                }
            }
        }
    }
}
