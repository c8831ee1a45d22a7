pub use self::{board_display::*, key_binding_display::*, score_display::*};

mod board_display;
mod key_binding_display;
mod score_display;

mod color {
    use ratatui::style::Color;

    pub const INDIGO: Color = Color::Rgb(129, 140, 248);
    pub const EMERALD: Color = Color::Rgb(52, 211, 153);
    pub const AMBER: Color = Color::Rgb(251, 191, 36);
    pub const SLATE: Color = Color::Rgb(100, 116, 139);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
}

pub mod style {
    use ratatui::style::{Modifier, Style};
    use tictactoe_engine::{Mark, Status};

    use super::color;

    pub const DEFAULT: Style = Style::new().fg(color::WHITE);
    pub const DIM: Style = Style::new().fg(color::SLATE);
    pub const TITLE: Style = Style::new().fg(color::WHITE).add_modifier(Modifier::BOLD);

    pub const CELL_BORDER: Style = Style::new().fg(color::SLATE);
    pub const CURSOR_BORDER: Style = Style::new().fg(color::AMBER);
    pub const WINNING_CELL: Style = Style::new().fg(color::EMERALD);

    const FIRST_MARK: Style = Style::new().fg(color::INDIGO).add_modifier(Modifier::BOLD);
    const SECOND_MARK: Style = Style::new().fg(color::EMERALD).add_modifier(Modifier::BOLD);

    #[must_use]
    pub const fn mark(mark: Mark) -> Style {
        match mark {
            Mark::First => FIRST_MARK,
            Mark::Second => SECOND_MARK,
        }
    }

    #[must_use]
    pub const fn status(status: Status) -> Style {
        match status {
            Status::Winner(_) => WINNING_CELL.add_modifier(Modifier::BOLD),
            Status::Draw => Style::new().fg(color::AMBER).add_modifier(Modifier::BOLD),
            Status::NextPlayer(mark) => self::mark(mark),
        }
    }
}
