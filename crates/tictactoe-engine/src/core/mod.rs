pub use self::{board::*, mark::*, outcome::*, win_line::*};

pub(crate) mod board;
pub(crate) mod mark;
pub(crate) mod outcome;
pub(crate) mod win_line;
