//! 基本型

mod score;
mod side;

pub use score::{format_score, from_mover, Score, DRAW_SCORE, FIRST_MATED, SECOND_MATED};
pub use side::Side;
