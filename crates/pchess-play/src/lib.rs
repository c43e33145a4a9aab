//! 対局ループとプレイヤー
//!
//! 探索コア（`pchess_core`）を使うコンピュータ、人間、簡易な参照相手を
//! 同じ `Player` インターフェースで扱い、交互に指させる。

pub mod config;
pub mod game;
pub mod player;
pub mod render;

pub use config::{GameSection, PlayConfig, PlayerKind, PlayersSection};
pub use game::{run_game, GameConfig, GameOutcome, GameResult, MoveEvent};
pub use player::{build_player, load_scorer, ComputerPlayer, GreedyPlayer, HumanPlayer, Player};
