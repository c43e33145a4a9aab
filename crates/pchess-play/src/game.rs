//! 対局ループ

use anyhow::Result;
use chess::{Board, BoardStatus};
use log::warn;
use pchess_core::Side;

use crate::player::Player;

/// ゲーム設定
pub struct GameConfig {
    /// この手数に達したら引き分け
    pub max_plies: u32,
}

/// 1手ごとに呼ばれるイベント
pub struct MoveEvent {
    pub ply: u32,
    pub side: Side,
    pub fen_before: String,
    pub move_uci: String,
    pub player: String,
    /// 着手後の局面
    pub board: Board,
}

/// 対局の状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    FirstWin,
    SecondWin,
    Draw,
}

impl GameOutcome {
    pub fn label(self) -> &'static str {
        match self {
            GameOutcome::InProgress => "in_progress",
            GameOutcome::FirstWin => "first_win",
            GameOutcome::SecondWin => "second_win",
            GameOutcome::Draw => "draw",
        }
    }

    /// `side` の負け
    fn loss_of(side: Side) -> Self {
        match side {
            Side::First => GameOutcome::SecondWin,
            Side::Second => GameOutcome::FirstWin,
        }
    }
}

/// 対局結果
pub struct GameResult {
    pub outcome: GameOutcome,
    pub reason: String,
    pub plies: u32,
    pub final_board: Board,
}

/// 1局を実行する。
///
/// - `first`, `second`: 先手（白）と後手（黒）
/// - `start`: 開始局面（どちらの手番でもよい）
/// - `on_move`: 1手ごとに呼ばれるコールバック
///
/// 詰み・ステイルメイト・着手不能・最大手数で終了する。
/// 非合法手を返したプレイヤーは負け。
pub fn run_game(
    first: &mut dyn Player,
    second: &mut dyn Player,
    start: Board,
    config: &GameConfig,
    on_move: &mut dyn FnMut(&MoveEvent),
) -> Result<GameResult> {
    let mut board = start;
    let mut outcome = GameOutcome::InProgress;
    let mut reason = "max_plies".to_string();
    let mut plies = 0u32;

    while plies < config.max_plies {
        let side = Side::from(board.side_to_move());
        match board.status() {
            BoardStatus::Checkmate => {
                outcome = GameOutcome::loss_of(side);
                reason = "checkmate".to_string();
                break;
            }
            BoardStatus::Stalemate => {
                outcome = GameOutcome::Draw;
                reason = "stalemate".to_string();
                break;
            }
            BoardStatus::Ongoing => {}
        }

        let player: &mut dyn Player = match side {
            Side::First => &mut *first,
            Side::Second => &mut *second,
        };
        let Some(mv) = player.decide_move(&board)? else {
            warn!("{} could not find a move", player.name());
            outcome = GameOutcome::loss_of(side);
            reason = "no_move".to_string();
            break;
        };
        if !board.legal(mv) {
            warn!("{} returned illegal move {mv}", player.name());
            outcome = GameOutcome::loss_of(side);
            reason = "illegal_move".to_string();
            break;
        }

        let fen_before = board.to_string();
        board = board.make_move_new(mv);
        plies += 1;
        on_move(&MoveEvent {
            ply: plies,
            side,
            fen_before,
            move_uci: mv.to_string(),
            player: player.name().to_string(),
            board,
        });
    }

    // 最大手数ちょうどで詰んだ場合も詰みとして扱う
    if outcome == GameOutcome::InProgress {
        match board.status() {
            BoardStatus::Checkmate => {
                outcome = GameOutcome::loss_of(board.side_to_move().into());
                reason = "checkmate".to_string();
            }
            BoardStatus::Stalemate => {
                outcome = GameOutcome::Draw;
                reason = "stalemate".to_string();
            }
            BoardStatus::Ongoing => {
                outcome = GameOutcome::Draw;
            }
        }
    }

    Ok(GameResult {
        outcome,
        reason,
        plies,
        final_board: board,
    })
}
