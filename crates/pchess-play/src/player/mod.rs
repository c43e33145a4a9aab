//! プレイヤー
//!
//! - `ComputerPlayer`: 最良優先探索で着手を決める
//! - `HumanPlayer`: UCI 座標表記を入力から読む
//! - `GreedyPlayer`: 最も価値の高い駒を取る手、無ければ乱数で選ぶ参照相手

mod computer;
mod greedy;
mod human;

use std::io;
use std::rc::Rc;

use anyhow::{Context, Result};
use chess::{Board, ChessMove};
use log::info;
use pchess_core::oracle::FEATURE_DIM;
use pchess_core::scorer::{MaterialScorer, MlpScorer};
use pchess_core::{ScoreOracle, SearchConfig};

use crate::config::{PlayConfig, PlayerKind};

pub use computer::ComputerPlayer;
pub use greedy::GreedyPlayer;
pub use human::HumanPlayer;

/// 対局者
pub trait Player {
    /// 表示用の名前
    fn name(&self) -> &str;

    /// 着手を決める
    ///
    /// 着手を決められない場合は `Ok(None)`。終局処理は呼び出し側が行う。
    fn decide_move(&mut self, board: &Board) -> Result<Option<ChessMove>>;
}

impl<P: Player + ?Sized> Player for Box<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn decide_move(&mut self, board: &Board) -> Result<Option<ChessMove>> {
        (**self).decide_move(board)
    }
}

/// スコアラーを1度だけ用意する。モデル未指定なら駒得スコアラー
pub fn load_scorer(config: &PlayConfig) -> Result<Rc<dyn ScoreOracle>> {
    match &config.players.model {
        Some(path) => {
            let scorer = MlpScorer::load(path, FEATURE_DIM)
                .with_context(|| format!("failed to load model {}", path.display()))?;
            Ok(Rc::new(scorer))
        }
        None => {
            info!("No model given, using material scorer");
            Ok(Rc::new(MaterialScorer::new()))
        }
    }
}

/// 種類に応じたプレイヤーを作る
///
/// 人間は標準入出力を使う。乱数シードは手番ごとにずらす。
pub fn build_player(
    kind: PlayerKind,
    seat: usize,
    search: &SearchConfig,
    scorer: &Rc<dyn ScoreOracle>,
    seed: u64,
) -> Box<dyn Player> {
    let name = format!("{}#{}", kind.label(), seat + 1);
    match kind {
        PlayerKind::Computer => Box::new(ComputerPlayer::new(name, Rc::clone(scorer), search.clone())),
        PlayerKind::Human => Box::new(HumanPlayer::new(name, io::stdin().lock(), io::stdout())),
        PlayerKind::Greedy => Box::new(GreedyPlayer::new(name, seed.wrapping_add(seat as u64))),
    }
}
