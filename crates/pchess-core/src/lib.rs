//! 確率誘導型の最良優先探索によるチェス着手選択
//!
//! 外部の指し手スコアラー（ニューラルネット等）が返すスコアを対数確率分布に
//! 正規化し、累積負対数尤度の小さい局面から順にゲーム木を展開する。
//! 展開済みの部分木に対してミニマックスを行い、根の最善子から着手を決める。
//!
//! - `types`: 手番（`Side`）と評価値の補助
//! - `oracle`: 局面オラクル / スコアオラクルのインターフェースとチェス実装
//! - `scorer`: スコアオラクルの具体実装（MLP, 駒得）
//! - `search`: 探索木・フロンティア・展開・ミニマックス・着手選択

pub mod oracle;
pub mod scorer;
pub mod search;
pub mod types;

pub use oracle::{ChessOracle, PositionOracle, ScoreOracle};
pub use search::{BestFirstSearch, SearchConfig, SearchError, SearchOutcome};
pub use types::Side;
