//! 確率誘導型最良優先探索
//!
//! - `tree`: 探索木（アリーナ上のノードと `NodeId`）
//! - `frontier`: 累積負対数確率の小さい順に取り出す優先度キュー
//! - `expand`: ノード1つの展開（終局判定・スコア取得・log-sum-exp 正規化）
//! - `minimax`: 展開済み部分木のミニマックス逆伝播
//! - `select`: 根の最善子からの着手選択と読み筋の復元
//! - `searcher`: 上記をまとめて1回の探索を実行するドライバ
//!
//! 探索は単一スレッドで逐次に行う。予算（展開回数・時間）の判定は
//! 展開と展開の間でのみ行い、展開途中で打ち切ることはない。

mod config;
mod error;
mod expand;
mod frontier;
mod minimax;
mod searcher;
mod select;
mod stats;
mod tree;

#[cfg(test)]
mod tests;

pub use config::{SearchConfig, DEFAULT_MAX_EXPANSIONS, DEFAULT_SMOOTHING};
pub use error::{SearchError, SearchResult};
pub use expand::{expand_one, normalize_log_probs, ExpansionKind, ExpansionOutcome};
pub use frontier::Frontier;
pub use minimax::{backpropagate, backpropagate_root};
pub use searcher::{BestFirstSearch, SearchOutcome};
pub use select::{principal_variation, select_move};
pub use stats::{SearchStats, StopReason};
pub use tree::{NodeId, SearchTree, TreeNode};
