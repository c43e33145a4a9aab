//! 外部オラクルとの境界
//!
//! 探索コアはルールエンジンとスコアラーを直接知らない。
//! 次の2つのトレイト越しにだけ問い合わせる。
//!
//! - `PositionOracle`: 合法手生成・着手適用・終局判定・手番・特徴量エンコード
//! - `ScoreOracle`: 特徴量ベクトルのバッチに対するスコア計算
//!
//! チェスの局面オラクルは `chess` クレートの上に `ChessOracle` として実装する。

mod chess;

use std::fmt;

use crate::types::Side;

pub use self::chess::{encode_board, parse_uci_move, ChessOracle, FEATURE_DIM, PLANES};

/// 局面オラクル
///
/// 局面は不変なスナップショットとして扱い、`apply` は新しい局面を返す。
pub trait PositionOracle {
    type Position: Clone;
    type Move: Copy + PartialEq + fmt::Debug + fmt::Display;

    /// 合法手を列挙する
    fn legal_moves(&self, pos: &Self::Position) -> Vec<Self::Move>;

    /// 着手後の局面を返す
    fn apply(&self, pos: &Self::Position, mv: Self::Move) -> Self::Position;

    fn is_checkmate(&self, pos: &Self::Position) -> bool;

    fn is_stalemate(&self, pos: &Self::Position) -> bool;

    fn side_to_move(&self, pos: &Self::Position) -> Side;

    /// 固定長の特徴量ベクトルを返す
    ///
    /// `flip` が真のとき盤面を反転し、手番側を先手として見た表現にする。
    fn encode_features(&self, pos: &Self::Position, flip: bool) -> Vec<f32>;
}

/// スコアオラクル
///
/// 各局面について、その局面へ指した側から見たスコア（大きいほど良い手）を返す。
/// 特徴量は着手後の手番側を自分とした表現なので、指した側は「相手」の平面にいる。
/// 入力と同じ長さ・同じ順序のスコア列を返すこと。
/// 長さが一致しない場合、探索側は契約違反として致命的エラーにする。
pub trait ScoreOracle {
    fn score_batch(&self, batch: &[Vec<f32>]) -> anyhow::Result<Vec<f64>>;
}

impl<T: ScoreOracle + ?Sized> ScoreOracle for &T {
    fn score_batch(&self, batch: &[Vec<f32>]) -> anyhow::Result<Vec<f64>> {
        (**self).score_batch(batch)
    }
}

impl<T: ScoreOracle + ?Sized> ScoreOracle for Box<T> {
    fn score_batch(&self, batch: &[Vec<f32>]) -> anyhow::Result<Vec<f64>> {
        (**self).score_batch(batch)
    }
}
