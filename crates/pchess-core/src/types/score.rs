//! 評価値
//!
//! 評価値はすべて先手から見た値で、正が先手有利。
//! スコアラーの生出力は指した側から見た値なので、後手の着手では符号を反転して保持する。
//! 詰みは符号付き無限大、ステイルメイトは 0 で表す。未評価は `None`。

use super::Side;

/// 評価値（未評価は `None`）
pub type Score = Option<f64>;

/// 先手が詰まされた局面の評価値
pub const FIRST_MATED: f64 = f64::NEG_INFINITY;
/// 後手が詰まされた局面の評価値
pub const SECOND_MATED: f64 = f64::INFINITY;
/// ステイルメイト
pub const DRAW_SCORE: f64 = 0.0;

/// 指した側から見たスコアを先手から見た値に直す
#[inline]
pub fn from_mover(raw: f64, mover: Side) -> f64 {
    match mover {
        Side::First => raw,
        Side::Second => -raw,
    }
}

/// ログ出力用に評価値を整形する
pub fn format_score(score: Score) -> String {
    match score {
        None => "none".to_string(),
        Some(v) if v == f64::INFINITY => "+inf".to_string(),
        Some(v) if v == f64::NEG_INFINITY => "-inf".to_string(),
        Some(v) => format!("{v:.4}"),
    }
}
