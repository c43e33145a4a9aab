//! スコアオラクルの実装
//!
//! - `MlpScorer`: 全結合ネットワーク。パラメータは JSON（`.gz` 可）から1度だけ読み込む
//! - `MaterialScorer`: 駒得のみの決定的スコアラー（モデル未指定時の代替）

mod material;
mod mlp;

pub use material::{MaterialScorer, PIECE_VALUES};
pub use mlp::{DenseLayer, MlpParams, MlpScorer, ModelError};
