//! 駒得スコアラー

use anyhow::{ensure, Result};

use crate::oracle::{ScoreOracle, FEATURE_DIM};

/// 駒の価値（歩・騎士・ビショップ・ルーク・クイーン・キング）
pub const PIECE_VALUES: [f64; 6] = [1.0, 3.0, 3.0, 5.0, 9.0, 0.0];

/// 指した側から見た駒得をスコアとする
///
/// 特徴量は `encode_board` の平面配置（0..6 が着手後の手番側、6..12 が指した側）を前提とする。
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    pub fn new() -> Self {
        Self
    }

    fn score_one(x: &[f32]) -> f64 {
        let mut score = 0.0;
        for (plane, chunk) in x.chunks_exact(64).enumerate() {
            let count = chunk.iter().map(|&v| f64::from(v)).sum::<f64>();
            let value = PIECE_VALUES[plane % 6];
            if plane < 6 {
                score -= value * count;
            } else {
                score += value * count;
            }
        }
        score
    }
}

impl ScoreOracle for MaterialScorer {
    fn score_batch(&self, batch: &[Vec<f32>]) -> Result<Vec<f64>> {
        batch
            .iter()
            .map(|x| {
                ensure!(
                    x.len() == FEATURE_DIM,
                    "feature length {} (expected {FEATURE_DIM})",
                    x.len()
                );
                Ok(Self::score_one(x))
            })
            .collect()
    }
}
