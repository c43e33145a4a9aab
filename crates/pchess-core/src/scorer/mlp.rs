//! 全結合ネットワークによるスコアラー
//!
//! パラメータは層ごとの重み行列（`weights[出力][入力]`）とバイアスを持つ JSON。
//! 隠れ層は ReLU、最終層は活性化なしのスカラー出力とする。
//! ファイルは先頭の gzip マジックで判定し、圧縮されていれば伸長しながら読む。

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use flate2::bufread::GzDecoder;
use log::info;
use serde::{Deserialize, Serialize};

use crate::oracle::ScoreOracle;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// パラメータファイルを開く。gzip なら伸長する
fn open_params(path: &Path) -> std::io::Result<Box<dyn Read>> {
    let mut reader = BufReader::new(File::open(path)?);
    if reader.fill_buf()?.starts_with(&GZIP_MAGIC) {
        return Ok(Box::new(GzDecoder::new(reader)));
    }
    Ok(Box::new(reader))
}

/// モデル読み込みエラー
#[derive(thiserror::Error, Debug)]
pub enum ModelError {
    /// File I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to parse parameters: {0}")]
    Json(#[from] serde_json::Error),

    #[error("model has no layers")]
    Empty,

    /// Weight dimension mismatch
    #[error("layer {layer}: dimension mismatch, expected {expected}, got {actual}")]
    DimensionMismatch { layer: usize, expected: usize, actual: usize },
}

/// 全結合層
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DenseLayer {
    pub weights: Vec<Vec<f32>>,
    pub bias: Vec<f32>,
}

impl DenseLayer {
    fn output_dim(&self) -> usize {
        self.bias.len()
    }

    fn forward(&self, x: &[f32], relu: bool) -> Vec<f32> {
        self.weights
            .iter()
            .zip(&self.bias)
            .map(|(row, b)| {
                let z = row.iter().zip(x).map(|(w, v)| w * v).sum::<f32>() + b;
                if relu { z.max(0.0) } else { z }
            })
            .collect()
    }
}

/// シリアライズされたパラメータ
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MlpParams {
    pub layers: Vec<DenseLayer>,
}

/// MLP スコアラー
#[derive(Debug, Clone)]
pub struct MlpScorer {
    layers: Vec<DenseLayer>,
    input_dim: usize,
}

impl MlpScorer {
    /// パラメータを検証して構築する
    ///
    /// 各層の入力次元が前段の出力次元と一致し、最終層の出力が1であること。
    pub fn from_params(params: MlpParams, input_dim: usize) -> Result<Self, ModelError> {
        if params.layers.is_empty() {
            return Err(ModelError::Empty);
        }
        let mut expected_in = input_dim;
        for (layer_idx, layer) in params.layers.iter().enumerate() {
            if layer.weights.len() != layer.bias.len() {
                return Err(ModelError::DimensionMismatch {
                    layer: layer_idx,
                    expected: layer.bias.len(),
                    actual: layer.weights.len(),
                });
            }
            if let Some(row) = layer.weights.iter().find(|row| row.len() != expected_in) {
                return Err(ModelError::DimensionMismatch {
                    layer: layer_idx,
                    expected: expected_in,
                    actual: row.len(),
                });
            }
            expected_in = layer.output_dim();
        }
        if expected_in != 1 {
            return Err(ModelError::DimensionMismatch {
                layer: params.layers.len() - 1,
                expected: 1,
                actual: expected_in,
            });
        }
        Ok(Self {
            layers: params.layers,
            input_dim,
        })
    }

    /// JSON（`.gz` 可）から読み込む
    pub fn load<P: AsRef<Path>>(path: P, input_dim: usize) -> Result<Self, ModelError> {
        let reader = open_params(path.as_ref())?;
        let params: MlpParams = serde_json::from_reader(reader)?;
        let scorer = Self::from_params(params, input_dim)?;
        info!(
            "[Model Load] {}: {} layers, input {}",
            path.as_ref().display(),
            scorer.layers.len(),
            input_dim
        );
        Ok(scorer)
    }

    pub fn input_dim(&self) -> usize {
        self.input_dim
    }

    /// 1局面分の順伝播
    pub fn forward(&self, x: &[f32]) -> f64 {
        let last = self.layers.len() - 1;
        let mut h = x.to_vec();
        for (i, layer) in self.layers.iter().enumerate() {
            h = layer.forward(&h, i != last);
        }
        f64::from(h[0])
    }
}

impl ScoreOracle for MlpScorer {
    fn score_batch(&self, batch: &[Vec<f32>]) -> anyhow::Result<Vec<f64>> {
        batch
            .iter()
            .map(|x| {
                anyhow::ensure!(
                    x.len() == self.input_dim,
                    "feature length {} (expected {})",
                    x.len(),
                    self.input_dim
                );
                Ok(self.forward(x))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_params() -> MlpParams {
        // 入力2 → 隠れ2(ReLU) → 出力1
        MlpParams {
            layers: vec![
                DenseLayer {
                    weights: vec![vec![1.0, 0.0], vec![0.0, -1.0]],
                    bias: vec![0.0, 0.0],
                },
                DenseLayer {
                    weights: vec![vec![2.0, 3.0]],
                    bias: vec![0.5],
                },
            ],
        }
    }

    #[test]
    fn test_forward_applies_relu_on_hidden_only() {
        let mlp = MlpScorer::from_params(tiny_params(), 2).unwrap();
        // h = [1, relu(-2)=0] → 2*1 + 3*0 + 0.5
        assert_eq!(mlp.forward(&[1.0, 2.0]), 2.5);
        // h = [relu(-1)=0, 2] → 0 + 6 + 0.5
        assert_eq!(mlp.forward(&[-1.0, -2.0]), 6.5);
    }

    #[test]
    fn test_score_batch_preserves_order() {
        let mlp = MlpScorer::from_params(tiny_params(), 2).unwrap();
        let scores = mlp.score_batch(&[vec![1.0, 2.0], vec![-1.0, -2.0]]).unwrap();
        assert_eq!(scores, vec![2.5, 6.5]);
        assert!(mlp.score_batch(&[vec![1.0]]).is_err());
    }

    #[test]
    fn test_rejects_bad_dimensions() {
        assert!(matches!(
            MlpScorer::from_params(MlpParams { layers: vec![] }, 2),
            Err(ModelError::Empty)
        ));
        assert!(matches!(
            MlpScorer::from_params(tiny_params(), 3),
            Err(ModelError::DimensionMismatch { layer: 0, expected: 3, actual: 2 })
        ));

        let mut two_outputs = tiny_params();
        two_outputs.layers[1].weights.push(vec![1.0, 1.0]);
        two_outputs.layers[1].bias.push(0.0);
        assert!(matches!(
            MlpScorer::from_params(two_outputs, 2),
            Err(ModelError::DimensionMismatch { layer: 1, expected: 1, actual: 2 })
        ));
    }

    #[test]
    fn test_load_from_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        std::fs::write(&path, serde_json::to_vec(&tiny_params()).unwrap()).unwrap();
        let mlp = MlpScorer::load(&path, 2).unwrap();
        assert_eq!(mlp.input_dim(), 2);
        assert_eq!(mlp.forward(&[1.0, 2.0]), 2.5);

        std::fs::write(&path, b"not json").unwrap();
        assert!(matches!(MlpScorer::load(&path, 2), Err(ModelError::Json(_))));

        assert!(matches!(
            MlpScorer::load(dir.path().join("missing.json"), 2),
            Err(ModelError::Io(_))
        ));
    }

    #[test]
    fn test_load_gzip_regardless_of_extension() {
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.bin");
        let mut enc = flate2::write::GzEncoder::new(
            File::create(&path).unwrap(),
            flate2::Compression::default(),
        );
        enc.write_all(&serde_json::to_vec(&tiny_params()).unwrap()).unwrap();
        enc.finish().unwrap();

        let mlp = MlpScorer::load(&path, 2).unwrap();
        assert_eq!(mlp.forward(&[-1.0, -2.0]), 6.5);
    }
}
