//! search モジュールのテスト
//!
//! 木の形・終局・スコアを表で与えるおもちゃのゲームで、チェスと独立に検証する。


use std::cell::Cell;
use std::collections::{HashMap, HashSet};

use crate::oracle::{PositionOracle, ScoreOracle};
use crate::types::Side;

/// おもちゃの局面: ノード番号と手番
#[derive(Debug, Clone, Copy, PartialEq)]
struct ToyPos {
    id: u32,
    side: Side,
}

impl ToyPos {
    fn root() -> Self {
        Self {
            id: 0,
            side: Side::First,
        }
    }
}

/// 子の一覧と終局集合で定義されるゲーム。手は行き先のノード番号
#[derive(Default)]
struct ToyGame {
    children: HashMap<u32, Vec<u32>>,
    checkmates: HashSet<u32>,
    stalemates: HashSet<u32>,
}

impl ToyGame {
    fn with_children(mut self, id: u32, kids: &[u32]) -> Self {
        self.children.insert(id, kids.to_vec());
        self
    }

    fn with_checkmate(mut self, id: u32) -> Self {
        self.checkmates.insert(id);
        self
    }

    fn with_stalemate(mut self, id: u32) -> Self {
        self.stalemates.insert(id);
        self
    }
}

impl PositionOracle for ToyGame {
    type Position = ToyPos;
    type Move = u32;

    fn legal_moves(&self, pos: &ToyPos) -> Vec<u32> {
        if self.checkmates.contains(&pos.id) || self.stalemates.contains(&pos.id) {
            return Vec::new();
        }
        self.children.get(&pos.id).cloned().unwrap_or_default()
    }

    fn apply(&self, pos: &ToyPos, mv: u32) -> ToyPos {
        ToyPos {
            id: mv,
            side: !pos.side,
        }
    }

    fn is_checkmate(&self, pos: &ToyPos) -> bool {
        self.checkmates.contains(&pos.id)
    }

    fn is_stalemate(&self, pos: &ToyPos) -> bool {
        self.stalemates.contains(&pos.id)
    }

    fn side_to_move(&self, pos: &ToyPos) -> Side {
        pos.side
    }

    fn encode_features(&self, pos: &ToyPos, flip: bool) -> Vec<f32> {
        vec![pos.id as f32, if flip { 1.0 } else { 0.0 }]
    }
}

/// ノード番号ごとのスコア表（未登録は 0）。呼び出し回数とバッチを記録する
#[derive(Default)]
struct TableScorer {
    scores: HashMap<u32, f64>,
    calls: Cell<usize>,
    last_flips: std::cell::RefCell<Vec<bool>>,
}

impl TableScorer {
    fn new(entries: &[(u32, f64)]) -> Self {
        Self {
            scores: entries.iter().copied().collect(),
            ..Self::default()
        }
    }
}

impl ScoreOracle for TableScorer {
    fn score_batch(&self, batch: &[Vec<f32>]) -> anyhow::Result<Vec<f64>> {
        self.calls.set(self.calls.get() + 1);
        *self.last_flips.borrow_mut() = batch.iter().map(|x| x[1] == 1.0).collect();
        Ok(batch
            .iter()
            .map(|x| self.scores.get(&(x[0] as u32)).copied().unwrap_or(0.0))
            .collect())
    }
}

/// 常に1件少なく返す（契約違反）
struct ShortScorer;

impl ScoreOracle for ShortScorer {
    fn score_batch(&self, batch: &[Vec<f32>]) -> anyhow::Result<Vec<f64>> {
        Ok(vec![0.0; batch.len().saturating_sub(1)])
    }
}

/// 常に失敗する
struct FailingScorer;

impl ScoreOracle for FailingScorer {
    fn score_batch(&self, _batch: &[Vec<f32>]) -> anyhow::Result<Vec<f64>> {
        anyhow::bail!("model unavailable")
    }
}
