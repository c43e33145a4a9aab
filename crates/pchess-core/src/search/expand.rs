//! ノード展開
//!
//! 1. フロンティアから最小コストのノードを取り出す
//! 2. 詰み・ステイルメイトなら終局値を付けて終える（再投入しない）
//! 3. 合法手ごとに着手後の局面を作り、特徴量をまとめて1回でスコアラーに渡す
//! 4. スコアに平滑化係数を掛け、log-sum-exp で対数確率に正規化する
//! 5. 子を追加し、`親コスト - 対数確率` でフロンティアへ積む
//!
//! 子の静的評価は生スコアを先手から見た向きに直した値（後手の着手なら符号反転）。
//!
//! 子の追加とフロンティアへの投入は、兄弟全員のスコアが揃ってから一括で行う。

use log::{debug, warn};

use super::{Frontier, NodeId, SearchError, SearchTree};
use crate::oracle::{PositionOracle, ScoreOracle};
use crate::types::{from_mover, Side, DRAW_SCORE, FIRST_MATED, SECOND_MATED};

/// 展開1回の結果の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpansionKind {
    /// 手番側が詰んでいる
    Checkmate,
    Stalemate,
    /// 終局と判定されないのに合法手がない（何もしない）
    NoLegalMoves,
    /// 既に展開済みだった（通常は起こらない）
    AlreadyExpanded,
    /// 子を生成した
    Expanded { children: usize },
}

/// 展開1回の結果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpansionOutcome {
    pub node: NodeId,
    /// 取り出したノードの累積コスト
    pub cost: f64,
    pub kind: ExpansionKind,
}

/// 生スコアを対数確率分布に正規化する
///
/// 平滑化係数を掛けた後、最大値を引いてから `log Σ exp` を取るので
/// exp がオーバーフローしない。戻り値はすべて 0 以下で、exp の和は 1。
pub fn normalize_log_probs(raw: &[f64], smoothing: f64) -> Vec<f64> {
    if raw.is_empty() {
        return Vec::new();
    }
    let scaled: Vec<f64> = raw.iter().map(|s| s * smoothing).collect();
    let max = scaled.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let log_z = scaled.iter().map(|s| (s - max).exp()).sum::<f64>().ln();
    scaled.iter().map(|s| s - max - log_z).collect()
}

/// フロンティアの先頭ノードを1つ展開する
///
/// フロンティアが空なら `EmptyFrontier`。スコアオラクルの契約違反と失敗は致命的エラー。
pub fn expand_one<O, S>(
    tree: &mut SearchTree<O::Position, O::Move>,
    frontier: &mut Frontier,
    oracle: &O,
    scorer: &S,
    smoothing: f64,
) -> Result<ExpansionOutcome, SearchError>
where
    O: PositionOracle,
    S: ScoreOracle + ?Sized,
{
    let (cost, node) = frontier.pop_min()?;
    let outcome = |kind| ExpansionOutcome { node, cost, kind };

    if tree.get(node).is_expanded() {
        return Ok(outcome(ExpansionKind::AlreadyExpanded));
    }

    let position = tree.get(node).position().clone();
    if oracle.is_checkmate(&position) {
        // 詰まされた側の負け
        let value = match oracle.side_to_move(&position) {
            Side::First => FIRST_MATED,
            Side::Second => SECOND_MATED,
        };
        tree.set_static_eval(node, Some(value));
        tree.mark_expanded(node);
        debug!("expand: node {} checkmate ({value})", node.index());
        return Ok(outcome(ExpansionKind::Checkmate));
    }
    if oracle.is_stalemate(&position) {
        tree.set_static_eval(node, Some(DRAW_SCORE));
        tree.mark_expanded(node);
        debug!("expand: node {} stalemate", node.index());
        return Ok(outcome(ExpansionKind::Stalemate));
    }

    let moves = oracle.legal_moves(&position);
    if moves.is_empty() {
        warn!("expand: node {} has no legal moves but is not terminal", node.index());
        tree.mark_expanded(node);
        return Ok(outcome(ExpansionKind::NoLegalMoves));
    }

    let candidates: Vec<O::Position> = moves.iter().map(|&mv| oracle.apply(&position, mv)).collect();
    let features: Vec<Vec<f32>> = candidates
        .iter()
        .map(|c| {
            let flip = oracle.side_to_move(c) == Side::Second;
            oracle.encode_features(c, flip)
        })
        .collect();

    let raw = scorer.score_batch(&features).map_err(SearchError::Scorer)?;
    if raw.len() != candidates.len() {
        return Err(SearchError::ScoreBatchMismatch {
            expected: candidates.len(),
            actual: raw.len(),
        });
    }
    if let Some((index, &value)) = raw.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(SearchError::NonFiniteScore { index, value });
    }

    let log_probs = normalize_log_probs(&raw, smoothing);
    let mover = oracle.side_to_move(&position);
    let children = candidates.len();
    for ((candidate, mv), (raw_score, log_prob)) in
        candidates.into_iter().zip(moves).zip(raw.into_iter().zip(log_probs))
    {
        let child_cost = cost - log_prob;
        let static_eval = from_mover(raw_score, mover);
        let child = tree.add_child(node, candidate, mv, Some(static_eval), child_cost);
        frontier.push(child_cost, child);
    }
    tree.mark_expanded(node);

    debug!(
        "expand: node {} ply {} cost {cost:.4} -> {children} children, frontier {}",
        node.index(),
        tree.get(node).ply(),
        frontier.len()
    );
    Ok(outcome(ExpansionKind::Expanded { children }))
}
