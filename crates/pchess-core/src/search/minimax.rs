//! ミニマックス逆伝播
//!
//! 展開済みの部分木を帰りがけ順に辿る。評価値は先手から見た絶対値
//! （先手が詰めば `-inf`）なので、先手番のノードでは子のスコアの最大、
//! 後手番のノードでは最小を選ぶ。深さ 0 は根の手番で、以後は深さごとに手番が入れ替わる。
//! スコアを持たない子（`None`）は比較から外す。
//! 子が1つもスコアを返さないノードは自身の静的評価を使う（それも無ければ `None` のまま）。
//! 同点は子の並び順で先のものを残す。

use std::fmt;

use log::{log_enabled, trace, Level};

use super::{NodeId, SearchTree};
use crate::types::{format_score, Score, Side};

/// 深さ `depth` のノードで手番を持つ側
#[inline]
fn side_at(root_side: Side, depth: u32) -> Side {
    if depth % 2 == 0 { root_side } else { !root_side }
}

/// `node` 以下を逆伝播し、`(スコア, 最善子)` を返す
///
/// `root_side` は深さ 0 の手番。各ノードの `best_child` を上書きする。
/// 同じ木に何度実行しても結果は変わらない。
pub fn backpropagate<P, M>(
    tree: &mut SearchTree<P, M>,
    node: NodeId,
    depth: u32,
    root_side: Side,
) -> (Score, Option<NodeId>)
where
    M: Copy + fmt::Display,
{
    let maximize = side_at(root_side, depth) == Side::First;
    let mut best: Option<(f64, NodeId)> = None;

    for i in 0..tree.get(node).children().len() {
        let child = tree.get(node).children()[i];
        let (child_score, _) = backpropagate(tree, child, depth + 1, root_side);
        let Some(score) = child_score else {
            continue;
        };
        let better = match best {
            None => true,
            Some((current, _)) if maximize => score > current,
            Some((current, _)) => score < current,
        };
        if better {
            best = Some((score, child));
        }
    }

    let best_child = best.map(|(_, id)| id);
    tree.set_best_child(node, best_child);
    let score = match best {
        Some((score, _)) => Some(score),
        None => tree.get(node).static_eval(),
    };

    if log_enabled!(Level::Trace) {
        let n = tree.get(node);
        let mv = n.mv().map_or_else(|| "-".to_string(), |m| m.to_string());
        trace!(
            "{}{depth} {} {} {mv}",
            "\t".repeat(depth as usize),
            format_score(score),
            format_score(n.static_eval())
        );
    }

    (score, best_child)
}

/// 根から逆伝播する
pub fn backpropagate_root<P, M>(
    tree: &mut SearchTree<P, M>,
    root_side: Side,
) -> (Score, Option<NodeId>)
where
    M: Copy + fmt::Display,
{
    let root = tree.root();
    backpropagate(tree, root, 0, root_side)
}
