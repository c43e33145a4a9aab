//! フロンティア
//!
//! `(累積コスト, ノード)` の最小優先度キュー。ノードの中身は見ない。
//! 同コストは挿入順に取り出す（安定性は要求しないが決定的にしておく）。

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::{NodeId, SearchError};

#[derive(Debug, Clone, Copy)]
struct Entry {
    cost: f64,
    seq: u64,
    node: NodeId,
}

// BinaryHeap は最大ヒープなので比較を反転する
impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other.cost.total_cmp(&self.cost).then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

/// 累積コスト昇順のフロンティア
#[derive(Debug, Clone, Default)]
pub struct Frontier {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// O(log n)
    pub fn push(&mut self, cost: f64, node: NodeId) {
        debug_assert!(!cost.is_nan(), "frontier cost must not be NaN");
        self.heap.push(Entry {
            cost,
            seq: self.next_seq,
            node,
        });
        self.next_seq += 1;
    }

    /// 最小コストのエントリを取り出す
    ///
    /// 空なら `EmptyFrontier`。失敗しても状態は変わらない。
    pub fn pop_min(&mut self) -> Result<(f64, NodeId), SearchError> {
        self.heap.pop().map(|e| (e.cost, e.node)).ok_or(SearchError::EmptyFrontier)
    }

    /// 次に取り出されるエントリ
    pub fn peek_min(&self) -> Option<(f64, NodeId)> {
        self.heap.peek().map(|e| (e.cost, e.node))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
