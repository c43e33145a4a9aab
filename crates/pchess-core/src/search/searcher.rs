//! 探索ドライバ

use std::time::Instant;

use log::{debug, info};

use super::{
    backpropagate_root, expand_one, principal_variation, select_move, ExpansionKind, Frontier,
    SearchConfig, SearchError, SearchStats, SearchTree, StopReason,
};
use crate::oracle::{PositionOracle, ScoreOracle};
use crate::types::{format_score, Score};

/// 1回の探索結果
#[derive(Debug, Clone)]
pub struct SearchOutcome<P, M> {
    pub best_move: M,
    /// 根のミニマックス値
    pub score: Score,
    /// 根から最善子を辿った読み筋
    pub pv: Vec<M>,
    pub stats: SearchStats,
    /// 診断用に保持する探索木
    pub tree: SearchTree<P, M>,
}

/// 確率誘導型の最良優先探索
pub struct BestFirstSearch<'a, O, S: ?Sized> {
    oracle: &'a O,
    scorer: &'a S,
    config: SearchConfig,
}

impl<'a, O, S> BestFirstSearch<'a, O, S>
where
    O: PositionOracle,
    S: ScoreOracle + ?Sized,
{
    /// 設定を検証して構築する
    pub fn new(oracle: &'a O, scorer: &'a S, config: SearchConfig) -> Result<Self, SearchError> {
        config.validate()?;
        Ok(Self {
            oracle,
            scorer,
            config,
        })
    }

    /// 展開と逆伝播だけを行い、木と統計を返す
    ///
    /// `EmptyFrontier` は吸収してそれまでの木で逆伝播する。
    /// 締め切りは2回目以降の展開の前にだけ確認するので、最低1回は展開する。
    pub fn search_tree(
        &self,
        root: O::Position,
    ) -> Result<(SearchTree<O::Position, O::Move>, Score, SearchStats), SearchError> {
        let start = Instant::now();
        let deadline = self.config.deadline(start);
        let root_side = self.oracle.side_to_move(&root);
        let mut tree = SearchTree::new(root);
        let mut frontier = Frontier::new();
        frontier.push(0.0, tree.root());
        let mut stats = SearchStats::default();

        for i in 0..self.config.max_expansions {
            if i > 0 && deadline.is_some_and(|d| Instant::now() >= d) {
                stats.stop_reason = StopReason::Deadline;
                break;
            }
            let outcome = match expand_one(
                &mut tree,
                &mut frontier,
                self.oracle,
                self.scorer,
                self.config.smoothing,
            ) {
                Ok(outcome) => outcome,
                Err(SearchError::EmptyFrontier) => {
                    debug!("search: frontier exhausted after {i} expansions");
                    stats.stop_reason = StopReason::FrontierExhausted;
                    break;
                }
                Err(e) => return Err(e),
            };

            stats.record_pop(outcome.cost);
            stats.max_ply = stats.max_ply.max(tree.get(outcome.node).ply());
            match outcome.kind {
                ExpansionKind::Checkmate => stats.checkmates += 1,
                ExpansionKind::Stalemate => stats.stalemates += 1,
                ExpansionKind::NoLegalMoves | ExpansionKind::AlreadyExpanded => stats.skipped += 1,
                ExpansionKind::Expanded { children } => {
                    stats.expansions += 1;
                    stats.children_created += children as u64;
                    stats.max_ply = stats.max_ply.max(tree.get(outcome.node).ply() + 1);
                }
            }
        }

        let (score, _) = backpropagate_root(&mut tree, root_side);
        stats.frontier_remaining = frontier.len();
        stats.elapsed = start.elapsed();
        info!(
            "search: {} nodes, {} expansions, mass {:.6}, score {}, stop {}",
            tree.len(),
            stats.expansions,
            stats.explored_mass,
            format_score(score),
            stats.stop_reason.label()
        );
        Ok((tree, score, stats))
    }

    /// 探索して着手を決める
    ///
    /// 着手を決められない場合は `NoMoveAvailable` を返す（終局処理は呼び出し側の責務）。
    pub fn search(
        &self,
        root: O::Position,
    ) -> Result<SearchOutcome<O::Position, O::Move>, SearchError> {
        let (tree, score, stats) = self.search_tree(root)?;
        let best_move = select_move(&tree)?;
        let pv = principal_variation(&tree);
        Ok(SearchOutcome {
            best_move,
            score,
            pv,
            stats,
            tree,
        })
    }
}
