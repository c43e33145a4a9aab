//! 探索木
//!
//! ノードはアリーナ（`Vec`）に格納し、`NodeId` で参照する。
//! 子の所有は親の `children` だけが持ち、`best_child` は同じ `NodeId` の写しにすぎない。

use crate::types::Score;

/// ノード識別子（アリーナ内のインデックス）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    /// 根は常に 0
    pub const ROOT: NodeId = NodeId(0);

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// 探索木のノード
#[derive(Debug, Clone)]
pub struct TreeNode<P, M> {
    position: P,
    mv: Option<M>,
    parent: Option<NodeId>,
    ply: u32,
    cost: f64,
    static_eval: Score,
    children: Vec<NodeId>,
    best_child: Option<NodeId>,
    expanded: bool,
}

impl<P, M: Copy> TreeNode<P, M> {
    /// このノードの局面
    pub fn position(&self) -> &P {
        &self.position
    }

    /// 親からこのノードに至った手（根は `None`）
    pub fn mv(&self) -> Option<M> {
        self.mv
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// 根からの手数
    pub fn ply(&self) -> u32 {
        self.ply
    }

    /// 根からの累積負対数確率
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// 葉としての静的評価（スコアラーの生出力、または終局値）
    pub fn static_eval(&self) -> Score {
        self.static_eval
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// 直近のミニマックスで選ばれた子
    pub fn best_child(&self) -> Option<NodeId> {
        self.best_child
    }

    /// 展開済み（終局判定済みを含む）かどうか
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }
}

/// 1回の探索が所有する木
#[derive(Debug, Clone)]
pub struct SearchTree<P, M> {
    nodes: Vec<TreeNode<P, M>>,
}

impl<P, M: Copy> SearchTree<P, M> {
    /// 根だけの木を作る
    pub fn new(root_position: P) -> Self {
        let root = TreeNode {
            position: root_position,
            mv: None,
            parent: None,
            ply: 0,
            cost: 0.0,
            static_eval: None,
            children: Vec::new(),
            best_child: None,
            expanded: false,
        };
        Self { nodes: vec![root] }
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> &TreeNode<P, M> {
        &self.nodes[id.index()]
    }

    /// ノード総数（根を含む）
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// 根が常にあるので false になる
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// 全ノードを `NodeId` 付きで走査する
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &TreeNode<P, M>)> {
        self.nodes.iter().enumerate().map(|(i, node)| (NodeId(i as u32), node))
    }

    /// 子を追加する。展開ステップからのみ呼ぶ
    pub(crate) fn add_child(
        &mut self,
        parent: NodeId,
        position: P,
        mv: M,
        static_eval: Score,
        cost: f64,
    ) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        let ply = self.get(parent).ply + 1;
        self.nodes.push(TreeNode {
            position,
            mv: Some(mv),
            parent: Some(parent),
            ply,
            cost,
            static_eval,
            children: Vec::new(),
            best_child: None,
            expanded: false,
        });
        self.nodes[parent.index()].children.push(id);
        id
    }

    pub(crate) fn set_static_eval(&mut self, id: NodeId, static_eval: Score) {
        self.nodes[id.index()].static_eval = static_eval;
    }

    pub(crate) fn mark_expanded(&mut self, id: NodeId) {
        self.nodes[id.index()].expanded = true;
    }

    pub(crate) fn set_best_child(&mut self, id: NodeId, best_child: Option<NodeId>) {
        self.nodes[id.index()].best_child = best_child;
    }
}
