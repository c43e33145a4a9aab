//! 着手選択

use super::{SearchError, SearchTree};

/// 逆伝播後の根の最善子に至る手を返す
///
/// 最善子が無い（根が終局、または子が一つも生成されなかった）場合は `NoMoveAvailable`。
pub fn select_move<P, M: Copy>(tree: &SearchTree<P, M>) -> Result<M, SearchError> {
    let best = tree.get(tree.root()).best_child().ok_or(SearchError::NoMoveAvailable)?;
    tree.get(best).mv().ok_or(SearchError::NoMoveAvailable)
}

/// 根から最善子を辿った読み筋
pub fn principal_variation<P, M: Copy>(tree: &SearchTree<P, M>) -> Vec<M> {
    let mut pv = Vec::new();
    let mut node = tree.get(tree.root()).best_child();
    while let Some(id) = node {
        let n = tree.get(id);
        if let Some(mv) = n.mv() {
            pv.push(mv);
        }
        node = n.best_child();
    }
    pv
}
