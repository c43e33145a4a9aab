//! 探索エラー

/// 探索中に発生するエラー
///
/// `EmptyFrontier` は探索ループ内で吸収され、それまでに展開した木で続行する。
/// それ以外は1回の探索にとって致命的で、呼び出し側へ伝播する。
#[derive(thiserror::Error, Debug)]
pub enum SearchError {
    /// 展開すべきノードが残っていない
    #[error("frontier is empty")]
    EmptyFrontier,

    /// スコアオラクルが入力と異なる長さを返した（契約違反）
    #[error("score batch size mismatch: expected {expected}, got {actual}")]
    ScoreBatchMismatch { expected: usize, actual: usize },

    /// スコアオラクルが NaN / 無限大を返した（契約違反）
    #[error("non-finite score {value} for candidate {index}")]
    NonFiniteScore { index: usize, value: f64 },

    /// 着手を決められなかった（根が終局、または一度も展開できなかった）
    #[error("no move available")]
    NoMoveAvailable,

    #[error("scorer failed: {0:#}")]
    Scorer(anyhow::Error),

    #[error("invalid search config: {0}")]
    InvalidConfig(String),
}

/// Result type for search operations
pub type SearchResult<T> = Result<T, SearchError>;
