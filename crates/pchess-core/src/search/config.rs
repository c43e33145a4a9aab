//! 探索設定

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use super::SearchError;

/// 1回の探索で行う展開回数の既定値
///
/// 1 は「根を1回だけ展開して子の静的評価でミニマックスする」動作に相当する。
pub const DEFAULT_MAX_EXPANSIONS: u32 = 1;

/// スコアに掛ける平滑化係数（過信した分布を平らにする）
pub const DEFAULT_SMOOTHING: f64 = 0.75;

/// 探索設定
///
/// TOML の `[search]` セクションからも読み込める。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// 展開回数の上限
    pub max_expansions: u32,
    /// 思考時間の上限（ミリ秒）。展開と展開の間でのみ判定する
    pub time_limit_ms: Option<u64>,
    /// 正規化前にスコアへ掛ける係数（0 < smoothing <= 1）
    pub smoothing: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_expansions: DEFAULT_MAX_EXPANSIONS,
            time_limit_ms: None,
            smoothing: DEFAULT_SMOOTHING,
        }
    }
}

impl SearchConfig {
    pub fn with_max_expansions(mut self, max_expansions: u32) -> Self {
        self.max_expansions = max_expansions;
        self
    }

    pub fn with_time_limit_ms(mut self, time_limit_ms: Option<u64>) -> Self {
        self.time_limit_ms = time_limit_ms;
        self
    }

    pub fn with_smoothing(mut self, smoothing: f64) -> Self {
        self.smoothing = smoothing;
        self
    }

    /// 値の範囲を検証する
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_expansions == 0 {
            return Err(SearchError::InvalidConfig("max_expansions must be >= 1".to_string()));
        }
        if !self.smoothing.is_finite() || self.smoothing <= 0.0 || self.smoothing > 1.0 {
            return Err(SearchError::InvalidConfig(format!(
                "smoothing must be in (0, 1], got {}",
                self.smoothing
            )));
        }
        Ok(())
    }

    /// 探索開始時刻からの締め切り
    pub fn deadline(&self, start: Instant) -> Option<Instant> {
        self.time_limit_ms.map(|ms| start + Duration::from_millis(ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = SearchConfig::default();
        assert_eq!(config.max_expansions, 1);
        assert_eq!(config.smoothing, 0.75);
        assert!(config.validate().is_ok());
        assert!(config.deadline(Instant::now()).is_none());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        assert!(SearchConfig::default().with_max_expansions(0).validate().is_err());
        assert!(SearchConfig::default().with_smoothing(0.0).validate().is_err());
        assert!(SearchConfig::default().with_smoothing(1.5).validate().is_err());
        assert!(SearchConfig::default().with_smoothing(f64::NAN).validate().is_err());
        assert!(SearchConfig::default().with_smoothing(1.0).validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial_toml_section() {
        let config: SearchConfig = serde_json::from_str(r#"{"max_expansions": 64}"#).unwrap();
        assert_eq!(config.max_expansions, 64);
        assert_eq!(config.smoothing, DEFAULT_SMOOTHING);
        assert!(serde_json::from_str::<SearchConfig>(r#"{"depth": 3}"#).is_err());
    }
}
