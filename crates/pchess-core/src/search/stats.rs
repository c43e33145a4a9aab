//! 探索統計
//!
//! 1回の探索について、展開の内訳と探索済み確率質量を記録する。

use std::time::Duration;

/// 探索の終了理由
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StopReason {
    /// 展開回数の上限に達した
    #[default]
    Budget,
    /// 思考時間の上限に達した
    Deadline,
    /// フロンティアが空になった
    FrontierExhausted,
}

impl StopReason {
    pub fn label(self) -> &'static str {
        match self {
            StopReason::Budget => "budget",
            StopReason::Deadline => "deadline",
            StopReason::FrontierExhausted => "frontier_exhausted",
        }
    }
}

/// 探索統計カウンタ
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    /// フロンティアから取り出したノード数
    pub popped: u64,
    /// 子を生成したノード数
    pub expansions: u64,
    /// 詰みと判定したノード数
    pub checkmates: u64,
    /// ステイルメイトと判定したノード数
    pub stalemates: u64,
    /// 合法手が無く展開を見送ったノード数
    pub skipped: u64,
    /// 生成した子の総数
    pub children_created: u64,
    /// 取り出したノードの同時確率 `exp(-cost)` の和
    pub explored_mass: f64,
    /// 木の最大手数
    pub max_ply: u32,
    /// 終了時のフロンティアの大きさ
    pub frontier_remaining: usize,
    pub stop_reason: StopReason,
    pub elapsed: Duration,
}

impl SearchStats {
    /// 取り出したノードのコストを記録する
    pub fn record_pop(&mut self, cost: f64) {
        self.popped += 1;
        self.explored_mass += (-cost).exp();
    }

    /// 統計をフォーマットして文字列として返す
    pub fn format_report(&self) -> String {
        let mut report = String::new();
        report.push_str("=== Search Statistics ===\n");
        report.push_str(&format!("Popped:              {:>12}\n", self.popped));
        report.push_str(&format!("Expansions:          {:>12}\n", self.expansions));
        report.push_str(&format!("Checkmates:          {:>12}\n", self.checkmates));
        report.push_str(&format!("Stalemates:          {:>12}\n", self.stalemates));
        report.push_str(&format!("Skipped:             {:>12}\n", self.skipped));
        report.push_str(&format!("Children created:    {:>12}\n", self.children_created));
        report.push_str(&format!("Explored mass:       {:>12.6}\n", self.explored_mass));
        report.push_str(&format!("Max ply:             {:>12}\n", self.max_ply));
        report.push_str(&format!("Frontier remaining:  {:>12}\n", self.frontier_remaining));
        report.push_str(&format!("Stop reason:         {:>12}\n", self.stop_reason.label()));
        report.push_str(&format!("Elapsed (ms):        {:>12}\n", self.elapsed.as_millis()));
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_pop_accumulates_mass() {
        let mut stats = SearchStats::default();
        stats.record_pop(0.0);
        stats.record_pop(std::f64::consts::LN_2);
        assert_eq!(stats.popped, 2);
        assert!((stats.explored_mass - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_format_report_mentions_stop_reason() {
        let stats = SearchStats {
            stop_reason: StopReason::FrontierExhausted,
            ..SearchStats::default()
        };
        assert!(stats.format_report().contains("frontier_exhausted"));
    }
}
