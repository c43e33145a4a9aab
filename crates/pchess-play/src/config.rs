//! 対局設定（TOML）
//!
//! ```toml
//! [search]
//! max_expansions = 200
//! time_limit_ms = 1000
//!
//! [game]
//! max_plies = 120
//! start_fen = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1"
//!
//! [players]
//! first = "computer"
//! second = "human"
//! model = "models/policy.json.gz"
//! seed = 7
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use log::info;
use pchess_core::SearchConfig;
use serde::Deserialize;

/// 既定の最大手数（超えたら引き分け）
pub const DEFAULT_MAX_PLIES: u32 = 200;

/// プレイヤーの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    Computer,
    Human,
    Greedy,
}

impl PlayerKind {
    pub fn label(self) -> &'static str {
        match self {
            PlayerKind::Computer => "computer",
            PlayerKind::Human => "human",
            PlayerKind::Greedy => "greedy",
        }
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PlayerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "computer" => Ok(PlayerKind::Computer),
            "human" => Ok(PlayerKind::Human),
            "greedy" => Ok(PlayerKind::Greedy),
            other => Err(format!("unknown player kind '{other}' (computer|human|greedy)")),
        }
    }
}

/// `[game]`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameSection {
    pub max_plies: u32,
    /// 未指定なら初期局面
    pub start_fen: Option<String>,
}

impl Default for GameSection {
    fn default() -> Self {
        Self {
            max_plies: DEFAULT_MAX_PLIES,
            start_fen: None,
        }
    }
}

/// `[players]`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlayersSection {
    pub first: PlayerKind,
    pub second: PlayerKind,
    /// MLP パラメータ。未指定なら駒得スコアラー
    pub model: Option<PathBuf>,
    /// 参照相手の乱数シード
    pub seed: u64,
}

impl Default for PlayersSection {
    fn default() -> Self {
        Self {
            first: PlayerKind::Computer,
            second: PlayerKind::Greedy,
            model: None,
            seed: 0,
        }
    }
}

/// 設定ファイル全体
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlayConfig {
    pub search: SearchConfig,
    pub game: GameSection,
    pub players: PlayersSection,
}

impl PlayConfig {
    /// TOML 文字列から読み込み、探索設定を検証する
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: PlayConfig = toml::from_str(content).context("failed to parse config")?;
        config.search.validate().context("invalid [search] section")?;
        Ok(config)
    }

    /// ファイルから読み込む
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = Self::from_toml_str(&content)
            .with_context(|| format!("in config file {}", path.display()))?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = PlayConfig::from_toml_str("").unwrap();
        assert_eq!(config, PlayConfig::default());
        assert_eq!(config.search.max_expansions, 1);
        assert_eq!(config.game.max_plies, DEFAULT_MAX_PLIES);
        assert_eq!(config.players.first, PlayerKind::Computer);
    }

    #[test]
    fn test_partial_sections() {
        let config = PlayConfig::from_toml_str(
            r#"
            [search]
            max_expansions = 50
            time_limit_ms = 250

            [players]
            second = "human"
            model = "net.json.gz"
            "#,
        )
        .unwrap();
        assert_eq!(config.search.max_expansions, 50);
        assert_eq!(config.search.time_limit_ms, Some(250));
        assert_eq!(config.search.smoothing, 0.75);
        assert_eq!(config.players.first, PlayerKind::Computer);
        assert_eq!(config.players.second, PlayerKind::Human);
        assert_eq!(config.players.model, Some(PathBuf::from("net.json.gz")));
    }

    #[test]
    fn test_rejects_unknown_keys_and_bad_values() {
        assert!(PlayConfig::from_toml_str("[game]\nmax_moves = 3\n").is_err());
        assert!(PlayConfig::from_toml_str("[players]\nfirst = \"robot\"\n").is_err());
        assert!(PlayConfig::from_toml_str("[search]\nsmoothing = 1.5\n").is_err());
    }

    #[test]
    fn test_player_kind_from_str() {
        assert_eq!("Human".parse::<PlayerKind>(), Ok(PlayerKind::Human));
        assert!("sunfish".parse::<PlayerKind>().is_err());
    }
}
