// 最良優先探索チェスの対局コンソール

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use chess::Board;
use clap::Parser;
use pchess_play::render::render_board;
use pchess_play::{
    build_player, load_scorer, run_game, GameConfig, MoveEvent, PlayConfig, PlayerKind,
};

/// 探索エンジンと人間・参照相手を交互に指させる
///
/// # よく使うコマンド例
///
/// - 既定（コンピュータ vs 駒取り相手、1手1展開）:
///   `cargo run -p pchess-play --bin pchess`
///
/// - 人間が後手、1手あたり 500 展開:
///   `cargo run -p pchess-play --bin pchess -- --second human --expansions 500`
///
/// - 設定ファイルとモデルを指定:
///   `cargo run -p pchess-play --bin pchess -- --config play.toml --model policy.json.gz`
#[derive(Parser, Debug)]
#[command(author, version, about = "Probability-guided best-first chess search console")]
struct Cli {
    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Expansions per move (overrides [search].max_expansions)
    #[arg(long)]
    expansions: Option<u32>,

    /// Wall-clock limit per move in milliseconds
    #[arg(long)]
    time_ms: Option<u64>,

    /// Score smoothing factor in (0, 1]
    #[arg(long)]
    smoothing: Option<f64>,

    /// MLP parameter file (JSON, optionally .gz)
    #[arg(long)]
    model: Option<PathBuf>,

    /// First player (white): computer | human | greedy
    #[arg(long)]
    first: Option<PlayerKind>,

    /// Second player (black): computer | human | greedy
    #[arg(long)]
    second: Option<PlayerKind>,

    /// Seed for the greedy player
    #[arg(long)]
    seed: Option<u64>,

    /// Start position in FEN
    #[arg(long)]
    fen: Option<String>,

    /// Maximum plies before declaring a draw
    #[arg(long)]
    max_plies: Option<u32>,
}

impl Cli {
    /// 設定ファイルの値をコマンドライン引数で上書きする
    fn apply_overrides(&self, config: &mut PlayConfig) {
        if let Some(v) = self.expansions {
            config.search.max_expansions = v;
        }
        if let Some(v) = self.time_ms {
            config.search.time_limit_ms = Some(v);
        }
        if let Some(v) = self.smoothing {
            config.search.smoothing = v;
        }
        if let Some(v) = &self.model {
            config.players.model = Some(v.clone());
        }
        if let Some(v) = self.first {
            config.players.first = v;
        }
        if let Some(v) = self.second {
            config.players.second = v;
        }
        if let Some(v) = self.seed {
            config.players.seed = v;
        }
        if let Some(v) = &self.fen {
            config.game.start_fen = Some(v.clone());
        }
        if let Some(v) = self.max_plies {
            config.game.max_plies = v;
        }
    }
}

fn init_logging(debug: bool) {
    use std::io::Write;
    let log_level = if debug { "debug" } else { "info" };

    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .format(|buf, record| writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args()))
    .write_style(env_logger::WriteStyle::Never)
    .target(env_logger::Target::Stderr)
    .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let mut config = match &cli.config {
        Some(path) => PlayConfig::load(path)?,
        None => PlayConfig::default(),
    };
    cli.apply_overrides(&mut config);
    config.search.validate().context("invalid search settings")?;

    let start = match &config.game.start_fen {
        Some(fen) => Board::from_str(fen)
            .map_err(|e| anyhow::anyhow!("invalid FEN '{fen}': {e}"))?,
        None => Board::default(),
    };

    let scorer = load_scorer(&config)?;
    let seed = config.players.seed;
    let mut first = build_player(config.players.first, 0, &config.search, &scorer, seed);
    let mut second = build_player(config.players.second, 1, &config.search, &scorer, seed);

    log::info!(
        "{} (white) vs {} (black), {} expansions per move",
        first.name(),
        second.name(),
        config.search.max_expansions
    );
    println!("{}", render_board(&start));

    let game_config = GameConfig {
        max_plies: config.game.max_plies,
    };
    let mut print_move = |event: &MoveEvent| {
        println!("{}. {} ({}) {}", event.ply, event.move_uci, event.side.label(), event.player);
        println!("{}", render_board(&event.board));
    };
    let result = run_game(first.as_mut(), second.as_mut(), start, &game_config, &mut print_move)?;

    println!("Result: {} ({}) after {} plies", result.outcome.label(), result.reason, result.plies);
    println!("Final FEN: {}", result.final_board);
    Ok(())
}
