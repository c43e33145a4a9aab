//! 探索コアを使うプレイヤー

use std::rc::Rc;

use anyhow::Result;
use chess::{Board, ChessMove};
use log::{debug, info};
use pchess_core::types::format_score;
use pchess_core::{BestFirstSearch, ChessOracle, ScoreOracle, SearchConfig, SearchError};

use super::Player;

pub struct ComputerPlayer {
    name: String,
    oracle: ChessOracle,
    scorer: Rc<dyn ScoreOracle>,
    config: SearchConfig,
}

impl ComputerPlayer {
    pub fn new(name: impl Into<String>, scorer: Rc<dyn ScoreOracle>, config: SearchConfig) -> Self {
        Self {
            name: name.into(),
            oracle: ChessOracle::new(),
            scorer,
            config,
        }
    }
}

impl Player for ComputerPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn decide_move(&mut self, board: &Board) -> Result<Option<ChessMove>> {
        let search = BestFirstSearch::new(&self.oracle, &*self.scorer, self.config.clone())?;
        let outcome = match search.search(*board) {
            Ok(outcome) => outcome,
            Err(SearchError::NoMoveAvailable) => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let pv: Vec<String> = outcome.pv.iter().map(ToString::to_string).collect();
        info!(
            "{}: {} score {} nodes {} pv {}",
            self.name,
            outcome.best_move,
            format_score(outcome.score),
            outcome.tree.len(),
            pv.join(" ")
        );
        debug!("{}", outcome.stats.format_report());
        Ok(Some(outcome.best_move))
    }
}
