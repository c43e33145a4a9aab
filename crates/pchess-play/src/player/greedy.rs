//! 参照相手: 駒取り優先、無ければ乱数

use anyhow::Result;
use chess::{Board, ChessMove, MoveGen};
use pchess_core::scorer::PIECE_VALUES;
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand_xoshiro::Xoshiro256PlusPlus;

use super::Player;

pub struct GreedyPlayer {
    name: String,
    rng: Xoshiro256PlusPlus,
}

impl GreedyPlayer {
    pub fn new(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
        }
    }
}

/// 取られる駒の価値。駒を取らない手は None
fn victim_value(board: &Board, mv: ChessMove) -> Option<f64> {
    board.piece_on(mv.get_dest()).map(|piece| PIECE_VALUES[piece.to_index()])
}

impl Player for GreedyPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn decide_move(&mut self, board: &Board) -> Result<Option<ChessMove>> {
        let moves: Vec<ChessMove> = MoveGen::new_legal(board).collect();

        // 同値は生成順で最初の手
        let mut best: Option<(f64, ChessMove)> = None;
        for &mv in &moves {
            let Some(value) = victim_value(board, mv) else {
                continue;
            };
            match best {
                Some((v, _)) if v >= value => {}
                _ => best = Some((value, mv)),
            }
        }
        if let Some((_, mv)) = best {
            return Ok(Some(mv));
        }
        Ok(moves.choose(&mut self.rng).copied())
    }
}
