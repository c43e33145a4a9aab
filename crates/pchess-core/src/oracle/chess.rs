//! `chess` クレートによる局面オラクル

use chess::{
    Board, BoardStatus, ChessMove, Color, File, MoveGen, Piece, Rank, Square, ALL_PIECES,
};

use super::PositionOracle;
use crate::types::Side;

/// 駒種 × 色の平面数
pub const PLANES: usize = 12;
/// 特徴量ベクトルの次元（12平面 × 64マス）
pub const FEATURE_DIM: usize = PLANES * 64;

/// チェスの局面オラクル
#[derive(Debug, Clone, Copy, Default)]
pub struct ChessOracle;

impl ChessOracle {
    pub fn new() -> Self {
        Self
    }
}

impl PositionOracle for ChessOracle {
    type Position = Board;
    type Move = ChessMove;

    fn legal_moves(&self, pos: &Board) -> Vec<ChessMove> {
        MoveGen::new_legal(pos).collect()
    }

    fn apply(&self, pos: &Board, mv: ChessMove) -> Board {
        pos.make_move_new(mv)
    }

    fn is_checkmate(&self, pos: &Board) -> bool {
        pos.status() == BoardStatus::Checkmate
    }

    fn is_stalemate(&self, pos: &Board) -> bool {
        pos.status() == BoardStatus::Stalemate
    }

    fn side_to_move(&self, pos: &Board) -> Side {
        pos.side_to_move().into()
    }

    fn encode_features(&self, pos: &Board, flip: bool) -> Vec<f32> {
        encode_board(pos, flip)
    }
}

/// 盤面を one-hot の特徴量に変換する
///
/// 平面 0..6 が「自分」の歩・騎士・ビショップ・ルーク・クイーン・キング、
/// 平面 6..12 が相手の同じ並び。`flip` のときは黒を自分とし、段を上下反転する。
pub fn encode_board(board: &Board, flip: bool) -> Vec<f32> {
    let mut x = vec![0.0f32; FEATURE_DIM];
    let (us, them) = if flip {
        (Color::Black, Color::White)
    } else {
        (Color::White, Color::Black)
    };

    for (plane_base, color) in [(0usize, us), (6, them)] {
        let color_bb = *board.color_combined(color);
        for piece in ALL_PIECES {
            let bb = *board.pieces(piece) & color_bb;
            for sq in bb {
                // a1=0 .. h8=63。反転時は段だけ入れ替える
                let idx = if flip { sq.to_index() ^ 56 } else { sq.to_index() };
                x[(plane_base + piece.to_index()) * 64 + idx] = 1.0;
            }
        }
    }
    x
}

/// UCI 座標表記（`e2e4`, `e7e8q`）を解析し、合法手なら返す
pub fn parse_uci_move(board: &Board, text: &str) -> Option<ChessMove> {
    let bytes = text.trim().as_bytes();
    if bytes.len() != 4 && bytes.len() != 5 {
        return None;
    }
    let from = parse_square(bytes[0], bytes[1])?;
    let to = parse_square(bytes[2], bytes[3])?;
    let promotion = match bytes.get(4) {
        None => None,
        Some(b'q') => Some(Piece::Queen),
        Some(b'r') => Some(Piece::Rook),
        Some(b'b') => Some(Piece::Bishop),
        Some(b'n') => Some(Piece::Knight),
        Some(_) => return None,
    };
    let mv = ChessMove::new(from, to, promotion);
    MoveGen::new_legal(board).any(|legal| legal == mv).then_some(mv)
}

fn parse_square(file: u8, rank: u8) -> Option<Square> {
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return None;
    }
    Some(Square::make_square(
        Rank::from_index((rank - b'1') as usize),
        File::from_index((file - b'a') as usize),
    ))
}
