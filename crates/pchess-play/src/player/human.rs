//! 人間のプレイヤー

use std::io::{BufRead, Write};

use anyhow::{bail, Result};
use chess::{Board, ChessMove};
use pchess_core::oracle::parse_uci_move;

use super::Player;

/// 入力から UCI 座標表記の手を読む。解析できない手や非合法手は再入力させる
pub struct HumanPlayer<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn decide_move(&mut self, board: &Board) -> Result<Option<ChessMove>> {
        loop {
            write!(self.output, "Your move (e.g. e2e4): ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                bail!("input closed while waiting for a move");
            }
            let text = line.trim();
            if text.is_empty() {
                continue;
            }
            match parse_uci_move(board, text) {
                Some(mv) => return Ok(Some(mv)),
                None => writeln!(self.output, "Illegal or unreadable move: {text}")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reprompts_until_legal() {
        let input = Cursor::new("\nzz\ne2e5\ne2e4\n");
        let mut out = Vec::new();
        let mv = {
            let mut human = HumanPlayer::new("human", input, &mut out);
            human.decide_move(&Board::default()).unwrap()
        };
        assert_eq!(mv.map(|m| m.to_string()), Some("e2e4".to_string()));

        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.matches("Your move").count(), 4);
        assert!(out.contains("Illegal or unreadable move: zz"));
        assert!(out.contains("Illegal or unreadable move: e2e5"));
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let mut human = HumanPlayer::new("human", Cursor::new(""), Vec::new());
        assert!(human.decide_move(&Board::default()).is_err());
    }
}
