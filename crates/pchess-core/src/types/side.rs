//! 手番（Side）

/// 手番（先手/後手）
///
/// チェスでは白が先手、黒が後手。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Side {
    First = 0,
    Second = 1,
}

impl Side {
    /// 手番の数
    pub const NUM: usize = 2;

    /// 相手番を返す
    #[inline]
    pub const fn opponent(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    /// インデックスとして使用（配列アクセス用）
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// 表示用ラベル
    pub const fn label(self) -> &'static str {
        match self {
            Side::First => "first",
            Side::Second => "second",
        }
    }
}

impl std::ops::Not for Side {
    type Output = Side;

    #[inline]
    fn not(self) -> Side {
        self.opponent()
    }
}

impl From<chess::Color> for Side {
    fn from(color: chess::Color) -> Side {
        match color {
            chess::Color::White => Side::First,
            chess::Color::Black => Side::Second,
        }
    }
}

impl From<Side> for chess::Color {
    fn from(side: Side) -> chess::Color {
        match side {
            Side::First => chess::Color::White,
            Side::Second => chess::Color::Black,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_opponent() {
        assert_eq!(Side::First.opponent(), Side::Second);
        assert_eq!(Side::Second.opponent(), Side::First);
        assert_eq!(!Side::First, Side::Second);
    }

    #[test]
    fn test_side_index() {
        assert_eq!(Side::First.index(), 0);
        assert_eq!(Side::Second.index(), 1);
    }

    #[test]
    fn test_side_chess_color_roundtrip() {
        assert_eq!(Side::from(chess::Color::White), Side::First);
        assert_eq!(Side::from(chess::Color::Black), Side::Second);
        assert_eq!(chess::Color::from(Side::Second), chess::Color::Black);
    }
}
