//! 基本資料類型定義

use crate::alias::{CellCode, Coord};
use crate::constants::{BLACK_HOME_ROW, BOARD_SIZE, WHITE_HOME_ROW};
use crate::error::{BoardError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::{Display, EnumIter, EnumString};

// ============================================================================
// 座標與方向
// ============================================================================

/// 棋盤位置，`grid[y][x]`
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Position {
    pub x: Coord,
    pub y: Coord,
}

impl Position {
    pub fn new(x: Coord, y: Coord) -> Self {
        Self { x, y }
    }

    /// 平移一個向量，座標變成負數時回傳 `None`（不檢查棋盤上界）
    pub fn checked_offset(self, offset: Offset) -> Option<Position> {
        Some(Position {
            x: self.x.checked_add_signed(offset.dx)?,
            y: self.y.checked_add_signed(offset.dy)?,
        })
    }
}

/// 以棋盤記號顯示：列字母 + 欄數字，例如 `(0, 0)` 為 `A1`
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match u8::try_from(self.y) {
            Ok(row) if self.y < BOARD_SIZE => write!(f, "{}{}", (b'A' + row) as char, self.x + 1),
            _ => write!(f, "({}, {})", self.x, self.y),
        }
    }
}

/// 二維整數向量
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Offset {
    pub dx: isize,
    pub dy: isize,
}

/// 八個羅盤方向（y 軸向下，北方為 y 減少）
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[strum(to_string = "north", serialize = "n")]
    North,
    #[strum(to_string = "northeast", serialize = "ne")]
    NorthEast,
    #[strum(to_string = "east", serialize = "e")]
    East,
    #[strum(to_string = "southeast", serialize = "se")]
    SouthEast,
    #[strum(to_string = "south", serialize = "s")]
    South,
    #[strum(to_string = "southwest", serialize = "sw")]
    SouthWest,
    #[strum(to_string = "west", serialize = "w")]
    West,
    #[strum(to_string = "northwest", serialize = "nw")]
    NorthWest,
}

impl Direction {
    pub fn offset(self) -> Offset {
        let (dx, dy) = match self {
            Direction::North => (0, -1),
            Direction::NorthEast => (1, -1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, 1),
            Direction::South => (0, 1),
            Direction::SouthWest => (-1, 1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, -1),
        };
        Offset { dx, dy }
    }
}

// ============================================================================
// 陣營與格子
// ============================================================================

/// 玩家顏色
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// 開局時該色士兵所在的列
    pub fn home_row(self) -> Coord {
        match self {
            Color::White => WHITE_HOME_ROW,
            Color::Black => BLACK_HOME_ROW,
        }
    }
}

/// 格子內容
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Neutron,
    White,
    Black,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn code(self) -> CellCode {
        match self {
            Cell::Empty => 0,
            Cell::Neutron => 1,
            Cell::White => 2,
            Cell::Black => 3,
        }
    }

    /// 格子對應的士兵顏色，空格與中子回傳 `InvalidColor`
    pub fn soldier_color(self) -> Result<Color> {
        match self {
            Cell::White => Ok(Color::White),
            Cell::Black => Ok(Color::Black),
            Cell::Empty | Cell::Neutron => Err(BoardError::InvalidColor { cell: self }.into()),
        }
    }

    /// 文字棋盤使用的符號
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Neutron => '@',
            Cell::White => '\u{25cf}',
            Cell::Black => '\u{25cb}',
        }
    }
}

impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        match color {
            Color::White => Cell::White,
            Color::Black => Cell::Black,
        }
    }
}

impl TryFrom<CellCode> for Cell {
    type Error = CellCode;

    fn try_from(code: CellCode) -> std::result::Result<Self, Self::Error> {
        match code {
            0 => Ok(Cell::Empty),
            1 => Ok(Cell::Neutron),
            2 => Ok(Cell::White),
            3 => Ok(Cell::Black),
            other => Err(other),
        }
    }
}

// ============================================================================
// 棋子種類
// ============================================================================

/// 棋子種類：中子與士兵走法相同，只在勝負判定中角色不同
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Soldier(Color),
    Neutron,
}

impl PieceKind {
    pub fn cell(self) -> Cell {
        match self {
            PieceKind::Soldier(color) => color.into(),
            PieceKind::Neutron => Cell::Neutron,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceKind::Soldier(color) => write!(f, "{color} soldier"),
            PieceKind::Neutron => write!(f, "neutron"),
        }
    }
}
