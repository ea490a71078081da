//! 遊戲常數定義

use crate::alias::Coord;

/// 棋盤邊長
pub const BOARD_SIZE: Coord = 5;

/// 白方底線（開局白兵所在列）
pub const WHITE_HOME_ROW: Coord = 4;

/// 黑方底線（開局黑兵所在列）
pub const BLACK_HOME_ROW: Coord = 0;

/// 每方士兵數
pub const SOLDIERS_PER_COLOR: usize = 5;
