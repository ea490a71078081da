//! 型別別名

/// 棋盤座標（x 為欄，y 為列）
pub type Coord = usize;

/// 格子的數值編碼：0 空格、1 中子、2 白兵、3 黑兵
pub type CellCode = u8;
