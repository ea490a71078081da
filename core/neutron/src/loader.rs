//! 棋盤載入器

use crate::constants::BOARD_SIZE;
use crate::core_types::Cell;
use crate::error::{BoardError, LoadError, Result};
use crate::logic::board::{Grid, NeutronBoard};

/// 從 ASCII 格式載入棋盤
///
/// ASCII 格式：每行用空格分隔的符號
/// - `.` = 空格
/// - `N` = 中子
/// - `W` = 白兵
/// - `B` = 黑兵
///
/// 例如：
/// ```text
/// B B B B B
/// . . . . .
/// . . N . .
/// . . . . .
/// W W W W W
/// ```
pub fn load_from_ascii(ascii: &str) -> Result<NeutronBoard> {
    let lines: Vec<&str> = ascii
        .lines()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .collect();

    if lines.is_empty() {
        return Err(LoadError::ParseError("棋盤為空".to_string()).into());
    }

    let mut grid: Grid = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
    for (y, line) in lines.iter().enumerate() {
        let symbols: Vec<&str> = line.split_whitespace().collect();
        if lines.len() != BOARD_SIZE || symbols.len() != BOARD_SIZE {
            return Err(BoardError::InvalidBoardShape {
                rows: lines.len(),
                cols: symbols.len(),
            }
            .into());
        }
        for (x, symbol) in symbols.into_iter().enumerate() {
            grid[y][x] = parse_symbol(symbol).ok_or_else(|| {
                LoadError::ParseError(format!("無法辨識的符號 `{symbol}` 於 ({x}, {y})"))
            })?;
        }
    }

    NeutronBoard::from_cells(grid)
}

fn parse_symbol(symbol: &str) -> Option<Cell> {
    match symbol {
        "." => Some(Cell::Empty),
        "N" | "n" | "@" => Some(Cell::Neutron),
        "W" | "w" => Some(Cell::White),
        "B" | "b" => Some(Cell::Black),
        _ => None,
    }
}
