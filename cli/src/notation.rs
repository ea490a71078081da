//! 玩家輸入的座標與方向記號

use neutron::constants::BOARD_SIZE;
use neutron::core_types::{Direction, Position};

/// 結束遊戲的指令
const EXIT_TOKEN: &str = "exit";

/// 解析 `A1`..`E5`：字母為列（y），數字為欄（x），不分大小寫
pub fn parse_position(input: &str) -> Option<Position> {
    let mut chars = input.trim().chars();
    let (row, col) = (chars.next()?, chars.next()?);
    if chars.next().is_some() {
        return None;
    }

    let y = usize::from(u8::try_from(row.to_ascii_uppercase()).ok()?.checked_sub(b'A')?);
    let x = usize::try_from(col.to_digit(10)?.checked_sub(1)?).ok()?;
    (x < BOARD_SIZE && y < BOARD_SIZE).then(|| Position::new(x, y))
}

/// 完整方向名稱或縮寫（`north` / `n`），不分大小寫
pub fn parse_direction(input: &str) -> Option<Direction> {
    input.trim().parse().ok()
}

pub fn is_exit(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case(EXIT_TOKEN)
}
