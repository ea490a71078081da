//! 移動邏輯

use crate::constants::BOARD_SIZE;
use crate::core_types::{Direction, Position};

/// 驗證位置是否在棋盤邊界內
pub fn is_valid_position(pos: Position) -> bool {
    pos.x < BOARD_SIZE && pos.y < BOARD_SIZE
}

/// 計算從當前位置往指定方向移動一格後的位置，檢查棋盤邊界
///
/// 返回 `None` 當新位置超出棋盤邊界
pub fn step_in_direction(pos: Position, direction: Direction) -> Option<Position> {
    pos.checked_offset(direction.offset())
        .filter(|next| is_valid_position(*next))
}
