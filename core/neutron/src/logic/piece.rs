//! 棋子 handle
//!
//! 士兵與中子共用同一套走法，差別只在 [`PieceKind`]。
//! handle 不持有棋盤，查詢與移動都要傳入棋盤。

use crate::core_types::{Cell, Direction, PieceKind, Position};
use crate::error::Result;
use crate::logic::board::NeutronBoard;
use std::collections::BTreeSet;
use strum::IntoEnumIterator;

/// 棋子（位置 + 種類）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub pos: Position,
    pub kind: PieceKind,
}

impl Piece {
    pub fn new(pos: Position, kind: PieceKind) -> Self {
        Self { pos, kind }
    }

    /// 可以移動的方向
    pub fn possible_directions(&self, board: &NeutronBoard) -> BTreeSet<Direction> {
        Direction::iter()
            .filter(|dir| board.furthest_empty_spot(self.pos, *dir).is_some())
            .collect()
    }

    /// 移動一步後可能的落點（重複的會合併）
    pub fn possible_moves(&self, board: &NeutronBoard) -> BTreeSet<Position> {
        Direction::iter()
            .filter_map(|dir| board.furthest_empty_spot(self.pos, dir))
            .collect()
    }

    pub fn can_move(&self, board: &NeutronBoard) -> bool {
        Direction::iter().any(|dir| board.furthest_empty_spot(self.pos, dir).is_some())
    }

    pub fn neighbors(&self, board: &NeutronBoard) -> Vec<Cell> {
        board.neighbors(self.pos)
    }

    /// 往指定方向移動，成功時更新自身位置
    pub fn move_in(&mut self, board: &mut NeutronBoard, direction: Direction) -> Result<Position> {
        board.move_piece(self, direction)
    }

    /// 移動到指定位置，成功時更新自身位置
    pub fn move_to(&mut self, board: &mut NeutronBoard, target: Position) -> Result<()> {
        board.move_to_pos(self, target)
    }
}
