//! 棋盤引擎
//!
//! 棋盤是格子狀態的唯一擁有者。棋子只是 [`Piece`] handle（位置 + 種類），
//! 所有移動都經由這裡執行，同時更新格子與 handle 的快取位置。

use crate::alias::{CellCode, Coord};
use crate::constants::{BLACK_HOME_ROW, BOARD_SIZE, WHITE_HOME_ROW};
use crate::core_types::{Cell, Color, Direction, PieceKind, Position};
use crate::error::{BoardError, MoveAttempt, Result};
use crate::logic::movement::{is_valid_position, step_in_direction};
use crate::logic::piece::Piece;
use tracing::trace;

pub type Grid = [[Cell; BOARD_SIZE]; BOARD_SIZE];

/// Neutron 棋盤，`grid[y][x]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeutronBoard {
    grid: Grid,
    neutron: Position,
}

impl Default for NeutronBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl NeutronBoard {
    /// 標準開局：黑兵在第 0 列，白兵在第 4 列，中子在正中央
    pub fn new() -> Self {
        let mut grid = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        grid[BLACK_HOME_ROW] = [Cell::Black; BOARD_SIZE];
        grid[WHITE_HOME_ROW] = [Cell::White; BOARD_SIZE];
        let neutron = Position::new(BOARD_SIZE / 2, BOARD_SIZE / 2);
        grid[neutron.y][neutron.x] = Cell::Neutron;
        Self { grid, neutron }
    }

    /// 從數值格子建立棋盤（0 空、1 中子、2 白、3 黑）
    ///
    /// # Fail fast 驗證：
    /// - 必須是 5x5
    /// - 每格數值必須合法
    /// - 必須恰好一顆中子
    pub fn from_grid<R: AsRef<[CellCode]>>(rows: &[R]) -> Result<Self> {
        if rows.len() != BOARD_SIZE {
            let cols = rows.first().map_or(0, |row| row.as_ref().len());
            return Err(BoardError::InvalidBoardShape {
                rows: rows.len(),
                cols,
            }
            .into());
        }

        let mut grid = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != BOARD_SIZE {
                return Err(BoardError::InvalidBoardShape {
                    rows: rows.len(),
                    cols: row.len(),
                }
                .into());
            }
            for (x, &value) in row.iter().enumerate() {
                grid[y][x] =
                    Cell::try_from(value).map_err(|value| BoardError::InvalidCell { value, x, y })?;
            }
        }

        Self::from_cells(grid)
    }

    /// 從格子陣列建立棋盤，只驗證中子數量
    pub fn from_cells(grid: Grid) -> Result<Self> {
        let neutrons: Vec<Position> = all_positions()
            .filter(|pos| grid[pos.y][pos.x] == Cell::Neutron)
            .collect();
        match neutrons.as_slice() {
            [neutron] => Ok(Self {
                grid,
                neutron: *neutron,
            }),
            _ => Err(BoardError::NeutronCount {
                found: neutrons.len(),
            }
            .into()),
        }
    }

    // ------------------------------------------------------------------------
    // 查詢
    // ------------------------------------------------------------------------

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// 指定位置的格子內容
    ///
    /// # Panics
    /// `pos` 超出棋盤時 panic，呼叫端須先以 [`is_valid_position`] 或
    /// [`step_in_direction`] 取得合法位置
    pub fn cell(&self, pos: Position) -> Cell {
        self.grid[pos.y][pos.x]
    }

    /// 某種格子的數量
    pub fn count(&self, cell: Cell) -> usize {
        self.grid.iter().flatten().filter(|c| **c == cell).count()
    }

    /// 中子 handle
    pub fn neutron(&self) -> Piece {
        Piece::new(self.neutron, PieceKind::Neutron)
    }

    /// 取得指定顏色的所有士兵（依列優先順序）
    ///
    /// 顏色不是白或黑時回傳 `InvalidColor`
    pub fn get_soldiers(&self, color: Cell) -> Result<Vec<Piece>> {
        let color = color.soldier_color()?;
        Ok(self.soldiers_of(color))
    }

    /// 取得指定顏色的所有士兵（依列優先順序）
    pub fn soldiers_of(&self, color: Color) -> Vec<Piece> {
        let cell = Cell::from(color);
        all_positions()
            .filter(|pos| self.cell(*pos) == cell)
            .map(|pos| Piece::new(pos, PieceKind::Soldier(color)))
            .collect()
    }

    /// 從 `pos` 沿 `direction` 滑動能到達的最遠空格
    ///
    /// 每次前進一格，直到下一格出界或有棋子。
    /// 第一步就被擋住時回傳 `None`，不會回傳起點。
    pub fn furthest_empty_spot(&self, pos: Position, direction: Direction) -> Option<Position> {
        let mut current = pos;
        while let Some(next) = step_in_direction(current, direction) {
            if !self.cell(next).is_empty() {
                break;
            }
            current = next;
        }
        (current != pos).then_some(current)
    }

    /// 周圍最多八格的位置（出界的略過），依列優先順序，不含 `pos` 本身
    pub fn neighbor_positions(&self, pos: Position) -> Vec<Position> {
        let rows = pos.y.saturating_sub(1)..(pos.y + 2).min(BOARD_SIZE);
        let mut result = Vec::with_capacity(8);
        for y in rows {
            for x in pos.x.saturating_sub(1)..(pos.x + 2).min(BOARD_SIZE) {
                if x != pos.x || y != pos.y {
                    result.push(Position::new(x, y));
                }
            }
        }
        result
    }

    /// 周圍格子的內容，順序同 [`NeutronBoard::neighbor_positions`]
    pub fn neighbors(&self, pos: Position) -> Vec<Cell> {
        self.neighbor_positions(pos)
            .into_iter()
            .map(|p| self.cell(p))
            .collect()
    }

    /// 中子周圍是否已沒有空格
    pub fn is_neutron_trapped(&self) -> bool {
        self.neighbors(self.neutron).iter().all(|cell| !cell.is_empty())
    }

    /// 中子所在列
    pub fn neutron_row(&self) -> Coord {
        self.neutron.y
    }

    // ------------------------------------------------------------------------
    // 移動
    // ------------------------------------------------------------------------

    /// 將棋子往指定方向滑動，回傳落點
    pub fn move_piece(&mut self, piece: &mut Piece, direction: Direction) -> Result<Position> {
        self.ensure_at(piece)?;
        let Some(target) = self.furthest_empty_spot(piece.pos, direction) else {
            return Err(BoardError::IllegalMove {
                from: piece.pos,
                attempt: MoveAttempt::Direction(direction),
            }
            .into());
        };
        self.relocate(piece, target);
        Ok(target)
    }

    /// 將棋子移動到指定位置，目標必須在該棋子的可到達位置中
    pub fn move_to_pos(&mut self, piece: &mut Piece, target: Position) -> Result<()> {
        self.ensure_at(piece)?;
        if !piece.possible_moves(self).contains(&target) {
            return Err(BoardError::IllegalMove {
                from: piece.pos,
                attempt: MoveAttempt::Target(target),
            }
            .into());
        }
        self.relocate(piece, target);
        Ok(())
    }

    // handle 的位置必須與格子內容一致
    fn ensure_at(&self, piece: &Piece) -> Result<()> {
        if !is_valid_position(piece.pos) || self.cell(piece.pos) != piece.kind.cell() {
            return Err(BoardError::PieceNotAtPos {
                piece: piece.kind,
                pos: piece.pos,
            }
            .into());
        }
        Ok(())
    }

    // 同步更新格子與 handle（呼叫端保證 target 合法）
    fn relocate(&mut self, piece: &mut Piece, target: Position) {
        trace!(piece = %piece.kind, from = %piece.pos, to = %target, "relocate");
        self.grid[target.y][target.x] = piece.kind.cell();
        self.grid[piece.pos.y][piece.pos.x] = Cell::Empty;
        if piece.kind == PieceKind::Neutron {
            self.neutron = target;
        }
        piece.pos = target;
    }
}

/// 依列優先順序列出棋盤所有位置
pub fn all_positions() -> impl Iterator<Item = Position> {
    (0..BOARD_SIZE).flat_map(|y| (0..BOARD_SIZE).map(move |x| Position::new(x, y)))
}
