//! 玩家策略
//!
//! 策略只讀取棋盤並回傳決定的 [`Move`]，實際移動由 [`crate::logic::game::Game`] 執行。
//! - [`RandomStrategy`]：隨機挑選可移動的棋子與方向
//! - [`RuleBasedStrategy`]：少數固定規則，全部不適用時退回隨機

use crate::alias::Coord;
use crate::constants::BOARD_SIZE;
use crate::core_types::{Cell, Color, Position};
use crate::error::{BoardError, Result};
use crate::logic::board::NeutronBoard;
use crate::logic::piece::Piece;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use strum_macros::{Display, EnumIter, EnumString};
use tracing::debug;

/// 玩家在棋盤上的身分
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Side {
    pub color: Color,
    /// 中子進入這一列時此玩家獲勝
    pub home_row: Coord,
}

impl Side {
    pub fn new(color: Color, home_row: Coord) -> Self {
        Self { color, home_row }
    }

    /// 以顏色的開局列作為底線
    pub fn for_color(color: Color) -> Self {
        Self::new(color, color.home_row())
    }

    /// 對手的底線（棋盤另一端）
    pub fn opponent_home_row(&self) -> Coord {
        BOARD_SIZE - 1 - self.home_row
    }
}

/// 一次移動：哪顆棋子移到哪裡
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub piece: Piece,
    pub to: Position,
}

/// 決定移動的策略
pub trait Strategy {
    /// 輪到此玩家推動中子
    fn choose_neutron_move(&mut self, board: &NeutronBoard, side: Side) -> Result<Move>;

    /// 輪到此玩家移動自己的士兵
    fn choose_soldier_move(&mut self, board: &NeutronBoard, side: Side) -> Result<Move>;
}

/// 電腦玩家種類
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    Random,
    #[default]
    Strategy,
}

impl StrategyKind {
    /// 建立策略，`seed` 為 `None` 時使用系統亂數來源
    pub fn build(self, seed: Option<u64>) -> Box<dyn Strategy> {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        match self {
            StrategyKind::Random => Box::new(RandomStrategy::new(rng)),
            StrategyKind::Strategy => Box::new(RuleBasedStrategy::new(rng)),
        }
    }
}

// ============================================================================
// 隨機策略
// ============================================================================

/// 隨機挑一顆可移動的棋子，再隨機挑一個可走的方向
#[derive(Debug)]
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    pub fn new(rng: StdRng) -> Self {
        Self { rng }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// 從候選棋子中隨機挑選並隨機決定方向
    fn random_move(&mut self, board: &NeutronBoard, pieces: &[Piece], cell: Cell) -> Result<Move> {
        let movable: Vec<&Piece> = pieces.iter().filter(|p| p.can_move(board)).collect();
        let piece = **movable
            .choose(&mut self.rng)
            .ok_or(BoardError::NoLegalMove { cell })?;
        let directions: Vec<_> = piece.possible_directions(board).into_iter().collect();
        let direction = *directions
            .choose(&mut self.rng)
            .ok_or(BoardError::NoLegalMove { cell })?;
        let to = board
            .furthest_empty_spot(piece.pos, direction)
            .ok_or(BoardError::NoLegalMove { cell })?;
        Ok(Move { piece, to })
    }

    /// 從候選落點中隨機挑一個
    fn random_target(&mut self, piece: Piece, targets: &[Position]) -> Option<Move> {
        targets.choose(&mut self.rng).map(|&to| Move { piece, to })
    }
}

impl Strategy for RandomStrategy {
    fn choose_neutron_move(&mut self, board: &NeutronBoard, _side: Side) -> Result<Move> {
        self.random_move(board, &[board.neutron()], Cell::Neutron)
    }

    fn choose_soldier_move(&mut self, board: &NeutronBoard, side: Side) -> Result<Move> {
        let soldiers = board.soldiers_of(side.color);
        self.random_move(board, &soldiers, side.color.into())
    }
}

// ============================================================================
// 規則式策略
// ============================================================================

/// 依序嘗試固定規則，第一個成立的規則決定移動
///
/// 士兵回合：
/// 1. 中子只剩一個空鄰格且己方士兵到得了 -> 佔住它，困住中子
/// 2. 佔住對手底線的空格，優先擋中子下一步能進入的格子
/// 3. 隨機
///
/// 中子回合：
/// 1. 中子能直接進入己方底線 -> 進入
/// 2. 有其他選擇時避開對手底線，在其餘落點中隨機挑選
/// 3. 隨機
#[derive(Debug)]
pub struct RuleBasedStrategy {
    fallback: RandomStrategy,
}

impl RuleBasedStrategy {
    pub fn new(rng: StdRng) -> Self {
        Self {
            fallback: RandomStrategy::new(rng),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl Strategy for RuleBasedStrategy {
    fn choose_neutron_move(&mut self, board: &NeutronBoard, side: Side) -> Result<Move> {
        let neutron = board.neutron();
        let targets = neutron.possible_moves(board);

        if let Some(to) = targets.iter().find(|p| p.y == side.home_row) {
            debug!(color = %side.color, %to, "rule: neutron into home row");
            return Ok(Move { piece: neutron, to: *to });
        }

        let safe: Vec<Position> = targets
            .iter()
            .filter(|p| p.y != side.opponent_home_row())
            .copied()
            .collect();
        if let Some(mv) = self.fallback.random_target(neutron, &safe) {
            debug!(color = %side.color, to = %mv.to, "rule: neutron avoids enemy row");
            return Ok(mv);
        }

        debug!(color = %side.color, "rule: random neutron move");
        self.fallback.choose_neutron_move(board, side)
    }

    fn choose_soldier_move(&mut self, board: &NeutronBoard, side: Side) -> Result<Move> {
        let soldiers = board.soldiers_of(side.color);

        if let Some(mv) = trap_neutron(board, &soldiers) {
            debug!(color = %side.color, to = %mv.to, "rule: trap neutron");
            return Ok(mv);
        }

        if let Some(mv) = block_enemy_row(board, &soldiers, side) {
            debug!(color = %side.color, to = %mv.to, "rule: block enemy row");
            return Ok(mv);
        }

        debug!(color = %side.color, "rule: random soldier move");
        self.fallback.choose_soldier_move(board, side)
    }
}

/// 中子恰好只剩一個空鄰格時，找一個能走到該格的士兵
///
/// 已經貼著中子的士兵不算，它離開後原位置會變成新的空鄰格
fn trap_neutron(board: &NeutronBoard, soldiers: &[Piece]) -> Option<Move> {
    let neighbors = board.neighbor_positions(board.neutron().pos);
    let empty: Vec<Position> = neighbors
        .iter()
        .copied()
        .filter(|p| board.cell(*p).is_empty())
        .collect();
    let [target] = empty.as_slice() else {
        return None;
    };
    let outside: Vec<Piece> = soldiers
        .iter()
        .filter(|soldier| !neighbors.contains(&soldier.pos))
        .copied()
        .collect();
    first_soldier_reaching(board, &outside, |p| p == *target)
}

/// 佔住對手底線的空格
///
/// 先找中子下一步能進入的格子，找不到再找任何士兵到得了的底線空格
fn block_enemy_row(board: &NeutronBoard, soldiers: &[Piece], side: Side) -> Option<Move> {
    let enemy_row = side.opponent_home_row();
    let threatened: BTreeSet<Position> = board
        .neutron()
        .possible_moves(board)
        .into_iter()
        .filter(|p| p.y == enemy_row)
        .collect();

    first_soldier_reaching(board, soldiers, |p| threatened.contains(&p))
        .or_else(|| first_soldier_reaching(board, soldiers, |p| p.y == enemy_row))
}

/// 依序找第一個能一步到達符合條件位置的士兵
fn first_soldier_reaching<F>(board: &NeutronBoard, soldiers: &[Piece], accept: F) -> Option<Move>
where
    F: Fn(Position) -> bool,
{
    soldiers.iter().find_map(|soldier| {
        soldier
            .possible_moves(board)
            .into_iter()
            .find(|p| accept(*p))
            .map(|to| Move { piece: *soldier, to })
    })
}
