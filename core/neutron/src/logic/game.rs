//! 回合狀態機與勝負判定
//!
//! 每回合：（開局第一回合除外）目前玩家先推動中子，判定勝負；
//! 再移動一顆自己的士兵，判定勝負；無人獲勝則換人。

use crate::core_types::{Color, PieceKind};
use crate::error::{BoardError, Context, Result};
use crate::logic::board::NeutronBoard;
use crate::logic::strategy::{Move, Side, Strategy};
use std::fmt;
use tracing::{debug, info};

/// 玩家：身分 + 決策策略
pub struct Player {
    pub side: Side,
    strategy: Box<dyn Strategy>,
}

impl Player {
    pub fn new(side: Side, strategy: Box<dyn Strategy>) -> Self {
        Self { side, strategy }
    }

    pub fn color(&self) -> Color {
        self.side.color
    }
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player").field("side", &self.side).finish()
    }
}

/// 回合階段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// 等待目前玩家推動中子
    NeutronMove,
    /// 等待目前玩家移動士兵
    SoldierMove,
    /// 已分出勝負
    Finished(Color),
}

/// 一場 Neutron 遊戲
#[derive(Debug)]
pub struct Game {
    board: NeutronBoard,
    players: [Player; 2],
    current: usize,
    winner: Option<Color>,
    phase: Phase,
    round: usize,
}

impl Game {
    /// 建立遊戲，`first` 先手；開局第一回合不推動中子
    pub fn new(board: NeutronBoard, first: Player, second: Player) -> Self {
        Self {
            board,
            players: [first, second],
            current: 0,
            winner: None,
            phase: Phase::SoldierMove,
            round: 0,
        }
    }

    pub fn board(&self) -> &NeutronBoard {
        &self.board
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// 已完成的回合數（每位玩家移動完士兵算一回合）
    pub fn round(&self) -> usize {
        self.round
    }

    /// 開局第一回合，只移動士兵不推動中子
    pub fn is_initial_round(&self) -> bool {
        self.round == 0
    }

    /// 執行一次移動（半回合），回傳新的階段
    ///
    /// 已分出勝負時不做任何事
    pub fn step(&mut self) -> Result<Phase> {
        let side = self.current_player().side;
        let turn_over = match self.phase {
            Phase::Finished(_) => return Ok(self.phase),
            Phase::NeutronMove => {
                self.half_move(side, PieceKind::Neutron)
                    .context(format!("{} 推動中子（第 {} 回合）", side.color, self.round))?;
                false
            }
            Phase::SoldierMove => {
                self.half_move(side, PieceKind::Soldier(side.color))
                    .context(format!("{} 移動士兵（第 {} 回合）", side.color, self.round))?;
                true
            }
        };

        if let Some(winner) = self.check_won(side.color) {
            info!(%winner, round = self.round, "game won");
            self.phase = Phase::Finished(winner);
        } else if turn_over {
            self.current = 1 - self.current;
            self.round += 1;
            self.phase = Phase::NeutronMove;
        } else {
            self.phase = Phase::SoldierMove;
        }
        Ok(self.phase)
    }

    /// 進行到換人或分出勝負為止
    pub fn play_round(&mut self) -> Result<Option<Color>> {
        let player = self.current;
        while self.winner.is_none() && self.current == player {
            self.step()?;
        }
        Ok(self.winner)
    }

    /// 持續進行直到分出勝負
    pub fn run(&mut self) -> Result<Color> {
        loop {
            if let Phase::Finished(winner) = self.step()? {
                return Ok(winner);
            }
        }
    }

    /// 判定勝負，`mover` 為剛完成移動的玩家
    ///
    /// 依序：
    /// 1. 中子四周全被佔滿 -> 移動者獲勝
    /// 2. 中子在第 0 列 -> 黑方獲勝
    /// 3. 中子在第 4 列 -> 白方獲勝
    pub fn check_won(&mut self, mover: Color) -> Option<Color> {
        self.winner = winner_of(&self.board, mover);
        self.winner
    }

    // 向目前玩家的策略要一步並執行
    fn half_move(&mut self, side: Side, expected: PieceKind) -> Result<()> {
        let strategy = &mut self.players[self.current].strategy;
        let mv = match expected {
            PieceKind::Neutron => strategy.choose_neutron_move(&self.board, side)?,
            PieceKind::Soldier(_) => strategy.choose_soldier_move(&self.board, side)?,
        };
        self.apply(mv, expected)
    }

    // 檢查棋子種類後交由棋盤執行移動
    fn apply(&mut self, mv: Move, expected: PieceKind) -> Result<()> {
        let Move { mut piece, to } = mv;
        if piece.kind != expected {
            return Err(BoardError::NotYourPiece {
                expected,
                found: piece.kind,
            }
            .into());
        }
        let from = piece.pos;
        self.board.move_to_pos(&mut piece, to)?;
        debug!(player = %self.current_player().color(), piece = %piece.kind, %from, %to, "move");
        Ok(())
    }
}

/// 依目前棋盤判定勝方，`mover` 為剛完成移動的玩家
pub fn winner_of(board: &NeutronBoard, mover: Color) -> Option<Color> {
    if board.is_neutron_trapped() {
        Some(mover)
    } else if board.neutron_row() == Color::Black.home_row() {
        Some(Color::Black)
    } else if board.neutron_row() == Color::White.home_row() {
        Some(Color::White)
    } else {
        None
    }
}
