//! 錯誤處理系統
//!
//! 每個領域一個 thiserror enum，統一包進 [`ErrorKind`]，
//! 再由 [`Error`] 附加呼叫位置的 context 鏈。

use crate::alias::{CellCode, Coord};
use crate::core_types::{Cell, Direction, PieceKind, Position};
use thiserror::Error as ThisError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// 頂層錯誤，包含原始錯誤和 context 鏈
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    contexts: Vec<String>,
}

/// 錯誤種類
#[derive(Debug, ThisError)]
pub enum ErrorKind {
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Input(#[from] InputError),
}

/// 棋盤錯誤
#[derive(Debug, ThisError)]
pub enum BoardError {
    #[error("{from} 無法{attempt}")]
    IllegalMove { from: Position, attempt: MoveAttempt },
    #[error("{cell:?} 不是士兵顏色")]
    InvalidColor { cell: Cell },
    #[error("棋盤尺寸錯誤: {rows} 列 x {cols} 欄")]
    InvalidBoardShape { rows: Coord, cols: Coord },
    #[error("無效的格子數值 {value} 於 ({x}, {y})")]
    InvalidCell { value: CellCode, x: Coord, y: Coord },
    #[error("棋盤上必須恰好有一顆中子，實際有 {found} 顆")]
    NeutronCount { found: usize },
    #[error("{piece} 不在 {pos}")]
    PieceNotAtPos { piece: PieceKind, pos: Position },
    #[error("應移動 {expected}，卻選了 {found}")]
    NotYourPiece { expected: PieceKind, found: PieceKind },
    #[error("{cell:?} 沒有任何合法移動")]
    NoLegalMove { cell: Cell },
}

/// 非法移動的嘗試內容
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveAttempt {
    Direction(Direction),
    Target(Position),
}

impl std::fmt::Display for MoveAttempt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveAttempt::Direction(direction) => write!(f, "往 {direction} 移動"),
            MoveAttempt::Target(target) => write!(f, "移動到 {target}"),
        }
    }
}

/// 格式載入錯誤
#[derive(Debug, ThisError)]
pub enum LoadError {
    #[error("解析失敗: {0}")]
    ParseError(String),
    #[error("{format} 反序列化失敗: {reason}")]
    DeserializeError { format: String, reason: String },
}

/// 玩家輸入錯誤
#[derive(Debug, ThisError)]
pub enum InputError {
    #[error("玩家結束遊戲")]
    Exit,
    #[error("輸入已關閉")]
    Closed,
    #[error("讀寫失敗: {0}")]
    Io(String),
}

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// 是否為玩家主動結束
    pub fn is_exit(&self) -> bool {
        matches!(self.kind, ErrorKind::Input(InputError::Exit))
    }

    /// 添加錯誤上下文，自動記錄呼叫位置
    #[track_caller]
    pub fn context<C: Into<String>>(mut self, context: C) -> Self {
        let loc = std::panic::Location::caller();
        let msg = format!("{} [{}:{}]", context.into(), loc.file(), loc.line());
        self.contexts.push(msg);
        self
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)?;
        for ctx in &self.contexts {
            write!(f, "\n  {}", ctx)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}

impl<E: Into<ErrorKind>> From<E> for Error {
    fn from(error: E) -> Self {
        Self {
            kind: error.into(),
            contexts: Vec::new(),
        }
    }
}

/// Result 擴展 trait，用於添加錯誤上下文
pub trait Context<T> {
    fn context<C: Into<String>>(self, context: C) -> Result<T>;
}

impl<T> Context<T> for Result<T> {
    #[track_caller]
    fn context<C: Into<String>>(self, context: C) -> Result<T> {
        match self {
            Ok(value) => Ok(value),
            Err(e) => Err(e.context(context)),
        }
    }
}
