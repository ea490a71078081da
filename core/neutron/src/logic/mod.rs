//! 核心遊戲邏輯

pub mod board;
pub mod display;
pub mod game;
pub mod movement;
pub mod piece;
pub mod strategy;
