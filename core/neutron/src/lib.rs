//! Neutron 棋盤遊戲核心函式庫
//!
//! 5x5 棋盤上雙方輪流推動共用的中子與己方士兵，棋子沿直線滑動直到受阻。
//! 包含：
//! - 座標與八方向工具
//! - 棋盤引擎（滑動規則、鄰格查詢、移動執行）
//! - 棋子 handle（士兵與中子共用移動邏輯）
//! - 回合狀態機與勝負判定
//! - 隨機與規則式 AI 策略
//! - TOML 遊戲設定

pub mod domain;
pub mod error;
pub mod loader;
pub mod loader_schema;
pub mod logic;

pub use domain::{alias, constants, core_types};
