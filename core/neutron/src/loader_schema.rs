//! 遊戲設定（TOML）
//!
//! ```toml
//! human_color = "black"
//! first = "human"
//! player_type = "strategy"
//! seed = 42
//! starting_grid = [
//!     [3, 3, 3, 3, 3],
//!     [0, 0, 0, 0, 0],
//!     [0, 0, 1, 0, 0],
//!     [0, 0, 0, 0, 0],
//!     [2, 2, 2, 2, 2],
//! ]
//! ```

use crate::alias::CellCode;
use crate::core_types::Color;
use crate::error::{Context, LoadError, Result};
use crate::logic::board::NeutronBoard;
use crate::logic::strategy::StrategyKind;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// 哪一方先手
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum FirstMover {
    #[default]
    Human,
    Computer,
}

/// 一場遊戲的設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// 人類玩家的顏色，電腦拿另一色
    pub human_color: Color,
    pub first: FirstMover,
    pub player_type: StrategyKind,
    /// 固定亂數種子，方便重現對局
    pub seed: Option<u64>,
    /// 取代標準開局的棋盤（0 空、1 中子、2 白、3 黑）
    pub starting_grid: Option<Vec<Vec<CellCode>>>,
    /// 雙方都由電腦操作
    pub computer_vs_computer: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            human_color: Color::Black,
            first: FirstMover::default(),
            player_type: StrategyKind::default(),
            seed: None,
            starting_grid: None,
            computer_vs_computer: false,
        }
    }
}

impl GameConfig {
    /// 反序列化 TOML 設定
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).map_err(|e| {
            LoadError::DeserializeError {
                format: "game.toml".to_string(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// 電腦玩家的顏色
    pub fn computer_color(&self) -> Color {
        self.human_color.opponent()
    }

    /// 依設定建立棋盤，沒有指定時使用標準開局
    pub fn build_board(&self) -> Result<NeutronBoard> {
        match &self.starting_grid {
            Some(rows) => NeutronBoard::from_grid(rows).context("starting_grid"),
            None => Ok(NeutronBoard::new()),
        }
    }
}
